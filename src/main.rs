use std::env;
use std::process;

use minefield::field::Minefield;
use minefield::game_loop;

// board presets lifted from the desktop difficulty menu
fn difficulty(name: &str) -> Option<(usize, usize, usize)> {
    match name {
        "beginner" => Some((8, 10, 7)),
        "easy" => Some((10, 13, 16)),
        "intermediate" => Some((15, 20, 40)),
        "expert" => Some((19, 26, 99)),
        _ => None,
    }
}

fn parse_config(args: &[String]) -> Option<(usize, usize, usize)> {
    match args {
        [] => difficulty("intermediate"),
        [name] => difficulty(name),
        [rows, cols, mines] => {
            let rows = rows.parse().ok()?;
            let cols = cols.parse().ok()?;
            let mines = mines.parse().ok()?;
            Some((rows, cols, mines))
        }
        _ => None,
    }
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let (rows, columns, mines) = match parse_config(&args) {
        Some(config) => config,
        None => {
            eprintln!("usage: minefield [beginner|easy|intermediate|expert]");
            eprintln!("       minefield ROWS COLS MINES");
            process::exit(2);
        }
    };

    let field = match Minefield::new(rows, columns, mines) {
        Ok(field) => field,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(2);
        }
    };

    if let Err(err) = game_loop(field) {
        eprintln!("{}", err);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_args_falls_back_to_intermediate() {
        assert_eq!(parse_config(&strings(&[])), Some((15, 20, 40)));
    }

    #[test]
    fn named_difficulties_resolve() {
        assert_eq!(parse_config(&strings(&["beginner"])), Some((8, 10, 7)));
        assert_eq!(parse_config(&strings(&["expert"])), Some((19, 26, 99)));
        assert_eq!(parse_config(&strings(&["impossible"])), None);
    }

    #[test]
    fn custom_dimensions_parse() {
        assert_eq!(parse_config(&strings(&["6", "7", "8"])), Some((6, 7, 8)));
        assert_eq!(parse_config(&strings(&["6", "x", "8"])), None);
        assert_eq!(parse_config(&strings(&["6", "7", "8", "9"])), None);
    }
}
