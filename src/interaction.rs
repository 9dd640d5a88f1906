use regex::Regex;
use std::io;

pub enum ActionType {
    Open(usize, usize),
    Flag(usize, usize),
}

pub fn get_move() -> ActionType {
    loop {
        println!("Please input your move: TYPE ROW COL");
        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            continue;
        }
        match action_from_string(&input) {
            Some(action) => return action,
            None => println!("Must be of the form: open ROW COL or flag ROW COL"),
        }
    }
}

fn action_from_string(input: &str) -> Option<ActionType> {
    let re = Regex::new(r"(open|flag)\s+(\d+)\s+(\d+)").unwrap();
    let cap = re.captures_iter(input).next()?;
    let row: usize = cap[2].parse().ok()?;
    let col: usize = cap[3].parse().ok()?;
    match &cap[1] {
        "open" => Some(ActionType::Open(row, col)),
        "flag" => Some(ActionType::Flag(row, col)),
        _ => None,
    }
}
