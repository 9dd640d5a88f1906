pub mod cell;
pub mod field;
mod interaction;

use std::cell::RefCell;
use std::rc::Rc;

use field::{Minefield, MinefieldError, MinefieldObserver};
use interaction::ActionType;

#[derive(Default)]
struct SessionState {
    over: bool,
    won: bool,
    mines_left: Option<i32>,
}

struct SessionObserver(Rc<RefCell<SessionState>>);

impl MinefieldObserver for SessionObserver {
    fn mine_display_count_changed(&mut self, count: i32) {
        self.0.borrow_mut().mines_left = Some(count);
    }

    fn game_over(&mut self, won: bool) {
        let mut state = self.0.borrow_mut();
        state.over = true;
        state.won = won;
    }
}

pub fn game_loop(mut field: Minefield) -> Result<(), MinefieldError> {
    let state = Rc::new(RefCell::new(SessionState::default()));
    field.set_observer(Box::new(SessionObserver(state.clone())));

    while !state.borrow().over {
        println!("{}", render(&field)?);
        if let Some(mines_left) = state.borrow().mines_left {
            println!("mines left: {}", mines_left);
        }
        let result = match interaction::get_move() {
            ActionType::Open(row, col) => field.open(row, col),
            ActionType::Flag(row, col) => field.toggle_flag(row, col),
        };
        // moves off the board just get reported and retried
        if let Err(err) = result {
            println!("{}", err);
        }
    }

    println!("{}", render(&field)?);
    if state.borrow().won {
        println!("you win!");
    } else {
        println!("you lose");
    }
    Ok(())
}

fn render(field: &Minefield) -> Result<String, MinefieldError> {
    let mut result = "  ".to_owned();
    for col in 0..field.columns() {
        result += &(col % 10).to_string()[..];
    }
    result += "\n";
    for row in 0..field.rows() {
        result += &(row % 10).to_string()[..];
        result += " ";
        for col in 0..field.columns() {
            result += &cell_str(field, row, col)?[..];
        }
        result += "\n";
    }
    Ok(result)
}

fn cell_str(field: &Minefield, row: usize, col: usize) -> Result<String, MinefieldError> {
    if field.is_flagged(row, col)? {
        return Ok(String::from("▶"));
    }
    if !field.is_opened(row, col)? {
        return Ok(String::from("■"));
    }
    if field.has_mine(row, col)? {
        return Ok(String::from("X"));
    }
    Ok(match field.adjacent_mine_count(row, col)? {
        0 => String::from("_"),
        n => n.to_string(),
    })
}
