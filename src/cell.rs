#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStatus {
    Flagged = 1 << 0,
    Opened = 1 << 1,
    HasMine = 1 << 2,
}

// adjacent_mines is meaningless once HasMine is set; populate never fills it in
// for mined cells
#[derive(Debug, Clone, Default)]
pub struct Cell {
    adjacent_mines: u8,
    status: u8,
}

impl Cell {
    pub fn new() -> Cell {
        Cell{adjacent_mines: 0, status: 0}
    }

    pub fn adjacent_mine_count(&self) -> u8 {
        self.adjacent_mines
    }

    pub fn set_adjacent_mine_count(&mut self, count: u8) {
        self.adjacent_mines = count;
    }

    pub fn set_status(&mut self, flag: CellStatus) {
        self.status |= flag as u8;
    }

    pub fn clear_status(&mut self, flag: CellStatus) {
        self.status &= !(flag as u8);
    }

    pub fn toggle_status(&mut self, flag: CellStatus) {
        self.status ^= flag as u8;
    }

    pub fn is_status_set(&self, flag: CellStatus) -> bool {
        self.status & flag as u8 != 0
    }

    pub fn reset(&mut self) {
        self.status = 0;
        self.adjacent_mines = 0;
    }
}
