use std::error;
use std::fmt;

use itertools::iproduct;
use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::cell::{Cell, CellStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinefieldError {
    InvalidConfiguration,
    OutOfRange(usize, usize),
}

impl fmt::Display for MinefieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinefieldError::InvalidConfiguration => {
                write!(f, "minefield needs positive dimensions and fewer mines than cells")
            }
            MinefieldError::OutOfRange(row, col) => {
                write!(f, "cell ({}, {}) is outside the minefield", row, col)
            }
        }
    }
}

impl error::Error for MinefieldError {}

/// Callbacks the view layer registers to hear about board mutations.
/// All of them are invoked inline, before the mutating call returns.
pub trait MinefieldObserver {
    fn cell_changed(&mut self, _row: usize, _col: usize) {}
    fn mine_display_count_changed(&mut self, _count: i32) {}
    fn game_over(&mut self, _won: bool) {}
}

pub struct Minefield {
    rows: usize,
    columns: usize,
    mine_count: usize,
    mine_display_count: i32,
    closed_count: usize,
    mines_placed: bool,
    cells: Vec<Vec<Cell>>,
    observer: Option<Box<dyn MinefieldObserver>>,
}

impl fmt::Debug for Minefield {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Minefield")
            .field("rows", &self.rows)
            .field("columns", &self.columns)
            .field("mine_count", &self.mine_count)
            .field("mine_display_count", &self.mine_display_count)
            .field("closed_count", &self.closed_count)
            .field("mines_placed", &self.mines_placed)
            .field("cells", &self.cells)
            .finish()
    }
}

impl Minefield {
    pub fn new(rows: usize, columns: usize, mine_count: usize) -> Result<Minefield, MinefieldError> {
        // at least one cell has to stay safe
        if rows == 0 || columns == 0 || mine_count >= rows * columns {
            return Err(MinefieldError::InvalidConfiguration);
        }
        Ok(Minefield{
            rows,
            columns,
            mine_count,
            mine_display_count: mine_count as i32,
            closed_count: rows * columns,
            mines_placed: false,
            cells: vec![vec![Cell::new(); columns]; rows],
            observer: None,
        })
    }

    pub fn set_observer(&mut self, observer: Box<dyn MinefieldObserver>) {
        self.observer = Some(observer);
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn mine_count(&self) -> usize {
        self.mine_count
    }

    pub fn mine_display_count(&self) -> i32 {
        self.mine_display_count
    }

    pub fn closed_count(&self) -> usize {
        self.closed_count
    }

    pub fn mines_placed(&self) -> bool {
        self.mines_placed
    }

    pub fn is_opened(&self, row: usize, col: usize) -> Result<bool, MinefieldError> {
        self.check_bounds(row, col)?;
        Ok(self.cells[row][col].is_status_set(CellStatus::Opened))
    }

    pub fn is_flagged(&self, row: usize, col: usize) -> Result<bool, MinefieldError> {
        self.check_bounds(row, col)?;
        Ok(self.cells[row][col].is_status_set(CellStatus::Flagged))
    }

    pub fn has_mine(&self, row: usize, col: usize) -> Result<bool, MinefieldError> {
        self.check_bounds(row, col)?;
        Ok(self.cells[row][col].is_status_set(CellStatus::HasMine))
    }

    pub fn adjacent_mine_count(&self, row: usize, col: usize) -> Result<u8, MinefieldError> {
        self.check_bounds(row, col)?;
        Ok(self.cells[row][col].adjacent_mine_count())
    }

    pub fn count_neighbors_with_status(
        &self,
        row: usize,
        col: usize,
        status: CellStatus,
    ) -> Result<usize, MinefieldError> {
        self.check_bounds(row, col)?;
        Ok(self.count_status_near(row, col, status))
    }

    /// Places mines at `mine_count` distinct random cells, never on the
    /// excluded cell, then fills in adjacency counts. Normally runs lazily on
    /// the first open; exposed so tests and hosts can trigger it directly.
    pub fn populate(&mut self, excluded_row: usize, excluded_col: usize) -> Result<(), MinefieldError> {
        self.check_bounds(excluded_row, excluded_col)?;
        let excluded = excluded_row * self.columns + excluded_col;

        let mut indices: Vec<usize> = (0..self.rows * self.columns).collect();
        indices.shuffle(&mut thread_rng());

        // first mine_count shuffled indices get mines, walking one entry
        // further whenever the excluded cell comes up
        let mut placed = 0;
        for &index in indices.iter() {
            if placed == self.mine_count {
                break;
            }
            if index == excluded {
                continue;
            }
            self.cells[index / self.columns][index % self.columns].set_status(CellStatus::HasMine);
            placed += 1;
        }

        for (row, col) in iproduct!(0..self.rows, 0..self.columns) {
            if !self.cells[row][col].is_status_set(CellStatus::HasMine) {
                let near = self.count_status_near(row, col, CellStatus::HasMine);
                self.cells[row][col].set_adjacent_mine_count(near as u8);
            }
        }
        self.mines_placed = true;
        Ok(())
    }

    pub fn toggle_flag(&mut self, row: usize, col: usize) -> Result<(), MinefieldError> {
        self.check_bounds(row, col)?;
        if self.cells[row][col].is_status_set(CellStatus::Opened) {
            return Ok(());
        }

        if self.cells[row][col].is_status_set(CellStatus::Flagged) {
            self.cells[row][col].clear_status(CellStatus::Flagged);
            self.mine_display_count += 1;
        } else {
            self.cells[row][col].set_status(CellStatus::Flagged);
            self.mine_display_count -= 1;
        }

        let count = self.mine_display_count;
        self.emit_mine_display_count_changed(count);
        self.emit_cell_changed(row, col);
        Ok(())
    }

    pub fn open(&mut self, row: usize, col: usize) -> Result<(), MinefieldError> {
        self.check_bounds(row, col)?;
        if self.cells[row][col].is_status_set(CellStatus::Flagged) {
            return Ok(());
        }

        // the first effective open decides the layout, with itself kept safe
        if !self.mines_placed {
            self.populate(row, col)?;
        }

        if !self.cells[row][col].is_status_set(CellStatus::Opened) {
            self.closed_count -= 1;
        }
        self.cells[row][col].set_status(CellStatus::Opened);
        self.emit_cell_changed(row, col);

        if self.cells[row][col].is_status_set(CellStatus::HasMine) {
            self.emit_game_over(false);
            return Ok(());
        }
        self.flood_fill(row, col);

        if self.closed_count == self.mine_count {
            self.emit_game_over(true);
        }
        Ok(())
    }

    // reveals the connected zero-adjacency region around (row, col), stopping
    // at numbered cells; also fires as a chord when the flagged neighbors
    // match the mined neighbors. Wrong flags are not re-checked, so a chord
    // can still walk into a mine and lose.
    fn flood_fill(&mut self, row: usize, col: usize) {
        let mines_near = self.count_status_near(row, col, CellStatus::HasMine);
        let flags_near = self.count_status_near(row, col, CellStatus::Flagged);
        if self.cells[row][col].adjacent_mine_count() != 0 && mines_near != flags_near {
            return;
        }

        let mut dfs = vec![(row, col)];
        while let Some((cur_row, cur_col)) = dfs.pop() {
            for (r, c) in self.neighborhood(cur_row, cur_col) {
                if self.cells[r][c].is_status_set(CellStatus::Flagged)
                    || self.cells[r][c].is_status_set(CellStatus::Opened)
                {
                    continue;
                }

                self.cells[r][c].set_status(CellStatus::Opened);
                self.closed_count -= 1;
                self.emit_cell_changed(r, c);

                if self.cells[r][c].is_status_set(CellStatus::HasMine) {
                    self.emit_game_over(false);
                    return;
                }
                if self.cells[r][c].adjacent_mine_count() == 0 {
                    dfs.push((r, c));
                }
            }
        }
    }

    // the full in-bounds 3x3 square around (row, col), center included; the
    // center never matters to callers since its own status can't qualify
    fn neighborhood(&self, row: usize, col: usize) -> Vec<(usize, usize)> {
        iproduct!(-1i64..=1, -1i64..=1)
            .map(|(dr, dc)| (row as i64 + dr, col as i64 + dc))
            .filter(|&(r, c)| {
                r >= 0 && c >= 0 && (r as usize) < self.rows && (c as usize) < self.columns
            })
            .map(|(r, c)| (r as usize, c as usize))
            .collect()
    }

    fn count_status_near(&self, row: usize, col: usize, status: CellStatus) -> usize {
        self.neighborhood(row, col)
            .into_iter()
            .filter(|&(r, c)| self.cells[r][c].is_status_set(status))
            .count()
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), MinefieldError> {
        if row < self.rows && col < self.columns {
            Ok(())
        } else {
            Err(MinefieldError::OutOfRange(row, col))
        }
    }

    fn emit_cell_changed(&mut self, row: usize, col: usize) {
        if let Some(observer) = self.observer.as_mut() {
            observer.cell_changed(row, col);
        }
    }

    fn emit_mine_display_count_changed(&mut self, count: i32) {
        if let Some(observer) = self.observer.as_mut() {
            observer.mine_display_count_changed(count);
        }
    }

    fn emit_game_over(&mut self, won: bool) {
        if let Some(observer) = self.observer.as_mut() {
            observer.game_over(won);
        }
    }
}

#[cfg(test)]
use proptest::prelude::*;
