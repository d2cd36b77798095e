use crate::evaluator::{score, Classification};
use crate::game::{Game, Outcome};
use crate::gating::Gates;
use crate::keyboard::{aggregate, KeyboardHints};
use crate::word::WORD_LENGTH;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState {
    Exact,
    Present,
    Absent,
    /// typed into the active row, not scored yet
    Pending,
    Unset,
}

impl From<Classification> for CellState {
    fn from(class: Classification) -> Self {
        match class {
            Classification::Exact => CellState::Exact,
            Classification::Present => CellState::Present,
            Classification::Absent => CellState::Absent,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub letter: Option<char>,
    pub state: CellState,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            letter: None,
            state: CellState::Unset,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowView {
    pub cells: [Cell; WORD_LENGTH],
    pub frozen: bool,
    pub active: bool,
}

/// Read-only picture of a game, rebuilt after every operation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub rows: Vec<RowView>,
    pub keyboard: KeyboardHints,
    pub gates: Gates,
    /// one-based, may run past the grid once the game is over
    pub active_row: usize,
    pub outcome: Option<Outcome>,
}

impl Snapshot {
    pub fn capture(game: &Game) -> Self {
        let secret = game.secret();
        let rows = game
            .rows()
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                let frozen = game.is_submitted(idx);
                let mut cells = [Cell::default(); WORD_LENGTH];
                if frozen {
                    let classes = score(secret, row.as_str());
                    for ((cell, letter), class) in
                        cells.iter_mut().zip(row.as_str().chars()).zip(classes)
                    {
                        *cell = Cell {
                            letter: Some(letter),
                            state: class.into(),
                        };
                    }
                } else {
                    for (cell, letter) in cells.iter_mut().zip(row.as_str().chars()) {
                        *cell = Cell {
                            letter: Some(letter),
                            state: CellState::Pending,
                        };
                    }
                }
                RowView {
                    cells,
                    frozen,
                    active: !game.is_over() && idx == game.active_row(),
                }
            })
            .collect();

        Self {
            rows,
            keyboard: aggregate(secret, game.submitted()),
            gates: Gates::project(game),
            active_row: game.active_row() + 1,
            outcome: game.outcome(),
        }
    }

    pub fn guesses_used(&self) -> usize {
        self.rows.iter().filter(|r| r.frozen).count()
    }
}
