//! Game of Life rules engine

use super::Board;

/// What happens to a single cell between two generations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fate {
    Dies,
    Born,
    Unchanged,
}

/// Conway's B3/S23 rules applied to a [`Board`] in place
pub struct RuleEngine;

impl RuleEngine {
    /// Advance the board by one generation.
    ///
    /// Every cell is classified against the current state first, then all
    /// changes are committed together, so no update can leak into a
    /// neighbor count of the same generation.
    pub fn advance(board: &mut Board) {
        let pending: Vec<(usize, usize, bool)> = board
            .rows()
            .enumerate()
            .flat_map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(move |(col, &alive)| (row, col, alive))
            })
            .filter_map(|(row, col, alive)| {
                match Self::classify(alive, board.count_neighbors(row, col)) {
                    Fate::Dies => Some((row, col, false)),
                    Fate::Born => Some((row, col, true)),
                    Fate::Unchanged => None,
                }
            })
            .collect();

        for (row, col, value) in pending {
            board.commit(row, col, value);
        }
    }

    /// Advance the board for multiple generations
    pub fn advance_generations(board: &mut Board, generations: usize) {
        for _ in 0..generations {
            Self::advance(board);
        }
    }

    /// Classify a cell given its current state and neighbor count
    pub fn classify(alive: bool, neighbor_count: u8) -> Fate {
        match (alive, neighbor_count) {
            (true, 2) | (true, 3) => Fate::Unchanged,
            (true, _) => Fate::Dies,
            (false, 3) => Fate::Born,
            (false, _) => Fate::Unchanged,
        }
    }

    /// Whether a cell is alive next generation, given its state and neighbor count
    pub fn should_be_alive(alive: bool, neighbor_count: u8) -> bool {
        match Self::classify(alive, neighbor_count) {
            Fate::Born => true,
            Fate::Dies => false,
            Fate::Unchanged => alive,
        }
    }
}
