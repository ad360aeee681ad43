//! Render/advance loop driving a single board

use crate::config::Settings;
use crate::game_of_life::{load_board_from_file, Board, RuleEngine};
use crate::utils::{BoardFormatter, CLEAR_SCREEN};
use anyhow::{Context, Result};
use std::io::Write;
use std::thread::sleep;
use tracing::{debug, info};

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    GenerationLimit,
    Extinct,
}

/// Outcome of a finished run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub generations: usize,
    pub living_cells: usize,
    pub stop_reason: StopReason,
}

/// Owns the live board and replays it frame by frame
pub struct Simulation {
    settings: Settings,
    board: Board,
    generation: usize,
}

impl Simulation {
    /// Create a simulation from the board file named in the settings
    pub fn new(settings: Settings) -> Result<Self> {
        let board = load_board_from_file(&settings.input.board_file)
            .context("Failed to load board file")?;

        Ok(Self::with_board(settings, board))
    }

    /// Create a simulation around an existing board
    pub fn with_board(settings: Settings, board: Board) -> Self {
        Self {
            settings,
            board,
            generation: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    /// Advance one generation
    pub fn step(&mut self) {
        RuleEngine::advance(&mut self.board);
        self.generation += 1;
    }

    /// Write the current frame
    pub fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.settings.display.clear_screen {
            write!(out, "{CLEAR_SCREEN}")?;
        }
        write!(out, "{}", BoardFormatter::format_board(&self.board, &self.settings.display))?;
        out.flush()?;
        Ok(())
    }

    fn stop_reason(&self) -> Option<StopReason> {
        let sim = &self.settings.simulation;
        if sim.max_generations.is_some_and(|max| self.generation >= max) {
            Some(StopReason::GenerationLimit)
        } else if sim.stop_when_extinct && self.board.is_extinct() {
            Some(StopReason::Extinct)
        } else {
            None
        }
    }

    /// Run render → advance → pause until a stop condition is met.
    ///
    /// Without a generation limit or extinction stop this never returns.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<RunSummary> {
        let interval = self.settings.simulation.frame_interval();
        info!(
            size = self.board.size(),
            living = self.board.living_count(),
            max_generations = ?self.settings.simulation.max_generations,
            "starting simulation"
        );

        let stop_reason = loop {
            self.render(out).context("Failed to render board")?;

            if let Some(reason) = self.stop_reason() {
                break reason;
            }

            self.step();
            debug!(generation = self.generation, living = self.board.living_count(), "advanced");

            if !interval.is_zero() {
                sleep(interval);
            }
        };

        info!(generation = self.generation, reason = ?stop_reason, "simulation stopped");
        Ok(RunSummary {
            generations: self.generation,
            living_cells: self.board.living_count(),
            stop_reason,
        })
    }
}
