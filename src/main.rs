//! Main CLI application for the terminal Game of Life

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use terminal_life::{
    config::{CliOverrides, Settings},
    game_of_life::{create_example_boards, load_board_from_file, save_board_to_file, Board},
    session::{create_board_interactively, CreatedBoard, RunSummary, Simulation, StopReason},
    utils::{BoardFormatter, ColorOutput},
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "terminal_life")]
#[command(about = "Conway's Game of Life in the terminal")]
#[command(version = "0.1.0")]
struct Cli {
    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a saved board
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Board JSON file (overrides config)
        #[arg(short, long)]
        board: Option<PathBuf>,

        /// Stop after this many generations (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Milliseconds between frames (overrides config)
        #[arg(short, long)]
        interval_ms: Option<u64>,

        /// Stop once every cell is dead
        #[arg(long)]
        stop_when_extinct: bool,

        /// Save the final board here when the run ends
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Build a board at the prompt, then play it
    Create {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Stop after this many generations (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Save the new board here instead of asking; bare names go to the save directory
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Create example configuration and board files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Print a board with coordinates and statistics
    Show {
        /// Board JSON file
        #[arg(short, long)]
        board: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Run {
            config,
            board,
            generations,
            interval_ms,
            stop_when_extinct,
            save,
        } => {
            let overrides = CliOverrides {
                board_file: board,
                generations,
                frame_interval_ms: interval_ms,
                stop_when_extinct,
            };
            run_command(config, overrides, save)
        }
        Commands::Create {
            config,
            generations,
            save,
        } => create_command(config, generations, save),
        Commands::Setup { directory, force } => setup_command(directory, force),
        Commands::Show { board } => show_command(board),
    };

    if let Err(err) = result {
        eprintln!("{}", ColorOutput::error(&format!("Error: {err:#}")));
        std::process::exit(1);
    }
}

fn load_settings(config_path: &Path) -> Result<Settings> {
    if !config_path.exists() {
        let message = format!("Config file {} not found, using defaults", config_path.display());
        println!("{}", ColorOutput::warning(&message));
    }
    Settings::load_or_default(config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))
}

fn report_summary(summary: &RunSummary) {
    let reason = match summary.stop_reason {
        StopReason::GenerationLimit => "generation limit reached",
        StopReason::Extinct => "every cell died",
    };
    let message = format!(
        "Stopped after {} generation(s), {} living cell(s): {}",
        summary.generations, summary.living_cells, reason
    );
    println!("{}", ColorOutput::success(&message));
}

fn run_command(config_path: PathBuf, overrides: CliOverrides, save: Option<PathBuf>) -> Result<()> {
    let mut settings = load_settings(&config_path)?;
    settings.merge_with_cli(&overrides);
    settings.validate().context("Configuration validation failed")?;

    let save_path = save.map(|path| settings.output.resolve_save_path(&path));
    let mut simulation = Simulation::new(settings).context("Failed to start simulation")?;
    let summary = simulation.run(&mut std::io::stdout().lock())?;
    report_summary(&summary);

    if let Some(path) = save_path {
        save_board_to_file(simulation.board(), &path).context("Failed to save final board")?;
        println!("{}", ColorOutput::success(&format!("Board saved to {}", path.display())));
    }

    Ok(())
}

/// Save a freshly created board if a path was given; a failed save is
/// reported but does not stop the run
fn save_created_board(settings: &Settings, created: &CreatedBoard) -> Option<PathBuf> {
    let path = settings.output.resolve_save_path(created.save_path.as_deref()?);

    match save_board_to_file(&created.board, &path) {
        Ok(()) => {
            println!("{}", ColorOutput::success(&format!("Board saved to {}", path.display())));
            Some(path)
        }
        Err(err) => {
            warn!(path = %path.display(), "failed to save created board");
            println!("{}", ColorOutput::error(&format!("Board not saved: {err:#}")));
            None
        }
    }
}

fn create_command(
    config_path: PathBuf,
    generations: Option<usize>,
    save: Option<PathBuf>,
) -> Result<()> {
    let mut settings = load_settings(&config_path)?;
    settings.merge_with_cli(&CliOverrides {
        generations,
        ..CliOverrides::default()
    });
    settings.validate().context("Configuration validation failed")?;

    let created = create_board_interactively(
        &mut std::io::stdin().lock(),
        &mut std::io::stdout(),
        &settings.display,
        save,
    )?;
    save_created_board(&settings, &created);

    info!(size = created.board.size(), living = created.board.living_count(), "created board");
    let mut simulation = Simulation::with_board(settings, created.board);
    let summary = simulation.run(&mut std::io::stdout().lock())?;
    report_summary(&summary);

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let defaults = Settings::default();
    let config_dir = directory.join("config");
    let boards_dir = directory.join(&defaults.output.save_directory);

    for dir in [&config_dir, &boards_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        defaults.to_file(&config_path).context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_boards(&boards_dir).context("Failed to create example boards")?;
    println!("Created example boards in: {}", boards_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit {}", config_path.display());
    println!("2. Run: cargo run -- run --board {}", boards_dir.join("glider.json").display());

    Ok(())
}

fn show_command(board_path: PathBuf) -> Result<()> {
    let board: Board = load_board_from_file(&board_path)?;

    println!("{}", ColorOutput::info(&format!("{}:", board_path.display())));
    println!("{}", BoardFormatter::format_board_with_coords(&board));
    println!("{}", BoardFormatter::format_statistics(&board));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "terminal_life",
            "run",
            "--board",
            "boards/blinker.json",
            "--generations",
            "5",
            "--stop-when-extinct",
        ]);

        assert!(cli.is_ok());
        assert!(Cli::try_parse_from(["terminal_life", "show"]).is_err());
    }

    #[test]
    fn test_create_accepts_save_path() {
        let cli = Cli::try_parse_from(["terminal_life", "create", "--save", "mine.json"]).unwrap();
        match cli.command {
            Commands::Create { save, .. } => assert_eq!(save, Some(PathBuf::from("mine.json"))),
            _ => panic!("expected the create subcommand"),
        }
    }

    #[test]
    fn test_created_board_lands_in_save_directory() {
        let temp_dir = tempdir().unwrap();
        let mut settings = Settings::default();
        settings.output.save_directory = temp_dir.path().join("saved");

        let mut board = Board::blank(3).unwrap();
        board.set(1, 1, true).unwrap();
        let created = CreatedBoard {
            board: board.clone(),
            save_path: Some(PathBuf::from("mine.json")),
        };

        let path = save_created_board(&settings, &created).unwrap();
        assert_eq!(path, temp_dir.path().join("saved/mine.json"));
        assert_eq!(load_board_from_file(&path).unwrap(), board);

        let unsaved = CreatedBoard {
            board,
            save_path: None,
        };
        assert_eq!(save_created_board(&settings, &unsaved), None);
    }

    #[test]
    fn test_failed_save_does_not_abort() {
        let temp_dir = tempdir().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let mut settings = Settings::default();
        settings.output.save_directory = blocker.join("nested");
        let created = CreatedBoard {
            board: Board::blank(2).unwrap(),
            save_path: Some(PathBuf::from("mine.json")),
        };

        assert_eq!(save_created_board(&settings, &created), None);
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        setup_command(temp_dir.path().to_path_buf(), false).unwrap();

        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("boards/glider.json").exists());
        assert!(Settings::from_file(temp_dir.path().join("config/default.yaml")).is_ok());
    }

    #[test]
    fn test_run_command_saves_final_board() {
        let temp_dir = tempdir().unwrap();
        setup_command(temp_dir.path().to_path_buf(), false).unwrap();

        let config_path = temp_dir.path().join("config/default.yaml");
        let mut settings = Settings::from_file(&config_path).unwrap();
        settings.display.clear_screen = false;
        settings.to_file(&config_path).unwrap();

        let save_path = temp_dir.path().join("out/blinker_after.json");
        let overrides = CliOverrides {
            board_file: Some(temp_dir.path().join("boards/blinker.json")),
            generations: Some(1),
            frame_interval_ms: Some(0),
            stop_when_extinct: false,
        };
        run_command(config_path, overrides, Some(save_path.clone())).unwrap();

        let saved = load_board_from_file(&save_path).unwrap();
        assert_eq!(saved.living_cells(), vec![(1, 2), (2, 2), (3, 2)]);
    }
}
