//! Configuration settings for the terminal Game of Life

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub frame_interval_ms: u64,
    /// Stop after this many generations; run forever when absent
    pub max_generations: Option<usize>,
    pub stop_when_extinct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    pub board_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub save_directory: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub live_glyph: String,
    pub dead_glyph: String,
    pub clear_screen: bool,
}

impl OutputConfig {
    /// Place a bare file name under the save directory; anything with a
    /// directory component is used as given
    pub fn resolve_save_path(&self, path: &Path) -> PathBuf {
        let is_bare_name = path.parent().map_or(true, |parent| parent.as_os_str().is_empty());
        if is_bare_name && path.is_relative() {
            self.save_directory.join(path)
        } else {
            path.to_path_buf()
        }
    }
}

impl SimulationConfig {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                frame_interval_ms: 100,
                max_generations: None,
                stop_when_extinct: false,
            },
            input: InputConfig {
                board_file: PathBuf::from("boards/glider.json"),
            },
            output: OutputConfig {
                save_directory: PathBuf::from("boards"),
            },
            display: DisplayConfig {
                live_glyph: "▣".to_string(),
                dead_glyph: ".".to_string(),
                clear_screen: true,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from `path` if it exists, defaults otherwise
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save settings to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.simulation.max_generations == Some(0) {
            anyhow::bail!("Maximum generations must be positive when set");
        }

        if self.display.live_glyph.is_empty() || self.display.dead_glyph.is_empty() {
            anyhow::bail!("Display glyphs cannot be empty");
        }

        if self.display.live_glyph == self.display.dead_glyph {
            anyhow::bail!("Live and dead glyphs must differ");
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(ref board_file) = cli_overrides.board_file {
            self.input.board_file = board_file.clone();
        }
        if let Some(generations) = cli_overrides.generations {
            self.simulation.max_generations = Some(generations);
        }
        if let Some(interval) = cli_overrides.frame_interval_ms {
            self.simulation.frame_interval_ms = interval;
        }
        if cli_overrides.stop_when_extinct {
            self.simulation.stop_when_extinct = true;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub board_file: Option<PathBuf>,
    pub generations: Option<usize>,
    pub frame_interval_ms: Option<u64>,
    pub stop_when_extinct: bool,
}
