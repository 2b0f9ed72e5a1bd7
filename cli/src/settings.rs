use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use parlor_core::blackjack::BlackjackConfig;
use parlor_core::minesweeper::MinesweeperConfig;
use serde::{Deserialize, Serialize};

/// Contents of the optional `--config` TOML file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub blackjack: BlackjackConfig,
    pub minesweeper: MinesweeperConfig,
    pub ledger_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            blackjack: BlackjackConfig::default(),
            minesweeper: MinesweeperConfig::default(),
            ledger_path: PathBuf::from("players.csv"),
        }
    }
}

impl Settings {
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("Could not read config {}", path.display()))?;
        let settings = Self::parse(&text)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        log::debug!("Loaded settings from {}: {:?}", path.display(), settings);
        Ok(settings)
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
