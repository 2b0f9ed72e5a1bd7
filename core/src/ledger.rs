//! Player records keyed by id, stored as `id,wins,chips` lines.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{fs, io};

use thiserror::Error;

use crate::blackjack::Bankroll;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Ledger I/O failed: {0}")]
    Io(#[from] io::Error),
    /// Empty, padded with spaces, or holding a comma or control character.
    #[error("Invalid player id {0:?}")]
    InvalidId(String),
}

/// Checks that `id` survives the `id,wins,chips` line format unchanged.
pub fn validate_player_id(id: &str) -> Result<&str, LedgerError> {
    let storable = !id.is_empty()
        && id.trim() == id
        && !id.chars().any(|ch| ch == ',' || ch.is_control());
    if storable {
        Ok(id)
    } else {
        Err(LedgerError::InvalidId(id.to_owned()))
    }
}

pub trait PlayerLedger {
    /// The stored record for `id`, if any.
    fn load(&self, id: &str) -> Result<Option<Bankroll>, LedgerError>;

    /// Inserts or replaces the record for `id`.
    fn save(&mut self, id: &str, bankroll: &Bankroll) -> Result<(), LedgerError>;
}

/// Looks up `id`, falling back to `default` when the record is missing or the
/// store cannot be read.
pub fn load_or_default<L: PlayerLedger + ?Sized>(
    ledger: &L,
    id: &str,
    default: Bankroll,
) -> Bankroll {
    match ledger.load(id) {
        Ok(Some(bankroll)) => {
            log::debug!("Loaded player {:?}: {:?}", id, bankroll);
            bankroll
        }
        Ok(None) => {
            log::debug!("New player {:?}", id);
            default
        }
        Err(err) => {
            log::warn!("Could not read ledger, starting {:?} fresh: {}", id, err);
            default
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryLedger {
    records: HashMap<String, Bankroll>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl PlayerLedger for MemoryLedger {
    fn load(&self, id: &str) -> Result<Option<Bankroll>, LedgerError> {
        Ok(self.records.get(id).copied())
    }

    fn save(&mut self, id: &str, bankroll: &Bankroll) -> Result<(), LedgerError> {
        self.records.insert(id.to_owned(), *bankroll);
        Ok(())
    }
}

/// Ledger backed by a comma-separated text file.
///
/// Lines that do not parse are skipped on lookup but kept when the file is
/// rewritten.
#[derive(Clone, Debug)]
pub struct CsvLedger {
    path: PathBuf,
}

impl CsvLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File contents, or nothing if the file does not exist yet.
    fn read(&self) -> io::Result<String> {
        match fs::read_to_string(&self.path) {
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(String::new()),
            result => result,
        }
    }
}

fn parse_record(line: &str) -> Option<(&str, Bankroll)> {
    let mut fields = line.split(',').map(str::trim);
    let id = fields.next()?;
    let hands_won = fields.next()?.parse().ok()?;
    let total_chips = fields.next()?.parse().ok()?;
    Some((id, Bankroll::new(hands_won, total_chips)))
}

fn format_record(id: &str, bankroll: &Bankroll) -> String {
    format!("{},{},{}", id, bankroll.hands_won, bankroll.total_chips)
}

impl PlayerLedger for CsvLedger {
    fn load(&self, id: &str) -> Result<Option<Bankroll>, LedgerError> {
        let contents = self.read()?;
        Ok(contents
            .lines()
            .filter_map(parse_record)
            .find(|(record_id, _)| *record_id == id)
            .map(|(_, bankroll)| bankroll))
    }

    fn save(&mut self, id: &str, bankroll: &Bankroll) -> Result<(), LedgerError> {
        let id = validate_player_id(id)?;
        let contents = self.read()?;
        let mut replaced = false;
        let mut lines: Vec<String> = contents
            .lines()
            .map(|line| {
                if !replaced && parse_record(line).is_some_and(|(record_id, _)| record_id == id) {
                    replaced = true;
                    format_record(id, bankroll)
                } else {
                    line.to_owned()
                }
            })
            .collect();
        if !replaced {
            lines.push(format_record(id, bankroll));
        }

        let mut output = lines.join("\n");
        output.push('\n');
        fs::write(&self.path, output)?;
        log::debug!("Saved player {:?} to {}", id, self.path.display());
        Ok(())
    }
}
