#![cfg(feature = "std")]

//! Persistent scoreboard of human players.
//!
//! The stored form is a single JSON document `{"list": [...]}` under one
//! well-known key. Before a result is recorded, the in-memory board is
//! reconciled with what is stored by taking the maximum of every counter,
//! so writes from stale copies never count a game twice.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::GameEngine;
use crate::player::Player;

/// Key the scoreboard is stored under.
pub const SCOREBOARD_KEY: &str = "battleship.scoreboard";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ScoreboardEntry {
    pub player_name: String,
    pub total_score: u64,
    pub games_won: u64,
    pub games_lost: u64,
}

impl ScoreboardEntry {
    fn max_with(&mut self, other: &ScoreboardEntry) {
        self.total_score = self.total_score.max(other.total_score);
        self.games_won = self.games_won.max(other.games_won);
        self.games_lost = self.games_lost.max(other.games_lost);
    }

    fn add(&mut self, other: &ScoreboardEntry) {
        self.total_score = self.total_score.saturating_add(other.total_score);
        self.games_won = self.games_won.saturating_add(other.games_won);
        self.games_lost = self.games_lost.saturating_add(other.games_lost);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scoreboard {
    pub list: Vec<ScoreboardEntry>,
}

#[derive(Debug)]
pub enum ScoreboardError {
    /// Stored data is not a valid scoreboard.
    Malformed(String),
    Io(io::Error),
}

impl fmt::Display for ScoreboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreboardError::Malformed(e) => write!(f, "Malformed scoreboard data: {}", e),
            ScoreboardError::Io(e) => write!(f, "Scoreboard storage error: {}", e),
        }
    }
}

impl std::error::Error for ScoreboardError {}

impl From<io::Error> for ScoreboardError {
    fn from(err: io::Error) -> Self {
        ScoreboardError::Io(err)
    }
}

/// Raw storage for the serialized scoreboard.
pub trait ScoreboardStore {
    /// Stored document, `None` if nothing was saved yet.
    fn read(&self) -> Result<Option<String>, ScoreboardError>;
    fn write(&mut self, data: &str) -> Result<(), ScoreboardError>;
}

/// Scoreboard kept in a JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the well-known file name inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(format!("{}.json", SCOREBOARD_KEY)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreboardStore for FileStore {
    fn read(&self) -> Result<Option<String>, ScoreboardError> {
        match fs::read_to_string(&self.path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, data: &str) -> Result<(), ScoreboardError> {
        fs::write(&self.path, data)?;
        Ok(())
    }
}

/// Scoreboard kept in memory; handy for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(data: impl Into<String>) -> Self {
        Self {
            data: Some(data.into()),
        }
    }

    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }
}

impl ScoreboardStore for MemoryStore {
    fn read(&self) -> Result<Option<String>, ScoreboardError> {
        Ok(self.data.clone())
    }

    fn write(&mut self, data: &str) -> Result<(), ScoreboardError> {
        self.data = Some(data.to_string());
        Ok(())
    }
}

/// Final score of one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerScore {
    pub player: Player,
    pub score: u32,
}

/// Outcome of a finished game as recorded on the scoreboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub winner: usize,
    pub players: [PlayerScore; 2],
}

impl GameResult {
    /// Result of `engine`, if it is finished.
    pub fn from_engine(engine: &GameEngine, players: &[Player; 2]) -> Option<Self> {
        let winner = engine.winner()?;
        let states = engine.players();
        Some(GameResult {
            winner,
            players: [
                PlayerScore {
                    player: players[0].clone(),
                    score: states[0].score,
                },
                PlayerScore {
                    player: players[1].clone(),
                    score: states[1].score,
                },
            ],
        })
    }
}

impl Scoreboard {
    /// Parse a stored document.
    pub fn parse(raw: &str) -> Result<Self, ScoreboardError> {
        serde_json::from_str(raw).map_err(|e| ScoreboardError::Malformed(e.to_string()))
    }

    /// Read the stored scoreboard. Missing, unreadable or malformed data
    /// yields an empty scoreboard.
    pub fn load<S: ScoreboardStore + ?Sized>(store: &S) -> Self {
        let raw = match store.read() {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::default(),
            Err(e) => {
                log::error!("{}. Returning empty scoreboard...", e);
                return Self::default();
            }
        };
        Self::parse(&raw).unwrap_or_else(|e| {
            log::error!(
                "Invalid scoreboard found: {:?} ({}). Returning empty scoreboard...",
                raw,
                e
            );
            Self::default()
        })
    }

    pub fn save<S: ScoreboardStore + ?Sized>(&self, store: &mut S) -> Result<(), ScoreboardError> {
        let data =
            serde_json::to_string(self).map_err(|e| ScoreboardError::Malformed(e.to_string()))?;
        store.write(&data)
    }

    pub fn entry(&self, player_name: &str) -> Option<&ScoreboardEntry> {
        self.list.iter().find(|e| e.player_name == player_name)
    }

    /// Merge with a stored copy: the maximum of each counter per name.
    /// Names found on only one side are kept as they are.
    pub fn reconcile(&mut self, saved: &Scoreboard) {
        let mut saved = merged_by_name(&saved.list);
        let mut list = merged_by_name(&self.list);
        for entry in list.iter_mut() {
            if let Some(pos) = saved.iter().position(|s| s.player_name == entry.player_name) {
                entry.max_with(&saved.remove(pos));
            }
        }
        list.extend(saved);
        self.list = list;
    }

    /// Count one game for each human player in `result`.
    pub fn record(&mut self, result: &GameResult) {
        for (index, score) in result.players.iter().enumerate() {
            let Some(name) = score.player.name() else {
                continue;
            };
            let won = index == result.winner;
            match self.list.iter_mut().find(|e| e.player_name == name) {
                Some(entry) => {
                    if won {
                        entry.games_won = entry.games_won.saturating_add(1);
                    } else {
                        entry.games_lost = entry.games_lost.saturating_add(1);
                    }
                    entry.total_score = entry.total_score.saturating_add(u64::from(score.score));
                }
                None => self.list.push(ScoreboardEntry {
                    player_name: name.to_string(),
                    total_score: u64::from(score.score),
                    games_won: u64::from(won),
                    games_lost: u64::from(!won),
                }),
            }
        }
    }

    /// Reconcile with `store`, record `result` and persist.
    pub fn add_game_result<S: ScoreboardStore + ?Sized>(
        &mut self,
        result: &GameResult,
        store: &mut S,
    ) -> Result<(), ScoreboardError> {
        let saved = Self::load(store);
        self.reconcile(&saved);
        self.record(result);
        log::info!("scoreboard updated, winner index {}", result.winner);
        self.save(store)
    }

    /// Drop every entry and persist the empty scoreboard.
    pub fn clear<S: ScoreboardStore + ?Sized>(
        &mut self,
        store: &mut S,
    ) -> Result<(), ScoreboardError> {
        self.list.clear();
        self.save(store)
    }

    /// Entries by total score, then wins (both descending), then losses.
    pub fn ranked(&self) -> Vec<&ScoreboardEntry> {
        let mut ranked: Vec<_> = self.list.iter().collect();
        ranked.sort_by(|a, b| compare_entries_desc(a, b));
        ranked
    }
}

fn compare_entries_desc(a: &ScoreboardEntry, b: &ScoreboardEntry) -> Ordering {
    b.total_score
        .cmp(&a.total_score)
        .then(b.games_won.cmp(&a.games_won))
        .then(a.games_lost.cmp(&b.games_lost))
}

/// Collapse duplicate names by summing, keeping first-seen order.
fn merged_by_name(list: &[ScoreboardEntry]) -> Vec<ScoreboardEntry> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut merged: Vec<ScoreboardEntry> = Vec::new();
    for entry in list {
        match index.get(entry.player_name.as_str()) {
            Some(&i) => merged[i].add(entry),
            None => {
                index.insert(&entry.player_name, merged.len());
                merged.push(entry.clone());
            }
        }
    }
    merged
}

/// Submits each finished game at most once, keyed by game id.
#[derive(Debug, Clone, Default)]
pub struct ScoreboardReporter {
    last_game_id: Option<u64>,
}

impl ScoreboardReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_game_id(&self) -> Option<u64> {
        self.last_game_id
    }

    /// Record `engine`'s result if it is finished and not yet submitted.
    /// Returns whether anything was recorded.
    pub fn submit<S: ScoreboardStore + ?Sized>(
        &mut self,
        engine: &GameEngine,
        players: &[Player; 2],
        scoreboard: &mut Scoreboard,
        store: &mut S,
    ) -> Result<bool, ScoreboardError> {
        if self.last_game_id.is_some_and(|last| engine.game_id() <= last) {
            return Ok(false);
        }
        let Some(result) = GameResult::from_engine(engine, players) else {
            return Ok(false);
        };
        scoreboard.add_game_result(&result, store)?;
        self.last_game_id = Some(engine.game_id());
        Ok(true)
    }
}
