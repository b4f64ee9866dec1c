use alloc::string::String;

/// Who sits at a player index.
///
/// Only human players are tracked on the scoreboard.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(tag = "kind", rename_all = "lowercase"))]
pub enum Player {
    Human { name: String },
    Computer,
}

impl Player {
    pub fn human(name: impl Into<String>) -> Self {
        Player::Human { name: name.into() }
    }

    /// Scoreboard name, `None` for computer players.
    pub fn name(&self) -> Option<&str> {
        match self {
            Player::Human { name } => Some(name),
            Player::Computer => None,
        }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, Player::Human { .. })
    }
}
