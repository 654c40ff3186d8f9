//! Team and player models.

use serde::{Deserialize, Serialize};

/// A player registered to a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub team_id: i64,
}

/// A team competing in one of the league groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Unique identifier
    pub id: i64,

    /// Team name (editable by admins)
    pub name: String,

    /// Group the team competes in (e.g. "A", "B")
    pub group_name: String,

    /// Registered players
    #[serde(default)]
    pub players: Vec<Player>,
}

impl Team {
    /// Create a new team with no players.
    pub fn new(id: i64, name: impl Into<String>, group_name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            group_name: group_name.into(),
            players: Vec::new(),
        }
    }

    /// Builder method to set the player roster.
    pub fn with_players(mut self, players: Vec<Player>) -> Self {
        self.players = players;
        self
    }
}
