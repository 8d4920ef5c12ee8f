use crate::model::{Player, PlayerId};
use thiserror::Error;

/// Mutations accepted by the roster. Views emit these upward; only the
/// navigation shell applies them, which keeps the write path in one place.
#[derive(Debug, Clone, PartialEq)]
pub enum RosterCommand {
    AddPlayer { player: Player },
    UpdatePlayer { player: Player },
    RemovePlayer { player_id: PlayerId },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("no player with id {0}")]
    PlayerNotFound(PlayerId),
    #[error("player with id {0} already registered")]
    DuplicatePlayer(PlayerId),
}
