use crate::model::{Position, MONTHS_PER_YEAR};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type PlayerId = Uuid;

/// The four per-player counters tracked over a season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    Matches,
    Goals,
    Assists,
    Absences,
}

impl StatKind {
    pub const ALL: [StatKind; 4] = [
        StatKind::Matches,
        StatKind::Goals,
        StatKind::Assists,
        StatKind::Absences,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatKind::Matches => "Matches",
            StatKind::Goals => "Goals",
            StatKind::Assists => "Assists",
            StatKind::Absences => "Absences",
        }
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerStats {
    pub matches: u32,
    pub goals: u32,
    pub assists: u32,
    pub absences: u32,
}

impl PlayerStats {
    pub fn get(&self, kind: StatKind) -> u32 {
        match kind {
            StatKind::Matches => self.matches,
            StatKind::Goals => self.goals,
            StatKind::Assists => self.assists,
            StatKind::Absences => self.absences,
        }
    }

    pub fn increment(&mut self, kind: StatKind) {
        self.set(kind, self.get(kind).saturating_add(1));
    }

    /// Decrements clamp at zero; counters are never negative.
    pub fn decrement(&mut self, kind: StatKind) {
        self.set(kind, self.get(kind).saturating_sub(1));
    }

    fn set(&mut self, kind: StatKind, value: u32) {
        match kind {
            StatKind::Matches => self.matches = value,
            StatKind::Goals => self.goals = value,
            StatKind::Assists => self.assists = value,
            StatKind::Absences => self.absences = value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub position: Position,
    /// Empty means "render the deterministic placeholder keyed by id".
    pub photo_url: String,
    pub stats: PlayerStats,
    pub payments: [bool; MONTHS_PER_YEAR],
}

impl Player {
    pub fn new() -> Self {
        Player {
            id: Uuid::new_v4(),
            name: String::new(),
            position: Position::default(),
            photo_url: String::new(),
            stats: PlayerStats::default(),
            payments: [false; MONTHS_PER_YEAR],
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_starts_blank() {
        let player = Player::new();
        assert!(player.name.is_empty());
        assert!(player.photo_url.is_empty());
        assert_eq!(player.stats, PlayerStats::default());
        assert_eq!(player.payments, [false; MONTHS_PER_YEAR]);
    }

    #[test]
    fn fresh_ids_are_unique() {
        assert_ne!(Player::new().id, Player::new().id);
    }

    #[test]
    fn decrement_clamps_at_zero() {
        let mut stats = PlayerStats::default();
        for kind in StatKind::ALL {
            stats.decrement(kind);
            assert_eq!(stats.get(kind), 0);
        }
    }

    #[test]
    fn increment_then_decrement() {
        let mut stats = PlayerStats::default();
        stats.increment(StatKind::Goals);
        stats.increment(StatKind::Goals);
        stats.decrement(StatKind::Goals);
        assert_eq!(stats.goals, 1);
        assert_eq!(stats.matches, 0);
    }

    #[test]
    fn player_serde_round_trip() {
        let mut player = Player::new();
        player.name = "Yan".to_string();
        player.position = Position::Pivot;
        player.stats.goals = 7;
        player.payments[0] = true;
        player.payments[11] = true;

        let json = serde_json::to_string(&player).unwrap();
        let restored: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, player);
    }
}
