use crate::model::{CommandError, Player, PlayerId};
use serde::{Deserialize, Serialize};

/// The full ordered list of player records, insertion order preserved.
/// Serializes transparently as a JSON array so the persisted entry stays a
/// plain list of players.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new() -> Self {
        Roster {
            players: Vec::new(),
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| player.id == id)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn add(&mut self, player: Player) -> Result<(), CommandError> {
        if self.get(player.id).is_some() {
            return Err(CommandError::DuplicatePlayer(player.id));
        }
        self.players.push(player);
        Ok(())
    }

    /// Replaces the record with the matching id, keeping its position in the
    /// sequence. The roster is untouched when the id is unknown.
    pub fn update(&mut self, player: Player) -> Result<(), CommandError> {
        match self.players.iter_mut().find(|p| p.id == player.id) {
            Some(slot) => {
                *slot = player;
                Ok(())
            }
            None => Err(CommandError::PlayerNotFound(player.id)),
        }
    }

    pub fn remove(&mut self, id: PlayerId) -> Result<(), CommandError> {
        match self.players.iter().position(|player| player.id == id) {
            Some(index) => {
                self.players.remove(index);
                Ok(())
            }
            None => Err(CommandError::PlayerNotFound(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn named(name: &str) -> Player {
        let mut player = Player::new();
        player.name = name.to_string();
        player
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut roster = Roster::new();
        roster.add(named("Ana")).unwrap();
        roster.add(named("Bia")).unwrap();
        roster.add(named("Caio")).unwrap();

        let names: Vec<&str> = roster.players().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Ana", "Bia", "Caio"]);
    }

    #[test]
    fn add_rejects_duplicate_id() {
        let mut roster = Roster::new();
        let player = named("Ana");
        roster.add(player.clone()).unwrap();

        let err = roster.add(player.clone()).unwrap_err();
        assert_eq!(err, CommandError::DuplicatePlayer(player.id));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn update_keeps_position() {
        let mut roster = Roster::new();
        roster.add(named("Ana")).unwrap();
        let mut bia = named("Bia");
        roster.add(bia.clone()).unwrap();
        roster.add(named("Caio")).unwrap();

        bia.stats.goals = 4;
        bia.name = "Beatriz".to_string();
        roster.update(bia).unwrap();

        let names: Vec<&str> = roster.players().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Ana", "Beatriz", "Caio"]);
        assert_eq!(roster.players()[1].stats.goals, 4);
    }

    #[test]
    fn update_unknown_id_leaves_roster_unchanged() {
        let mut roster = Roster::new();
        roster.add(named("Ana")).unwrap();
        let before = roster.clone();

        let ghost = named("Ghost");
        assert!(roster.update(ghost).is_err());
        assert_eq!(roster, before);
    }

    #[test]
    fn remove_unknown_id_leaves_roster_unchanged() {
        let mut roster = Roster::new();
        roster.add(named("Ana")).unwrap();
        let before = roster.clone();

        assert!(roster.remove(Uuid::new_v4()).is_err());
        assert_eq!(roster, before);
    }

    #[test]
    fn roster_serde_round_trip() {
        let mut roster = Roster::new();
        let mut ana = named("Ana");
        ana.stats.assists = 3;
        ana.payments[5] = true;
        roster.add(ana).unwrap();
        roster.add(named("Bia")).unwrap();

        let json = serde_json::to_string(&roster).unwrap();
        assert!(json.starts_with('['), "persisted entry must be a JSON array");
        let restored: Roster = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, roster);
    }
}
