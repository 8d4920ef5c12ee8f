use crate::model::{Player, StatKind};

/// Players sorted descending by one counter. The sort is stable, so players
/// with equal values keep their order from the source list; display rank is
/// the 1-based position in the returned vector.
pub fn ranking(players: &[Player], kind: StatKind) -> Vec<Player> {
    let mut ranked = players.to_vec();
    ranked.sort_by(|a, b| b.stats.get(kind).cmp(&a.stats.get(kind)));
    ranked
}
