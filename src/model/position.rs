use serde::{Deserialize, Serialize};
use std::fmt;

/// Futsal positions as used on the team sheet.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Goalkeeper,
    Fixed,
    #[default]
    Wing,
    Pivot,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::Goalkeeper,
        Position::Fixed,
        Position::Wing,
        Position::Pivot,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "Goalkeeper",
            Position::Fixed => "Fixed",
            Position::Wing => "Wing",
            Position::Pivot => "Pivot",
        }
    }

    pub fn from_label(label: &str) -> Option<Position> {
        Position::ALL.into_iter().find(|p| p.label() == label)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_round_trip() {
        for position in Position::ALL {
            assert_eq!(Position::from_label(position.label()), Some(position));
        }
    }

    #[test]
    fn unknown_label() {
        assert_eq!(Position::from_label("Libero"), None);
    }

    #[test]
    fn default_position() {
        assert_eq!(Position::default(), Position::Wing);
    }
}
