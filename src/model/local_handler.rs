use crate::model::{CommandError, Roster, RosterCommand, RosterCommandHandler};

pub struct LocalRosterCommandHandler;

impl RosterCommandHandler for LocalRosterCommandHandler {
    fn handle_command(
        &self,
        roster: &mut Roster,
        command: RosterCommand,
    ) -> Result<(), CommandError> {
        match command {
            RosterCommand::AddPlayer { player } => roster.add(player),
            RosterCommand::UpdatePlayer { player } => roster.update(player),
            RosterCommand::RemovePlayer { player_id } => roster.remove(player_id),
        }
    }
}
