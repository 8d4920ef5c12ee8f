use super::{CommandError, Roster, RosterCommand};

pub trait RosterCommandHandler {
    fn handle_command(
        &self,
        roster: &mut Roster,
        command: RosterCommand,
    ) -> Result<(), CommandError>;
}
