mod avatar;
mod leaderboard;
mod navbar;
mod payment_grid;
mod player_card;
mod player_editor;
mod stat_counter;

pub use avatar::AvatarComp;
pub use leaderboard::LeaderboardComp;
pub use navbar::NavbarComp;
pub use payment_grid::PaymentGridComp;
pub use player_card::PlayerCardComp;
pub use player_editor::{EditorMode, PlayerEditorComp};
pub use stat_counter::StatCounterComp;
