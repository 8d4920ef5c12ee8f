mod assists;
mod home;
mod login;
mod scorers;
mod stats;

pub use assists::AssistsPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use scorers::ScorersPage;
pub use stats::StatsPage;
