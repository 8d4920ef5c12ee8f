pub mod app;
pub mod components;
pub mod config;
pub mod model;
pub mod pages;
pub mod routes;

pub mod prelude {
    pub use crate::components::*;
    pub use crate::config::Config;
    pub use crate::model::CommandError;
    pub use crate::model::LocalRosterCommandHandler;
    pub use crate::model::LoginError;
    pub use crate::model::PaymentStatus;
    pub use crate::model::Player;
    pub use crate::model::PlayerId;
    pub use crate::model::PlayerStats;
    pub use crate::model::Position;
    pub use crate::model::Role;
    pub use crate::model::Roster;
    pub use crate::model::RosterCommand;
    pub use crate::model::RosterCommandHandler;
    pub use crate::model::Session;
    pub use crate::model::StatKind;
    pub use crate::model::ranking;
    pub use crate::routes::Route;
}
