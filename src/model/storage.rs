//! Browser local storage persistence. Every mutation writes the whole
//! serialized value; loads fail soft so a missing or malformed entry can
//! never take the application down.

use crate::config::Config;
use crate::model::{Role, Roster, Session};
use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};

pub fn load_roster() -> Roster {
    let config = Config::new();
    match LocalStorage::get(config.roster_storage_key) {
        Ok(roster) => roster,
        Err(StorageError::KeyNotFound(_)) => Roster::new(),
        Err(err) => {
            log::warn!("discarding unreadable roster entry: {err}");
            Roster::new()
        }
    }
}

pub fn save_roster(roster: &Roster) {
    let config = Config::new();
    if let Err(err) = LocalStorage::set(config.roster_storage_key, roster) {
        log::warn!("failed to persist roster: {err}");
    }
}

pub fn load_session() -> Session {
    let config = Config::new();
    let role = match LocalStorage::get::<Role>(config.role_storage_key) {
        Ok(role) => role,
        Err(StorageError::KeyNotFound(_)) => Role::default(),
        Err(err) => {
            log::warn!("discarding unreadable role entry: {err}");
            Role::default()
        }
    };
    Session::new(role)
}

pub fn save_session(session: &Session) {
    let config = Config::new();
    if let Err(err) = LocalStorage::set(config.role_storage_key, session.role()) {
        log::warn!("failed to persist session role: {err}");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::model::Player;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn roster_round_trips_through_local_storage() {
        let mut roster = Roster::new();
        let mut player = Player::new();
        player.name = "Ana".to_string();
        player.payments[1] = true;
        roster.add(player).unwrap();

        save_roster(&roster);
        assert_eq!(load_roster(), roster);
    }

    #[wasm_bindgen_test]
    fn missing_entries_fall_back_to_defaults() {
        LocalStorage::clear();
        assert!(load_roster().is_empty());
        assert_eq!(load_session().role(), Role::Viewer);
    }
}
