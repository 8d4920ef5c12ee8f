use crate::config::Config;
use crate::model::Role;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginError {
    /// Deliberately silent about which field was wrong.
    #[error("invalid credentials")]
    InvalidCredentials,
}

/// The process-wide session role. Starts as `Viewer`, flips to `Admin` on a
/// successful login and back on logout. A UI convenience gate, not a
/// security boundary.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    role: Role,
}

impl Session {
    pub fn new(role: Role) -> Self {
        Session { role }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn login(
        &mut self,
        config: &Config,
        email: &str,
        password: &str,
    ) -> Result<(), LoginError> {
        if email == config.admin_email && password == config.admin_password {
            self.role = Role::Admin;
            Ok(())
        } else {
            Err(LoginError::InvalidCredentials)
        }
    }

    pub fn logout(&mut self) {
        self.role = Role::Viewer;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            admin_email: "captain@example.com",
            admin_password: "pass123",
            roster_storage_key: "test.players",
            role_storage_key: "test.role",
        }
    }

    #[test]
    fn starts_as_viewer() {
        assert_eq!(Session::default().role(), Role::Viewer);
    }

    #[test]
    fn correct_credentials_grant_admin() {
        let mut session = Session::default();
        session
            .login(&test_config(), "captain@example.com", "pass123")
            .unwrap();
        assert!(session.is_admin());
    }

    #[test]
    fn wrong_password_keeps_viewer() {
        let mut session = Session::default();
        let err = session
            .login(&test_config(), "captain@example.com", "wrong")
            .unwrap_err();
        assert_eq!(err, LoginError::InvalidCredentials);
        assert_eq!(session.role(), Role::Viewer);
    }

    #[test]
    fn wrong_email_keeps_viewer() {
        let mut session = Session::default();
        assert!(session
            .login(&test_config(), "someone@example.com", "pass123")
            .is_err());
        assert_eq!(session.role(), Role::Viewer);
    }

    #[test]
    fn logout_always_resets_to_viewer() {
        let mut session = Session::new(Role::Admin);
        session.logout();
        assert_eq!(session.role(), Role::Viewer);

        session.logout();
        assert_eq!(session.role(), Role::Viewer);
    }
}
