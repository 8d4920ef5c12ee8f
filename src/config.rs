/// Build-time configuration. The admin credential is a soft gate for the
/// editing UI, not a security boundary; it ships inside the client bundle.
pub struct Config {
    pub admin_email: &'static str,
    pub admin_password: &'static str,
    pub roster_storage_key: &'static str,
    pub role_storage_key: &'static str,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            admin_email: match option_env!("ADMIN_EMAIL") {
                Some(email) => email,
                None => "admin@futsal.club",
            },
            admin_password: match option_env!("ADMIN_PASSWORD") {
                Some(password) => password,
                None => "trocar-essa-senha",
            },
            roster_storage_key: "futsal_roster.players",
            role_storage_key: "futsal_roster.role",
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
