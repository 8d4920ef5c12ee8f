use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    #[default]
    Viewer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_role() {
        let role = Role::default();
        assert_eq!(role, Role::Viewer);
    }

    #[test]
    fn serializes_as_uppercase_string() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
        assert_eq!(serde_json::to_string(&Role::Viewer).unwrap(), "\"VIEWER\"");
    }

    #[test]
    fn unknown_string_fails_to_deserialize() {
        assert!(serde_json::from_str::<Role>("\"SUPERUSER\"").is_err());
    }
}
