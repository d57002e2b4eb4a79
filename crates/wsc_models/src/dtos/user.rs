use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub name: String,
    #[serde(default)]
    pub display_name: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl User {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r.name == role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_has_role_by_name() {
        let user = User {
            username: "alice".to_string(),
            roles: vec![Role {
                name: "owner".to_string(),
                display_name: "Owner".to_string(),
            }],
            ..Default::default()
        };

        assert!(user.has_role("owner"));
        assert!(!user.has_role("Owner"));
        assert!(!user.has_role("auditor"));
    }
}
