use serde::{Deserialize, Serialize};

/// Роль пользователя
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Staff,
    Customer,
}

impl UserRole {
    pub fn code(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Staff => "staff",
            UserRole::Customer => "customer",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Admin => "Administrator",
            UserRole::Staff => "Staff",
            UserRole::Customer => "Customer",
        }
    }

    pub fn all() -> Vec<UserRole> {
        vec![UserRole::Admin, UserRole::Staff, UserRole::Customer]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "admin" => Some(UserRole::Admin),
            "staff" => Some(UserRole::Staff),
            "customer" => Some(UserRole::Customer),
            _ => None,
        }
    }
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::Customer
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
