use serde::{Deserialize, Serialize};

/// Identity used when no authenticated user is available.
pub const FALLBACK_USER_ID: &str = "user-001";
pub const FALLBACK_USER_NAME: &str = "Current User";

/// Back-office role of a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Maker,
    Checker,
    Supervisor,
    BranchManager,
    ComplianceOfficer,
    TradeOfficer,
    RelationshipManager,
    Admin,
    SuperAdmin,
}

/// Permissions on the checker queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueuePermission {
    View,
    Approve,
    Reject,
    SendBack,
}

impl Role {
    /// Queue permissions granted to this role.
    pub fn queue_permissions(&self) -> &'static [QueuePermission] {
        use QueuePermission::*;
        match self {
            Role::Checker
            | Role::Supervisor
            | Role::BranchManager
            | Role::Admin
            | Role::SuperAdmin => &[View, Approve, Reject, SendBack],
            Role::ComplianceOfficer | Role::TradeOfficer => &[View],
            Role::Maker | Role::RelationshipManager => &[],
        }
    }

    pub fn has_queue_permission(&self, permission: QueuePermission) -> bool {
        self.queue_permissions().contains(&permission)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Role::Maker => "Maker",
            Role::Checker => "Checker",
            Role::Supervisor => "Supervisor",
            Role::BranchManager => "Branch Manager",
            Role::ComplianceOfficer => "Compliance Officer",
            Role::TradeOfficer => "Trade Officer",
            Role::RelationshipManager => "Relationship Manager",
            Role::Admin => "Administrator",
            Role::SuperAdmin => "Super Administrator",
        };
        f.write_str(label)
    }
}

/// The signed-in user as seen by the workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub department: Option<String>,
}

impl CurrentUser {
    /// Placeholder identity used when the user provider has nobody signed in.
    /// Not a security control.
    pub fn fallback() -> Self {
        Self {
            id: FALLBACK_USER_ID.to_string(),
            first_name: FALLBACK_USER_NAME.to_string(),
            last_name: String::new(),
            role: Role::Maker,
            department: None,
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_identity() {
        let user = CurrentUser::fallback();
        assert_eq!(user.id, "user-001");
        assert_eq!(user.display_name(), "Current User");
    }

    #[test]
    fn test_queue_permissions_by_role() {
        assert!(Role::Checker.has_queue_permission(QueuePermission::SendBack));
        assert!(Role::BranchManager.has_queue_permission(QueuePermission::Reject));
        assert!(Role::TradeOfficer.has_queue_permission(QueuePermission::View));
        assert!(!Role::TradeOfficer.has_queue_permission(QueuePermission::Approve));
        assert!(!Role::Maker.has_queue_permission(QueuePermission::View));
    }
}
