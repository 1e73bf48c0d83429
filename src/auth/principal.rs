//! Authenticated principal attached to requests by the gate.

use serde::{Deserialize, Serialize};

/// Identity context produced by token verification and consumed by
/// controllers. The gateway never constructs one without a verified
/// token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthPrincipal {
    /// Stable subject identifier (user id).
    pub subject: String,
    /// Email, when the token carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Role names granted to the subject.
    #[serde(default)]
    pub roles: Vec<String>,
}

impl AuthPrincipal {
    /// Create a principal with just a subject.
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            email: None,
            roles: Vec::new(),
        }
    }

    /// Checks role membership.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_membership() {
        let mut principal = AuthPrincipal::new("u1");
        principal.roles.push("hr-admin".to_string());
        assert!(principal.has_role("hr-admin"));
        assert!(!principal.has_role("payroll"));
    }
}
