use std::fmt;

/// Privileged capabilities checked through [`super::PermissionPort`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Toggle attacker-facing kill notices.
    AttackerNotices,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::AttackerNotices => write!(f, "attacker_notices"),
        }
    }
}
