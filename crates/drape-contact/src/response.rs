//! Contact resolution counters.

use drape_types::Scalar;

use crate::collider::Contact;

/// Aggregate of the contacts resolved during one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContactResult {
    /// Number of contacts resolved.
    pub resolved_count: u32,
    /// Deepest penetration encountered.
    pub max_penetration: Scalar,
    /// Sum of all resolved depths.
    pub total_depth: Scalar,
}

impl ContactResult {
    /// Adds one resolved contact.
    pub fn record(&mut self, contact: &Contact) {
        self.resolved_count += 1;
        self.max_penetration = self.max_penetration.max(contact.depth);
        self.total_depth += contact.depth;
    }

    /// Folds another result into this one.
    pub fn merge(&mut self, other: &ContactResult) {
        self.resolved_count += other.resolved_count;
        self.max_penetration = self.max_penetration.max(other.max_penetration);
        self.total_depth += other.total_depth;
    }
}
