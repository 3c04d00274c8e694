/// UserProfile entity for collaborator-supplied leveling data
///
/// Points and leveling are computed elsewhere; the profile rides along in the
/// snapshot so callers composing dashboards or notification text have the
/// numbers next to the analytics.

use serde::{Deserialize, Serialize};
use crate::domain::UserId;

/// Read-only view of a user as the analytics engine sees them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique identifier for this user
    pub id: UserId,
    /// Display name
    pub display_name: String,
    /// Aggregate point total awarded by the leveling collaborator
    pub total_points: u64,
    /// Derived level
    pub level: u32,
    /// Points still required to reach the next level
    pub level_progress: u64,
}

impl UserProfile {
    /// Create a profile from collaborator-supplied data
    pub fn new(
        id: UserId,
        display_name: String,
        total_points: u64,
        level: u32,
        level_progress: u64,
    ) -> Self {
        Self {
            id,
            display_name,
            total_points,
            level,
            level_progress,
        }
    }
}
