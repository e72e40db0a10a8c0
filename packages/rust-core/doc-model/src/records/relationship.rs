//! Package relationship records

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Whether a relationship target lives inside the package or points outside
/// it (e.g. a hyperlink to an external URL).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetMode {
    Internal,
    External,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipEntry {
    pub target_path: String,
    pub target_mode: TargetMode,
    pub rel_type: String,
}

/// `get_relationships` return type: rel_id → target.
pub type RelationshipMap = HashMap<String, RelationshipEntry>;
