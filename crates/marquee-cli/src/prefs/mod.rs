//! User preferences.

pub mod storage;

use serde::{Deserialize, Serialize};

use marquee_core::SortMode;

/// Settings that survive between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Which catalog list to show.
    #[serde(default)]
    pub sort_order: SortMode,
}
