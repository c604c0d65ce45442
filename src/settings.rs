//! Simulation preferences
//!
//! Consulted by the parser and the drivers; nothing here is persisted.

use serde::{Deserialize, Serialize};

/// Scene-level preferences
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Fail parsing on instruction symbols outside `^ v < >` instead of
    /// carrying them as rejected no-ops
    pub strict_instructions: bool,

    /// Apply the widening transform to the parsed map before simulation
    pub expand: bool,
}
