//! Configuration type definitions.

use crate::input::PieceType;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Session defaults applied when the editor starts.
///
/// The piece and animation flag can still be changed at runtime with the
/// keybindings or the on-screen controls.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SessionConfig {
    /// Movement piece selected at startup (rook, queen, knight)
    #[serde(default)]
    pub default_piece: PieceType,

    /// Start with animated solving enabled (one solver step per frame)
    #[serde(default)]
    pub animate: bool,

    /// Upper bound on solver evaluations before a run is declared failed
    /// (valid range: 1000 - 10000000)
    #[serde(default = "default_max_evaluations")]
    pub max_evaluations: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_piece: PieceType::default(),
            animate: false,
            max_evaluations: default_max_evaluations(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_max_evaluations() -> usize {
    100_000
}
