//! Movement-piece selection.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Movement profile handed to the solver.
///
/// The active piece decides which cells count as adjacent during the search.
/// Selection cycles through [`PieceType::ALL`] in order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PieceType {
    /// One orthogonal step
    #[default]
    Rook,
    /// One step in any of the eight directions
    Queen,
    /// L-shaped jump
    Knight,
}

impl PieceType {
    pub const ALL: [PieceType; 3] = [PieceType::Rook, PieceType::Queen, PieceType::Knight];

    /// Position of this piece in [`PieceType::ALL`].
    pub fn index(self) -> usize {
        match self {
            PieceType::Rook => 0,
            PieceType::Queen => 1,
            PieceType::Knight => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The next piece in cyclic order.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Capitalized display name.
    pub fn label(self) -> &'static str {
        match self {
            PieceType::Rook => "Rook",
            PieceType::Queen => "Queen",
            PieceType::Knight => "Knight",
        }
    }
}
