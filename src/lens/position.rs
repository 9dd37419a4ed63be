//! Logical lens position requested by callers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Position of the lens relative to the device's screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LensPosition {
    /// Facing the same direction as the screen.
    Front,
    /// Facing away from the screen.
    Back,
    /// Attached externally, e.g. over USB.
    External,
}

impl LensPosition {
    /// All positions, in declaration order.
    pub const ALL: [LensPosition; 3] = [Self::Front, Self::Back, Self::External];
}

impl fmt::Display for LensPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Front => "FRONT",
            Self::Back => "BACK",
            Self::External => "EXTERNAL",
        };
        f.write_str(name)
    }
}

/// Error returned when a string does not name a lens position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown lens position: {0:?} (expected front, back or external)")]
pub struct ParseLensPositionError(pub String);

impl FromStr for LensPosition {
    type Err = ParseLensPositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "front" => Ok(Self::Front),
            "back" => Ok(Self::Back),
            "external" => Ok(Self::External),
            _ => Err(ParseLensPositionError(s.to_string())),
        }
    }
}
