//! Platform lens-facing constants and the tier-gated lookup tables.

use super::LensPosition;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lens-facing classification as reported in camera characteristics.
///
/// The raw integer is kept so that values unknown to this crate still
/// round-trip. Unknown values never match a [`LensPosition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LensFacing(i32);

impl LensFacing {
    /// Camera faces the same direction as the screen.
    pub const FRONT: LensFacing = LensFacing(0);
    /// Camera faces away from the screen.
    pub const BACK: LensFacing = LensFacing(1);
    /// Camera is external to the device.
    pub const EXTERNAL: LensFacing = LensFacing(2);

    /// Wraps a raw platform value.
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Returns the raw platform value.
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Reverse lookup for known constants.
    pub fn position(self) -> Option<LensPosition> {
        match self {
            Self::FRONT => Some(LensPosition::Front),
            Self::BACK => Some(LensPosition::Back),
            Self::EXTERNAL => Some(LensPosition::External),
            _ => None,
        }
    }
}

impl fmt::Display for LensFacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position() {
            Some(position) => write!(f, "{} ({})", position, self.0),
            None => write!(f, "UNKNOWN ({})", self.0),
        }
    }
}

/// Platform capability level, ordered by release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiLevel(pub u32);

impl ApiLevel {
    /// First level providing the camera service.
    pub const LOLLIPOP: ApiLevel = ApiLevel(21);
    /// First level reporting external cameras.
    pub const M: ApiLevel = ApiLevel(23);

    /// Whether this level can classify a camera as external.
    #[inline]
    pub fn supports_external(self) -> bool {
        self >= Self::M
    }
}

impl fmt::Display for ApiLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "API {}", self.0)
    }
}

/// A tier's mapping from lens position to platform classification.
pub type FacingTable = fn(LensPosition) -> Option<LensFacing>;

/// Mapping for levels that predate external cameras.
pub fn facing_for_lollipop(position: LensPosition) -> Option<LensFacing> {
    match position {
        LensPosition::Front => Some(LensFacing::FRONT),
        LensPosition::Back => Some(LensFacing::BACK),
        LensPosition::External => None,
    }
}

/// Mapping for levels that report external cameras.
pub fn facing_for_m(position: LensPosition) -> Option<LensFacing> {
    match position {
        LensPosition::Front => Some(LensFacing::FRONT),
        LensPosition::Back => Some(LensFacing::BACK),
        LensPosition::External => Some(LensFacing::EXTERNAL),
    }
}

/// Selects the table for the given capability level.
pub fn facing_table(level: ApiLevel) -> FacingTable {
    if level.supports_external() {
        facing_for_m
    } else {
        facing_for_lollipop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_m_table_is_total() {
        for position in LensPosition::ALL {
            assert!(facing_for_m(position).is_some(), "{position} unmapped");
        }
    }

    #[test]
    fn test_lollipop_table_lacks_external() {
        assert_eq!(facing_for_lollipop(LensPosition::Front), Some(LensFacing::FRONT));
        assert_eq!(facing_for_lollipop(LensPosition::Back), Some(LensFacing::BACK));
        assert_eq!(facing_for_lollipop(LensPosition::External), None);
    }

    #[test]
    fn test_table_selection_threshold() {
        assert_eq!(facing_table(ApiLevel(22))(LensPosition::External), None);
        assert_eq!(
            facing_table(ApiLevel::M)(LensPosition::External),
            Some(LensFacing::EXTERNAL)
        );
        assert_eq!(
            facing_table(ApiLevel(34))(LensPosition::External),
            Some(LensFacing::EXTERNAL)
        );
    }

    #[test]
    fn test_reverse_lookup() {
        for position in LensPosition::ALL {
            let facing = facing_for_m(position).unwrap();
            assert_eq!(facing.position(), Some(position));
        }
        assert_eq!(LensFacing::from_raw(7).position(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(LensFacing::BACK.to_string(), "BACK (1)");
        assert_eq!(LensFacing::from_raw(-1).to_string(), "UNKNOWN (-1)");
        assert_eq!(ApiLevel::M.to_string(), "API 23");
    }
}
