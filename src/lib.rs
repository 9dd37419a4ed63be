//! Lens-position camera selection.
//!
//! Picks a camera identifier from a platform camera service by the
//! direction its lens faces relative to the device's screen.
//!
//! # Capability tiers
//!
//! Platforms below API 23 only classify cameras as front or back. From
//! API 23 cameras may also be classified as external. Asking an older
//! platform for an external camera is a programming error and panics;
//! check [`CameraSelector::supports`] when the position is not fixed at
//! compile time.
//!
//! # Example
//!
//! ```
//! use lens_select::{CameraSelector, LensFacing, LensPosition, MockCameraManager};
//!
//! let manager = MockCameraManager::new()
//!     .with_camera("0", LensFacing::BACK)
//!     .with_camera("1", LensFacing::FRONT);
//!
//! let selector = CameraSelector::new(manager);
//! let id = selector.find_camera_id(LensPosition::Front).unwrap();
//! assert_eq!(id.as_str(), "1");
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod lens;
pub mod platform;
pub mod selector;

// Re-export commonly used types at crate root
pub use lens::{ApiLevel, LensFacing, LensPosition};
pub use platform::{
    AccessError, CameraCharacteristics, CameraId, CameraManager, DeviceProfile, MockCameraManager,
    ProfileCameraManager, ProfileError,
};
pub use selector::{CameraInfo, CameraSelector, SelectorError};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
