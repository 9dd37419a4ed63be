//! Platform camera service abstraction.
//!
//! The selector only ever talks to a [`CameraManager`]. Real hosts
//! implement it over their camera enumeration API; tests use
//! [`MockCameraManager`] and the CLI uses a [`ProfileCameraManager`] built
//! from a TOML [`DeviceProfile`].

mod manager;
mod mock;
mod profile;

pub use manager::{AccessError, CameraCharacteristics, CameraId, CameraManager};
pub use mock::MockCameraManager;
pub use profile::{CameraEntry, DeviceProfile, ProfileCameraManager, ProfileError};
