//! Device profiles: a TOML description of a platform's cameras.
//!
//! ```toml
//! api_level = 23
//!
//! [[cameras]]
//! id = "0"
//! lens_facing = 1
//!
//! [[cameras]]
//! id = "1"
//! lens_facing = 0
//! ```

use super::{AccessError, CameraCharacteristics, CameraId, CameraManager};
use crate::lens::{ApiLevel, LensFacing};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// One camera in a device profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraEntry {
    /// Identifier as the platform would report it.
    pub id: String,
    /// Raw lens-facing value; omitted when the platform reports none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lens_facing: Option<i32>,
}

/// Camera inventory and capability level of a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceProfile {
    /// Platform capability level.
    pub api_level: u32,
    /// Cameras in enumeration order.
    #[serde(default)]
    pub cameras: Vec<CameraEntry>,
}

impl Default for DeviceProfile {
    fn default() -> Self {
        Self {
            api_level: ApiLevel::M.0,
            cameras: vec![
                CameraEntry {
                    id: "0".to_string(),
                    lens_facing: Some(LensFacing::BACK.raw()),
                },
                CameraEntry {
                    id: "1".to_string(),
                    lens_facing: Some(LensFacing::FRONT.raw()),
                },
            ],
        }
    }
}

impl DeviceProfile {
    /// Validates the profile.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if ApiLevel(self.api_level) < ApiLevel::LOLLIPOP {
            return Err(ProfileError::UnsupportedApiLevel(self.api_level));
        }

        let mut seen = HashSet::new();
        for camera in &self.cameras {
            if camera.id.is_empty() {
                return Err(ProfileError::EmptyCameraId);
            }
            if !seen.insert(camera.id.as_str()) {
                return Err(ProfileError::DuplicateCameraId(camera.id.clone()));
            }
        }
        Ok(())
    }

    /// Parses and validates a profile from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ProfileError> {
        let profile: DeviceProfile =
            toml::from_str(content).map_err(|e| ProfileError::ParseError(e.to_string()))?;
        profile.validate()?;
        Ok(profile)
    }

    /// Loads a profile from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ProfileError::FileReadError(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Serializes the profile back to TOML.
    pub fn to_toml_string(&self) -> Result<String, ProfileError> {
        toml::to_string_pretty(self).map_err(|e| ProfileError::SerializeError(e.to_string()))
    }
}

/// Device profile errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileError {
    #[error("failed to read profile: {0}")]
    FileReadError(String),
    #[error("failed to parse profile: {0}")]
    ParseError(String),
    #[error("failed to serialize profile: {0}")]
    SerializeError(String),
    #[error("api level {0} has no camera service (need at least 21)")]
    UnsupportedApiLevel(u32),
    #[error("camera id must not be empty")]
    EmptyCameraId,
    #[error("duplicate camera id: {0}")]
    DuplicateCameraId(String),
}

/// Camera service answering from a [`DeviceProfile`].
#[derive(Debug, Clone)]
pub struct ProfileCameraManager {
    profile: DeviceProfile,
}

impl ProfileCameraManager {
    /// Wraps a profile after validating it.
    pub fn new(profile: DeviceProfile) -> Result<Self, ProfileError> {
        profile.validate()?;
        tracing::debug!(
            "Loaded device profile: {} camera(s) at API {}",
            profile.cameras.len(),
            profile.api_level
        );
        Ok(Self { profile })
    }

    pub fn profile(&self) -> &DeviceProfile {
        &self.profile
    }
}

impl CameraManager for ProfileCameraManager {
    fn camera_id_list(&self) -> Result<Vec<CameraId>, AccessError> {
        Ok(self
            .profile
            .cameras
            .iter()
            .map(|camera| CameraId::new(camera.id.as_str()))
            .collect())
    }

    fn camera_characteristics(&self, id: &CameraId) -> Result<CameraCharacteristics, AccessError> {
        self.profile
            .cameras
            .iter()
            .find(|camera| camera.id == id.as_str())
            .map(|camera| CameraCharacteristics::new(camera.lens_facing.map(LensFacing::from_raw)))
            .ok_or_else(|| AccessError::UnknownCamera(id.clone()))
    }

    fn api_level(&self) -> ApiLevel {
        ApiLevel(self.profile.api_level)
    }
}
