//! The camera service trait and the data it hands out.

use crate::lens::{ApiLevel, LensFacing};
use std::fmt;
use thiserror::Error;

/// Opaque camera identifier issued by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CameraId(String);

impl CameraId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CameraId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CameraId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CameraId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for CameraId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CameraId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Per-camera record owned by the platform.
///
/// Only the lens-facing classification is read. It is optional because
/// the platform may omit it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CameraCharacteristics {
    lens_facing: Option<LensFacing>,
}

impl CameraCharacteristics {
    pub fn new(lens_facing: Option<LensFacing>) -> Self {
        Self { lens_facing }
    }

    pub fn with_lens_facing(lens_facing: LensFacing) -> Self {
        Self::new(Some(lens_facing))
    }

    #[inline]
    pub fn lens_facing(&self) -> Option<LensFacing> {
        self.lens_facing
    }
}

/// Failures reported by the platform camera service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error("camera service disconnected: {0}")]
    Disconnected(String),
    #[error("camera disabled by policy: {0}")]
    Disabled(String),
    #[error("camera in use: {0}")]
    InUse(String),
    #[error("maximum cameras in use: {0}")]
    MaxCamerasInUse(String),
    #[error("camera service error: {0}")]
    Error(String),
    #[error("unknown camera id: {0}")]
    UnknownCamera(CameraId),
}

/// The platform camera-management service.
///
/// Calls are synchronous and are expected to be fast local lookups.
pub trait CameraManager {
    /// Lists every camera identifier in platform enumeration order.
    fn camera_id_list(&self) -> Result<Vec<CameraId>, AccessError>;

    /// Fetches the characteristics of one camera.
    fn camera_characteristics(&self, id: &CameraId) -> Result<CameraCharacteristics, AccessError>;

    /// Capability level of the running platform.
    fn api_level(&self) -> ApiLevel;
}

impl<M: CameraManager + ?Sized> CameraManager for &M {
    fn camera_id_list(&self) -> Result<Vec<CameraId>, AccessError> {
        (**self).camera_id_list()
    }

    fn camera_characteristics(&self, id: &CameraId) -> Result<CameraCharacteristics, AccessError> {
        (**self).camera_characteristics(id)
    }

    fn api_level(&self) -> ApiLevel {
        (**self).api_level()
    }
}

impl<M: CameraManager + ?Sized> CameraManager for Box<M> {
    fn camera_id_list(&self) -> Result<Vec<CameraId>, AccessError> {
        (**self).camera_id_list()
    }

    fn camera_characteristics(&self, id: &CameraId) -> Result<CameraCharacteristics, AccessError> {
        (**self).camera_characteristics(id)
    }

    fn api_level(&self) -> ApiLevel {
        (**self).api_level()
    }
}
