//! In-memory camera service for tests and demos.

use super::{AccessError, CameraCharacteristics, CameraId, CameraManager};
use crate::lens::{ApiLevel, LensFacing};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock camera service with a fixed inventory and injectable failures.
#[derive(Debug)]
pub struct MockCameraManager {
    cameras: Vec<(CameraId, CameraCharacteristics)>,
    api_level: ApiLevel,
    id_list_error: Option<AccessError>,
    failing_ids: HashSet<CameraId>,
    characteristics_queries: AtomicUsize,
}

impl Default for MockCameraManager {
    fn default() -> Self {
        Self {
            cameras: Vec::new(),
            api_level: ApiLevel::M,
            id_list_error: None,
            failing_ids: HashSet::new(),
            characteristics_queries: AtomicUsize::new(0),
        }
    }
}

impl MockCameraManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the reported capability level.
    pub fn with_api_level(mut self, level: ApiLevel) -> Self {
        self.api_level = level;
        self
    }

    /// Appends a camera with the given classification.
    pub fn with_camera(self, id: impl Into<CameraId>, facing: LensFacing) -> Self {
        self.with_characteristics(id, CameraCharacteristics::with_lens_facing(facing))
    }

    /// Appends a camera whose characteristics carry no lens-facing value.
    pub fn with_unclassified_camera(self, id: impl Into<CameraId>) -> Self {
        self.with_characteristics(id, CameraCharacteristics::default())
    }

    pub fn with_characteristics(
        mut self,
        id: impl Into<CameraId>,
        characteristics: CameraCharacteristics,
    ) -> Self {
        self.cameras.push((id.into(), characteristics));
        self
    }

    /// Makes `camera_id_list` fail with `error`.
    pub fn fail_id_list(mut self, error: AccessError) -> Self {
        self.id_list_error = Some(error);
        self
    }

    /// Makes `camera_characteristics` fail for `id`.
    pub fn fail_characteristics_for(mut self, id: impl Into<CameraId>) -> Self {
        self.failing_ids.insert(id.into());
        self
    }

    /// Number of `camera_characteristics` calls made so far.
    pub fn characteristics_queries(&self) -> usize {
        self.characteristics_queries.load(Ordering::Relaxed)
    }
}

impl CameraManager for MockCameraManager {
    fn camera_id_list(&self) -> Result<Vec<CameraId>, AccessError> {
        if let Some(err) = &self.id_list_error {
            return Err(err.clone());
        }
        Ok(self.cameras.iter().map(|(id, _)| id.clone()).collect())
    }

    fn camera_characteristics(&self, id: &CameraId) -> Result<CameraCharacteristics, AccessError> {
        self.characteristics_queries.fetch_add(1, Ordering::Relaxed);

        if self.failing_ids.contains(id) {
            return Err(AccessError::Disconnected(format!(
                "characteristics unavailable for {id}"
            )));
        }

        self.cameras
            .iter()
            .find(|(candidate, _)| candidate == id)
            .map(|(_, characteristics)| characteristics.clone())
            .ok_or_else(|| AccessError::UnknownCamera(id.clone()))
    }

    fn api_level(&self) -> ApiLevel {
        self.api_level
    }
}
