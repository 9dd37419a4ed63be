//! Camera selection by lens position.

use crate::lens::{facing_table, LensFacing, LensPosition};
use crate::platform::{AccessError, CameraId, CameraManager};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors returned by [`CameraSelector`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// The platform camera service could not be queried.
    #[error(transparent)]
    Access(#[from] AccessError),
    /// No camera reports the requested lens position.
    #[error("No camera found with position: {position}")]
    NoCameraFound { position: LensPosition },
}

/// One enumerated camera, as reported by [`CameraSelector::list_cameras`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraInfo {
    pub id: CameraId,
    pub lens_facing: Option<LensFacing>,
    /// Position the classification maps to, if it is a known value.
    pub position: Option<LensPosition>,
}

/// Finds the device's camera through a [`CameraManager`].
///
/// Holds no state besides the manager; every call queries the platform
/// afresh.
#[derive(Debug, Clone)]
pub struct CameraSelector<M> {
    manager: M,
}

impl<M: CameraManager> CameraSelector<M> {
    pub fn new(manager: M) -> Self {
        Self { manager }
    }

    pub fn manager(&self) -> &M {
        &self.manager
    }

    pub fn into_manager(self) -> M {
        self.manager
    }

    /// Returns the id of the first camera, in platform order, whose lens
    /// faces `lens_position`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Access`] if listing or a characteristics query
    /// fails; the scan stops there. [`SelectorError::NoCameraFound`] if no
    /// camera matches.
    ///
    /// # Panics
    ///
    /// If the platform's capability level cannot express `lens_position`
    /// (external below API 23). Use [`supports`](Self::supports) first when
    /// the position comes from untrusted input.
    pub fn find_camera_id(&self, lens_position: LensPosition) -> Result<CameraId, SelectorError> {
        let camera_ids = self.manager.camera_id_list()?;
        let wanted = self.characteristic_position(lens_position);

        for camera_id in camera_ids {
            let characteristics = self.manager.camera_characteristics(&camera_id)?;
            let lens_facing = characteristics.lens_facing();
            debug!("Camera {}: lens facing {:?}", camera_id, lens_facing);

            if lens_facing == Some(wanted) {
                debug!("Selected camera {} for position {}", camera_id, lens_position);
                return Ok(camera_id);
            }
        }

        warn!("No camera found with position: {}", lens_position);
        Err(SelectorError::NoCameraFound {
            position: lens_position,
        })
    }

    /// Whether the running platform can express `lens_position`.
    pub fn supports(&self, lens_position: LensPosition) -> bool {
        facing_table(self.manager.api_level())(lens_position).is_some()
    }

    /// Enumerates every camera with its classification, in platform order.
    pub fn list_cameras(&self) -> Result<Vec<CameraInfo>, SelectorError> {
        let level = self.manager.api_level();
        self.manager
            .camera_id_list()?
            .into_iter()
            .map(|id| -> Result<CameraInfo, SelectorError> {
                let lens_facing = self.manager.camera_characteristics(&id)?.lens_facing();
                // Positions the tier cannot express stay unmapped.
                let position = lens_facing
                    .and_then(LensFacing::position)
                    .filter(|position| facing_table(level)(*position).is_some());
                Ok(CameraInfo {
                    id,
                    lens_facing,
                    position,
                })
            })
            .collect()
    }

    fn characteristic_position(&self, lens_position: LensPosition) -> LensFacing {
        match facing_table(self.manager.api_level())(lens_position) {
            Some(facing) => facing,
            None => panic!(
                "Cannot return CameraCharacteristic for LensPosition: {}",
                lens_position
            ),
        }
    }
}
