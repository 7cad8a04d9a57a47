use crate::camera::constraints::CaptureConstraints;
use crate::camera::device::{CameraDevice, CameraStream};
use crate::camera::types::{CameraState, CapturedImage, Facing};
use crate::errors::{CameraError, CropGuardResult};
use image::imageops;
use std::sync::Arc;
use std::time::Duration;

/// How long to wait for the first frame before giving up on a stream.
pub const FIRST_FRAME_TIMEOUT: Duration = Duration::from_secs(10);

/// An acquired stream. Dropping it always stops the stream, so no path out
/// of the controller can leak a running camera.
struct ActiveSession {
    stream: Box<dyn CameraStream>,
    facing: Facing,
}

impl Drop for ActiveSession {
    fn drop(&mut self) {
        self.stream.stop();
    }
}

/// Drives a single camera session through open, capture, toggle, and close.
/// At most one stream is live at any time.
pub struct CameraController {
    device: Arc<dyn CameraDevice>,
    state: CameraState,
    session: Option<ActiveSession>,
    facing: Facing,
}

impl CameraController {
    pub fn new(device: Arc<dyn CameraDevice>) -> Self {
        Self {
            device,
            state: CameraState::Closed,
            session: None,
            facing: Facing::Rear,
        }
    }

    pub fn state(&self) -> &CameraState {
        &self.state
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Opens a stream for the requested direction, walking the constraint
    /// ladder from most to least specific. Any already-open stream is stopped
    /// first.
    pub async fn open(&mut self, facing: Facing) -> CropGuardResult<()> {
        self.close();
        self.state = CameraState::Opening;
        self.facing = facing;

        let mut last_error = None;
        for constraints in CaptureConstraints::ladder(facing) {
            let mut stream = match self.device.acquire(&constraints).await {
                Ok(stream) => stream,
                Err(error) => {
                    if matches!(
                        error,
                        CameraError::PermissionDenied(_) | CameraError::InsecureContext(_)
                    ) {
                        // No point relaxing constraints; the user or the
                        // platform said no.
                        self.state = CameraState::Error(error.clone());
                        return Err(error.into());
                    }
                    tracing::debug!(?constraints, %error, "camera acquire failed, relaxing constraints");
                    last_error = Some(error);
                    continue;
                }
            };

            match tokio::time::timeout(FIRST_FRAME_TIMEOUT, stream.await_first_frame()).await {
                Ok(Ok(())) => {
                    let (width, height) = stream.resolution();
                    tracing::debug!(width, height, "camera stream ready");
                    self.session = Some(ActiveSession { stream, facing });
                    self.state = CameraState::Ready;
                    return Ok(());
                }
                Ok(Err(error)) => {
                    stream.stop();
                    self.state = CameraState::Error(error.clone());
                    return Err(error.into());
                }
                Err(_) => {
                    stream.stop();
                    let error = CameraError::FrameTimeout(FIRST_FRAME_TIMEOUT.as_millis() as u64);
                    self.state = CameraState::Error(error.clone());
                    return Err(error.into());
                }
            }
        }

        let error = last_error
            .unwrap_or_else(|| CameraError::NotFound("no camera available".to_string()));
        self.state = CameraState::Error(error.clone());
        Err(error.into())
    }

    /// Switches to the opposite camera. The current stream is stopped before
    /// the new one is acquired.
    pub async fn toggle(&mut self) -> CropGuardResult<Facing> {
        let target = self.facing.opposite();
        self.open(target).await?;
        Ok(target)
    }

    /// Takes a photo from the live stream and closes the session. Front
    /// camera frames are mirrored back to match what the user saw in the
    /// preview.
    pub async fn capture(&mut self) -> CropGuardResult<CapturedImage> {
        if self.state != CameraState::Ready {
            return Err(
                CameraError::NotReady("capture requires an open stream".to_string()).into(),
            );
        }
        let Some(session) = self.session.take() else {
            return Err(
                CameraError::NotReady("capture requires an open stream".to_string()).into(),
            );
        };

        self.state = CameraState::Capturing;

        let frame = match session.stream.current_frame() {
            Ok(frame) => frame,
            Err(error) => {
                drop(session);
                self.state = CameraState::Error(error.clone());
                return Err(error.into());
            }
        };

        let facing = session.facing;
        drop(session);
        self.state = CameraState::Closed;

        let frame = if facing == Facing::Front {
            imageops::flip_horizontal(&frame)
        } else {
            frame
        };

        Ok(CapturedImage::new(frame, facing))
    }

    /// Stops the stream, if any, and returns to `Closed`. Callable from any
    /// state.
    pub fn close(&mut self) {
        self.session = None;
        self.state = CameraState::Closed;
    }
}
