use crate::camera::constraints::CaptureConstraints;
use crate::errors::CameraError;
use async_trait::async_trait;
use image::RgbaImage;

/// A source of camera streams. Implemented over the platform camera API in
/// the app shell; tests implement it in memory.
#[async_trait]
pub trait CameraDevice: Send + Sync {
    /// Opens a stream satisfying the constraints, or explains why it cannot.
    async fn acquire(
        &self,
        constraints: &CaptureConstraints,
    ) -> Result<Box<dyn CameraStream>, CameraError>;
}

/// A live camera stream.
#[async_trait]
pub trait CameraStream: Send + Sync {
    /// Resolves once the stream has produced its first frame.
    async fn await_first_frame(&mut self) -> Result<(), CameraError>;

    /// Delivered resolution, which may differ from what was requested.
    fn resolution(&self) -> (u32, u32);

    /// Snapshot of the most recent frame.
    fn current_frame(&self) -> Result<RgbaImage, CameraError>;

    /// Releases the underlying device. Safe to call more than once.
    fn stop(&self);
}
