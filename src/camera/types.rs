use crate::errors::{CameraError, CropGuardError, CropGuardResult};
use base64::Engine;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbaImage};

pub const JPEG_QUALITY: u8 = 85;

/// Which way the camera points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facing {
    /// Selfie camera. Previews are mirrored, so captures are mirrored back.
    Front,
    /// Environment camera, used for crop photos.
    Rear,
}

impl Facing {
    pub fn opposite(&self) -> Facing {
        match self {
            Facing::Front => Facing::Rear,
            Facing::Rear => Facing::Front,
        }
    }

    pub fn mode(&self) -> &'static str {
        match self {
            Facing::Front => "user",
            Facing::Rear => "environment",
        }
    }
}

/// Lifecycle of a camera session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CameraState {
    Closed,
    Opening,
    Ready,
    Capturing,
    Error(CameraError),
}

impl CameraState {
    pub fn is_ready(&self) -> bool {
        matches!(self, CameraState::Ready)
    }
}

/// A frame taken from the camera, already oriented for display.
#[derive(Debug, Clone)]
pub struct CapturedImage {
    frame: RgbaImage,
    facing: Facing,
}

impl CapturedImage {
    pub(crate) fn new(frame: RgbaImage, facing: Facing) -> Self {
        Self { frame, facing }
    }

    pub fn width(&self) -> u32 {
        self.frame.width()
    }

    pub fn height(&self) -> u32 {
        self.frame.height()
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn frame(&self) -> &RgbaImage {
        &self.frame
    }

    /// Encodes the frame as JPEG.
    pub fn to_jpeg(&self) -> CropGuardResult<Vec<u8>> {
        let rgb = DynamicImage::ImageRgba8(self.frame.clone()).to_rgb8();
        let mut out = Vec::new();
        let encoder = JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY);
        rgb.write_with_encoder(encoder)
            .map_err(|e| CropGuardError::Camera(CameraError::CaptureFailed(e.to_string())))?;
        Ok(out)
    }

    /// Encodes the frame as a `data:image/jpeg;base64,...` URI, the format
    /// the analysis endpoint accepts.
    pub fn to_data_uri(&self) -> CropGuardResult<String> {
        let jpeg = self.to_jpeg()?;
        Ok(format!(
            "data:image/jpeg;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(jpeg)
        ))
    }
}
