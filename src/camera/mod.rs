mod constraints;
mod controller;
mod device;
mod types;


pub use constraints::{CaptureConstraints, FacingConstraint, IDEAL_HEIGHT, IDEAL_WIDTH};
pub use controller::{CameraController, FIRST_FRAME_TIMEOUT};
pub use device::{CameraDevice, CameraStream};
pub use types::{CameraState, CapturedImage, Facing, JPEG_QUALITY};
