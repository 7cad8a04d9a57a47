use crate::camera::types::Facing;

pub const IDEAL_WIDTH: u32 = 1280;
pub const IDEAL_HEIGHT: u32 = 720;

/// One set of constraints to try when acquiring a camera stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureConstraints {
    /// Requested direction, and whether the device may substitute another.
    pub facing: Option<FacingConstraint>,
    /// Preferred resolution; the device may deliver something else.
    pub ideal_resolution: Option<(u32, u32)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacingConstraint {
    pub facing: Facing,
    pub exact: bool,
}

impl CaptureConstraints {
    /// Fallback ladder for a requested direction, most specific first:
    /// preferred facing with resolution, exact facing, bare facing, then
    /// any camera at all.
    pub fn ladder(facing: Facing) -> Vec<CaptureConstraints> {
        vec![
            CaptureConstraints {
                facing: Some(FacingConstraint {
                    facing,
                    exact: false,
                }),
                ideal_resolution: Some((IDEAL_WIDTH, IDEAL_HEIGHT)),
            },
            CaptureConstraints {
                facing: Some(FacingConstraint { facing, exact: true }),
                ideal_resolution: None,
            },
            CaptureConstraints {
                facing: Some(FacingConstraint {
                    facing,
                    exact: false,
                }),
                ideal_resolution: None,
            },
            CaptureConstraints {
                facing: None,
                ideal_resolution: None,
            },
        ]
    }
}
