//! Polygon clipping against the homogeneous clip cube.
//!
//! Uses the Sutherland-Hodgman algorithm after projection and before the
//! perspective divide, the way fixed-function hardware does.

pub mod clip_space;

pub use clip_space::{ClipPlane, ClipSpaceClipper, ClipSpacePolygon};
