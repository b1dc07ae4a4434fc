//! Piecewise-linear interpolation over criterion waypoints.
//!
//! Given a raw value x and a criterion's waypoint sequence, locate the
//! two waypoints whose x-range contains x (the *bounding segment*) and
//! evaluate the line through them at x. Results carry the pipeline-wide
//! 4-significant-digit rounding.

mod linear;

pub use linear::{bounding_segment, interpolate, BoundingSegment};
