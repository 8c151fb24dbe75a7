//! Software rasterization of lines and circles.
//!
//! Every gauge, tick, needle and frame on the dashboard bottoms out in the
//! two primitives defined here. Both are incremental: no per-pixel distance
//! tests and, for circles, no floating point at all.
//!
//! # Algorithms
//!
//! - **DDA line**: equal steps along the dominant axis, rounding the minor axis
//! - **Midpoint circle**: one octant by decision parameter, mirrored eight ways
//! - **Filled disk / ring**: unions of concentric midpoint circles
//!
//! # References
//!
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital
//!   display of circular arcs." *Communications of the ACM*, 20(2).

mod circle;
mod line;
mod sink;

pub use circle::{
    disk_radii, draw_circle, draw_filled_disk, draw_filled_partial_disk, draw_partial_circle,
    draw_ring, stride_for_layers, MidpointCircle, Octants,
};
pub use line::{draw_line, draw_line_between, DdaLine};
pub use sink::{Pen, PixelRecorder, PixelSink, Stroke, Surface, MAX_PEN_SIZE};
