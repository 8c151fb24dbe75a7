//! Gauge composition on top of the rasterizer.
//!
//! Values map onto a 270° clockwise sweep from 225° (minimum, lower-left)
//! to -45° (maximum, lower-right). Arcs, ticks and needles are built from
//! DDA lines between polar points; hubs and bezels from midpoint circles.

mod arc;
mod dial;
mod domain;
mod needle;
mod ticks;

pub use arc::{arc_vertices, draw_arc, ARC_SEGMENTS};
pub use dial::{
    Bezel, Caption, Gauge, GaugeConfig, GaugePalette, Hub, WarningZone, MAX_BEZEL_RINGS,
    MAX_HUB_RADIUS,
};
pub use domain::{needle_angle, GaugeDomain, SWEEP_DEG, SWEEP_END_DEG, SWEEP_START_DEG};
pub use needle::{draw_needle, needle_tip, NeedleStyle};
pub use ticks::{draw_tick, draw_ticks, tick_values, TickSpec, MAX_TICKS};
