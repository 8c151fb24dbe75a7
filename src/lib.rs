//! # dashboard-raster
//!
//! Software rasterizer and analog gauge composer for car dashboards.
//!
//! Everything on the panel is built from two primitives: DDA lines and
//! midpoint circles. Arcs, filled disks, tick fans, layered needles and the
//! dial gauges themselves are compositions of those, emitted point by point
//! into a [`raster::PixelSink`].
//!
//! ## Features
//!
//! - **Integer-exact circles**: midpoint algorithm with octant masks for
//!   partial circles, rings and half-disk fills
//! - **Data-driven gauges**: one [`gauge::Gauge`] renderer with speedometer,
//!   tachometer and fuel presets
//! - **Deterministic simulation**: fixed-step [`sim::DashboardState`]
//! - **Headless output**: RGBA framebuffer and PNG encoding
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dashboard_raster::prelude::*;
//!
//! let mut fb = Framebuffer::new(1500, 1000)?;
//! let dashboard = Dashboard::new(&DashboardConfig::default())?;
//!
//! let mut state = DashboardState::new();
//! state.run(&Controls::ACCELERATE, 120);
//!
//! let labels = dashboard.render(&mut Canvas::new(&mut fb), &state);
//! PngEncoder::write_to_file(&fb, "dashboard.png")?;
//! ```
//!
//! Text is never rasterized: renderers return [`label::TextPlacement`]s
//! for the caller to draw with whatever font machinery it has.
//!
//! ## References
//!
//! - Bresenham, J. (1977). "A Linear Algorithm for Incremental Digital
//!   Display of Circular Arcs." *CACM* 20(2).
//! - Foley, J. D., van Dam, A., et al. (1990). *Computer Graphics:
//!   Principles and Practice*, §3.2-3.3.

#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in rasterization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::too_many_arguments)]

// ============================================================================
// Core Modules
// ============================================================================

/// RGBA color type.
pub mod color;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Geometric primitives (pixels, points, lines).
pub mod geometry;

/// Line and circle rasterization.
pub mod raster;

// ============================================================================
// Composition Modules
// ============================================================================

/// Gauge composer: arcs, ticks, needles, dials.
pub mod gauge;

/// Text placements returned instead of rendered glyphs.
pub mod label;

/// Frame, read-outs, indicator light, turn arrows.
pub mod widgets;

/// Complete instrument panel.
pub mod dashboard;

// ============================================================================
// Surfaces and Output
// ============================================================================

/// Pen-carrying y-up drawing surface.
pub mod canvas;

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// State and Configuration
// ============================================================================

/// Fixed-step vehicle simulation.
pub mod sim;

/// YAML configuration.
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for dashboard-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust,ignore
/// use dashboard_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::color::Rgba;
    pub use crate::config::DashboardConfig;
    pub use crate::dashboard::{Dashboard, DashboardLayout};
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::gauge::{
        draw_arc, draw_needle, needle_angle, Gauge, GaugeConfig, GaugeDomain, NeedleStyle,
    };
    pub use crate::geometry::{Line, Pixel, Point};
    pub use crate::label::{TextAlign, TextPlacement};
    pub use crate::output::PngEncoder;
    pub use crate::raster::{
        draw_circle, draw_filled_disk, draw_line, draw_partial_circle, Octants, Pen, PixelRecorder,
        PixelSink, Surface,
    };
    pub use crate::sim::{Controls, DashboardState};
    pub use crate::widgets::TurnDirection;
}
