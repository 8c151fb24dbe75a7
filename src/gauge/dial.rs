//! Data-driven dial gauge.
//!
//! A [`GaugeConfig`] describes everything that differs between the
//! speedometer, tachometer and fuel gauge: value domain, tick families,
//! warning band, bezel, hub, captions and colors. [`Gauge::render`] draws
//! any of them with the same sequence of primitives.

use super::arc::{draw_arc, ARC_SEGMENTS};
use super::domain::GaugeDomain;
use super::needle::{draw_needle, NeedleStyle};
use super::ticks::{draw_ticks, TickSpec, MAX_TICKS};
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::{Pixel, Point};
use crate::label::TextPlacement;
use crate::raster::{draw_circle, draw_filled_disk, draw_ring, Octants, Pen, Surface, MAX_PEN_SIZE};
use serde::{Deserialize, Serialize};

/// Most bezel rings a dial may ask for.
pub const MAX_BEZEL_RINGS: u32 = 64;

/// Largest hub disk radius.
pub const MAX_HUB_RADIUS: i32 = 1024;

/// Colors used by a dial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaugePalette {
    /// Outer frame circle.
    pub frame: Rgba,
    /// Bezel ring inside the frame.
    pub bezel: Rgba,
    /// Warning band arc.
    pub warning: Rgba,
    /// Major ticks outside the warning zone.
    pub major_tick: Rgba,
    /// Major ticks inside the warning zone.
    pub warning_tick: Rgba,
    /// Minor ticks.
    pub minor_tick: Rgba,
    /// Scale labels.
    pub label: Rgba,
    /// Outer hub disk.
    pub hub_outer: Rgba,
    /// Inner hub disk.
    pub hub_inner: Rgba,
}

impl Default for GaugePalette {
    fn default() -> Self {
        Self {
            frame: Rgba::from_unit(0.1, 0.1, 0.1),
            bezel: Rgba::from_unit(0.22, 0.22, 0.25),
            warning: Rgba::from_unit(0.45, 0.08, 0.08),
            major_tick: Rgba::from_unit(0.88, 0.88, 0.90),
            warning_tick: Rgba::from_unit(0.75, 0.25, 0.25),
            minor_tick: Rgba::from_unit(0.72, 0.72, 0.75),
            label: Rgba::from_unit(0.82, 0.82, 0.85),
            hub_outer: Rgba::from_unit(0.6, 0.15, 0.1),
            hub_inner: Rgba::from_unit(0.75, 0.1, 0.1),
        }
    }
}

/// Value range highlighted by a band near the dial edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WarningZone {
    /// Band start value.
    pub from: f64,
    /// Band end value.
    pub to: f64,
    /// Inset of the band from the dial radius.
    #[serde(default = "default_warning_inset")]
    pub inset: f64,
    /// Pen size of the band.
    #[serde(default = "default_warning_pen")]
    pub pen_size: u32,
}

fn default_warning_inset() -> f64 {
    12.0
}

fn default_warning_pen() -> u32 {
    2
}

impl WarningZone {
    /// Band over `[from, to]` at the default inset.
    #[must_use]
    pub fn new(from: f64, to: f64) -> Self {
        Self {
            from,
            to,
            inset: default_warning_inset(),
            pen_size: default_warning_pen(),
        }
    }

    /// Whether `value` falls in the zone (inclusive, either order).
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        let (lo, hi) = if self.from <= self.to {
            (self.from, self.to)
        } else {
            (self.to, self.from)
        };
        (lo..=hi).contains(&value)
    }
}

/// Concentric rings just inside the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bezel {
    /// Inset of the outermost ring.
    pub inset: i32,
    /// Number of rings.
    pub thickness: u32,
}

impl Default for Bezel {
    fn default() -> Self {
        Self {
            inset: 3,
            thickness: 7,
        }
    }
}

/// Filled disks covering the needle pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hub {
    /// Radius of the outer disk.
    pub outer: i32,
    /// Radius of the inner disk.
    pub inner: i32,
}

/// Fixed text relative to the dial center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Caption {
    /// Text content.
    pub text: String,
    /// Offset from the center (x, y up).
    pub offset: (f64, f64),
    /// Text color.
    pub color: Rgba,
}

impl Caption {
    /// Caption at `(dx, dy)` from the center.
    #[must_use]
    pub fn new(text: impl Into<String>, dx: f64, dy: f64, color: Rgba) -> Self {
        Self {
            text: text.into(),
            offset: (dx, dy),
            color,
        }
    }
}

/// Everything needed to draw one dial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaugeConfig {
    /// Reading range mapped onto the 270° sweep.
    pub domain: GaugeDomain,
    /// Labeled ticks.
    pub major_ticks: TickSpec,
    /// Optional unlabeled ticks between the majors.
    pub minor_ticks: Option<TickSpec>,
    /// Optional highlighted range.
    pub warning: Option<WarningZone>,
    /// Pen size of the frame circle.
    pub frame_pen_size: u32,
    /// Bezel rings.
    pub bezel: Bezel,
    /// Needle length is the dial radius minus this.
    pub needle_inset: f64,
    /// Pivot disks.
    pub hub: Hub,
    /// Title, unit and end labels.
    pub captions: Vec<Caption>,
    /// Colors.
    pub palette: GaugePalette,
    /// Needle layers.
    pub needle: NeedleStyle,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self::speedometer()
    }
}

impl GaugeConfig {
    /// 0-230 km/h speedometer with a red zone from 200.
    #[must_use]
    pub fn speedometer() -> Self {
        Self {
            domain: GaugeDomain::fixed(0.0, 230.0),
            major_ticks: TickSpec::new(20.0, 18.0, 32.0)
                .with_pen_size(3)
                .with_labels(50.0),
            minor_ticks: Some(TickSpec::new(20.0, 20.0, 27.0).with_offset(10.0)),
            warning: Some(WarningZone::new(200.0, 230.0)),
            frame_pen_size: 3,
            bezel: Bezel::default(),
            needle_inset: 30.0,
            hub: Hub { outer: 9, inner: 5 },
            captions: vec![
                Caption::new("SPEED", -25.0, -85.0, Rgba::from_unit(0.78, 0.78, 0.80)),
                Caption::new("km/h", -15.0, -98.0, Rgba::from_unit(0.82, 0.82, 0.85)),
            ],
            palette: GaugePalette::default(),
            needle: NeedleStyle::default(),
        }
    }

    /// 0-8 (×1000 RPM) tachometer with a red zone from 7.
    #[must_use]
    pub fn tachometer() -> Self {
        Self {
            domain: GaugeDomain::fixed(0.0, 8.0),
            major_ticks: TickSpec::new(1.0, 15.0, 25.0)
                .with_pen_size(2)
                .with_labels(40.0),
            minor_ticks: None,
            warning: Some(WarningZone::new(7.0, 8.0)),
            hub: Hub { outer: 7, inner: 4 },
            captions: vec![Caption::new(
                "RPM x1000",
                -35.0,
                -54.0,
                Rgba::from_unit(0.82, 0.82, 0.85),
            )],
            palette: GaugePalette {
                bezel: Rgba::from_unit(0.22, 0.20, 0.20),
                ..GaugePalette::default()
            },
            ..Self::speedometer()
        }
    }

    /// 0-100 % fuel gauge with a red zone below 30.
    #[must_use]
    pub fn fuel() -> Self {
        Self {
            domain: GaugeDomain::fixed(0.0, 100.0),
            major_ticks: TickSpec::new(25.0, 15.0, 25.0).with_pen_size(2),
            minor_ticks: None,
            warning: Some(WarningZone::new(0.0, 30.0)),
            hub: Hub { outer: 7, inner: 4 },
            captions: vec![
                Caption::new("E", -45.0, -10.0, Rgba::from_unit(0.75, 0.25, 0.25)),
                Caption::new("F", 30.0, -10.0, Rgba::from_unit(0.15, 0.60, 0.30)),
                Caption::new("FUEL %", -20.0, -40.0, Rgba::from_unit(0.78, 0.78, 0.80)),
            ],
            palette: GaugePalette {
                bezel: Rgba::from_unit(0.22, 0.24, 0.20),
                ..GaugePalette::default()
            },
            ..Self::speedometer()
        }
    }

    /// Check the configuration for values no dial can draw.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        let span = (self.domain.max() - self.domain.min()).abs();
        validate_ticks("major_ticks", &self.major_ticks, span)?;
        if let Some(minor) = &self.minor_ticks {
            validate_ticks("minor_ticks", minor, span)?;
        }
        if let Some(zone) = &self.warning {
            if !zone.from.is_finite() || !zone.to.is_finite() || !zone.inset.is_finite() {
                return Err(invalid("warning", "bounds and inset must be finite"));
            }
            validate_pen_size("warning.pen_size", zone.pen_size)?;
        }
        validate_pen_size("frame_pen_size", self.frame_pen_size)?;
        if self.bezel.inset < 0 {
            return Err(invalid("bezel.inset", "must not be negative"));
        }
        if self.bezel.thickness > MAX_BEZEL_RINGS {
            return Err(invalid("bezel.thickness", &format!("must be at most {MAX_BEZEL_RINGS}")));
        }
        if !self.needle_inset.is_finite() || self.needle_inset < 0.0 {
            return Err(invalid("needle_inset", "must be a non-negative number"));
        }
        if self.hub.outer < 0 || self.hub.inner < 0 {
            return Err(invalid("hub", "radii must not be negative"));
        }
        if self.hub.outer > MAX_HUB_RADIUS || self.hub.inner > MAX_HUB_RADIUS {
            return Err(invalid("hub", &format!("radii must be at most {MAX_HUB_RADIUS}")));
        }
        if !(0.0..=1.0).contains(&self.needle.highlight_fraction) {
            return Err(invalid("needle.highlight_fraction", "must be within [0, 1]"));
        }
        if let Some(shadow) = &self.needle.shadow {
            validate_pen_size("needle.shadow", shadow.size)?;
        }
        validate_pen_size("needle.body", self.needle.body.size)?;
        if let Some(highlight) = &self.needle.highlight {
            validate_pen_size("needle.highlight", highlight.size)?;
        }
        Ok(())
    }

    /// Major-tick color for `value`.
    fn major_color(&self, value: f64) -> Rgba {
        match &self.warning {
            Some(zone) if zone.contains(value) => self.palette.warning_tick,
            _ => self.palette.major_tick,
        }
    }
}

fn validate_ticks(key: &str, spec: &TickSpec, span: f64) -> Result<()> {
    if !spec.step.is_finite() || spec.step <= 0.0 {
        return Err(invalid(key, "step must be a positive number"));
    }
    if !spec.offset.is_finite() || !spec.outer_inset.is_finite() || !spec.inner_inset.is_finite() {
        return Err(invalid(key, "offset and insets must be finite"));
    }
    if (span - spec.offset) / spec.step >= MAX_TICKS as f64 {
        return Err(invalid(
            key,
            &format!("step is too small for the domain (more than {MAX_TICKS} ticks)"),
        ));
    }
    validate_pen_size(key, spec.pen_size)
}

fn validate_pen_size(key: &str, size: u32) -> Result<()> {
    if size > MAX_PEN_SIZE {
        return Err(invalid(key, &format!("pen size must be at most {MAX_PEN_SIZE}")));
    }
    Ok(())
}

fn invalid(key: &str, message: &str) -> Error {
    Error::InvalidConfig {
        key: key.to_string(),
        message: message.to_string(),
    }
}

/// A validated dial.
#[derive(Debug, Clone, PartialEq)]
pub struct Gauge {
    config: GaugeConfig,
}

impl Gauge {
    /// Validate `config` and wrap it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if [`GaugeConfig::validate`] fails.
    pub fn new(config: GaugeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration being drawn.
    #[must_use]
    pub fn config(&self) -> &GaugeConfig {
        &self.config
    }

    /// Draw the dial for `value` and return its text placements.
    ///
    /// Drawing order is frame, bezel, warning band, major ticks, minor
    /// ticks, needle, hub, so the needle sits over the scale and under the
    /// hub. The surface pen is restored afterwards.
    pub fn render<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        center: Pixel,
        radius: i32,
        value: f64,
    ) -> Vec<TextPlacement> {
        let cfg = &self.config;
        let saved = surface.pen();
        let c = Point::from(center);
        let r = f64::from(radius);
        log::trace!("gauge at {center:?} r={radius} value={value}");

        surface.set_pen(Pen::sized(cfg.palette.frame, cfg.frame_pen_size));
        draw_circle(surface, radius, center.x, center.y);

        surface.set_pen(Pen::new(cfg.palette.bezel));
        draw_ring(
            surface,
            radius - cfg.bezel.inset,
            cfg.bezel.thickness,
            center.x,
            center.y,
            Octants::ALL,
        );

        if let Some(zone) = &cfg.warning {
            surface.set_pen(Pen::sized(cfg.palette.warning, zone.pen_size));
            let start = cfg.domain.angle_for(zone.from);
            let end = cfg.domain.angle_for(zone.to);
            draw_arc(surface, c, r - zone.inset, start, end, ARC_SEGMENTS);
        }

        let mut texts = draw_ticks(
            surface,
            c,
            r,
            &cfg.domain,
            &cfg.major_ticks,
            |v| cfg.major_color(v),
            cfg.palette.label,
        );

        if let Some(minor) = &cfg.minor_ticks {
            let color = cfg.palette.minor_tick;
            let label = cfg.palette.label;
            texts.extend(draw_ticks(surface, c, r, &cfg.domain, minor, |_| color, label));
        }

        draw_needle(surface, c, r - cfg.needle_inset, value, &cfg.domain, &cfg.needle);

        surface.set_pen(Pen::new(cfg.palette.hub_outer));
        draw_filled_disk(surface, cfg.hub.outer, center.x, center.y, 1);
        surface.set_pen(Pen::new(cfg.palette.hub_inner));
        draw_filled_disk(surface, cfg.hub.inner, center.x, center.y, 1);

        texts.extend(cfg.captions.iter().map(|cap| {
            TextPlacement::new(cap.text.clone(), c.offset(cap.offset.0, cap.offset.1), cap.color)
        }));

        surface.set_pen(saved);
        texts
    }
}
