//! Full instrument panel for one frame.

use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::config::DashboardConfig;
use crate::error::Result;
use crate::gauge::Gauge;
use crate::geometry::Pixel;
use crate::label::TextPlacement;
use crate::raster::{Pen, Surface};
use crate::sim::DashboardState;
use crate::widgets::{
    draw_dashboard_backdrop, draw_dashboard_frame, draw_digital_display, draw_indicator_light,
    draw_turn_arrow, DisplayPalette, TurnDirection,
};
use serde::{Deserialize, Serialize};

/// Where a dial sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialPlacement {
    /// Pivot.
    pub center: Pixel,
    /// Frame radius.
    pub radius: i32,
}

impl DialPlacement {
    const fn new(x: i32, y: i32, radius: i32) -> Self {
        Self {
            center: Pixel::new(x, y),
            radius,
        }
    }
}

/// Bottom-left corner and size of a digital read-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayPlacement {
    /// Bottom-left x.
    pub x: i32,
    /// Bottom-left y.
    pub y: i32,
    /// Width.
    pub width: i32,
    /// Height.
    pub height: i32,
}

/// Half-ring around the instrument cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FramePlacement {
    /// Center of the half circle.
    pub center: Pixel,
    /// Outer radius.
    pub radius: i32,
    /// Number of rings.
    pub thickness: u32,
    /// Ring color.
    pub color: Rgba,
    /// Optional fill inside the ring.
    #[serde(default)]
    pub backdrop: Option<Rgba>,
}

/// Concentric layers used for the frame backdrop.
const BACKDROP_LAYERS: u32 = 40;

/// Positions of every dashboard element in a y-up window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardLayout {
    /// Window width.
    pub width: u32,
    /// Window height.
    pub height: u32,
    /// Color behind the panel.
    pub background: Rgba,
    /// Height of the panel strip along the bottom edge.
    pub panel_height: u32,
    /// Panel fill color.
    pub panel_color: Rgba,
    /// Cluster frame.
    pub frame: FramePlacement,
    /// Speedometer dial.
    pub speedometer: DialPlacement,
    /// Tachometer dial.
    pub tachometer: DialPlacement,
    /// Fuel dial.
    pub fuel: DialPlacement,
    /// Speed read-out.
    pub speed_display: DisplayPlacement,
    /// Engine temperature read-out.
    pub temp_display: DisplayPlacement,
    /// Left arrow anchor.
    pub left_arrow: Pixel,
    /// Right arrow anchor.
    pub right_arrow: Pixel,
    /// Fuel warning light.
    pub warning_light: DialPlacement,
    /// Fuel warning light color.
    pub warning_color: Rgba,
}

impl Default for DashboardLayout {
    fn default() -> Self {
        Self {
            width: 1500,
            height: 1000,
            background: Rgba::from_unit(0.4, 0.6, 0.9),
            panel_height: 350,
            panel_color: Rgba::from_unit(0.1, 0.1, 0.1),
            frame: FramePlacement {
                center: Pixel::new(750, 0),
                radius: 350,
                thickness: 10,
                color: Rgba::from_unit(0.75, 0.75, 0.78),
                backdrop: None,
            },
            speedometer: DialPlacement::new(770, 210, 120),
            tachometer: DialPlacement::new(560, 140, 80),
            fuel: DialPlacement::new(980, 130, 70),
            speed_display: DisplayPlacement {
                x: 695,
                y: 30,
                width: 140,
                height: 40,
            },
            temp_display: DisplayPlacement {
                x: 910,
                y: 200,
                width: 70,
                height: 40,
            },
            left_arrow: Pixel::new(515, 280),
            right_arrow: Pixel::new(962, 280),
            warning_light: DialPlacement::new(1050, 50, 10),
            warning_color: Rgba::RED,
        }
    }
}

/// The three dials plus widgets, ready to draw frames.
#[derive(Debug, Clone)]
pub struct Dashboard {
    layout: DashboardLayout,
    speedometer: Gauge,
    tachometer: Gauge,
    fuel: Gauge,
    display_palette: DisplayPalette,
}

impl Dashboard {
    /// Build a dashboard from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any gauge configuration is invalid.
    pub fn new(config: &DashboardConfig) -> Result<Self> {
        Ok(Self {
            layout: config.layout,
            speedometer: Gauge::new(config.speedometer.clone())?,
            tachometer: Gauge::new(config.tachometer.clone())?,
            fuel: Gauge::new(config.fuel.clone())?,
            display_palette: config.display,
        })
    }

    /// Layout in use.
    #[must_use]
    pub fn layout(&self) -> &DashboardLayout {
        &self.layout
    }

    /// Draw one frame for `state` and return every text placement.
    pub fn render(&self, canvas: &mut Canvas<'_>, state: &DashboardState) -> Vec<TextPlacement> {
        let l = &self.layout;
        log::debug!(
            "frame: speed={:.1} rpm={:.2} fuel={:.1} temp={:.1}",
            state.speed,
            state.rpm,
            state.fuel,
            state.engine_temp
        );

        canvas.clear(l.background);
        canvas.fill_rect(0, 0, canvas.width(), l.panel_height, l.panel_color);

        let saved = canvas.pen();
        let frame = l.frame;
        if let Some(fill) = frame.backdrop {
            canvas.set_pen(Pen::new(fill));
            let inner = frame.radius.saturating_sub(frame.thickness as i32);
            draw_dashboard_backdrop(canvas, frame.center.x, frame.center.y, inner, BACKDROP_LAYERS);
        }
        canvas.set_pen(Pen::new(frame.color));
        draw_dashboard_frame(canvas, frame.center.x, frame.center.y, frame.radius, frame.thickness);
        canvas.set_pen(saved);

        let mut texts = Vec::new();
        for (gauge, at, value) in [
            (&self.speedometer, l.speedometer, state.speed),
            (&self.tachometer, l.tachometer, state.rpm),
            (&self.fuel, l.fuel, state.fuel),
        ] {
            texts.extend(gauge.render(canvas, at.center, at.radius, value));
        }

        for (at, value, unit) in [
            (l.speed_display, state.speed, "km/h"),
            (l.temp_display, state.engine_temp, "°C"),
        ] {
            texts.extend(draw_digital_display(
                canvas,
                at.x,
                at.y,
                at.width,
                at.height,
                value,
                unit,
                &self.display_palette,
            ));
        }

        draw_turn_arrow(
            canvas,
            l.left_arrow.x,
            l.left_arrow.y,
            TurnDirection::Left,
            state.left_signal.is_lit(),
        );
        draw_turn_arrow(
            canvas,
            l.right_arrow.x,
            l.right_arrow.y,
            TurnDirection::Right,
            state.right_signal.is_lit(),
        );

        draw_indicator_light(
            canvas,
            l.warning_light.center.x,
            l.warning_light.center.y,
            l.warning_light.radius,
            state.fuel_warning,
            l.warning_color,
        );

        texts
    }
}
