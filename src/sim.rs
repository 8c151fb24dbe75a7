//! Vehicle state behind the instruments.
//!
//! [`DashboardState::tick`] advances the simulation by one fixed step of
//! [`TICK_MS`] milliseconds. Nothing here reads a clock, so runs are fully
//! reproducible.

use serde::{Deserialize, Serialize};

/// Simulation step in milliseconds.
pub const TICK_MS: u32 = 16;

/// Top speed in km/h.
pub const MAX_SPEED: f64 = 230.0;

/// Change of target speed per tick while a pedal is held.
pub const TARGET_STEP: f64 = 3.0;

/// Largest change of actual speed per tick.
pub const SPEED_STEP: f64 = 1.6;

/// Speed lost per brake press.
pub const BRAKE_STEP: f64 = 20.0;

/// Fuel level below which the warning light comes on.
pub const FUEL_WARNING_LEVEL: f64 = 20.0;

/// Ticks of driving between fuel deductions.
const FUEL_INTERVAL: u32 = 30;

/// Engine temperature ceiling in °C.
const MAX_ENGINE_TEMP: f64 = 120.0;

/// How long a turn signal stays on after activation.
pub const SIGNAL_DURATION_MS: u32 = 1000;

/// Length of one blink phase.
pub const BLINK_PHASE_MS: u32 = 250;

/// One side's turn signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TurnSignal {
    active: bool,
    elapsed_ms: u32,
}

impl TurnSignal {
    /// Start signaling. Re-activating a running signal does not restart it.
    pub fn activate(&mut self) {
        if !self.active {
            self.active = true;
            self.elapsed_ms = 0;
        }
    }

    /// Stop signaling.
    pub fn cancel(&mut self) {
        self.active = false;
        self.elapsed_ms = 0;
    }

    /// Whether the signal is running.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Milliseconds since activation.
    #[must_use]
    pub const fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    /// Whether the arrow is lit now: on during even blink phases.
    #[must_use]
    pub const fn is_lit(&self) -> bool {
        self.active && (self.elapsed_ms / BLINK_PHASE_MS) % 2 == 0
    }

    fn advance(&mut self, ms: u32) {
        if !self.active {
            return;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(ms);
        if self.elapsed_ms >= SIGNAL_DURATION_MS {
            self.cancel();
        }
    }
}

/// Pedal state for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    /// Accelerator held.
    pub accelerate: bool,
    /// Decelerator held.
    pub decelerate: bool,
}

impl Controls {
    /// Accelerator only.
    pub const ACCELERATE: Self = Self {
        accelerate: true,
        decelerate: false,
    };

    /// Decelerator only.
    pub const DECELERATE: Self = Self {
        accelerate: false,
        decelerate: true,
    };
}

/// Everything the dashboard displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardState {
    /// Current speed in km/h.
    pub speed: f64,
    /// Speed the car is converging to.
    pub target_speed: f64,
    /// Engine speed in thousands of RPM.
    pub rpm: f64,
    /// Fuel level in percent.
    pub fuel: f64,
    /// Engine temperature in °C.
    pub engine_temp: f64,
    /// Fuel warning light state.
    pub fuel_warning: bool,
    /// Distance driven in meters.
    pub distance_m: f64,
    /// Left turn signal.
    pub left_signal: TurnSignal,
    /// Right turn signal.
    pub right_signal: TurnSignal,
    consumption_counter: u32,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            speed: 0.0,
            target_speed: 0.0,
            rpm: 0.0,
            fuel: 100.0,
            engine_temp: 20.0,
            fuel_warning: false,
            distance_m: 0.0,
            left_signal: TurnSignal::default(),
            right_signal: TurnSignal::default(),
            consumption_counter: 0,
        }
    }
}

impl DashboardState {
    /// Parked car with a full tank and a cold engine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fuel level, clamped to `[0, 100]`, and update the warning.
    pub fn set_fuel(&mut self, percent: f64) {
        self.fuel = percent.clamp(0.0, 100.0);
        self.fuel_warning = self.fuel < FUEL_WARNING_LEVEL;
    }

    /// Advance one step.
    pub fn tick(&mut self, controls: &Controls) {
        if controls.accelerate {
            self.target_speed = (self.target_speed + TARGET_STEP).min(MAX_SPEED);
        }
        if controls.decelerate {
            self.target_speed = (self.target_speed - TARGET_STEP).max(0.0);
        }

        if self.speed < self.target_speed {
            self.speed = (self.speed + SPEED_STEP).min(self.target_speed);
        } else if self.speed > self.target_speed {
            self.speed = (self.speed - SPEED_STEP).max(self.target_speed);
        }

        let dt = f64::from(TICK_MS) / 1000.0;
        self.distance_m += self.speed / 3.6 * dt;

        self.update_rpm();
        self.update_engine_temp();
        self.consume_fuel();

        self.left_signal.advance(TICK_MS);
        self.right_signal.advance(TICK_MS);
    }

    /// Run `n` ticks with the same controls.
    pub fn run(&mut self, controls: &Controls, n: u32) {
        for _ in 0..n {
            self.tick(controls);
        }
    }

    /// Drop speed by [`BRAKE_STEP`], pulling the target down with it.
    pub fn brake(&mut self) {
        self.speed = (self.speed - BRAKE_STEP).max(0.0);
        self.target_speed = (self.target_speed - BRAKE_STEP).max(0.0);
        log::debug!("brake: speed {:.1} km/h", self.speed);
    }

    /// Fill the tank and clear the warning.
    pub fn refuel(&mut self) {
        self.set_fuel(100.0);
        self.consumption_counter = 0;
        log::debug!("refuel");
    }

    /// Start the left signal, cancelling the right one.
    pub fn signal_left(&mut self) {
        if !self.left_signal.is_active() {
            self.right_signal.cancel();
        }
        self.left_signal.activate();
    }

    /// Start the right signal, cancelling the left one.
    pub fn signal_right(&mut self) {
        if !self.right_signal.is_active() {
            self.left_signal.cancel();
        }
        self.right_signal.activate();
    }

    fn update_rpm(&mut self) {
        self.rpm = self.speed / MAX_SPEED * 7.0 + 0.5;
    }

    fn update_engine_temp(&mut self) {
        let target = (20.0 + self.rpm * 8.0 + self.speed * 0.2).min(MAX_ENGINE_TEMP);
        if self.engine_temp < target {
            self.engine_temp += 0.5;
        } else if self.engine_temp > target {
            self.engine_temp -= 0.3;
        }
    }

    fn consume_fuel(&mut self) {
        if self.speed > 0.0 {
            self.consumption_counter += 1;
            if self.consumption_counter > FUEL_INTERVAL {
                self.fuel = (self.fuel - 0.5 * (1.0 + self.speed / 100.0)).max(0.0);
                self.consumption_counter = 0;
            }
        }
        self.fuel_warning = self.fuel < FUEL_WARNING_LEVEL;
    }
}
