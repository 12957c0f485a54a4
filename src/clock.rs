//! Clock model: wall-time snapshots and the time → angle conversion.
//!
//! All angles of one frame must derive from a single [`WallTime`] snapshot so
//! the hour/minute/second hands never reflect different instants (tearing).

use std::f64::consts::TAU;

use crate::foundation::error::{SprocketError, SprocketResult};

/// Wall-clock instant with sub-second precision.
///
/// An immutable per-frame snapshot; the source of truth for all angles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WallTime {
    /// Hour of day, `0..=23`.
    pub hour: u8,
    /// Minute of hour, `0..=59`.
    pub minute: u8,
    /// Second of minute, `0..=59`.
    pub second: u8,
    /// Millisecond of second, `0..=999`.
    pub millisecond: u16,
}

impl WallTime {
    /// Create a validated wall-time snapshot.
    pub fn new(hour: u8, minute: u8, second: u8, millisecond: u16) -> SprocketResult<Self> {
        if hour >= 24 || minute >= 60 || second >= 60 || millisecond >= 1000 {
            return Err(SprocketError::validation(format!(
                "wall time out of range: {hour:02}:{minute:02}:{second:02}.{millisecond:03}"
            )));
        }
        Ok(Self {
            hour,
            minute,
            second,
            millisecond,
        })
    }

    /// Fractional seconds within the current minute, `[0, 60)`.
    pub fn seconds_fraction(self) -> f64 {
        f64::from(self.second) + f64::from(self.millisecond) / 1000.0
    }

    /// Fractional minutes within the current hour, `[0, 60)`.
    pub fn minute_fraction(self) -> f64 {
        f64::from(self.minute) + self.seconds_fraction() / 60.0
    }

    /// Fractional hours on a 12-hour dial, `[0, 12)`.
    pub fn hour_fraction(self) -> f64 {
        f64::from(self.hour % 12) + self.minute_fraction() / 60.0
    }
}

/// Hand and ornament angles derived from one [`WallTime`] snapshot.
///
/// Radians, `0` = up (12 o'clock), clockwise positive. Each continuous angle
/// incorporates the finer-grained field below it so hands glide instead of
/// jumping on field rollover. `second_tick` is the exception: it is quantized
/// to whole seconds because the second hand ticks while the gears glide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleSet {
    /// Continuous hour-hand angle, `[0, 2π)`.
    pub hour: f64,
    /// Continuous minute-hand angle, `[0, 2π)`.
    pub minute: f64,
    /// Continuous second angle, `[0, 2π)`; drives ornament rotation.
    pub second: f64,
    /// Quantized second-hand angle, one of `k·2π/60` for `k = 0..=59`.
    pub second_tick: f64,
}

/// Derive the full angle set from a wall-time snapshot.
///
/// Pure: no side effects and no error cases.
pub fn compute_angles(time: WallTime) -> AngleSet {
    AngleSet {
        hour: time.hour_fraction() / 12.0 * TAU,
        minute: time.minute_fraction() / 60.0 * TAU,
        second: time.seconds_fraction() / 60.0 * TAU,
        second_tick: f64::from(time.second) / 60.0 * TAU,
    }
}

/// Host clock boundary.
///
/// The host owns the real clock (and its time zone); the engine only ever asks
/// for one snapshot per frame.
pub trait TimeSource {
    /// Current local wall time.
    fn now(&self) -> WallTime;
}

/// [`TimeSource`] backed by the system clock in the local time zone.
///
/// Resampling the local zone on every call means an asynchronous time-zone
/// change is picked up by the very next frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> WallTime {
        use chrono::Timelike;

        let now = chrono::Local::now();
        WallTime {
            hour: now.hour() as u8,
            minute: now.minute() as u8,
            second: now.second().min(59) as u8,
            // Leap seconds are folded into the previous second.
            millisecond: now.timestamp_subsec_millis().min(999) as u16,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/clock.rs"]
mod tests;
