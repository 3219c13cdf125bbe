//! Time Engine - timezone-aware time data and clock hand angles
//!
//! All angles are in degrees, measured clockwise from 12 o'clock, before the
//! -90 draw-space correction applied by `hand_vector`.

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;

/// Time data for a single render tick, local to one timezone
#[derive(Debug, Clone)]
pub struct TimeData {
    /// Hour in 24-hour format (0-23)
    pub hour24: u32,
    /// Minute (0-59)
    pub minute: u32,
    /// Second (0-59)
    pub second: u32,
    /// The raw DateTime for additional formatting needs
    pub local_datetime: DateTime<Tz>,
}

impl TimeData {
    /// Format the time as zero-padded 24-hour "HH:MM:SS"
    pub fn format_time(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour24, self.minute, self.second)
    }
}

/// Hand angles for the analog face, degrees clockwise from 12 o'clock
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    /// Hour hand: (hour % 12) * 30 + minute * 0.5, in [0, 360)
    pub hour_deg: f64,
    /// Minute hand: minute * 6, in [0, 354]
    pub minute_deg: f64,
    /// Second hand: second * 6, in [0, 354]
    pub second_deg: f64,
}

/// Compute the current time data for a given timezone
pub fn compute_time_data(tz: Tz) -> TimeData {
    compute_time_data_at(tz, Utc::now())
}

/// Compute time data for a given timezone at a specific instant
pub fn compute_time_data_at(tz: Tz, now_utc: DateTime<Utc>) -> TimeData {
    let local = now_utc.with_timezone(&tz);
    TimeData {
        hour24: local.hour(),
        minute: local.minute(),
        second: local.second(),
        local_datetime: local,
    }
}

/// Compute the current hand angles for a given timezone
pub fn compute_hand_angles(tz: Tz) -> HandAngles {
    compute_hand_angles_at(tz, Utc::now())
}

/// Compute hand angles for a given timezone at a specific instant
pub fn compute_hand_angles_at(tz: Tz, now_utc: DateTime<Utc>) -> HandAngles {
    angles_for(&compute_time_data_at(tz, now_utc))
}

/// Hand angles for an already-computed tick
pub fn angles_for(data: &TimeData) -> HandAngles {
    let hour = data.hour24 % 12;
    HandAngles {
        hour_deg: hour as f64 * 30.0 + data.minute as f64 * 0.5,
        minute_deg: data.minute as f64 * 6.0,
        second_deg: data.second as f64 * 6.0,
    }
}

/// Offset from the face center to a point at `radius` along a hand angle.
///
/// Returns (dx, dy) in screen convention (y grows downward); callers drawing
/// in a y-up coordinate space negate dy. The -90 rotates the zero-angle
/// reference from the +x axis to the 12 o'clock position.
pub fn hand_vector(angle_deg: f64, radius: f64) -> (f64, f64) {
    let rad = (angle_deg - 90.0).to_radians();
    (radius * rad.cos(), radius * rad.sin())
}

/// Marker dot radius for face index `i` (0-59): hour ticks are largest,
/// five-minute ticks medium, minute ticks small.
pub fn marker_radius(i: u32) -> f32 {
    if i % 15 == 0 {
        20.0
    } else if i % 5 == 0 {
        8.0
    } else {
        2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant_in(tz: Tz, h: u32, m: u32, s: u32) -> DateTime<Utc> {
        tz.with_ymd_and_hms(2026, 3, 1, h, m, s)
            .single()
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_minute_angle_range() {
        let tz: Tz = "Europe/London".parse().unwrap();
        for minute in 0..60 {
            let angles = compute_hand_angles_at(tz, instant_in(tz, 10, minute, 0));
            assert_eq!(angles.minute_deg, minute as f64 * 6.0);
            assert!(angles.minute_deg >= 0.0 && angles.minute_deg <= 354.0);
        }
    }

    #[test]
    fn test_hour_angle_formula() {
        let tz: Tz = "Europe/London".parse().unwrap();
        for hour in 0..24 {
            for minute in (0..60).step_by(7) {
                let angles = compute_hand_angles_at(tz, instant_in(tz, hour, minute, 0));
                let expected = (hour % 12) as f64 * 30.0 + minute as f64 * 0.5;
                assert_eq!(angles.hour_deg, expected);
                assert!(angles.hour_deg >= 0.0 && angles.hour_deg < 360.0);
            }
        }
    }

    #[test]
    fn test_marker_radius_table() {
        for i in 0..60 {
            let r = marker_radius(i);
            if i % 15 == 0 {
                assert_eq!(r, 20.0);
            } else if i % 5 == 0 {
                assert_eq!(r, 8.0);
            } else {
                assert_eq!(r, 2.0);
            }
        }
    }

    #[test]
    fn test_format_time_zero_padded() {
        let tz: Tz = "Europe/Paris".parse().unwrap();
        let data = compute_time_data_at(tz, instant_in(tz, 7, 3, 9));
        assert_eq!(data.format_time(), "07:03:09");
    }

    #[test]
    fn test_tehran_afternoon_angles() {
        let tz: Tz = "Asia/Tehran".parse().unwrap();
        let angles = compute_hand_angles_at(tz, instant_in(tz, 14, 5, 30));
        assert_eq!(angles.hour_deg, 62.5);
        assert_eq!(angles.minute_deg, 30.0);
        assert_eq!(angles.second_deg, 180.0);
    }

    #[test]
    fn test_hand_vector_points_up_at_zero() {
        let (dx, dy) = hand_vector(0.0, 100.0);
        assert!(dx.abs() < 1e-9);
        assert!((dy + 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_hand_vector_points_east_at_ninety() {
        let (dx, dy) = hand_vector(90.0, 100.0);
        assert!((dx - 100.0).abs() < 1e-9);
        assert!(dy.abs() < 1e-9);
    }
}
