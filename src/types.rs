//! Core input types shared by the position algorithms.

/// A civil instant in Universal Time, expressed as loose calendar fields.
///
/// Every field may carry a fractional part; the Julian clock folds them
/// downward into a fractional day, so `day: 5.0, hour: 7.5` and
/// `day: 5.0, hour: 7.0, minute: 30.0` describe the same moment. Field
/// validity (month 1-12, day within month) is the caller's contract:
/// out-of-range values fold arithmetically instead of erroring, matching
/// the behavior the reference vectors were produced with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instant {
    /// Calendar year (can be negative for BCE years).
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Day of month, fractional part carries time of day.
    pub day: f64,
    /// Hour of day.
    pub hour: f64,
    /// Minute.
    pub minute: f64,
    /// Second.
    pub second: f64,
    /// Microsecond.
    pub microsecond: f64,
}

impl Instant {
    /// Creates an instant from whole calendar fields and fractional seconds.
    #[must_use]
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day: f64::from(day),
            hour: f64::from(hour),
            minute: f64::from(minute),
            second,
            microsecond: 0.0,
        }
    }
}

#[cfg(feature = "chrono")]
impl<Tz: chrono::TimeZone> From<&chrono::DateTime<Tz>> for Instant {
    /// Converts to UTC and captures sub-second precision as microseconds.
    fn from(datetime: &chrono::DateTime<Tz>) -> Self {
        use chrono::{Datelike, Timelike};

        let utc = datetime.with_timezone(&chrono::Utc);
        Self {
            year: utc.year(),
            month: utc.month(),
            day: f64::from(utc.day()),
            hour: f64::from(utc.hour()),
            minute: f64::from(utc.minute()),
            second: f64::from(utc.second()),
            microsecond: f64::from(utc.nanosecond()) / 1e3,
        }
    }
}

/// An observation site: geographic coordinates plus local atmosphere.
///
/// Pressure and temperature feed the refraction correction and are taken
/// as given; only the coordinates are validated by the entry points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    /// Geographic latitude in degrees, positive north.
    pub latitude: f64,
    /// Geographic longitude in degrees, positive east.
    pub longitude: f64,
    /// Elevation above sea level in meters.
    pub elevation: f64,
    /// Annual average local pressure in millibars.
    pub pressure: f64,
    /// Annual average local temperature in degrees Celsius.
    pub temperature: f64,
}

impl Observer {
    /// Creates an observer at the given site.
    #[must_use]
    pub const fn new(
        latitude: f64,
        longitude: f64,
        elevation: f64,
        pressure: f64,
        temperature: f64,
    ) -> Self {
        Self {
            latitude,
            longitude,
            elevation,
            pressure,
            temperature,
        }
    }
}

/// Orientation of a tilted receiving surface for the incidence angle.
///
/// The slope is measured from the horizontal plane; the azimuth rotation
/// is measured from due south, positive toward west.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceOrientation {
    /// Surface slope from horizontal in degrees.
    pub slope: f64,
    /// Surface azimuth rotation from south in degrees, westward positive.
    pub azimuth_rotation: f64,
}

impl SurfaceOrientation {
    /// Creates a surface orientation.
    #[must_use]
    pub const fn new(slope: f64, azimuth_rotation: f64) -> Self {
        Self {
            slope,
            azimuth_rotation,
        }
    }

    /// A horizontal, unrotated surface.
    #[must_use]
    pub const fn horizontal() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl Default for SurfaceOrientation {
    fn default() -> Self {
        Self::horizontal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instant_from_whole_fields() {
        let instant = Instant::new(2016, 3, 9, 1, 58, 19.0);
        assert_eq!(instant.year, 2016);
        assert_eq!(instant.month, 3);
        assert_eq!(instant.day, 9.0);
        assert_eq!(instant.hour, 1.0);
        assert_eq!(instant.minute, 58.0);
        assert_eq!(instant.second, 19.0);
        assert_eq!(instant.microsecond, 0.0);
    }

    #[test]
    fn test_surface_orientation_default_is_horizontal() {
        let surface = SurfaceOrientation::default();
        assert_eq!(surface.slope, 0.0);
        assert_eq!(surface.azimuth_rotation, 0.0);
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_instant_from_datetime_converts_to_utc() {
        use chrono::{FixedOffset, TimeZone};

        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        let datetime = offset.with_ymd_and_hms(1999, 7, 22, 9, 45, 37).unwrap();
        let instant = Instant::from(&datetime);

        assert_eq!(instant.year, 1999);
        assert_eq!(instant.month, 7);
        assert_eq!(instant.day, 22.0);
        assert_eq!(instant.hour, 14.0);
        assert_eq!(instant.minute, 45.0);
        assert_eq!(instant.second, 37.0);
    }
}
