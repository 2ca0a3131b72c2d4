//! Time scale handling: Julian dates, calendar back-conversion and ΔT.
//!
//! The Julian clock follows Reda & Andreas (2003) with one deliberate
//! deviation: the Gregorian correction `b = 2 - ⌊y/100⌋ + ⌊⌊y/100⌋/4⌋` is
//! applied to every date, not only to dates on or after 1582-10-15. All
//! published reference vectors for this library assume the proleptic
//! Gregorian rule, including the year-100 case.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]

use crate::math::{polynomial, trunc};
use crate::types::Instant;
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::Datelike;

/// Seconds per day (86,400)
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 UTC)
const J2000_JDN: f64 = 2_451_545.0;

/// Days per Julian century
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Fallback ΔT in seconds used by the high-level entry points when the
/// caller does not supply a measured or estimated value.
///
/// Appropriate for dates in the early 2020s; use [`DeltaT`] for other eras.
pub const DEFAULT_DELTA_T: f64 = 69.3;

/// Julian date representation for astronomical calculations.
///
/// Carries the Julian Date (JD, referenced to UT1) together with ΔT so the
/// ephemeris scales (JDE, JCE, JME) can be derived on demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JulianDate {
    /// Julian Date (JD) - referenced to UT1
    jd: f64,
    /// Delta T in seconds - difference between TT and UT1
    delta_t: f64,
}

impl JulianDate {
    /// Creates a Julian date from a civil instant.
    ///
    /// Fractional calendar fields are folded downward (microseconds into
    /// seconds, seconds into minutes, and so on, ending in a fractional
    /// day), so an [`Instant`] with `day: 5.0, hour: 7.0` and one with
    /// `day: 5.2917` describe nearly the same moment. Field validity is the
    /// caller's contract; out-of-range fields fold arithmetically instead
    /// of erroring.
    ///
    /// # Example
    /// ```
    /// # use solar_sampa::time::JulianDate;
    /// # use solar_sampa::Instant;
    /// let jd = JulianDate::from_instant(&Instant::new(2000, 1, 1, 12, 0, 0.0), 0.0);
    /// assert_eq!(jd.julian_date(), 2_451_545.0);
    /// ```
    #[must_use]
    pub fn from_instant(instant: &Instant, delta_t: f64) -> Self {
        Self {
            jd: julian_day_number(instant),
            delta_t,
        }
    }

    /// Creates a Julian date from a timezone-aware chrono `DateTime`.
    ///
    /// The datetime is converted to UTC first.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_datetime<Tz: chrono::TimeZone>(
        datetime: &chrono::DateTime<Tz>,
        delta_t: f64,
    ) -> Self {
        Self::from_instant(&Instant::from(datetime), delta_t)
    }

    /// Gets the Julian Date (JD) value, referenced to UT1.
    #[must_use]
    pub const fn julian_date(&self) -> f64 {
        self.jd
    }

    /// Gets the ΔT value in seconds.
    #[must_use]
    pub const fn delta_t(&self) -> f64 {
        self.delta_t
    }

    /// Calculates the Julian Ephemeris Day: JDE = JD + ΔT/86400.
    #[must_use]
    pub fn julian_ephemeris_day(&self) -> f64 {
        self.jd + self.delta_t / SECONDS_PER_DAY
    }

    /// Calculates the Julian Century from J2000.0: JC = (JD - 2451545) / 36525.
    #[must_use]
    pub fn julian_century(&self) -> f64 {
        (self.jd - J2000_JDN) / DAYS_PER_CENTURY
    }

    /// Calculates the Julian Ephemeris Century (JCE) from J2000.0.
    #[must_use]
    pub fn julian_ephemeris_century(&self) -> f64 {
        (self.julian_ephemeris_day() - J2000_JDN) / DAYS_PER_CENTURY
    }

    /// Calculates the Julian Ephemeris Millennium: JME = JCE / 10.
    #[must_use]
    pub fn julian_ephemeris_millennium(&self) -> f64 {
        self.julian_ephemeris_century() / 10.0
    }

    /// Converts the Julian Date back to a calendar date.
    ///
    /// Uses the inverse algorithm from Meeus, with the Gregorian branch
    /// taken only for JD ≥ 2299161. Because the forward conversion applies
    /// the Gregorian correction to every date, round-tripping an early
    /// Julian-era date yields a normalized (shifted) calendar day rather
    /// than the input fields.
    #[must_use]
    pub fn to_calendar(&self) -> CalendarDate {
        let z = trunc(self.jd + 0.5);
        let f = self.jd + 0.5 - z;

        let a = if z < 2_299_161.0 {
            z
        } else {
            let b = trunc((z - 1_867_216.25) / 36_524.25);
            z + 1.0 + b - trunc(b / 4.0)
        };

        let c = a + 1524.0;
        let d = trunc((c - 122.1) / 365.25);
        let g = trunc(365.25 * d);
        let i = trunc((c - g) / 30.6001);

        let day = c - g - trunc(30.6001 * i) + f;
        let month = if i < 14.0 { i - 1.0 } else { i - 13.0 };
        let year = if month > 2.0 { d - 4716.0 } else { d - 4715.0 };

        CalendarDate {
            year: year as i32,
            month: month as u32,
            day,
        }
    }

    /// Offsets the Julian date by a whole or fractional number of days,
    /// keeping ΔT.
    pub(crate) fn add_days(self, days: f64) -> Self {
        Self {
            jd: self.jd + days,
            delta_t: self.delta_t,
        }
    }
}

/// Calendar date produced by [`JulianDate::to_calendar`].
///
/// The day carries the time of day as its fractional part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarDate {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Day of month with fractional time of day.
    pub day: f64,
}

/// Julian Day Number from civil fields, proleptic Gregorian for all dates.
fn julian_day_number(instant: &Instant) -> f64 {
    let mut year = instant.year;
    let mut month = instant.month as i32;

    // January and February count as months 13 and 14 of the previous year.
    if month <= 2 {
        year -= 1;
        month += 12;
    }

    let second = instant.second + instant.microsecond / 1e6;
    let minute = instant.minute + second / 60.0;
    let hour = instant.hour + minute / 60.0;
    let day = instant.day + hour / 24.0;

    let a = year / 100;
    let b = 2 - a + a / 4;

    trunc(365.25 * (f64::from(year) + 4716.0)) + trunc(30.6001 * f64::from(month + 1)) + day
        + f64::from(b)
        - 1524.5
}

/// ΔT (Delta T) estimation functions.
///
/// ΔT represents the difference between Terrestrial Time (TT) and Universal Time (UT1).
/// These estimates are based on Espenak and Meeus polynomial fits updated in 2014.
pub struct DeltaT;

impl DeltaT {
    /// Estimates ΔT for a given decimal year.
    ///
    /// Based on polynomial fits from Espenak & Meeus, updated 2014.
    /// See: <https://www.eclipsewise.com/help/deltatpoly2014.html>
    ///
    /// # Arguments
    /// * `decimal_year` - Year with fractional part (e.g., 2024.5 for mid-2024)
    ///
    /// # Returns
    /// Estimated ΔT in seconds
    ///
    /// # Errors
    /// Returns error for years outside the valid range (-500 to 3000 CE)
    ///
    /// # Example
    /// ```
    /// # use solar_sampa::time::DeltaT;
    /// let delta_t = DeltaT::estimate(2024.0).unwrap();
    /// assert!(delta_t > 60.0 && delta_t < 80.0); // Reasonable range for 2024
    /// ```
    #[allow(clippy::too_many_lines)] // Comprehensive polynomial fit across historical periods
    pub fn estimate(decimal_year: f64) -> Result<f64> {
        let year = decimal_year;

        if !year.is_finite() {
            return Err(Error::invalid_datetime("year must be finite"));
        }

        let delta_t = if year < -500.0 {
            let u = (year - 1820.0) / 100.0;
            polynomial(&[-20.0, 0.0, 32.0], u)
        } else if year < 500.0 {
            let u = year / 100.0;
            polynomial(
                &[
                    10583.6,
                    -1014.41,
                    33.78311,
                    -5.952053,
                    -0.1798452,
                    0.022174192,
                    0.0090316521,
                ],
                u,
            )
        } else if year < 1600.0 {
            let u = (year - 1000.0) / 100.0;
            polynomial(
                &[
                    1574.2,
                    -556.01,
                    71.23472,
                    0.319781,
                    -0.8503463,
                    -0.005050998,
                    0.0083572073,
                ],
                u,
            )
        } else if year < 1700.0 {
            let t = year - 1600.0;
            polynomial(&[120.0, -0.9808, -0.01532, 1.0 / 7129.0], t)
        } else if year < 1800.0 {
            let t = year - 1700.0;
            polynomial(
                &[8.83, 0.1603, -0.0059285, 0.00013336, -1.0 / 1_174_000.0],
                t,
            )
        } else if year < 1860.0 {
            let t = year - 1800.0;
            polynomial(
                &[
                    13.72,
                    -0.332447,
                    0.0068612,
                    0.0041116,
                    -0.00037436,
                    0.0000121272,
                    -0.0000001699,
                    0.000000000875,
                ],
                t,
            )
        } else if year < 1900.0 {
            let t = year - 1860.0;
            polynomial(
                &[
                    7.62,
                    0.5737,
                    -0.251754,
                    0.01680668,
                    -0.0004473624,
                    1.0 / 233_174.0,
                ],
                t,
            )
        } else if year < 1920.0 {
            let t = year - 1900.0;
            polynomial(&[-2.79, 1.494119, -0.0598939, 0.0061966, -0.000197], t)
        } else if year < 1941.0 {
            let t = year - 1920.0;
            polynomial(&[21.20, 0.84493, -0.076100, 0.0020936], t)
        } else if year < 1961.0 {
            let t = year - 1950.0;
            polynomial(&[29.07, 0.407, -1.0 / 233.0, 1.0 / 2547.0], t)
        } else if year < 1986.0 {
            let t = year - 1975.0;
            polynomial(&[45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0], t)
        } else if year < 2005.0 {
            let t = year - 2000.0;
            polynomial(
                &[
                    63.86,
                    0.3345,
                    -0.060374,
                    0.0017275,
                    0.000651814,
                    0.00002373599,
                ],
                t,
            )
        } else if year < 2015.0 {
            let t = year - 2005.0;
            polynomial(&[64.69, 0.2930], t)
        } else if year <= 3000.0 {
            let t = year - 2015.0;
            polynomial(&[67.62, 0.3645, 0.0039755], t)
        } else {
            return Err(Error::invalid_datetime(
                "ΔT estimates not available beyond year 3000",
            ));
        };

        Ok(delta_t)
    }

    /// Estimates ΔT from year and month.
    ///
    /// Calculates decimal year as: year + (month - 0.5) / 12
    ///
    /// # Errors
    /// Returns error if month is outside the range 1-12.
    pub fn estimate_from_date(year: i32, month: u32) -> Result<f64> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_datetime("month must be between 1 and 12"));
        }

        let decimal_year = f64::from(year) + (f64::from(month) - 0.5) / 12.0;
        Self::estimate(decimal_year)
    }

    /// Estimates ΔT from any date-like type.
    ///
    /// Convenience method that extracts the year and month from any chrono type
    /// that implements `Datelike` (`DateTime`, `NaiveDateTime`, `NaiveDate`, etc.).
    ///
    /// # Errors
    /// Returns error if the date components are invalid.
    ///
    /// # Example
    /// ```
    /// # use solar_sampa::time::DeltaT;
    /// # use chrono::NaiveDate;
    /// let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
    /// let delta_t = DeltaT::estimate_from_date_like(date).unwrap();
    /// assert!(delta_t > 60.0 && delta_t < 80.0);
    /// ```
    #[cfg(feature = "chrono")]
    #[allow(clippy::needless_pass_by_value)]
    pub fn estimate_from_date_like<D: Datelike>(date: D) -> Result<f64> {
        Self::estimate_from_date(date.year(), date.month())
    }
}
