//! Basic sun position and day-arc output for one site.

use solar_sampa::spa::sun_position;
use solar_sampa::time::DEFAULT_DELTA_T;
use solar_sampa::{Instant, Observer, SurfaceOrientation};

fn main() {
    let site = Observer::new(48.21, 16.37, 190.0, 1010.0, 11.0);
    let when = Instant::new(2026, 6, 21, 12, 0, 0.0);

    let result = sun_position(
        &when,
        &site,
        &SurfaceOrientation::horizontal(),
        DEFAULT_DELTA_T,
    )
    .expect("valid coordinates");

    println!("Vienna, 2026-06-21 12:00 UTC");
    println!("  zenith    {:>8.3}°", result.geometry.zenith);
    println!("  azimuth   {:>8.3}°", result.geometry.azimuth);
    println!("  elevation {:>8.3}°", result.geometry.elevation);
    println!("  EOT       {:>8.3} min", result.times.equation_of_time);
    println!("  sunrise   {:>8.3} h UT", result.times.sunrise);
    println!("  transit   {:>8.3} h UT", result.times.transit);
    println!("  sunset    {:>8.3} h UT", result.times.sunset);
    let note = result.times.note.message();
    if !note.is_empty() {
        println!("  note: {note}");
    }
}
