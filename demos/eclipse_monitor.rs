//! Tracks the 2016-03-09 total eclipse over Papua New Guinea in five
//! minute steps, printing the unshaded fraction and attenuated irradiance.

use solar_sampa::sampa::{sun_and_moon, SampaAtmosphere};
use solar_sampa::{Instant, Observer};

fn main() {
    let site = Observer::new(10.1, 148.8, 100.0, 1000.0, 25.0);
    let atmosphere = SampaAtmosphere::default();

    println!("   UT     unshaded   att. DNI   att. GHI  phase");
    for step in 0..36 {
        let minutes = step * 5;
        let when = Instant::new(2016, 3, 9, (minutes / 60) as u32, (minutes % 60) as u32, 0.0);
        let result =
            sun_and_moon(&when, &site, &atmosphere, 69.3).expect("valid coordinates");

        let irr = &result.eclipse.irradiance;
        println!(
            "{:02}:{:02}   {:>7.2}%   {:>7.1}    {:>7.1}   {}",
            minutes / 60,
            minutes % 60,
            result.eclipse.unshaded_percent,
            irr.attenuated_direct_normal,
            irr.attenuated_global_horizontal,
            result.eclipse.kind,
        );
    }
}
