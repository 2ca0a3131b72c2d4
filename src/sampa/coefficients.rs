//! Periodic term tables for the lunar position.
//!
//! Rows carry four integer multipliers of the mean arguments (D, M, M', F)
//! followed by the term amplitude(s). Longitude/distance rows hold the
//! sine amplitude for l (0.000001 degrees) and the cosine amplitude for r
//! (0.001 km); latitude rows hold the sine amplitude for b. Terms with a
//! nonzero M multiplier are scaled by the eccentricity factor e^|M|.
//! Absent amplitudes are zero-filled.

#![allow(clippy::unreadable_literal)]

/// Longitude (l) and distance (r) terms: `[D, M, M', F, l, r]`.
pub(crate) const TERMS_LR: &[[f64; 6]] = &[
    [0.0, 0.0, 1.0, 0.0, 6288774.0, -20905355.0],
    [2.0, 0.0, -1.0, 0.0, 1274027.0, -3699111.0],
    [2.0, 0.0, 0.0, 0.0, 658314.0, -2955968.0],
    [0.0, 0.0, 2.0, 0.0, 213618.0, -569925.0],
    [0.0, 1.0, 0.0, 0.0, -185116.0, 48888.0],
    [0.0, 0.0, 0.0, 2.0, -114332.0, -3149.0],
    [2.0, 0.0, -2.0, 0.0, 58793.0, 246158.0],
    [2.0, -1.0, -1.0, 0.0, 57066.0, -152138.0],
    [2.0, 0.0, 1.0, 0.0, 53322.0, -170733.0],
    [2.0, -1.0, 0.0, 0.0, 45758.0, -204586.0],
    [0.0, 1.0, -1.0, 0.0, -40923.0, -129620.0],
    [1.0, 0.0, 0.0, 0.0, -34720.0, 108743.0],
    [0.0, 1.0, 1.0, 0.0, -30383.0, 104755.0],
    [2.0, 0.0, 0.0, -2.0, 15327.0, 10321.0],
    [0.0, 0.0, 1.0, 2.0, -12528.0, 0.0],
    [0.0, 0.0, 1.0, -2.0, 10980.0, 79661.0],
    [4.0, 0.0, -1.0, 0.0, 10675.0, -34782.0],
    [0.0, 0.0, 3.0, 0.0, 10034.0, -23210.0],
    [4.0, 0.0, -2.0, 0.0, 8548.0, -21636.0],
    [2.0, 1.0, -1.0, 0.0, -7888.0, 24208.0],
    [2.0, 1.0, 0.0, 0.0, -6766.0, 30824.0],
    [1.0, 0.0, -1.0, 0.0, -5163.0, -8379.0],
    [1.0, 1.0, 0.0, 0.0, 4987.0, -16675.0],
    [2.0, -1.0, 1.0, 0.0, 4036.0, -12831.0],
    [2.0, 0.0, 2.0, 0.0, 3994.0, -10445.0],
    [4.0, 0.0, 0.0, 0.0, 3861.0, -11650.0],
    [2.0, 0.0, -3.0, 0.0, 3665.0, 14403.0],
    [0.0, 1.0, -2.0, 0.0, -2689.0, -7003.0],
    [2.0, 0.0, -1.0, 2.0, -2602.0, 0.0],
    [2.0, -1.0, -2.0, 0.0, 2390.0, 10056.0],
    [1.0, 0.0, 1.0, 0.0, -2348.0, 6322.0],
    [2.0, -2.0, 0.0, 0.0, 2236.0, -9884.0],
    [0.0, 1.0, 2.0, 0.0, -2120.0, 5751.0],
    [0.0, 2.0, 0.0, 0.0, -2069.0, 0.0],
    [2.0, -2.0, -1.0, 0.0, 2048.0, -4950.0],
    [2.0, 0.0, 1.0, -2.0, -1773.0, 4130.0],
    [2.0, 0.0, 0.0, 2.0, -1595.0, 0.0],
    [4.0, -1.0, -1.0, 0.0, 1215.0, -3958.0],
    [0.0, 0.0, 2.0, 2.0, -1110.0, 0.0],
    [3.0, 0.0, -1.0, 0.0, -892.0, 3258.0],
    [2.0, 1.0, 1.0, 0.0, -810.0, 2616.0],
    [4.0, -1.0, -2.0, 0.0, 759.0, -1897.0],
    [0.0, 2.0, -1.0, 0.0, -713.0, -2117.0],
    [2.0, 2.0, -1.0, 0.0, -700.0, 2354.0],
    [2.0, 1.0, -2.0, 0.0, 691.0, 0.0],
    [2.0, -1.0, 0.0, -2.0, 596.0, 0.0],
    [4.0, 0.0, 1.0, 0.0, 549.0, -1423.0],
    [0.0, 0.0, 4.0, 0.0, 537.0, -1117.0],
    [4.0, -1.0, 0.0, 0.0, 520.0, -1571.0],
    [1.0, 0.0, -2.0, 0.0, -487.0, -1739.0],
    [2.0, 1.0, 0.0, -2.0, -399.0, 0.0],
    [0.0, 0.0, 2.0, -2.0, -381.0, -4421.0],
    [1.0, 1.0, 1.0, 0.0, 351.0, 0.0],
    [3.0, 0.0, -2.0, 0.0, -340.0, 0.0],
    [4.0, 0.0, -3.0, 0.0, 330.0, 0.0],
    [2.0, -1.0, 2.0, 0.0, 327.0, 0.0],
    [0.0, 2.0, 1.0, 0.0, -323.0, 1165.0],
    [1.0, 1.0, -1.0, 0.0, 299.0, 0.0],
    [2.0, 0.0, 3.0, 0.0, 294.0, 0.0],
    [2.0, 0.0, -1.0, -2.0, 0.0, 8752.0],
];

/// Latitude (b) terms: `[D, M, M', F, b]`.
pub(crate) const TERMS_B: &[[f64; 5]] = &[
    [0.0, 0.0, 0.0, 1.0, 5128122.0],
    [0.0, 0.0, 1.0, 1.0, 280602.0],
    [0.0, 0.0, 1.0, -1.0, 277693.0],
    [2.0, 0.0, 0.0, -1.0, 173237.0],
    [2.0, 0.0, -1.0, 1.0, 55413.0],
    [2.0, 0.0, -1.0, -1.0, 46271.0],
    [2.0, 0.0, 0.0, 1.0, 32573.0],
    [0.0, 0.0, 2.0, 1.0, 17198.0],
    [2.0, 0.0, 1.0, -1.0, 9266.0],
    [0.0, 0.0, 2.0, -1.0, 8822.0],
    [2.0, -1.0, 0.0, -1.0, 8216.0],
    [2.0, 0.0, -2.0, -1.0, 4324.0],
    [2.0, 0.0, 1.0, 1.0, 4200.0],
    [2.0, 1.0, 0.0, -1.0, -3359.0],
    [2.0, -1.0, -1.0, 1.0, 2463.0],
    [2.0, -1.0, 0.0, 1.0, 2211.0],
    [2.0, -1.0, -1.0, -1.0, 2065.0],
    [0.0, 1.0, -1.0, -1.0, -1870.0],
    [4.0, 0.0, -1.0, -1.0, 1828.0],
    [0.0, 1.0, 0.0, 1.0, -1794.0],
    [0.0, 0.0, 0.0, 3.0, -1749.0],
    [0.0, 1.0, -1.0, 1.0, -1565.0],
    [1.0, 0.0, 0.0, 1.0, -1491.0],
    [0.0, 1.0, 1.0, 1.0, -1475.0],
    [0.0, 1.0, 1.0, -1.0, -1410.0],
    [0.0, 1.0, 0.0, -1.0, -1344.0],
    [1.0, 0.0, 0.0, -1.0, -1335.0],
    [0.0, 0.0, 3.0, 1.0, 1107.0],
    [4.0, 0.0, 0.0, -1.0, 1021.0],
    [4.0, 0.0, -1.0, 1.0, 833.0],
    [0.0, 0.0, 1.0, -3.0, 777.0],
    [4.0, 0.0, -2.0, 1.0, 671.0],
    [2.0, 0.0, 0.0, -3.0, 607.0],
    [2.0, 0.0, 2.0, -1.0, 596.0],
    [2.0, -1.0, 1.0, -1.0, 491.0],
    [2.0, 0.0, -2.0, 1.0, -451.0],
    [0.0, 0.0, 3.0, -1.0, 439.0],
    [2.0, 0.0, 2.0, 1.0, 422.0],
    [2.0, 0.0, -3.0, -1.0, 421.0],
    [2.0, 1.0, -1.0, 1.0, -366.0],
    [2.0, 1.0, 0.0, 1.0, -351.0],
    [4.0, 0.0, 0.0, 1.0, 331.0],
    [2.0, -1.0, 1.0, 1.0, 315.0],
    [2.0, -2.0, 0.0, -1.0, 302.0],
    [0.0, 0.0, 1.0, 3.0, -283.0],
    [2.0, 1.0, 1.0, -1.0, -229.0],
    [1.0, 1.0, 0.0, -1.0, 223.0],
    [1.0, 1.0, 0.0, 1.0, 223.0],
    [0.0, 1.0, -2.0, -1.0, -220.0],
    [2.0, 1.0, -1.0, -1.0, -220.0],
    [1.0, 0.0, 1.0, 1.0, -185.0],
    [2.0, -1.0, -2.0, -1.0, 181.0],
    [0.0, 1.0, 2.0, 1.0, -177.0],
    [4.0, 0.0, -2.0, -1.0, 176.0],
    [4.0, -1.0, -1.0, -1.0, 166.0],
    [1.0, 0.0, 1.0, -1.0, -164.0],
    [4.0, 0.0, 1.0, -1.0, 132.0],
    [1.0, 0.0, -1.0, -1.0, -119.0],
    [4.0, -1.0, 0.0, -1.0, 115.0],
    [2.0, -2.0, 0.0, 1.0, 107.0],
];
