pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle (haversine) distance in whole kilometres.
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> u32 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    (EARTH_RADIUS_KM * c).round() as u32
}

/// Initial compass bearing from point 1 towards point 2, in [0, 360).
pub fn bearing_degrees(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (phi1, phi2) = (lat1.to_radians(), lat2.to_radians());
    let d_lon = (lon2 - lon1).to_radians();

    let y = d_lon.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * d_lon.cos();

    let bearing = (y.atan2(x).to_degrees() + 360.0) % 360.0;
    // -0.0 and values that round up to exactly 360.0
    if bearing >= 360.0 || bearing == 0.0 { 0.0 } else { bearing }
}

/// Linear closeness score: 100 at 0 km, 0 at 20,000 km and beyond.
pub fn proximity_percent(distance_km: u32) -> u8 {
    (100.0 - f64::from(distance_km) / 200.0).round().clamp(0.0, 100.0) as u8
}
