//! Great-circle distance between coordinates.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinates {
            latitude,
            longitude,
        }
    }

    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        haversine_km(self, other)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Parses `"<lat>,<lng>"`.
impl FromStr for Coordinates {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| format!("Invalid coordinates '{s}'. Expected <lat>,<lng>"))?;

        let parse = |part: &str| {
            part.trim()
                .parse::<f64>()
                .map_err(|_| format!("Invalid coordinates '{s}'. Expected <lat>,<lng>"))
        };
        let (latitude, longitude) = (parse(lat)?, parse(lng)?);

        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(format!("Coordinates '{s}' are out of range"));
        }

        Ok(Coordinates::new(latitude, longitude))
    }
}

/// Haversine distance between two points in kilometers.
pub fn haversine_km(a: &Coordinates, b: &Coordinates) -> f64 {
    let to_rad = |deg: f64| deg * PI / 180.0;

    let dlat = to_rad(b.latitude - a.latitude);
    let dlng = to_rad(b.longitude - a.longitude);

    let h = (dlat / 2.0).sin().powi(2)
        + to_rad(a.latitude).cos() * to_rad(b.latitude).cos() * (dlng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lat_lng_pairs() {
        let c: Coordinates = "1.381497, 103.955574".parse().unwrap();
        assert_eq!(c, Coordinates::new(1.381497, 103.955574));
        assert_eq!(c.to_string(), "1.381497,103.955574");

        assert!("1.38".parse::<Coordinates>().is_err());
        assert!("north,east".parse::<Coordinates>().is_err());
        assert!("91,0".parse::<Coordinates>().is_err());
    }

    #[test]
    fn same_point_is_zero() {
        let p = Coordinates::new(1.381497, 103.955574);
        assert!(haversine_km(&p, &p).abs() < 1e-9);
    }

    #[test]
    fn santa_monica_to_venice() {
        let santa_monica = Coordinates::new(34.0195, -118.4912);
        let venice = Coordinates::new(33.9850, -118.4695);
        let d = santa_monica.distance_km(&venice);
        assert!((d - 4.3).abs() < 0.5, "Expected ~4.3 km, got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Coordinates::new(34.0522, -118.2437);
        let b = Coordinates::new(1.381497, 103.955574);
        assert!((haversine_km(&a, &b) - haversine_km(&b, &a)).abs() < 1e-6);
    }

    #[test]
    fn los_angeles_to_singapore() {
        let la = Coordinates::new(34.0522, -118.2437);
        let sg = Coordinates::new(1.3521, 103.8198);
        let d = haversine_km(&la, &sg);
        assert!(d > 14_000.0 && d < 14_300.0, "Expected ~14,100 km, got {d}");
    }
}
