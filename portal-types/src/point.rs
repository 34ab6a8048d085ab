use geo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A geographic location in degrees.
///
/// Equality and hashing are by value, so two portals reported at the same
/// coordinates collapse to the same key. `-0.0` and `0.0` compare equal.
///
/// # Examples
///
/// ```
/// use portal_types::point::LatLng;
///
/// let a = LatLng::new(40.7128, -74.0060);
/// let b = LatLng::new(40.7128, -74.0060);
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "40.7128,-74.006");
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Parse the `"lat,lng"` form used by bookmark exports.
    pub fn parse(s: &str) -> Result<Self, ParseLatLngError> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| ParseLatLngError(format!("expected 'lat,lng', got: {s}")))?;
        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|_| ParseLatLngError(format!("invalid latitude: {lat}")))?;
        let lng: f64 = lng
            .trim()
            .parse()
            .map_err(|_| ParseLatLngError(format!("invalid longitude: {lng}")))?;
        Ok(Self::new(lat, lng))
    }

    /// True when both components are finite and inside the WGS84 ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    fn key_bits(&self) -> (u64, u64) {
        // adding 0.0 turns -0.0 into 0.0
        ((self.lat + 0.0).to_bits(), (self.lng + 0.0).to_bits())
    }
}

impl PartialEq for LatLng {
    fn eq(&self, other: &Self) -> bool {
        self.key_bits() == other.key_bits()
    }
}

impl Eq for LatLng {}

impl Hash for LatLng {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key_bits().hash(state);
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl From<LatLng> for Point<f64> {
    fn from(value: LatLng) -> Self {
        Point::new(value.lng, value.lat)
    }
}

impl From<Point<f64>> for LatLng {
    fn from(value: Point<f64>) -> Self {
        LatLng::new(value.y(), value.x())
    }
}

/// Planar coordinates in projected units (meters for the local projections
/// used by the engines).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
}

impl Projected {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    #[inline]
    pub fn distance(&self, other: &Projected) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<Projected> for Point<f64> {
    fn from(value: Projected) -> Self {
        Point::new(value.x, value.y)
    }
}

impl From<Point<f64>> for Projected {
    fn from(value: Point<f64>) -> Self {
        Projected::new(value.x(), value.y())
    }
}

/// Error returned by [`LatLng::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLatLngError(String);

impl fmt::Display for ParseLatLngError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ParseLatLngError {}
