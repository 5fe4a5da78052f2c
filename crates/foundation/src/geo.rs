/// Geographic coordinate in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeoPoint {
    pub lat_deg: f64,
    pub lng_deg: f64,
}

impl GeoPoint {
    pub fn new(lat_deg: f64, lng_deg: f64) -> Self {
        Self { lat_deg, lng_deg }
    }
}

/// Map-pixel coordinate at the reference zoom. Y grows downward, as on
/// screen: the north pole projects to small y, the south pole to large y.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
}

impl ProjectedPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Geographic bounding box as an ordered corner pair.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeoBounds {
    pub top_left: GeoPoint,
    pub bottom_right: GeoPoint,
}

impl GeoBounds {
    pub fn new(top_left: GeoPoint, bottom_right: GeoPoint) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }
}
