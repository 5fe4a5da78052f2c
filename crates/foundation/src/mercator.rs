use crate::geo::{GeoPoint, ProjectedPoint};

/// Earth radius used by the spherical Web Mercator CRS (meters).
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// World size in pixels at zoom 0.
pub const TILE_SIZE_PX: f64 = 256.0;

/// Forward/inverse geographic projection into map-pixel space at a
/// caller-fixed reference zoom.
///
/// Both directions are pure. The reference zoom must be the same constant
/// on every call within a session so projected coordinates are comparable
/// across calls.
pub trait Projection {
    fn project(&self, geo: GeoPoint, zoom_ref: f64) -> ProjectedPoint;
    fn unproject(&self, p: ProjectedPoint, zoom_ref: f64) -> GeoPoint;
}

/// EPSG:3857 pixel CRS as used by slippy-map widgets: spherical mercator
/// meters mapped onto a `TILE_SIZE_PX * 2^zoom` pixel world, origin at the
/// top-left (north-west) corner, y growing downward.
///
/// Latitudes outside ±90° are not validated; they propagate through the
/// mercator math as non-finite coordinates.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct WebMercator;

impl WebMercator {
    pub fn new() -> Self {
        Self
    }

    fn pixel_scale(zoom: f64) -> f64 {
        TILE_SIZE_PX * zoom.exp2()
    }

    // Affine mercator-meters -> unit-world coefficient.
    fn unit_per_meter() -> f64 {
        0.5 / (std::f64::consts::PI * EARTH_RADIUS_M)
    }
}

impl Projection for WebMercator {
    fn project(&self, geo: GeoPoint, zoom_ref: f64) -> ProjectedPoint {
        let lat_rad = geo.lat_deg.to_radians();
        let lng_rad = geo.lng_deg.to_radians();

        let mx = EARTH_RADIUS_M * lng_rad;
        let my = EARTH_RADIUS_M * (std::f64::consts::FRAC_PI_4 + lat_rad / 2.0).tan().ln();

        let k = Self::unit_per_meter();
        let scale = Self::pixel_scale(zoom_ref);
        ProjectedPoint::new(scale * (k * mx + 0.5), scale * (-k * my + 0.5))
    }

    fn unproject(&self, p: ProjectedPoint, zoom_ref: f64) -> GeoPoint {
        let k = Self::unit_per_meter();
        let scale = Self::pixel_scale(zoom_ref);

        let mx = (p.x / scale - 0.5) / k;
        let my = -(p.y / scale - 0.5) / k;

        let lat_rad = 2.0 * (my / EARTH_RADIUS_M).exp().atan() - std::f64::consts::FRAC_PI_2;
        let lng_rad = mx / EARTH_RADIUS_M;
        GeoPoint::new(lat_rad.to_degrees(), lng_rad.to_degrees())
    }
}
