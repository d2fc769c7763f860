use super::{Geometry, LonLat, open_ring};

const EPSILON: f64 = 1e-6;
const EPSILON2: f64 = 1e-12;

#[derive(Debug, Default, Clone, Copy)]
struct Vec3 {
    x: f64,
    y: f64,
    z: f64,
}

impl Vec3 {
    fn from_lonlat(p: LonLat) -> Self {
        let (lambda, phi) = (p.lon.to_radians(), p.lat.to_radians());
        let cos_phi = phi.cos();
        Self {
            x: cos_phi * lambda.cos(),
            y: cos_phi * lambda.sin(),
            z: phi.sin(),
        }
    }

    fn cross(self, o: Self) -> Self {
        Self {
            x: self.y * o.z - self.z * o.y,
            y: self.z * o.x - self.x * o.z,
            z: self.x * o.y - self.y * o.x,
        }
    }

    fn dot(self, o: Self) -> f64 {
        self.x * o.x + self.y * o.y + self.z * o.z
    }

    fn norm(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    fn scale(self, k: f64) -> Self {
        Self {
            x: self.x * k,
            y: self.y * k,
            z: self.z * k,
        }
    }

    fn add(&mut self, o: Self) {
        self.x += o.x;
        self.y += o.y;
        self.z += o.z;
    }
}

/// Running sums for the three centroid estimates, from most to least
/// preferred: area-weighted, edge-length-weighted and plain vertex mean.
#[derive(Debug, Default)]
struct Accumulator {
    area: Vec3,
    line: Vec3,
    line_weight: f64,
    points: Vec3,
    point_count: f64,
}

impl Accumulator {
    fn point(&mut self, v: Vec3) {
        self.point_count += 1.0;
        self.points.x += (v.x - self.points.x) / self.point_count;
        self.points.y += (v.y - self.points.y) / self.point_count;
        self.points.z += (v.z - self.points.z) / self.point_count;
    }

    fn ring(&mut self, ring: &[LonLat]) {
        let ring = open_ring(ring);
        let Some(&first) = ring.first() else {
            return;
        };

        let mut prev = Vec3::from_lonlat(first);
        self.point(prev);

        for &p in ring[1..].iter().chain(std::iter::once(&first)) {
            let cur = Vec3::from_lonlat(p);
            let c = prev.cross(cur);
            let m = c.norm();
            let w = m.min(1.0).asin();
            let v = if m > 0.0 { -w / m } else { 0.0 };

            self.area.add(c.scale(v));
            self.line_weight += w;
            self.line.x += w * (prev.x + cur.x);
            self.line.y += w * (prev.y + cur.y);
            self.line.z += w * (prev.z + cur.z);

            prev = cur;
            self.point(prev);
        }
    }

    fn finish(self) -> Option<LonLat> {
        let mut v = self.area;

        if v.norm() < EPSILON2 {
            v = if self.line_weight < EPSILON {
                self.points
            } else {
                self.line
            };
        } else if self.line_weight >= EPSILON && v.dot(self.line) < 0.0 {
            // Counter-clockwise exteriors produce the antipode of the
            // area-weighted centroid; the edge-weighted estimate is
            // orientation-free and disambiguates it.
            v = v.scale(-1.0);
        }

        let m = v.norm();
        if m < EPSILON2 {
            return None;
        }

        Some(LonLat::new(
            v.y.atan2(v.x).to_degrees(),
            (v.z / m).clamp(-1.0, 1.0).asin().to_degrees(),
        ))
    }
}

/// Spherical centroid of a polygonal geometry.
///
/// Returns `None` for empty or degenerate geometry.
pub fn spherical_centroid(geometry: &Geometry) -> Option<LonLat> {
    let mut acc = Accumulator::default();
    for polygon in geometry.polygons() {
        for ring in polygon {
            acc.ring(ring);
        }
    }
    acc.finish()
}
