//! Rays and axis-aligned planes.

use cgmath::{EuclideanSpace, InnerSpace, Point3, Vector3};

use crate::{DirectedAxis, EPSILON};

/// Half-line starting at `origin` and extending along `direction`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    /// Starting point of the ray, typically the camera position.
    pub origin: Point3<f32>,
    /// Direction of the ray. This does not need to be normalized.
    pub direction: Vector3<f32>,
}
impl Ray {
    /// Constructs a ray from `origin` through `target`.
    pub fn through(origin: Point3<f32>, target: Point3<f32>) -> Self {
        Self {
            origin,
            direction: target - origin,
        }
    }

    /// Returns the point at parameter `t` along the ray.
    pub fn at(&self, t: f32) -> Point3<f32> {
        self.origin + self.direction * t
    }
}

/// Plane perpendicular to a principal axis.
///
/// The plane contains every point `p` where the component of `p` along
/// `normal` equals `distance`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AxisPlane {
    /// Outward normal of the plane.
    pub normal: DirectedAxis,
    /// Distance of the plane from the origin along `normal`.
    pub distance: f32,
}
impl AxisPlane {
    /// Returns the signed distance from the plane to `p`. Positive values are
    /// on the side that `normal` points to.
    pub fn signed_distance_to_point(&self, p: Point3<f32>) -> f32 {
        p.to_vec().dot(self.normal.vector()) - self.distance
    }

    /// Returns the intersection of the plane with a ray, or `None` if the ray
    /// is parallel to the plane or points away from it.
    pub fn intersect(&self, ray: &Ray) -> Option<Point3<f32>> {
        let denom = ray.direction.dot(self.normal.vector());
        if denom.abs() < EPSILON {
            return None;
        }
        let t = -self.signed_distance_to_point(ray.origin) / denom;
        (t >= 0.0).then(|| ray.at(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_plane_intersection() {
        let plane = AxisPlane {
            normal: DirectedAxis::POS_Z,
            distance: 1.5,
        };
        let ray = Ray::through(Point3::new(0.0, 0.0, 6.0), Point3::new(0.5, 0.25, 1.5));
        let p = plane.intersect(&ray).expect("ray should hit plane");
        assert!((p - Point3::new(0.5, 0.25, 1.5)).magnitude() < 1e-5);

        // Parallel
        let ray = Ray {
            origin: Point3::new(0.0, 0.0, 6.0),
            direction: Vector3::unit_x(),
        };
        assert_eq!(plane.intersect(&ray), None);

        // Pointing away
        let ray = Ray {
            origin: Point3::new(0.0, 0.0, 6.0),
            direction: Vector3::unit_z(),
        };
        assert_eq!(plane.intersect(&ray), None);
    }

    #[test]
    fn test_negative_plane() {
        let plane = AxisPlane {
            normal: DirectedAxis::NEG_Y,
            distance: 1.5,
        };
        let ray = Ray::through(Point3::new(0.0, -6.0, 0.0), Point3::new(1.0, -1.5, 0.0));
        let p = plane.intersect(&ray).expect("ray should hit plane");
        assert!((p.y + 1.5).abs() < 1e-5);
        assert!((p.x - 1.0).abs() < 1e-5);
    }
}
