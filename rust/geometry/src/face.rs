// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bounded analytic faces.
//!
//! A face supports two queries: projecting an arbitrary point onto the face
//! (which fails with `None` when the foot of the projection leaves the face
//! bounds) and evaluating a normalized parametric sample to a world point
//! with its surface normal. Matching relies on both, so the bounds handling
//! here is behavior, not hygiene.

use nalgebra::{Point3, Vector3};

use crate::error::{Error, Result};

/// Threshold below which a vector is treated as zero-length
pub const DIRECTION_EPSILON: f64 = 1e-9;

/// Slack applied to parametric bounds checks during projection
const BOUNDARY_EPSILON: f64 = 1e-9;

/// Result of projecting a point onto a face
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Nearest point on the bounded face
    pub point: Point3<f64>,
    /// Distance from the query point to `point`
    pub distance: f64,
}

/// A rectangular region of a plane
#[derive(Debug, Clone, PartialEq)]
pub struct PlanarFace {
    origin: Point3<f64>,
    u_dir: Vector3<f64>,
    v_dir: Vector3<f64>,
    normal: Vector3<f64>,
    u_len: f64,
    v_len: f64,
}

impl PlanarFace {
    /// Create a rectangular planar face.
    ///
    /// `u_dir` and `v_dir` span the face from `origin`; `v_dir` is
    /// orthogonalized against `u_dir`, and the normal is their cross product.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateFace` for zero-length directions, parallel
    /// directions, or non-positive extents.
    pub fn new(
        origin: Point3<f64>,
        u_dir: Vector3<f64>,
        v_dir: Vector3<f64>,
        u_len: f64,
        v_len: f64,
    ) -> Result<Self> {
        if u_len <= 0.0 || v_len <= 0.0 {
            return Err(Error::DegenerateFace("non-positive extent".into()));
        }
        let u = u_dir
            .try_normalize(DIRECTION_EPSILON)
            .ok_or_else(|| Error::DegenerateFace("zero-length u direction".into()))?;
        let v_raw = v_dir - u * v_dir.dot(&u);
        let v = v_raw
            .try_normalize(DIRECTION_EPSILON)
            .ok_or_else(|| Error::DegenerateFace("v direction parallel to u".into()))?;
        let normal = u.cross(&v);
        Ok(Self {
            origin,
            u_dir: u,
            v_dir: v,
            normal,
            u_len,
            v_len,
        })
    }

    /// Unit normal of the underlying plane.
    pub fn normal(&self) -> Vector3<f64> {
        self.normal
    }

    /// World point at normalized parameters (u, v) in [0, 1]^2.
    pub fn evaluate(&self, u: f64, v: f64) -> Point3<f64> {
        self.origin + self.u_dir * (u * self.u_len) + self.v_dir * (v * self.v_len)
    }

    /// Project a point onto the bounded face.
    ///
    /// `None` when the foot of the perpendicular lands outside the rectangle.
    pub fn project(&self, p: &Point3<f64>) -> Option<Projection> {
        let dp = p - self.origin;
        let u = dp.dot(&self.u_dir);
        let v = dp.dot(&self.v_dir);
        if u < -BOUNDARY_EPSILON
            || u > self.u_len + BOUNDARY_EPSILON
            || v < -BOUNDARY_EPSILON
            || v > self.v_len + BOUNDARY_EPSILON
        {
            return None;
        }
        let point = self.origin + self.u_dir * u + self.v_dir * v;
        let distance = (p - point).norm();
        Some(Projection { point, distance })
    }
}

/// The lateral surface of a cylinder segment (full sweep)
#[derive(Debug, Clone, PartialEq)]
pub struct CylindricalFace {
    origin: Point3<f64>,
    axis: Vector3<f64>,
    ref_dir: Vector3<f64>,
    binormal: Vector3<f64>,
    radius: f64,
    height: f64,
}

impl CylindricalFace {
    /// Create a full-sweep cylindrical face.
    ///
    /// `origin` is the base center, `axis` points toward the top, `ref_dir`
    /// fixes the zero angle (orthogonalized against the axis).
    ///
    /// # Errors
    ///
    /// Returns `DegenerateFace` for zero-length directions, a reference
    /// direction parallel to the axis, or non-positive radius/height.
    pub fn new(
        origin: Point3<f64>,
        axis: Vector3<f64>,
        ref_dir: Vector3<f64>,
        radius: f64,
        height: f64,
    ) -> Result<Self> {
        if radius <= 0.0 || height <= 0.0 {
            return Err(Error::DegenerateFace("non-positive radius or height".into()));
        }
        let a = axis
            .try_normalize(DIRECTION_EPSILON)
            .ok_or_else(|| Error::DegenerateFace("zero-length axis".into()))?;
        let r_raw = ref_dir - a * ref_dir.dot(&a);
        let r = r_raw
            .try_normalize(DIRECTION_EPSILON)
            .ok_or_else(|| Error::DegenerateFace("reference direction parallel to axis".into()))?;
        let binormal = a.cross(&r);
        Ok(Self {
            origin,
            axis: a,
            ref_dir: r,
            binormal,
            radius,
            height,
        })
    }

    fn radial_at(&self, u: f64) -> Vector3<f64> {
        let angle = u * std::f64::consts::TAU;
        self.ref_dir * angle.cos() + self.binormal * angle.sin()
    }

    /// World point at normalized parameters (u, v) in [0, 1]^2.
    pub fn evaluate(&self, u: f64, v: f64) -> Point3<f64> {
        self.origin + self.axis * (v * self.height) + self.radial_at(u) * self.radius
    }

    /// Outward radial normal at normalized parameter u.
    pub fn normal_at(&self, u: f64) -> Vector3<f64> {
        self.radial_at(u)
    }

    /// Project a point onto the lateral surface.
    ///
    /// `None` when the point lies beyond the cylinder's height range or on
    /// its axis (where no unique nearest point exists).
    pub fn project(&self, p: &Point3<f64>) -> Option<Projection> {
        let dp = p - self.origin;
        let h = dp.dot(&self.axis);
        if h < -BOUNDARY_EPSILON || h > self.height + BOUNDARY_EPSILON {
            return None;
        }
        let radial = dp - self.axis * h;
        let radial_len = radial.norm();
        if radial_len < DIRECTION_EPSILON {
            return None;
        }
        let point = self.origin + self.axis * h + radial * (self.radius / radial_len);
        let distance = (p - point).norm();
        Some(Projection { point, distance })
    }
}

/// A face of a solid
#[derive(Debug, Clone, PartialEq)]
pub enum Face {
    /// Rectangular planar face
    Planar(PlanarFace),
    /// Full-sweep cylindrical face
    Cylindrical(CylindricalFace),
}

impl Face {
    /// Project a point onto the bounded face, `None` when the projection is
    /// undefined for this face/point pair.
    pub fn project(&self, p: &Point3<f64>) -> Option<Projection> {
        match self {
            Face::Planar(f) => f.project(p),
            Face::Cylindrical(f) => f.project(p),
        }
    }

    /// World point at normalized parameters (u, v) in [0, 1]^2.
    pub fn evaluate(&self, u: f64, v: f64) -> Point3<f64> {
        match self {
            Face::Planar(f) => f.evaluate(u, v),
            Face::Cylindrical(f) => f.evaluate(u, v),
        }
    }

    /// Surface normal at normalized parameters (u, v).
    pub fn normal_at(&self, u: f64, _v: f64) -> Vector3<f64> {
        match self {
            Face::Planar(f) => f.normal(),
            Face::Cylindrical(f) => f.normal_at(u),
        }
    }

    /// True for planar faces; tangent-plane sampling only applies to these.
    pub fn is_planar(&self) -> bool {
        matches!(self, Face::Planar(_))
    }
}
