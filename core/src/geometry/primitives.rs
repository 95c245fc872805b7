//! Circle primitives used by the hierarchy builder, the point classifier and
//! the render-order composer.
//!
//! Every test here is a plain numeric comparison: boundaries are inclusive and
//! tangent or zero-radius circles get no special treatment.

use super::{dist_sq, Point2};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point2,
    pub radius: f64,
}

impl Circle {
    pub fn new(cx: f64, cy: f64, radius: f64) -> Self {
        Self {
            center: Point2::new(cx, cy),
            radius,
        }
    }

    /// Distance between the two centers.
    pub fn distance_to(&self, other: &Circle) -> f64 {
        nalgebra::distance(&self.center, &other.center)
    }

    /// True when this circle lies entirely inside `outer`, boundary included.
    pub fn within(&self, outer: &Circle) -> bool {
        self.distance_to(outer) + self.radius <= outer.radius
    }

    /// Inclusive point test on squared distances.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        dist_sq(&self.center, &Point2::new(x, y)) <= self.radius * self.radius
    }

    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

pub fn distance(a: &Circle, b: &Circle) -> f64 {
    a.distance_to(b)
}

pub fn contains_point(circle: &Circle, x: f64, y: f64) -> bool {
    circle.contains_point(x, y)
}

pub fn area(circle: &Circle) -> f64 {
    circle.area()
}
