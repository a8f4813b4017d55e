//! Operations that depend on a vector's direction.
//!
//! Anything that needs a unit vector fails with
//! [`VectorError::UndefinedDirection`] when handed a zero vector, except
//! the parallelism test, which treats the zero vector as parallel to
//! everything.

use crate::{numeric, numeric::IntoCoordinate, vector::Vector, Result, VectorError};
use bigdecimal::BigDecimal;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

impl Vector {
    pub fn unit_vector(&self) -> Result<Vector> {
        let magnitude = self.magnitude();
        if magnitude.is_zero() {
            return Err(VectorError::UndefinedDirection(
                "the zero vector has no unit vector".to_string(),
            ));
        }
        let inverse = self.context().round(&(BigDecimal::one() / magnitude));
        self.scale(inverse)
    }

    /// Angle between `self` and `v`.
    ///
    /// The cosine is rounded to three places and clamped into `[-1, 1]` so
    /// nearly (anti)parallel vectors stay inside the domain of `arccos`.
    pub fn angle(&self, v: &Vector, unit: AngleUnit) -> Result<BigDecimal> {
        self.ensure_same_dimension(v)?;
        let cosine = self.unit_vector()?.dot_product(&v.unit_vector()?)?;
        let radians = numeric::acos(&numeric::clamp_cosine(&cosine), self.context())?;
        match unit {
            AngleUnit::Radians => Ok(radians),
            AngleUnit::Degrees => numeric::radians_to_degrees(&radians, self.context()),
        }
    }

    pub fn is_parallel(&self, v: &Vector) -> Result<bool> {
        self.parallel_within(v, self.context().tolerance())
    }

    pub fn is_parallel_within(&self, v: &Vector, tolerance: impl IntoCoordinate) -> Result<bool> {
        self.parallel_within(v, &tolerance.into_coordinate()?)
    }

    // Same or opposite direction: |u . w| equals 1 up to the tolerance.
    fn parallel_within(&self, v: &Vector, tolerance: &BigDecimal) -> Result<bool> {
        self.ensure_same_dimension(v)?;
        if self.is_zero() || v.is_zero() {
            return Ok(true);
        }
        let cosine = self.unit_vector()?.dot_product(&v.unit_vector()?)?;
        let deviation = (cosine.abs() - BigDecimal::one()).abs();
        Ok(deviation <= *tolerance)
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude() < *self.context().tolerance()
    }

    pub fn is_zero_within(&self, tolerance: impl IntoCoordinate) -> Result<bool> {
        Ok(self.magnitude() < tolerance.into_coordinate()?)
    }

    pub fn is_orthogonal(&self, v: &Vector) -> Result<bool> {
        Ok(self.dot_product(v)?.abs() <= *self.context().tolerance())
    }

    pub fn is_orthogonal_within(&self, v: &Vector, tolerance: impl IntoCoordinate) -> Result<bool> {
        let tolerance = tolerance.into_coordinate()?;
        Ok(self.dot_product(v)?.abs() <= tolerance)
    }

    /// Orthogonal projection of `self` onto `b`.
    pub fn projection(&self, b: &Vector) -> Result<Vector> {
        self.ensure_same_dimension(b)?;
        let u = b.unit_vector()?;
        let length = self.dot_product(&u)?;
        u.scale(length)
    }

    /// The part of `self` perpendicular to `b`, i.e. `self - projection(b)`.
    pub fn orthogonal_component(&self, b: &Vector) -> Result<Vector> {
        self.minus(&self.projection(b)?)
    }
}
