use crate::{context::ArithmeticContext, numeric, numeric::IntoCoordinate, Result, VectorError};
use bigdecimal::BigDecimal;
use ndarray::{Array1, Zip};
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable vector of decimal coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "VectorRecord", into = "VectorRecord")]
pub struct Vector {
    coordinates: Array1<BigDecimal>,
    context: ArithmeticContext,
}

/// Wire form of a [`Vector`]: a plain list so the non-empty check runs on load.
#[derive(Serialize, Deserialize)]
struct VectorRecord {
    coordinates: Vec<BigDecimal>,
    #[serde(default)]
    context: ArithmeticContext,
}

impl Vector {
    pub fn new<I>(coordinates: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: IntoCoordinate,
    {
        Self::with_context(coordinates, ArithmeticContext::default())
    }

    pub fn with_context<I>(coordinates: I, context: ArithmeticContext) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: IntoCoordinate,
    {
        let coordinates = coordinates
            .into_iter()
            .map(IntoCoordinate::into_coordinate)
            .collect::<Result<Vec<_>>>()?;

        if coordinates.is_empty() {
            return Err(VectorError::InvalidArgument(
                "The coordinates must be nonempty".to_string(),
            ));
        }

        Ok(Self {
            coordinates: Array1::from_vec(coordinates),
            context,
        })
    }

    pub fn zero(dimension: usize, context: ArithmeticContext) -> Result<Self> {
        Self::with_context(vec![0; dimension], context)
    }

    pub(crate) fn from_parts(coordinates: Array1<BigDecimal>, context: ArithmeticContext) -> Self {
        Self {
            coordinates,
            context,
        }
    }

    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    pub fn coordinates(&self) -> &Array1<BigDecimal> {
        &self.coordinates
    }

    pub fn context(&self) -> &ArithmeticContext {
        &self.context
    }

    pub(crate) fn ensure_same_dimension(&self, other: &Vector) -> Result<()> {
        if self.dimension() != other.dimension() {
            return Err(VectorError::DimensionMismatch {
                expected: self.dimension(),
                found: other.dimension(),
            });
        }
        Ok(())
    }

    pub fn plus(&self, v: &Vector) -> Result<Vector> {
        self.ensure_same_dimension(v)?;
        let ctx = &self.context;
        let coordinates = Zip::from(&self.coordinates)
            .and(&v.coordinates)
            .map_collect(|x, y| ctx.round(&(x + y)));
        Ok(Self::from_parts(coordinates, self.context.clone()))
    }

    pub fn minus(&self, v: &Vector) -> Result<Vector> {
        self.ensure_same_dimension(v)?;
        let ctx = &self.context;
        let coordinates = Zip::from(&self.coordinates)
            .and(&v.coordinates)
            .map_collect(|x, y| ctx.round(&(x - y)));
        Ok(Self::from_parts(coordinates, self.context.clone()))
    }

    pub fn scale(&self, scalar: impl IntoCoordinate) -> Result<Vector> {
        let scalar = scalar.into_coordinate()?;
        let ctx = &self.context;
        let coordinates = self.coordinates.map(|x| ctx.round(&(x * &scalar)));
        Ok(Self::from_parts(coordinates, self.context.clone()))
    }

    /// Euclidean norm.
    pub fn magnitude(&self) -> BigDecimal {
        let sum_of_squares = self
            .coordinates
            .iter()
            .fold(BigDecimal::zero(), |acc, x| acc + x * x);
        // A sum of squares is never negative.
        numeric::sqrt_abs(&self.context.round(&sum_of_squares), &self.context)
    }

    pub fn dot_product(&self, v: &Vector) -> Result<BigDecimal> {
        self.ensure_same_dimension(v)?;
        let sum = Zip::from(&self.coordinates)
            .and(&v.coordinates)
            .fold(BigDecimal::zero(), |acc, x, y| acc + x * y);
        Ok(self.context.round(&sum))
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.coordinates == other.coordinates
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector: (")?;
        for (i, coordinate) in self.coordinates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", coordinate)?;
        }
        write!(f, ")")
    }
}

impl TryFrom<VectorRecord> for Vector {
    type Error = VectorError;

    fn try_from(record: VectorRecord) -> Result<Self> {
        record.context.validate()?;
        Self::with_context(record.coordinates, record.context)
    }
}

impl From<Vector> for VectorRecord {
    fn from(vector: Vector) -> Self {
        Self {
            coordinates: vector.coordinates.to_vec(),
            context: vector.context,
        }
    }
}
