use crate::{numeric::IntoCoordinate, Result, VectorError};
use anyhow::Context;
use bigdecimal::BigDecimal;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const DEFAULT_PRECISION: u64 = 30;
pub const MIN_PRECISION: u64 = 30;
/// bigdecimal divides to 100 digits.
pub const MAX_PRECISION: u64 = 100;
/// Default tolerance is 1e-10.
pub const DEFAULT_TOLERANCE_SCALE: i64 = 10;

/// Working precision and default tolerance for vector arithmetic.
///
/// Each [`Vector`](crate::Vector) carries the context it was built with;
/// there is no process-wide precision setting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArithmeticContext {
    precision: u64,
    tolerance: BigDecimal,
}

impl ArithmeticContext {
    pub fn new(precision: u64) -> Result<Self> {
        let ctx = Self {
            precision,
            ..Self::default()
        };
        ctx.validate()?;
        Ok(ctx)
    }

    pub fn with_tolerance(self, tolerance: impl IntoCoordinate) -> Result<Self> {
        let ctx = Self {
            tolerance: tolerance.into_coordinate()?,
            ..self
        };
        ctx.validate()?;
        Ok(ctx)
    }

    pub fn precision(&self) -> u64 {
        self.precision
    }

    pub fn tolerance(&self) -> &BigDecimal {
        &self.tolerance
    }

    /// The same context carrying `extra` more digits, for intermediate results.
    pub(crate) fn with_guard_digits(&self, extra: u64) -> Self {
        Self {
            precision: self.precision + extra,
            tolerance: self.tolerance.clone(),
        }
    }

    /// Rounds `value` to the working precision. Shorter values are left as-is.
    pub fn round(&self, value: &BigDecimal) -> BigDecimal {
        if value.digits() > self.precision {
            value.with_prec(self.precision)
        } else {
            value.clone()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_PRECISION..=MAX_PRECISION).contains(&self.precision) {
            return Err(VectorError::InvalidArgument(format!(
                "precision must be between {} and {} digits, got {}",
                MIN_PRECISION, MAX_PRECISION, self.precision
            )));
        }
        if self.tolerance <= BigDecimal::zero() {
            return Err(VectorError::InvalidArgument(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let ctx: Self = serde_json::from_str(json)
            .map_err(|e| VectorError::Config(format!("Failed to parse context: {}", e)))?;
        ctx.validate()?;
        Ok(ctx)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path)
            .with_context(|| format!("Failed to open context file {}", path.display()))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .context("Failed to read context file contents")?;

        let ctx = Self::from_json_str(&contents)?;
        tracing::debug!(
            path = %path.display(),
            precision = ctx.precision,
            tolerance = %ctx.tolerance,
            "loaded arithmetic context"
        );
        Ok(ctx)
    }
}

impl Default for ArithmeticContext {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            tolerance: BigDecimal::new(1.into(), DEFAULT_TOLERANCE_SCALE),
        }
    }
}
