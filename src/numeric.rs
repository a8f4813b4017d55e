//! Decimal helpers shared by the vector operations.
//!
//! Every value that leaves this module is rounded to the working precision
//! of the [`ArithmeticContext`] it was computed under.

use crate::{context::ArithmeticContext, Result, VectorError};
use bigdecimal::BigDecimal;
use num_traits::{One, Zero};
use std::str::FromStr;

/// Decimal places the cosine is rounded to before `arccos` is applied.
pub const COSINE_ROUNDING_PLACES: i64 = 3;

const PI_DIGITS: &str = "3.14159265358979323846264338327950288419716939937510\
58209749445923078164062862089986280348253421170679";

/// Anything that can become a coordinate (or scalar) of a vector.
pub trait IntoCoordinate {
    fn into_coordinate(self) -> Result<BigDecimal>;
}

macro_rules! impl_into_coordinate_int {
    ($($t:ty),*) => {
        $(
            impl IntoCoordinate for $t {
                fn into_coordinate(self) -> Result<BigDecimal> {
                    Ok(BigDecimal::from(self))
                }
            }
        )*
    };
}

impl_into_coordinate_int!(i8, i16, i32, i64, u8, u16, u32, u64);

macro_rules! impl_into_coordinate_float {
    ($($t:ty),*) => {
        $(
            impl IntoCoordinate for $t {
                // Goes through the shortest round-trip text so 3.039 stays 3.039.
                fn into_coordinate(self) -> Result<BigDecimal> {
                    if !self.is_finite() {
                        return Err(VectorError::InvalidArgument(format!(
                            "{} is not a finite number",
                            self
                        )));
                    }
                    parse_decimal(&self.to_string())
                }
            }
        )*
    };
}

impl_into_coordinate_float!(f32, f64);

impl IntoCoordinate for &str {
    fn into_coordinate(self) -> Result<BigDecimal> {
        parse_decimal(self)
    }
}

impl IntoCoordinate for String {
    fn into_coordinate(self) -> Result<BigDecimal> {
        parse_decimal(&self)
    }
}

impl IntoCoordinate for &String {
    fn into_coordinate(self) -> Result<BigDecimal> {
        parse_decimal(self)
    }
}

impl IntoCoordinate for BigDecimal {
    fn into_coordinate(self) -> Result<BigDecimal> {
        Ok(self)
    }
}

impl IntoCoordinate for &BigDecimal {
    fn into_coordinate(self) -> Result<BigDecimal> {
        Ok(self.clone())
    }
}

fn parse_decimal(literal: &str) -> Result<BigDecimal> {
    BigDecimal::from_str(literal.trim()).map_err(|e| {
        VectorError::InvalidArgument(format!("'{}' is not a decimal number: {}", literal, e))
    })
}

/// Extra digits carried through iterative routines before the final rounding.
const GUARD_DIGITS: u64 = 10;

/// Square root rounded to the working precision.
pub fn sqrt(value: &BigDecimal, ctx: &ArithmeticContext) -> Result<BigDecimal> {
    if *value < BigDecimal::zero() {
        return Err(VectorError::InvalidArgument(format!(
            "cannot take the square root of negative value {}",
            value
        )));
    }
    Ok(sqrt_abs(value, ctx))
}

/// Square root of `|value|` by Newton's method.
///
/// Starts at `max(|value|, 1)`, which is never below the root, so the
/// iterates fall monotonically and the loop stops once rounding stalls.
/// The stalled iterate is returned, so perfect squares come out exact.
pub fn sqrt_abs(value: &BigDecimal, ctx: &ArithmeticContext) -> BigDecimal {
    let value = value.abs();
    if value.is_zero() {
        return value;
    }
    let work = ctx.with_guard_digits(GUARD_DIGITS);
    let two = BigDecimal::from(2);
    let mut root = if value > BigDecimal::one() {
        value.clone()
    } else {
        BigDecimal::one()
    };
    loop {
        let quotient = work.round(&(value.clone() / root.clone()));
        let next = work.round(&((&root + &quotient) / two.clone()));
        if next >= root {
            return ctx.round(&next);
        }
        root = next;
    }
}

/// Rounds a cosine to [`COSINE_ROUNDING_PLACES`] and clamps it into `[-1, 1]`.
pub fn clamp_cosine(cosine: &BigDecimal) -> BigDecimal {
    let rounded = cosine.round(COSINE_ROUNDING_PLACES);
    let one = BigDecimal::one();
    let minus_one = -BigDecimal::one();
    if rounded > one {
        one
    } else if rounded < minus_one {
        minus_one
    } else {
        rounded
    }
}

/// Arc cosine in radians, `π/2 - atan(x / sqrt(1 - x²))`.
///
/// -1, 0 and 1 map to π, π/2 and 0 of the working precision exactly.
pub fn acos(cosine: &BigDecimal, ctx: &ArithmeticContext) -> Result<BigDecimal> {
    let one = BigDecimal::one();
    let minus_one = -BigDecimal::one();
    if *cosine > one || *cosine < minus_one {
        return Err(VectorError::InvalidArgument(format!(
            "arccos is undefined for {}",
            cosine
        )));
    }
    if *cosine == one {
        return Ok(BigDecimal::zero());
    }
    if *cosine == minus_one {
        return pi(ctx);
    }
    if cosine.is_zero() {
        return Ok(ctx.round(&(pi(ctx)? / BigDecimal::from(2))));
    }

    let work = ctx.with_guard_digits(GUARD_DIGITS);
    let sine = sqrt_abs(&work.round(&(&one - &(cosine * cosine))), &work);
    let ratio = work.round(&(cosine.clone() / sine));
    let half_pi = work.round(&(pi(&work)? / BigDecimal::from(2)));
    Ok(ctx.round(&(half_pi - atan(&ratio, &work))))
}

// Halves the argument with atan(y) = 2 atan(y / (1 + sqrt(1 + y²))) until
// |y| <= 0.1, then sums the Taylor series.
fn atan(value: &BigDecimal, work: &ArithmeticContext) -> BigDecimal {
    let one = BigDecimal::one();
    let limit = BigDecimal::new(1.into(), 1);
    let mut y = value.clone();
    let mut doublings = 0u32;
    while y.abs() > limit {
        let root = sqrt_abs(&work.round(&(&one + &(&y * &y))), work);
        y = work.round(&(y / (&one + &root)));
        doublings += 1;
    }

    let epsilon = BigDecimal::new(1.into(), work.precision() as i64);
    let y_squared = work.round(&(&y * &y));
    let mut power = y.clone();
    let mut sum = y;
    let mut n = 1u64;
    loop {
        power = work.round(&(-(&power * &y_squared)));
        let term = work.round(&(power.clone() / BigDecimal::from(2 * n + 1)));
        if term.abs() < epsilon {
            break;
        }
        sum = sum + term;
        n += 1;
    }
    work.round(&(sum * BigDecimal::from(2u64.pow(doublings))))
}

/// π rounded to the working precision.
pub fn pi(ctx: &ArithmeticContext) -> Result<BigDecimal> {
    Ok(ctx.round(&parse_decimal(PI_DIGITS)?))
}

pub fn radians_to_degrees(radians: &BigDecimal, ctx: &ArithmeticContext) -> Result<BigDecimal> {
    let half_turn = radians * &BigDecimal::from(180);
    Ok(ctx.round(&(half_turn / pi(ctx)?)))
}
