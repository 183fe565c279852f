use crate::arithmetic::Point;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    #[error("singular curve: 4a^3 + 27b^2 = 0")]
    SingularCurve,
    #[error("point ({x}, {y}) does not satisfy the curve equation")]
    PointOffCurve { x: BigRational, y: BigRational },
}

/// An elliptic curve y² = x³ + ax + b with integer coefficients.
///
/// Construction rejects singular input, so every `Curve` value carries a
/// nonzero discriminant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Curve {
    a: BigInt,
    b: BigInt,
}

impl Curve {
    pub fn new(a: impl Into<BigInt>, b: impl Into<BigInt>) -> Result<Self, CurveError> {
        let curve = Self {
            a: a.into(),
            b: b.into(),
        };
        if curve.discriminant().is_zero() {
            return Err(CurveError::SingularCurve);
        }
        Ok(curve)
    }

    pub fn a(&self) -> &BigInt {
        &self.a
    }

    pub fn b(&self) -> &BigInt {
        &self.b
    }

    /// 4a³ + 27b², computed exactly.
    pub fn discriminant(&self) -> BigInt {
        let a_cubed = &self.a * &self.a * &self.a;
        let b_squared = &self.b * &self.b;
        BigInt::from(4) * a_cubed + BigInt::from(27) * b_squared
    }

    /// Whether `point` satisfies y² = x³ + ax + b exactly.
    pub fn contains(&self, point: &Point) -> bool {
        match point {
            Point::Identity => true,
            Point::Affine { x, y } => {
                let a = BigRational::from(self.a.clone());
                let b = BigRational::from(self.b.clone());
                y * y == x * x * x + a * x + b
            }
        }
    }

    /// Builds the affine point (x, y), checking that it lies on the curve.
    ///
    /// The `Point` variants themselves stay freely constructible; the group
    /// law assumes on-curve input and this is the validated entry for
    /// callers that want the precondition enforced.
    pub fn affine_point(&self, x: BigRational, y: BigRational) -> Result<Point, CurveError> {
        let point = Point::affine(x, y);
        if self.contains(&point) {
            Ok(point)
        } else {
            match point {
                Point::Affine { x, y } => Err(CurveError::PointOffCurve { x, y }),
                Point::Identity => unreachable!("affine constructor never yields the identity"),
            }
        }
    }
}
