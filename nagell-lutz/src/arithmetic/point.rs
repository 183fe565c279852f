use crate::curve::Curve;

use num_bigint::BigInt;
use num_rational::BigRational;
use serde::{Deserialize, Serialize};

use std::fmt;

/// A rational point on an elliptic curve: the point at infinity (the group
/// identity) or an affine coordinate pair (x, y).
///
/// Points are plain values with no identity beyond coordinate equality. The
/// group law assumes its operands lie on the given curve; see
/// [`Curve::affine_point`] for the checked constructor.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Point {
    Identity,
    Affine { x: BigRational, y: BigRational },
}

impl Point {
    pub fn affine(x: BigRational, y: BigRational) -> Self {
        Self::Affine { x, y }
    }

    /// Affine point with integer coordinates.
    pub fn integral(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Self::Affine {
            x: BigRational::from(x.into()),
            y: BigRational::from(y.into()),
        }
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }

    /// Whether both coordinates are integers. The identity counts as
    /// integral.
    pub fn is_integral(&self) -> bool {
        match self {
            Self::Identity => true,
            Self::Affine { x, y } => x.is_integer() && y.is_integer(),
        }
    }

    /// The group law: chord-and-tangent addition of `self` and `other` on
    /// `curve`.
    ///
    /// The line through the two operands (the tangent when they coincide)
    /// meets the curve in a third point; the sum is its reflection across
    /// the x-axis. Both degenerate shared-x cases return the identity
    /// before any slope is formed, so no division by zero is reachable.
    pub fn add(&self, curve: &Curve, other: &Point) -> Point {
        let (xp, yp, xq, yq) = match (self, other) {
            (Point::Identity, _) => return other.clone(),
            (_, Point::Identity) => return self.clone(),
            (Point::Affine { x: xp, y: yp }, Point::Affine { x: xq, y: yq }) => (xp, yp, xq, yq),
        };
        let slope = if xp == xq {
            if *yp == -yq {
                // Vertical line, covering the y = 0 doubling case.
                return Point::Identity;
            }
            // Tangent at P: (3x² + a) / (2y), with y ≠ 0 here.
            let a = BigRational::from(curve.a().clone());
            (ratio(3) * xp * xp + a) / (ratio(2) * yp)
        } else {
            (yq - yp) / (xq - xp)
        };
        let intercept = yp - &slope * xp;
        let x_3 = &slope * &slope - xp - xq;
        let y_3 = &slope * &x_3 + intercept;
        Point::Affine { x: x_3, y: -y_3 }
    }

    pub fn double(&self, curve: &Curve) -> Point {
        self.add(curve, self)
    }

    /// n·P by repeated addition; 0·P is the identity.
    pub fn mul(&self, curve: &Curve, n: u32) -> Point {
        let mut acc = Point::Identity;
        for _ in 0..n {
            acc = self.add(curve, &acc);
        }
        acc
    }
}

fn ratio(n: i64) -> BigRational {
    BigRational::from(BigInt::from(n))
}

impl std::ops::Neg for Point {
    type Output = Self;
    fn neg(self) -> Self::Output {
        match self {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => Point::Affine { x, y: -y },
        }
    }
}

impl std::ops::Neg for &Point {
    type Output = Point;
    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Point::Identity => write!(f, "O"),
            Point::Affine { x, y } => write!(f, "({}, {})", x, y),
        }
    }
}
