#![deny(clippy::all)]
#![deny(clippy::dbg_macro)]

//! Rational torsion subgroups of elliptic curves in short Weierstrass form
//! y² = x³ + ax + b, computed exactly via the Nagell–Lutz theorem.
//!
//! ```
//! use nagell_lutz::{Curve, Point, PointOrder};
//!
//! // LMFDB 272.b1
//! let curve = Curve::new(-1451, 21274)?;
//! let base = Point::integral(21, 8);
//! assert!(curve.contains(&base));
//! assert_eq!(curve.order_of(&base), PointOrder::Finite(4));
//! assert_eq!(curve.torsion_subgroup().len(), 4);
//! # Ok::<(), nagell_lutz::CurveError>(())
//! ```

pub mod arithmetic;
mod cubic;
pub mod curve;
mod modp;
mod torsion;

pub use arithmetic::Point;
pub use curve::{Curve, CurveError};
pub use torsion::{PointOrder, MAZUR_BOUND};
