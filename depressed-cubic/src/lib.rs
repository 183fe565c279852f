#![deny(clippy::all)]
#![deny(clippy::dbg_macro)]

//! Real-root extraction for monic depressed cubics t³ + pt + q.
//!
//! Roots are computed in `f64` with the closed-form split on the cubic
//! discriminant and carry ordinary floating-point error. Callers that need
//! exact roots must round and re-validate on their own side of the boundary.

use std::f64::consts::PI;

/// A monic depressed cubic t³ + pt + q.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepressedCubic {
    p: f64,
    q: f64,
}

impl DepressedCubic {
    pub fn new(p: f64, q: f64) -> Self {
        Self { p, q }
    }

    /// −4p³ − 27q²; positive iff the cubic has three distinct real roots.
    pub fn discriminant(&self) -> f64 {
        -4.0 * self.p.powi(3) - 27.0 * self.q * self.q
    }

    /// All real roots in ascending order.
    ///
    /// A cubic always has at least one real root; repeated roots are listed
    /// once.
    pub fn real_roots(&self) -> Vec<f64> {
        let Self { p, q } = *self;
        if p == 0.0 && q == 0.0 {
            return vec![0.0];
        }
        let disc = self.discriminant();
        let mut roots = if disc > 0.0 {
            // Casus irreducibilis: three distinct real roots. The
            // trigonometric form avoids complex radicals; p < 0 here.
            let m = 2.0 * (-p / 3.0).sqrt();
            let theta = (3.0 * q / (p * m)).clamp(-1.0, 1.0).acos() / 3.0;
            (0..3)
                .map(|k| m * (theta - 2.0 * PI * f64::from(k) / 3.0).cos())
                .collect()
        } else if disc < 0.0 {
            // A single real root, by Cardano's radicals.
            let h = (q * q / 4.0 + p.powi(3) / 27.0).sqrt();
            vec![(-q / 2.0 + h).cbrt() + (-q / 2.0 - h).cbrt()]
        } else {
            // Repeated roots: 3q/p is simple, −3q/(2p) is double. p = 0
            // would force q = 0, which is handled above.
            vec![3.0 * q / p, -3.0 * q / (2.0 * p)]
        };
        roots.sort_by(f64::total_cmp);
        roots.dedup();
        roots
    }
}
