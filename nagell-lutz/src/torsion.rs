//! Nagell–Lutz candidate search, bounded order computation, and torsion
//! subgroup assembly.

use crate::arithmetic::{divisors, exact_sqrt, Point};
use crate::cubic;
use crate::curve::Curve;

use num_bigint::BigInt;
use num_traits::Zero;

/// Maximum order of a rational torsion point: by Mazur's theorem the
/// possible orders are 1–10 and 12. A point of finite order therefore
/// reaches the identity within `MAZUR_BOUND - 1` additions past the point
/// itself.
pub const MAZUR_BOUND: u32 = 12;

/// Outcome of the bounded order search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointOrder {
    /// The n-th multiple of the point is the identity.
    Finite(u32),
    /// Some multiple has a non-integral coordinate, which by the
    /// Nagell–Lutz corollary proves the point has infinite order.
    Infinite,
    /// The search bound was exhausted without resolution. The point is
    /// presumed non-torsion, but this outcome is not a proof.
    Unknown,
}

impl PointOrder {
    pub fn is_finite(&self) -> bool {
        matches!(self, PointOrder::Finite(_))
    }
}

impl Curve {
    /// Every point that could have finite order, per the Nagell–Lutz
    /// theorem: a rational torsion point (x, y) with y ≠ 0 has integer
    /// coordinates and y² divides the discriminant.
    ///
    /// Order-two points (y = 0) come first, ascending in x; then, for each
    /// perfect-square divisor d of the discriminant in ascending order, the
    /// points with y = +√d followed by y = −√d. The ordering carries no
    /// meaning but is deterministic.
    pub fn torsion_candidates(&self) -> Vec<Point> {
        let mut candidates = Vec::new();
        for x in cubic::integer_roots(self.a(), self.b(), &BigInt::zero()) {
            push_unique(&mut candidates, Point::integral(x, 0));
        }
        let mut candidate_ys = Vec::new();
        for divisor in divisors(&self.discriminant()) {
            // The theorem bounds y², so every square divisor contributes
            // both square roots.
            if let Some(root) = exact_sqrt(&divisor) {
                candidate_ys.push(root.clone());
                candidate_ys.push(-root);
            }
        }
        for y in candidate_ys {
            for x in cubic::integer_roots(self.a(), self.b(), &y) {
                push_unique(&mut candidates, Point::integral(x, y.clone()));
            }
        }
        candidates
    }

    /// Order of `point`, searched up to [`MAZUR_BOUND`].
    ///
    /// The accumulator runs through 2P, 3P, … ; reaching the identity at
    /// the n-th multiple gives `Finite(n)`, and a non-integral multiple
    /// proves `Infinite` immediately without further additions.
    pub fn order_of(&self, point: &Point) -> PointOrder {
        if point.is_identity() {
            return PointOrder::Finite(1);
        }
        let mut accumulator = point.clone();
        for multiple in 2..=MAZUR_BOUND {
            accumulator = point.add(self, &accumulator);
            if accumulator.is_identity() {
                return PointOrder::Finite(multiple);
            }
            if !accumulator.is_integral() {
                return PointOrder::Infinite;
            }
        }
        PointOrder::Unknown
    }

    /// Whether the bounded search finds a finite order for `point`.
    ///
    /// `false` means "not found within the Mazur bound", which is not by
    /// itself a proof of infinite order; see [`Curve::order_of`] for the
    /// three-way verdict.
    pub fn is_finite_order(&self, point: &Point) -> bool {
        self.order_of(point).is_finite()
    }

    /// The rational torsion subgroup: the identity followed by every
    /// candidate that passes the finite-order test, in candidate order.
    ///
    /// Closure under addition holds by the theory and is not re-verified.
    pub fn torsion_subgroup(&self) -> Vec<Point> {
        let mut subgroup = vec![Point::Identity];
        for candidate in self.torsion_candidates() {
            if self.is_finite_order(&candidate) {
                subgroup.push(candidate);
            }
        }
        subgroup
    }
}

fn push_unique(points: &mut Vec<Point>, point: Point) {
    if !points.contains(&point) {
        points.push(point);
    }
}
