//! Brute-force enumeration of curve points modulo a prime.

use crate::curve::Curve;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::ToPrimitive;

impl Curve {
    /// Affine solutions of y² ≡ x³ + ax + b (mod `modulus`), found by
    /// scanning every residue pair, in ascending (x, y) order. The point
    /// at infinity is not listed; the full group has one more element, see
    /// [`Curve::group_order_mod`].
    pub fn affine_points_mod(&self, modulus: u64) -> Vec<(u64, u64)> {
        let m = BigInt::from(modulus);
        // NOTE: the unwraps are fine because mod_floor lands in [0, modulus)
        let a = self.a().mod_floor(&m).to_u64().unwrap();
        let b = self.b().mod_floor(&m).to_u64().unwrap();

        let mut solutions = Vec::new();
        for x in 0..modulus {
            let x_cubed = mul_mod(mul_mod(x, x, modulus), x, modulus);
            let rhs = add_mod(add_mod(x_cubed, mul_mod(a, x, modulus), modulus), b, modulus);
            for y in 0..modulus {
                if mul_mod(y, y, modulus) == rhs {
                    solutions.push((x, y));
                }
            }
        }
        solutions
    }

    /// Number of points of the curve reduced mod `modulus`, the point at
    /// infinity included.
    pub fn group_order_mod(&self, modulus: u64) -> u64 {
        self.affine_points_mod(modulus).len() as u64 + 1
    }
}

fn mul_mod(lhs: u64, rhs: u64, modulus: u64) -> u64 {
    (u128::from(lhs) * u128::from(rhs) % u128::from(modulus)) as u64
}

fn add_mod(lhs: u64, rhs: u64, modulus: u64) -> u64 {
    ((u128::from(lhs) + u128::from(rhs)) % u128::from(modulus)) as u64
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lmfdb_272b1_reduced_mod_small_primes() {
        let curve = Curve::new(-1451, 21274).unwrap();
        assert_eq!(
            curve.affine_points_mod(5),
            vec![(0, 2), (0, 3), (1, 2), (1, 3), (2, 0), (4, 2), (4, 3)]
        );
        assert_eq!(curve.group_order_mod(5), 8);
        assert_eq!(curve.group_order_mod(7), 12);
    }

    #[test]
    fn negative_coefficients_reduce_into_range() {
        // −1 ≡ 2 (mod 3); y² = x³ + 2x mod 3 has the three order-two
        // residue points
        let curve = Curve::new(-1, 0).unwrap();
        assert_eq!(curve.affine_points_mod(3), vec![(0, 0), (1, 0), (2, 0)]);
        assert_eq!(curve.group_order_mod(3), 4);
    }

    #[test]
    fn order_six_curve_mod_five() {
        let curve = Curve::new(0, 1).unwrap();
        assert_eq!(
            curve.affine_points_mod(5),
            vec![(0, 1), (0, 4), (2, 2), (2, 3), (4, 0)]
        );
        assert_eq!(curve.group_order_mod(5), 6);
    }
}
