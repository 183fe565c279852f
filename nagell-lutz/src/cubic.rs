//! Exact side of the root-finder boundary.
//!
//! The `depressed-cubic` collaborator hands back approximate real roots.
//! Everything here rounds them to the nearest integer and keeps only those
//! that satisfy the cubic exactly over `BigInt`; solver noise is filtered,
//! never surfaced.

use depressed_cubic::DepressedCubic;

use num_bigint::BigInt;
use num_traits::{FromPrimitive, ToPrimitive, Zero};

/// Integer roots of x³ + ax + (b − y²) in ascending order.
pub(crate) fn integer_roots(a: &BigInt, b: &BigInt, y: &BigInt) -> Vec<BigInt> {
    let constant = b - y * y;
    let p = a.to_f64().unwrap_or(f64::NAN);
    let q = constant.to_f64().unwrap_or(f64::NAN);
    if !p.is_finite() || !q.is_finite() {
        // Coefficients beyond f64 range are out of reach for the
        // approximate solver; a missed candidate only narrows the search.
        return Vec::new();
    }
    let mut roots = Vec::new();
    for real_root in DepressedCubic::new(p, q).real_roots() {
        let rounded = match BigInt::from_f64(real_root.round()) {
            Some(r) => r,
            None => continue,
        };
        let substituted = &rounded * &rounded * &rounded + a * &rounded + &constant;
        if substituted.is_zero() && !roots.contains(&rounded) {
            roots.push(rounded);
        }
    }
    roots
}

#[cfg(test)]
mod test {
    use super::*;

    fn roots_of(a: i64, b: i64, y: i64) -> Vec<BigInt> {
        integer_roots(&BigInt::from(a), &BigInt::from(b), &BigInt::from(y))
    }

    #[test]
    fn order_two_abscissa_of_lmfdb_272b1() {
        // x³ − 1451x + 21274 has 22 as its only integer root; the two
        // other real roots round to −44 and 22 and only the genuine one
        // survives exact substitution.
        assert_eq!(roots_of(-1451, 21274, 0), vec![BigInt::from(22)]);
    }

    #[test]
    fn base_point_abscissa_of_lmfdb_272b1() {
        assert_eq!(roots_of(-1451, 21274, 8), vec![BigInt::from(21)]);
        assert_eq!(roots_of(-1451, 21274, -8), vec![BigInt::from(21)]);
    }

    #[test]
    fn triple_root_at_zero() {
        // y² = x³ + 1 with y = ±1 degenerates to x³ = 0
        assert_eq!(roots_of(0, 1, 1), vec![BigInt::from(0)]);
        assert_eq!(roots_of(0, 1, -1), vec![BigInt::from(0)]);
    }

    #[test]
    fn three_integer_roots() {
        // x³ − x = x(x − 1)(x + 1)
        assert_eq!(
            roots_of(-1, 0, 0),
            vec![BigInt::from(-1), BigInt::from(0), BigInt::from(1)]
        );
    }

    #[test]
    fn no_integer_roots() {
        // x³ − 43x + 165 has no integer root
        assert_eq!(roots_of(-43, 166, 1), Vec::<BigInt>::new());
    }
}
