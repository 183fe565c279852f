use num_bigint::BigInt;
use num_integer::Roots;
use num_traits::{One, Signed, Zero};

/// Every positive divisor of |n| in ascending order, 1 and |n| included.
///
/// Trial division up to ⌊√n⌋ pairs each small divisor i with n/i; when
/// i² = n the divisor is recorded once. n must be nonzero; the public
/// surface only reaches this through a non-singular curve's discriminant.
pub fn divisors(n: &BigInt) -> Vec<BigInt> {
    let n = n.abs();
    debug_assert!(!n.is_zero());
    let mut small = Vec::new();
    let mut large = Vec::new();
    let mut i = BigInt::one();
    while &i * &i <= n {
        if (&n % &i).is_zero() {
            small.push(i.clone());
            if &i * &i != n {
                large.push(&n / &i);
            }
        }
        i += 1u32;
    }
    large.reverse();
    small.extend(large);
    small
}

/// The exact square root of `n`, if `n` is a perfect square.
pub fn exact_sqrt(n: &BigInt) -> Option<BigInt> {
    if n.is_negative() {
        return None;
    }
    let root = n.sqrt();
    if &root * &root == *n {
        Some(root)
    } else {
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn divisors_of(n: i64) -> Vec<i64> {
        divisors(&BigInt::from(n))
            .iter()
            .map(|d| i64::try_from(d).unwrap())
            .collect()
    }

    #[test]
    fn small_composites() {
        assert_eq!(divisors_of(12), vec![1, 2, 3, 4, 6, 12]);
        assert_eq!(divisors_of(1), vec![1]);
        assert_eq!(divisors_of(17), vec![1, 17]);
    }

    #[test]
    fn perfect_square_counted_once() {
        assert_eq!(divisors_of(36), vec![1, 2, 3, 4, 6, 9, 12, 18, 36]);
        assert_eq!(divisors_of(4), vec![1, 2, 4]);
    }

    #[test]
    fn negative_input_uses_absolute_value() {
        assert_eq!(divisors_of(-12), divisors_of(12));
        // |disc| of LMFDB 272.b1
        assert_eq!(
            divisors_of(-4352),
            vec![1, 2, 4, 8, 16, 17, 32, 34, 64, 68, 128, 136, 256, 272, 544, 1088, 2176, 4352]
        );
    }

    #[test]
    fn exact_square_roots() {
        assert_eq!(exact_sqrt(&BigInt::from(256)), Some(BigInt::from(16)));
        assert_eq!(exact_sqrt(&BigInt::from(0)), Some(BigInt::from(0)));
        assert_eq!(exact_sqrt(&BigInt::from(1)), Some(BigInt::from(1)));
        assert_eq!(exact_sqrt(&BigInt::from(17)), None);
        assert_eq!(exact_sqrt(&BigInt::from(-4)), None);
    }
}
