//! Base and scale validation shared by every generator.
//!
//! Bases below 2 are rejected. Composite bases are accepted, since digit
//! reversal is defined for any base >= 2, but they correlate with other
//! axes and reduce uniformity, so they are reported through `tracing`.

use crate::types::LdsError;
use tracing::warn;

/// The 168 primes below 1000, in increasing order.
///
/// Multi-axis generators need a distinct base per axis; taking consecutive
/// entries from this table is the usual way to pick them.
///
/// # Example
///
/// ```
/// use lds_core::validation::PRIME_TABLE;
///
/// let bases = &PRIME_TABLE[..4];
/// assert_eq!(bases, &[2, 3, 5, 7]);
/// ```
pub const PRIME_TABLE: [u64; 168] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37,
    41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151,
    157, 163, 167, 173, 179, 181, 191, 193, 197, 199, 211, 223,
    227, 229, 233, 239, 241, 251, 257, 263, 269, 271, 277, 281,
    283, 293, 307, 311, 313, 317, 331, 337, 347, 349, 353, 359,
    367, 373, 379, 383, 389, 397, 401, 409, 419, 421, 431, 433,
    439, 443, 449, 457, 461, 463, 467, 479, 487, 491, 499, 503,
    509, 521, 523, 541, 547, 557, 563, 569, 571, 577, 587, 593,
    599, 601, 607, 613, 617, 619, 631, 641, 643, 647, 653, 659,
    661, 673, 677, 683, 691, 701, 709, 719, 727, 733, 739, 743,
    751, 757, 761, 769, 773, 787, 797, 809, 811, 821, 823, 827,
    829, 839, 853, 857, 859, 863, 877, 881, 883, 887, 907, 911,
    919, 929, 937, 941, 947, 953, 967, 971, 977, 983, 991, 997,
];

/// Trial-division primality test.
///
/// # Example
///
/// ```
/// use lds_core::validation::is_prime;
///
/// assert!(is_prime(7));
/// assert!(!is_prime(9));
/// assert!(!is_prime(1));
/// ```
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut i = 3u64;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Validates a single digit-reversal base.
///
/// # Returns
///
/// * `Ok(())` - `base >= 2` (a warning is logged if it is not prime)
/// * `Err(LdsError::InvalidBase)` - `base < 2`
pub fn validate_base(base: u64) -> Result<(), LdsError> {
    if base < 2 {
        return Err(LdsError::InvalidBase { base });
    }
    if !is_prime(base) {
        warn!(
            base,
            "non-prime base may reduce sequence uniformity; consider a base from PRIME_TABLE"
        );
    }
    Ok(())
}

/// Validates a list of bases, one per axis.
///
/// # Returns
///
/// * `Ok(())` - Every base is valid
/// * `Err(LdsError::EmptyBases)` - The list is empty
/// * `Err(LdsError::InvalidBase)` - The first base below 2
pub fn validate_bases(bases: &[u64]) -> Result<(), LdsError> {
    if bases.is_empty() {
        return Err(LdsError::EmptyBases);
    }
    bases.iter().try_for_each(|&base| validate_base(base))
}

/// Validates the scale of an integer generator and returns `base^scale`.
///
/// # Returns
///
/// * `Ok(factor)` - `base^scale`, the integer range of the generator
/// * `Err(LdsError::InvalidScale)` - `scale == 0` or `base^scale` overflows `u64`
pub fn validate_scale(base: u64, scale: u32) -> Result<u64, LdsError> {
    if scale == 0 {
        return Err(LdsError::InvalidScale { base, scale });
    }
    base.checked_pow(scale)
        .ok_or(LdsError::InvalidScale { base, scale })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Runs `f` under a thread-local subscriber and returns everything it logged.
    pub(crate) fn capture_logs<F: FnOnce()>(f: F) -> String {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_validate_base_warns_on_composite() {
        let logs = capture_logs(|| {
            validate_base(9).unwrap();
            validate_base(7).unwrap();
        });
        assert_eq!(logs.matches("non-prime base").count(), 1, "{}", logs);
        assert!(logs.contains("WARN") && logs.contains("base=9"));
    }

    #[test]
    fn test_prime_table_matches_is_prime() {
        let expected: Vec<u64> = (0..1000).filter(|&n| is_prime(n)).collect();
        assert_eq!(expected, PRIME_TABLE.to_vec());
    }

    #[test]
    fn test_is_prime_small_values() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(!is_prime(25));
        assert!(is_prime(7919));
    }

    #[test]
    fn test_validate_base_rejects_below_two() {
        assert_eq!(validate_base(0), Err(LdsError::InvalidBase { base: 0 }));
        assert_eq!(validate_base(1), Err(LdsError::InvalidBase { base: 1 }));
    }

    #[test]
    fn test_validate_base_accepts_composite() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        assert!(validate_base(4).is_ok());
        assert!(validate_base(10).is_ok());
    }

    #[test]
    fn test_validate_bases() {
        assert_eq!(validate_bases(&[]), Err(LdsError::EmptyBases));
        assert!(validate_bases(&[2, 3, 5]).is_ok());
        assert_eq!(
            validate_bases(&[2, 1, 0]),
            Err(LdsError::InvalidBase { base: 1 })
        );
    }

    #[test]
    fn test_validate_scale() {
        assert_eq!(validate_scale(2, 10), Ok(1024));
        assert_eq!(validate_scale(3, 7), Ok(2187));
        assert_eq!(validate_scale(2, 63), Ok(1 << 63));
        assert_eq!(
            validate_scale(2, 64),
            Err(LdsError::InvalidScale { base: 2, scale: 64 })
        );
        assert_eq!(
            validate_scale(2, 0),
            Err(LdsError::InvalidScale { base: 2, scale: 0 })
        );
    }
}
