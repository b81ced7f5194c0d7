//! Factorials for small card counts.
//!
//! Results up to `34!` are exact in `u128` and are served from a table built at compile time,
//! so there is no shared cache to guard. Larger arguments fall back to an `f64` product.

pub trait Factorial {
    fn get(&self, n: u8) -> u128;
}

/// The largest `n` for which `n!` fits in a `u128`.
pub const MAX_EXACT: u8 = 34;

const MAX_ENTRIES: usize = MAX_EXACT as usize + 1;

pub struct Lookup {
    entries: [u128; MAX_ENTRIES],
}
impl Lookup {
    pub const fn new() -> Self {
        let mut entries = [1u128; MAX_ENTRIES];
        let mut i = 2;
        while i < MAX_ENTRIES {
            entries[i] = i as u128 * entries[i - 1];
            i += 1;
        }
        Self { entries }
    }
}

impl Factorial for Lookup {
    #[inline]
    fn get(&self, n: u8) -> u128 {
        assert!(n <= MAX_EXACT, "{n}! overflows");
        self.entries[n as usize]
    }
}

impl Default for Lookup {
    fn default() -> Self {
        Self::new()
    }
}

/// Precomputed table shared by all callers. Immutable, hence safe to read from any thread.
pub static LOOKUP: Lookup = Lookup::new();

/// `n!` as a float. Negative arguments yield `1`, which keeps callers that feed arbitrary
/// integer counts from producing `NaN`s.
pub fn factorial(n: i64) -> f64 {
    if n < 0 {
        return 1.0;
    }
    if n <= MAX_EXACT as i64 {
        return LOOKUP.get(n as u8) as f64;
    }
    let mut product = LOOKUP.get(MAX_EXACT) as f64;
    for i in MAX_EXACT as i64 + 1..=n {
        product *= i as f64;
    }
    product
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;

    use super::*;

    #[test]
    pub fn lookup() {
        let lookup = Lookup::default();
        assert_eq!(1, lookup.get(0));
        assert_eq!(1, lookup.get(1));
        assert_eq!(2, lookup.get(2));
        assert_eq!(6, lookup.get(3));
        assert_eq!(24, lookup.get(4));
        assert_eq!(3_628_800, lookup.get(10));
        assert_eq!(2_432_902_008_176_640_000, lookup.get(20));
    }

    #[test]
    pub fn lookup_entries_are_successive_products() {
        for n in 1..=MAX_EXACT {
            assert_eq!(n as u128 * LOOKUP.get(n - 1), LOOKUP.get(n), "n: {n}");
        }
    }

    #[test]
    #[should_panic = "35! overflows"]
    pub fn lookup_overflow_panics() {
        LOOKUP.get(35);
    }

    #[test]
    pub fn negative_yields_one() {
        assert_eq!(1.0, factorial(-1));
        assert_eq!(1.0, factorial(-100));
    }

    #[test]
    pub fn small_values() {
        assert_eq!(1.0, factorial(0));
        assert_eq!(1.0, factorial(1));
        assert_eq!(120.0, factorial(5));
        assert_eq!(3_628_800.0, factorial(10));
    }

    #[test]
    pub fn beyond_exact_range() {
        let expected = factorial(34) * 35.0 * 36.0;
        assert_float_relative_eq!(expected, factorial(36));
        assert!(factorial(171).is_infinite());
    }
}
