//! Random example numbers for the phone validator's error message.

use rand::Rng;

/// Base of every example cellphone number (a 313 prefix, 10 digits).
pub const EXAMPLE_PHONE_BASE: u64 = 3_130_000_000;

/// Largest offset added to [`EXAMPLE_PHONE_BASE`]. Keeps the result at
/// exactly 10 digits.
pub const EXAMPLE_PHONE_SPREAD: u64 = 10_000_000;

/// Produces the example phone number shown when a phone has the wrong length.
pub trait ExampleSource {
    fn example_phone(&self) -> u64;
}

/// Draws a fresh number from the thread-local RNG on each call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl ExampleSource for ThreadRngSource {
    fn example_phone(&self) -> u64 {
        EXAMPLE_PHONE_BASE + rand::rng().random_range(0..=EXAMPLE_PHONE_SPREAD)
    }
}

/// Always returns the same example number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedExample(pub u64);

impl ExampleSource for FixedExample {
    fn example_phone(&self) -> u64 {
        self.0
    }
}

impl<S: ExampleSource + ?Sized> ExampleSource for &S {
    fn example_phone(&self) -> u64 {
        (**self).example_phone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_examples_stay_ten_digits() {
        for _ in 0..200 {
            let n = ThreadRngSource.example_phone();
            assert_eq!(n.to_string().len(), 10, "example {n} should have 10 digits");
            assert!(n.to_string().starts_with("31"));
        }
    }
}
