//! Value types shared by the root finder and its callers.
//!
//! - `SearchBound`: the inclusive ceiling for inputs and candidate squares
//! - `SquareRoot`: a successful finding

use crate::{Error, Result};
use std::fmt;

// ============================================================================
// Search Bound
// ============================================================================

/// Inclusive upper limit of the search domain.
///
/// Valid inputs lie in `[1, bound]`, and candidate roots are tried while
/// their square does not exceed `bound`. Always at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchBound(i64);

impl SearchBound {
    /// Bound used when nothing else is configured
    pub const DEFAULT: SearchBound = SearchBound(10_000);

    /// Create a bound, rejecting anything below 1
    pub fn new(value: i64) -> Result<Self> {
        if value < 1 {
            return Err(Error::Config(format!(
                "search bound must be at least 1, got {}",
                value
            )));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> i64 {
        self.0
    }

    /// Whether `number` falls inside `[1, bound]`
    pub fn contains(self, number: i64) -> bool {
        (1..=self.0).contains(&number)
    }
}

impl Default for SearchBound {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for SearchBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Findings
// ============================================================================

/// An input together with its exact integer square root
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SquareRoot {
    pub number: i64,
    pub root: i64,
}

impl fmt::Display for SquareRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "The square root of {} is {}", self.number, self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bound() {
        assert_eq!(SearchBound::default().get(), 10_000);
        assert_eq!(SearchBound::DEFAULT, SearchBound::new(10_000).unwrap());
    }

    #[test]
    fn test_bound_rejects_non_positive() {
        assert!(matches!(SearchBound::new(0), Err(Error::Config(_))));
        assert!(matches!(SearchBound::new(-5), Err(Error::Config(_))));
        assert_eq!(SearchBound::new(1).unwrap().get(), 1);
    }

    #[test]
    fn test_bound_contains_is_inclusive() {
        let bound = SearchBound::new(50).unwrap();
        assert!(!bound.contains(0));
        assert!(bound.contains(1));
        assert!(bound.contains(50));
        assert!(!bound.contains(51));
    }

    #[test]
    fn test_square_root_message() {
        let found = SquareRoot {
            number: 9604,
            root: 98,
        };
        assert_eq!(found.to_string(), "The square root of 9604 is 98");
    }
}
