//! Presentation of root finder results.
//!
//! Maps each result onto exactly one human-readable line, or onto a
//! serializable `Outcome` for machine-readable output.

use crate::{Error, Result, RootError, SquareRoot};
use serde::Serialize;

/// Line printed for inputs outside the search bound
pub const OUT_OF_BOUNDS_LINE: &str = "Out of Bounds Error";

/// Line printed for in-range inputs without an integer root
pub const NO_ROOT_LINE: &str = "No Square Root was found";

/// Line printed for any failure that is not a root finder failure
pub const GENERIC_ERROR_LINE: &str = "There was an error.";

/// Describe a result as a single line of text
pub fn describe(result: &Result<SquareRoot>) -> String {
    match result {
        Ok(found) => found.to_string(),
        Err(Error::Root(RootError::OutOfBounds { .. })) => OUT_OF_BOUNDS_LINE.to_string(),
        Err(Error::Root(RootError::NoRootFound { .. })) => NO_ROOT_LINE.to_string(),
        Err(err) => {
            tracing::warn!("Unexpected failure while checking root: {}", err);
            GENERIC_ERROR_LINE.to_string()
        }
    }
}

/// Machine-readable form of a result
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Found { number: i64, root: i64 },
    OutOfBounds { number: i64, bound: i64 },
    NoRootFound { number: i64 },
    Error { message: String },
}

impl Outcome {
    pub fn from_result(result: &Result<SquareRoot>) -> Self {
        match result {
            Ok(SquareRoot { number, root }) => Outcome::Found {
                number: *number,
                root: *root,
            },
            Err(Error::Root(RootError::OutOfBounds { number, bound })) => Outcome::OutOfBounds {
                number: *number,
                bound: *bound,
            },
            Err(Error::Root(RootError::NoRootFound { number })) => {
                Outcome::NoRootFound { number: *number }
            }
            Err(err) => Outcome::Error {
                message: err.to_string(),
            },
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::find_integer_square_root;

    fn check(number: i64) -> Result<SquareRoot> {
        Ok(find_integer_square_root(number)?)
    }

    #[test]
    fn test_describe_each_path() {
        assert_eq!(describe(&check(81)), "The square root of 81 is 9");
        assert_eq!(describe(&check(57_600)), OUT_OF_BOUNDS_LINE);
        assert_eq!(describe(&check(-4)), OUT_OF_BOUNDS_LINE);
        assert_eq!(describe(&check(82)), NO_ROOT_LINE);
        assert_eq!(
            describe(&Err(Error::Config("bound must be positive".into()))),
            GENERIC_ERROR_LINE
        );
    }

    #[test]
    fn test_outcome_json_shape() {
        let found = serde_json::to_value(Outcome::from_result(&check(9))).unwrap();
        assert_eq!(
            found,
            serde_json::json!({"outcome": "found", "number": 9, "root": 3})
        );

        let oob = serde_json::to_value(Outcome::from_result(&check(0))).unwrap();
        assert_eq!(
            oob,
            serde_json::json!({"outcome": "out_of_bounds", "number": 0, "bound": 10000})
        );

        let none = serde_json::to_value(Outcome::from_result(&check(2))).unwrap();
        assert_eq!(
            none,
            serde_json::json!({"outcome": "no_root_found", "number": 2})
        );
    }

    #[test]
    fn test_outcome_for_other_errors() {
        let outcome = Outcome::from_result(&Err(Error::Config("bad bound".into())));
        assert_eq!(
            outcome,
            Outcome::Error {
                message: "Configuration error: bad bound".into()
            }
        );
        assert!(!outcome.is_found());
        assert!(Outcome::from_result(&check(100)).is_found());
    }
}
