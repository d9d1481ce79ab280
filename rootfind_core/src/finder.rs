//! Bounded integer square root search.
//!
//! The finder validates the input against the search bound first, then
//! walks candidate roots upward from zero until a square matches or the
//! squares pass the bound.

use crate::{RootError, SearchBound, SquareRoot};

/// Find the integer square root of `number` within the default bound
///
/// Equivalent to [`find_integer_square_root_within`] with
/// [`SearchBound::DEFAULT`].
pub fn find_integer_square_root(number: i64) -> Result<SquareRoot, RootError> {
    find_integer_square_root_within(number, SearchBound::DEFAULT)
}

/// Find the integer square root of `number` within `bound`
///
/// ## Rules
///
/// 1. **Validation**: `number` outside `[1, bound]` → `OutOfBounds`,
///    before any search work.
/// 2. **Search**: try `count = 0, 1, 2, ...` while `count²` stays within
///    `bound`. An exact match returns immediately.
/// 3. **Exhausted**: no match → `NoRootFound`.
pub fn find_integer_square_root_within(
    number: i64,
    bound: SearchBound,
) -> Result<SquareRoot, RootError> {
    if !bound.contains(number) {
        tracing::debug!("Rejecting {} (outside 1..={})", number, bound);
        return Err(RootError::OutOfBounds {
            number,
            bound: bound.get(),
        });
    }

    let mut count: i64 = 0;

    // Overflow past i64 counts as passing the bound
    while let Some(square) = count.checked_mul(count).filter(|sq| *sq <= bound.get()) {
        if square == number {
            tracing::debug!("Found root {} for {} after {} steps", count, number, count + 1);
            return Ok(SquareRoot {
                number,
                root: count,
            });
        }

        count += 1;
    }

    tracing::debug!("No root for {} (searched {} candidates)", number, count);
    Err(RootError::NoRootFound { number })
}

/// List every perfect square in `[1, bound]` in ascending order
pub fn perfect_squares_within(bound: SearchBound) -> Vec<SquareRoot> {
    let mut found = Vec::new();
    let mut root: i64 = 1;

    while let Some(square) = root.checked_mul(root).filter(|sq| *sq <= bound.get()) {
        found.push(SquareRoot {
            number: square,
            root,
        });
        root += 1;
    }

    tracing::debug!("Listed {} perfect squares within 1..={}", found.len(), bound);
    found
}
