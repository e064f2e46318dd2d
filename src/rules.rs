//! The rule catalog.
//!
//! Every rule is a constructor returning a fresh [`Rule`](crate::Rule): plain
//! constants (`has_number()`), parameterized rules (`min_length(5)`) and
//! puzzle factories that resolve a random variant (`random_captcha(..)`).
//!
//! All checks are total: empty input, emoji and arbitrarily long strings are
//! simply "satisfied" or "not satisfied". Two defaults recur:
//!
//! - fewer than two digits ⇒ ordering and arithmetic rules pass;
//! - empty candidate ⇒ rules about the first/last character fail.

mod basic;
mod helpers;
mod puzzle;

#[cfg(test)]
mod tests;

pub use basic::*;
pub use puzzle::{count_the_triangles, random_captcha, random_shape_puzzle};

pub(crate) use helpers::count_occurrences;
