//! Combination engine.
//!
//! Enumerates every choice of one schedule option per class and keeps
//! those that form a valid weekly timetable.
//!
//! # Components
//!
//! - **`window`**: accepted daily window check for a single option
//! - **`validator`**: validity of a complete combination
//! - **`enumerator`**: odometer over the Cartesian product plus the
//!   generate-then-filter driver
//!
//! # References
//!
//! - Knuth (2011), "The Art of Computer Programming", Vol. 4A, §7.2.1.1
//!   (generating all n-tuples)

mod enumerator;
mod validator;
mod window;

pub use enumerator::{enumerate_valid_combinations, CartesianProduct, Enumeration, Planner};
pub use validator::{check_combination, first_rejection, is_valid_combination, Rejection};
pub use window::{fits_window, AcceptedWindow};
