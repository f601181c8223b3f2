//! Fixture problems.
//!
//! Each module ships a reference solver at the intended complexity class
//! and a degraded solver exactly one class worse, built from the policies
//! in `degrade`. All solvers parse their own instance, allocate their own
//! working state per invocation, and write nothing but the answer to the
//! returned string.

pub mod array_sum;
pub mod coin_change;
pub mod matrix_multiply;
pub mod n_queens;
pub mod planet_queries;
pub mod shortest_routes;
pub mod subset_sum;
