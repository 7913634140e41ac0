//! Algebraic intermediate representation of a running-sum computation.
//!
//! [`trace`] records the two-column execution trace; [`constraints`] derives
//! the boundary and transition polynomials an honest trace satisfies.

pub mod constraints;
pub mod trace;
