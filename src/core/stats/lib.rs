//! Numerical core: special functions, distribution CDFs, critical values
//! and descriptive statistics over plain `f64` slices.
//!
//! Nothing in this crate allocates global state or returns errors. Inputs
//! outside a function's domain yield `NaN`; callers that need typed errors
//! validate before calling.

pub mod critical;
pub mod descriptive;
pub mod distributions;
pub mod special;

pub use critical::*;
pub use descriptive::*;
pub use distributions::*;
pub use special::*;
