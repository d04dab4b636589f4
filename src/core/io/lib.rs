//! Plain-text sample files: reading `x y` pair files and single-column
//! value files, writing text reports.

mod read;
pub mod write;

pub use read::*;
pub use write::*;
