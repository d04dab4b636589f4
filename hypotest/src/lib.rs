pub mod config;
pub mod data;
pub mod report;
pub mod runner;

pub use config::{Analysis, Config};
pub use data::load_sample;
pub use report::{render_report, to_json, write_report};
pub use runner::{run, Outcome};
