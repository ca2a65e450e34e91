pub mod artifact;
pub mod config;
pub mod error;
pub mod io;
pub mod paths;
pub mod report;
pub mod runner;
pub mod types;

pub use error::{PkmError, Result};
