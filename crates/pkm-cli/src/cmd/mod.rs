pub mod env;
pub mod gather;
pub mod report;
