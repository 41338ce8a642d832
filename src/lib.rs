pub mod analysis;
pub mod checks;
pub mod config;
pub mod error;
pub mod lang;
pub mod markers;
pub mod normalize;
pub mod reporting;
pub mod rule;
pub mod scan;
pub mod types;
