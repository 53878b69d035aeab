pub mod achievements;
pub mod config;
pub mod stats;
pub mod subject;
pub mod timer;
