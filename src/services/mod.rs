pub mod generation;
pub mod report;
pub mod server;
