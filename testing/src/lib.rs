pub mod chrono;
pub mod core;
