pub mod client;
pub mod telemetry;

pub use client::*;
