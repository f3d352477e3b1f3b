//! The sweep engine: range-wide reachability probing with bounded fan-out.

pub mod error;
pub mod observer;
pub mod prober;
pub mod report;
pub mod sweep;
