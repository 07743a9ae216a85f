//! Support-desk core for the job portal: ticket lifecycle, merged message
//! timelines, suggested replies, and the HTTP surface that serves them.

pub mod config;
pub mod error;
pub mod support;
pub mod telemetry;
