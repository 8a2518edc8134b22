//! Staff Cost Engine
//!
//! This crate computes the annual cost of employing a staff list as of a
//! given date (base pay, employer National Insurance and employer pension
//! contributions) and compares what-if scenarios built from the same staff
//! on different dates.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod report;
pub mod scenario;
pub mod telemetry;
