//! Staff list ingestion.
//!
//! Turns tabular staff data into [`Employee`](crate::models::Employee)
//! values, rejecting bad pension flags, inverted date ranges and malformed
//! rows before any calculation runs. JSON staff lists need no reader of
//! their own: `Employee` deserializes directly with serde.

mod staff_csv;

pub use staff_csv::{parse_pension_flag, read_staff_csv, read_staff_file};
