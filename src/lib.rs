//! Meeting-room booking engine with a file-backed snapshot store.
//!
//! The crate owns the scheduling rules (conflict detection, bookable
//! hours, quarter-hour alignment), the day-grid geometry used by
//! drag-and-drop clients, and persistence of the booking ledger to a
//! single JSON file. HTTP routing is left to the host application;
//! [`wire`] fixes the JSON contract it should expose.

pub mod config;
pub mod engine;
pub mod grid;
pub mod model;
pub mod observability;
pub mod store;
pub mod timeutil;
pub mod wire;
