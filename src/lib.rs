//! Attendance ledger for shift work
//!
//! This crate records worked shifts with their planned span, transport mode and
//! per-diem allowance, keeps them in a CSV file, and summarizes them overall or
//! per calendar month.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
