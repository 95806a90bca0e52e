//! Staff Directory
//!
//! This crate tracks personnel records for managers, regular employees and
//! interns, each with their own pay rule, and keeps them in a flat
//! comma-separated data file.

#![warn(missing_docs)]

pub mod config;
pub mod directory;
pub mod error;
pub mod models;
pub mod storage;
