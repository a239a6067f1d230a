//! Shift-Scheduling Grid Engine for the staff portal roster view
//!
//! This crate computes the weekly roster grid: the Monday-aligned week
//! window, the fixed catalogue of 3-hour display slots, and the placement
//! of stored shifts into grid cells under either the facility timezone or
//! the remote-staff timezone, with DST and midnight-crossing shifts
//! handled correctly.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod grid;
pub mod models;
