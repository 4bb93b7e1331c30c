//! Payroll engine for monthly salaries.
//!
//! This crate computes net salary from base salary, bonus, overtime and
//! no-pay leave, applying progressive income tax and EPF/ETF contributions.
//! Results are explained step by step and can be stored and managed through
//! a small HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
