//! options-form: option pricing form controller
//!
//! This library provides:
//! - A toolkit-independent form view-model (`PricingView`)
//! - The pricing request/response schema for `/api/options-pricing`
//! - An HTTP pricing backend client
//! - The form controller: mode toggling, placeholder and remote submits
//! - Configuration, logging and submission metrics

pub mod cli;
pub mod config;
pub mod controller;
pub mod form;
pub mod pricing;
pub mod telemetry;
