//! Integration tests

mod support;

mod config_test;
mod controller_test;
