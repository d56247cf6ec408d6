#![cfg(unix)]

#[path = "../common/mod.rs"]
mod common;

mod error_test;
mod json_test;
