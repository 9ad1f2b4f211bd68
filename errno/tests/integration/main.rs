#[path = "../common/mod.rs"]
mod common;

mod logging_tests;
