/// Unit test suite for the habit analytics crate

mod analytics_tests;
mod domain_tests;
