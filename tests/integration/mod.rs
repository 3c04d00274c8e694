/// Integration test suite for the habit analytics crate
