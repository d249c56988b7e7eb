//! Helpers that read CI-provided tuning from the environment.

pub mod property_test_profile;
