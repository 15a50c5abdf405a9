//! Token service test suite
