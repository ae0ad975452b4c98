//! Property-based tests for the strata configuration library
