//! Unit tests for agent introspection, capture and registration.

mod introspection_tests;
mod registry_tests;
