//! Unit tests for agent records, storage adapters and the deploy service.

mod support;
