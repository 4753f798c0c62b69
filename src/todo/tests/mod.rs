//! Unit tests for the todo module.
//!
//! Organized by concern:
//! - `domain_tests`: validation of titles, priorities, and record content
//! - `service_tests`: CRUD orchestration over the in-memory repository
//! - `scoping_tests`: owner scoping and the unscoped-access policy

#![expect(clippy::expect_used, reason = "tests fail loudly on setup errors")]

mod fixtures;

mod service_tests;
