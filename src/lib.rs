//! Refdata fixtures - reference-data records used as test fixtures
//!
//! This library provides the country, organization-type and state/province
//! records that test suites decode from JSON payloads and compare structurally,
//! plus a small catalog for loading fixture sets and resolving their references.

pub mod cli;
pub mod config;
pub mod models;
pub mod services;
pub mod utils;

pub use models::{country::Country, org_type::OrgType, state_prov::StateProv, FixtureRecord};
