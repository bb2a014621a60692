//! portfolio-i18n
//!
//! Bilingual (English/Spanish) translation store and resolver for a portfolio
//! site, with page rebinding and a per-language project feed.

pub mod config;
pub mod i18n;
pub mod input;
pub mod page;
pub mod projects;
pub mod site;
pub mod storage;
pub mod store;
pub mod types;

/// Shared test fixtures.
#[cfg(test)]
mod test_utils;

pub use site::{
    Site,
    SiteError,
};
