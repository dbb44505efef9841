// src/specs/mod.rs
//! # Scraping "specs"
//!
//! Page-specific knowledge of *where the ground truth lives in the HTML* and how to
//! turn it into rows.
//!
//! ## What lives here
//! - **Pure HTML parsing** of the listing page (`jobs`), no networking.
//! - **Skill canonicalization** of free text (`skills`).
//!
//! ## What does **not** live here
//! - Fetching/retry (`core::net`), persistence (`store`), aggregation (`analyze`).
//!
//! ## Conventions
//! - Missing elements never abort a parse; they become empty strings.
//! - Specs are tested **offline** against inline HTML fixtures.
pub mod jobs;
pub mod skills;
