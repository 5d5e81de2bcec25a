//! # catalog-search
//!
//! A small game catalog search service. One endpoint turns a user-typed
//! string into a ranked, bounded list of catalog entries.
//!
//! ## Query resolution
//!
//! ```text
//!                 ┌──────────────┐
//!                 │  Raw query   │
//!                 └──────┬───────┘
//!                        ▼
//!                 ┌──────────────┐   empty   ┌──────────────────┐
//!                 │  Normalize   ├──────────▶│ Newest 30 entries│
//!                 │ trim + lower │           └──────────────────┘
//!                 └──────┬───────┘
//!                        ▼
//!                 ┌──────────────┐    hit    ┌──────────────────┐
//!                 │ Alias table  ├──────────▶│ Exact name (≤10) │
//!                 └──────┬───────┘           │ else substring   │
//!                        │ miss              └──────────────────┘
//!                        ▼
//!          ┌───────────────────────────┐
//!          │ contains OR trigram > t   │
//!          │ t: ≤3 → 0.35, ≤6 → 0.25,  │
//!          │    else 0.15              │
//!          └─────────────┬─────────────┘
//!                        ▼
//!          ┌───────────────────────────┐
//!          │ Sort: contains, score,    │
//!          │ name; keep 30; drop score │
//!          └───────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`config`] - Environment-based configuration
//! - [`models`] - `CatalogRecord`, `CatalogEntry`, `RankedResult`, request/response types
//! - [`catalog`] - `CatalogSource` trait and the file-backed `CatalogStore`
//! - [`search::normalize`] - Query normalization
//! - [`search::alias`] - Static shorthand → canonical name table
//! - [`search::similarity`] - pg_trgm-style trigram similarity
//! - [`search::ranker`] - Threshold policy and the annotate / sort / strip pipeline
//! - [`search::resolver`] - `QueryResolver`, the entry point for a search
//! - [`api`] - Axum handlers for `/list` and `/health`
//! - [`state`] - Shared application state

pub mod api;
pub mod catalog;
pub mod config;
pub mod models;
pub mod search;
pub mod state;
