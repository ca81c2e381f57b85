//! # renda-core
//!
//! Core types for the Renda administrative console.
//!
//! This crate provides the foundational types shared across all Renda crates:
//! - Domain entities (issuance records, audit history, aggregate stats)
//! - Closed enumerations with wire-format serialization
//! - Query types (filter set, sort specification, list query)
//! - pt-BR display formatting helpers (currency, dates, abbreviated volumes)

pub mod entities;
pub mod enums;
pub mod format;
pub mod query;
