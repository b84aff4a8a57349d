//! # bite-core
//!
//! Core types shared across all BiteBot crates:
//! - Entity structs for restaurants and audit entries
//! - The closed `City` and `AuditAction` enumerations
//! - Pure validation helpers for raw command input
//! - Typed audit detail payloads and the field-level restaurant diff
//! - Cross-cutting error types

pub mod audit_detail;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod validation;
