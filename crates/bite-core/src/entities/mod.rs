//! Entity structs for BiteBot domain objects.
//!
//! Each entity maps to a table in the libSQL database. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema`.

mod audit;
mod restaurant;

pub use audit::AuditEntry;
pub use restaurant::Restaurant;
