//! SQL implementations of the store interfaces, one module per table.

pub mod audit;
pub mod restaurant;
