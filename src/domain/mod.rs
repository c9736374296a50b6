//! Domain types and the scoring rules, free of any transport or storage concerns.

pub mod points;
pub mod ports;
pub mod receipt;
