//! Pure domain logic for the LoadBuck trucking-profit calculator.
//!
//! Nothing in this crate performs I/O. The database and HTTP crates build on
//! these types and functions.

pub mod calculator;
pub mod demo;
pub mod error;
pub mod fuel_prices;
pub mod search;
pub mod settings;
pub mod tolls;
pub mod trips;
pub mod types;
