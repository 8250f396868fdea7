//! Configuration loader and schema types.
//!
//! Settings only seed a session (initial durations, asset locations, logging);
//! nothing is ever written back.

mod load;
mod schema;

pub use schema::*;

#[cfg(test)]
mod tests;
