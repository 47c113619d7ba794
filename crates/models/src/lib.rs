//! Persistence layer: the `vehicles` entity, its row-level operations and pool setup.

pub mod errors;
pub mod db;
pub mod vehicle;

#[cfg(test)]
mod tests;
