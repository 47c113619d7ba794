//! Cross-cutting helpers shared by the workspace binaries: logging setup and
//! small response types that do not belong to any one layer.

pub mod types;
pub mod utils;
