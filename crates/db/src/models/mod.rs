//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` row struct matching the database row
//! - A `Serialize` wire struct with the timestamp as a structured instant
//! - `Deserialize` create/update DTOs for request payloads

pub mod progress;
