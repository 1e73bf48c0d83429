//! Per-resource schema catalogs.
//!
//! One module per HR resource. Each declares the create, update,
//! get-by-id, and delete schemas and registers them under its
//! resource key. Field names and enum literals here are the wire
//! contract and must not be renamed.

pub mod attendance;
pub mod department;
pub mod employee;
pub mod leave;
