//! Domain types and pure helpers for the FES listing service.
//!
//! Nothing in here touches the database; the `db` crate builds queries from
//! these types and the `api` crate deserializes them from request parameters.

pub mod category;
pub mod error;
pub mod listing;
pub mod region;
pub mod transport;
pub mod types;
