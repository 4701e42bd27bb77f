//! Network layer: wire types, the typed login error, and the REST call.

pub mod api;
pub mod error;
pub mod types;
