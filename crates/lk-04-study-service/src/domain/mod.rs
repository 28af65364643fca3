//! Domain types of the service layer: error taxonomy, request payloads and
//! response shapes.

pub mod errors;
pub mod requests;
pub mod responses;
