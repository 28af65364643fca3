//! Domain logic for the share lifecycle: errors, token hygiene and the
//! anonymous public projection of a shared deck.

pub mod errors;
pub mod security;
pub mod view;
