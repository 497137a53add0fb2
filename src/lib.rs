//! Companion utilities for a kiki node: quote sharing and profile tile
//! variant generation.

pub mod color;
pub mod consts;
pub mod letter;
pub mod quote;
pub mod variants;
