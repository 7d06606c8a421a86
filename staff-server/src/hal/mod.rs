//! Hypermedia layer
//!
//! - [`ResponseAssembler`] - entity → view, with absolute links
//! - [`Hal`] / [`Created`] - `application/hal+json` responses

pub mod assembler;
pub mod response;

pub use assembler::ResponseAssembler;
pub use response::{Created, Hal};
