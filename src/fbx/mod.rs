//! Kaydara FBX binary container codec.
//!
//! The wire format is a length-framed tree of named node records, each
//! carrying typed scalar or array properties, closed by all-zero sentinel
//! records and a fixed obfuscated trailer.

mod bytes;
mod compression;
mod document;
mod error;
mod footer;
mod node;
mod property;
mod template;

/// Cursor and writer primitives for the little-endian wire encoding.
pub use bytes::{Cursor, Writer};
/// zlib helpers with exact-output-size enforcement.
pub use compression::{deflate, inflate_exact};
/// Document container, parse/serialize entry points, and write options.
pub use document::{Document, FBX_MAGIC, MAX_VERSION, WriteOptions};
/// Error and result aliases.
pub use error::{FbxError, Result};
/// Footer trailer codec.
pub use footer::{FooterTimestamp, footer_bytes};
/// Node records and framing constants.
pub use node::{MAX_NODE_DEPTH, NODE_HEADER_LEN, Node};
/// Typed property values.
pub use property::Property;
/// Canned scene-metadata builder.
pub use template::basic_structure;
