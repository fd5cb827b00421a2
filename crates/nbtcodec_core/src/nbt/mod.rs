//! Named Binary Tag codec.
//!
//! NBT is a big-endian, self-describing tree format. Every node outside a
//! list is framed as a tag byte, a `u16`-prefixed name, and a payload; list
//! elements omit both tag byte and name because the list declares their kind
//! once. Compounds have no length prefix and end at the first `TAG_End`.
//!
//! Decode and encode recurse once per List/Compound level. Both cap nesting
//! at [`DEFAULT_MAX_DEPTH`] unless configured otherwise, which keeps stack
//! usage bounded on hostile input.

mod bytes;
mod copy;
mod decode;
mod encode;
mod error;
mod tag;
mod text;
mod value;

/// Bounded big-endian byte cursor.
pub use bytes::Cursor;
/// Binary decoding entry points and options.
pub use decode::{DEFAULT_MAX_DEPTH, DecodeOptions, decode, decode_element, decode_tag, decode_with_options, read_tag};
/// Binary encoding entry points and options.
pub use encode::{EncodeOptions, encode, encode_tag, encode_with_options, verify_round_trip};
/// Error and result aliases.
pub use error::{NbtError, Result};
/// Wire tag vocabulary.
pub use tag::TagKind;
/// JSON text bridge.
pub use text::{TextOptions, from_json_value, from_json_value_with_options, from_text, from_text_with_options, to_json_value, to_text, to_text_with_options};
/// Tree node types.
pub use value::{List, Payload, Tag};
