use thiserror::Error;

use crate::nbt::TagKind;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, NbtError>;

/// Errors produced while decoding, encoding, and bridging NBT data.
#[derive(Debug, Error)]
pub enum NbtError {
	/// Filesystem, stream, or sink IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Tag byte outside the known tag vocabulary.
	#[error("unknown tag 0x{tag:02x} at offset {at}")]
	UnknownTag {
		/// Offending tag byte.
		tag: u8,
		/// Offset of the tag byte.
		at: usize,
	},
	/// Name or string payload was not valid UTF-8.
	#[error("invalid utf-8 in string at offset {at}")]
	InvalidUtf8 {
		/// Offset of the first string byte.
		at: usize,
	},
	/// List/Compound nesting exceeded the configured decode limit.
	#[error("decode depth exceeded (max={max_depth})")]
	DecodeDepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Declared array or list length exceeded the configured limit.
	#[error("decode array too large: count={count}, max={max}")]
	DecodeArrayTooLarge {
		/// Declared element count.
		count: usize,
		/// Maximum permitted element count.
		max: usize,
	},
	/// Strict mode found bytes after the root tag.
	#[error("trailing bytes after root tag: leftover={leftover}")]
	TrailingBytes {
		/// Unconsumed bytes.
		leftover: usize,
	},
	/// List element kind differs from the declared element kind.
	#[error("list element kind mismatch: expected {expected}, got {got}")]
	ListElementKindMismatch {
		/// Declared element kind.
		expected: TagKind,
		/// Kind of the offending element.
		got: TagKind,
	},
	/// List element carried a name.
	#[error("list element must be nameless (name={name:?})")]
	NamedListElement {
		/// Name found on the element.
		name: String,
	},
	/// Compound member had no name.
	#[error("compound member must be named")]
	UnnamedCompoundMember,
	/// Compound member was an End tag.
	#[error("compound member cannot be TAG_End")]
	EndInCompound,
	/// List declared as End-typed but holding elements.
	#[error("list of TAG_End declares {count} elements")]
	NonEmptyEndList {
		/// Number of declared elements.
		count: usize,
	},
	/// Length does not fit its wire prefix.
	#[error("{what} length {len} exceeds wire maximum {max}")]
	LengthOverflow {
		/// Field being written.
		what: &'static str,
		/// Actual length.
		len: usize,
		/// Largest encodable length.
		max: usize,
	},
	/// List/Compound nesting exceeded the configured encode limit.
	#[error("encode depth exceeded (max={max_depth})")]
	EncodeDepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Root tag was a bare `TAG_End`, which has no name framing to re-encode.
	#[error("root tag is TAG_End; a document must start with a named tag")]
	BareEndRoot,
	/// Re-encoding decoded bytes did not reproduce them.
	#[error("round trip mismatch at offset {offset} (source={source_len} bytes, encoded={encoded_len} bytes)")]
	RoundTripMismatch {
		/// First differing byte offset.
		offset: usize,
		/// Source length.
		source_len: usize,
		/// Re-encoded length.
		encoded_len: usize,
	},
	/// Text nesting exceeded the configured List/Compound depth.
	#[error("text depth exceeded (max={max_depth})")]
	TextDepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Text document was not valid JSON.
	#[error("text syntax: {0}")]
	TextSyntax(#[from] serde_json::Error),
	/// Required text field was absent.
	#[error("text field {field} is missing")]
	TextMissingField {
		/// Field name.
		field: &'static str,
	},
	/// Text field had the wrong JSON shape.
	#[error("text field {field} has wrong shape (expected {expected})")]
	TextFieldShape {
		/// Field name.
		field: &'static str,
		/// Expected JSON shape.
		expected: &'static str,
	},
	/// Text number could not be parsed into its target type.
	#[error("text field {field} is not a valid number for its type: {text}")]
	TextNumber {
		/// Field name.
		field: &'static str,
		/// Offending text.
		text: String,
	},
	/// `Type` value is not a known tag kind.
	#[error("text Type {value} is not a known tag kind")]
	TextUnknownType {
		/// Offending value.
		value: u8,
	},
	/// `Size` disagrees with the decoded payload.
	#[error("text Size {declared} does not match payload count {actual}")]
	TextSizeMismatch {
		/// Declared size.
		declared: u32,
		/// Actual payload count.
		actual: usize,
	},
}
