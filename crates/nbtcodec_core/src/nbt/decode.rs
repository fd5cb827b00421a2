use std::io::Read;

use crate::nbt::bytes::Cursor;
use crate::nbt::{List, NbtError, Payload, Result, Tag, TagKind};

/// Default List/Compound nesting ceiling for decode and encode.
pub const DEFAULT_MAX_DEPTH: u32 = 512;

/// Runtime limits and behavior switches for binary decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum List/Compound nesting depth.
	pub max_depth: u32,
	/// Maximum declared element count for arrays and lists.
	pub max_array_elems: usize,
	/// Error when bytes remain after the root tag.
	pub strict_trailing: bool,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: DEFAULT_MAX_DEPTH,
			max_array_elems: 1 << 24,
			strict_trailing: false,
		}
	}
}

/// Decode a named root tag with default options.
pub fn decode(bytes: &[u8]) -> Result<Tag> {
	decode_with_options(bytes, &DecodeOptions::default())
}

/// Decode a named root tag.
pub fn decode_with_options(bytes: &[u8], opt: &DecodeOptions) -> Result<Tag> {
	let mut cursor = Cursor::new(bytes);
	let tag = decode_tag(&mut cursor, None, opt)?;
	check_trailing(&cursor, opt)?;
	Ok(tag)
}

/// Decode a nameless root whose kind is known out of band.
pub fn decode_element(bytes: &[u8], kind: TagKind, opt: &DecodeOptions) -> Result<Tag> {
	let mut cursor = Cursor::new(bytes);
	let tag = decode_tag(&mut cursor, Some(kind), opt)?;
	check_trailing(&cursor, opt)?;
	Ok(tag)
}

/// Drain `reader` and decode a named root tag.
pub fn read_tag(mut reader: impl Read, opt: &DecodeOptions) -> Result<Tag> {
	let mut bytes = Vec::new();
	reader.read_to_end(&mut bytes)?;
	decode_with_options(&bytes, opt)
}

/// Decode one tag at the cursor.
///
/// `element_kind` is `None` for a fully framed tag (tag byte, name, payload)
/// and `Some` for a list element, which has neither tag byte nor name.
pub fn decode_tag(cursor: &mut Cursor<'_>, element_kind: Option<TagKind>, opt: &DecodeOptions) -> Result<Tag> {
	decode_tag_impl(cursor, element_kind, opt, 0)
}

fn decode_tag_impl(cursor: &mut Cursor<'_>, element_kind: Option<TagKind>, opt: &DecodeOptions, depth: u32) -> Result<Tag> {
	let at = cursor.pos();
	let kind = match element_kind {
		Some(kind) => kind,
		None => read_kind(cursor)?,
	};

	if kind == TagKind::End {
		return Ok(Tag::end());
	}

	let name = match element_kind {
		Some(_) => None,
		None => Some(cursor.read_string()?),
	};
	log::trace!("decode {kind} name={name:?} at={at} depth={depth}");

	let payload = decode_payload(cursor, kind, opt, depth)?;
	Ok(Tag { name, payload })
}

fn decode_payload(cursor: &mut Cursor<'_>, kind: TagKind, opt: &DecodeOptions, depth: u32) -> Result<Payload> {
	Ok(match kind {
		TagKind::End => Payload::End,
		TagKind::Byte => Payload::Byte(cursor.read_i8()?),
		TagKind::Short => Payload::Short(cursor.read_i16()?),
		TagKind::Int => Payload::Int(cursor.read_i32()?),
		TagKind::Long => Payload::Long(cursor.read_i64()?),
		TagKind::Float => Payload::Float(cursor.read_f32()?),
		TagKind::Double => Payload::Double(cursor.read_f64()?),
		TagKind::String => Payload::String(cursor.read_string()?),
		TagKind::ByteArray => {
			let count = read_count(cursor, opt)?;
			Payload::ByteArray(read_elems(cursor, count, i8::from_be_bytes)?)
		}
		TagKind::IntArray => {
			let count = read_count(cursor, opt)?;
			Payload::IntArray(read_elems(cursor, count, i32::from_be_bytes)?)
		}
		TagKind::LongArray => {
			let count = read_count(cursor, opt)?;
			Payload::LongArray(read_elems(cursor, count, i64::from_be_bytes)?)
		}
		TagKind::List => {
			check_depth(opt, depth)?;
			let element_kind = read_kind(cursor)?;
			let count = read_count(cursor, opt)?;
			check_list_count(cursor, element_kind, count)?;

			let mut items = Vec::with_capacity(count);
			for _ in 0..count {
				items.push(decode_tag_impl(cursor, Some(element_kind), opt, depth + 1)?);
			}
			Payload::List(List::new(element_kind, items))
		}
		TagKind::Compound => {
			check_depth(opt, depth)?;
			let mut members = Vec::new();
			loop {
				let member = decode_tag_impl(cursor, None, opt, depth + 1)?;
				if member.kind() == TagKind::End {
					break;
				}
				members.push(member);
			}
			Payload::Compound(members)
		}
	})
}

fn read_kind(cursor: &mut Cursor<'_>) -> Result<TagKind> {
	let at = cursor.pos();
	let tag = cursor.read_u8()?;
	TagKind::from_id(tag).ok_or(NbtError::UnknownTag { tag, at })
}

fn read_count(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<usize> {
	let raw = cursor.read_u32()?;
	let count = usize::try_from(raw).map_err(|_| NbtError::DecodeArrayTooLarge {
		count: usize::MAX,
		max: opt.max_array_elems,
	})?;
	if count > opt.max_array_elems {
		return Err(NbtError::DecodeArrayTooLarge {
			count,
			max: opt.max_array_elems,
		});
	}
	Ok(count)
}

/// End elements occupy no bytes, so an End-typed list must be empty; every
/// other element kind takes at least one byte per element.
fn check_list_count(cursor: &Cursor<'_>, element_kind: TagKind, count: usize) -> Result<()> {
	if element_kind == TagKind::End {
		if count > 0 {
			return Err(NbtError::NonEmptyEndList { count });
		}
		return Ok(());
	}
	if count > cursor.remaining() {
		return Err(NbtError::UnexpectedEof {
			at: cursor.pos(),
			need: count,
			rem: cursor.remaining(),
		});
	}
	Ok(())
}

fn read_elems<T, const N: usize>(cursor: &mut Cursor<'_>, count: usize, convert: fn([u8; N]) -> T) -> Result<Vec<T>> {
	let need = count.checked_mul(N).ok_or(NbtError::UnexpectedEof {
		at: cursor.pos(),
		need: usize::MAX,
		rem: cursor.remaining(),
	})?;
	let raw = cursor.read_exact(need)?;

	Ok(raw
		.chunks_exact(N)
		.map(|chunk| {
			let mut buf = [0_u8; N];
			buf.copy_from_slice(chunk);
			convert(buf)
		})
		.collect())
}

fn check_depth(opt: &DecodeOptions, depth: u32) -> Result<()> {
	if depth >= opt.max_depth {
		return Err(NbtError::DecodeDepthExceeded { max_depth: opt.max_depth });
	}
	Ok(())
}

fn check_trailing(cursor: &Cursor<'_>, opt: &DecodeOptions) -> Result<()> {
	let leftover = cursor.remaining();
	if leftover > 0 {
		if opt.strict_trailing {
			return Err(NbtError::TrailingBytes { leftover });
		}
		log::debug!("ignoring {leftover} trailing bytes after root tag");
	}
	Ok(())
}
