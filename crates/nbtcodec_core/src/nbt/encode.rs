use std::io::Write;

use crate::nbt::decode::{DEFAULT_MAX_DEPTH, DecodeOptions, decode_with_options};
use crate::nbt::{List, NbtError, Payload, Result, Tag, TagKind};

/// Runtime limits for binary encoding.
#[derive(Debug, Clone)]
pub struct EncodeOptions {
	/// Maximum List/Compound nesting depth.
	pub max_depth: u32,
}

impl Default for EncodeOptions {
	fn default() -> Self {
		Self {
			max_depth: DEFAULT_MAX_DEPTH,
		}
	}
}

/// Encode a tree into a fresh buffer with default options.
pub fn encode(tag: &Tag) -> Result<Vec<u8>> {
	encode_with_options(tag, &EncodeOptions::default())
}

/// Encode a tree into a fresh buffer.
pub fn encode_with_options(tag: &Tag, opt: &EncodeOptions) -> Result<Vec<u8>> {
	let mut out = Vec::new();
	encode_tag(&mut out, tag, opt)?;
	Ok(out)
}

/// Encode one tag into `sink`.
///
/// Named tags are framed with a tag byte and name; nameless tags are written
/// as bare list-element payloads. Sink failures propagate as-is and leave
/// whatever was already written in place.
pub fn encode_tag<W: Write + ?Sized>(sink: &mut W, tag: &Tag, opt: &EncodeOptions) -> Result<()> {
	encode_tag_impl(sink, tag, opt, 0)
}

/// Decode `bytes`, re-encode the tree, and require identical output.
pub fn verify_round_trip(bytes: &[u8], opt: &DecodeOptions) -> Result<Tag> {
	let tag = decode_with_options(bytes, opt)?;
	if tag.kind() == TagKind::End {
		return Err(NbtError::BareEndRoot);
	}
	let encoded = encode_with_options(
		&tag,
		&EncodeOptions {
			max_depth: opt.max_depth,
		},
	)?;

	if encoded != bytes {
		let offset = encoded.iter().zip(bytes).position(|(left, right)| left != right).unwrap_or(encoded.len().min(bytes.len()));
		return Err(NbtError::RoundTripMismatch {
			offset,
			source_len: bytes.len(),
			encoded_len: encoded.len(),
		});
	}
	Ok(tag)
}

fn encode_tag_impl<W: Write + ?Sized>(sink: &mut W, tag: &Tag, opt: &EncodeOptions, depth: u32) -> Result<()> {
	let kind = tag.kind();
	if let Some(name) = &tag.name {
		sink.write_all(&[kind.id()])?;
		if kind == TagKind::End {
			return Ok(());
		}
		write_string(sink, "name", name)?;
	}
	log::trace!("encode {kind} name={:?} depth={depth}", tag.name);

	encode_payload(sink, &tag.payload, opt, depth)
}

fn encode_payload<W: Write + ?Sized>(sink: &mut W, payload: &Payload, opt: &EncodeOptions, depth: u32) -> Result<()> {
	match payload {
		Payload::End => {}
		Payload::Byte(v) => sink.write_all(&v.to_be_bytes())?,
		Payload::Short(v) => sink.write_all(&v.to_be_bytes())?,
		Payload::Int(v) => sink.write_all(&v.to_be_bytes())?,
		Payload::Long(v) => sink.write_all(&v.to_be_bytes())?,
		Payload::Float(v) => sink.write_all(&v.to_be_bytes())?,
		Payload::Double(v) => sink.write_all(&v.to_be_bytes())?,
		Payload::String(text) => write_string(sink, "string", text)?,
		Payload::ByteArray(items) => write_elems(sink, "byte array", items, i8::to_be_bytes)?,
		Payload::IntArray(items) => write_elems(sink, "int array", items, i32::to_be_bytes)?,
		Payload::LongArray(items) => write_elems(sink, "long array", items, i64::to_be_bytes)?,
		Payload::List(list) => {
			check_depth(opt, depth)?;
			check_list(list)?;
			sink.write_all(&[list.element_kind.id()])?;
			write_count(sink, "list", list.len())?;
			for item in &list.items {
				encode_tag_impl(sink, item, opt, depth + 1)?;
			}
		}
		Payload::Compound(members) => {
			check_depth(opt, depth)?;
			for member in members {
				if member.name.is_none() {
					return Err(NbtError::UnnamedCompoundMember);
				}
				if member.kind() == TagKind::End {
					return Err(NbtError::EndInCompound);
				}
				encode_tag_impl(sink, member, opt, depth + 1)?;
			}
			sink.write_all(&[TagKind::End.id()])?;
		}
	}
	Ok(())
}

fn check_list(list: &List) -> Result<()> {
	if list.element_kind == TagKind::End && !list.is_empty() {
		return Err(NbtError::NonEmptyEndList { count: list.len() });
	}

	for item in &list.items {
		if item.kind() != list.element_kind {
			return Err(NbtError::ListElementKindMismatch {
				expected: list.element_kind,
				got: item.kind(),
			});
		}
		if let Some(name) = &item.name {
			return Err(NbtError::NamedListElement { name: name.clone() });
		}
	}
	Ok(())
}

fn write_string<W: Write + ?Sized>(sink: &mut W, what: &'static str, text: &str) -> Result<()> {
	let len = u16::try_from(text.len()).map_err(|_| NbtError::LengthOverflow {
		what,
		len: text.len(),
		max: usize::from(u16::MAX),
	})?;
	sink.write_all(&len.to_be_bytes())?;
	sink.write_all(text.as_bytes())?;
	Ok(())
}

fn write_count<W: Write + ?Sized>(sink: &mut W, what: &'static str, len: usize) -> Result<()> {
	let count = u32::try_from(len).map_err(|_| NbtError::LengthOverflow {
		what,
		len,
		max: u32::MAX as usize,
	})?;
	sink.write_all(&count.to_be_bytes())?;
	Ok(())
}

fn write_elems<W: Write + ?Sized, T: Copy, const N: usize>(sink: &mut W, what: &'static str, items: &[T], to_bytes: fn(T) -> [u8; N]) -> Result<()> {
	write_count(sink, what, items.len())?;

	let mut buf = Vec::with_capacity(items.len() * N);
	for item in items {
		buf.extend_from_slice(&to_bytes(*item));
	}
	sink.write_all(&buf)?;
	Ok(())
}

fn check_depth(opt: &EncodeOptions, depth: u32) -> Result<()> {
	if depth >= opt.max_depth {
		return Err(NbtError::EncodeDepthExceeded { max_depth: opt.max_depth });
	}
	Ok(())
}

#[cfg(test)]
mod tests;
