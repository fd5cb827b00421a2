//! JSON text representation of NBT trees.
//!
//! Each node is an object with `Type`, `List`, `Name`, `Size` and `Data`
//! fields. Numbers are always read through their decimal text and written as
//! decimal strings, so 64-bit values never pass through an `f64`.

use std::borrow::Cow;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};

use crate::nbt::decode::DEFAULT_MAX_DEPTH;
use crate::nbt::{List, NbtError, Payload, Result, Tag, TagKind};

/// Switches for text encoding and decoding.
#[derive(Debug, Clone)]
pub struct TextOptions {
	/// Emit indented, multi-line JSON.
	pub pretty: bool,
	/// Maximum List/Compound nesting depth accepted when parsing.
	pub max_depth: u32,
}

impl Default for TextOptions {
	fn default() -> Self {
		Self {
			pretty: false,
			max_depth: DEFAULT_MAX_DEPTH,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Framing {
	Root,
	Member,
	Element,
}

/// Parse a text document into a tree.
///
/// A root with a string `Name` is named; a missing or `null` name yields a
/// nameless root.
pub fn from_text(document: &str) -> Result<Tag> {
	from_text_with_options(document, &TextOptions::default())
}

/// Parse a text document into a tree, nesting at most `opt.max_depth`
/// List/Compound levels.
pub fn from_text_with_options(document: &str, opt: &TextOptions) -> Result<Tag> {
	check_nesting(document, opt.max_depth)?;

	// Each NBT level is two JSON levels, so serde_json's own limit of 128 is
	// too low; `check_nesting` bounds the parser's recursion instead.
	let mut de = serde_json::Deserializer::from_str(document);
	de.disable_recursion_limit();
	let value = JsonValue::deserialize(&mut de)?;
	de.end()?;

	from_json_value_with_options(&value, opt)
}

/// Convert an already parsed JSON value into a tree.
pub fn from_json_value(value: &JsonValue) -> Result<Tag> {
	from_json_value_with_options(value, &TextOptions::default())
}

/// Convert an already parsed JSON value into a tree with explicit limits.
pub fn from_json_value_with_options(value: &JsonValue, opt: &TextOptions) -> Result<Tag> {
	decode_node(value, Framing::Root, opt, 0)
}

/// Render a tree as compact JSON text.
pub fn to_text(tag: &Tag) -> Result<String> {
	to_text_with_options(tag, &TextOptions::default())
}

/// Render a tree as JSON text.
pub fn to_text_with_options(tag: &Tag, opt: &TextOptions) -> Result<String> {
	let value = to_json_value(tag);
	let text = if opt.pretty {
		serde_json::to_string_pretty(&value)?
	} else {
		serde_json::to_string(&value)?
	};
	Ok(text)
}

/// Convert a tree into its JSON value form.
pub fn to_json_value(tag: &Tag) -> JsonValue {
	let list_kind = tag.as_list().map_or(0, |list| list.element_kind.id());

	let mut out = Map::new();
	out.insert("Type".to_owned(), JsonValue::from(tag.kind().id()));
	out.insert("List".to_owned(), JsonValue::from(list_kind));
	out.insert("Name".to_owned(), tag.name().map_or(JsonValue::Null, JsonValue::from));
	out.insert("Size".to_owned(), JsonValue::from(tag.count()));
	out.insert("Data".to_owned(), payload_to_json(&tag.payload));
	JsonValue::Object(out)
}

fn payload_to_json(payload: &Payload) -> JsonValue {
	match payload {
		Payload::End => JsonValue::Null,
		Payload::Byte(v) => decimal(v),
		Payload::Short(v) => decimal(v),
		Payload::Int(v) => decimal(v),
		Payload::Long(v) => decimal(v),
		Payload::Float(v) => decimal(v),
		Payload::Double(v) => decimal(v),
		Payload::String(v) => JsonValue::String(v.clone()),
		Payload::ByteArray(items) => JsonValue::Array(items.iter().map(decimal).collect()),
		Payload::IntArray(items) => JsonValue::Array(items.iter().map(decimal).collect()),
		Payload::LongArray(items) => JsonValue::Array(items.iter().map(decimal).collect()),
		Payload::List(list) => JsonValue::Array(list.items.iter().map(to_json_value).collect()),
		Payload::Compound(members) => JsonValue::Array(members.iter().map(to_json_value).collect()),
	}
}

fn decimal(value: &impl ToString) -> JsonValue {
	JsonValue::String(value.to_string())
}

fn decode_node(value: &JsonValue, framing: Framing, opt: &TextOptions, depth: u32) -> Result<Tag> {
	let obj = value.as_object().ok_or(NbtError::TextFieldShape {
		field: "node",
		expected: "object",
	})?;

	let type_id = small_int(obj, "Type")?;
	let kind = TagKind::from_id(type_id).ok_or(NbtError::TextUnknownType { value: type_id })?;
	if kind == TagKind::End {
		return Ok(Tag::end());
	}
	if kind.is_container() && depth >= opt.max_depth {
		return Err(NbtError::TextDepthExceeded { max_depth: opt.max_depth });
	}

	let name = match framing {
		Framing::Element => None,
		Framing::Member => Some(name_field(obj)?.ok_or(NbtError::TextMissingField { field: "Name" })?),
		Framing::Root => name_field(obj)?,
	};

	let payload = match kind {
		TagKind::End => Payload::End,
		TagKind::Byte => Payload::Byte(parse_data(obj)?),
		TagKind::Short => Payload::Short(parse_data(obj)?),
		TagKind::Int => Payload::Int(parse_data(obj)?),
		TagKind::Long => Payload::Long(parse_data(obj)?),
		TagKind::Float => Payload::Float(parse_data(obj)?),
		TagKind::Double => Payload::Double(parse_data(obj)?),
		TagKind::String => Payload::String(data_string(obj)?.to_owned()),
		TagKind::ByteArray => Payload::ByteArray(parse_elems(obj)?),
		TagKind::IntArray => Payload::IntArray(parse_elems(obj)?),
		TagKind::LongArray => Payload::LongArray(parse_elems(obj)?),
		TagKind::List => {
			let element_id = small_int(obj, "List")?;
			let element_kind = TagKind::from_id(element_id).ok_or(NbtError::TextUnknownType { value: element_id })?;

			let mut items = Vec::new();
			for item in data_array(obj)? {
				let item = decode_node(item, Framing::Element, opt, depth + 1)?;
				if item.kind() != element_kind {
					return Err(NbtError::ListElementKindMismatch {
						expected: element_kind,
						got: item.kind(),
					});
				}
				items.push(item);
			}
			if element_kind == TagKind::End && !items.is_empty() {
				return Err(NbtError::NonEmptyEndList { count: items.len() });
			}
			Payload::List(List::new(element_kind, items))
		}
		TagKind::Compound => {
			let mut members = Vec::new();
			for member in data_array(obj)? {
				let member = decode_node(member, Framing::Member, opt, depth + 1)?;
				if member.kind() != TagKind::End {
					members.push(member);
				}
			}
			Payload::Compound(members)
		}
	};

	check_size(obj, &payload)?;
	Ok(Tag { name, payload })
}

/// Reject documents whose bracket nesting could not belong to a tree within
/// `max_depth`, before the parser recurses into them.
fn check_nesting(document: &str, max_depth: u32) -> Result<()> {
	// A container at depth d is an object at JSON level 2d+1 and its `Data`
	// array at 2d+2; leaf arrays add one more level below the deepest one.
	let limit = (max_depth as usize).saturating_mul(2).saturating_add(2);

	let mut level = 0_usize;
	let mut in_string = false;
	let mut escaped = false;
	for byte in document.bytes() {
		if in_string {
			match byte {
				_ if escaped => escaped = false,
				b'\\' => escaped = true,
				b'"' => in_string = false,
				_ => {}
			}
			continue;
		}
		match byte {
			b'"' => in_string = true,
			b'{' | b'[' => {
				level += 1;
				if level > limit {
					return Err(NbtError::TextDepthExceeded { max_depth });
				}
			}
			b'}' | b']' => level = level.saturating_sub(1),
			_ => {}
		}
	}
	Ok(())
}

fn field<'a>(obj: &'a Map<String, JsonValue>, field: &'static str) -> Result<&'a JsonValue> {
	obj.get(field).ok_or(NbtError::TextMissingField { field })
}

fn name_field(obj: &Map<String, JsonValue>) -> Result<Option<String>> {
	match obj.get("Name") {
		None | Some(JsonValue::Null) => Ok(None),
		Some(JsonValue::String(name)) => Ok(Some(name.clone())),
		Some(_) => Err(NbtError::TextFieldShape {
			field: "Name",
			expected: "string or null",
		}),
	}
}

fn number_text<'a>(value: &'a JsonValue, field: &'static str) -> Result<Cow<'a, str>> {
	match value {
		JsonValue::Number(n) => Ok(Cow::Owned(n.to_string())),
		JsonValue::String(text) => Ok(Cow::Borrowed(text.trim())),
		_ => Err(NbtError::TextFieldShape {
			field,
			expected: "number or decimal string",
		}),
	}
}

fn parse_number<T: FromStr>(value: &JsonValue, field: &'static str) -> Result<T> {
	let text = number_text(value, field)?;
	text.parse().map_err(|_| NbtError::TextNumber {
		field,
		text: text.into_owned(),
	})
}

fn small_int(obj: &Map<String, JsonValue>, name: &'static str) -> Result<u8> {
	parse_number(field(obj, name)?, name)
}

fn parse_data<T: FromStr>(obj: &Map<String, JsonValue>) -> Result<T> {
	parse_number(field(obj, "Data")?, "Data")
}

fn data_string(obj: &Map<String, JsonValue>) -> Result<&str> {
	field(obj, "Data")?.as_str().ok_or(NbtError::TextFieldShape {
		field: "Data",
		expected: "string",
	})
}

fn data_array(obj: &Map<String, JsonValue>) -> Result<&Vec<JsonValue>> {
	field(obj, "Data")?.as_array().ok_or(NbtError::TextFieldShape {
		field: "Data",
		expected: "array",
	})
}

fn parse_elems<T: FromStr>(obj: &Map<String, JsonValue>) -> Result<Vec<T>> {
	data_array(obj)?.iter().map(|item| parse_number(item, "Data")).collect()
}

fn check_size(obj: &Map<String, JsonValue>, payload: &Payload) -> Result<()> {
	let Some(value) = obj.get("Size") else {
		return Ok(());
	};
	let declared: u32 = parse_number(value, "Size")?;

	let sized = matches!(
		payload,
		Payload::String(_) | Payload::ByteArray(_) | Payload::IntArray(_) | Payload::LongArray(_) | Payload::List(_) | Payload::Compound(_)
	);
	let actual = payload.count();
	if sized && usize::try_from(declared).ok() != Some(actual) {
		return Err(NbtError::TextSizeMismatch { declared, actual });
	}
	Ok(())
}
