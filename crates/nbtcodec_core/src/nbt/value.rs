use crate::nbt::TagKind;

/// One node of an NBT tree.
///
/// `name` is `Some` for compound members and named roots (the empty string is
/// a valid name) and `None` for list elements, which carry no name framing on
/// the wire at all.
#[derive(Debug, PartialEq)]
pub struct Tag {
	/// Member name, absent for list elements.
	pub name: Option<String>,
	/// Kind-specific payload.
	pub payload: Payload,
}

/// Kind-specific node payload.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum Payload {
	End,
	Byte(i8),
	Short(i16),
	Int(i32),
	Long(i64),
	Float(f32),
	Double(f64),
	ByteArray(Vec<i8>),
	String(String),
	List(List),
	/// Members in wire order; the End terminator is never stored.
	Compound(Vec<Tag>),
	IntArray(Vec<i32>),
	LongArray(Vec<i64>),
}

/// Homogeneous list payload.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
	/// Kind shared by every element.
	pub element_kind: TagKind,
	/// Nameless elements in wire order.
	pub items: Vec<Tag>,
}

impl List {
	/// Build a list of `element_kind` from nameless elements.
	pub fn new(element_kind: TagKind, items: Vec<Tag>) -> Self {
		Self { element_kind, items }
	}

	/// Empty list; encoded with element kind End.
	pub fn empty() -> Self {
		Self::new(TagKind::End, Vec::new())
	}

	/// Build a list by wrapping each payload as a nameless element.
	pub fn of(element_kind: TagKind, payloads: impl IntoIterator<Item = Payload>) -> Self {
		Self::new(element_kind, payloads.into_iter().map(Tag::element).collect())
	}

	/// Number of elements.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Whether the list has no elements.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}

impl Payload {
	/// Tag kind of this payload.
	pub fn kind(&self) -> TagKind {
		match self {
			Self::End => TagKind::End,
			Self::Byte(_) => TagKind::Byte,
			Self::Short(_) => TagKind::Short,
			Self::Int(_) => TagKind::Int,
			Self::Long(_) => TagKind::Long,
			Self::Float(_) => TagKind::Float,
			Self::Double(_) => TagKind::Double,
			Self::ByteArray(_) => TagKind::ByteArray,
			Self::String(_) => TagKind::String,
			Self::List(_) => TagKind::List,
			Self::Compound(_) => TagKind::Compound,
			Self::IntArray(_) => TagKind::IntArray,
			Self::LongArray(_) => TagKind::LongArray,
		}
	}

	/// Wire-level element count.
	///
	/// String byte length, array/list element count, compound member count;
	/// zero for scalars and End.
	pub fn count(&self) -> usize {
		match self {
			Self::End | Self::Byte(_) | Self::Short(_) | Self::Int(_) | Self::Long(_) | Self::Float(_) | Self::Double(_) => 0,
			Self::ByteArray(items) => items.len(),
			Self::String(text) => text.len(),
			Self::List(list) => list.len(),
			Self::Compound(members) => members.len(),
			Self::IntArray(items) => items.len(),
			Self::LongArray(items) => items.len(),
		}
	}
}

impl Tag {
	/// Named node, as found in compounds and at the root.
	pub fn named(name: impl Into<String>, payload: Payload) -> Self {
		Self {
			name: Some(name.into()),
			payload,
		}
	}

	/// Nameless node, as found in lists.
	pub fn element(payload: Payload) -> Self {
		Self { name: None, payload }
	}

	/// The structural End marker.
	pub fn end() -> Self {
		Self::element(Payload::End)
	}

	/// Tag kind of this node.
	pub fn kind(&self) -> TagKind {
		self.payload.kind()
	}

	/// Member name, `None` for list elements.
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	/// Whether this node uses list element framing.
	pub fn is_list_element(&self) -> bool {
		self.name.is_none()
	}

	/// Wire-level element count, see [`Payload::count`].
	pub fn count(&self) -> usize {
		self.payload.count()
	}

	/// Borrow the payload.
	pub fn payload(&self) -> &Payload {
		&self.payload
	}

	/// First compound member named `name`.
	pub fn get(&self, name: &str) -> Option<&Tag> {
		self.as_compound()?.iter().find(|member| member.name() == Some(name))
	}

	/// Byte value, if this is a `TAG_Byte`.
	pub fn as_byte(&self) -> Option<i8> {
		match self.payload {
			Payload::Byte(v) => Some(v),
			_ => None,
		}
	}

	/// Short value, if this is a `TAG_Short`.
	pub fn as_short(&self) -> Option<i16> {
		match self.payload {
			Payload::Short(v) => Some(v),
			_ => None,
		}
	}

	/// Int value, if this is a `TAG_Int`.
	pub fn as_int(&self) -> Option<i32> {
		match self.payload {
			Payload::Int(v) => Some(v),
			_ => None,
		}
	}

	/// Long value, if this is a `TAG_Long`.
	pub fn as_long(&self) -> Option<i64> {
		match self.payload {
			Payload::Long(v) => Some(v),
			_ => None,
		}
	}

	/// Float value, if this is a `TAG_Float`.
	pub fn as_float(&self) -> Option<f32> {
		match self.payload {
			Payload::Float(v) => Some(v),
			_ => None,
		}
	}

	/// Double value, if this is a `TAG_Double`.
	pub fn as_double(&self) -> Option<f64> {
		match self.payload {
			Payload::Double(v) => Some(v),
			_ => None,
		}
	}

	/// String value, if this is a `TAG_String`.
	pub fn as_str(&self) -> Option<&str> {
		match &self.payload {
			Payload::String(v) => Some(v),
			_ => None,
		}
	}

	/// Elements, if this is a `TAG_Byte_Array`.
	pub fn as_byte_array(&self) -> Option<&[i8]> {
		match &self.payload {
			Payload::ByteArray(v) => Some(v),
			_ => None,
		}
	}

	/// Elements, if this is a `TAG_Int_Array`.
	pub fn as_int_array(&self) -> Option<&[i32]> {
		match &self.payload {
			Payload::IntArray(v) => Some(v),
			_ => None,
		}
	}

	/// Elements, if this is a `TAG_Long_Array`.
	pub fn as_long_array(&self) -> Option<&[i64]> {
		match &self.payload {
			Payload::LongArray(v) => Some(v),
			_ => None,
		}
	}

	/// List payload, if this is a `TAG_List`.
	pub fn as_list(&self) -> Option<&List> {
		match &self.payload {
			Payload::List(v) => Some(v),
			_ => None,
		}
	}

	/// Members, if this is a `TAG_Compound`.
	pub fn as_compound(&self) -> Option<&[Tag]> {
		match &self.payload {
			Payload::Compound(v) => Some(v),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests;
