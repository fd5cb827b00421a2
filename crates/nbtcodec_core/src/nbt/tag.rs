use std::fmt;

/// Wire tag identifying which payload shape a node holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TagKind {
	/// Compound terminator; no name, no payload.
	End = 0,
	/// Signed 8-bit integer.
	Byte = 1,
	/// Signed 16-bit integer.
	Short = 2,
	/// Signed 32-bit integer.
	Int = 3,
	/// Signed 64-bit integer.
	Long = 4,
	/// IEEE-754 single precision float.
	Float = 5,
	/// IEEE-754 double precision float.
	Double = 6,
	/// `u32` count followed by signed bytes.
	ByteArray = 7,
	/// `u16` length followed by UTF-8 bytes.
	String = 8,
	/// Element tag, `u32` count, then unnamed elements.
	List = 9,
	/// Named members terminated by [`TagKind::End`].
	Compound = 10,
	/// `u32` count followed by big-endian `i32` values.
	IntArray = 11,
	/// `u32` count followed by big-endian `i64` values.
	LongArray = 12,
}

impl TagKind {
	/// All kinds in wire-id order.
	pub const ALL: [TagKind; 13] = [
		Self::End,
		Self::Byte,
		Self::Short,
		Self::Int,
		Self::Long,
		Self::Float,
		Self::Double,
		Self::ByteArray,
		Self::String,
		Self::List,
		Self::Compound,
		Self::IntArray,
		Self::LongArray,
	];

	/// Wire id byte.
	pub fn id(self) -> u8 {
		self as u8
	}

	/// Resolve a wire id byte.
	pub fn from_id(id: u8) -> Option<Self> {
		Self::ALL.get(usize::from(id)).copied()
	}

	/// Stable `TAG_*` label.
	pub fn label(self) -> &'static str {
		match self {
			Self::End => "TAG_End",
			Self::Byte => "TAG_Byte",
			Self::Short => "TAG_Short",
			Self::Int => "TAG_Int",
			Self::Long => "TAG_Long",
			Self::Float => "TAG_Float",
			Self::Double => "TAG_Double",
			Self::ByteArray => "TAG_Byte_Array",
			Self::String => "TAG_String",
			Self::List => "TAG_List",
			Self::Compound => "TAG_Compound",
			Self::IntArray => "TAG_Int_Array",
			Self::LongArray => "TAG_Long_Array",
		}
	}

	/// Whether nodes of this kind nest other nodes.
	pub fn is_container(self) -> bool {
		matches!(self, Self::List | Self::Compound)
	}
}

impl TryFrom<u8> for TagKind {
	type Error = u8;

	fn try_from(id: u8) -> Result<Self, Self::Error> {
		Self::from_id(id).ok_or(id)
	}
}

impl fmt::Display for TagKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} (0x{:02x})", self.label(), self.id())
	}
}

#[cfg(test)]
mod tests {
	use crate::nbt::TagKind;

	#[test]
	fn ids_match_wire_table() {
		for (idx, kind) in TagKind::ALL.iter().enumerate() {
			assert_eq!(usize::from(kind.id()), idx);
			assert_eq!(TagKind::from_id(kind.id()), Some(*kind));
		}
		assert_eq!(TagKind::from_id(13), None);
		assert_eq!(TagKind::try_from(0xff), Err(0xff));
	}

	#[test]
	fn display_includes_label_and_hex_id() {
		assert_eq!(TagKind::Long.to_string(), "TAG_Long (0x04)");
		assert_eq!(TagKind::LongArray.to_string(), "TAG_Long_Array (0x0c)");
	}

	#[test]
	fn only_list_and_compound_are_containers() {
		let containers: Vec<TagKind> = TagKind::ALL.iter().copied().filter(|kind| kind.is_container()).collect();
		assert_eq!(containers, vec![TagKind::List, TagKind::Compound]);
	}
}
