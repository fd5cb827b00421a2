use crate::nbt::{List, Payload, Tag};

impl Tag {
	/// Duplicate this tree, sharing no storage with `self`.
	///
	/// Every kind is copied by value, array payloads included.
	pub fn deep_copy(&self) -> Tag {
		Tag {
			name: self.name.clone(),
			payload: copy_payload(&self.payload),
		}
	}
}

impl Clone for Tag {
	fn clone(&self) -> Self {
		self.deep_copy()
	}
}

fn copy_payload(payload: &Payload) -> Payload {
	match payload {
		Payload::List(list) => Payload::List(List::new(list.element_kind, list.items.iter().map(Tag::deep_copy).collect())),
		Payload::Compound(members) => Payload::Compound(members.iter().map(Tag::deep_copy).collect()),
		Payload::End => Payload::End,
		Payload::Byte(v) => Payload::Byte(*v),
		Payload::Short(v) => Payload::Short(*v),
		Payload::Int(v) => Payload::Int(*v),
		Payload::Long(v) => Payload::Long(*v),
		Payload::Float(v) => Payload::Float(*v),
		Payload::Double(v) => Payload::Double(*v),
		Payload::String(v) => Payload::String(v.clone()),
		Payload::ByteArray(v) => Payload::ByteArray(v.clone()),
		Payload::IntArray(v) => Payload::IntArray(v.clone()),
		Payload::LongArray(v) => Payload::LongArray(v.clone()),
	}
}
