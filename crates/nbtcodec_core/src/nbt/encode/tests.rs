use std::io::{self, Write};

use nbtcodec_testkit::NbtBytes;

use crate::nbt::{DecodeOptions, EncodeOptions, List, NbtError, Payload, Tag, TagKind, decode, encode, encode_tag, encode_with_options, verify_round_trip};

#[test]
fn seed_compound_matches_wire_bytes() {
	let tag = Tag::named("", Payload::Compound(vec![Tag::named("Seed", Payload::Long(-7034984500680740558))]));
	let expected = NbtBytes::new().named(10, "").named(4, "Seed").i64(-7034984500680740558).end().build();

	let bytes = encode(&tag).expect("encodes");
	assert_eq!(bytes, expected);
	assert_eq!(encode(&decode(&bytes).expect("decodes")).expect("re-encodes"), bytes);
}

#[test]
fn empty_list_is_five_payload_bytes() {
	let tag = Tag::named("l", Payload::List(List::empty()));
	let bytes = encode(&tag).expect("encodes");
	let framing = 1 + 2 + 1;
	assert_eq!(bytes.len(), framing + 5);
	assert_eq!(&bytes[framing..], &[0, 0, 0, 0, 0]);
}

#[test]
fn empty_compound_is_framing_plus_end() {
	let tag = Tag::named("c", Payload::Compound(Vec::new()));
	let bytes = encode(&tag).expect("encodes");
	assert_eq!(bytes, vec![0x0a, 0x00, 0x01, b'c', 0x00]);
	assert_eq!(decode(&bytes).expect("decodes").count(), 0);
}

#[test]
fn int_list_round_trips_in_order() {
	let tag = Tag::named("nums", Payload::List(List::of(TagKind::Int, [Payload::Int(1), Payload::Int(2), Payload::Int(3)])));
	let bytes = encode(&tag).expect("encodes");
	let expected = NbtBytes::new().named(9, "nums").u8(3).u32(3).i32(1).i32(2).i32(3).build();
	assert_eq!(bytes, expected);
	assert_eq!(decode(&bytes).expect("decodes"), tag);
}

#[test]
fn nameless_node_writes_bare_payload() {
	let bytes = encode(&Tag::element(Payload::Short(-2))).expect("encodes");
	assert_eq!(bytes, vec![0xff, 0xfe]);
}

#[test]
fn named_end_writes_only_tag_byte() {
	let bytes = encode(&Tag::named("ignored", Payload::End)).expect("encodes");
	assert_eq!(bytes, vec![0x00]);
}

#[test]
fn list_element_kind_mismatch_is_rejected() {
	let tag = Tag::named("l", Payload::List(List::new(TagKind::Int, vec![Tag::element(Payload::Byte(1))])));
	let err = encode(&tag).expect_err("mismatch");
	assert!(matches!(
		err,
		NbtError::ListElementKindMismatch {
			expected: TagKind::Int,
			got: TagKind::Byte
		}
	));
}

#[test]
fn named_list_element_is_rejected() {
	let tag = Tag::named("l", Payload::List(List::new(TagKind::Int, vec![Tag::named("x", Payload::Int(1))])));
	let err = encode(&tag).expect_err("named element");
	assert!(matches!(err, NbtError::NamedListElement { name } if name == "x"));
}

#[test]
fn end_typed_list_with_values_is_rejected() {
	let tag = Tag::named("l", Payload::List(List::new(TagKind::End, vec![Tag::element(Payload::Int(1))])));
	let err = encode(&tag).expect_err("end list with values");
	assert!(matches!(err, NbtError::NonEmptyEndList { count: 1 }));

	let ends = Tag::named("l", Payload::List(List::new(TagKind::End, vec![Tag::end(), Tag::end()])));
	let err = encode(&ends).expect_err("end list with end elements");
	assert!(matches!(err, NbtError::NonEmptyEndList { count: 2 }));
}

#[test]
fn compound_members_must_be_named_and_not_end() {
	let unnamed = Tag::named("", Payload::Compound(vec![Tag::element(Payload::Int(1))]));
	assert!(matches!(encode(&unnamed).expect_err("unnamed"), NbtError::UnnamedCompoundMember));

	let end = Tag::named("", Payload::Compound(vec![Tag::named("e", Payload::End)]));
	assert!(matches!(encode(&end).expect_err("end member"), NbtError::EndInCompound));
}

#[test]
fn oversized_string_is_rejected() {
	let tag = Tag::named("s", Payload::String("x".repeat(usize::from(u16::MAX) + 1)));
	let err = encode(&tag).expect_err("too long");
	assert!(matches!(err, NbtError::LengthOverflow { what: "string", max: 65535, .. }));
}

#[test]
fn encode_depth_is_bounded() {
	let mut tag = Tag::named("leaf", Payload::Compound(Vec::new()));
	for _ in 0..4 {
		tag = Tag::named("n", Payload::Compound(vec![tag]));
	}

	encode_with_options(&tag, &EncodeOptions { max_depth: 5 }).expect("within limit");
	let err = encode_with_options(&tag, &EncodeOptions { max_depth: 4 }).expect_err("above limit");
	assert!(matches!(err, NbtError::EncodeDepthExceeded { max_depth: 4 }));
}

struct FailingSink {
	budget: usize,
}

impl Write for FailingSink {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		if self.budget == 0 {
			return Err(io::Error::other("sink full"));
		}
		let n = buf.len().min(self.budget);
		self.budget -= n;
		Ok(n)
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

#[test]
fn sink_failure_propagates() {
	let tag = Tag::named("", Payload::Compound(vec![Tag::named("Seed", Payload::Long(1))]));
	let mut sink = FailingSink { budget: 6 };
	let err = encode_tag(&mut sink, &tag, &EncodeOptions::default()).expect_err("sink fails");
	assert!(matches!(err, NbtError::Io(_)));
}

#[test]
fn verify_round_trip_accepts_canonical_bytes() {
	let bytes = NbtBytes::new().named(10, "").named(3, "x").i32(5).end().build();
	let tag = verify_round_trip(&bytes, &DecodeOptions::default()).expect("canonical bytes verify");
	assert_eq!(tag.get("x").and_then(Tag::as_int), Some(5));
}

#[test]
fn verify_round_trip_reports_trailing_garbage() {
	let bytes = NbtBytes::new().named(10, "").end().raw(&[0xaa]).build();
	let err = verify_round_trip(&bytes, &DecodeOptions::default()).expect_err("trailing byte is not reproduced");
	assert!(matches!(
		err,
		NbtError::RoundTripMismatch {
			offset: 4,
			source_len: 5,
			encoded_len: 4
		}
	));
}

#[test]
fn verify_round_trip_rejects_bare_end_root() {
	let err = verify_round_trip(&[0x00], &DecodeOptions::default()).expect_err("bare end root");
	assert!(matches!(err, NbtError::BareEndRoot));
}
