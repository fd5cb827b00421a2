#![allow(missing_docs)]

use nbtcodec::nbt::{DecodeOptions, List, NbtError, Payload, Tag, TagKind, TextOptions, decode, encode, from_text, read_tag, to_text_with_options};
use nbtcodec_testkit::NbtBytes;

fn init_logging() {
	let _ = env_logger::builder().is_test(true).try_init();
}

fn level_dat() -> Vec<u8> {
	NbtBytes::new()
		.named(10, "")
		.named(10, "Data")
		.named(4, "RandomSeed")
		.i64(-7034984500680740558)
		.named(8, "LevelName")
		.string("New World")
		.named(1, "hardcore")
		.u8(0)
		.named(9, "ServerBrands")
		.u8(8)
		.u32(1)
		.string("vanilla")
		.named(11, "WanderingTraderId")
		.u32(4)
		.i32(-1)
		.i32(0x1234)
		.i32(i32::MIN)
		.i32(7)
		.named(9, "ScheduledEvents")
		.u8(0)
		.u32(0)
		.end()
		.end()
		.build()
}

#[test]
fn level_style_document_round_trips_byte_identically() {
	init_logging();
	let bytes = level_dat();

	let root = decode(&bytes).expect("document decodes");
	let data = root.get("Data").expect("Data compound");
	assert_eq!(data.get("RandomSeed").and_then(Tag::as_long), Some(-7034984500680740558));
	assert_eq!(data.get("LevelName").and_then(Tag::as_str), Some("New World"));
	let brands = data.get("ServerBrands").and_then(Tag::as_list).expect("brands");
	assert_eq!(brands.element_kind, TagKind::String);
	assert_eq!(brands.items[0].as_str(), Some("vanilla"));

	assert_eq!(encode(&root).expect("re-encodes"), bytes);
}

#[test]
fn binary_to_text_to_binary() {
	init_logging();
	let bytes = level_dat();
	let root = decode(&bytes).expect("document decodes");

	let text = to_text_with_options(
		&root,
		&TextOptions {
			pretty: true,
			..TextOptions::default()
		},
	).expect("text encodes");
	assert!(text.contains("-7034984500680740558"));
	let back = from_text(&text).expect("text decodes");
	assert_eq!(back, root);
	assert_eq!(encode(&back).expect("encodes"), bytes);
}

#[test]
fn copy_then_edit_leaves_source_bytes_unchanged() {
	let bytes = level_dat();
	let root = decode(&bytes).expect("document decodes");

	let mut edited = root.deep_copy();
	if let Payload::Compound(members) = &mut edited.payload {
		members.push(Tag::named("extra", Payload::List(List::empty())));
	}

	assert_eq!(encode(&root).expect("source encodes"), bytes);
	assert_ne!(encode(&edited).expect("copy encodes"), bytes);
}

#[test]
fn truncated_reader_input_is_an_error_not_a_partial_tree() {
	let bytes = level_dat();
	let cut = &bytes[..bytes.len() / 2];
	let err = read_tag(cut, &DecodeOptions::default()).expect_err("truncated");
	assert!(matches!(err, NbtError::UnexpectedEof { .. }));
}
