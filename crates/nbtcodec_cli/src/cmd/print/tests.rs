use nbtcodec::nbt::{List, Payload, Tag, TagKind};

use super::{PrintOptions, render_tree};

fn sample() -> Tag {
	Tag::named(
		"",
		Payload::Compound(vec![
			Tag::named("Seed", Payload::Long(-7034984500680740558)),
			Tag::named("pos", Payload::List(List::of(TagKind::Double, [Payload::Double(0.5), Payload::Double(64.0)]))),
			Tag::named("ids", Payload::IntArray(vec![1, 2, 3, 4])),
			Tag::named("name", Payload::String("Steve".to_owned())),
		]),
	)
}

#[test]
fn renders_one_line_per_node() {
	let text = render_tree(&sample(), PrintOptions::default());
	let lines: Vec<&str> = text.lines().collect();

	assert_eq!(lines[0], "\"\" TAG_Compound [4 entries]");
	assert_eq!(lines[1], "  \"Seed\" TAG_Long = -7034984500680740558L");
	assert_eq!(lines[2], "  \"pos\" TAG_List of TAG_Double [2 items]");
	assert_eq!(lines[3], "    - TAG_Double = 0.5d");
	assert_eq!(lines[5], "  \"ids\" TAG_Int_Array = [1, 2, 3, 4]");
	assert_eq!(lines[6], "  \"name\" TAG_String = \"Steve\"");
	assert_eq!(lines.len(), 7);
}

#[test]
fn truncates_items_and_depth() {
	let options = PrintOptions {
		max_items: 2,
		max_print_depth: 1,
		..PrintOptions::default()
	};
	let text = render_tree(&sample(), options);

	assert!(text.contains("  ... 2 more"), "compound children should be capped: {text}");
	assert!(text.contains("    ..."), "list below depth limit should collapse: {text}");
}

#[test]
fn long_arrays_are_elided() {
	let tag = Tag::named("a", Payload::ByteArray(vec![0; 5]));
	let options = PrintOptions {
		max_items: 2,
		..PrintOptions::default()
	};
	assert_eq!(render_tree(&tag, options), "\"a\" TAG_Byte_Array = [0, 0, ... 3 more]\n");
}
