use crate::nbt::{List, Payload, Tag, TagKind};

#[test]
fn count_follows_payload() {
	assert_eq!(Tag::named("s", Payload::String("héllo".to_owned())).count(), 6);
	assert_eq!(Tag::named("a", Payload::IntArray(vec![1, 2, 3])).count(), 3);
	assert_eq!(Tag::named("l", Payload::List(List::of(TagKind::Byte, [Payload::Byte(1), Payload::Byte(2)]))).count(), 2);
	assert_eq!(Tag::named("c", Payload::Compound(vec![Tag::named("x", Payload::Int(1))])).count(), 1);
	assert_eq!(Tag::named("i", Payload::Long(9)).count(), 0);
	assert_eq!(Tag::end().count(), 0);
}

#[test]
fn empty_name_is_distinct_from_nameless() {
	let named = Tag::named("", Payload::Int(1));
	let element = Tag::element(Payload::Int(1));

	assert_eq!(named.name(), Some(""));
	assert!(!named.is_list_element());
	assert_eq!(element.name(), None);
	assert!(element.is_list_element());
	assert_ne!(named, element);
}

#[test]
fn empty_list_uses_end_element_kind() {
	let list = List::empty();
	assert_eq!(list.element_kind, TagKind::End);
	assert!(list.is_empty());
}

#[test]
fn accessors_are_checked_per_kind() {
	let tag = Tag::named("Seed", Payload::Long(-7));
	assert_eq!(tag.as_long(), Some(-7));
	assert_eq!(tag.as_int(), None);
	assert_eq!(tag.as_str(), None);
	assert_eq!(tag.kind(), TagKind::Long);
}

#[test]
fn get_returns_first_member_in_wire_order() {
	let root = Tag::named(
		"",
		Payload::Compound(vec![
			Tag::named("dup", Payload::Int(1)),
			Tag::named("other", Payload::Byte(0)),
			Tag::named("dup", Payload::Int(2)),
		]),
	);

	assert_eq!(root.get("dup").and_then(Tag::as_int), Some(1));
	assert!(root.get("missing").is_none());
	assert!(Tag::named("x", Payload::Int(0)).get("dup").is_none());
}
