use std::fs;
use std::path::Path;

use nbtcodec::nbt::{DecodeOptions, Payload, Result, Tag, decode_with_options};

/// Build decode options from global CLI flags.
pub(crate) fn decode_options(strict: bool, max_depth: u32) -> DecodeOptions {
	DecodeOptions {
		max_depth,
		strict_trailing: strict,
		..DecodeOptions::default()
	}
}

/// Read a file and decode its root tag.
pub(crate) fn load_tag(path: &Path, opt: &DecodeOptions) -> Result<(Vec<u8>, Tag)> {
	let bytes = fs::read(path)?;
	log::debug!("read {} bytes from {}", bytes.len(), path.display());
	let tag = decode_with_options(&bytes, opt)?;
	Ok((bytes, tag))
}

/// Node count and deepest List/Compound nesting of a tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct TreeStats {
	pub nodes: usize,
	pub depth: usize,
}

pub(crate) fn tree_stats(tag: &Tag) -> TreeStats {
	let children: &[Tag] = match &tag.payload {
		Payload::List(list) => &list.items,
		Payload::Compound(members) => members,
		_ => return TreeStats { nodes: 1, depth: 0 },
	};

	let mut stats = TreeStats { nodes: 1, depth: 1 };
	for child in children {
		let child_stats = tree_stats(child);
		stats.nodes += child_stats.nodes;
		stats.depth = stats.depth.max(child_stats.depth + 1);
	}
	stats
}

/// Render a name for display, distinguishing nameless list elements.
pub(crate) fn name_label(tag: &Tag) -> String {
	match tag.name() {
		Some(name) => format!("{name:?}"),
		None => "-".to_owned(),
	}
}
