use std::path::PathBuf;

use nbtcodec::nbt::{DecodeOptions, Result};

use crate::cmd::util::{load_tag, tree_stats};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Emit the summary as JSON.
	#[arg(long)]
	pub json: bool,
}

#[derive(serde::Serialize)]
struct InfoReport {
	path: String,
	bytes: usize,
	root_kind: &'static str,
	root_id: u8,
	root_name: Option<String>,
	root_count: usize,
	nodes: usize,
	depth: usize,
}

/// Print a summary of the root tag.
pub fn run(args: Args, opt: &DecodeOptions) -> Result<()> {
	let Args { path, json } = args;

	let (bytes, tag) = load_tag(&path, opt)?;
	let stats = tree_stats(&tag);
	let report = InfoReport {
		path: path.display().to_string(),
		bytes: bytes.len(),
		root_kind: tag.kind().label(),
		root_id: tag.kind().id(),
		root_name: tag.name.clone(),
		root_count: tag.count(),
		nodes: stats.nodes,
		depth: stats.depth,
	};

	if json {
		println!("{}", serde_json::to_string_pretty(&report)?);
		return Ok(());
	}

	println!("path: {}", report.path);
	println!("bytes: {}", report.bytes);
	println!("root_kind: {}", tag.kind());
	println!("root_name: {}", report.root_name.as_deref().map_or("-".to_owned(), |name| format!("{name:?}")));
	println!("root_count: {}", report.root_count);
	println!("nodes: {}", report.nodes);
	println!("depth: {}", report.depth);

	Ok(())
}
