use std::fs;
use std::path::PathBuf;

use nbtcodec::nbt::{DecodeOptions, EncodeOptions, Result, TextOptions, encode_with_options, from_text_with_options, to_text_with_options};

use crate::cmd::util::load_tag;

#[derive(clap::Args)]
pub struct ToArgs {
	pub path: PathBuf,
	/// Indent the JSON output.
	#[arg(long)]
	pub pretty: bool,
}

#[derive(clap::Args)]
pub struct FromArgs {
	pub path: PathBuf,
	/// Destination for the binary NBT.
	#[arg(long, short)]
	pub out: PathBuf,
}

/// Print the JSON text form of a binary NBT file.
pub fn run_to_json(args: ToArgs, opt: &DecodeOptions) -> Result<()> {
	let (_, tag) = load_tag(&args.path, opt)?;
	let text = to_text_with_options(
		&tag,
		&TextOptions {
			pretty: args.pretty,
			..TextOptions::default()
		},
	)?;
	println!("{text}");
	Ok(())
}

/// Write the binary NBT form of a JSON text document.
pub fn run_from_json(args: FromArgs, max_depth: u32) -> Result<()> {
	let document = fs::read_to_string(&args.path)?;
	let tag = from_text_with_options(
		&document,
		&TextOptions {
			max_depth,
			..TextOptions::default()
		},
	)?;
	let bytes = encode_with_options(&tag, &EncodeOptions { max_depth })?;
	fs::write(&args.out, &bytes)?;
	log::debug!("encoded {} from {}", tag.kind(), args.path.display());
	println!("wrote {} bytes to {}", bytes.len(), args.out.display());
	Ok(())
}
