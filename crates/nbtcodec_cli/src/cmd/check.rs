use std::fs;
use std::path::PathBuf;

use nbtcodec::nbt::{DecodeOptions, Result, verify_round_trip};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
}

/// Verify that a file re-encodes byte-identically.
pub fn run(args: Args, opt: &DecodeOptions) -> Result<()> {
	let bytes = fs::read(&args.path)?;
	let tag = verify_round_trip(&bytes, opt)?;
	println!("ok: {} bytes, root {}", bytes.len(), tag.kind());
	Ok(())
}
