//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}

/// Create (if needed) and return a per-test scratch directory under the target dir.
pub fn scratch_dir(name: &str) -> PathBuf {
	let dir = target_dir().join("nbtcodec-test-scratch").join(name);
	std::fs::create_dir_all(&dir).unwrap_or_else(|err| panic!("create scratch dir {}: {err}", dir.display()));
	dir
}

/// Parse captured stdout as JSON.
pub fn json_from_stdout(stdout: &[u8]) -> serde_json::Value {
	serde_json::from_slice(stdout).unwrap_or_else(|err| panic!("stdout should be valid json: {err}"))
}

/// Builder for hand-assembled NBT wire bytes.
///
/// All multi-byte values are written big-endian.
#[derive(Debug, Default, Clone)]
pub struct NbtBytes {
	bytes: Vec<u8>,
}

impl NbtBytes {
	/// Empty buffer.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a tag id byte.
	pub fn tag(self, id: u8) -> Self {
		self.u8(id)
	}

	/// Append a tag id byte followed by a length-prefixed name.
	pub fn named(self, id: u8, name: &str) -> Self {
		self.tag(id).string(name)
	}

	/// Append a `TAG_End` byte.
	pub fn end(self) -> Self {
		self.tag(0)
	}

	/// Append a `u16` length prefix and UTF-8 bytes.
	pub fn string(self, text: &str) -> Self {
		let len = u16::try_from(text.len()).expect("test string fits u16");
		self.u16(len).raw(text.as_bytes())
	}

	/// Append one byte.
	pub fn u8(mut self, value: u8) -> Self {
		self.bytes.push(value);
		self
	}

	/// Append a big-endian `u16`.
	pub fn u16(self, value: u16) -> Self {
		self.raw(&value.to_be_bytes())
	}

	/// Append a big-endian `i16`.
	pub fn i16(self, value: i16) -> Self {
		self.raw(&value.to_be_bytes())
	}

	/// Append a big-endian `u32`.
	pub fn u32(self, value: u32) -> Self {
		self.raw(&value.to_be_bytes())
	}

	/// Append a big-endian `i32`.
	pub fn i32(self, value: i32) -> Self {
		self.raw(&value.to_be_bytes())
	}

	/// Append a big-endian `i64`.
	pub fn i64(self, value: i64) -> Self {
		self.raw(&value.to_be_bytes())
	}

	/// Append a big-endian `f32`.
	pub fn f32(self, value: f32) -> Self {
		self.raw(&value.to_be_bytes())
	}

	/// Append a big-endian `f64`.
	pub fn f64(self, value: f64) -> Self {
		self.raw(&value.to_be_bytes())
	}

	/// Append raw bytes.
	pub fn raw(mut self, bytes: &[u8]) -> Self {
		self.bytes.extend_from_slice(bytes);
		self
	}

	/// Finish and return the bytes.
	pub fn build(self) -> Vec<u8> {
		self.bytes
	}
}
