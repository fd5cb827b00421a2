use std::fmt::Write as _;
use std::path::PathBuf;

use nbtcodec::nbt::{DecodeOptions, Payload, Result, Tag};

use crate::cmd::util::{load_tag, name_label};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Maximum nesting printed before collapsing containers.
	#[arg(long, default_value_t = PrintOptions::default().max_print_depth)]
	pub max_print_depth: u32,
	/// Maximum children or array elements printed per node.
	#[arg(long, default_value_t = PrintOptions::default().max_items)]
	pub max_items: usize,
}

/// Output truncation limits for tree dumps.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of children or array elements printed per node.
	pub max_items: usize,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum recursive print depth for nested containers.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_items: 32,
			max_string_len: 200,
			max_print_depth: 16,
		}
	}
}

/// Decode a file and print its tree.
pub fn run(args: Args, opt: &DecodeOptions) -> Result<()> {
	let (_, tag) = load_tag(&args.path, opt)?;
	let options = PrintOptions {
		max_items: args.max_items,
		max_print_depth: args.max_print_depth,
		..PrintOptions::default()
	};
	print!("{}", render_tree(&tag, options));
	Ok(())
}

/// Render one line per node, indented by nesting.
pub fn render_tree(tag: &Tag, options: PrintOptions) -> String {
	let mut out = String::new();
	render_node(&mut out, tag, 0, options);
	out
}

fn render_node(out: &mut String, tag: &Tag, depth: u32, options: PrintOptions) {
	let pad = "  ".repeat(depth as usize);
	let head = format!("{pad}{} {}", name_label(tag), tag.kind().label());

	let children: &[Tag] = match &tag.payload {
		Payload::List(list) => {
			let _ = writeln!(out, "{head} of {} [{} items]", list.element_kind.label(), list.len());
			&list.items
		}
		Payload::Compound(members) => {
			let _ = writeln!(out, "{head} [{} entries]", members.len());
			members
		}
		payload => {
			let _ = writeln!(out, "{head} = {}", render_scalar(payload, options));
			return;
		}
	};

	if children.is_empty() {
		return;
	}
	if depth + 1 > options.max_print_depth {
		let _ = writeln!(out, "{pad}  ...");
		return;
	}
	for child in children.iter().take(options.max_items) {
		render_node(out, child, depth + 1, options);
	}
	if children.len() > options.max_items {
		let _ = writeln!(out, "{pad}  ... {} more", children.len() - options.max_items);
	}
}

fn render_scalar(payload: &Payload, options: PrintOptions) -> String {
	match payload {
		Payload::End => "end".to_owned(),
		Payload::Byte(v) => format!("{v}b"),
		Payload::Short(v) => format!("{v}s"),
		Payload::Int(v) => v.to_string(),
		Payload::Long(v) => format!("{v}L"),
		Payload::Float(v) => format!("{v}f"),
		Payload::Double(v) => format!("{v}d"),
		Payload::String(v) => format!("{:?}", truncate(v, options.max_string_len)),
		Payload::ByteArray(items) => render_array(items, options.max_items),
		Payload::IntArray(items) => render_array(items, options.max_items),
		Payload::LongArray(items) => render_array(items, options.max_items),
		Payload::List(list) => format!("[{} items]", list.len()),
		Payload::Compound(members) => format!("{{{} entries}}", members.len()),
	}
}

fn render_array<T: ToString>(items: &[T], max_items: usize) -> String {
	let mut parts: Vec<String> = items.iter().take(max_items).map(ToString::to_string).collect();
	if items.len() > max_items {
		parts.push(format!("... {} more", items.len() - max_items));
	}
	format!("[{}]", parts.join(", "))
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}

#[cfg(test)]
mod tests;
