#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use nbtcodec::nbt::DEFAULT_MAX_DEPTH;

mod cmd;

#[derive(Parser)]
#[command(name = "nbtcodec", about = "Named Binary Tag inspection and conversion tools")]
struct Cli {
	/// Reject bytes left over after the root tag.
	#[arg(long, global = true)]
	strict: bool,
	/// Maximum List/Compound nesting depth accepted while decoding.
	#[arg(long, global = true, default_value_t = DEFAULT_MAX_DEPTH)]
	max_depth: u32,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Summarize the root tag of a file.
	Info(cmd::info::Args),
	/// Print the decoded tree.
	Print(cmd::print::Args),
	/// Convert binary NBT to the JSON text representation.
	ToJson(cmd::json::ToArgs),
	/// Convert the JSON text representation to binary NBT.
	FromJson(cmd::json::FromArgs),
	/// Decode, re-encode, and require byte-identical output.
	Check(cmd::check::Args),
}

fn main() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> nbtcodec::nbt::Result<()> {
	let cli = Cli::parse();
	let decode_options = cmd::util::decode_options(cli.strict, cli.max_depth);

	match cli.command {
		Commands::Info(args) => cmd::info::run(args, &decode_options),
		Commands::Print(args) => cmd::print::run(args, &decode_options),
		Commands::ToJson(args) => cmd::json::run_to_json(args, &decode_options),
		Commands::FromJson(args) => cmd::json::run_from_json(args, cli.max_depth),
		Commands::Check(args) => cmd::check::run(args, &decode_options),
	}
}
