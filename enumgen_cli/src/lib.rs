use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Generate enum boilerplate code from a declarative options file.",
	long_about = "enumgen generates the source code for an enumeration type, its string/name \
	              conversions, an equality comparer, and an iteration helper by filling \
	              placeholder tokens in a text template with values from an options \
	              file.\n\nQuick start:\n  enumgen init      Create a sample enumgen.toml and \
	              template\n  enumgen generate  Write the generated code to the configured \
	              output\n  enumgen check     Verify the output file is up to date"
)]
pub struct EnumgenCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Initialize a project by creating a sample options file and template.
	///
	/// Creates `enumgen.toml` and `enum.cs.tpl` in the project root. Existing
	/// files are left untouched; if both already exist this command is a
	/// no-op and exits successfully.
	Init,
	/// Generate the enum source code and write it to the configured output.
	///
	/// Loads the options file, resolves the template, builds the per-value
	/// code fragments, substitutes every placeholder token, and writes the
	/// result to the `output` path from the options file (creating parent
	/// directories as needed). Use `--dry-run` to print the generated code
	/// instead of writing it.
	Generate {
		/// Path to the options file. Defaults to `enumgen.toml` in the
		/// project root.
		#[arg(long, short)]
		options: Option<PathBuf>,

		/// Destination for the generated code, overriding the `output` key
		/// in the options file.
		#[arg(long)]
		out: Option<PathBuf>,

		/// Print the generated code to stdout without writing any file.
		#[arg(long, default_value_t = false)]
		dry_run: bool,
	},
	/// Check that the generated output file is up to date.
	///
	/// Regenerates the code from the options file and compares it against
	/// the file on disk. Exits with status 1 when the file is missing or
	/// stale, which makes this suitable for CI pipelines.
	Check {
		/// Path to the options file. Defaults to `enumgen.toml` in the
		/// project root.
		#[arg(long, short)]
		options: Option<PathBuf>,

		/// Output path to compare against, overriding the `output` key in
		/// the options file.
		#[arg(long)]
		out: Option<PathBuf>,

		/// Show a unified diff between the file on disk and the expected
		/// generated code.
		#[arg(long, default_value_t = false)]
		diff: bool,

		/// Output format for check results. Use `text` for human-readable
		/// output or `json` for programmatic consumption.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
	Text,
	Json,
}
