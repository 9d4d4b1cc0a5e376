use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use enumgen_cli::Commands;
use enumgen_cli::EnumgenCli;
use enumgen_cli::OutputFormat;
use enumgen_core::EnumgenError;
use enumgen_core::OPTIONS_FILE_NAME;
use enumgen_core::generate;
use enumgen_core::load_options;
use enumgen_core::write_code;
use owo_colors::OwoColorize;
use similar::ChangeTag;
use similar::TextDiff;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = EnumgenCli::parse();

	// Respect NO_COLOR env var, --no-color, and non-terminal stdout.
	let use_color = !args.no_color
		&& std::env::var_os("NO_COLOR").is_none()
		&& supports_color::on(supports_color::Stream::Stdout).is_some();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match args.command {
		Some(Commands::Init) => run_init(&args),
		Some(Commands::Generate {
			ref options,
			ref out,
			dry_run,
		}) => run_generate(&args, options.as_deref(), out.as_deref(), dry_run),
		Some(Commands::Check {
			ref options,
			ref out,
			diff,
			format,
		}) => run_check(&args, options.as_deref(), out.as_deref(), diff, format),
		None => {
			eprintln!("No subcommand specified. Run `enumgen --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<EnumgenError>() {
			Ok(enumgen_err) => {
				let report: miette::Report = (*enumgen_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

fn resolve_root(args: &EnumgenCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn resolve_options_path(args: &EnumgenCli, options: Option<&Path>) -> PathBuf {
	options.map_or_else(
		|| resolve_root(args).join(OPTIONS_FILE_NAME),
		Path::to_path_buf,
	)
}

fn run_init(args: &EnumgenCli) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let template_path = root.join("enum.cs.tpl");
	let options_path = root.join(OPTIONS_FILE_NAME);

	if template_path.exists() {
		println!("Template file already exists: {}", template_path.display());
	} else {
		std::fs::write(&template_path, DEFAULT_TEMPLATE)?;
		println!("Created template file: {}", template_path.display());
	}

	if options_path.exists() {
		println!("Options file already exists: {}", options_path.display());
	} else {
		std::fs::write(&options_path, SAMPLE_OPTIONS)?;
		println!("Created options file: {}", options_path.display());
		println!("\nEdit {OPTIONS_FILE_NAME} and run `enumgen generate`.");
	}

	Ok(())
}

fn run_generate(
	args: &EnumgenCli,
	options: Option<&Path>,
	out: Option<&Path>,
	dry_run: bool,
) -> Result<(), Box<dyn std::error::Error>> {
	let options_path = resolve_options_path(args, options);
	let resolved = load_options(&options_path)?;
	let code = generate(&resolved.options);

	if dry_run {
		print!("{code}");
		return Ok(());
	}

	let output = resolve_output(out, &resolved.output, &options_path)?;
	write_code(&output, &code)?;
	println!(
		"{} {}",
		colored!("Generated", green),
		output.display()
	);

	Ok(())
}

fn run_check(
	args: &EnumgenCli,
	options: Option<&Path>,
	out: Option<&Path>,
	show_diff: bool,
	format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
	let options_path = resolve_options_path(args, options);
	let resolved = load_options(&options_path)?;
	let expected = generate(&resolved.options);
	let output = resolve_output(out, &resolved.output, &options_path)?;

	let current = match std::fs::read_to_string(&output) {
		Ok(content) => Some(content),
		Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
		Err(e) => return Err(EnumgenError::from(e).into()),
	};

	let status = match &current {
		None => "missing",
		Some(content) if *content == expected => "ok",
		Some(_) => "stale",
	};

	match format {
		OutputFormat::Json => {
			let report = serde_json::json!({
				"status": status,
				"output": output.display().to_string(),
			});
			println!("{}", serde_json::to_string_pretty(&report)?);
		}
		OutputFormat::Text => {
			match status {
				"ok" => {
					println!(
						"{} {} is up to date",
						colored!("✓", green),
						output.display()
					);
				}
				"missing" => {
					println!(
						"{} {} is missing, run `enumgen generate`",
						colored!("✗", red),
						output.display()
					);
				}
				_ => {
					println!(
						"{} {} is out of date, run `enumgen generate`",
						colored!("✗", red),
						output.display()
					);
					if show_diff {
						print_diff(current.as_deref().unwrap_or(""), &expected);
					}
				}
			}
		}
	}

	if status != "ok" {
		process::exit(1);
	}

	Ok(())
}

fn resolve_output(
	out: Option<&Path>,
	configured: &Option<PathBuf>,
	options_path: &Path,
) -> Result<PathBuf, EnumgenError> {
	out.map(Path::to_path_buf)
		.or_else(|| configured.clone())
		.ok_or_else(|| {
			EnumgenError::MissingOutput {
				path: options_path.display().to_string(),
			}
		})
}

/// Print a unified diff between two strings, colorized.
fn print_diff(current: &str, expected: &str) {
	let diff = TextDiff::from_lines(current, expected);
	for change in diff.iter_all_changes() {
		match change.tag() {
			ChangeTag::Delete => {
				eprint!("  {}", colored!(format!("-{change}"), red));
			}
			ChangeTag::Insert => {
				eprint!("  {}", colored!(format!("+{change}"), green));
			}
			ChangeTag::Equal => {
				eprint!("   {change}");
			}
		}
	}
}

/// Default template written by `enumgen init`. Contains every recognized
/// placeholder token; the generated file is a self-contained C# source with
/// the enum, an extension class, and an equality comparer.
const DEFAULT_TEMPLATE: &str = r#"using System.Collections.Generic;

namespace #NAMESPACE_NAME#
{
	/// <summary>
	/// #ENUM_COMMENT#
	/// </summary>
	public enum #ENUM_NAME#
	{
#VALUES#
	}

	/// <summary>
	/// #ENUM_EXTENSION_COMMENT#
	/// </summary>
	public static partial class #ENUM_EXTENSION_NAME#
	{
		/// <summary>
		/// Number of defined values.
		/// </summary>
		public const int LENGTH = #LENGTH#;

		/// <summary>
		/// Returns every value in declaration order.
		/// </summary>
		public static IEnumerable<#ENUM_NAME#> GetValues()
		{
#GET_VALUES_CONTENTS#
		}

		/// <summary>
		/// Converts the value to its canonical name.
		/// </summary>
		public static string ToName( this #ENUM_NAME# self )
		{
			switch ( self )
			{
#TO_NAME_CONTENTS#
			}

			return string.Empty;
		}

		/// <summary>
		/// Converts a canonical name back to its value.
		/// </summary>
		public static #ENUM_NAME# FromName( string name )
		{
			switch ( name )
			{
#FROM_NAME_CONTENTS#
			}

			return default;
		}

		/// <summary>
		/// Converts the value to its comment text.
		/// </summary>
		public static string ToComment( this #ENUM_NAME# self )
		{
			switch ( self )
			{
#TO_COMMENT_CONTENTS#
			}

			return string.Empty;
		}
	}

	/// <summary>
	/// #COMPARER_COMMENT#
	/// </summary>
	public sealed class #COMPARER_NAME# : IEqualityComparer<#ENUM_NAME#>
	{
		public bool Equals( #ENUM_NAME# x, #ENUM_NAME# y )
		{
			return x == y;
		}

		public int GetHashCode( #ENUM_NAME# obj )
		{
			return ( int )obj;
		}
	}
}
"#;

/// Sample options file written by `enumgen init`.
const SAMPLE_OPTIONS: &str = r#"# enumgen options file. Run `enumgen generate` to produce the output file.

template_path = "enum.cs.tpl"
output = "Generated/Direction.cs"

namespace_name = "Game"
enum_name = "Direction"
enum_comment = "Compass direction"
enum_extension_name = "DirectionExt"
enum_extension_comment = "Extension methods for Direction"
comparer_name = "DirectionComparer"
comparer_comment = "Allocation-free equality comparer for Direction"

# One table per enum member, in declaration order. Set `use_hash_code = true`
# to assign the member a stable hash of its name instead of the default
# auto-incrementing value.
[[values]]
name = "North"
comment = "Top of the map"

[[values]]
name = "South"
comment = "Bottom of the map"
"#;
