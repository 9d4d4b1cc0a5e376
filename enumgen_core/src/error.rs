use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum EnumgenError {
	#[error(transparent)]
	#[diagnostic(code(enumgen::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to parse options file: {0}")]
	#[diagnostic(
		code(enumgen::config_parse),
		help("check that the file is valid TOML with a `template` or `template_path` key and `[[values]]` tables")
	)]
	ConfigParse(String),

	#[error("no template configured in `{path}`")]
	#[diagnostic(
		code(enumgen::missing_template),
		help("set `template` to inline template text or `template_path` to a template file")
	)]
	MissingTemplate { path: String },

	#[error("failed to read template file `{path}`: {reason}")]
	#[diagnostic(code(enumgen::template_read))]
	TemplateRead { path: String, reason: String },

	#[error("no output path configured in `{path}`")]
	#[diagnostic(
		code(enumgen::missing_output),
		help("set `output` in the options file or pass `--out <path>` on the command line")
	)]
	MissingOutput { path: String },
}

pub type EnumgenResult<T> = Result<T, EnumgenError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
