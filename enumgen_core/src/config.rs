use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::EnumgenError;
use crate::EnumgenResult;
use crate::options::EnumValue;
use crate::options::GenerationOptions;

/// Default options file name looked up by the CLI.
pub const OPTIONS_FILE_NAME: &str = "enumgen.toml";

/// Declarative generation request as it appears on disk.
///
/// ```toml
/// template_path = "enum.cs.tpl"
/// output = "Assets/Scripts/Direction.cs"
///
/// namespace_name = "Game"
/// enum_name = "Direction"
/// enum_comment = "Compass direction"
///
/// [[values]]
/// name = "North"
/// comment = "Top of the map"
/// ```
///
/// The template is provided either inline (`template`) or as a file path
/// (`template_path`), resolved relative to the options file's directory.
/// When both are present the inline text wins. All other string fields
/// default to empty and are substituted verbatim.
#[derive(Debug, Default, Deserialize)]
pub struct OptionsFile {
	/// Inline template text.
	#[serde(default)]
	pub template: Option<String>,
	/// Path to a template file, relative to the options file.
	#[serde(default)]
	pub template_path: Option<PathBuf>,
	/// Destination for the generated code, relative to the options file.
	#[serde(default)]
	pub output: Option<PathBuf>,
	#[serde(default)]
	pub namespace_name: String,
	#[serde(default)]
	pub enum_name: String,
	#[serde(default)]
	pub enum_comment: String,
	#[serde(default)]
	pub enum_extension_name: String,
	#[serde(default)]
	pub enum_extension_comment: String,
	#[serde(default)]
	pub comparer_name: String,
	#[serde(default)]
	pub comparer_comment: String,
	#[serde(default)]
	pub values: Vec<EnumValue>,
}

/// An [`OptionsFile`] with its template resolved and its paths anchored to
/// the options file's directory, ready to hand to the generator.
#[derive(Debug)]
pub struct ResolvedOptions {
	pub options: GenerationOptions,
	/// Destination path for the generated code, when configured.
	pub output: Option<PathBuf>,
}

impl OptionsFile {
	/// Parse an options file from TOML text.
	pub fn from_toml_str(content: &str) -> EnumgenResult<Self> {
		toml::from_str(content).map_err(|e| EnumgenError::ConfigParse(e.to_string()))
	}

	/// Read and parse the options file at `path`.
	pub fn load(path: &Path) -> EnumgenResult<Self> {
		let content = std::fs::read_to_string(path)?;
		Self::from_toml_str(&content)
	}

	/// Resolve the template and output paths against `root` (the options
	/// file's directory) and produce the generation request. Fails with
	/// `MissingTemplate` when neither `template` nor `template_path` is
	/// set; `origin` names the options file in that error.
	pub fn resolve(self, root: &Path, origin: &Path) -> EnumgenResult<ResolvedOptions> {
		let template = match (self.template, self.template_path) {
			(Some(template), _) => template,
			(None, Some(rel_path)) => {
				let abs_path = root.join(&rel_path);
				std::fs::read_to_string(&abs_path).map_err(|e| {
					EnumgenError::TemplateRead {
						path: rel_path.display().to_string(),
						reason: e.to_string(),
					}
				})?
			}
			(None, None) => {
				return Err(EnumgenError::MissingTemplate {
					path: origin.display().to_string(),
				});
			}
		};

		let options = GenerationOptions {
			template,
			namespace_name: self.namespace_name,
			enum_name: self.enum_name,
			enum_comment: self.enum_comment,
			enum_extension_name: self.enum_extension_name,
			enum_extension_comment: self.enum_extension_comment,
			comparer_name: self.comparer_name,
			comparer_comment: self.comparer_comment,
			values: self.values,
		};

		Ok(ResolvedOptions {
			options,
			output: self.output.map(|rel_path| root.join(rel_path)),
		})
	}
}

/// Load and resolve the options file at `path` in one step.
pub fn load_options(path: &Path) -> EnumgenResult<ResolvedOptions> {
	let file = OptionsFile::load(path)?;
	let root = path.parent().unwrap_or_else(|| Path::new(""));
	file.resolve(root, path)
}
