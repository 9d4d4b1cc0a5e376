use std::path::Path;

use crate::EnumgenResult;
use crate::engine::generate;
use crate::options::GenerationOptions;

/// Write generated code to `path` as UTF-8, overwriting any existing file.
///
/// The parent directory is created recursively when missing; a path with no
/// directory component writes into the current directory. Filesystem errors
/// surface unmodified.
pub fn write_code(path: &Path, code: &str) -> EnumgenResult<()> {
	if let Some(parent) = path.parent() {
		if !parent.as_os_str().is_empty() && !parent.exists() {
			std::fs::create_dir_all(parent)?;
		}
	}

	std::fs::write(path, code)?;
	Ok(())
}

/// Generate the code described by `options` and write it to `path`.
pub fn generate_to(path: &Path, options: &GenerationOptions) -> EnumgenResult<()> {
	let code = generate(options);
	write_code(path, &code)
}
