use crate::fragments;
use crate::options::GenerationOptions;
use crate::tokens::Placeholder;

/// Generate the enum source code described by `options`.
///
/// This is a pure function: the output depends only on the input, there is
/// no I/O and no shared state, and repeated calls with identical options
/// return byte-identical text. It may be called concurrently with distinct
/// options without coordination.
///
/// The five per-value fragments are computed independently, then every
/// recognized placeholder token in the template is replaced with its value
/// in a single table-driven pass over [`Placeholder::ALL`]. Replacement is
/// plain all-occurrences literal substitution; template text that is not a
/// recognized token passes through unchanged. The result is returned as-is,
/// with no trailing trim or reformatting.
pub fn generate(options: &GenerationOptions) -> String {
	let enum_name = options.enum_name.as_str();
	let values = options.values.as_slice();

	let length = values.len().to_string();
	let values_block = fragments::values_block(values);
	let get_values_body = fragments::get_values_body(enum_name, values);
	let to_name_body = fragments::to_name_body(enum_name, values);
	let from_name_body = fragments::from_name_body(enum_name, values);
	let to_comment_body = fragments::to_comment_body(enum_name, values);

	let mut output = options.template.clone();

	for placeholder in Placeholder::ALL {
		let replacement = match placeholder {
			Placeholder::NamespaceName => options.namespace_name.as_str(),
			Placeholder::EnumName => enum_name,
			Placeholder::EnumComment => options.enum_comment.as_str(),
			Placeholder::EnumExtensionName => options.enum_extension_name.as_str(),
			Placeholder::EnumExtensionComment => options.enum_extension_comment.as_str(),
			Placeholder::ComparerName => options.comparer_name.as_str(),
			Placeholder::ComparerComment => options.comparer_comment.as_str(),
			Placeholder::Values => values_block.as_str(),
			Placeholder::Length => length.as_str(),
			Placeholder::GetValuesContents => get_values_body.as_str(),
			Placeholder::ToNameContents => to_name_body.as_str(),
			Placeholder::FromNameContents => from_name_body.as_str(),
			Placeholder::ToCommentContents => to_comment_body.as_str(),
		};

		if output.contains(placeholder.token()) {
			output = output.replace(placeholder.token(), replacement);
		}
	}

	output
}
