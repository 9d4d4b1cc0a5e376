//! Fragment builders for the repeated per-value code blocks.
//!
//! Each builder iterates the value sequence once, in order, and emits one
//! block per value. Blocks are joined by line breaks and the trailing
//! whitespace of the whole fragment is trimmed. Indentation inside a
//! fragment uses tabs so the emitted code lines up with the surrounding
//! template.

use crate::options::EnumValue;

/// Stable 32-bit FNV-1a hash of a member name, reinterpreted as `i32` so it
/// can be emitted as an enum member's numeric value.
///
/// The choice of hash is arbitrary as long as it is deterministic; FNV-1a is
/// used here because it is trivial to implement and stable across platforms
/// and runs. Changing it would silently renumber every generated enum that
/// sets `use_hash_code`, so it must be treated as frozen.
pub fn name_hash(name: &str) -> i32 {
	const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
	const FNV_PRIME: u32 = 0x0100_0193;

	let mut hash = FNV_OFFSET_BASIS;
	for byte in name.bytes() {
		hash ^= u32::from(byte);
		hash = hash.wrapping_mul(FNV_PRIME);
	}
	hash as i32
}

/// The member declaration block: a `<summary>` documentation block followed
/// by `Name,` or `Name = hash,` per value. Multi-line comments emit one
/// `<para>` line per line.
pub fn values_block(values: &[EnumValue]) -> String {
	let mut lines = Vec::new();

	for value in values {
		lines.push("\t\t///<summary>".to_string());
		for comment_line in value.comment.split('\n') {
			lines.push(format!("\t\t///<para>{comment_line}</para>"));
		}
		lines.push("\t\t///</summary>".to_string());

		if value.use_hash_code {
			lines.push(format!("\t\t{} = {},", value.name, name_hash(&value.name)));
		} else {
			lines.push(format!("\t\t{},", value.name));
		}
	}

	join_trimmed(&lines)
}

/// The iterator body: one `yield return` per value, in declaration order.
pub fn get_values_body(enum_name: &str, values: &[EnumValue]) -> String {
	let lines: Vec<String> = values
		.iter()
		.map(|value| format!("\t\t\tyield return {enum_name}.{};", value.name))
		.collect();

	join_trimmed(&lines)
}

/// The member-to-string switch body. Each case returns the member's
/// canonical name as a string literal.
pub fn to_name_body(enum_name: &str, values: &[EnumValue]) -> String {
	let lines: Vec<String> = values
		.iter()
		.map(|value| {
			format!(
				"\t\t\t\tcase {enum_name}.{name}: return \"{name}\";",
				name = value.name
			)
		})
		.collect();

	join_trimmed(&lines)
}

/// The string-to-member switch body, the inverse of [`to_name_body`].
/// Case strings match exactly and case-sensitively.
pub fn from_name_body(enum_name: &str, values: &[EnumValue]) -> String {
	let lines: Vec<String> = values
		.iter()
		.map(|value| {
			format!(
				"\t\t\t\tcase \"{name}\": return {enum_name}.{name};",
				name = value.name
			)
		})
		.collect();

	join_trimmed(&lines)
}

/// The member-to-comment switch body. Comments are emitted as C# verbatim
/// string literals (`@"..."`) so embedded line breaks survive without
/// escape processing. A comment containing the `"` delimiter itself is a
/// known unescaped edge case.
pub fn to_comment_body(enum_name: &str, values: &[EnumValue]) -> String {
	let lines: Vec<String> = values
		.iter()
		.map(|value| {
			format!(
				"\t\t\t\tcase {enum_name}.{}: return @\"{}\";",
				value.name, value.comment
			)
		})
		.collect();

	join_trimmed(&lines)
}

fn join_trimmed(lines: &[String]) -> String {
	lines.join("\n").trim_end().to_string()
}
