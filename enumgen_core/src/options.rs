use serde::Deserialize;
use serde::Serialize;

/// One member of the generated enumeration.
///
/// ```toml
/// [[values]]
/// name = "North"
/// comment = "Top of the map"
/// use_hash_code = false
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, Eq, PartialEq)]
pub struct EnumValue {
	/// Member name. Expected to be a valid identifier, unique within the
	/// owning options' value sequence. Neither property is enforced here;
	/// a violation simply yields generated code that does not compile.
	pub name: String,
	/// Free-form documentation for the member. May contain embedded line
	/// breaks; each line becomes one documentation line in the generated
	/// code.
	#[serde(default)]
	pub comment: String,
	/// When true, the member is assigned an explicit numeric value derived
	/// from a stable hash of `name` instead of the language's default
	/// auto-incrementing value.
	#[serde(default)]
	pub use_hash_code: bool,
}

impl EnumValue {
	pub fn new(name: impl Into<String>, comment: impl Into<String>, use_hash_code: bool) -> Self {
		Self {
			name: name.into(),
			comment: comment.into(),
			use_hash_code,
		}
	}
}

/// The complete generation request consumed by [`generate`].
///
/// The generator only ever reads these fields; the caller owns and
/// constructs the value. All string fields are substituted verbatim into
/// the template wherever the matching placeholder token appears.
///
/// [`generate`]: crate::generate
#[derive(Debug, Clone, Default, Deserialize, Serialize, Eq, PartialEq)]
pub struct GenerationOptions {
	/// Template text containing zero or more recognized placeholder tokens.
	/// Any other text passes through to the output unchanged.
	pub template: String,
	/// Namespace wrapping the generated declarations.
	#[serde(default)]
	pub namespace_name: String,
	/// Name of the generated enumeration type.
	#[serde(default)]
	pub enum_name: String,
	/// Documentation comment for the enumeration type.
	#[serde(default)]
	pub enum_comment: String,
	/// Name of the generated extension class.
	#[serde(default)]
	pub enum_extension_name: String,
	/// Documentation comment for the extension class.
	#[serde(default)]
	pub enum_extension_comment: String,
	/// Name of the generated equality comparer class.
	#[serde(default)]
	pub comparer_name: String,
	/// Documentation comment for the equality comparer class.
	#[serde(default)]
	pub comparer_comment: String,
	/// Ordered member descriptors. Order is semantically significant: it
	/// determines declaration order and therefore the default numeric
	/// assignment when `use_hash_code` is false. May be empty, which
	/// produces a zero-member enum.
	#[serde(default)]
	pub values: Vec<EnumValue>,
}
