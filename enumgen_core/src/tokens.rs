use std::fmt::Display;

/// A recognized placeholder token in a template.
///
/// Tokens are fixed literal substrings; substitution is plain, non-regex,
/// all-occurrences text replacement. Any template text that is not one of
/// these tokens passes through to the output untouched.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Placeholder {
	/// `#NAMESPACE_NAME#`
	NamespaceName,
	/// `#ENUM_NAME#`
	EnumName,
	/// `#ENUM_COMMENT#`
	EnumComment,
	/// `#ENUM_EXTENSION_NAME#`
	EnumExtensionName,
	/// `#ENUM_EXTENSION_COMMENT#`
	EnumExtensionComment,
	/// `#COMPARER_NAME#`
	ComparerName,
	/// `#COMPARER_COMMENT#`
	ComparerComment,
	/// `#VALUES#` — the member declaration block.
	Values,
	/// `#LENGTH#` — decimal count of the value sequence.
	Length,
	/// `#GET_VALUES_CONTENTS#` — the iterator body.
	GetValuesContents,
	/// `#TO_NAME_CONTENTS#` — the member-to-string switch body.
	ToNameContents,
	/// `#FROM_NAME_CONTENTS#` — the string-to-member switch body.
	FromNameContents,
	/// `#TO_COMMENT_CONTENTS#` — the member-to-comment switch body.
	ToCommentContents,
}

impl Placeholder {
	/// Every recognized token, in substitution order. The order is fixed but
	/// not semantically significant: tokens are syntactically distinct fixed
	/// strings, so no replacement can produce another token unless a member
	/// name or comment literally contains one (an accepted, undefended edge
	/// case).
	pub const ALL: [Placeholder; 13] = [
		Placeholder::NamespaceName,
		Placeholder::EnumName,
		Placeholder::EnumComment,
		Placeholder::EnumExtensionName,
		Placeholder::EnumExtensionComment,
		Placeholder::ComparerName,
		Placeholder::ComparerComment,
		Placeholder::Values,
		Placeholder::Length,
		Placeholder::GetValuesContents,
		Placeholder::ToNameContents,
		Placeholder::FromNameContents,
		Placeholder::ToCommentContents,
	];

	/// The literal token string this placeholder matches in a template.
	pub fn token(self) -> &'static str {
		match self {
			Placeholder::NamespaceName => "#NAMESPACE_NAME#",
			Placeholder::EnumName => "#ENUM_NAME#",
			Placeholder::EnumComment => "#ENUM_COMMENT#",
			Placeholder::EnumExtensionName => "#ENUM_EXTENSION_NAME#",
			Placeholder::EnumExtensionComment => "#ENUM_EXTENSION_COMMENT#",
			Placeholder::ComparerName => "#COMPARER_NAME#",
			Placeholder::ComparerComment => "#COMPARER_COMMENT#",
			Placeholder::Values => "#VALUES#",
			Placeholder::Length => "#LENGTH#",
			Placeholder::GetValuesContents => "#GET_VALUES_CONTENTS#",
			Placeholder::ToNameContents => "#TO_NAME_CONTENTS#",
			Placeholder::FromNameContents => "#FROM_NAME_CONTENTS#",
			Placeholder::ToCommentContents => "#TO_COMMENT_CONTENTS#",
		}
	}
}

impl Display for Placeholder {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.token())
	}
}
