use crate::EnumValue;
use crate::GenerationOptions;

/// A template exercising every recognized placeholder token at least once.
pub const FULL_TEMPLATE: &str = r"// #ENUM_COMMENT#
namespace #NAMESPACE_NAME#
{
	enum #ENUM_NAME#
	{
#VALUES#
	}

	// #ENUM_EXTENSION_COMMENT#
	static class #ENUM_EXTENSION_NAME#
	{
		public const int LENGTH = #LENGTH#;

		public static IEnumerable<#ENUM_NAME#> GetValues()
		{
#GET_VALUES_CONTENTS#
		}

		public static string ToName(this #ENUM_NAME# self)
		{
			switch (self)
			{
#TO_NAME_CONTENTS#
			}
			return string.Empty;
		}

		public static #ENUM_NAME# FromName(string name)
		{
			switch (name)
			{
#FROM_NAME_CONTENTS#
			}
			return default;
		}

		public static string ToComment(this #ENUM_NAME# self)
		{
			switch (self)
			{
#TO_COMMENT_CONTENTS#
			}
			return string.Empty;
		}
	}

	// #COMPARER_COMMENT#
	sealed class #COMPARER_NAME# : IEqualityComparer<#ENUM_NAME#> {}
}
";

pub fn direction_values() -> Vec<EnumValue> {
	vec![
		EnumValue::new("North", "Top", false),
		EnumValue::new("South", "Bottom", false),
	]
}

pub fn direction_options(template: &str) -> GenerationOptions {
	GenerationOptions {
		template: template.to_string(),
		namespace_name: "Game".to_string(),
		enum_name: "Direction".to_string(),
		enum_comment: "Compass direction".to_string(),
		enum_extension_name: "DirectionExt".to_string(),
		enum_extension_comment: "Extension methods for Direction".to_string(),
		comparer_name: "DirectionComparer".to_string(),
		comparer_comment: "Allocation-free equality comparer".to_string(),
		values: direction_values(),
	}
}
