macro_rules! data_element_registry {
	($(#[$enum_meta:meta])* $vis:vis enum $enum_id:ident { $($(#[$meta:meta])* $id:ident : $code:literal => $desc:literal),* $(,)? }) => {
		$(#[$enum_meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
		$vis enum $enum_id {
			$($(#[$meta])* $id),*
		}

		impl $enum_id {
			pub const COUNT: usize = $crate::macros::data_element_registry!(@count $($id,)*);
			pub const LIST: [Self; Self::COUNT] = [$(Self::$id),*];

			pub fn from_code(code: &str) -> Option<Self> {
				match code {
					$($code => Some(Self::$id),)*
					_ => None
				}
			}

			pub fn code(&self) -> &'static str {
				match self {
					$(Self::$id => $code),*
				}
			}

			pub fn description(&self) -> &'static str {
				match self {
					$(Self::$id => $desc),*
				}
			}
		}

		impl std::fmt::Display for $enum_id {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				f.write_str(self.code())
			}
		}
	};
	(@count $a:ident, $($rest:ident,)*) => {
		1usize + $crate::macros::data_element_registry!(@count $($rest,)*)
	};
	(@count) => {
		0usize
	}
}

/// Enums whose variant names are their wire codes (jurisdictions, country
/// identifiers, physical descriptor vocabularies). Serde serializes the
/// variant name, which is exactly the code.
macro_rules! coded_enum {
	($(#[$enum_meta:meta])* $vis:vis enum $enum_id:ident { $($(#[$meta:meta])* $id:ident),* $(,)? }) => {
		$(#[$enum_meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
		$vis enum $enum_id {
			$($(#[$meta])* $id),*
		}

		impl $enum_id {
			pub const COUNT: usize = $crate::macros::coded_enum!(@count $($id,)*);
			pub const LIST: [Self; Self::COUNT] = [$(Self::$id),*];

			pub fn from_code(code: &str) -> Option<Self> {
				$(
					if code == stringify!($id) {
						return Some(Self::$id);
					}
				)*

				None
			}

			pub fn code(&self) -> &'static str {
				match self {
					$(Self::$id => stringify!($id)),*
				}
			}
		}

		impl std::fmt::Display for $enum_id {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				f.write_str(self.code())
			}
		}
	};
	(@count $a:ident, $($rest:ident,)*) => {
		1usize + $crate::macros::coded_enum!(@count $($rest,)*)
	};
	(@count) => {
		0usize
	}
}

pub(crate) use coded_enum;
pub(crate) use data_element_registry;
