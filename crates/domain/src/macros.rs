//! Macro for implementing Display and FromStr for labelled choice enums
//!
//! Search form selects are closed sets of labelled choices ("Dog",
//! "Small & Furry", "Doesn't Matter", ...). This macro provides a single
//! implementation of the label mapping, `Display`, and case-insensitive
//! `FromStr`, so form parsing and rendering never drift apart.
//!
//! # Example
//!
//! ```rust
//! use petmatch_domain::impl_choice_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Coat {
//!     Short,
//!     Long,
//! }
//!
//! impl_choice_conversions!(Coat {
//!     Short => "Short",
//!     Long => "Long",
//! });
//!
//! assert_eq!("long".parse::<Coat>(), Ok(Coat::Long));
//! assert_eq!(Coat::ALL.len(), 2);
//! ```

/// Implements `label`, `ALL`, Display and FromStr for choice enums
///
/// This macro generates:
/// - `ALL`: every variant in declaration (display) order
/// - `label()`: the user-facing label of a variant
/// - Display trait: writes the label
/// - FromStr trait: parses labels case-insensitively, ignoring surrounding
///   whitespace
#[macro_export]
macro_rules! impl_choice_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Every choice, in the order it is offered to the user.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// User-facing label of this choice.
            pub fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                $(
                    if trimmed.eq_ignore_ascii_case($str) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}
