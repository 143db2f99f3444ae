//! Macros for defining kind enums.

use derive_more::{Display, Error};

/// Macro for defining a kind enum backed by a numeric identifier.
///
/// # Example
///
/// ```rust
/// # use common::define_kind;
///
/// define_kind! {
///     #[doc = "Shape kind."]
///     enum Kind {
///         #[doc = "A cube"]
///         Cube = 1,
///
///         #[doc = "A sphere"]
///         Sphere = 3,
///     }
/// }
///
/// assert_eq!(Kind::try_from(3_i64).unwrap(), Kind::Sphere);
/// assert!(Kind::try_from(2_i64).is_err());
/// ```
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_kind {
    (
        #[doc = $doc:literal]
        enum $name:ident {
            $(
                #[doc = $variant_doc:literal]
                $variant:ident = $value:expr
            ),* $(,)?
        }
    ) => {
        #[derive(
            Clone,
            Copy,
            Debug,
            $crate::private::strum::Display,
            $crate::private::strum::EnumString,
            Eq,
            Hash,
            PartialEq,
        )]
        #[cfg_attr(
            feature = "serde",
            derive(
                $crate::private::serde::Deserialize,
                $crate::private::serde::Serialize,
            ),
            serde(rename_all = "SCREAMING_SNAKE_CASE"),
        )]
        #[doc = $doc]
        #[repr(u8)]
        #[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
        pub enum $name {
            $(
                 #[doc = $variant_doc]
                 $variant = $value,
            )*
        }

        impl $name {
            /// Converts this into its [`u8`] representation.
            #[must_use]
            pub const fn u8(self) -> u8 {
                self as u8
            }
        }

        impl ::core::convert::TryFrom<i64> for $name {
            type Error = $crate::UnknownKind;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                match u8::try_from(value) {
                    $(
                        Ok(v) if Self::$variant.u8() == v => Ok(Self::$variant),
                    )*
                    _ => Err($crate::UnknownKind {
                        kind: ::core::stringify!($name),
                        value,
                    }),
                }
            }
        }
    };
}

/// Error of converting a numeric identifier into a kind enum.
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
#[display("unknown `{kind}` value: {value}")]
pub struct UnknownKind {
    /// Name of the kind enum.
    pub kind: &'static str,

    /// Identifier that matched no variant.
    pub value: i64,
}
