// SPDX-License-Identifier: AGPL-3.0-or-later

/// Declares a field-less enum whose variants are identified by a symbolic name on the wire.
///
/// Generates `ALL`, `as_str`, `FromStr` and `Display`. Parsing is case-sensitive, the given error
/// expression is returned for unknown names.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$variant_meta:meta])* $variant:ident = $wire:literal ),+ $(,)?
        }
        unknown($input:ident) => $error:expr;
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$variant_meta])* $variant ),+
        }

        impl $name {
            /// All variants in declaration order.
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            /// Returns the symbolic name of this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire ),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::cdt::error::WireNameError;

            fn from_str($input: &str) -> Result<Self, Self::Err> {
                match $input {
                    $( $wire => Ok($name::$variant), )+
                    _ => Err($error),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }
    };
}
