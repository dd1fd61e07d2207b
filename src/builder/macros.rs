//! Macros for ergonomic state machine construction.

/// Generate a `State` implementation for simple enums.
///
/// The enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `Debug`
/// and serde's `Serialize`/`Deserialize` (the calling crate must depend on
/// `serde` with the `derive` feature). Variant names become state names.
///
/// # Example
///
/// ```
/// use turnstile::state_enum;
/// use turnstile::core::State;
///
/// state_enum! {
///     pub enum TripStatus {
///         Requested,
///         Accepted,
///         Completed,
///         Cancelled,
///     }
///     final: [Completed, Cancelled]
/// }
///
/// assert_eq!(TripStatus::Accepted.name(), "Accepted");
/// assert!(TripStatus::Cancelled.is_final());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            serde::Serialize,
            serde::Deserialize
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }
        }
    };
}
