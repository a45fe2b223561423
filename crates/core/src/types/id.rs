//! Newtype IDs for catalog and account entities.
//!
//! The cart and the comparison set both key on product identity; typed IDs
//! make it impossible to hand them a user or store ID by accident.

/// Define a type-safe ID wrapper around `u32`.
///
/// The generated type derives `Serialize`/`Deserialize` with
/// `#[serde(transparent)]` so seed files carry plain numbers, plus `Debug`,
/// `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `Display`, and `From`
/// conversions in both directions.
///
/// # Example
///
/// ```rust
/// # use zarurat_core::define_id;
/// define_id!(ProductId);
/// define_id!(StoreId);
///
/// let product = ProductId::new(7);
/// let store = StoreId::new(7);
///
/// // Different types, so this won't compile:
/// // let _: ProductId = store;
/// # let _ = product;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Create an ID from its raw value.
            #[must_use]
            pub const fn new(id: u32) -> Self {
                Self(id)
            }

            /// The raw value.
            #[must_use]
            pub const fn get(self) -> u32 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(ServiceId);
define_id!(StoreId);
define_id!(UserId);
define_id!(AddressId);
define_id!(OrderId);
define_id!(GroupId);
define_id!(MessageId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn ids_serialize_transparently() {
        let id = ProductId::new(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");

        let back: ProductId = serde_json::from_str("42").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn ids_display_as_raw_value() {
        assert_eq!(UserId::new(3).to_string(), "3");
    }
}
