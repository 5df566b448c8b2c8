//! Macro for reducing boilerplate when defining record types
//!
//! Each resource record is a plain struct with an `id` and its own fields.
//! The macro generates the struct, its serde shape and the [`Record`]
//! implementation that generic list operations rely on.
//!
//! [`Record`]: crate::core::record::Record

/// Define a record type for a resource
///
/// Every field is declared with the name it has on the JSON surface. Missing
/// fields in incoming JSON take their `Default` value. Fields the record does
/// not declare are kept in `extra` and written back out unchanged.
///
/// # Example
///
/// ```rust,ignore
/// impl_record!(
///     Hotel,
///     Resource::Hotels,
///     ["name", "location"],
///     {
///         name("name"): String,
///         price_per_night("pricePerNight"): f64,
///     }
/// );
/// ```
#[macro_export]
macro_rules! impl_record {
    (
        $(#[$struct_meta:meta])*
        $type:ident,
        $resource:expr,
        [ $( $searchable:literal ),* $(,)? ],
        {
            $(
                $(#[$field_meta:meta])*
                $field:ident ( $json:literal ) : $field_type:ty
            ),* $(,)?
        }
    ) => {
        $(#[$struct_meta])*
        #[derive(Debug, Clone, PartialEq, Default, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(default)]
        pub struct $type {
            /// Identity within the collection, assigned by the store
            pub id: $crate::core::record::RecordId,
            $(
                $(#[$field_meta])*
                #[serde(rename = $json)]
                pub $field: $field_type,
            )*
            /// Caller-supplied fields outside the declared shape
            #[serde(flatten)]
            pub extra: ::serde_json::Map<String, ::serde_json::Value>,
        }

        impl $crate::core::record::Record for $type {
            const RESOURCE: $crate::core::record::Resource = $resource;

            fn id(&self) -> $crate::core::record::RecordId {
                self.id
            }

            fn set_id(&mut self, id: $crate::core::record::RecordId) {
                self.id = id;
            }

            fn field_value(&self, field: &str) -> Option<$crate::core::field::FieldValue> {
                match field {
                    "id" => Some($crate::core::field::FieldValue::from(self.id)),
                    $( $json => Some($crate::core::field::FieldValue::from(self.$field.clone())), )*
                    other => self
                        .extra
                        .get(other)
                        .and_then($crate::core::field::FieldValue::from_json),
                }
            }

            fn searchable_fields() -> &'static [&'static str] {
                &[ $( $searchable ),* ]
            }
        }
    };
}
