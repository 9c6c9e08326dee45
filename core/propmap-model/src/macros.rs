// ---- Mappable derive macro ----
// Generates `type_info`, `read` and `write` for a struct whose mapped fields
// all implement `FieldValue`. Composite fields need a hand-written impl.

/// Implement [`Mappable`](crate::Mappable) for a struct.
///
/// List each mapped field with its type, optionally followed by `=>` and a
/// bracketed list of annotations:
///
/// ```
/// use propmap_model::{mappable, Mappable, MapsTo};
///
/// #[derive(Default)]
/// pub struct Customer {
///     pub name: String,
///     pub age: i32,
/// }
///
/// #[derive(Default)]
/// pub struct CustomerRow {
///     pub full_name: String,
///     pub age: String,
/// }
///
/// mappable!(Customer {
///     name: String => [MapsTo::named("full_name")],
///     age: i32 => [MapsTo::same_name()],
/// });
/// mappable!(CustomerRow { full_name: String, age: String });
///
/// let info = Customer::type_info();
/// assert_eq!(info.properties().len(), 2);
/// assert!(info.has_maps_to());
/// ```
///
/// Fields not listed are invisible to the mapper.
#[macro_export]
macro_rules! mappable {
    ($ty:ident { $( $field:ident : $fty:ty $( => [ $( $ann:expr ),* $(,)? ] )? ),* $(,)? }) => {
        impl $crate::Mappable for $ty {
            fn type_info() -> $crate::TypeInfo {
                $crate::TypeInfo::of::<Self>()
                    $(
                        .with_property(
                            $crate::PropertyInfo::of::<$fty>(stringify!($field))
                                $( $( .annotated($ann) )* )?
                        )
                    )*
            }

            fn read(&self, property: &str) -> $crate::ModelResult<$crate::Value> {
                match property {
                    $(
                        stringify!($field) => Ok($crate::FieldValue::into_value(
                            ::std::clone::Clone::clone(&self.$field),
                        )),
                    )*
                    _ => Err($crate::ModelError::UnknownProperty {
                        type_name: ::std::any::type_name::<Self>(),
                        property: property.to_string(),
                    }),
                }
            }

            #[allow(unused_variables)]
            fn write(&mut self, property: &str, value: $crate::Value) -> $crate::ModelResult<()> {
                match property {
                    $(
                        stringify!($field) => {
                            self.$field = <$fty as $crate::FieldValue>::from_value(value)?;
                            Ok(())
                        }
                    )*
                    _ => Err($crate::ModelError::UnknownProperty {
                        type_name: ::std::any::type_name::<Self>(),
                        property: property.to_string(),
                    }),
                }
            }
        }
    };
}
