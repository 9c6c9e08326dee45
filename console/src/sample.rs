//! Sample records mapped by the console.

use propmap_model::{mappable, MapsTo};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct DataModel {
    pub string_field: String,
    pub integer_field: i32,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct DataContract {
    pub string_property: String,
    pub integer_property: String,
}

mappable!(DataModel {
    string_field: String => [MapsTo::named("string_property")],
    integer_field: i32 => [MapsTo::named("integer_property")],
});

mappable!(DataContract {
    string_property: String,
    integer_property: String,
});
