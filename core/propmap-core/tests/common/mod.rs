//! Shared record types for mapper tests.

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use propmap_model::{
    mappable, Mappable, MapsFrom, MapsTo, ModelError, ModelResult, PropertyInfo, TypeInfo, Value,
};

// ── MapsTo fixtures ──────────────────────────────────────────────

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SourceObject {
    pub source_property: String,
    pub same_property: i32,
    pub single_mapped_property: String,
    pub ignored_property: String,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct DestinationObject {
    pub destination_property: String,
    pub same_property: i32,
    pub destination_mapped_property: String,
    pub ignored_property: String,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct UnmappedDestinationObject {
    pub unrelated_property: String,
}

mappable!(SourceObject {
    source_property: String => [MapsTo::named("destination_property")],
    same_property: i32 => [MapsTo::same_name()],
    single_mapped_property: String => [
        MapsTo::named("destination_mapped_property").for_type::<DestinationObject>()
    ],
    ignored_property: String,
});

mappable!(DestinationObject {
    destination_property: String,
    same_property: i32,
    destination_mapped_property: String,
    ignored_property: String,
});

mappable!(UnmappedDestinationObject {
    unrelated_property: String,
});

/// Scoped to [`UnmappedDestinationObject`], which lacks the named property.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SourceObjectWithNonExistentDestinationProperty {
    pub value: String,
}

mappable!(SourceObjectWithNonExistentDestinationProperty {
    value: String => [MapsTo::named("does_not_exist").for_type::<UnmappedDestinationObject>()],
});

/// Same as above without a type scope.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LenientSourceObject {
    pub value: String,
}

mappable!(LenientSourceObject {
    value: String => [MapsTo::named("does_not_exist")],
});

// ── Implicit pair ────────────────────────────────────────────────

#[derive(Debug, Default, Clone, PartialEq)]
pub struct DataModel {
    pub name: String,
    pub age: i32,
    pub email: String,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct DataContract {
    pub name: String,
    pub age: String,
    pub email: String,
}

mappable!(DataModel { name: String, age: i32, email: String });
mappable!(DataContract { name: String, age: String, email: String });

pub fn data_model(name: &str, age: i32) -> DataModel {
    DataModel {
        name: name.to_string(),
        age,
        email: format!("{}@example.com", name.to_lowercase()),
    }
}

// ── Coercion ─────────────────────────────────────────────────────

#[derive(Debug, Default, Clone, PartialEq)]
pub struct TextRecord {
    pub count: String,
    pub flag: String,
    pub when: String,
    pub ratio: String,
    pub initial: String,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct TypedRecord {
    pub count: i32,
    pub flag: bool,
    pub when: NaiveDate,
    pub ratio: f64,
    pub initial: char,
}

mappable!(TextRecord {
    count: String,
    flag: String,
    when: String,
    ratio: String,
    initial: String,
});

mappable!(TypedRecord {
    count: i32,
    flag: bool,
    when: NaiveDate,
    ratio: f64,
    initial: char,
});

pub fn text_record(count: &str, flag: &str, when: &str) -> TextRecord {
    TextRecord {
        count: count.to_string(),
        flag: flag.to_string(),
        when: when.to_string(),
        ratio: "0.5".to_string(),
        initial: "J".to_string(),
    }
}

// ── Floats and timestamps ────────────────────────────────────────

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Reading {
    pub level: f32,
    pub average: f64,
    pub taken_at: NaiveDateTime,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ReadingText {
    pub level: String,
    pub average: String,
    pub taken_at: String,
}

mappable!(Reading {
    level: f32,
    average: f64,
    taken_at: NaiveDateTime,
});

mappable!(ReadingText {
    level: String,
    average: String,
    taken_at: String,
});

// ── Composite properties ─────────────────────────────────────────

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Address {
    pub street: String,
    pub city: String,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ComplexSourceObject {
    pub name: String,
    pub address: Address,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ComplexDestinationObject {
    pub name: String,
    pub address: Address,
}

fn unknown<T: 'static>(property: &str) -> ModelError {
    ModelError::UnknownProperty {
        type_name: std::any::type_name::<T>(),
        property: property.to_string(),
    }
}

impl Mappable for ComplexSourceObject {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>()
            .with_property(PropertyInfo::of::<String>("name"))
            .with_property(PropertyInfo::composite::<Address>("address"))
    }

    fn read(&self, property: &str) -> ModelResult<Value> {
        match property {
            "name" => Ok(Value::Text(self.name.clone())),
            _ => Err(unknown::<Self>(property)),
        }
    }

    fn write(&mut self, property: &str, value: Value) -> ModelResult<()> {
        match (property, value) {
            ("name", Value::Text(name)) => {
                self.name = name;
                Ok(())
            }
            _ => Err(unknown::<Self>(property)),
        }
    }
}

impl Mappable for ComplexDestinationObject {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>()
            .with_property(PropertyInfo::of::<String>("name"))
            .with_property(PropertyInfo::composite::<Address>("address"))
    }

    fn read(&self, property: &str) -> ModelResult<Value> {
        match property {
            "name" => Ok(Value::Text(self.name.clone())),
            _ => Err(unknown::<Self>(property)),
        }
    }

    fn write(&mut self, property: &str, value: Value) -> ModelResult<()> {
        match (property, value) {
            ("name", Value::Text(name)) => {
                self.name = name;
                Ok(())
            }
            _ => Err(unknown::<Self>(property)),
        }
    }
}

// ── MapsFrom fixtures ────────────────────────────────────────────

#[derive(Debug, Default, Clone, PartialEq)]
pub struct FromSource {
    pub first_name: String,
    pub years: u8,
    pub nickname: String,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct FromDestination {
    pub full_name: String,
    pub age: i64,
    pub nickname: String,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct UnmappedFromSource {
    pub other: String,
}

/// Scoped to [`FromSource`], which lacks the named property.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UnmappedFromDestination {
    pub missing: String,
}

mappable!(FromSource {
    first_name: String,
    years: u8,
    nickname: String,
});

mappable!(FromDestination {
    full_name: String => [MapsFrom::named("first_name")],
    age: i64 => [MapsFrom::named("years").for_type::<FromSource>()],
    nickname: String,
});

mappable!(UnmappedFromSource { other: String });

mappable!(UnmappedFromDestination {
    missing: String => [MapsFrom::named("not_there").for_type::<FromSource>()],
});

// ── One property, several destinations ─────────────────────────

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ContactSource {
    pub email: String,
    pub name: String,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct CrmContact {
    pub email_address: String,
    pub name: String,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct MailingEntry {
    pub address: String,
    pub name: String,
}

mappable!(ContactSource {
    email: String => [
        MapsTo::named("email_address").for_type::<CrmContact>(),
        MapsTo::named("address").for_type::<MailingEntry>(),
    ],
    name: String => [MapsTo::same_name()],
});

mappable!(CrmContact { email_address: String, name: String });
mappable!(MailingEntry { address: String, name: String });

// ── Strategy union ───────────────────────────────────────────────

#[derive(Debug, Default, Clone, PartialEq)]
pub struct UnionSource {
    pub code: i32,
    pub label: String,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct UnionDestination {
    pub code: String,
    pub title: String,
}

mappable!(UnionSource {
    code: i32 => [MapsTo::same_name()],
    label: String,
});

mappable!(UnionDestination {
    code: String,
    title: String => [MapsFrom::named("label")],
});

// ── Mid-plan failure ─────────────────────────────────────────────

#[derive(Debug, Default, Clone, PartialEq)]
pub struct PartialSource {
    pub first: String,
    pub second: String,
    pub third: String,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct PartialDestination {
    pub first: String,
    pub second: i32,
    pub third: String,
}

mappable!(PartialSource { first: String, second: String, third: String });
mappable!(PartialDestination { first: String, second: i32, third: String });

// ── Optional values ──────────────────────────────────────────────

#[derive(Debug, Default, Clone, PartialEq)]
pub struct OptionalSource {
    pub note: Option<String>,
    pub count: Option<i32>,
    pub amount: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct OptionalDestination {
    pub note: Option<String>,
    pub count: Option<String>,
    pub amount: Option<i64>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct RequiredDestination {
    pub note: String,
}

mappable!(OptionalSource {
    note: Option<String>,
    count: Option<i32>,
    amount: Option<String>,
});

mappable!(OptionalDestination {
    note: Option<String>,
    count: Option<String>,
    amount: Option<i64>,
});

mappable!(RequiredDestination { note: String });
