//! Boolean method overrides driven by card fields.
//!
//! Each descriptor ties a [`CardConfig`](crate::domain::CardConfig) field to
//! a single-line C# method of the shape
//! `public override bool <Method>() { return <bool>; }`.
//! Adding a new override is a new table entry.

use crate::domain::entities::CardConfig;

/// Static declaration of one boolean override.
#[derive(Debug, Clone, Copy)]
pub struct OverrideDescriptor {
    /// Card field name as stored (`allowMultiple`).
    pub field: &'static str,
    /// Target C# method.
    pub method: &'static str,
    /// Reads the configured value; `None` leaves the method untouched.
    pub value: fn(&CardConfig) -> Option<bool>,
}

impl OverrideDescriptor {
    /// The canonical single-line implementation for `value`.
    pub fn implementation(&self, value: bool) -> String {
        format!(
            "public override bool {}() {{ return {}; }}",
            self.method, value
        )
    }
}

pub static OVERRIDES: &[OverrideDescriptor] = &[OverrideDescriptor {
    field: "allowMultiple",
    method: "GetAllowMultiple",
    value: |card| card.allow_multiple,
}];

pub fn find_override(field: &str) -> Option<&'static OverrideDescriptor> {
    OVERRIDES.iter().find(|o| o.field == field)
}
