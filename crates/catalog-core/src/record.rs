//! The generated record type and its column layout.

use crate::config::InjectionField;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Column order shared by every consumer of [`ProductRecord`].
pub const PRODUCT_COLUMNS: [&str; 7] = [
    "id",
    "name",
    "brand",
    "category",
    "description",
    "created_at",
    "updated_at",
];

/// One row of the `products` dataset.
///
/// Field declaration order matches [`PRODUCT_COLUMNS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Stable identifier derived from (seed, row index)
    pub id: String,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductRecord {
    /// Mutably borrow the text of an injectable field.
    pub fn field_mut(&mut self, field: InjectionField) -> &mut String {
        match field {
            InjectionField::Name => &mut self.name,
            InjectionField::Description => &mut self.description,
            InjectionField::Brand => &mut self.brand,
            InjectionField::Category => &mut self.category,
        }
    }
}

/// `strftime` layout for timestamps handed to loaders: RFC 3339 with an
/// explicit `+00:00` offset and fractional seconds only when non-zero.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";

/// Render a timestamp with [`TIMESTAMP_FORMAT`], e.g.
/// `2025-01-01T00:02:00+00:00`.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}
