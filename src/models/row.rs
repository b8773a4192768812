//! Sheet rows
//!
//! A row is one named category with an amount for each of the twelve months.
//! Its type is fixed at creation.

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use super::amount::clamp_amount;
use super::ids::RowId;
use super::month::Month;
use crate::error::SheetError;

/// Which side of the ledger a row contributes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryType {
    Income,
    Expense,
    Savings,
}

impl CategoryType {
    pub const ALL: [CategoryType; 3] = [
        CategoryType::Income,
        CategoryType::Expense,
        CategoryType::Savings,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            CategoryType::Income => "income",
            CategoryType::Expense => "expense",
            CategoryType::Savings => "savings",
        }
    }
}

impl fmt::Display for CategoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryType {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == lower)
            .ok_or_else(|| {
                SheetError::Validation(format!(
                    "Unknown row type: {} (expected income, expense or savings)",
                    s.trim()
                ))
            })
    }
}

/// An amount for every month
///
/// Stored as a fixed array so a missing or extra month is unrepresentable.
/// Serialized as a `{"Jan": n, ..., "Dec": n}` map; deserialization rejects
/// maps with missing, unknown or duplicate keys and negative or non-finite
/// amounts.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthValues([f64; 12]);

impl MonthValues {
    /// All months zero
    pub fn zeroed() -> Self {
        Self::default()
    }

    /// Build from raw values; each is clamped to a valid amount
    pub fn from_array(values: [f64; 12]) -> Self {
        Self(values.map(clamp_amount))
    }

    /// The same amount in every month
    pub fn uniform(value: f64) -> Self {
        Self::from_array([value; 12])
    }

    pub fn get(&self, month: Month) -> f64 {
        self.0[month.index()]
    }

    /// Set a month's amount, clamping it to a valid amount
    pub fn set(&mut self, month: Month, value: f64) {
        self.0[month.index()] = clamp_amount(value);
    }

    /// (month, amount) pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (Month, f64)> + '_ {
        Month::ALL.into_iter().map(move |m| (m, self.get(m)))
    }

    pub fn as_array(&self) -> &[f64; 12] {
        &self.0
    }
}

impl Index<Month> for MonthValues {
    type Output = f64;

    fn index(&self, month: Month) -> &f64 {
        &self.0[month.index()]
    }
}

impl Serialize for MonthValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Month::ALL.len()))?;
        for (month, value) in self.iter() {
            map.serialize_entry(month.key(), &value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for MonthValues {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(MonthValuesVisitor)
    }
}

struct MonthValuesVisitor;

impl<'de> Visitor<'de> for MonthValuesVisitor {
    type Value = MonthValues;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map with exactly the keys Jan through Dec")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<MonthValues, A::Error> {
        let mut slots: [Option<f64>; 12] = [None; 12];

        while let Some(key) = access.next_key::<String>()? {
            let month = Month::from_key(&key)
                .ok_or_else(|| de::Error::custom(format!("unknown month key `{}`", key)))?;
            let value: f64 = access.next_value()?;

            if !value.is_finite() || value < 0.0 {
                return Err(de::Error::custom(format!(
                    "amount for {} must be a non-negative number, got {}",
                    month, value
                )));
            }

            let slot = &mut slots[month.index()];
            if slot.is_some() {
                return Err(de::Error::custom(format!("duplicate month key `{}`", key)));
            }
            *slot = Some(value);
        }

        let mut values = [0.0; 12];
        for (month, slot) in Month::ALL.into_iter().zip(slots) {
            values[month.index()] =
                slot.ok_or_else(|| de::Error::custom(format!("missing month key `{}`", month)))?;
        }

        Ok(MonthValues(values))
    }
}

/// A single category row of the sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRow {
    pub id: RowId,

    /// Display name
    pub label: String,

    /// Fixed after creation
    #[serde(rename = "type")]
    kind: CategoryType,

    pub values: MonthValues,
}

impl CategoryRow {
    /// Create a row with an explicit id and values
    pub fn new(
        id: impl Into<RowId>,
        label: impl Into<String>,
        kind: CategoryType,
        values: MonthValues,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
            values,
        }
    }

    /// Create a row with all months at zero
    pub fn blank(id: RowId, label: impl Into<String>, kind: CategoryType) -> Self {
        Self::new(id, label, kind, MonthValues::zeroed())
    }

    pub fn kind(&self) -> CategoryType {
        self.kind
    }

    /// Sum of all twelve months
    pub fn annual_total(&self) -> f64 {
        crate::reports::annual_total(&self.values)
    }
}
