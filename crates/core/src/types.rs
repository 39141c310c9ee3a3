//! Core types used throughout the console
//!
//! Records exchanged with the backend: customers, subscriptions and the
//! request bodies used to create or update them. Field names on the wire are
//! camelCase.

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ============================================================================
// Unique Identifiers
// ============================================================================

/// Opaque record identifier.
///
/// The backend may send identifiers as JSON strings or numbers. Both are
/// kept in their textual form so that `"42"` and `42` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Create an identifier from its textual form
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Textual form of the identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is blank
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<u64> for EntityId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de;

        struct EntityIdVisitor;

        impl<'de> de::Visitor<'de> for EntityIdVisitor {
            type Value = EntityId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer identifier")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<EntityId, E> {
                Ok(EntityId::new(v))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<EntityId, E> {
                Ok(EntityId(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<EntityId, E> {
                Ok(EntityId(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<EntityId, E> {
                Ok(EntityId(v.to_string()))
            }

            fn visit_unit<E: de::Error>(self) -> Result<EntityId, E> {
                Ok(EntityId::default())
            }
        }

        deserializer.deserialize_any(EntityIdVisitor)
    }
}

// ============================================================================
// Serde Helpers
// ============================================================================

/// Treat a JSON `null` string field as empty.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept RFC 3339 timestamps, naive ISO timestamps (read as UTC) and Unix
/// epoch numbers in seconds or milliseconds.
///
/// Anything unparsable becomes `None` rather than failing the whole record.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTimestamp {
        Text(String),
        Epoch(i64),
        Fractional(f64),
        Other(serde::de::IgnoredAny),
    }

    let Some(raw) = Option::<RawTimestamp>::deserialize(deserializer)? else {
        return Ok(None);
    };

    Ok(match raw {
        RawTimestamp::Text(text) => parse_timestamp_text(&text),
        RawTimestamp::Epoch(value) => from_epoch(value),
        RawTimestamp::Fractional(value) => from_epoch(value as i64),
        RawTimestamp::Other(_) => None,
    })
}

fn parse_timestamp_text(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Values past the year 5138 in seconds are taken as milliseconds
fn from_epoch(value: i64) -> Option<DateTime<Utc>> {
    if value.abs() >= 100_000_000_000 {
        DateTime::from_timestamp_millis(value)
    } else {
        DateTime::from_timestamp(value, 0)
    }
}

/// Read a price sent as a number, or `null` for zero
fn lenient_price<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(rust_decimal::serde::float_option::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Customer
// ============================================================================

/// A customer record as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: EntityId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub full_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub company_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub mobile_number: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub master_mobile_number: String,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub creation_time: Option<DateTime<Utc>>,
}

impl Customer {
    /// Draft carrying this customer's editable fields
    pub fn to_input(&self) -> CustomerInput {
        CustomerInput {
            full_name: Some(self.full_name.clone()),
            company_name: Some(self.company_name.clone()),
            mobile_number: Some(self.mobile_number.clone()),
            master_mobile_number: Some(self.master_mobile_number.clone()),
        }
    }
}

/// Request body for creating or updating a customer.
///
/// `None` fields are left out of the JSON body, which is how partial
/// updates are expressed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_mobile_number: Option<String>,
}

// ============================================================================
// Subscription
// ============================================================================

/// Billing period of a subscription.
///
/// On the wire this is an integer: 1 for monthly, 4 for yearly. Other codes
/// the backend may grow are carried through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum PeriodType {
    #[default]
    Monthly,
    Yearly,
    Other(u8),
}

impl PeriodType {
    /// Periods offered in forms
    pub const SELECTABLE: [PeriodType; 2] = [PeriodType::Monthly, PeriodType::Yearly];

    /// Wire code
    pub fn code(&self) -> u8 {
        match self {
            PeriodType::Monthly => 1,
            PeriodType::Yearly => 4,
            PeriodType::Other(code) => *code,
        }
    }

    /// Display label
    pub fn label(&self) -> String {
        match self {
            PeriodType::Monthly => "Monthly".to_string(),
            PeriodType::Yearly => "Yearly".to_string(),
            PeriodType::Other(code) => format!("Period {}", code),
        }
    }
}

impl From<u8> for PeriodType {
    fn from(code: u8) -> Self {
        match code {
            1 => PeriodType::Monthly,
            4 => PeriodType::Yearly,
            other => PeriodType::Other(other),
        }
    }
}

impl From<PeriodType> for u8 {
    fn from(period: PeriodType) -> Self {
        period.code()
    }
}

/// A subscription record with the display fields the server derives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: EntityId,
    #[serde(default)]
    pub customer_id: EntityId,
    #[serde(default)]
    pub package_id: EntityId,
    #[serde(default)]
    pub period_type: PeriodType,
    #[serde(
        default,
        serialize_with = "rust_decimal::serde::float::serialize",
        deserialize_with = "lenient_price"
    )]
    pub package_price: Decimal,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub customer_full_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub package_name: String,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub total_amount: Option<Decimal>,
}

impl Subscription {
    /// Draft carrying this subscription's editable fields
    pub fn to_input(&self) -> SubscriptionInput {
        SubscriptionInput {
            customer_id: self.customer_id.to_string(),
            package_id: self.package_id.to_string(),
            period_type: self.period_type,
            package_price: self.package_price,
        }
    }
}

/// Request body for creating or updating a subscription
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionInput {
    pub customer_id: String,
    pub package_id: String,
    pub period_type: PeriodType,
    #[serde(with = "rust_decimal::serde::float")]
    pub package_price: Decimal,
}

// ============================================================================
// Tests
// ============================================================================
