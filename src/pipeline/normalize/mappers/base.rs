use serde_json::Value;

use crate::domain::{Company, RecordFields, SourceKind};

/// Strategy trait for mapping one feed's raw records onto the canonical
/// company shape. Returning `None` drops the record silently; per-record
/// mapping is never an error.
pub trait SourceMapper: Send + Sync {
    /// The feed kind this mapper handles
    fn kind(&self) -> SourceKind;

    /// Map one raw record into a canonical company, or `None` when the
    /// record cannot be identified (missing or empty id/name).
    fn map(&self, fields: &RecordFields) -> Option<Company>;
}

/// Postal fields decomposed from a single composite address string.
#[derive(Debug, Clone, PartialEq)]
pub struct PostalAddress {
    pub address: Option<String>,
    pub city: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
}

/// Shared utilities for source mappers
pub struct MapperUtils;

impl MapperUtils {
    /// Extract an identity field (id or name) as a non-empty string.
    /// Upstreams disagree on whether ids are strings or numbers, so both
    /// are accepted; anything else fails identification.
    pub fn identity_string(fields: &RecordFields, key: &str) -> Option<String> {
        match fields.get(key)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Extract an optional textual field, absent when missing or non-string.
    pub fn string_field(fields: &RecordFields, key: &str) -> Option<String> {
        fields.get(key).and_then(|v| v.as_str()).map(|s| s.to_string())
    }

    /// Extract an optional integer field.
    pub fn int_field(fields: &RecordFields, key: &str) -> Option<i64> {
        fields.get(key).and_then(|v| v.as_i64())
    }

    /// Extract an optional monetary field. Numbers pass through unchanged;
    /// strings go through shorthand parsing. An unparseable value resolves
    /// to no value rather than an error.
    pub fn money_field(fields: &RecordFields, key: &str) -> Option<f64> {
        match fields.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => Self::parse_currency(s),
            _ => None,
        }
    }

    /// Parse a shorthand currency string like "$1.5M" or "2B" into its
    /// numeric value. The suffix scales the numeric prefix; a missing
    /// suffix means the value is already at scale.
    pub fn parse_currency(raw: &str) -> Option<f64> {
        let trimmed = raw.trim();
        let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed).trim();
        let upper = trimmed.to_ascii_uppercase();

        let (number, multiplier) = if let Some(prefix) = upper.strip_suffix('M') {
            (prefix, 1_000_000.0)
        } else if let Some(prefix) = upper.strip_suffix('B') {
            (prefix, 1_000_000_000.0)
        } else {
            (upper.as_str(), 1.0)
        };

        number.trim().parse::<f64>().ok().map(|v| v * multiplier)
    }

    /// Decompose a composite "street, city, zip, country" string into its
    /// positional parts. Missing positions stay unset; extra segments are
    /// ignored. Note the first segment always resolves, so an empty input
    /// yields an empty (not absent) street address.
    pub fn split_postal_address(full_address: &str) -> PostalAddress {
        let mut segments = full_address.split(',').map(|s| s.trim().to_string());
        PostalAddress {
            address: segments.next(),
            city: segments.next(),
            zip_code: segments.next(),
            country: segments.next(),
        }
    }

    /// Copy the fields every feed spells the same way onto the company.
    /// Each is copied only when the upstream record has a usable value.
    pub fn apply_common_fields(company: &mut Company, fields: &RecordFields) {
        company.industry = Self::string_field(fields, "industry");
        company.employee_count = Self::int_field(fields, "employees");
        company.revenue = Self::money_field(fields, "revenue");
        company.founded_year =
            Self::int_field(fields, "founded_year").and_then(|v| i32::try_from(v).ok());
        company.phone = Self::string_field(fields, "phone");
        company.website = Self::string_field(fields, "website");
        company.contact_email = Self::string_field(fields, "contact_email");
        company.market_cap = Self::money_field(fields, "market_cap");
        company.size_category = Self::string_field(fields, "size");
        company.company_type = Self::string_field(fields, "type");
        company.ceo = Self::string_field(fields, "ceo");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: serde_json::Value) -> RecordFields {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_parse_currency() {
        assert_eq!(MapperUtils::parse_currency("$1.5M"), Some(1_500_000.0));
        assert_eq!(MapperUtils::parse_currency("2B"), Some(2_000_000_000.0));
        assert_eq!(MapperUtils::parse_currency("50m"), Some(50_000_000.0));
        assert_eq!(MapperUtils::parse_currency(" $ 750000 "), Some(750_000.0));
        assert_eq!(MapperUtils::parse_currency("notanumber"), None);
        assert_eq!(MapperUtils::parse_currency(""), None);
    }

    #[test]
    fn test_money_field_numeric_passthrough() {
        let data = fields(json!({"revenue": 500000, "market_cap": "1.2B"}));
        assert_eq!(MapperUtils::money_field(&data, "revenue"), Some(500_000.0));
        assert_eq!(MapperUtils::money_field(&data, "market_cap"), Some(1_200_000_000.0));
        assert_eq!(MapperUtils::money_field(&data, "missing"), None);
    }

    #[test]
    fn test_split_postal_address() {
        let parsed = MapperUtils::split_postal_address("123 Main St, Springfield, 90210, USA");
        assert_eq!(parsed.address.as_deref(), Some("123 Main St"));
        assert_eq!(parsed.city.as_deref(), Some("Springfield"));
        assert_eq!(parsed.zip_code.as_deref(), Some("90210"));
        assert_eq!(parsed.country.as_deref(), Some("USA"));
    }

    #[test]
    fn test_split_postal_address_short_input() {
        let parsed = MapperUtils::split_postal_address("400 Pine St, Seattle");
        assert_eq!(parsed.address.as_deref(), Some("400 Pine St"));
        assert_eq!(parsed.city.as_deref(), Some("Seattle"));
        assert_eq!(parsed.zip_code, None);
        assert_eq!(parsed.country, None);
    }

    #[test]
    fn test_split_postal_address_extra_segments_ignored() {
        let parsed =
            MapperUtils::split_postal_address("1 Way, Town, 00001, USA, Earth, Sol");
        assert_eq!(parsed.country.as_deref(), Some("USA"));
    }

    #[test]
    fn test_split_postal_address_empty_keeps_empty_street() {
        // The upstream sends the composite string as-is; an empty one
        // still resolves the street segment to an empty string.
        let parsed = MapperUtils::split_postal_address("");
        assert_eq!(parsed.address.as_deref(), Some(""));
        assert_eq!(parsed.city, None);
    }

    #[test]
    fn test_identity_string_accepts_numbers_rejects_empty() {
        let data = fields(json!({"id": 17, "name": "Acme", "blank": "", "flag": true}));
        assert_eq!(MapperUtils::identity_string(&data, "id").as_deref(), Some("17"));
        assert_eq!(MapperUtils::identity_string(&data, "name").as_deref(), Some("Acme"));
        assert_eq!(MapperUtils::identity_string(&data, "blank"), None);
        assert_eq!(MapperUtils::identity_string(&data, "flag"), None);
        assert_eq!(MapperUtils::identity_string(&data, "missing"), None);
    }

    #[test]
    fn test_apply_common_fields() {
        let data = fields(json!({
            "industry": "Software",
            "employees": 240,
            "revenue": "$12M",
            "founded_year": 2004,
            "phone": "555-0001",
            "website": "https://example.com",
            "contact_email": "hello@example.com",
            "market_cap": "notanumber",
            "size": "medium",
            "type": "Private",
            "ceo": "J. Doe"
        }));

        let mut company = Company::new("X", "X Corp");
        MapperUtils::apply_common_fields(&mut company, &data);

        assert_eq!(company.industry.as_deref(), Some("Software"));
        assert_eq!(company.employee_count, Some(240));
        assert_eq!(company.revenue, Some(12_000_000.0));
        assert_eq!(company.founded_year, Some(2004));
        assert_eq!(company.size_category.as_deref(), Some("medium"));
        assert_eq!(company.company_type.as_deref(), Some("Private"));
        assert_eq!(company.ceo.as_deref(), Some("J. Doe"));
        // Unparseable money resolves to no value, not an error
        assert_eq!(company.market_cap, None);
    }
}
