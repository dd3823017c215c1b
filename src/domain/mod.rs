use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The upstream feed a raw record came from. Every adapter tags its own
/// records, so downstream mapping never has to guess a record's shape
/// from which keys happen to be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Alpha,
    Bravo,
    Charlie,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Alpha => crate::common::constants::ALPHA_FEED,
            SourceKind::Bravo => crate::common::constants::BRAVO_FEED,
            SourceKind::Charlie => crate::common::constants::CHARLIE_FEED,
        }
    }
}

/// Loosely-typed key-value fields of one upstream record.
pub type RecordFields = serde_json::Map<String, Value>;

/// One raw upstream record together with its provenance tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaggedRecord {
    pub source: SourceKind,
    pub fields: RecordFields,
}

impl TaggedRecord {
    pub fn new(source: SourceKind, fields: RecordFields) -> Self {
        Self { source, fields }
    }
}

/// The canonical company record all feeds are mapped into.
///
/// `id` and `name` are the only required fields; everything else is
/// populated when the upstream record carries a usable value and omitted
/// from the JSON surface otherwise (absent, never `null`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub founded_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ceo: Option<String>,
}

impl Company {
    /// Create a company with only the required identity fields set.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: None,
            city: None,
            zip_code: None,
            country: None,
            industry: None,
            employee_count: None,
            revenue: None,
            founded_year: None,
            phone: None,
            website: None,
            contact_email: None,
            market_cap: None,
            size_category: None,
            company_type: None,
            ceo: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_fields_are_absent_from_json() {
        let mut company = Company::new("A1", "Acme");
        company.city = Some("Seattle".to_string());

        let value = serde_json::to_value(&company).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.get("id").and_then(|v| v.as_str()), Some("A1"));
        assert_eq!(object.get("city").and_then(|v| v.as_str()), Some("Seattle"));
        // Never serialized as null
        assert!(!object.contains_key("country"));
        assert!(!object.contains_key("revenue"));
    }

    #[test]
    fn test_source_kind_names() {
        assert_eq!(SourceKind::Alpha.as_str(), "alpha");
        assert_eq!(SourceKind::Bravo.as_str(), "bravo");
        assert_eq!(SourceKind::Charlie.as_str(), "charlie");
    }
}
