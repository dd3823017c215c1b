use serde_json::json;

use crate::common::constants::{ALPHA_FEED, BRAVO_FEED, CHARLIE_FEED};
use crate::domain::{RecordFields, SourceKind};

use super::base::{CompanyFeed, StaticFeed};

fn records(value: serde_json::Value) -> Vec<RecordFields> {
    value
        .as_array()
        .expect("demo data is a JSON array")
        .iter()
        .map(|v| v.as_object().expect("demo record is a JSON object").clone())
        .collect()
}

/// Built-in sample feeds for running the service without live upstreams.
/// The shapes mirror what the real endpoints send, including the warts:
/// numeric ids, shorthand currency strings, missing optional fields.
pub fn demo_feeds() -> Vec<Box<dyn CompanyFeed>> {
    let alpha = records(json!([
        {
            "company_id": "TN-1001",
            "company_name": "TechNova Systems",
            "location": "500 Terry Ave N",
            "industry": "Software",
            "employees": 3200,
            "revenue": "$450M",
            "founded_year": 1998,
            "website": "https://technova.example.com",
            "size": "large",
            "type": "Public",
            "ceo": "Dana Whitfield"
        },
        {
            "company_id": "GH-2040",
            "company_name": "Greenhaven Foods",
            "location": "77 Orchard Rd",
            "industry": "Consumer Goods",
            "employees": 540,
            "revenue": "85M",
            "phone": "206-555-0180"
        },
        {
            // Feed occasionally emits partner stubs with no usable identity
            "company_name": "Unnamed Partner"
        }
    ]));

    let bravo = records(json!([
        {
            "id": 17,
            "name": "Rainier Logistics",
            "street_address": "88 Harbor Ave",
            "city": "Seattle",
            "zip": "98103",
            "industry": "Transportation",
            "employees": 860,
            "revenue": 92000000,
            "type": "Private"
        },
        {
            "id": 23,
            "name": "Cascade Federal Credit",
            "street_address": "1200 5th Ave",
            "city": "Seattle",
            "zip": "98101",
            "industry": "Finance",
            "founded_year": 1952,
            "contact_email": "info@cascadefederal.example.com"
        }
    ]));

    let charlie = records(json!([
        {
            "identifier": "org-550",
            "org_name": "Evergreen Analytics",
            "full_address": "123 Main St, Springfield, 90210, USA",
            "industry": "Data Services",
            "employees": 150,
            "market_cap": "2B",
            "website": "https://evergreen.example.org"
        },
        {
            "identifier": "org-551",
            "org_name": "Puget Biotech",
            "full_address": "400 Pine St, Seattle",
            "industry": "Biotechnology",
            "market_cap": "$1.5M",
            "size": "small"
        }
    ]));

    vec![
        Box::new(StaticFeed::new(SourceKind::Alpha, ALPHA_FEED, alpha)),
        Box::new(StaticFeed::new(SourceKind::Bravo, BRAVO_FEED, bravo)),
        Box::new(StaticFeed::new(SourceKind::Charlie, CHARLIE_FEED, charlie)),
    ]
}
