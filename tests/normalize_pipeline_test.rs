use anyhow::Result;
use serde_json::json;

use company_hub::domain::{RecordFields, SourceKind, TaggedRecord};
use company_hub::feeds::{CompanyFeed, StaticFeed};
use company_hub::pipeline::normalize::NormalizationRegistry;
use company_hub::repository::CompanyRepository;

fn fields(value: serde_json::Value) -> RecordFields {
    value.as_object().unwrap().clone()
}

#[tokio::test]
async fn test_full_pass_over_mixed_quality_feeds() -> Result<()> {
    // One healthy record per feed plus the failure modes the upstreams
    // actually produce: stub records, blank identities, junk money values.
    let feeds: Vec<Box<dyn CompanyFeed>> = vec![
        Box::new(StaticFeed::new(
            SourceKind::Alpha,
            "alpha",
            vec![
                fields(json!({
                    "company_id": "A-100",
                    "company_name": "North Slope Tools",
                    "location": "9 Dock Rd",
                    "revenue": "$3.5M",
                    "employees": 41
                })),
                fields(json!({"company_name": "Stub Without Id"})),
            ],
        )),
        Box::new(StaticFeed::new(
            SourceKind::Bravo,
            "bravo",
            vec![
                fields(json!({
                    "id": 5,
                    "name": "Harborline Freight",
                    "street_address": "2 Pier Pl",
                    "city": "Tacoma",
                    "zip": "98402",
                    "market_cap": "garbage"
                })),
                fields(json!({"id": "", "name": "Blank Native Id"})),
            ],
        )),
        Box::new(StaticFeed::new(
            SourceKind::Charlie,
            "charlie",
            vec![fields(json!({
                "identifier": "org-9",
                "org_name": "Lakeview Trust",
                "full_address": "1 Shore Dr, Renton, 98055, USA, Extra, Noise",
                "market_cap": 250000000
            }))],
        )),
    ];

    let repository = CompanyRepository::new(feeds, NormalizationRegistry::default());
    let companies = repository.get_all().await?;

    assert_eq!(companies.len(), 3);

    let north_slope = &companies[0];
    assert_eq!(north_slope.id, "A-100");
    assert_eq!(north_slope.revenue, Some(3_500_000.0));
    assert_eq!(north_slope.employee_count, Some(41));
    assert_eq!(north_slope.address.as_deref(), Some("9 Dock Rd"));

    let harborline = &companies[1];
    assert_eq!(harborline.id, "B_5");
    assert_eq!(harborline.country.as_deref(), Some("USA"));
    // Unparseable money is omitted, the record survives
    assert_eq!(harborline.market_cap, None);

    let lakeview = &companies[2];
    assert_eq!(lakeview.id, "org-9");
    assert_eq!(lakeview.country.as_deref(), Some("USA"));
    assert_eq!(lakeview.market_cap, Some(250_000_000.0));

    Ok(())
}

#[tokio::test]
async fn test_normalize_is_idempotent_over_reruns() -> Result<()> {
    let registry = NormalizationRegistry::default();
    let batch = vec![
        TaggedRecord::new(
            SourceKind::Alpha,
            fields(json!({"company_id": "A-1", "company_name": "Repeatable Co"})),
        ),
        TaggedRecord::new(SourceKind::Charlie, fields(json!({"identifier": "org-2"}))),
    ];

    let first = registry.normalize_batch(&batch);
    let second = registry.normalize_batch(&batch);

    assert_eq!(
        serde_json::to_value(&first)?,
        serde_json::to_value(&second)?
    );
    assert_eq!(first.len(), 1);

    Ok(())
}
