use super::base::{MapperUtils, SourceMapper};
use crate::domain::{Company, RecordFields, SourceKind};

/// Mapper for the charlie feed. Charlie sends its postal data as one
/// composite "street, city, zip, country" string which is decomposed
/// positionally into the canonical fields.
pub struct CharlieMapper;

impl CharlieMapper {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CharlieMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceMapper for CharlieMapper {
    fn kind(&self) -> SourceKind {
        SourceKind::Charlie
    }

    fn map(&self, fields: &RecordFields) -> Option<Company> {
        let id = MapperUtils::identity_string(fields, "identifier")?;
        let name = MapperUtils::identity_string(fields, "org_name")?;

        let full_address = fields
            .get("full_address")
            .and_then(|v| v.as_str())
            .unwrap_or("");
        let postal = MapperUtils::split_postal_address(full_address);

        let mut company = Company::new(id, name);
        company.address = postal.address;
        company.city = postal.city;
        company.zip_code = postal.zip_code;
        company.country = postal.country;
        MapperUtils::apply_common_fields(&mut company, fields);
        Some(company)
    }
}
