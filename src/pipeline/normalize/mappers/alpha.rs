use super::base::{MapperUtils, SourceMapper};
use crate::domain::{Company, RecordFields, SourceKind};

/// Mapper for the alpha feed. Alpha records carry their own id scheme
/// (`company_id`) and a single flat `location` string that is kept as the
/// street address without further decomposition.
pub struct AlphaMapper;

impl AlphaMapper {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AlphaMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceMapper for AlphaMapper {
    fn kind(&self) -> SourceKind {
        SourceKind::Alpha
    }

    fn map(&self, fields: &RecordFields) -> Option<Company> {
        let id = MapperUtils::identity_string(fields, "company_id")?;
        let name = MapperUtils::identity_string(fields, "company_name")?;

        let mut company = Company::new(id, name);
        company.address = MapperUtils::string_field(fields, "location");
        MapperUtils::apply_common_fields(&mut company, fields);
        Some(company)
    }
}
