use super::base::{MapperUtils, SourceMapper};
use crate::common::constants::BRAVO_ID_PREFIX;
use crate::domain::{Company, RecordFields, SourceKind};

/// Mapper for the bravo feed. Bravo's native ids are small and overlap
/// with the other feeds, so they are namespaced with a prefix. The feed
/// never sends a country; the deployment-configured default is applied
/// to every record.
pub struct BravoMapper {
    default_country: String,
}

impl BravoMapper {
    pub fn new(default_country: impl Into<String>) -> Self {
        Self {
            default_country: default_country.into(),
        }
    }
}

impl SourceMapper for BravoMapper {
    fn kind(&self) -> SourceKind {
        SourceKind::Bravo
    }

    fn map(&self, fields: &RecordFields) -> Option<Company> {
        let native_id = MapperUtils::identity_string(fields, "id")?;
        let name = MapperUtils::identity_string(fields, "name")?;

        let mut company = Company::new(format!("{}{}", BRAVO_ID_PREFIX, native_id), name);
        company.address = MapperUtils::string_field(fields, "street_address");
        company.city = MapperUtils::string_field(fields, "city");
        company.zip_code = MapperUtils::string_field(fields, "zip");
        company.country = Some(self.default_country.clone());
        MapperUtils::apply_common_fields(&mut company, fields);
        Some(company)
    }
}
