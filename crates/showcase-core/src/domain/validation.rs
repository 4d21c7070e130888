use crate::domain::{InteractionSettings, SiteContent, error::DomainError};

/// Centralized domain validation.
///
/// Everything that could later cause a modulo-by-zero or an unreachable
/// state is rejected here, at load time.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_site(site: &SiteContent) -> Result<(), DomainError> {
        site.validate()
    }

    pub fn validate_settings(settings: &InteractionSettings) -> Result<(), DomainError> {
        settings.validate()
    }

    pub fn validate(site: &SiteContent, settings: &InteractionSettings) -> Result<(), DomainError> {
        Self::validate_site(site)?;
        Self::validate_settings(settings)
    }
}
