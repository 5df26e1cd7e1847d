use core::fmt::{Display, Formatter, Result as FmtResult};
use std::collections::HashMap;
use strum::{EnumIter, IntoStaticStr};

/// The keys recognized in a metadata file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum MetadataKey {
    Licensor,
    #[strum(serialize = "License_Type")]
    LicenseType,
    Description,
    Date,
    Acknowledgements,
    Library,
}

impl MetadataKey {
    /// The key exactly as it is spelled in a metadata file.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Licensing facts declared for one third-party library.
///
/// All fields are free-form text and may be empty. Two records are equal when all six
/// fields are equal, which is what deduplication within a license type relies on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LicenseRecord {
    pub licensor: String,
    pub license_type: String,
    pub description: String,
    pub date: String,
    pub acknowledgements: String,
    pub library: String,
}

impl LicenseRecord {
    /// Build a record from parsed key-value pairs. Unknown keys are ignored and missing
    /// keys yield empty fields.
    #[must_use]
    pub fn from_properties(properties: &HashMap<String, String>) -> Self {
        let field = |key: MetadataKey| properties.get(key.name()).cloned().unwrap_or_default();

        Self {
            licensor: field(MetadataKey::Licensor),
            license_type: field(MetadataKey::LicenseType),
            description: field(MetadataKey::Description),
            date: field(MetadataKey::Date),
            acknowledgements: field(MetadataKey::Acknowledgements),
            library: field(MetadataKey::Library),
        }
    }

    /// Returns the value stored for `key`.
    #[must_use]
    pub fn get(&self, key: MetadataKey) -> &str {
        match key {
            MetadataKey::Licensor => &self.licensor,
            MetadataKey::LicenseType => &self.license_type,
            MetadataKey::Description => &self.description,
            MetadataKey::Date => &self.date,
            MetadataKey::Acknowledgements => &self.acknowledgements,
            MetadataKey::Library => &self.library,
        }
    }
}

impl Display for LicenseRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{} [{}, {}, {}, {}]: {}",
            self.license_type, self.licensor, self.description, self.date, self.acknowledgements, self.library
        )
    }
}
