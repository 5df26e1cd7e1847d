/// License texts compiled into the binary, keyed by license type.
pub const BUNDLED_LICENSES: &[(&str, &str)] = &[
    ("Apache-2.0", include_str!("../../resources/licenses/Apache-2.0.license")),
    ("BSD-2-Clause", include_str!("../../resources/licenses/BSD-2-Clause.license")),
    ("BSD-3-Clause", include_str!("../../resources/licenses/BSD-3-Clause.license")),
    ("ISC", include_str!("../../resources/licenses/ISC.license")),
    ("MIT", include_str!("../../resources/licenses/MIT.license")),
];

/// Returns the bundled text for `license_type`, if any.
#[must_use]
pub fn bundled_license(license_type: &str) -> Option<&'static str> {
    BUNDLED_LICENSES
        .iter()
        .find(|(name, _)| *name == license_type)
        .map(|(_, text)| *text)
}
