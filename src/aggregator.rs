//! Grouping of license records by license type.
//!
//! An [`Aggregator`] is built once per report run. Records are appended to the group of
//! their license type in the order they are ingested, unless an identical record is
//! already present in that group. Groups are always traversed in ascending lexicographic
//! order of their key, so the rendered report does not depend on the order in which the
//! filesystem returned the metadata files.

use crate::metadata::LicenseRecord;
use std::collections::BTreeMap;

const LOG_TARGET: &str = "aggregator";

#[derive(Debug, Default, Clone)]
pub struct Aggregator {
    groups: BTreeMap<String, Vec<LicenseRecord>>,
}

impl Aggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record to the group of its license type.
    ///
    /// Returns `false` when an equal record was already present in the group, in which
    /// case the record is dropped.
    pub fn ingest(&mut self, record: LicenseRecord) -> bool {
        let group = self.groups.entry(record.license_type.clone()).or_default();

        if group.contains(&record) {
            log::debug!(target: LOG_TARGET, "Ignoring duplicate record {record}");
            return false;
        }

        group.push(record);
        true
    }

    /// License types in ascending lexicographic order.
    pub fn license_types_sorted(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// The records of one license type in ingestion order, or an empty slice for an
    /// unknown license type.
    #[must_use]
    pub fn records_for(&self, license_type: &str) -> &[LicenseRecord] {
        self.groups.get(license_type).map_or(&[], Vec::as_slice)
    }

    /// Iterate over all groups in ascending order of their license type.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[LicenseRecord])> {
        self.groups.iter().map(|(key, records)| (key.as_str(), records.as_slice()))
    }

    /// Number of distinct license types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of records across all groups.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}
