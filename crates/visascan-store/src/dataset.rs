//! JSON Lines dataset sinks.

use std::fs::OpenOptions;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use visascan_core::{AdditionalInfoLink, VisaResult};

use crate::{OutputStore, StoreError};

pub(crate) const DEFAULT_DATASET_FILE: &str = "dataset.jsonl";
pub(crate) const ADDITIONAL_INFO_FILE: &str = "additional-info.jsonl";

/// The primary output record: the full result tagged with `"type": "visa"`.
#[derive(Debug, Serialize, Deserialize)]
pub struct VisaRecord {
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(flatten)]
    pub result: VisaResult,
}

/// One row of the additional-info dataset. `title_localized` is serialized
/// as an explicit `null` when unset, matching the consumer contract.
#[derive(Debug, Serialize, Deserialize)]
pub struct AdditionalInfoRecord {
    #[serde(rename = "type")]
    pub record_type: String,
    pub title: String,
    pub title_localized: Option<String>,
    pub url: String,
    pub language: String,
    #[serde(rename = "scrapedAt")]
    pub scraped_at: DateTime<Utc>,
}

impl OutputStore {
    /// Appends the run's result record to the default dataset.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on I/O or serialization failure.
    pub fn append_visa_record(&self, result: &VisaResult) -> Result<(), StoreError> {
        self.ensure_root()?;
        let record = VisaRecord {
            record_type: "visa".to_owned(),
            result: result.clone(),
        };
        let line = serde_json::to_string(&record).map_err(|source| StoreError::Serialize {
            context: "visa record".to_owned(),
            source,
        })?;

        let path = self.path_of(DEFAULT_DATASET_FILE);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| StoreError::Io {
                path: path.display().to_string(),
                source,
            })?;
        writeln!(file, "{line}").map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "appended visa record");
        Ok(())
    }

    /// Drops the additional-info dataset and rewrites it with one record per
    /// link — the sink never accumulates across runs.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on I/O or serialization failure.
    pub fn replace_additional_info(
        &self,
        links: &[AdditionalInfoLink],
        language: &str,
        scraped_at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        self.ensure_root()?;
        let path = self.path_of(ADDITIONAL_INFO_FILE);

        let mut lines = String::new();
        for link in links {
            let record = AdditionalInfoRecord {
                record_type: "additional_info".to_owned(),
                title: link.title.clone(),
                title_localized: link.title_localized.clone(),
                url: link.url.clone(),
                language: language.to_owned(),
                scraped_at,
            };
            let line = serde_json::to_string(&record).map_err(|source| StoreError::Serialize {
                context: format!("additional-info record \"{}\"", link.key),
                source,
            })?;
            lines.push_str(&line);
            lines.push('\n');
        }

        // A plain write truncates: the previous run's records are dropped in
        // the same step that writes the new ones.
        std::fs::write(&path, lines).map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        tracing::debug!(path = %path.display(), records = links.len(), "rewrote additional-info dataset");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use visascan_core::{StayPolicy, VisaType};

    use super::*;

    fn temp_store(test_name: &str) -> OutputStore {
        let dir = std::env::temp_dir()
            .join("visascan-store-tests")
            .join(format!("{test_name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        OutputStore::new(dir)
    }

    fn sample_result() -> VisaResult {
        VisaResult {
            nationality: "France".to_owned(),
            destination: "Brazil".to_owned(),
            visa_type: VisaType::VisaFree,
            visa_type_raw: "Visa not required".to_owned(),
            visa_type_localized: None,
            max_stay_days: Some(90),
            allowed_stay_text: Some("90 days".to_owned()),
            allowed_stay_text_localized: None,
            stay_policy: Some(StayPolicy::Fixed),
            notes: None,
            notes_localized: None,
            additional_info_urls: sample_links(),
            language: "en".to_owned(),
            scraped_at: Utc::now(),
            found: true,
        }
    }

    fn sample_links() -> Vec<AdditionalInfoLink> {
        (0..7)
            .map(|i| AdditionalInfoLink {
                key: format!("topic_{i}"),
                title: format!("Topic {i}"),
                title_localized: None,
                url: format!("https://example.test/page#Topic_{i}"),
            })
            .collect()
    }

    fn read_lines(store: &OutputStore, file: &str) -> Vec<String> {
        let raw = std::fs::read_to_string(store.path_of(file)).unwrap();
        raw.lines().map(str::to_owned).collect()
    }

    #[test]
    fn append_visa_record_accumulates_lines() {
        let store = temp_store("append-visa");
        store.append_visa_record(&sample_result()).unwrap();
        store.append_visa_record(&sample_result()).unwrap();

        let lines = read_lines(&store, DEFAULT_DATASET_FILE);
        assert_eq!(lines.len(), 2);
        let parsed: VisaRecord = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(parsed.record_type, "visa");
        assert_eq!(parsed.result.destination, "Brazil");
    }

    #[test]
    fn visa_record_line_carries_wire_fields() {
        let store = temp_store("visa-wire");
        store.append_visa_record(&sample_result()).unwrap();
        let lines = read_lines(&store, DEFAULT_DATASET_FILE);
        let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(value["type"], "visa");
        assert_eq!(value["visaType"], "Visa-free");
        assert_eq!(value["maxStayDays"], 90);
        assert_eq!(value["stayPolicy"], "fixed");
    }

    #[test]
    fn replace_additional_info_writes_exactly_the_given_records() {
        let store = temp_store("replace-links");
        store
            .replace_additional_info(&sample_links(), "en", Utc::now())
            .unwrap();

        let lines = read_lines(&store, ADDITIONAL_INFO_FILE);
        assert_eq!(lines.len(), 7);
        let first: AdditionalInfoRecord = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(first.record_type, "additional_info");
        assert_eq!(first.title, "Topic 0");
        assert_eq!(first.language, "en");
    }

    #[test]
    fn replace_additional_info_leaves_no_residue_from_previous_run() {
        let store = temp_store("replace-residue");
        store
            .replace_additional_info(&sample_links(), "en", Utc::now())
            .unwrap();
        store
            .replace_additional_info(&sample_links(), "de", Utc::now())
            .unwrap();

        let lines = read_lines(&store, ADDITIONAL_INFO_FILE);
        assert_eq!(lines.len(), 7, "the sink must not accumulate across runs");
        let first: AdditionalInfoRecord = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(first.language, "de");
    }

    #[test]
    fn additional_info_record_serializes_null_localized_title() {
        let store = temp_store("null-localized");
        store
            .replace_additional_info(&sample_links(), "en", Utc::now())
            .unwrap();
        let lines = read_lines(&store, ADDITIONAL_INFO_FILE);
        let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert!(value["title_localized"].is_null());
    }
}
