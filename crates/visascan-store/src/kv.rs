//! Single-slot key-value artifacts, overwritten on every run.

use visascan_core::VisaResult;

use crate::{OutputStore, StoreError};

pub(crate) const RESULT_SLOT_FILE: &str = "RESULT.json";
pub(crate) const REPORT_SLOT_FILE: &str = "report.html";

impl OutputStore {
    /// Writes the result record to its fixed slot, replacing any previous
    /// run's value. No versioning, no append.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on I/O or serialization failure.
    pub fn write_result(&self, result: &VisaResult) -> Result<(), StoreError> {
        self.ensure_root()?;
        let body =
            serde_json::to_string_pretty(result).map_err(|source| StoreError::Serialize {
                context: "result slot".to_owned(),
                source,
            })?;
        let path = self.path_of(RESULT_SLOT_FILE);
        std::fs::write(&path, body).map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "wrote result slot");
        Ok(())
    }

    /// Writes the rendered report to its fixed slot, replacing any previous
    /// run's artifact.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on I/O failure.
    pub fn write_report(&self, html: &str) -> Result<(), StoreError> {
        self.ensure_root()?;
        let path = self.path_of(REPORT_SLOT_FILE);
        std::fs::write(&path, html).map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "wrote report slot");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use visascan_core::VisaType;

    use super::*;

    fn temp_store(test_name: &str) -> OutputStore {
        let dir = std::env::temp_dir()
            .join("visascan-store-tests")
            .join(format!("{test_name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        OutputStore::new(dir)
    }

    fn not_found_result(destination: &str) -> VisaResult {
        VisaResult {
            nationality: "France".to_owned(),
            destination: destination.to_owned(),
            visa_type: VisaType::Other,
            visa_type_raw: String::new(),
            visa_type_localized: None,
            max_stay_days: None,
            allowed_stay_text: None,
            allowed_stay_text_localized: None,
            stay_policy: None,
            notes: None,
            notes_localized: None,
            additional_info_urls: vec![],
            language: "en".to_owned(),
            scraped_at: Utc::now(),
            found: false,
        }
    }

    #[test]
    fn result_slot_is_overwritten() {
        let store = temp_store("result-slot");
        store.write_result(&not_found_result("Atlantis")).unwrap();
        store.write_result(&not_found_result("Brazil")).unwrap();

        let raw = std::fs::read_to_string(store.path_of(RESULT_SLOT_FILE)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["destination"], "Brazil");
        assert!(!raw.contains("Atlantis"), "slot must hold one value only");
    }

    #[test]
    fn report_slot_is_overwritten() {
        let store = temp_store("report-slot");
        store.write_report("<html>first</html>").unwrap();
        store.write_report("<html>second</html>").unwrap();

        let raw = std::fs::read_to_string(store.path_of(REPORT_SLOT_FILE)).unwrap();
        assert_eq!(raw, "<html>second</html>");
    }

    #[test]
    fn slots_live_next_to_the_datasets() {
        let store = temp_store("slot-paths");
        store.write_report("<html></html>").unwrap();
        assert!(store.path_of(REPORT_SLOT_FILE).exists());
    }
}
