//! Lookup run orchestration: fetch → extract → localize → store → report.
//!
//! Extraction and fetch failures degrade to a schema-complete not-found
//! result; only input validation (upstream) and persistence failures abort
//! the run.

use visascan_core::{AppConfig, LookupQuery, VisaResult};
use visascan_extract::{assemble_result, extract_requirements, normalize_for_display};
use visascan_store::OutputStore;
use visascan_translate::{build_payload, with_localization, TranslateClient};
use visascan_wiki::WikiClient;

use crate::report;

pub(crate) async fn run(config: &AppConfig, query: &LookupQuery) -> anyhow::Result<()> {
    let wiki = WikiClient::with_base_url(
        &config.wiki_base_url,
        config.request_timeout_secs,
        &config.user_agent,
        config.max_retries,
        config.retry_backoff_base_secs,
    )?;

    let nationality_display = normalize_for_display(&query.nationality);
    let page_url = wiki.requirements_url(&nationality_display);
    tracing::info!(%page_url, destination = %query.destination, "fetching requirements page");

    let extract = match wiki.fetch_page(&page_url).await {
        Ok(document) => extract_requirements(&document, &query.destination),
        Err(err) => {
            tracing::warn!(error = %err, "page fetch failed — emitting not-found result");
            None
        }
    };

    let mut result = assemble_result(query, &page_url, extract);

    if query.language != "en" && result.found {
        result = localize(config, result).await;
    }

    let store = OutputStore::new(&config.output_dir);
    store.write_result(&result)?;
    store.write_report(&report::render(&result))?;
    store.append_visa_record(&result)?;
    store.replace_additional_info(&result.additional_info_urls, &result.language, result.scraped_at)?;

    tracing::info!(
        found = result.found,
        visa_type = %result.visa_type,
        "lookup complete"
    );
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// Hands the classified text fields to the localization service. Every
/// failure path returns the result unchanged — localization is best-effort.
async fn localize(config: &AppConfig, result: VisaResult) -> VisaResult {
    let Some(api_key) = &config.translate_api_key else {
        tracing::debug!("no translation API key configured — skipping localization");
        return result;
    };

    let client = match TranslateClient::with_base_url(
        &config.translate_base_url,
        api_key,
        config.translate_timeout_secs,
    ) {
        Ok(client) => client,
        Err(err) => {
            tracing::warn!(error = %err, "localization client unavailable — continuing in English");
            return result;
        }
    };

    let payload = build_payload(&result);
    match client.localize_map(&payload, "en", &result.language).await {
        Ok(localized) => with_localization(result, &localized),
        Err(err) => {
            tracing::warn!(error = %err, "localization failed — continuing in English");
            result
        }
    }
}
