//! HTML report rendering for one lookup result.
//!
//! Pure string assembly: localized fields are preferred, then English, then
//! the fixed fallback wording. The artifact is stored under a fixed name by
//! the caller.

use visascan_core::{StayPolicy, VisaResult};

/// Human label for each stay-policy shape.
fn stay_policy_label(policy: StayPolicy) -> &'static str {
    match policy {
        StayPolicy::Fixed => "Fixed duration",
        StayPolicy::Range => "Limited period",
        StayPolicy::Conditional => "Conditional stay",
        StayPolicy::Unlimited => "Unlimited stay",
        StayPolicy::Unknown => "Subject to conditions",
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Renders the report document.
#[must_use]
pub(crate) fn render(result: &VisaResult) -> String {
    let badge = result
        .visa_type_localized
        .as_deref()
        .unwrap_or_else(|| result.visa_type.label());

    let stay = result
        .allowed_stay_text_localized
        .as_deref()
        .or(result.allowed_stay_text.as_deref())
        .unwrap_or("Not specified");

    let notes = result
        .notes_localized
        .as_deref()
        .or(result.notes.as_deref())
        .unwrap_or(if result.found {
            "No additional notes available."
        } else {
            "Visa information not found for the given input."
        });

    let policy_line = result.stay_policy.map_or_else(String::new, |policy| {
        format!(
            "<p><strong>Policy:</strong> {}</p>\n",
            stay_policy_label(policy)
        )
    });

    let link_rows: String = result
        .additional_info_urls
        .iter()
        .map(|link| {
            let title = link.title_localized.as_deref().unwrap_or(&link.title);
            format!(
                "    <tr><td>{}</td><td><a href=\"{}\" target=\"_blank\">View</a></td></tr>\n",
                escape(title),
                link.url
            )
        })
        .collect();

    let links_section = if link_rows.is_empty() {
        String::new()
    } else {
        format!(
            "<h2>Additional Travel Information</h2>\n<table>\n    \
             <tr><th>Topic</th><th>Link</th></tr>\n{link_rows}</table>\n"
        )
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="{language}">
<head>
  <meta charset="UTF-8" />
  <title>Visa Report</title>
  <style>
  :root {{
    --primary: #2563eb;
    --bg: #f8fafc;
    --text: #0f172a;
    --muted: #64748b;
    --border: #e5e7eb;
    --badge-bg: #eef2ff;
    --badge-text: #3730a3;
  }}
  body {{
    margin: 0;
    padding: 40px 16px;
    background: var(--bg);
    font-family: Inter, system-ui, sans-serif;
    color: var(--text);
  }}
  h1 {{ font-size: 28px; margin-bottom: 8px; }}
  h2 {{
    font-size: 20px;
    margin-top: 32px;
    padding-bottom: 6px;
    border-bottom: 2px solid var(--border);
  }}
  .badge {{
    display: inline-block;
    padding: 6px 14px;
    border-radius: 999px;
    background: var(--badge-bg);
    color: var(--badge-text);
    font-weight: 600;
  }}
  table {{ width: 100%; border-collapse: collapse; margin-top: 12px; }}
  th, td {{
    padding: 12px 14px;
    border-bottom: 1px solid var(--border);
    text-align: left;
  }}
  a {{ color: var(--primary); text-decoration: none; }}
  .meta {{ margin-top: 32px; font-size: 13px; color: var(--muted); }}
  </style>
</head>
<body>

<h1>Visa Information</h1>

<p><strong>Nationality:</strong> {nationality}</p>
<p><strong>Destination:</strong> {destination}</p>

<h2>Visa Status</h2>
<p class="badge">{badge}</p>

<h2>Allowed Stay</h2>
<p>{stay}</p>
{policy_line}
<h2>Notes</h2>
<p>{notes}</p>

{links_section}
<p class="meta">Language: {language} · Scraped at: {scraped_at}</p>

</body>
</html>
"#,
        language = escape(&result.language),
        nationality = escape(&result.nationality),
        destination = escape(&result.destination),
        badge = escape(badge),
        stay = escape(stay),
        notes = escape(notes),
        scraped_at = result.scraped_at.format("%Y-%m-%d %H:%M:%S UTC"),
    )
}
