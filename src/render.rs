//! Static HTML preview of a playlist.
//!
//! Only the id, name, singer and file name of each track are shown. Field
//! values are inserted verbatim: they come from local file names.

use std::fs;
use std::path::Path;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};

use crate::config::HtmlSettings;
use crate::error::{Error, Result};
use crate::manifest::Track;

const STYLE: &str = r#"        body { font-family: Arial, sans-serif; padding: 20px; }
        .track { padding: 10px; border-bottom: 1px solid #ccc; }
        .track:nth-child(even) { background: #f5f5f5; }
        .count { color: #666; margin-bottom: 20px; }
        .generated { margin-top: 30px; color: #666; font-size: 0.9em; }"#;

fn render_track(track: &Track, html: &HtmlSettings) -> String {
    format!(
        r#"    <div class="track">
        <strong>{}. {}</strong><br>
        {}: {}<br>
        {}: {}
    </div>
"#,
        track.id, track.name, html.singer_label, track.singer, html.file_label, track.file_name,
    )
}

/// Whether `pattern` is a strftime pattern `chrono` can print without failing.
pub fn is_valid_timestamp_format(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

/// Render the preview page. `generated_at` is printed with `html.timestamp_format`;
/// an invalid pattern is rejected before anything is formatted.
pub fn render_html(
    playlist: &[Track],
    html: &HtmlSettings,
    generated_at: &DateTime<Local>,
) -> Result<String> {
    if !is_valid_timestamp_format(&html.timestamp_format) {
        return Err(Error::TimestampFormat(html.timestamp_format.clone()));
    }
    let count = playlist.len();
    let tracks: String = playlist.iter().map(|t| render_track(t, html)).collect();

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{title} - {count}</title>
    <style>
{STYLE}
    </style>
</head>
<body>
    <h1>{heading}</h1>
    <div class="count">{count_label}: {count}</div>
{tracks}    <div class="generated">
        {generated_label}: {timestamp}
    </div>
</body>
</html>
"#,
        title = html.title,
        heading = html.heading,
        count_label = html.count_label,
        generated_label = html.generated_label,
        timestamp = generated_at.format(&html.timestamp_format),
    ))
}

/// Render and overwrite `path`.
pub fn write_html(
    playlist: &[Track],
    html: &HtmlSettings,
    generated_at: &DateTime<Local>,
    path: &Path,
) -> Result<()> {
    let page = render_html(playlist, html, generated_at)?;
    fs::write(path, page).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
