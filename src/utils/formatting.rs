//! Formatting utilities for display

use chrono::{DateTime, Utc};

// ============================================================================
// Check Intervals
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalOption {
    pub label: &'static str,
    pub value_ms: u64,
}

/// Slider stops on the settings form, shortest first.
pub const INTERVAL_OPTIONS: [IntervalOption; 7] = [
    IntervalOption { label: "15s", value_ms: 15_000 },
    IntervalOption { label: "30s", value_ms: 30_000 },
    IntervalOption { label: "1m", value_ms: 60_000 },
    IntervalOption { label: "5m", value_ms: 300_000 },
    IntervalOption { label: "15m", value_ms: 900_000 },
    IntervalOption { label: "30m", value_ms: 1_800_000 },
    IntervalOption { label: "1h", value_ms: 3_600_000 },
];

/// "15s", "1.5m", "1h"
pub fn format_interval(ms: u64) -> String {
    let ms = ms as f64;
    if ms < 60_000.0 {
        format!("{}s", ms / 1_000.0)
    } else if ms < 3_600_000.0 {
        format!("{}m", ms / 60_000.0)
    } else {
        format!("{}h", ms / 3_600_000.0)
    }
}

/// Upper-case, whole-unit variant used in the services table ("30S", "5M").
pub fn format_interval_compact(ms: u64) -> String {
    let seconds = (ms as f64 / 1_000.0).round() as u64;
    if seconds >= 60 {
        format!("{}M", (seconds as f64 / 60.0).round() as u64)
    } else {
        format!("{seconds}S")
    }
}

pub fn interval_recommendation(ms: u64) -> &'static str {
    if ms <= 30_000 {
        "Recommended for APIs"
    } else if ms <= 300_000 {
        "Recommended for websites"
    } else {
        "Recommended for background services"
    }
}

/// Slider position (0-100) of a preset interval. Off-preset values sit at 0.
pub fn slider_percent(ms: u64) -> f64 {
    let last = (INTERVAL_OPTIONS.len() - 1) as f64;
    INTERVAL_OPTIONS
        .iter()
        .position(|o| o.value_ms == ms)
        .map(|idx| idx as f64 / last * 100.0)
        .unwrap_or(0.0)
}

/// Snap a slider position to the nearest preset.
pub fn closest_interval(percent: f64) -> u64 {
    let last = INTERVAL_OPTIONS.len() - 1;
    let idx = (percent / 100.0 * last as f64).round();
    let idx = if idx.is_nan() { 0 } else { idx.clamp(0.0, last as f64) as usize };
    INTERVAL_OPTIONS[idx].value_ms
}

/// "Service marked down after 3 failed checks (~90s)"
pub fn failure_hint(failure_threshold: u32, check_interval_ms: u64) -> String {
    let seconds = (failure_threshold as f64 * check_interval_ms as f64 / 1_000.0).round() as u64;
    format!("Service marked down after {failure_threshold} failed checks (~{seconds}s)")
}

/// Digits only, at most three.
pub fn sanitize_status_code_input(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).take(3).collect()
}

// ============================================================================
// Timestamps
// ============================================================================

fn parse_utc(iso: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(iso)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

/// Top bar clock: "2026-01-05 14:03:07.412 UTC".
pub fn format_utc_timestamp(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%d %H:%M:%S%.3f UTC").to_string()
}

/// "12s ago", "5m ago", "3h ago"; "--" when never checked.
pub fn format_last_check(last_check: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(checked) = last_check.and_then(parse_utc) else {
        return "--".to_string();
    };
    let seconds = (now - checked).num_seconds().max(0);
    if seconds < 60 {
        return format!("{seconds}s ago");
    }
    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    format!("{}h ago", minutes / 60)
}

/// Health matrix caption: whole hours since the last check.
pub fn format_uptime_since(last_check: Option<&str>, now: DateTime<Utc>) -> String {
    match last_check.and_then(parse_utc) {
        Some(checked) => format!("UP {}H", (now - checked).num_hours().max(0)),
        None => "--".to_string(),
    }
}

/// 24-hour clock. Unparseable input is shown as-is.
pub fn format_clock(iso: &str) -> String {
    parse_utc(iso)
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| iso.to_string())
}

pub fn format_clock_millis(iso: &str) -> String {
    parse_utc(iso)
        .map(|t| t.format("%H:%M:%S%.3f").to_string())
        .unwrap_or_else(|| iso.to_string())
}

/// "May 1, 02:05 PM"
pub fn format_incident_date(iso: &str) -> String {
    parse_utc(iso)
        .map(|t| t.format("%b %-d, %I:%M %p").to_string())
        .unwrap_or_else(|| iso.to_string())
}

pub fn format_date(iso: &str) -> String {
    parse_utc(iso)
        .map(|t| t.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "--".to_string())
}

// ============================================================================
// Endpoints
// ============================================================================

/// Path component of a URL, or the input unchanged if it does not parse.
pub fn endpoint_path(endpoint: &str) -> String {
    url::Url::parse(endpoint)
        .map(|u| u.path().to_string())
        .unwrap_or_else(|_| endpoint.to_string())
}

pub const PROTOCOLS: [&str; 2] = ["https://", "http://"];

/// Protocol selector and remainder for the URL input. Unknown schemes keep
/// the whole string as remainder under `https://`.
pub fn split_endpoint_url(url: &str) -> (&'static str, &str) {
    for protocol in PROTOCOLS {
        if let Some(rest) = url.strip_prefix(protocol) {
            return (protocol, rest);
        }
    }
    ("https://", url)
}

/// Empty remainder yields an empty URL.
pub fn join_endpoint_url(protocol: &str, rest: &str) -> String {
    if rest.is_empty() {
        String::new()
    } else {
        format!("{protocol}{rest}")
    }
}

/// First ten characters of an id, for rows whose service is unknown.
pub fn short_id(id: &str) -> String {
    id.chars().take(10).collect()
}

// ============================================================================
// Numbers
// ============================================================================

/// At most one decimal place, thousands grouped: 1234.56 -> "1,234.6".
pub fn format_metric(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    let negative = rounded < 0.0;
    let abs = rounded.abs();
    let whole = abs.trunc() as u64;
    let tenth = ((abs - abs.trunc()) * 10.0).round() as u64;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    if tenth == 0 {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{tenth}")
    }
}

/// "230ms", or "--" when there is no measurement.
pub fn format_response_ms(ms: f64) -> String {
    if ms > 0.0 {
        format!("{}ms", ms.round())
    } else {
        "--".to_string()
    }
}

// ============================================================================
// Pagination
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Gap,
}

/// Page buttons: everything up to seven pages, otherwise first, last and a
/// window around `current` with gaps.
pub fn page_numbers(current: u32, total: u32) -> Vec<PageItem> {
    if total <= 7 {
        return (1..=total).map(PageItem::Page).collect();
    }

    let mut pages = vec![PageItem::Page(1)];
    if current > 3 {
        pages.push(PageItem::Gap);
    }

    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(total - 1);
    pages.extend((start..=end).map(PageItem::Page));

    if current + 2 < total {
        pages.push(PageItem::Gap);
    }
    pages.push(PageItem::Page(total));
    pages
}

/// "Showing X to Y" bounds, 1-based.
pub fn page_range(page: u32, limit: u32, total: u64) -> (u64, u64) {
    let from = (page.max(1) as u64 - 1) * limit as u64 + 1;
    let to = (page as u64 * limit as u64).min(total);
    (from.min(total), to)
}
