//! Derived Metrics
//!
//! Pure functions over server data: colour tiers, labels, password strength
//! and chart geometry. Nothing here touches signals or the network.

use chrono::{DateTime, Duration, Utc};

use crate::bindings::{HttpMethod, ResponseTimePoint, ServiceItem, ServiceStatus};

// ============================================================================
// Uptime
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UptimeTier {
    Success,
    Warning,
    Error,
}

impl UptimeTier {
    pub fn from_percentage(pct: f64) -> Self {
        if pct >= 95.0 {
            UptimeTier::Success
        } else if pct >= 80.0 {
            UptimeTier::Warning
        } else {
            UptimeTier::Error
        }
    }

    pub fn text_class(&self) -> &'static str {
        match self {
            UptimeTier::Success => "text-status-success",
            UptimeTier::Warning => "text-status-warning",
            UptimeTier::Error => "text-status-error",
        }
    }

    pub fn bar_class(&self) -> &'static str {
        match self {
            UptimeTier::Success => "bg-status-success",
            UptimeTier::Warning => "bg-status-warning",
            UptimeTier::Error => "bg-status-error",
        }
    }
}

/// Thirty-day reliability wording on the detail screen.
pub fn reliability_label(uptime_pct: f64) -> &'static str {
    if uptime_pct >= 99.9 {
        "Nominal"
    } else if uptime_pct >= 99.0 {
        "Good"
    } else if uptime_pct >= 95.0 {
        "Fair"
    } else {
        "Degraded"
    }
}

/// Mean uptime of the listed services, one decimal. Zero for an empty page.
pub fn average_uptime(items: &[ServiceItem]) -> f64 {
    if items.is_empty() {
        return 0.0;
    }
    let sum: f64 = items.iter().map(|s| s.uptime_percentage).sum();
    (sum / items.len() as f64 * 10.0).round() / 10.0
}

// ============================================================================
// Response Time
// ============================================================================

/// Mean response of services that have been measured, whole milliseconds.
pub fn average_latency(items: &[ServiceItem]) -> f64 {
    let measured: Vec<f64> = items
        .iter()
        .map(|s| s.avg_response)
        .filter(|ms| *ms > 0.0)
        .collect();
    if measured.is_empty() {
        return 0.0;
    }
    (measured.iter().sum::<f64>() / measured.len() as f64).round()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseTier {
    /// Never checked.
    Unknown,
    Fast,
    Slow,
    Critical,
}

impl ResponseTier {
    pub fn from_ms(ms: f64) -> Self {
        if ms <= 0.0 {
            ResponseTier::Unknown
        } else if ms > 1000.0 {
            ResponseTier::Critical
        } else if ms > 500.0 {
            ResponseTier::Slow
        } else {
            ResponseTier::Fast
        }
    }

    pub fn text_class(&self) -> &'static str {
        match self {
            ResponseTier::Unknown => "text-text-secondary",
            ResponseTier::Fast => "text-status-success",
            ResponseTier::Slow => "text-status-warning",
            ResponseTier::Critical => "text-status-error",
        }
    }
}

// ============================================================================
// Status Labels
// ============================================================================

pub fn status_label(status: ServiceStatus) -> &'static str {
    match status {
        ServiceStatus::Active => "OPERATIONAL",
        ServiceStatus::Down => "DOWN",
        ServiceStatus::Warning => "WARNING",
        ServiceStatus::Paused => "PAUSED",
    }
}

/// Short badge on the dashboard health matrix.
pub fn status_badge(status: ServiceStatus) -> &'static str {
    match status {
        ServiceStatus::Active => "NOM",
        ServiceStatus::Warning => "WRN",
        ServiceStatus::Down => "CRIT",
        ServiceStatus::Paused => "IDLE",
    }
}

pub fn status_text_class(status: ServiceStatus) -> &'static str {
    match status {
        ServiceStatus::Active => "text-status-success",
        ServiceStatus::Down => "text-status-error",
        ServiceStatus::Warning => "text-status-warning",
        ServiceStatus::Paused => "text-text-secondary",
    }
}

pub fn status_badge_class(status: ServiceStatus) -> &'static str {
    match status {
        ServiceStatus::Active => "border-status-success text-status-success",
        ServiceStatus::Warning => "border-status-warning text-status-warning",
        ServiceStatus::Down => "border-status-error text-status-error",
        ServiceStatus::Paused => "border-text-tertiary text-text-tertiary",
    }
}

pub fn method_badge_class(method: HttpMethod) -> &'static str {
    match method {
        HttpMethod::Get => "border-status-success text-status-success",
        HttpMethod::Post | HttpMethod::Put => "border-status-info text-status-info",
        HttpMethod::Delete => "border-status-error text-status-error",
    }
}

/// Badge colour for a method string as the backend reports it.
pub fn reported_method_badge_class(method: &str) -> &'static str {
    if method.trim().eq_ignore_ascii_case("PATCH") {
        return "border-status-warning text-status-warning";
    }
    HttpMethod::parse(method).map_or("border-text-muted text-text-secondary", method_badge_class)
}

/// Status column wording in the services table.
pub fn status_table_label(status: ServiceStatus) -> &'static str {
    match status {
        ServiceStatus::Active => "ACTIVE",
        ServiceStatus::Down => "DOWN",
        ServiceStatus::Warning => "LATENCY WARNING",
        ServiceStatus::Paused => "PAUSED",
    }
}

pub fn status_dot_class(status: ServiceStatus) -> &'static str {
    match status {
        ServiceStatus::Active => "bg-status-success",
        ServiceStatus::Down => "bg-status-error",
        ServiceStatus::Warning => "bg-status-warning",
        ServiceStatus::Paused => "bg-text-muted",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncidentSeverity {
    Critical,
    Warning,
    Error,
}

impl IncidentSeverity {
    pub fn classify(status_code: u16, response_time_ms: f64) -> Self {
        if status_code >= 500 {
            IncidentSeverity::Critical
        } else if response_time_ms > 1000.0 {
            IncidentSeverity::Warning
        } else {
            IncidentSeverity::Error
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IncidentSeverity::Critical => "CRITICAL",
            IncidentSeverity::Warning => "WARNING",
            IncidentSeverity::Error => "ERROR",
        }
    }

    pub fn text_class(&self) -> &'static str {
        match self {
            IncidentSeverity::Warning => "text-status-warning",
            IncidentSeverity::Critical | IncidentSeverity::Error => "text-status-error",
        }
    }
}

// ============================================================================
// Password Strength
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLevel {
    None,
    Weak,
    Moderate,
    Strong,
    Maximum,
}

impl StrengthLevel {
    pub fn from_passed(passed: usize) -> Self {
        match passed {
            0 => StrengthLevel::None,
            1 => StrengthLevel::Weak,
            2 => StrengthLevel::Moderate,
            3 => StrengthLevel::Strong,
            _ => StrengthLevel::Maximum,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthLevel::None => "NONE",
            StrengthLevel::Weak => "WEAK",
            StrengthLevel::Moderate => "MODERATE",
            StrengthLevel::Strong => "STRONG",
            StrengthLevel::Maximum => "MAXIMUM",
        }
    }

    pub fn bar_class(&self) -> &'static str {
        match self {
            StrengthLevel::None => "bg-border-light",
            StrengthLevel::Weak => "bg-status-error",
            StrengthLevel::Moderate => "bg-status-warning",
            StrengthLevel::Strong | StrengthLevel::Maximum => "bg-primary",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementCheck {
    pub key: &'static str,
    pub label: &'static str,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordStrength {
    pub requirements: Vec<RequirementCheck>,
    pub passed_count: usize,
    pub level: StrengthLevel,
}

impl PasswordStrength {
    pub fn is_strong(&self) -> bool {
        self.passed_count == self.requirements.len()
    }
}

type Predicate = fn(&str) -> bool;

const REQUIREMENTS: [(&str, &str, Predicate); 4] = [
    ("length", "CHAR_COUNT > 12", |pw| pw.chars().count() >= 12),
    ("uppercase", "UPPERCASE_REQUIRED", |pw| {
        pw.chars().any(|c| c.is_ascii_uppercase())
    }),
    ("numeric", "NUMERIC_VALUE", |pw| pw.chars().any(|c| c.is_ascii_digit())),
    ("symbol", "SYMBOL_SET", |pw| {
        pw.chars().any(|c| !c.is_ascii_alphanumeric())
    }),
];

/// Empty input passes nothing.
pub fn password_strength(password: &str) -> PasswordStrength {
    let requirements: Vec<RequirementCheck> = REQUIREMENTS
        .iter()
        .map(|&(key, label, test)| RequirementCheck {
            key,
            label,
            passed: !password.is_empty() && test(password),
        })
        .collect();
    let passed_count = requirements.iter().filter(|r| r.passed).count();

    PasswordStrength {
        requirements,
        passed_count,
        level: StrengthLevel::from_passed(passed_count),
    }
}

// ============================================================================
// Sparklines
// ============================================================================

/// SVG polyline `points` for a series. The y-range always spans 0 and 1 so a
/// flat series sits on the baseline. Fewer than two samples draw nothing.
pub fn sparkline_points(values: &[f64], width: f64, height: f64, padding: f64) -> String {
    if values.len() < 2 {
        return String::new();
    }

    let max = values.iter().copied().fold(1.0_f64, f64::max);
    let min = values.iter().copied().fold(0.0_f64, f64::min);
    let range = if max - min == 0.0 { 1.0 } else { max - min };
    let usable_w = width - padding * 2.0;
    let usable_h = height - padding * 2.0;
    let last = (values.len() - 1) as f64;

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = padding + (i as f64 / last) * usable_w;
            let y = padding + usable_h - ((v - min) / range) * usable_h;
            format!("{},{}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// Response Time Chart
// ============================================================================

pub const CHART_WIDTH: f64 = 700.0;
pub const CHART_HEIGHT: f64 = 200.0;
pub const CHART_PAD_TOP: f64 = 20.0;
pub const CHART_PAD_RIGHT: f64 = 20.0;
pub const CHART_PAD_BOTTOM: f64 = 30.0;
pub const CHART_PAD_LEFT: f64 = 50.0;
pub const RESPONSE_THRESHOLD_MS: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    #[default]
    OneHour,
    SixHours,
    TwelveHours,
    Day,
}

impl TimeRange {
    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::OneHour => "1H",
            TimeRange::SixHours => "6H",
            TimeRange::TwelveHours => "12H",
            TimeRange::Day => "24H",
        }
    }

    pub fn duration(&self) -> Duration {
        match self {
            TimeRange::OneHour => Duration::hours(1),
            TimeRange::SixHours => Duration::hours(6),
            TimeRange::TwelveHours => Duration::hours(12),
            TimeRange::Day => Duration::hours(24),
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            TimeRange::OneHour,
            TimeRange::SixHours,
            TimeRange::TwelveHours,
            TimeRange::Day,
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartTick {
    pub x: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResponseChart {
    /// SVG path `d` attribute.
    pub path: String,
    pub threshold_y: f64,
    /// Horizontal grid lines at 25/50/75/100% of the value axis.
    pub grid_ys: Vec<f64>,
    pub ticks: Vec<ChartTick>,
}

/// Chart geometry for the samples inside `range` ending at `now`.
/// `None` when fewer than two timestamped samples fall inside the window.
pub fn response_time_chart(
    points: &[ResponseTimePoint],
    range: TimeRange,
    now: DateTime<Utc>,
) -> Option<ResponseChart> {
    let cutoff = now - range.duration();
    let samples: Vec<(i64, f64)> = points
        .iter()
        .filter_map(|p| {
            let t = DateTime::parse_from_rfc3339(&p.time).ok()?.with_timezone(&Utc);
            (t >= cutoff).then(|| (t.timestamp_millis(), p.value))
        })
        .collect();
    if samples.len() < 2 {
        return None;
    }

    let usable_w = CHART_WIDTH - CHART_PAD_LEFT - CHART_PAD_RIGHT;
    let usable_h = CHART_HEIGHT - CHART_PAD_TOP - CHART_PAD_BOTTOM;

    let max_value = samples
        .iter()
        .map(|(_, v)| *v)
        .fold(RESPONSE_THRESHOLD_MS, f64::max)
        * 1.2;
    let min_time = samples.iter().map(|(t, _)| *t).min().unwrap_or_default();
    let max_time = samples.iter().map(|(t, _)| *t).max().unwrap_or_default();
    let span = match (max_time - min_time) as f64 {
        s if s == 0.0 => 1.0,
        s => s,
    };

    let x_at = |t: f64| CHART_PAD_LEFT + ((t - min_time as f64) / span) * usable_w;
    let y_at = |v: f64| CHART_PAD_TOP + usable_h - (v / max_value) * usable_h;

    let path = samples
        .iter()
        .enumerate()
        .map(|(i, (t, v))| {
            let cmd = if i == 0 { 'M' } else { 'L' };
            format!("{}{},{}", cmd, x_at(*t as f64), y_at(*v))
        })
        .collect::<Vec<_>>()
        .join(" ");

    let grid_ys = [0.25, 0.5, 0.75, 1.0]
        .iter()
        .map(|pct| CHART_PAD_TOP + usable_h * (1.0 - pct))
        .collect();

    let step = span / 5.0;
    let ticks = (0..=5)
        .map(|i| {
            let t = min_time as f64 + step * i as f64;
            let label = DateTime::<Utc>::from_timestamp_millis(t as i64)
                .map(|d| d.format("%H:%M").to_string())
                .unwrap_or_default();
            ChartTick { x: x_at(t), label }
        })
        .collect();

    Some(ResponseChart {
        path,
        threshold_y: y_at(RESPONSE_THRESHOLD_MS),
        grid_ys,
        ticks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uptime_tiers() {
        assert_eq!(UptimeTier::from_percentage(100.0), UptimeTier::Success);
        assert_eq!(UptimeTier::from_percentage(95.0), UptimeTier::Success);
        assert_eq!(UptimeTier::from_percentage(94.9), UptimeTier::Warning);
        assert_eq!(UptimeTier::from_percentage(80.0), UptimeTier::Warning);
        assert_eq!(UptimeTier::from_percentage(79.9), UptimeTier::Error);
    }

    fn item(uptime: f64, avg_response: f64) -> ServiceItem {
        ServiceItem {
            id: "s".to_string(),
            status: ServiceStatus::Active,
            name: "svc".to_string(),
            endpoint: "https://example.com".to_string(),
            method: "GET".to_string(),
            interval: 30_000,
            uptime_percentage: uptime,
            avg_response,
            last_check: None,
            failure_count: 0,
            success_count: 0,
        }
    }

    #[test]
    fn test_list_averages() {
        assert_eq!(average_uptime(&[]), 0.0);
        assert_eq!(average_uptime(&[item(100.0, 0.0), item(99.25, 0.0)]), 99.6);
        assert_eq!(average_latency(&[item(0.0, 0.0)]), 0.0);
        assert_eq!(average_latency(&[item(0.0, 100.0), item(0.0, 0.0), item(0.0, 201.0)]), 151.0);
    }

    #[test]
    fn test_reliability_labels() {
        assert_eq!(reliability_label(99.95), "Nominal");
        assert_eq!(reliability_label(99.5), "Good");
        assert_eq!(reliability_label(96.0), "Fair");
        assert_eq!(reliability_label(90.0), "Degraded");
    }

    #[test]
    fn test_response_tiers() {
        assert_eq!(ResponseTier::from_ms(0.0), ResponseTier::Unknown);
        assert_eq!(ResponseTier::from_ms(120.0), ResponseTier::Fast);
        assert_eq!(ResponseTier::from_ms(500.0), ResponseTier::Fast);
        assert_eq!(ResponseTier::from_ms(501.0), ResponseTier::Slow);
        assert_eq!(ResponseTier::from_ms(1001.0), ResponseTier::Critical);
    }

    #[test]
    fn test_incident_severity() {
        assert_eq!(IncidentSeverity::classify(503, 10.0), IncidentSeverity::Critical);
        assert_eq!(IncidentSeverity::classify(0, 5000.0), IncidentSeverity::Warning);
        assert_eq!(IncidentSeverity::classify(404, 30.0), IncidentSeverity::Error);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(status_label(ServiceStatus::Active), "OPERATIONAL");
        assert_eq!(status_badge(ServiceStatus::Down), "CRIT");
        assert_eq!(status_badge(ServiceStatus::Paused), "IDLE");
        assert_eq!(status_table_label(ServiceStatus::Warning), "LATENCY WARNING");
    }

    #[test]
    fn test_reported_method_badges() {
        assert_eq!(reported_method_badge_class("get"), method_badge_class(HttpMethod::Get));
        assert!(reported_method_badge_class("PATCH").contains("status-warning"));
        assert!(reported_method_badge_class("OPTIONS").contains("text-secondary"));
    }

    #[test]
    fn test_password_strength_levels() {
        let empty = password_strength("");
        assert_eq!(empty.passed_count, 0);
        assert_eq!(empty.level, StrengthLevel::None);
        assert!(empty.requirements.iter().all(|r| !r.passed));

        assert_eq!(password_strength("abc").passed_count, 0);
        assert_eq!(password_strength("abc1").level, StrengthLevel::Weak);
        assert_eq!(password_strength("Abc1").level, StrengthLevel::Moderate);
        assert_eq!(password_strength("Abc1!").level, StrengthLevel::Strong);

        let max = password_strength("Abcdefghijkl1!");
        assert_eq!(max.passed_count, 4);
        assert_eq!(max.level, StrengthLevel::Maximum);
        assert!(max.is_strong());
    }

    #[test]
    fn test_password_symbol_includes_non_ascii() {
        let strength = password_strength("é");
        let symbol = strength.requirements.iter().find(|r| r.key == "symbol").unwrap();
        assert!(symbol.passed);
    }

    #[test]
    fn test_sparkline_short_series() {
        assert_eq!(sparkline_points(&[], 100.0, 50.0, 0.0), "");
        assert_eq!(sparkline_points(&[5.0], 100.0, 50.0, 0.0), "");
    }

    #[test]
    fn test_sparkline_two_points() {
        assert_eq!(sparkline_points(&[0.0, 10.0], 100.0, 50.0, 0.0), "0,50 100,0");
    }

    #[test]
    fn test_sparkline_flat_zero_series_sits_on_baseline() {
        assert_eq!(sparkline_points(&[0.0, 0.0, 0.0], 100.0, 50.0, 0.0), "0,50 50,50 100,50");
    }

    #[test]
    fn test_sparkline_padding() {
        assert_eq!(sparkline_points(&[0.0, 1.0], 200.0, 60.0, 4.0), "4,56 196,4");
    }

    fn point(time: &str, value: f64) -> ResponseTimePoint {
        ResponseTimePoint {
            time: time.to_string(),
            value,
        }
    }

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_chart_needs_two_points_in_range() {
        let points = vec![
            point("2024-05-01T06:00:00Z", 100.0),
            point("2024-05-01T11:30:00Z", 120.0),
        ];
        assert!(response_time_chart(&points, TimeRange::OneHour, now()).is_none());
        assert!(response_time_chart(&points, TimeRange::Day, now()).is_some());
    }

    #[test]
    fn test_chart_geometry() {
        let points = vec![
            point("2024-05-01T11:00:00Z", 0.0),
            point("2024-05-01T12:00:00Z", 200.0),
        ];
        let chart = response_time_chart(&points, TimeRange::OneHour, now()).unwrap();

        // value axis tops out at 240; usable height 150
        assert!(chart.path.starts_with("M50,170 L680,"));
        assert!((chart.threshold_y - 45.0).abs() < 1e-9);
        assert_eq!(chart.ticks.len(), 6);
        assert_eq!(chart.ticks[0].label, "11:00");
        assert_eq!(chart.ticks[5].label, "12:00");
        assert_eq!(chart.grid_ys, vec![132.5, 95.0, 57.5, 20.0]);
    }

    #[test]
    fn test_chart_skips_unparseable_times() {
        let points = vec![
            point("garbage", 10.0),
            point("2024-05-01T11:59:00Z", 10.0),
        ];
        assert!(response_time_chart(&points, TimeRange::OneHour, now()).is_none());
    }
}
