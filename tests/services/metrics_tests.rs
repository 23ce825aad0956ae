//! Derived Metrics Tests
//!
//! Services-page aggregates, detail chart windows and request assembly.

use chrono::{Duration, TimeZone, Utc};

use watchdog_frontend::bindings::{HttpMethod, ResponseTimePoint, ServiceItem, ServiceStatus};
use watchdog_frontend::services::metrics::{
    average_latency, average_uptime, response_time_chart, sparkline_points, IncidentSeverity,
    ResponseTier, TimeRange, UptimeTier,
};
use watchdog_frontend::services::payload::assemble_service_payload;
use watchdog_frontend::services::wizard_state::{HeaderEntry, ServiceDraft};

fn item(uptime: f64, avg_response: f64) -> ServiceItem {
    ServiceItem {
        id: format!("svc-{uptime}"),
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
fn test_page_averages_skip_unmeasured_latency() {
    let items = vec![item(100.0, 120.0), item(90.0, 0.0), item(80.5, 280.0)];

    assert_eq!(average_uptime(&items), 90.2);
    assert_eq!(average_latency(&items), 200.0);
    assert_eq!(average_uptime(&[]), 0.0);
    assert_eq!(average_latency(&[item(99.0, 0.0)]), 0.0);
}

#[test]
fn test_tier_boundaries() {
    assert_eq!(UptimeTier::from_percentage(95.0), UptimeTier::Success);
    assert_eq!(UptimeTier::from_percentage(80.0), UptimeTier::Warning);
    assert_eq!(UptimeTier::from_percentage(79.9), UptimeTier::Error);

    assert_eq!(ResponseTier::from_ms(0.0), ResponseTier::Unknown);
    assert_eq!(ResponseTier::from_ms(500.0), ResponseTier::Fast);
    assert_eq!(ResponseTier::from_ms(1000.0), ResponseTier::Slow);
    assert_eq!(ResponseTier::from_ms(1000.1), ResponseTier::Critical);

    assert_eq!(IncidentSeverity::classify(503, 10.0).label(), "CRITICAL");
    assert_eq!(IncidentSeverity::classify(404, 1500.0).label(), "WARNING");
    assert_eq!(IncidentSeverity::classify(404, 20.0).label(), "ERROR");
}

#[test]
fn test_sparkline_spans_zero_to_one() {
    assert_eq!(sparkline_points(&[0.0, 1.0], 100.0, 50.0, 5.0), "5,45 95,5");
    assert_eq!(sparkline_points(&[0.5], 100.0, 50.0, 5.0), "");
}

#[test]
fn test_chart_window_drops_stale_samples() {
    let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let at = |minutes_ago: i64, value: f64| ResponseTimePoint {
        time: (now - Duration::minutes(minutes_ago)).to_rfc3339(),
        value,
    };
    let points = vec![at(300, 90.0), at(30, 120.0), at(10, 150.0)];

    let hour = response_time_chart(&points, TimeRange::OneHour, now).unwrap();
    assert!(hour.path.starts_with('M'));
    assert_eq!(hour.path.matches('L').count(), 1);

    let six = response_time_chart(&points, TimeRange::SixHours, now).unwrap();
    assert_eq!(six.path.matches('L').count(), 2);

    let sparse = vec![at(30, 120.0), at(200, 80.0)];
    assert!(response_time_chart(&sparse, TimeRange::OneHour, now).is_none());
}

#[test]
fn test_payload_drops_blank_headers_and_get_body() {
    let draft = ServiceDraft {
        service_name: "  Billing  ".to_string(),
        endpoint_url: " https://billing.example.com/health ".to_string(),
        method: HttpMethod::Get,
        body: "{\"ignored\":true}".to_string(),
        headers: vec![
            HeaderEntry {
                id: "h1".to_string(),
                key: " X-Token ".to_string(),
                value: "abc".to_string(),
            },
            HeaderEntry {
                id: "h2".to_string(),
                key: "   ".to_string(),
                value: "dropped".to_string(),
            },
        ],
        ..Default::default()
    };

    let payload = assemble_service_payload(&draft);
    assert_eq!(payload.service_name, "Billing");
    assert_eq!(payload.endpoint_url, "https://billing.example.com/health");
    assert!(payload.body.is_none());

    let headers = payload.headers.unwrap();
    assert_eq!(headers.len(), 1);
    assert_eq!(headers.get("X-Token").map(String::as_str), Some("abc"));
}
