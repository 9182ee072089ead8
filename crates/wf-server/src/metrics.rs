//! Request metrics
//!
//! Counters kept in atomics and rendered as Prometheus text on `/metrics`.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{debug, info_span, Instrument};

/// Status classes tracked per response, in label order
const STATUS_CLASSES: [&str; 5] = ["1xx", "2xx", "3xx", "4xx", "5xx"];

#[derive(Default)]
pub struct Metrics {
    by_class: [AtomicU64; 5],
    duration_ms: AtomicU64,
    in_flight: AtomicU64,
    sessions_expired: AtomicU64,
    started: Option<Instant>,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            started: Some(Instant::now()),
            ..Self::default()
        }
    }

    pub fn record_request(&self, status: StatusCode, duration_ms: u64) {
        self.duration_ms.fetch_add(duration_ms, Ordering::Relaxed);
        let class = usize::from(status.as_u16() / 100).saturating_sub(1);
        if let Some(counter) = self.by_class.get(class) {
            counter.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_expired_sessions(&self, count: usize) {
        self.sessions_expired
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    fn requests_total(&self) -> u64 {
        self.by_class.iter().map(|c| c.load(Ordering::Relaxed)).sum()
    }

    fn uptime_seconds(&self) -> u64 {
        self.started.map_or(0, |t| t.elapsed().as_secs())
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        family(&mut out, "wf_http_requests_total", "counter", "HTTP responses by status class");
        for (class, counter) in STATUS_CLASSES.iter().zip(&self.by_class) {
            let _ = writeln!(
                out,
                "wf_http_requests_total{{status=\"{}\"}} {}",
                class,
                counter.load(Ordering::Relaxed)
            );
        }

        let scalars = [
            (
                "wf_http_responses_served",
                "counter",
                "HTTP responses across all classes",
                self.requests_total(),
            ),
            (
                "wf_http_request_duration_ms_total",
                "counter",
                "Time spent serving requests",
                self.duration_ms.load(Ordering::Relaxed),
            ),
            (
                "wf_http_requests_in_flight",
                "gauge",
                "Requests being served right now",
                self.in_flight.load(Ordering::Relaxed),
            ),
            (
                "wf_sessions_expired_total",
                "counter",
                "Sessions removed by the expiry sweep",
                self.sessions_expired.load(Ordering::Relaxed),
            ),
            ("wf_uptime_seconds", "gauge", "Seconds since startup", self.uptime_seconds()),
        ];
        for (name, kind, help, value) in scalars {
            family(&mut out, name, kind, help);
            let _ = writeln!(out, "{} {}", name, value);
        }

        out
    }
}

fn family(out: &mut String, name: &str, kind: &str, help: &str) {
    let _ = writeln!(out, "# HELP {} {}", name, help);
    let _ = writeln!(out, "# TYPE {} {}", name, kind);
}

/// Counts every response and logs its latency
pub async fn metrics_middleware(
    State(metrics): State<Arc<Metrics>>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    metrics.in_flight.fetch_add(1, Ordering::Relaxed);
    let response = next
        .run(request)
        .instrument(info_span!("request", %method, %path))
        .await;
    metrics.in_flight.fetch_sub(1, Ordering::Relaxed);

    let elapsed_ms = started.elapsed().as_millis() as u64;
    metrics.record_request(response.status(), elapsed_ms);
    debug!(%method, %path, status = response.status().as_u16(), elapsed_ms, "served");

    response
}

/// GET /metrics
pub async fn prometheus_metrics(State(metrics): State<Arc<Metrics>>) -> String {
    metrics.render()
}
