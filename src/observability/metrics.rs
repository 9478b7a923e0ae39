use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};

pub const OUTCOME_SUCCESS: &str = "success";
pub const OUTCOME_SESSION_EXPIRED: &str = "session_expired";
pub const OUTCOME_STATUS: &str = "status";
pub const OUTCOME_TRANSPORT: &str = "transport";
pub const OUTCOME_DECODE: &str = "decode";

/// Metrics of a single client. Each client owns its registry so several
/// controllers can be talked to from one process without collisions.
#[derive(Clone)]
pub struct ClientMetrics {
    pub registry: Registry,

    // Authentication
    pub auth_requests: IntCounter,
    pub auth_failures: IntCounterVec,
    pub token_active: IntGauge,

    // Requests
    pub api_requests: IntCounterVec,
    pub api_request_duration: HistogramVec,
    pub session_expired: IntCounter,
    pub retry_exhausted: IntCounter,
}

impl ClientMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new_custom(Some("omada_client".into()), None)?;

        let metrics = Self {
            auth_requests: IntCounter::new("auth_requests_total", "Token requests sent to the controller")?,
            auth_failures: IntCounterVec::new(Opts::new("auth_failures_total", "Token request failures by reason"), &["reason"])?,
            token_active: IntGauge::new("token_active", "1 while an access token is cached")?,

            api_requests: IntCounterVec::new(Opts::new("api_requests_total", "Authenticated requests by outcome"), &["method", "outcome"])?,
            api_request_duration: HistogramVec::new(HistogramOpts::new("api_request_duration_seconds", "Authenticated request duration seconds").buckets(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]), &["method"])?,
            session_expired: IntCounter::new("session_expired_total", "Responses carrying the session expired code")?,
            retry_exhausted: IntCounter::new("retry_exhausted_total", "Requests abandoned after refreshing the token")?,

            registry,
        };

        let reg = &metrics.registry;
        reg.register(Box::new(metrics.auth_requests.clone()))?;
        reg.register(Box::new(metrics.auth_failures.clone()))?;
        reg.register(Box::new(metrics.token_active.clone()))?;
        reg.register(Box::new(metrics.api_requests.clone()))?;
        reg.register(Box::new(metrics.api_request_duration.clone()))?;
        reg.register(Box::new(metrics.session_expired.clone()))?;
        reg.register(Box::new(metrics.retry_exhausted.clone()))?;

        Ok(metrics)
    }

    pub fn observe_request(&self, method: &str, outcome: &str) {
        self.api_requests.with_label_values(&[method, outcome]).inc();
    }

    /// Render the registry in the Prometheus text exposition format.
    pub fn encode_text(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|err| prometheus::Error::Msg(err.to_string()))
    }
}
