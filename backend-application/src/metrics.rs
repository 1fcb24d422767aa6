use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    webhook_requests: AtomicU64,
    stored_events: AtomicU64,
    ignored_events: AtomicU64,
    webhook_errors: AtomicU64,
}

impl Metrics {
    pub fn record_webhook_request(&self) {
        self.webhook_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_stored(&self) {
        self.stored_events.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_ignored(&self) {
        self.ignored_events.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_webhook_error(&self) {
        self.webhook_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn webhook_requests(&self) -> u64 {
        self.webhook_requests.load(Ordering::Relaxed)
    }

    pub fn stored_events(&self) -> u64 {
        self.stored_events.load(Ordering::Relaxed)
    }

    pub fn webhook_errors(&self) -> u64 {
        self.webhook_errors.load(Ordering::Relaxed)
    }

    pub fn render_prometheus(&self) -> String {
        let requests = self.webhook_requests.load(Ordering::Relaxed);
        let stored = self.stored_events.load(Ordering::Relaxed);
        let ignored = self.ignored_events.load(Ordering::Relaxed);
        let errors = self.webhook_errors.load(Ordering::Relaxed);

        format!(
            "# TYPE hookfeed_webhook_requests_total counter\n\
hookfeed_webhook_requests_total {}\n\
# TYPE hookfeed_stored_events_total counter\n\
hookfeed_stored_events_total {}\n\
# TYPE hookfeed_ignored_events_total counter\n\
hookfeed_ignored_events_total {}\n\
# TYPE hookfeed_webhook_errors_total counter\n\
hookfeed_webhook_errors_total {}\n",
            requests, stored, ignored, errors
        )
    }
}
