use catnet_intake::i18n::Locale;
use catnet_intake::workflows::assessment::{DispatchError, SubmissionPayload, SubmissionSink};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Demo sink: records the payload instead of leaving the machine.
#[derive(Default)]
pub(crate) struct InMemorySubmissionSink {
    deliveries: Mutex<Vec<SubmissionPayload>>,
}

impl InMemorySubmissionSink {
    pub(crate) fn deliveries(&self) -> Vec<SubmissionPayload> {
        self.deliveries.lock().expect("sink mutex poisoned").clone()
    }
}

impl SubmissionSink for InMemorySubmissionSink {
    async fn deliver(&self, payload: &SubmissionPayload) -> Result<(), DispatchError> {
        self.deliveries
            .lock()
            .expect("sink mutex poisoned")
            .push(payload.clone());
        Ok(())
    }
}

/// Demo sink simulating a webhook transport outage.
pub(crate) struct FailingSubmissionSink;

impl SubmissionSink for FailingSubmissionSink {
    async fn deliver(&self, _payload: &SubmissionPayload) -> Result<(), DispatchError> {
        Err(DispatchError::Transport(
            "simulated webhook outage".to_string(),
        ))
    }
}

pub(crate) fn parse_locale(raw: &str) -> Result<Locale, String> {
    Locale::from_tag(raw).ok_or_else(|| format!("unsupported locale '{raw}' (expected zh or en)"))
}
