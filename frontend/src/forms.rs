//! Placeholder submission for the contact and newsletter forms.
//!
//! `submit` stands in for a network call: it waits a fixed latency and
//! reports success. Swapping in a real request keeps the same signature.

use gloo_timers::future::TimeoutFuture;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Submitting,
    Success,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub interest: String,
    pub message: String,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct NewsletterRequest {
    pub email: String,
}

/// Status transitions for one form. Only `Idle → Submitting → Success →
/// Idle` exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormFlow {
    status: SubmitStatus,
}

impl Default for FormFlow {
    fn default() -> Self {
        Self {
            status: SubmitStatus::Idle,
        }
    }
}

impl FormFlow {
    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    /// False while a submission is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.status == SubmitStatus::Submitting {
            return false;
        }
        self.status = SubmitStatus::Submitting;
        true
    }

    pub fn complete(&mut self) {
        if self.status == SubmitStatus::Submitting {
            self.status = SubmitStatus::Success;
        }
    }

    pub fn reset(&mut self) {
        if self.status == SubmitStatus::Success {
            self.status = SubmitStatus::Idle;
        }
    }

    pub fn button_label(&self, idle: &'static str, busy: &'static str, done: &'static str) -> &'static str {
        match self.status {
            SubmitStatus::Idle => idle,
            SubmitStatus::Submitting => busy,
            SubmitStatus::Success => done,
        }
    }
}

pub async fn submit<T: Serialize>(form: &str, payload: &T, latency_ms: u32) -> SubmitStatus {
    match serde_json::to_string(payload) {
        Ok(body) => log::info!("Form {} submitted: {}", form, body),
        Err(err) => log::warn!("Form {} payload not serializable: {}", form, err),
    }
    TimeoutFuture::new(latency_ms).await;
    SubmitStatus::Success
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_the_only_path() {
        let mut flow = FormFlow::default();
        assert_eq!(flow.status(), SubmitStatus::Idle);
        assert!(flow.begin());
        assert_eq!(flow.status(), SubmitStatus::Submitting);
        flow.complete();
        assert_eq!(flow.status(), SubmitStatus::Success);
        flow.reset();
        assert_eq!(flow.status(), SubmitStatus::Idle);
    }

    #[test]
    fn ignores_double_submit() {
        let mut flow = FormFlow::default();
        assert!(flow.begin());
        assert!(!flow.begin());
        flow.complete();
        assert!(flow.begin());
    }

    #[test]
    fn out_of_order_transitions_are_noops() {
        let mut flow = FormFlow::default();
        flow.complete();
        assert_eq!(flow.status(), SubmitStatus::Idle);
        flow.begin();
        flow.reset();
        assert_eq!(flow.status(), SubmitStatus::Submitting);
    }

    #[test]
    fn labels_follow_status() {
        let mut flow = FormFlow::default();
        let label = |flow: &FormFlow| flow.button_label("Subscribe", "Subscribing...", "✓ Subscribed!");
        assert_eq!(label(&flow), "Subscribe");
        flow.begin();
        assert_eq!(label(&flow), "Subscribing...");
        flow.complete();
        assert_eq!(label(&flow), "✓ Subscribed!");
    }

    #[test]
    fn contact_payload_serializes_field_names() {
        let request = ContactRequest {
            name: "Ada".into(),
            email: "ada@example.org".into(),
            interest: "courses".into(),
            message: "Hello".into(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["email"], "ada@example.org");
        assert_eq!(json["interest"], "courses");
    }
}
