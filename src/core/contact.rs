//! Contact form state machine
//!
//! ```text
//! Idle | ValidationFailed | SendFailed --submit(blank)--> ValidationFailed
//! Idle | ValidationFailed | SendFailed --submit(ok)-----> Sending
//! Sending --delivered--> Sent --5s--> Idle
//! Sending --failed-----> SendFailed
//! ```
//!
//! The machine only prepares the payload; the network call is made by the
//! caller through an [`EmailDelivery`](super::delivery::EmailDelivery)
//! implementation and its result is fed back with [`ContactFormMachine::finish`].

use std::time::Duration;

use serde::Serialize;

use super::delivery::DeliveryError;

/// How long the success state is shown before the form resets
pub const SENT_RESET_DELAY: Duration = Duration::from_secs(5);

/// Subject used when the sender leaves it empty
pub const DEFAULT_SUBJECT: &str = "No subject";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub fn is_required(&self) -> bool {
        !matches!(self, ContactField::Subject)
    }
}

/// Raw field values as typed by the sender
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    /// Required fields that are empty after trimming
    pub fn missing_fields(&self) -> Vec<ContactField> {
        [ContactField::Name, ContactField::Email, ContactField::Message]
            .into_iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.subject.is_empty()
            && self.message.is_empty()
    }

    /// Template parameters handed to the delivery service
    pub fn to_payload(&self) -> EmailPayload {
        let subject = if self.subject.is_empty() {
            DEFAULT_SUBJECT.to_string()
        } else {
            self.subject.clone()
        };

        EmailPayload {
            from_name: self.name.clone(),
            from_email: self.email.clone(),
            subject,
            message: self.message.clone(),
        }
    }
}

/// Message sent to the delivery service
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmailPayload {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    ValidationFailed,
    Sending,
    Sent,
    SendFailed,
}

/// Tone of the inline feedback line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackKind {
    Warning,
    Error,
    Success,
}

impl FeedbackKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            FeedbackKind::Warning => "status-warning",
            FeedbackKind::Error => "status-error",
            FeedbackKind::Success => "status-success",
        }
    }
}

impl SubmissionStatus {
    pub fn button_label(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "Send Message ✦",
            SubmissionStatus::ValidationFailed => "Send Message ✦",
            SubmissionStatus::Sending => "Sending...",
            SubmissionStatus::Sent => "Message Sent ✓",
            SubmissionStatus::SendFailed => "Try Again",
        }
    }

    pub fn feedback(&self) -> Option<(FeedbackKind, &'static str)> {
        match self {
            SubmissionStatus::Idle | SubmissionStatus::Sending => None,
            SubmissionStatus::ValidationFailed => Some((
                FeedbackKind::Warning,
                "⚠ Please fill in Name, Email and Message.",
            )),
            SubmissionStatus::Sent => Some((
                FeedbackKind::Success,
                "✓ Message sent! I'll get back to you soon.",
            )),
            SubmissionStatus::SendFailed => Some((
                FeedbackKind::Error,
                "✕ Something went wrong. Please try again.",
            )),
        }
    }

    /// Submit button is disabled while a message is in flight or just sent
    pub fn can_submit(&self) -> bool {
        !matches!(self, SubmissionStatus::Sending | SubmissionStatus::Sent)
    }

    pub fn accepts_edits(&self) -> bool {
        self.can_submit()
    }
}

/// Result of a submit attempt
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Submit is disabled in the current state
    Ignored,
    /// Required fields are blank; nothing is sent
    Invalid(Vec<ContactField>),
    /// Hand this payload to the delivery service, then call `finish`
    Send(EmailPayload),
}

/// Permission to move a sent form back to idle once `delay` has elapsed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResetTicket {
    generation: u64,
    pub delay: Duration,
}

impl ResetTicket {
    pub fn delay_ms(&self) -> u32 {
        u32::try_from(self.delay.as_millis()).unwrap_or(u32::MAX)
    }
}

/// Contact form fields plus submission lifecycle
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFormMachine {
    form: ContactForm,
    status: SubmissionStatus,
    generation: u64,
}

impl ContactFormMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn field(&self, field: ContactField) -> &str {
        self.form.get(field)
    }

    /// Update a field. Rejected (returns `false`) while sending or sent.
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) -> bool {
        if !self.status.accepts_edits() {
            return false;
        }
        *self.form.get_mut(field) = value.into();
        true
    }

    pub fn submit(&mut self) -> SubmitDecision {
        if !self.status.can_submit() {
            return SubmitDecision::Ignored;
        }

        let missing = self.form.missing_fields();
        if !missing.is_empty() {
            self.status = SubmissionStatus::ValidationFailed;
            return SubmitDecision::Invalid(missing);
        }

        self.status = SubmissionStatus::Sending;
        self.generation = self.generation.wrapping_add(1);
        SubmitDecision::Send(self.form.to_payload())
    }

    /// Feed back the delivery result of the in-flight submission
    ///
    /// On success the fields are cleared and a ticket for the automatic
    /// reset is returned. Results arriving outside `Sending` are ignored.
    pub fn finish(&mut self, result: Result<(), DeliveryError>) -> Option<ResetTicket> {
        if self.status != SubmissionStatus::Sending {
            return None;
        }

        match result {
            Ok(()) => {
                self.status = SubmissionStatus::Sent;
                self.form = ContactForm::default();
                Some(ResetTicket {
                    generation: self.generation,
                    delay: SENT_RESET_DELAY,
                })
            }
            Err(_) => {
                self.status = SubmissionStatus::SendFailed;
                None
            }
        }
    }

    /// Return to idle after a successful send. Stale tickets are ignored.
    pub fn expire(&mut self, ticket: ResetTicket) -> bool {
        if self.status == SubmissionStatus::Sent && ticket.generation == self.generation {
            self.status = SubmissionStatus::Idle;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFormMachine {
        let mut machine = ContactFormMachine::new();
        machine.set_field(ContactField::Name, "Jane");
        machine.set_field(ContactField::Email, "jane@x.com");
        machine.set_field(ContactField::Message, "Hello");
        machine
    }

    #[test]
    fn test_starts_idle_and_empty() {
        let machine = ContactFormMachine::new();
        assert_eq!(machine.status(), SubmissionStatus::Idle);
        assert!(machine.form().is_empty());
    }

    #[test]
    fn test_edit_keeps_idle() {
        let mut machine = ContactFormMachine::new();
        assert!(machine.set_field(ContactField::Subject, "Hi"));
        assert_eq!(machine.field(ContactField::Subject), "Hi");
        assert_eq!(machine.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_whitespace_counts_as_blank() {
        let mut machine = filled();
        machine.set_field(ContactField::Message, "   \n\t");

        assert_eq!(
            machine.submit(),
            SubmitDecision::Invalid(vec![ContactField::Message])
        );
        assert_eq!(machine.status(), SubmissionStatus::ValidationFailed);
    }

    #[test]
    fn test_subject_not_required() {
        assert!(!ContactField::Subject.is_required());
        assert!(ContactField::Email.is_required());
        assert!(filled().form().is_complete());
    }

    #[test]
    fn test_reports_all_missing_fields() {
        let mut machine = ContactFormMachine::new();
        assert_eq!(
            machine.submit(),
            SubmitDecision::Invalid(vec![
                ContactField::Name,
                ContactField::Email,
                ContactField::Message
            ])
        );
    }

    #[test]
    fn test_edit_after_validation_failure_keeps_status() {
        let mut machine = ContactFormMachine::new();
        machine.submit();
        assert!(machine.set_field(ContactField::Name, "Jane"));
        assert_eq!(machine.status(), SubmissionStatus::ValidationFailed);
    }

    #[test]
    fn test_valid_submit_moves_to_sending() {
        let mut machine = filled();
        let decision = machine.submit();

        assert_eq!(machine.status(), SubmissionStatus::Sending);
        let SubmitDecision::Send(payload) = decision else {
            panic!("expected payload, got {decision:?}");
        };
        assert_eq!(payload.from_name, "Jane");
        assert_eq!(payload.subject, DEFAULT_SUBJECT);
    }

    #[test]
    fn test_payload_keeps_given_subject() {
        let mut machine = filled();
        machine.set_field(ContactField::Subject, "Project discussion");
        assert_eq!(machine.form().to_payload().subject, "Project discussion");
    }

    #[test]
    fn test_edits_rejected_while_sending() {
        let mut machine = filled();
        machine.submit();

        assert!(!machine.set_field(ContactField::Name, "Someone else"));
        assert_eq!(machine.field(ContactField::Name), "Jane");
    }

    #[test]
    fn test_submit_ignored_while_sending_and_sent() {
        let mut machine = filled();
        machine.submit();
        assert_eq!(machine.submit(), SubmitDecision::Ignored);

        machine.finish(Ok(()));
        assert_eq!(machine.submit(), SubmitDecision::Ignored);
        assert_eq!(machine.status(), SubmissionStatus::Sent);
    }

    #[test]
    fn test_success_clears_fields() {
        let mut machine = filled();
        machine.set_field(ContactField::Subject, "Hi");
        machine.submit();

        let ticket = machine.finish(Ok(()));

        assert!(ticket.is_some());
        assert_eq!(machine.status(), SubmissionStatus::Sent);
        assert!(machine.form().is_empty());
    }

    #[test]
    fn test_failure_keeps_fields() {
        let mut machine = filled();
        machine.submit();

        let ticket = machine.finish(Err(DeliveryError::NotConfigured));

        assert!(ticket.is_none());
        assert_eq!(machine.status(), SubmissionStatus::SendFailed);
        assert_eq!(machine.field(ContactField::Email), "jane@x.com");
    }

    #[test]
    fn test_retry_after_failure() {
        let mut machine = filled();
        machine.submit();
        machine.finish(Err(DeliveryError::NotConfigured));

        assert!(machine.set_field(ContactField::Message, "Hello again"));
        assert_eq!(machine.status(), SubmissionStatus::SendFailed);
        assert!(matches!(machine.submit(), SubmitDecision::Send(_)));
    }

    #[test]
    fn test_finish_outside_sending_is_ignored() {
        let mut machine = filled();
        assert_eq!(machine.finish(Ok(())), None);
        assert_eq!(machine.status(), SubmissionStatus::Idle);
        assert!(!machine.form().is_empty());
    }

    #[test]
    fn test_expire_returns_to_idle() {
        let mut machine = filled();
        machine.submit();
        let ticket = machine.finish(Ok(())).unwrap();

        assert_eq!(ticket.delay, SENT_RESET_DELAY);
        assert_eq!(ticket.delay_ms(), 5000);
        assert!(machine.expire(ticket));
        assert_eq!(machine.status(), SubmissionStatus::Idle);
        assert!(!machine.expire(ticket));
    }

    #[test]
    fn test_stale_ticket_cannot_reset_newer_send() {
        let mut machine = filled();
        machine.submit();
        let old = machine.finish(Ok(())).unwrap();
        machine.expire(old);

        for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
            machine.set_field(field, "x");
        }
        machine.submit();
        machine.finish(Ok(()));

        assert!(!machine.expire(old));
        assert_eq!(machine.status(), SubmissionStatus::Sent);
    }

    #[test]
    fn test_every_status_has_a_label() {
        let statuses = [
            SubmissionStatus::Idle,
            SubmissionStatus::ValidationFailed,
            SubmissionStatus::Sending,
            SubmissionStatus::Sent,
            SubmissionStatus::SendFailed,
        ];
        for status in statuses {
            assert!(!status.button_label().is_empty());
        }
        assert_eq!(SubmissionStatus::SendFailed.button_label(), "Try Again");
        assert_eq!(SubmissionStatus::Sending.button_label(), "Sending...");
    }

    #[test]
    fn test_feedback_per_status() {
        assert_eq!(SubmissionStatus::Idle.feedback(), None);
        assert_eq!(SubmissionStatus::Sending.feedback(), None);
        assert_eq!(
            SubmissionStatus::ValidationFailed.feedback().map(|(k, _)| k),
            Some(FeedbackKind::Warning)
        );
        assert_eq!(
            SubmissionStatus::Sent.feedback().map(|(k, _)| k),
            Some(FeedbackKind::Success)
        );
        assert_eq!(
            SubmissionStatus::SendFailed.feedback().map(|(k, _)| k.css_class()),
            Some("status-error")
        );
    }
}
