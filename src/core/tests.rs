#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::time::Duration;

    use crate::core::contact::{
        ContactField, ContactFormMachine, EmailPayload, SENT_RESET_DELAY, SubmissionStatus,
        SubmitDecision,
    };
    use crate::core::delivery::{DeliveryError, EmailDelivery};
    use crate::core::theme::{
        MemoryStorage, NoTarget, PreferenceStorage, THEME_STORAGE_KEY, ThemePreference,
        ThemePreferenceStore,
    };
    use crate::core::{
        ActiveSectionTracker, SectionBounds, SectionId, VisibilityArena, VisibilityThreshold,
    };

    /// Delivery double that records payloads and answers with a fixed outcome
    struct FakeDelivery {
        succeed: bool,
        sent: RefCell<Vec<EmailPayload>>,
        latency: Duration,
    }

    impl FakeDelivery {
        fn succeeding() -> Self {
            Self {
                succeed: true,
                sent: RefCell::new(Vec::new()),
                latency: Duration::from_millis(300),
            }
        }

        fn failing() -> Self {
            Self {
                succeed: false,
                ..Self::succeeding()
            }
        }

        fn calls(&self) -> usize {
            self.sent.borrow().len()
        }
    }

    impl EmailDelivery for FakeDelivery {
        async fn send(&self, payload: &EmailPayload) -> Result<(), DeliveryError> {
            self.sent.borrow_mut().push(payload.clone());
            tokio::time::sleep(self.latency).await;
            if self.succeed {
                Ok(())
            } else {
                Err(DeliveryError::Transport("connection reset".to_string()))
            }
        }
    }

    fn fill(machine: &mut ContactFormMachine, name: &str, email: &str, subject: &str, message: &str) {
        machine.set_field(ContactField::Name, name);
        machine.set_field(ContactField::Email, email);
        machine.set_field(ContactField::Subject, subject);
        machine.set_field(ContactField::Message, message);
    }

    /// Mirrors what the contact section does on submit: decide, send, finish,
    /// then wait out the success banner.
    async fn submit_and_settle<D: EmailDelivery>(
        machine: &RefCell<ContactFormMachine>,
        delivery: &D,
    ) -> SubmitDecision {
        let decision = machine.borrow_mut().submit();
        if let SubmitDecision::Send(payload) = &decision {
            let result = delivery.send(payload).await;
            let ticket = machine.borrow_mut().finish(result);
            if let Some(ticket) = ticket {
                tokio::time::sleep(ticket.delay).await;
                machine.borrow_mut().expire(ticket);
            }
        }
        decision
    }

    // ========================================================================
    // Contact form
    // ========================================================================

    #[tokio::test(start_paused = true)]
    async fn test_blank_name_never_reaches_delivery() {
        let delivery = FakeDelivery::succeeding();
        let machine = RefCell::new(ContactFormMachine::new());
        fill(&mut machine.borrow_mut(), "", "a@b.com", "", "hi");

        let decision = submit_and_settle(&machine, &delivery).await;

        assert_eq!(decision, SubmitDecision::Invalid(vec![ContactField::Name]));
        assert_eq!(machine.borrow().status(), SubmissionStatus::ValidationFailed);
        assert_eq!(delivery.calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_successful_send_resets_after_five_seconds() {
        let delivery = FakeDelivery::succeeding();
        let mut machine = ContactFormMachine::new();
        fill(&mut machine, "Jane", "jane@x.com", "", "Hello");

        let SubmitDecision::Send(payload) = machine.submit() else {
            panic!("form should be valid");
        };
        assert_eq!(machine.status(), SubmissionStatus::Sending);

        let result = delivery.send(&payload).await;
        assert_eq!(delivery.sent.borrow()[0].subject, "No subject");

        let ticket = machine.finish(result).expect("success yields a reset ticket");
        assert_eq!(machine.status(), SubmissionStatus::Sent);
        for field in [
            ContactField::Name,
            ContactField::Email,
            ContactField::Subject,
            ContactField::Message,
        ] {
            assert_eq!(machine.field(field), "");
        }

        let start = tokio::time::Instant::now();
        tokio::time::sleep(ticket.delay).await;
        assert!(start.elapsed() >= SENT_RESET_DELAY);

        assert!(machine.expire(ticket));
        assert_eq!(machine.status(), SubmissionStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_submit_while_sending_is_noop() {
        let delivery = FakeDelivery::succeeding();
        let machine = RefCell::new(ContactFormMachine::new());
        fill(&mut machine.borrow_mut(), "Jane", "jane@x.com", "Hi", "Hello");

        let first = machine.borrow_mut().submit();
        let SubmitDecision::Send(payload) = first else {
            panic!("form should be valid");
        };
        let in_flight = delivery.send(&payload);

        // Double click before the first request resolves
        let second = machine.borrow_mut().submit();
        assert_eq!(second, SubmitDecision::Ignored);

        let result = in_flight.await;
        machine.borrow_mut().finish(result);

        assert_eq!(delivery.calls(), 1);
        assert_eq!(machine.borrow().status(), SubmissionStatus::Sent);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_send_keeps_fields_for_retry() {
        let failing = FakeDelivery::failing();
        let machine = RefCell::new(ContactFormMachine::new());
        fill(&mut machine.borrow_mut(), "Jane", "jane@x.com", "Hi", "Hello");

        submit_and_settle(&machine, &failing).await;

        {
            let machine = machine.borrow();
            assert_eq!(machine.status(), SubmissionStatus::SendFailed);
            assert_eq!(machine.field(ContactField::Name), "Jane");
            assert_eq!(machine.field(ContactField::Subject), "Hi");
            assert_eq!(machine.field(ContactField::Message), "Hello");
        }

        // Manual retry goes through and the banner times out
        let working = FakeDelivery::succeeding();
        submit_and_settle(&machine, &working).await;

        assert_eq!(failing.calls(), 1);
        assert_eq!(working.calls(), 1);
        assert_eq!(machine.borrow().status(), SubmissionStatus::Idle);
        assert!(machine.borrow().form().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_automatic_retry_on_failure() {
        let failing = FakeDelivery::failing();
        let machine = RefCell::new(ContactFormMachine::new());
        fill(&mut machine.borrow_mut(), "Jane", "jane@x.com", "", "Hello");

        submit_and_settle(&machine, &failing).await;
        tokio::time::sleep(Duration::from_secs(60)).await;

        assert_eq!(failing.calls(), 1);
        assert_eq!(machine.borrow().status(), SubmissionStatus::SendFailed);
    }

    // ========================================================================
    // Theme
    // ========================================================================

    #[test]
    fn test_theme_survives_reload() {
        let storage = MemoryStorage::new();
        let saved = {
            let (mut store, _) = ThemePreferenceStore::load(&storage, NoTarget);
            store.toggle().unwrap()
        };
        assert_eq!(saved, ThemePreference::Light);

        let (reloaded, _) = ThemePreferenceStore::load(&storage, NoTarget);
        assert_eq!(reloaded.current(), ThemePreference::Light);
        assert_eq!(storage.load(THEME_STORAGE_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_double_toggle_restores_stored_value() {
        let storage = MemoryStorage::with_value(THEME_STORAGE_KEY, "light");
        let (mut store, _) = ThemePreferenceStore::load(&storage, NoTarget);
        store.toggle().unwrap();
        store.toggle().unwrap();
        assert_eq!(store.current(), ThemePreference::Light);
        assert_eq!(storage.load(THEME_STORAGE_KEY).as_deref(), Some("light"));
    }

    // ========================================================================
    // Scrolling the page
    // ========================================================================

    /// A page of five 900px sections scrolled through top to bottom: the
    /// active section walks forward and each animated section appears once.
    #[test]
    fn test_scrolling_through_page() {
        const HEIGHT: f64 = 900.0;
        const VIEWPORT: f64 = 800.0;

        let mut tracker = ActiveSectionTracker::new();
        let mut arena = VisibilityArena::new();
        let handles: Vec<_> = SectionId::ANIMATED
            .iter()
            .map(|s| arena.attach(*s, VisibilityThreshold::DEFAULT))
            .collect();
        let mut flips = 0;
        let mut seen = Vec::new();

        let mut scroll_y = 0.0;
        while scroll_y <= HEIGHT * 4.0 {
            let bounds = |section: SectionId| {
                let top = section.index() as f64 * HEIGHT - scroll_y;
                Some(SectionBounds::new(top, top + HEIGHT))
            };

            tracker.on_scroll(bounds);
            if seen.last() != Some(&tracker.active()) {
                seen.push(tracker.active());
            }

            for handle in &handles {
                let Some(b) = bounds(handle.section()) else {
                    continue;
                };
                let visible = (b.bottom.min(VIEWPORT) - b.top.max(0.0)).max(0.0);
                if arena.observe(*handle, visible / HEIGHT) {
                    flips += 1;
                }
            }

            scroll_y += 50.0;
        }

        assert_eq!(seen, SectionId::ALL.to_vec());
        assert_eq!(flips, SectionId::ANIMATED.len());
        for section in SectionId::ANIMATED {
            assert!(arena.is_visible(section));
        }
        // About has no tracker and never animates
        assert!(!arena.is_visible(SectionId::About));
    }
}
