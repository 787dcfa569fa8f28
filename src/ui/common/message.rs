//! Inline status line shown under the contact form

use leptos::prelude::*;

use crate::core::contact::FeedbackKind;

/// Status message component
/// Shows `text` styled by its kind when Some, hidden when None
#[component]
pub fn StatusMessage(
    #[prop(into)]
    feedback: Signal<Option<(FeedbackKind, &'static str)>>,
) -> impl IntoView {
    move || {
        feedback.get().map(|(kind, text)| {
            view! {
                <div class=format!("contact-status {}", kind.css_class()) role="status">
                    {text}
                </div>
            }
        })
    }
}
