use leptos::html::Div;
use leptos::prelude::*;

use crate::core::SectionId;
use crate::core::catalog::CONTACT_LINKS;
use crate::core::contact::{ContactField, ContactFormMachine, SubmitDecision};
use crate::ui::common::{FormField, StatusMessage, TextAreaField};

/// Read/write pair wiring one machine field to an input
fn bind_field(
    form: RwSignal<ContactFormMachine>,
    field: ContactField,
) -> (Signal<String>, Callback<String>) {
    let value = Signal::derive(move || form.with(|m| m.field(field).to_string()));
    let on_input = Callback::new(move |text: String| {
        form.maybe_update(|m| m.set_field(field, text));
    });
    (value, on_input)
}

/// Hand a validated payload to the delivery service and feed the result back.
fn dispatch(form: RwSignal<ContactFormMachine>, decision: SubmitDecision) {
    match decision {
        SubmitDecision::Ignored => {}
        SubmitDecision::Invalid(missing) => {
            leptos::logging::log!("Contact form incomplete: {:?}", missing);
        }
        SubmitDecision::Send(payload) => {
            #[cfg(not(feature = "ssr"))]
            {
                use crate::core::config::EmailJsConfig;
                use crate::core::delivery::{EmailDelivery, EmailJsClient};
                use gloo_timers::future::TimeoutFuture;

                leptos::task::spawn_local(async move {
                    let client = EmailJsClient::new(EmailJsConfig::from_build_env());
                    let result = client.send(&payload).await;
                    if let Err(err) = &result {
                        leptos::logging::error!("Failed to send contact message: {}", err);
                    }

                    let Some(Some(ticket)) = form.try_update(|m| m.finish(result)) else {
                        return;
                    };
                    TimeoutFuture::new(ticket.delay_ms()).await;
                    form.try_update(|m| m.expire(ticket));
                });
            }

            #[cfg(feature = "ssr")]
            {
                let _ = (form, payload);
            }
        }
    }
}

#[component]
pub fn ContactSection(node_ref: NodeRef<Div>, visible: Memo<bool>) -> impl IntoView {
    let form = RwSignal::new(ContactFormMachine::new());

    let status = Signal::derive(move || form.with(|m| m.status()));
    let locked = Signal::derive(move || !status.get().accepts_edits());

    let (name, on_name) = bind_field(form, ContactField::Name);
    let (email, on_email) = bind_field(form, ContactField::Email);
    let (subject, on_subject) = bind_field(form, ContactField::Subject);
    let (message, on_message) = bind_field(form, ContactField::Message);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(decision) = form.try_update(|m| m.submit()) {
            dispatch(form, decision);
        }
    };

    view! {
        <section id=SectionId::Contact.anchor() class="contact-section">
            <div class="glow-orb orb-contact"></div>

            <div class="section-container" node_ref=node_ref>
                <div class="section-heading">
                    <p class="section-label">"Get In Touch"</p>
                    <h2 class="section-title">"Let's " <em>"Work Together"</em></h2>
                </div>

                <div class="contact-row">
                    <div class="contact-info fade-up" class:visible=visible>
                        <p class="contact-intro">
                            "I'm currently open to new opportunities. Whether you have a project "
                            "in mind or just want to say hi, my inbox is always open!"
                        </p>
                        {CONTACT_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        class="contact-link"
                                        target="_blank"
                                        rel="noopener noreferrer"
                                    >
                                        <span class="contact-link-icon">{link.icon}</span>
                                        <span>{link.label}</span>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>

                    <form class="contact-form fade-up" class:visible=visible on:submit=on_submit>
                        <div class="form-row">
                            <div class="form-group">
                                <FormField
                                    label="Name"
                                    name="from_name"
                                    required=true
                                    placeholder="Your name"
                                    value=name
                                    on_input=on_name
                                    disabled=locked
                                />
                            </div>
                            <div class="form-group">
                                <FormField
                                    label="Email"
                                    name="from_email"
                                    required=true
                                    input_type="email"
                                    placeholder="your@email.com"
                                    value=email
                                    on_input=on_email
                                    disabled=locked
                                />
                            </div>
                        </div>
                        <div class="form-group">
                            <FormField
                                label="Subject"
                                name="subject"
                                placeholder="Project idea, job offer..."
                                value=subject
                                on_input=on_subject
                                disabled=locked
                            />
                        </div>
                        <div class="form-group">
                            <TextAreaField
                                label="Message"
                                name="message"
                                required=true
                                placeholder="Tell me about your project..."
                                value=message
                                on_input=on_message
                                disabled=locked
                            />
                        </div>

                        <StatusMessage feedback=Signal::derive(move || status.get().feedback()) />

                        <button
                            type="submit"
                            class="btn-primary-custom contact-submit"
                            disabled=move || !status.get().can_submit()
                        >
                            {move || status.get().button_label()}
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
