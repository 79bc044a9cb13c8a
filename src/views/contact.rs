use crate::contact::{ContactDraft, ContactError};
use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq)]
enum FormStatus {
    Idle,
    Sent,
    Invalid(ContactError),
}

#[component]
pub fn ContactSection() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut status = use_signal(|| FormStatus::Idle);

    let on_submit = move |ev: FormEvent| {
        ev.prevent_default();
        let draft = ContactDraft {
            name: name(),
            email: email(),
            message: message(),
        };
        match draft.validate() {
            Ok(()) => {
                tracing::info!("contact form submitted");
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
                status.set(FormStatus::Sent);
            }
            Err(err) => status.set(FormStatus::Invalid(err)),
        }
    };

    let status_line = match status() {
        FormStatus::Idle => rsx! {},
        FormStatus::Sent => rsx! {
            p { class: "form-status ok", "Thanks! I'll get back to you soon." }
        },
        FormStatus::Invalid(err) => rsx! {
            p { class: "form-status error", "{err}" }
        },
    };

    rsx! {
        section { id: "contact", class: "section section-white",
            div { class: "container narrow centered",
                h2 { "Let's Build Something Great" }
                p { class: "lead muted",
                    "Currently accepting new projects and collaborations. If you have an idea or just want to chat, feel free to drop a line."
                }
                form { class: "contact-form", onsubmit: on_submit,
                    div {
                        label { "Name" }
                        input {
                            r#type: "text",
                            placeholder: "John Doe",
                            value: "{name}",
                            oninput: move |ev| name.set(ev.value()),
                        }
                    }
                    div {
                        label { "Email" }
                        input {
                            r#type: "email",
                            placeholder: "john@example.com",
                            value: "{email}",
                            oninput: move |ev| email.set(ev.value()),
                        }
                    }
                    div { class: "span-2",
                        label { "Message" }
                        textarea {
                            rows: "4",
                            placeholder: "Tell me about your project...",
                            value: "{message}",
                            oninput: move |ev| message.set(ev.value()),
                        }
                    }
                    div { class: "span-2 centered",
                        {status_line}
                        button { class: "btn btn-primary", r#type: "submit", "Send Message" }
                    }
                }
            }
        }
    }
}
