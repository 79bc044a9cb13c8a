use crate::ai::GeminiGateway;
use crate::chat::ChatSession;
use crate::markdown::reply_to_html;
use crate::portfolio::OWNER_NAME;
use crate::types::{ChatMessage, Role};
use dioxus::events::Key;
use dioxus::prelude::*;

const GREETING: &str =
    "Hello! I'm Aurora's AI. Ask me about her skills, experience, or anything professional!";

const CHAT_LIST_ID: &str = "chat-messages";

/// Script that pins the message list to its newest entry.
fn scroll_to_bottom_script() -> String {
    format!(
        "const el = document.getElementById('{CHAT_LIST_ID}'); if (el) {{ el.scrollTop = el.scrollHeight; }}"
    )
}

#[component]
pub fn ChatWidget() -> Element {
    let gateway = use_signal(GeminiGateway::from_env);
    let session = use_signal(ChatSession::new);
    let mut input = use_signal(String::new);
    let mut is_open = use_signal(|| false);
    let available = gateway.peek().is_configured();

    use_hook(move || {
        if !available {
            tracing::warn!("no API key configured; assistant disabled");
        }
    });

    // Keep the newest message in view as turns arrive.
    use_effect(move || {
        let _ = session.read().messages().len();
        let _ = session.read().is_busy();
        if is_open() {
            let _ = document::eval(&scroll_to_bottom_script());
        }
    });

    let mut send_message = {
        let mut session = session;
        let mut input_signal = input;
        move |text: String| {
            let Some(turn) = session.with_mut(|s| s.begin(&text)) else {
                return;
            };
            input_signal.set(String::new());

            let gateway = (*gateway.peek()).clone();
            spawn(async move {
                let reply = turn.resolve(&gateway).await;
                session.with_mut(|s| s.finish(reply));
            });
        }
    };

    let snapshot = session();
    let busy = snapshot.is_busy();

    if !is_open() {
        let hint = if available {
            "Ask my Assistant"
        } else {
            "Assistant unavailable"
        };
        return rsx! {
            div { class: "chat-root",
                button {
                    class: "chat-launcher",
                    disabled: !available,
                    title: hint,
                    onclick: move |_| is_open.set(true),
                    "💬"
                    span { class: "chat-launcher-hint", "{hint}" }
                }
            }
        };
    }

    rsx! {
        div { class: "chat-root",
            div { class: "chat-panel dark-glass",
                div { class: "chat-header",
                    div { class: "chat-identity",
                        div { class: "chat-avatar", "AI" }
                        div {
                            h4 { "{OWNER_NAME} AI" }
                            span { class: "chat-status", "Online" }
                        }
                    }
                    button { class: "chat-close", title: "Close", onclick: move |_| is_open.set(false), "✕" }
                }

                div { class: "chat-messages", id: CHAT_LIST_ID,
                    if snapshot.messages().is_empty() {
                        div { class: "chat-empty", "\"{GREETING}\"" }
                    }
                    for (i, msg) in snapshot.messages().iter().enumerate() {
                        MessageBubble { key: "{i}", message: msg.clone() }
                    }
                    if busy {
                        div { class: "message-row model",
                            div { class: "bubble model typing",
                                span { class: "dot" }
                                span { class: "dot" }
                                span { class: "dot" }
                            }
                        }
                    }
                }

                div { class: "chat-composer",
                    input {
                        r#type: "text",
                        placeholder: "Message AI...",
                        value: "{input}",
                        oninput: move |ev| input.set(ev.value()),
                        onkeydown: move |ev| {
                            if ev.key() == Key::Enter {
                                ev.prevent_default();
                                send_message(input());
                            }
                        },
                    }
                    button {
                        class: "chat-send",
                        r#type: "button",
                        disabled: busy,
                        onclick: move |_| send_message(input()),
                        "➤"
                    }
                }
            }
        }
    }
}

#[component]
fn MessageBubble(message: ChatMessage) -> Element {
    match message.role {
        Role::User => rsx! {
            div { class: "message-row user",
                div { class: "bubble user", "{message.content}" }
            }
        },
        Role::Model => {
            let html = reply_to_html(&message.content);
            rsx! {
                div { class: "message-row model",
                    div { class: "bubble model md", dangerous_inner_html: "{html}" }
                }
            }
        }
    }
}
