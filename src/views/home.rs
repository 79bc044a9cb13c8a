use crate::portfolio::{HERO_IMAGE, OWNER_NAME, client_avatars};
use dioxus::prelude::*;
use time::OffsetDateTime;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#projects", "Projects"),
    ("#gallery", "Gallery"),
    ("#contact", "Contact"),
];

#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav { class: "navbar glass",
            div { class: "navbar-inner",
                div { class: "brand", "{OWNER_NAME.to_uppercase()}" }
                div { class: "nav-links",
                    for (href, label) in NAV_LINKS.iter() {
                        a { href: "{href}", "{label}" }
                    }
                }
                a { class: "btn btn-pill", href: "#contact", "Hire Me" }
            }
        }
    }
}

#[component]
pub fn Hero() -> Element {
    let avatars = use_hook(client_avatars);
    rsx! {
        section { id: "home", class: "hero",
            div { class: "hero-grid",
                div { class: "hero-copy",
                    span { class: "badge", "Available for new opportunities" }
                    h1 {
                        "Crafting Digital "
                        br {}
                        span { class: "accent", "Masterpieces" }
                    }
                    p { class: "lead",
                        "I'm a Full-stack Developer specialized in building high-performance web applications with a focus on AI integration and exceptional user experiences."
                    }
                    div { class: "hero-actions",
                        a { class: "btn btn-dark", href: "#projects", "View Work" }
                        a { class: "btn btn-outline", href: "#gallery", "Inspiration" }
                    }
                }
                div { class: "hero-visual",
                    div { class: "hero-image float",
                        img { src: HERO_IMAGE, alt: "Hero Visual" }
                    }
                    div { class: "trust-card",
                        div { class: "avatar-stack",
                            for url in avatars.iter() {
                                img { key: "{url}", src: "{url}", alt: "Client" }
                            }
                        }
                        div { class: "trust-copy",
                            "Trusted by "
                            br {}
                            span { class: "accent", "50+ Global Clients" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    let year = OffsetDateTime::now_utc().year();
    rsx! {
        footer { class: "footer",
            div { class: "footer-inner",
                div { "© {year} {OWNER_NAME} Studio. Built with Rust & AI." }
                div { class: "footer-links",
                    for label in ["Twitter", "LinkedIn", "GitHub", "Dribbble"] {
                        a { href: "#", "{label}" }
                    }
                }
            }
        }
    }
}
