use crate::portfolio::{Project, featured_projects};
use dioxus::prelude::*;

#[component]
pub fn ProjectsSection() -> Element {
    let projects = use_hook(featured_projects);
    rsx! {
        section { id: "projects", class: "section",
            div { class: "container",
                div { class: "section-head",
                    div {
                        h2 { "Featured Projects" }
                        p { class: "muted", "A selection of my recent works across different industries." }
                    }
                    a { class: "link-underline", href: "#projects", "View All Projects" }
                }
                div { class: "project-grid",
                    for project in projects.iter() {
                        ProjectCard { key: "{project.id}", project: project.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    rsx! {
        div { class: "project-card",
            div { class: "project-image",
                img { src: "{project.image}", alt: "{project.title}" }
            }
            div { class: "project-body",
                div { class: "tag-row",
                    for tag in project.tags.iter() {
                        span { key: "{tag}", class: "tag-pill", "{tag}" }
                    }
                }
                h3 { "{project.title}" }
                p { class: "muted", "{project.description}" }
                span { class: "project-link", "View Project →" }
            }
        }
    }
}
