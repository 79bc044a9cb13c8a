use crate::views::{ChatWidget, ContactSection, Footer, GallerySection, Hero, Navbar, ProjectsSection};
use dioxus::prelude::*;

const PORTFOLIO_CSS: Asset = asset!("/assets/portfolio.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: PORTFOLIO_CSS }
        div { class: "page",
            Navbar {}
            main {
                Hero {}
                ProjectsSection {}
                GallerySection {}
                ContactSection {}
            }
            Footer {}
            ChatWidget {}
        }
    }
}
