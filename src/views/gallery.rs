use crate::gallery::{GalleryItem, GalleryState, PicsumGallery, is_wide_tile, load_gallery};
use dioxus::prelude::*;

#[component]
pub fn GallerySection() -> Element {
    let mut gallery = use_signal(GalleryState::default);

    // One-shot fetch on mount; no retry.
    use_future(move || async move {
        let items = load_gallery(&PicsumGallery::default()).await;
        gallery.with_mut(|state| state.resolve(items));
    });

    let state = gallery();
    if state.loading {
        return rsx! {
            div { class: "gallery-loading", "Loading Inspiration..." }
        };
    }

    rsx! {
        GalleryGrid { items: state.items }
    }
}

#[component]
fn GalleryGrid(items: Vec<GalleryItem>) -> Element {
    rsx! {
        section { id: "gallery", class: "section section-tinted",
            div { class: "container",
                div { class: "section-head centered",
                    h2 { "Visual Inspiration" }
                    p { class: "muted", "A collection of external images curated for design inspiration." }
                }
                div { class: "gallery-grid",
                    for (idx, item) in items.iter().enumerate() {
                        div {
                            key: "{item.id}",
                            class: if is_wide_tile(idx) { "gallery-tile wide" } else { "gallery-tile" },
                            img { src: "{item.download_url}", alt: "{item.author}", "loading": "lazy" }
                            div { class: "gallery-caption",
                                span { "Shot by {item.author}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
