pub mod ai;
pub mod chat;
pub mod config;
pub mod contact;
pub mod gallery;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
pub mod markdown;
pub mod portfolio;
pub mod types;

#[cfg(feature = "dioxus")]
pub mod ui;
#[cfg(feature = "dioxus")]
pub mod views;
