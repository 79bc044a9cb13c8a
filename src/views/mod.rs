pub mod chat;
pub mod contact;
pub mod gallery;
pub mod home;
pub mod projects;

pub use chat::ChatWidget;
pub use contact::ContactSection;
pub use gallery::GallerySection;
pub use home::{Footer, Hero, Navbar};
pub use projects::ProjectsSection;
