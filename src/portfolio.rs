//! Static portfolio content.

use serde::{Deserialize, Serialize};

pub const OWNER_NAME: &str = "Aurora";

/// Prepended to every generation request as the first user turn.
pub const PERSONA_INSTRUCTION: &str = r#"
You are the personal AI assistant for "Aurora", a world-class senior developer and designer.
Your goal is to answer questions about Aurora's portfolio, skills, and projects.
Aurora's key skills: Rust, TypeScript, WebAssembly, AI Integration, UI/UX Design.
Tone: Professional, friendly, and slightly witty.
If asked about things not related to Aurora, try to steer back to her professional expertise but be polite.
Aurora loves coffee, clean code, and minimal design.
"#;

pub const HERO_IMAGE: &str = "https://picsum.photos/id/101/1200/800";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
}

impl Project {
    fn new(id: u32, title: &str, description: &str, tags: &[&str]) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            image: format!("https://picsum.photos/id/{id}/600/400"),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
        }
    }
}

pub fn featured_projects() -> Vec<Project> {
    vec![
        Project::new(
            1,
            "Visionary AI Dashboard",
            "A real-time analytics platform leveraging computer vision to track user engagement.",
            &["React", "TensorFlow", "D3.js"],
        ),
        Project::new(
            2,
            "Lumina eCommerce",
            "High-performance headless commerce site with seamless transitions and 3D previews.",
            &["Next.js", "Three.js", "Stripe"],
        ),
        Project::new(
            3,
            "Nexus Social Engine",
            "A decentralized social network focused on data privacy and community governance.",
            &["Web3", "Tailwind", "Solidity"],
        ),
        Project::new(
            4,
            "Aero Flight Tracker",
            "Interactive global flight map with predictive arrival algorithms using open data.",
            &["Mapbox", "Node.js", "API"],
        ),
    ]
}

/// Avatars shown on the hero's "trusted by" card.
pub fn client_avatars() -> Vec<String> {
    (1..=3)
        .map(|i| format!("https://picsum.photos/id/{}/50/50", 10 + i))
        .collect()
}
