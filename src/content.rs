//! Compiled-in site content.
//!
//! Plain data tables, kept apart from the renderers so copy changes never
//! touch layout code. Nothing here is created or mutated at runtime.

/// A portfolio piece shown in the Home page gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkItem {
    pub title: &'static str,
    pub category: &'static str,
    /// Remote image URL, embedded as-is for the browser to fetch.
    pub image: &'static str,
}

/// A service row on the Services page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

/// One of the "Our DNA" cards on the About page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trait {
    pub title: &'static str,
    pub description: &'static str,
}

/// An entry in the Contact form's budget selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetOption {
    pub label: &'static str,
    /// The placeholder is shown first but cannot be picked.
    pub selectable: bool,
}

/// Input control used for a contact form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Select,
    TextArea { rows: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub placeholder: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialNetwork {
    Instagram,
    Twitter,
    LinkedIn,
}

impl SocialNetwork {
    pub fn label(self) -> &'static str {
        match self {
            SocialNetwork::Instagram => "Instagram",
            SocialNetwork::Twitter => "Twitter",
            SocialNetwork::LinkedIn => "LinkedIn",
        }
    }
}

pub const STUDIO_NAME: &str = "Pixel & Co";
pub const CONTACT_EMAIL: &str = "hello@pixelandco.com";
pub const STUDIO_ADDRESS: [&str; 2] = ["123 Innovation Blvd,", "Tech District, NY 10012"];
pub const STUDIO_PHONE: &str = "+1 (555) 012-3456";
pub const COPYRIGHT_YEAR: u16 = 2024;

pub const HERO_TAGLINE: &str =
    "We turn complex ideas into unforgettable digital experiences for ambitious startups.";

pub const MARQUEE_TEXT: &str = "DESIGN • STRATEGY • MOTION •";
pub const MARQUEE_REPEAT: usize = 10;

pub const WORKS: [WorkItem; 3] = [
    WorkItem {
        title: "Neon Flux",
        category: "Branding & Web",
        image: "https://images.unsplash.com/photo-1550745165-9bc0b252726f?auto=format&fit=crop&q=80&w=800",
    },
    WorkItem {
        title: "Orbital",
        category: "App Design",
        image: "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?auto=format&fit=crop&q=80&w=800",
    },
    WorkItem {
        title: "Vertex",
        category: "Motion System",
        image: "https://images.unsplash.com/photo-1634017839464-5c339ebe3cb4?auto=format&fit=crop&q=80&w=800",
    },
];

pub const ABOUT_PORTRAIT: &str =
    "https://images.unsplash.com/photo-1522071820081-009f0129c71c?auto=format&fit=crop&q=80&w=800";

pub const ABOUT_COPY: [&str; 2] = [
    "Founded in 2024, Pixel & Co is the antidote to boring corporate design. We are a collective of dreamers, designers, and developers obsessed with quality.",
    "We work with founders who aren't afraid to stand out. If you want safe, go elsewhere. If you want unforgettable, you're home.",
];

pub const DNA: [Trait; 3] = [
    Trait {
        title: "Boldness",
        description: "We don't whisper. We shout.",
    },
    Trait {
        title: "Precision",
        description: "God is in the details.",
    },
    Trait {
        title: "Velocity",
        description: "We move as fast as you do.",
    },
];

pub const SERVICES: [Service; 3] = [
    Service {
        title: "Brand Identity",
        description: "Logo, typography, color systems, and voice guidelines that cut through the noise.",
        tags: &["Strategy", "Visual", "Guidelines"],
    },
    Service {
        title: "Web Design",
        description: "Immersive websites that convert visitors into superfans. React, WebGL, and Three.js.",
        tags: &["UI/UX", "Development", "CMS"],
    },
    Service {
        title: "Motion Graphics",
        description: "From micro-interactions to full explainer videos. We make things move.",
        tags: &["2D/3D", "Animation", "Lottie"],
    },
];

pub const BUDGET_OPTIONS: [BudgetOption; 4] = [
    BudgetOption {
        label: "Select Range",
        selectable: false,
    },
    BudgetOption {
        label: "$5k - $10k",
        selectable: true,
    },
    BudgetOption {
        label: "$10k - $25k",
        selectable: true,
    },
    BudgetOption {
        label: "$25k+",
        selectable: true,
    },
];

pub const CONTACT_FIELDS: [FormField; 4] = [
    FormField {
        name: "name",
        label: "Name",
        kind: FieldKind::Text,
        placeholder: Some("Jane Doe"),
    },
    FormField {
        name: "email",
        label: "Email",
        kind: FieldKind::Email,
        placeholder: Some("jane@startup.com"),
    },
    FormField {
        name: "budget",
        label: "Budget",
        kind: FieldKind::Select,
        placeholder: None,
    },
    FormField {
        name: "message",
        label: "Message",
        kind: FieldKind::TextArea { rows: 4 },
        placeholder: Some("Tell us about your vision..."),
    },
];

pub const SOCIALS: [SocialNetwork; 3] = [
    SocialNetwork::Instagram,
    SocialNetwork::Twitter,
    SocialNetwork::LinkedIn,
];

/// `mailto:` href for the studio address.
pub fn mailto() -> String {
    format!("mailto:{CONTACT_EMAIL}")
}
