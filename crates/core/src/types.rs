use serde::{Deserialize, Serialize};

/// Tailwind shade levels, in the order `Theme::palette` lists its colours
pub const PALETTE_LEVELS: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

/// Complete site configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteIdentity,
    pub theme: Theme,
    pub assistant: Assistant,
    /// Three-up cards on the landing page
    pub highlights: Vec<Feature>,
    /// Cards on the features page
    pub features: Vec<Feature>,
    pub plans: Vec<Plan>,
    pub products: Vec<Product>,
}

/// Branding and package identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteIdentity {
    pub name: String,
    pub package_name: String,
    pub tagline: String,
    pub description: String,
    /// Short mark shown in the nav logo tile
    pub monogram: String,
}

impl SiteIdentity {
    /// Page title used in the root layout metadata
    pub fn title(&self) -> String {
        format!("{} — {}", self.name, self.tagline)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Tailwind colour key, e.g. "flora" gives `bg-flora-500`
    pub color_name: String,
    pub palette: Vec<String>,
    pub dark_mode: bool,
}

impl Theme {
    /// Pair every palette colour with its Tailwind shade level
    pub fn shades(&self) -> impl Iterator<Item = (u16, &str)> {
        PALETTE_LEVELS
            .into_iter()
            .zip(self.palette.iter().map(String::as_str))
    }
}

/// Settings for the placeholder AI assistant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assistant {
    pub name: String,
    /// Prompt used when a request omits one
    pub default_prompt: String,
}

impl Assistant {
    pub fn placeholder_answer(&self, prompt: &str) -> String {
        format!("{} placeholder response for prompt: \"{}\"", self.name, prompt)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub name: String,
    pub price: String,
    pub freq: String,
    pub features: Vec<String>,
}

/// Marketplace listing; `id` becomes the `/shop/<id>` URL segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub price: String,
}

fn feature(title: &str, desc: &str) -> Feature {
    Feature {
        title: title.to_string(),
        desc: desc.to_string(),
    }
}

fn plan(name: &str, price: &str, freq: &str, features: &[&str]) -> Plan {
    Plan {
        name: name.to_string(),
        price: price.to_string(),
        freq: freq.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
    }
}

fn product(id: &str, title: &str, price: &str) -> Product {
    Product {
        id: id.to_string(),
        title: title.to_string(),
        price: price.to_string(),
    }
}

impl Default for SiteIdentity {
    fn default() -> Self {
        Self {
            name: "FloraStack".to_string(),
            package_name: "florastack-frontend".to_string(),
            tagline: "Grow your business intelligently".to_string(),
            description: "FloraStack — AI-powered workflow automation, analytics, and marketplace for business growth.".to_string(),
            monogram: "FS".to_string(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            color_name: "flora".to_string(),
            palette: [
                "#f6fffb", "#ecfff6", "#c8f7df", "#8feebf", "#57e49d", "#2bcf78", "#26b86a",
                "#1f8f51", "#176b3d", "#0f4930",
            ]
            .iter()
            .map(|c| c.to_string())
            .collect(),
            dark_mode: false,
        }
    }
}

impl Default for Assistant {
    fn default() -> Self {
        Self {
            name: "FloraAI".to_string(),
            default_prompt: "Hello".to_string(),
        }
    }
}

pub fn default_highlights() -> Vec<Feature> {
    vec![
        feature(
            "Automate",
            "Turn repetitive processes into automation flows with intuitive builders.",
        ),
        feature(
            "Insights",
            "AI-generated reports that surface what matters from your data.",
        ),
        feature(
            "Marketplace",
            "Buy and install AI modules, prompts, and templates built by experts.",
        ),
    ]
}

pub fn default_features() -> Vec<Feature> {
    vec![
        feature(
            "AI Assistant",
            "Natural language insights, summarization, and content generation.",
        ),
        feature(
            "Automations",
            "Drag-and-drop builders for repeatable workflows.",
        ),
        feature(
            "Integrations",
            "Connect CRMs, email providers, and data sources.",
        ),
        feature(
            "Marketplace",
            "Install templates and modules to extend FloraStack.",
        ),
    ]
}

pub fn default_plans() -> Vec<Plan> {
    vec![
        plan(
            "Starter",
            "$9",
            "/mo",
            &["100 AI queries", "Basic automations", "Email support"],
        ),
        plan(
            "Pro",
            "$49",
            "/mo",
            &["5k AI queries", "Advanced automations", "Priority support"],
        ),
        plan(
            "Enterprise",
            "Contact",
            "",
            &["SAML", "Custom SLAs", "Dedicated CSM"],
        ),
    ]
}

pub fn default_products() -> Vec<Product> {
    vec![
        product("prompt-pack-1", "Sales Outreach Pack", "$19"),
        product("workflow-pro", "Automation: Lead Nurture", "$49"),
        product("report-templates", "Weekly Insight Templates", "$29"),
    ]
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: SiteIdentity::default(),
            theme: Theme::default(),
            assistant: Assistant::default(),
            highlights: default_highlights(),
            features: default_features(),
            plans: default_plans(),
            products: default_products(),
        }
    }
}
