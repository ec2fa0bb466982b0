use crate::error::{Error, Result};
use crate::types::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// File name looked up in the output root when no config path is given
pub const CONFIG_FILE_NAME: &str = "florastack.toml";

/// Raw TOML configuration structure
/// Every table is optional; missing values fall back to the FloraStack defaults
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    site: RawSite,
    #[serde(default)]
    theme: RawTheme,
    #[serde(default)]
    assistant: RawAssistant,
    highlight: Option<Vec<Feature>>,
    feature: Option<Vec<Feature>>,
    plan: Option<Vec<Plan>>,
    product: Option<Vec<Product>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSite {
    name: Option<String>,
    package_name: Option<String>,
    tagline: Option<String>,
    description: Option<String>,
    monogram: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTheme {
    color_name: Option<String>,
    palette: Option<Vec<String>>,
    dark_mode: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawAssistant {
    name: Option<String>,
    default_prompt: Option<String>,
}

/// Parse florastack.toml from a file path
pub fn parse_site_toml<P: AsRef<Path>>(path: P) -> Result<SiteConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_site_toml_str(&content)
}

/// Load `path` if it exists, otherwise return the default configuration
pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<SiteConfig> {
    let path = path.as_ref();
    if path.exists() {
        parse_site_toml(path)
    } else {
        Ok(SiteConfig::default())
    }
}

/// Parse florastack.toml from a string (useful for testing)
pub fn parse_site_toml_str(content: &str) -> Result<SiteConfig> {
    let raw: RawConfig = toml::from_str(content)?;
    let defaults = SiteConfig::default();

    let site = SiteIdentity {
        name: raw.site.name.unwrap_or(defaults.site.name),
        package_name: raw.site.package_name.unwrap_or(defaults.site.package_name),
        tagline: raw.site.tagline.unwrap_or(defaults.site.tagline),
        description: raw.site.description.unwrap_or(defaults.site.description),
        monogram: raw.site.monogram.unwrap_or(defaults.site.monogram),
    };
    validate_site(&site)?;

    let theme = Theme {
        color_name: raw.theme.color_name.unwrap_or(defaults.theme.color_name),
        palette: raw.theme.palette.unwrap_or(defaults.theme.palette),
        dark_mode: raw.theme.dark_mode.unwrap_or(defaults.theme.dark_mode),
    };
    validate_theme(&theme)?;

    let assistant = Assistant {
        name: raw.assistant.name.unwrap_or(defaults.assistant.name),
        default_prompt: raw
            .assistant
            .default_prompt
            .unwrap_or(defaults.assistant.default_prompt),
    };

    let products = raw.product.unwrap_or(defaults.products);
    for product in &products {
        validate_product_id(&product.id)?;
    }

    Ok(SiteConfig {
        site,
        theme,
        assistant,
        highlights: raw.highlight.unwrap_or(defaults.highlights),
        features: raw.feature.unwrap_or(defaults.features),
        plans: raw.plan.unwrap_or(defaults.plans),
        products,
    })
}

fn validate_site(site: &SiteIdentity) -> Result<()> {
    if site.name.trim().is_empty() {
        return Err(Error::ConfigParse("site.name must not be empty".to_string()));
    }

    // npm package names: lowercase, url-safe, at most 214 chars
    let pkg = &site.package_name;
    let pkg_ok = !pkg.is_empty()
        && pkg.len() <= 214
        && !pkg.starts_with('.')
        && !pkg.starts_with('_')
        && pkg.chars().all(|c| {
            c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '.' | '_')
        });
    if !pkg_ok {
        return Err(Error::ConfigParse(format!(
            "Invalid site.package_name '{}': use lowercase letters, digits, '-', '.' or '_'",
            pkg
        )));
    }

    Ok(())
}

fn validate_theme(theme: &Theme) -> Result<()> {
    let name_ok = !theme.color_name.is_empty()
        && theme
            .color_name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
    if !name_ok {
        return Err(Error::ConfigParse(format!(
            "Invalid theme.color_name '{}': use lowercase letters and digits only",
            theme.color_name
        )));
    }

    if theme.palette.len() != PALETTE_LEVELS.len() {
        return Err(Error::ConfigParse(format!(
            "theme.palette needs {} colours (shades 50..900), got {}",
            PALETTE_LEVELS.len(),
            theme.palette.len()
        )));
    }

    for color in &theme.palette {
        if !is_hex_color(color) {
            return Err(Error::ConfigParse(format!(
                "Invalid palette colour '{}', expected #rrggbb",
                color
            )));
        }
    }

    Ok(())
}

fn is_hex_color(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Product ids end up in `/shop/<id>` links
fn validate_product_id(id: &str) -> Result<()> {
    let ok = !id.is_empty()
        && !id.starts_with('-')
        && id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !ok {
        return Err(Error::ConfigParse(format!(
            "Invalid product id '{}': use lowercase letters, digits and '-'",
            id
        )));
    }
    Ok(())
}
