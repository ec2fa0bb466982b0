// Site manifest generation for the Next.js App Router layout.
// Builds content only; writing happens in florastack-materializer.

mod components;
mod pages;
mod project;
mod render;

use florastack_core::{Manifest, Result, SiteConfig};
use tracing::debug;

/// Build the full site manifest.
///
/// Entries come out in a fixed order: build configuration and styles, the
/// root layout, pages, API routes, shared components, public placeholders,
/// README. `year` goes into the footer copyright line; passing it in keeps
/// the output a pure function of its inputs.
pub fn build_manifest(config: &SiteConfig, year: i32) -> Result<Manifest> {
    let mut manifest = Manifest::new();

    project::push_config_files(&mut manifest, config)?;
    pages::push_pages(&mut manifest, config)?;
    components::push_api_routes(&mut manifest, config)?;
    components::push_components(&mut manifest, config, year);
    project::push_public_placeholders(&mut manifest);
    project::push_readme(&mut manifest, config);

    debug!(entries = manifest.len(), site = %config.site.name, "built site manifest");
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED_PATHS: &[&str] = &[
        "package.json",
        "tsconfig.json",
        "next.config.js",
        "postcss.config.js",
        "tailwind.config.js",
        "app/globals.css",
        "app/layout.tsx",
        "app/page.tsx",
        "app/features/page.tsx",
        "app/pricing/page.tsx",
        "app/shop/page.tsx",
        "app/shop/[slug]/page.tsx",
        "app/dashboard/page.tsx",
        "app/login/page.tsx",
        "app/register/page.tsx",
        "app/api/ai/route.ts",
        "app/api/health/route.ts",
        "components/Nav.tsx",
        "components/Footer.tsx",
        "public/placeholder-favicon.txt",
        "public/og-image.txt",
        "README.md",
    ];

    #[test]
    fn test_manifest_order_matches_layout() {
        let manifest = build_manifest(&SiteConfig::default(), 2026).unwrap();
        let paths: Vec<&str> = manifest.iter().map(|e| e.relative_path()).collect();
        assert_eq!(paths, EXPECTED_PATHS);
    }

    #[test]
    fn test_manifest_paths_are_safe() {
        let manifest = build_manifest(&SiteConfig::default(), 2026).unwrap();
        for entry in &manifest {
            florastack_core::path::resolve_relative(entry.relative_path()).unwrap();
        }
    }

    #[test]
    fn test_no_unrendered_placeholders() {
        let mut config = SiteConfig::default();
        for dark_mode in [false, true] {
            config.theme.dark_mode = dark_mode;
            let manifest = build_manifest(&config, 2026).unwrap();
            for entry in &manifest {
                let content = entry.content();
                let leftover = content
                    .match_indices("{{")
                    .map(|(i, _)| &content[i + 2..])
                    .find(|rest| {
                        rest.chars()
                            .next()
                            .is_some_and(|c| c.is_ascii_lowercase() || c == '_')
                    });
                assert!(
                    leftover.is_none(),
                    "{} has an unrendered placeholder",
                    entry.relative_path()
                );
            }
        }
    }

    #[test]
    fn test_build_manifest_is_deterministic() {
        let config = SiteConfig::default();
        assert_eq!(
            build_manifest(&config, 2026).unwrap(),
            build_manifest(&config, 2026).unwrap()
        );
    }

    #[test]
    fn test_year_only_changes_footer() {
        let config = SiteConfig::default();
        let a = build_manifest(&config, 2025).unwrap();
        let b = build_manifest(&config, 2026).unwrap();
        let changed: Vec<&str> = a
            .iter()
            .zip(b.iter())
            .filter(|(x, y)| x.content() != y.content())
            .map(|(x, _)| x.relative_path())
            .collect();
        assert_eq!(changed, vec!["components/Footer.tsx"]);
    }

    #[test]
    fn test_placeholder_names_in_config_values_stay_literal() {
        let mut config = SiteConfig::default();
        config.site.name = "Acme {{description}}".to_string();
        config.products[0].title = "Pack {{color}}".to_string();
        config.plans[0].name = "Solo {{color}}".to_string();
        config.assistant.default_prompt = "Hi {{assistant}}".to_string();

        let manifest = build_manifest(&config, 2026).unwrap();

        let layout = manifest.content_of("app/layout.tsx").unwrap();
        assert!(layout.contains(
            "title: \"Acme {{description}} — Grow your business intelligently\","
        ));
        let product = manifest.content_of("app/shop/[slug]/page.tsx").unwrap();
        assert!(product.contains("\"title\": \"Pack {{color}}\""));
        let pricing = manifest.content_of("app/pricing/page.tsx").unwrap();
        assert!(pricing.contains("\"name\": \"Solo {{color}}\""));
        let route = manifest.content_of("app/api/ai/route.ts").unwrap();
        assert!(route.contains("body.prompt || \"Hi {{assistant}}\";"));
    }
}
