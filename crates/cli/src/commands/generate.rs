use super::SiteArgs;
use anyhow::{Context, Result};
use florastack_core::WriteResult;
use florastack_materializer::materialize;

/// Generate the site into `site.root`.
///
/// Prints one `Wrote <path>` line per file as it lands. The first failure
/// aborts the run; files written before it are left in place, and running
/// the command again rewrites everything.
pub fn run(site: SiteArgs) -> Result<()> {
    let (config, manifest) = site.build_manifest()?;
    tracing::info!(
        site = %config.site.name,
        root = %site.root.display(),
        entries = manifest.len(),
        "generating site"
    );

    let mut report = |result: &WriteResult| println!("Wrote {}", result.path);
    let results = materialize(&site.root, &manifest, &mut report)
        .with_context(|| format!("Failed to generate site in {}", site.root.display()))?;

    let created = results.iter().filter(|r| r.created).count();
    println!();
    println!(
        "✓ {} generated: {} files ({} created, {} rewritten)",
        config.site.name,
        results.len(),
        created,
        results.len() - created
    );
    println!("\nNext steps:");
    println!("  npm install");
    println!("  npm run dev");

    Ok(())
}
