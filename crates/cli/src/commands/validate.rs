use super::SiteArgs;
use anyhow::Result;
use florastack_validator::{FileAction, validate_manifest};

pub fn run(site: SiteArgs) -> Result<()> {
    println!("Validating site at: {}", site.root.display());

    let (config, manifest) = site.build_manifest()?;
    println!("✓ Configuration valid");
    println!("  Site: {} ({})", config.site.name, config.site.package_name);
    println!("  Pages: {} plans, {} products", config.plans.len(), config.products.len());

    let report = validate_manifest(&site.root, &manifest);

    println!();
    for planned in &report.plan {
        let marker = match planned.action {
            FileAction::Create => "+",
            FileAction::Overwrite => "~",
            FileAction::Unchanged => "=",
        };
        println!("  {} {}", marker, planned.path);
    }

    if !report.info.is_empty() {
        println!();
        for line in &report.info {
            println!("  {}", line);
        }
    }
    for warning in &report.warnings {
        eprintln!("⚠ {}", warning);
    }
    for error in &report.errors {
        eprintln!("✗ {}", error);
    }

    if !report.is_ok() {
        anyhow::bail!("Validation failed with {} error(s)", report.errors.len());
    }

    println!("\n✓ Ready to generate");
    Ok(())
}
