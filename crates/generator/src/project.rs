// Build configuration, styling, public placeholders and README

use crate::render::render;
use florastack_core::{Manifest, Result, SiteConfig};
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

const DEPENDENCIES: &[(&str, &str)] = &[
    ("next", "14.0.0"),
    ("react", "18.2.0"),
    ("react-dom", "18.2.0"),
    ("framer-motion", "10.12.5"),
    ("clsx", "1.2.1"),
    ("tailwindcss", "3.5.0"),
    ("postcss", "8.4.24"),
    ("autoprefixer", "10.4.14"),
    ("@heroicons/react", "2.0.18"),
];

const DEV_DEPENDENCIES: &[(&str, &str)] = &[("typescript", "5.2.2")];

#[derive(Serialize)]
struct PackageJson<'a> {
    name: &'a str,
    private: bool,
    version: &'a str,
    scripts: Scripts,
    dependencies: Versions,
    #[serde(rename = "devDependencies")]
    dev_dependencies: Versions,
}

/// `name -> version` object that keeps the listed order
struct Versions(&'static [(&'static str, &'static str)]);

impl Serialize for Versions {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, version) in self.0 {
            map.serialize_entry(name, version)?;
        }
        map.end()
    }
}

#[derive(Serialize)]
struct Scripts {
    dev: &'static str,
    build: &'static str,
    start: &'static str,
}

pub fn push_config_files(manifest: &mut Manifest, config: &SiteConfig) -> Result<()> {
    let package = PackageJson {
        name: &config.site.package_name,
        private: true,
        version: "0.1.0",
        scripts: Scripts {
            dev: "next dev",
            build: "next build",
            start: "next start",
        },
        dependencies: Versions(DEPENDENCIES),
        dev_dependencies: Versions(DEV_DEPENDENCIES),
    };
    manifest.push_json("package.json", &package)?;

    manifest.push("tsconfig.json", TSCONFIG);
    manifest.push("next.config.js", NEXT_CONFIG);
    manifest.push("postcss.config.js", POSTCSS_CONFIG);
    manifest.push("tailwind.config.js", tailwind_config(config));
    manifest.push("app/globals.css", GLOBALS_CSS);
    Ok(())
}

pub fn push_public_placeholders(manifest: &mut Manifest) {
    manifest.push(
        "public/placeholder-favicon.txt",
        "Replace with your favicon (add public/favicon.ico or public/favicon.svg)",
    );
    manifest.push(
        "public/og-image.txt",
        "Replace with your Open Graph image at public/og-image.png",
    );
}

pub fn push_readme(manifest: &mut Manifest, config: &SiteConfig) {
    manifest.push(
        "README.md",
        render(README, &[("site_name", config.site.name.as_str())]),
    );
}

fn tailwind_config(config: &SiteConfig) -> String {
    let shades = config
        .theme
        .shades()
        .map(|(level, color)| format!("          {}: '{}'", level, color))
        .collect::<Vec<_>>()
        .join(",\n");
    let dark_mode = if config.theme.dark_mode {
        "  darkMode: 'class',\n"
    } else {
        ""
    };

    render(
        TAILWIND_CONFIG,
        &[
            ("color", config.theme.color_name.as_str()),
            ("shades", shades.as_str()),
            ("dark_mode", dark_mode),
        ],
    )
}

const TSCONFIG: &str = r#"{
  "compilerOptions": {
    "target": "ES2022",
    "lib": ["DOM", "DOM.Iterable", "ESNext"],
    "allowJs": true,
    "skipLibCheck": true,
    "strict": false,
    "forceConsistentCasingInFileNames": true,
    "noEmit": true,
    "esModuleInterop": true,
    "module": "ESNext",
    "moduleResolution": "Node",
    "resolveJsonModule": true,
    "isolatedModules": true,
    "jsx": "preserve"
  },
  "include": ["next-env.d.ts", "**/*.ts", "**/*.tsx"],
  "exclude": ["node_modules"]
}"#;

const NEXT_CONFIG: &str = r#"/** @type {import('next').NextConfig} */
module.exports = {
  reactStrictMode: true,
  experimental: { appDir: true }
};
"#;

const POSTCSS_CONFIG: &str =
    "module.exports = { plugins: { tailwindcss: {}, autoprefixer: {} } };\n";

const TAILWIND_CONFIG: &str = r#"module.exports = {
  content: ['./app/**/*.{ts,tsx}', './components/**/*.{ts,tsx}'],
  theme: {
    extend: {
      colors: {
        {{color}}: {
{{shades}}
        }
      }
    }
  },
{{dark_mode}}  plugins: [],
};"#;

const GLOBALS_CSS: &str = r#"@tailwind base;
@tailwind components;
@tailwind utilities;

html, body, #__next { height: 100%; }
body {
  @apply bg-gradient-to-b from-slate-50 via-white to-slate-50 text-slate-900 antialiased;
  font-family: ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, "Helvetica Neue", Arial;
}
.container { @apply max-w-6xl mx-auto px-6; }
"#;

const README: &str = r#"# {{site_name}} Frontend

This is the {{site_name}} frontend (Next.js App Router + TypeScript + TailwindCSS + Framer Motion).

## Quick Start (locally)
1. Run `florastack` in this directory to generate the files.
2. Install deps: `npm install`
3. Run dev: `npm run dev`

## Customizing
Put a `florastack.toml` next to the generated files to change the name,
tagline, colour palette, plans, marketplace products and assistant defaults,
then run `florastack` again. Generation is idempotent: files are rewritten in
place and nothing else in the directory is touched.

## Vercel
Set the Build Command to:
```
florastack && npm install && npm run build
```

## Notes
- Replace placeholder assets (favicon, OG image) and wire auth/AI providers as needed.
- `florastack serve` runs the placeholder `/api/ai` and `/api/health` endpoints locally."#;
