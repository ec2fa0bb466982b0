// Shared components and the placeholder API route handlers

use crate::render::{js_string, jsx_text, render};
use florastack_core::{Manifest, Result, SiteConfig};

pub fn push_api_routes(manifest: &mut Manifest, config: &SiteConfig) -> Result<()> {
    // The answer is built in a TS template literal, so the assistant name
    // must not be able to close it or open an interpolation.
    let assistant = config
        .assistant
        .name
        .replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${");

    manifest.push(
        "app/api/ai/route.ts",
        render(
            AI_ROUTE,
            &[
                ("default_prompt", js_string(&config.assistant.default_prompt)?.as_str()),
                ("assistant", assistant.as_str()),
            ],
        ),
    );
    manifest.push("app/api/health/route.ts", HEALTH_ROUTE);
    Ok(())
}

pub fn push_components(manifest: &mut Manifest, config: &SiteConfig, year: i32) {
    let site_name = jsx_text(&config.site.name);
    let tagline = jsx_text(&config.site.tagline);
    let monogram = jsx_text(&config.site.monogram);
    let year = year.to_string();
    let vars = [
        ("site_name", site_name.as_str()),
        ("tagline", tagline.as_str()),
        ("monogram", monogram.as_str()),
        ("color", config.theme.color_name.as_str()),
        ("year", year.as_str()),
    ];

    manifest.push("components/Nav.tsx", render(NAV, &vars));
    manifest.push("components/Footer.tsx", render(FOOTER, &vars));
}

const AI_ROUTE: &str = r#"import { NextResponse } from 'next/server';

export async function POST(req: Request) {
  try {
    const body = await req.json();
    const prompt = body.prompt || {{default_prompt}};
    // Placeholder response - replace this with your AI provider integration
    const answer = `{{assistant}} placeholder response for prompt: "${prompt}"`;
    return NextResponse.json({ answer });
  } catch (err) {
    return NextResponse.json({ error: 'Invalid request' }, { status: 400 });
  }
}
"#;

const HEALTH_ROUTE: &str = r#"import { NextResponse } from 'next/server';

export async function GET() {
  return NextResponse.json({ status: 'ok', timestamp: Date.now() });
}
"#;

const NAV: &str = r#"'use client';
import Link from 'next/link';
import { useState } from 'react';
import { MenuIcon } from '@heroicons/react/24/outline';

export default function Nav() {
  const [open, setOpen] = useState(false);
  return (
    <header className="bg-white/60 backdrop-blur-sm border-b">
      <div className="container flex items-center justify-between h-16">
        <Link href="/" className="flex items-center gap-3">
          <div className="w-9 h-9 rounded-lg bg-gradient-to-br from-{{color}}-400 to-{{color}}-600 flex items-center justify-center text-white font-bold">{{monogram}}</div>
          <div>
            <div className="font-semibold">{{site_name}}</div>
            <div className="text-xs text-slate-500 -mt-0.5">{{tagline}}</div>
          </div>
        </Link>

        <nav className="hidden md:flex items-center gap-6 text-sm">
          <Link href="/features" className="hover:text-{{color}}-700">Features</Link>
          <Link href="/pricing" className="hover:text-{{color}}-700">Pricing</Link>
          <Link href="/shop" className="hover:text-{{color}}-700">Marketplace</Link>
          <Link href="/dashboard" className="px-4 py-2 bg-{{color}}-500 text-white rounded-lg hover:bg-{{color}}-600">Dashboard</Link>
        </nav>

        <button className="md:hidden p-2" onClick={() => setOpen(!open)} aria-label="menu">
          <MenuIcon className="w-6 h-6 text-slate-700" />
        </button>
      </div>

      {open && (
        <div className="md:hidden border-t">
          <div className="flex flex-col p-4 gap-3">
            <Link href="/features">Features</Link>
            <Link href="/pricing">Pricing</Link>
            <Link href="/shop">Marketplace</Link>
            <Link href="/dashboard" className="px-3 py-2 bg-{{color}}-500 text-white rounded-lg">Dashboard</Link>
          </div>
        </div>
      )}
    </header>
  );
}
"#;

const FOOTER: &str = r#"export default function Footer() {
  return (
    <footer className="border-t bg-white/60">
      <div className="container py-8 flex flex-col md:flex-row justify-between items-center gap-4">
        <div className="text-sm text-slate-600">© {{year}} {{site_name}} — {{tagline}}</div>
        <div className="flex items-center gap-4 text-sm">
          <a href="/terms" className="hover:text-{{color}}-700">Terms</a>
          <a href="/privacy" className="hover:text-{{color}}-700">Privacy</a>
        </div>
      </div>
    </footer>
  );
}
"#;
