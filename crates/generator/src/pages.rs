// App Router pages under app/

use crate::render::{js_literal, js_string, jsx_text, render};
use florastack_core::{Manifest, Result, SiteConfig};

pub fn push_pages(manifest: &mut Manifest, config: &SiteConfig) -> Result<()> {
    let color = config.theme.color_name.as_str();

    manifest.push(
        "app/layout.tsx",
        render(
            LAYOUT,
            &[
                ("title", js_string(&config.site.title())?.as_str()),
                ("description", js_string(&config.site.description)?.as_str()),
            ],
        ),
    );
    manifest.push("app/page.tsx", home_page(config)?);
    manifest.push(
        "app/features/page.tsx",
        render(
            FEATURES,
            &[("features", js_literal(&config.features, 2)?.as_str())],
        ),
    );
    manifest.push(
        "app/pricing/page.tsx",
        render(
            PRICING,
            &[("plans", js_literal(&config.plans, 2)?.as_str()), ("color", color)],
        ),
    );
    manifest.push(
        "app/shop/page.tsx",
        render(SHOP, &[("products", js_literal(&config.products, 2)?.as_str())]),
    );
    manifest.push(
        "app/shop/[slug]/page.tsx",
        render(
            PRODUCT,
            &[("products", js_literal(&config.products, 0)?.as_str()), ("color", color)],
        ),
    );
    manifest.push(
        "app/dashboard/page.tsx",
        render(
            DASHBOARD,
            &[
                ("assistant", js_string(&config.assistant.name)?.as_str()),
                ("color", color),
            ],
        ),
    );
    manifest.push(
        "app/login/page.tsx",
        render(
            AUTH_FORM,
            &[
                ("component", "LoginPage"),
                ("heading", "Sign in"),
                ("action", "Sign in"),
                ("switch_prompt", "Don't have an account?"),
                ("switch_href", "/register"),
                ("switch_label", "Register"),
                ("color", color),
            ],
        ),
    );
    manifest.push(
        "app/register/page.tsx",
        render(
            AUTH_FORM,
            &[
                ("component", "RegisterPage"),
                ("heading", "Create account"),
                ("action", "Create account"),
                ("switch_prompt", "Already have an account?"),
                ("switch_href", "/login"),
                ("switch_label", "Sign in"),
                ("color", color),
            ],
        ),
    );
    Ok(())
}

fn home_page(config: &SiteConfig) -> Result<String> {
    let (header, toggle, toggle_component) = if config.theme.dark_mode {
        (HOME_HEADER_DARK, HOME_THEME_TOGGLE, THEME_TOGGLE_COMPONENT)
    } else {
        (HOME_HEADER, "", "")
    };

    Ok(render(
        HOME,
        &[
            ("header", header),
            ("theme_toggle", toggle),
            ("theme_toggle_component", toggle_component),
            ("site_name", jsx_text(&config.site.name).as_str()),
            ("highlights", js_literal(&config.highlights, 2)?.as_str()),
            ("color", config.theme.color_name.as_str()),
        ],
    ))
}

const LAYOUT: &str = r#"import './globals.css';
import Nav from '../components/Nav';
import Footer from '../components/Footer';
import type { ReactNode } from 'react';

export const metadata = {
  title: {{title}},
  description: {{description}}
};

export default function RootLayout({ children }: { children: ReactNode }) {
  return (
    <html lang="en">
      <body>
        <div className="min-h-screen flex flex-col">
          <Nav />
          <main className="flex-1">{children}</main>
          <Footer />
        </div>
      </body>
    </html>
  );
}
"#;

const HOME_HEADER: &str = r#"import Link from 'next/link';
import { motion } from 'framer-motion';
"#;

const HOME_HEADER_DARK: &str = r#"'use client';
import Link from 'next/link';
import { motion } from 'framer-motion';
import { useEffect, useState } from 'react';
"#;

const HOME_THEME_TOGGLE: &str = r#"      <ThemeToggle />
"#;

const THEME_TOGGLE_COMPONENT: &str = r#"
function ThemeToggle() {
  const [dark, setDark] = useState(false);
  useEffect(() => { document.documentElement.classList.toggle('dark', dark); }, [dark]);

  return (
    <div className="flex justify-end mb-6">
      <button onClick={() => setDark(d => !d)} className="px-3 py-1 rounded bg-slate-100 dark:bg-slate-800">Toggle Theme</button>
    </div>
  );
}
"#;

const HOME: &str = r#"{{header}}
const highlights = {{highlights}};

export default function Home() {
  return (
    <section className="container py-20">
{{theme_toggle}}      <div className="grid md:grid-cols-2 gap-12 items-center">
        <div>
          <motion.h1 initial={{ y: 10, opacity: 0 }} animate={{ y: 0, opacity: 1 }} className="text-5xl font-extrabold leading-tight">
            Grow smarter with <span className="text-{{color}}-600">AI-powered workflows</span>
          </motion.h1>
          <p className="mt-6 text-lg text-slate-600 max-w-prose">
            {{site_name}} combines automation, analytics, and a marketplace of AI modules so your team can focus on growth — not repetitive work.
          </p>

          <div className="mt-8 flex gap-4">
            <Link href="/pricing" className="px-6 py-3 bg-{{color}}-500 text-white rounded-lg shadow hover:bg-{{color}}-600">Get Started</Link>
            <Link href="/features" className="px-6 py-3 border rounded-lg">See Features</Link>
          </div>

          <div className="mt-8 text-sm text-slate-500">Join early teams using AI to automate lead qualification, generate outreach, and predict pipeline growth.</div>
        </div>

        <div>
          <div className="bg-gradient-to-br from-white to-slate-50 border rounded-2xl p-6 shadow-xl">
            <div className="bg-white rounded-xl p-6 shadow-md">
              <div className="flex items-start gap-4">
                <div className="w-12 h-12 rounded-lg bg-{{color}}-500 text-white flex items-center justify-center font-semibold">AI</div>
                <div>
                  <div className="font-semibold">AI Assistant</div>
                  <div className="text-sm text-slate-500">Summarize sales, draft outreach, or generate reports instantly.</div>
                </div>
              </div>

              <div className="mt-4">
                <div className="text-xs text-slate-400">Try prompt</div>
                <div className="mt-2 p-3 bg-slate-50 rounded">"Summarize opportunities for next quarter and recommend next actions."</div>
              </div>
            </div>
          </div>
        </div>
      </div>

      <section className="mt-16">
        <h3 className="text-2xl font-bold">Why {{site_name}}?</h3>
        <div className="mt-6 grid md:grid-cols-3 gap-6">
          {highlights.map((h) => <Feature key={h.title} title={h.title} desc={h.desc} />)}
        </div>
      </section>
    </section>
  );
}

function Feature({ title, desc }: { title: string; desc: string }) {
  return (
    <div className="p-6 border rounded-xl bg-white">
      <div className="text-lg font-semibold">{title}</div>
      <div className="mt-2 text-slate-600">{desc}</div>
    </div>
  );
}
{{theme_toggle_component}}"#;

const FEATURES: &str = r#"export default function FeaturesPage() {
  const features = {{features}};

  return (
    <section className="container py-20">
      <h2 className="text-3xl font-bold">Features</h2>
      <div className="mt-8 grid md:grid-cols-2 gap-6">
        {features.map((f) => (
          <div key={f.title} className="p-6 border rounded-xl bg-white">
            <div className="text-lg font-semibold">{f.title}</div>
            <div className="mt-2 text-slate-600">{f.desc}</div>
          </div>
        ))}
      </div>
    </section>
  );
}
"#;

const PRICING: &str = r#"export default function Pricing() {
  const plans = {{plans}};

  return (
    <section className="container py-20">
      <h2 className="text-3xl font-bold">Pricing</h2>
      <div className="mt-8 grid md:grid-cols-3 gap-6">
        {plans.map((p) => (
          <div key={p.name} className="p-6 border rounded-xl bg-white shadow">
            <div className="text-lg font-semibold">{p.name}</div>
            <div className="mt-4 text-3xl font-bold">{p.price} <span className="text-base font-medium text-slate-500">{p.freq}</span></div>
            <ul className="mt-4 text-slate-600 space-y-2">
              {p.features.map((f) => <li key={f}>• {f}</li>)}
            </ul>
            <div className="mt-6">
              <button className="w-full px-4 py-2 bg-{{color}}-500 text-white rounded-lg">Choose</button>
            </div>
          </div>
        ))}
      </div>
    </section>
  );
}
"#;

const SHOP: &str = r#"import Link from 'next/link';

export default function Shop() {
  const products = {{products}};

  return (
    <section className="container py-20">
      <h2 className="text-3xl font-bold">Marketplace</h2>
      <div className="mt-8 grid md:grid-cols-3 gap-6">
        {products.map((p) => (
          <div key={p.id} className="p-6 border rounded-xl bg-white">
            <div className="font-semibold">{p.title}</div>
            <div className="mt-4 text-slate-600">A proven template to accelerate your workflows.</div>
            <div className="mt-4 text-xl font-bold">{p.price}</div>
            <div className="mt-6">
              <Link href={`/shop/${p.id}`} className="px-4 py-2 border rounded-lg">View</Link>
            </div>
          </div>
        ))}
      </div>
    </section>
  );
}
"#;

const PRODUCT: &str = r#"import { notFound } from 'next/navigation';

type Props = { params: { slug: string } };

const products = {{products}};

export default function ProductPage({ params }: Props) {
  const product = products.find((p) => p.id === params.slug);
  if (!product) notFound();

  return (
    <section className="container py-12">
      <div className="max-w-3xl bg-white border rounded-xl p-6">
        <h1 className="text-2xl font-bold">{product.title}</h1>
        <div className="mt-4 text-slate-600">A proven template to accelerate your workflows.</div>
        <div className="mt-6 text-2xl font-bold">{product.price}</div>
        <div className="mt-6">
          <button className="px-4 py-2 bg-{{color}}-500 text-white rounded-lg">Buy</button>
        </div>
      </div>
    </section>
  );
}
"#;

const DASHBOARD: &str = r#"'use client';
import { useState } from 'react';

export default function Dashboard() {
  const [input, setInput] = useState('');
  const [messages, setMessages] = useState<{role: string; content: string}[]>([]);

  async function send() {
    if (!input) return;
    setMessages(prev => [...prev, {role: 'user', content: input}]);
    setMessages(prev => [...prev, {role: 'assistant', content: 'Thinking...'}]);
    setInput('');
    // Wire this to /api/ai once a language model backend is configured
  }

  return (
    <section className="container py-12">
      <h1 className="text-2xl font-bold">AI Assistant</h1>
      <div className="mt-6 grid md:grid-cols-3 gap-6">
        <div className="md:col-span-2">
          <div className="p-4 border rounded-lg bg-white min-h-[300px]">
            {messages.map((m, i) => (
              <div key={i} className={`p-2 my-2 rounded ${m.role === 'user' ? 'bg-{{color}}-50' : 'bg-slate-50'}`}>
                <strong>{m.role === 'user' ? 'You' : {{assistant}}}:</strong> {m.content}
              </div>
            ))}
          </div>

          <div className="mt-4 flex gap-2">
            <input value={input} onChange={(e) => setInput(e.target.value)} className="flex-1 p-3 border rounded-lg" placeholder="Ask..." />
            <button onClick={send} className="px-4 py-2 bg-{{color}}-500 text-white rounded-lg">Send</button>
          </div>
        </div>

        <aside className="p-4 border rounded-lg bg-white">
          <h3 className="font-semibold">Insights</h3>
          <div className="mt-3 text-slate-600">Quick metrics and subscription status will appear here.</div>
        </aside>
      </div>
    </section>
  );
}
"#;

const AUTH_FORM: &str = r#"'use client';
import { useState } from 'react';
import Link from 'next/link';

export default function {{component}}() {
  const [email, setEmail] = useState('');
  const [password, setPassword] = useState('');

  function submit(e) {
    e.preventDefault();
    alert('This is a placeholder. Integrate NextAuth or your auth provider.');
  }

  return (
    <section className="container py-12 max-w-md">
      <h1 className="text-2xl font-bold mb-4">{{heading}}</h1>
      <form onSubmit={submit} className="bg-white border p-6 rounded-lg space-y-4">
        <input value={email} onChange={e => setEmail(e.target.value)} placeholder="Email" className="w-full p-3 border rounded" />
        <input value={password} onChange={e => setPassword(e.target.value)} type="password" placeholder="Password" className="w-full p-3 border rounded" />
        <button className="w-full px-4 py-2 bg-{{color}}-500 text-white rounded-lg">{{action}}</button>
      </form>
      <div className="mt-4 text-sm">{{switch_prompt}} <Link href="{{switch_href}}" className="text-{{color}}-600">{{switch_label}}</Link></div>
    </section>
  );
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(config: &SiteConfig) -> Manifest {
        let mut manifest = Manifest::new();
        push_pages(&mut manifest, config).unwrap();
        manifest
    }

    #[test]
    fn test_page_paths() {
        let manifest = pages(&SiteConfig::default());
        let paths: Vec<&str> = manifest.iter().map(|e| e.relative_path()).collect();
        assert_eq!(
            paths,
            vec![
                "app/layout.tsx",
                "app/page.tsx",
                "app/features/page.tsx",
                "app/pricing/page.tsx",
                "app/shop/page.tsx",
                "app/shop/[slug]/page.tsx",
                "app/dashboard/page.tsx",
                "app/login/page.tsx",
                "app/register/page.tsx",
            ]
        );
    }

    #[test]
    fn test_layout_metadata() {
        let manifest = pages(&SiteConfig::default());
        let layout = manifest.content_of("app/layout.tsx").unwrap();
        assert!(layout.contains("title: \"FloraStack — Grow your business intelligently\","));
        assert!(layout.contains("<Footer />"));
    }

    #[test]
    fn test_home_page_light_has_no_toggle() {
        let manifest = pages(&SiteConfig::default());
        let home = manifest.content_of("app/page.tsx").unwrap();
        assert!(!home.contains("'use client'"));
        assert!(!home.contains("ThemeToggle"));
        assert!(home.contains("initial={{ y: 10, opacity: 0 }}"));
        assert!(home.contains("Why FloraStack?"));
        assert!(home.contains("\"title\": \"Automate\""));
    }

    #[test]
    fn test_home_page_dark_mode_toggle() {
        let mut config = SiteConfig::default();
        config.theme.dark_mode = true;
        let home = pages(&config).content_of("app/page.tsx").unwrap().to_string();
        assert!(home.starts_with("'use client';"));
        assert!(home.contains("<ThemeToggle />"));
        assert!(home.contains("function ThemeToggle()"));
        assert!(home.contains("classList.toggle('dark', dark)"));
    }

    #[test]
    fn test_site_name_is_escaped_in_jsx() {
        let mut config = SiteConfig::default();
        config.site.name = "Flora {Labs} <beta>".to_string();
        let home = pages(&config).content_of("app/page.tsx").unwrap().to_string();
        assert!(home.contains("Why Flora &#123;Labs&#125; &lt;beta&gt;?"));
    }

    #[test]
    fn test_pricing_embeds_plans() {
        let manifest = pages(&SiteConfig::default());
        let pricing = manifest.content_of("app/pricing/page.tsx").unwrap();
        assert!(pricing.contains("\"name\": \"Enterprise\""));
        assert!(pricing.contains("\"5k AI queries\""));
        assert!(pricing.contains("bg-flora-500"));
    }

    #[test]
    fn test_product_page_looks_up_slug() {
        let manifest = pages(&SiteConfig::default());
        let product = manifest.content_of("app/shop/[slug]/page.tsx").unwrap();
        assert!(product.contains("products.find((p) => p.id === params.slug)"));
        assert!(product.contains("\"id\": \"workflow-pro\""));
    }

    #[test]
    fn test_dashboard_assistant_name() {
        let mut config = SiteConfig::default();
        config.assistant.name = "Fern's Bot".to_string();
        let dashboard = pages(&config)
            .content_of("app/dashboard/page.tsx")
            .unwrap()
            .to_string();
        assert!(dashboard.contains("? 'You' : \"Fern's Bot\"}:</strong>"));
    }

    #[test]
    fn test_auth_pages_are_placeholders() {
        let manifest = pages(&SiteConfig::default());
        let login = manifest.content_of("app/login/page.tsx").unwrap();
        let register = manifest.content_of("app/register/page.tsx").unwrap();
        assert!(login.contains("export default function LoginPage()"));
        assert!(login.contains("href=\"/register\""));
        assert!(register.contains("export default function RegisterPage()"));
        assert!(register.contains("Already have an account?"));
        for page in [login, register] {
            assert!(page.contains("alert('This is a placeholder."));
        }
    }

    #[test]
    fn test_color_name_flows_into_classes() {
        let mut config = SiteConfig::default();
        config.theme.color_name = "moss".to_string();
        let manifest = pages(&config);
        for entry in &manifest {
            assert!(
                !entry.content().contains("flora-"),
                "{} still uses the default colour",
                entry.relative_path()
            );
        }
        assert!(
            manifest
                .content_of("app/dashboard/page.tsx")
                .unwrap()
                .contains("bg-moss-500")
        );
    }
}
