mod commands;

use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use commands::SiteArgs;
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "florastack")]
#[command(version, about = "Project generator for the FloraStack Next.js frontend", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Defaults to `generate` in the current directory
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Write the site files into the output root
    Generate {
        #[command(flatten)]
        site: SiteArgs,
    },

    /// Check what generate would do without writing anything
    Validate {
        #[command(flatten)]
        site: SiteArgs,
    },

    /// Run the placeholder API endpoints locally
    Serve {
        #[command(flatten)]
        site: SiteArgs,

        /// Port to serve on
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let command = cli.command.unwrap_or(Command::Generate {
        site: SiteArgs::default(),
    });

    match command {
        Command::Generate { site } => commands::generate::run(site),
        Command::Validate { site } => commands::validate::run(site),
        Command::Serve { site, port } => commands::serve::run(site, port).await,
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "florastack", &mut io::stdout());
            Ok(())
        }
    }
}
