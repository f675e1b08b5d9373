// Rust guideline compliant 2026-02-06

//! TrouveTonPro CLI Application
//!
//! Command-line front end for the TrouveTonPro worker directory.

use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use trouve_app::AppError;
use trouve_cli::commands::{self, list::ListOptions};
use trouve_cli::logging::init_tracing;
use trouve_cli::{create_formatter, should_use_color, CommandContext};
use trouve_core::{Config, ContactAction, SortCriterion};

#[derive(Parser, Debug)]
#[command(
    name = "ttp",
    version,
    about = "TrouveTonPro: find a service professional near you",
    long_about = "Browse the TrouveTonPro directory of plumbers, electricians and other professionals, view their profiles and contact them by phone or WhatsApp.",
    after_help = "Examples:\n  ttp list --category Plombier --sort name\n  ttp list --search casa --sort distance --lat 33.57 --lng -7.59\n  ttp show 12\n  ttp whatsapp 12\n  ttp categories\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory service address (overrides the configuration)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Append JSON logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// List workers
    List {
        /// Search in name, category and city
        #[arg(long)]
        search: Option<String>,

        /// Category to show ("all" for every category)
        #[arg(long)]
        category: Option<String>,

        /// Sort order (name, city, distance)
        #[arg(long)]
        sort: Option<SortCriterion>,

        /// Current latitude, enables distance sorting
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Current longitude, enables distance sorting
        #[arg(long, allow_hyphen_values = true)]
        lng: Option<f64>,
    },

    /// Show details of a worker
    Show {
        /// Worker ID
        id: String,

        /// Name to display while loading
        #[arg(long)]
        name: Option<String>,
    },

    /// Call a worker
    Call {
        /// Worker ID
        id: String,
    },

    /// Contact a worker on WhatsApp
    Whatsapp {
        /// Worker ID
        id: String,
    },

    /// List the categories of the directory
    Categories,
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_file(path),
        None => Config::load(Path::new(".")),
    }
    .context("Failed to load configuration")?;

    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
        config.validate()?;
    }
    Ok(config)
}

fn format_name(cli: &Cli, config: &Config) -> &'static str {
    match cli.format {
        Some(OutputFormat::Json) => "json",
        Some(OutputFormat::Table) => "table",
        Some(OutputFormat::Plain) => "plain",
        None if cli.json => "json",
        None => match config.output_format {
            trouve_core::OutputFormat::Json => "json",
            trouve_core::OutputFormat::Table => "table",
            trouve_core::OutputFormat::Plain => "plain",
        },
    }
}

async fn dispatch(ctx: &CommandContext, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::List {
            search,
            category,
            sort,
            lat,
            lng,
        } => {
            let options = ListOptions {
                search,
                category,
                sort,
                lat,
                lng,
            };
            commands::list::execute(ctx, options).await
        }
        Commands::Show { id, name } => commands::show::execute(ctx, id, name).await,
        Commands::Call { id } => commands::contact::execute(ctx, id, ContactAction::Call).await,
        Commands::Whatsapp { id } => {
            commands::contact::execute(ctx, id, ContactAction::WhatsApp).await
        }
        Commands::Categories => commands::categories::execute(ctx).await,
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_tracing(&cli.log_level, cli.log_file.as_deref())?;

    let use_color = !cli.no_color && should_use_color();
    let config = load_config(&cli)?;
    let formatter = create_formatter(format_name(&cli, &config), use_color);

    let Some(command) = cli.command else {
        println!("Use --help for usage information");
        return Ok(());
    };

    let ctx = CommandContext::new(config, formatter);
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    if let Err(err) = runtime.block_on(dispatch(&ctx, command)) {
        match err.downcast_ref::<AppError>() {
            Some(app_error) if ctx.formatter.is_machine_readable() => {
                println!("{}", ctx.formatter.format_app_error(app_error));
            }
            _ if ctx.formatter.is_machine_readable() => {
                println!("{}", ctx.formatter.format_error(&format!("{err:#}")));
            }
            _ => eprintln!("{}", ctx.formatter.format_error(&format!("{err:#}"))),
        }
        std::process::exit(1);
    }

    Ok(())
}
