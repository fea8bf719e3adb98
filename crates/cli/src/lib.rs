pub mod commands;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use balcao_core::config::{AppConfig, LoadOptions};

#[derive(Debug, Parser)]
#[command(
    name = "balcao",
    about = "Balcao conversational store",
    long_about = "Chat-driven storefront: catalog browsing, cart, subscriptions, and simulated payments over a text loop.",
    after_help = "Examples:\n  balcao chat\n  balcao catalog --plans\n  balcao pay --method pix --amount 100.00"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Start an interactive chat session against the in-memory engine")]
    Chat {
        #[arg(long, default_value = "local", help = "Session identifier; state is isolated per session")]
        session: String,
    },
    #[command(about = "Print the seeded catalog")]
    Catalog {
        #[arg(long, help = "List subscription plans instead of products")]
        plans: bool,
    },
    #[command(about = "Simulate one payment and print the attempt")]
    Pay {
        #[arg(long, help = "pix | card | voucher | wallet")]
        method: String,
        #[arg(long, help = "Amount in reais, e.g. 99.90")]
        amount: String,
        #[arg(long, help = "Card number (card method only)")]
        card_number: Option<String>,
    },
    #[command(about = "Inspect effective configuration values")]
    Config,
}

fn init_logging(config: &AppConfig) {
    use balcao_core::config::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("configuration error: {error}");
            return ExitCode::from(2);
        }
    };
    init_logging(&config);

    let result = match cli.command {
        Command::Chat { session } => commands::chat::run(&config, &session),
        Command::Catalog { plans } => commands::catalog::run(&config, plans),
        Command::Pay { method, amount, card_number } => {
            commands::pay::run(&config, &method, &amount, card_number.as_deref())
        }
        Command::Config => commands::config::run(&config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}
