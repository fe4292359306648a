use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;

mod api;
mod config;
mod fetch;
mod model;
mod state;
mod ui;

use api::ApiClient;
use config::Config;
use state::EventLog;
use ui::App;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    let mut base_url_override: Option<String> = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--version" | "-V" => {
                println!("storedesk {}", env!("CARGO_PKG_VERSION"));
                return ExitCode::SUCCESS;
            }
            "--help" | "-h" => {
                print_help();
                return ExitCode::SUCCESS;
            }
            "--base-url" => {
                i += 1;
                match args.get(i) {
                    Some(url) => base_url_override = Some(url.clone()),
                    None => {
                        eprintln!("error: --base-url requires a value");
                        return ExitCode::FAILURE;
                    }
                }
            }
            arg => {
                eprintln!("error: unknown argument '{arg}'");
                eprintln!("run 'storedesk --help' for usage");
                return ExitCode::FAILURE;
            }
        }
        i += 1;
    }

    match run(base_url_override) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(base_url_override: Option<String>) -> anyhow::Result<()> {
    let mut config = Config::discover().context("load configuration")?;
    if let Some(base_url) = base_url_override {
        config.base_url = base_url;
    }

    let client = ApiClient::new(
        &config.base_url,
        config.api_key.clone(),
        Duration::from_secs(config.timeout_secs),
    )
    .context("build API client")?;

    let event_log = EventLog::new(Config::log_dir());

    let mut app = App::new(config, client, event_log);
    app.run().context("run terminal UI")?;
    Ok(())
}

fn print_help() {
    println!(
        "storedesk {} - Terminal UI for administering a storefront backend

USAGE:
    storedesk [OPTIONS]

OPTIONS:
    -h, --help            Print help information
    -V, --version         Print version information
    --base-url <URL>      Override the configured API base URL

CONFIGURATION:
    Read from {} in the working directory, then from the user
    config directory. Fields: base_url, api_key, page_limit, timeout_secs.

    Views: products, orders, customers, users, payments, inventory.
    Press ? inside the UI for key bindings.",
        env!("CARGO_PKG_VERSION"),
        config::CONFIG_FILE
    );
}
