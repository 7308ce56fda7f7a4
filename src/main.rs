use std::net::SocketAddr;
use std::process;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use idash::api::{build_http_client, fetch_instances};
use idash::config::{self, DEFAULT_HOST, DEFAULT_PORT};
use idash::ec2::{Ec2Inventory, InstanceSource};
use idash::models::AppState;
use idash::routes::build_router;
use idash::view::instance_table;

async fn build_state_from_env(env_file: Option<&str>) -> AppState {
    config::load_env_file(env_file);
    let inventory = Ec2Inventory::from_env().await;
    AppState {
        inventory: Arc::new(inventory),
        custom_css: None,
    }
}

async fn start_server(mut state: AppState, host: &str, port: u16, stylesheet: Option<String>) {
    if let Some(path) = stylesheet {
        match std::fs::read_to_string(&path) {
            Ok(css) => {
                state.custom_css = Some(css);
                tracing::info!("Loaded custom stylesheet from {}", path);
            }
            Err(e) => {
                tracing::error!(%e, "Failed to read custom stylesheet");
                eprintln!("{} {}: {}", yansi::Paint::red("Failed to read custom stylesheet at"), path, e);
                process::exit(1);
            }
        }
    }

    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };
    let app = build_router(state);
    tracing::info!(%addr, "Starting idash server");
    println!(
        "{} {}",
        yansi::Paint::new("Web server running on").green(),
        yansi::Paint::new(format!("http://{}", addr)).cyan()
    );
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!(
                "{}: {}\n{}",
                yansi::Paint::new(format!("Failed to bind to {}", addr)).red(),
                e,
                yansi::Paint::new("Please stop any process using this port, or start the server with a different --port value.").yellow()
            );
            process::exit(1);
        }
    }
}

#[derive(Parser)]
#[command(
    name = "idash",
    author,
    version,
    about = "EC2 instance dashboard",
    long_about = r#"idash — a small dashboard for the EC2 instances visible to your credentials.

Run the web server and open the instance page in a browser, or read the same
table straight from the terminal. AWS credentials are taken from the
environment (ACCESS_KEY_ID / SECRET_ACCESS_KEY); use `--env-file` to point at
a .env file.

Examples:
  1) Build & run (dev):
      cargo run -- serve --host 127.0.0.1 --port 8080
  2) List instances from a running server:
      idash instances list
"#,
    after_help = "Use `idash <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
        /// Path to a custom stylesheet to serve instead of the default
        #[arg(long)]
        stylesheet: Option<String>,
    },
    /// Validate configuration (env vars / AWS credentials)
    #[command(
        about = "Validate configuration and ensure AWS connectivity.",
        long_about = "Check that the credential environment variables are set, then attempt one DescribeInstances call with them."
    )]
    CheckConfig { env_file: Option<String> },
    /// Read instances from a running dashboard server
    Instances {
        #[command(subcommand)]
        sub: InstanceCommands,
    },
}

#[derive(Subcommand)]
enum InstanceCommands {
    /// List instances
    #[command(
        about = "List instances",
        long_about = "Fetch the instance list from a running dashboard server and print it as a table. The table shows the rows in the order the server returned them."
    )]
    List {
        /// Dashboard base URL (defaults to DASHBOARD_URL or http://127.0.0.1:8080)
        #[arg(long)]
        endpoint: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // CLI parsing
    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    // Dispatch CLI commands. If no command provided, serve the web app by default
    if cli.command.is_none() {
        let state = build_state_from_env(None).await;
        start_server(state, DEFAULT_HOST, DEFAULT_PORT, None).await;
        return;
    }
    match cli.command.unwrap() {
        Commands::Serve {
            host,
            port,
            env_file,
            stylesheet,
        } => {
            let state = build_state_from_env(env_file.as_deref()).await;
            start_server(state, &host, port, stylesheet).await;
        }
        Commands::CheckConfig { env_file } => {
            config::load_env_file(env_file.as_deref());
            let mut ok = true;
            if config::get_access_key_id().trim().is_empty() {
                eprintln!("{}", yansi::Paint::new("ACCESS_KEY_ID is not configured").red());
                ok = false;
            }
            if config::get_secret_access_key().trim().is_empty() {
                eprintln!("{}", yansi::Paint::new("SECRET_ACCESS_KEY is not configured").red());
                ok = false;
            }
            if !ok {
                process::exit(1);
            }
            let inventory = Ec2Inventory::from_env().await;
            match inventory.describe_all().await {
                Ok(reservations) => {
                    println!(
                        "{}",
                        yansi::Paint::new(format!(
                            "Configuration looks valid ({} reservations visible)",
                            reservations.len()
                        ))
                        .green()
                    );
                    process::exit(0);
                }
                Err(e) => {
                    eprintln!(
                        "{}: {}",
                        yansi::Paint::new("Configuration appears invalid").red(),
                        e
                    );
                    process::exit(1);
                }
            }
        }
        Commands::Instances { sub } => {
            config::load_env_file(None);
            match sub {
                InstanceCommands::List { endpoint } => {
                    let base_url = endpoint
                        .map(|e| config::sanitize_base_url(&e))
                        .unwrap_or_else(config::get_dashboard_url);
                    let client = build_http_client();

                    let spinner = ProgressBar::new_spinner();
                    if let Ok(style) =
                        ProgressStyle::default_spinner().template("{spinner:.green} Fetching instances")
                    {
                        spinner.set_style(style);
                    }
                    spinner.enable_steady_tick(Duration::from_millis(100));
                    let result = fetch_instances(&client, &base_url).await;
                    spinner.finish_and_clear();

                    match result {
                        Ok(instances) => {
                            if instances.is_empty() {
                                println!("(no instances)");
                            } else {
                                println!("\n{}\n", instance_table(&instances));
                            }
                        }
                        Err(e) => {
                            tracing::error!(%e, "Failed to fetch instances");
                            eprintln!("{}", yansi::Paint::new("Error getting instances").red());
                            process::exit(1);
                        }
                    }
                }
            }
        }
    }
}
