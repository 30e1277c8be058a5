//! Smite Proxy - service entry point.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

use smite_proxy::{
    api::SmiteApi,
    cli::Args,
    config::{validate_config, Config},
    error::{exit_codes, Result},
    output::{print_banner, print_config_summary, print_error, print_info, print_warning},
    server::{serve, shutdown_signal},
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    // Load configuration
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        print_warning(&format!(
            "Configuration file not found: {}",
            config_path.display()
        ));
        print_info("Using default configuration with CLI arguments");
        Config::default()
    };

    args.merge_into_config(&mut config);
    validate_config(&config)?;

    let listen_addr = config.listen_addr()?;
    print_config_summary(
        &listen_addr.to_string(),
        &config.upstream.base_url,
        &config.credentials.dev_id,
        config.upstream.create_session,
    );

    let api = Arc::new(SmiteApi::with_base_url(
        config.credentials(),
        &config.upstream.base_url,
    )?);

    let listener = TcpListener::bind(listen_addr).await?;
    tracing::info!("listening on *:{}", listen_addr.port());

    // A failed session is logged and the service keeps running without one.
    if config.upstream.create_session {
        if let Err(e) = api.create_session().await {
            tracing::error!(error = %e, "Session creation failed");
        }
    }

    serve(listener, api, shutdown_signal()).await
}
