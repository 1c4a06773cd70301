use std::io;

use clap::Parser;
use color_eyre::eyre::Result;

use gh_activity::app::{self, AppError};
use gh_activity::client::HttpEventClient;
use gh_activity::config::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to a file only; stdout carries the activity lines.
    if let Some(ref log_file) = cli.log_file {
        let file = app::open_log_file(log_file).unwrap_or_else(|e| fail(&e));
        tracing_subscriber::fmt()
            .with_writer(file)
            .with_ansi(false)
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .init();
    }

    let client = HttpEventClient::new(&cli.api_url, cli.timeout())
        .unwrap_or_else(|e| fail(&AppError::from(e)));

    let mut stdout = io::stdout().lock();
    if let Err(e) = app::run(
        &client,
        cli.username.as_deref(),
        cli.render_options(),
        &mut stdout,
    )
    .await
    {
        tracing::error!("{}", e);
        fail(&e);
    }

    Ok(())
}

fn fail(err: &AppError) -> ! {
    eprintln!("{}", app::error_line(err));
    std::process::exit(1);
}
