use std::io::Write;

use thiserror::Error;

use crate::client::{ClientError, EventSource};
use crate::domain::Event;
use crate::format::PLACEHOLDER;

pub const NO_ACTIVITY: &str = "no recent activity";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("please provide username")]
    MissingUsername,
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
    #[error("failed to create log file {path}: {source}")]
    LogFile {
        path: String,
        source: std::io::Error,
    },
}

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub timestamps: bool,
}

/// Fetches `username`'s events and writes one line per event to `out`.
/// Returns how many events were written. Nothing is written on error.
pub async fn run<W: Write>(
    source: &dyn EventSource,
    username: Option<&str>,
    options: RenderOptions,
    out: &mut W,
) -> AppResult<usize> {
    let username = username
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or(AppError::MissingUsername)?;

    let events = source.list_user_events(username).await?;

    if events.is_empty() {
        writeln!(out, "{}", NO_ACTIVITY)?;
        return Ok(0);
    }

    for event in &events {
        writeln!(out, "{}", render_line(event, options))?;
    }
    out.flush()?;
    Ok(events.len())
}

/// The single line every failure is reported as.
pub fn error_line(err: &AppError) -> String {
    format!("ERROR: {}", err)
}

pub fn open_log_file(path: &str) -> AppResult<std::fs::File> {
    std::fs::File::create(path).map_err(|source| AppError::LogFile {
        path: path.to_string(),
        source,
    })
}

pub fn render_line(event: &Event, options: RenderOptions) -> String {
    let line = event.to_string();
    if !options.timestamps {
        return line;
    }
    match event.created_at {
        Some(ts) => format!("{} {}", ts.format("%Y-%m-%d %H:%M:%S"), line),
        None => format!("{} {}", PLACEHOLDER, line),
    }
}
