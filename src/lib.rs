pub mod error;
pub mod infra;
pub mod shell;

use error::AppError;
use infra::create_database_connection;
use std::io::Write;

fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();
}

/// Check the database configuration, then write the home page to `out`.
pub fn serve_home_page<W: Write>(out: &mut W) -> Result<(), AppError> {
    let conn = create_database_connection()?;
    log::info!("DB location: {:?}", conn.location());
    conn.ping()?;
    conn.close()?;

    out.write_all(shell::render_home_page().as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Write `err` as a single JSON line (`code`, `message`, `details`).
pub fn report_error<W: Write>(err: &AppError, out: &mut W) -> std::io::Result<()> {
    serde_json::to_writer(&mut *out, &err.to_serde())?;
    writeln!(out)
}

/// Load `.env`, check the database configuration and print the home page.
pub fn run() -> Result<(), AppError> {
    let dotenv = dotenvy::dotenv();
    init_logging();
    match dotenv {
        Ok(path) => log::debug!("loaded {:?}", path),
        Err(e) if e.not_found() => {}
        Err(e) => log::warn!("ignoring .env: {}", e),
    }

    serve_home_page(&mut std::io::stdout().lock()).map_err(|e| {
        log::error!("startup failed: {}", e);
        e
    })
}
