pub mod app;
pub mod assets;
mod config;
pub mod error;
pub mod gesture;
pub mod logging;
pub mod motion;
pub mod state;
pub mod theme;
pub mod ui;
pub use error::{AppError, AppResult};

/// Entrypoint used by higher-level integrations and CLI bindings.
pub fn run() -> AppResult<()> {
    logging::init();
    tracing::info!("starting Centrix");

    let mut app = app::App::new();
    app.start()?;

    tracing::info!("shutdown with stage={:?}", app.machine().stage());
    Ok(())
}
