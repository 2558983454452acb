//! SEI Dashboard
//!
//! Live terminal rendition of the dashboard: trending topics refreshed on
//! the polling period, plus the latest block and the posts list.

use std::sync::Arc;

use sei_dashboard::dashboard::Dashboard;
use sei_dashboard::render;
use sei_dashboard::{
    Config, DashboardEvent, DashboardRuntime, ErrorBoundary, HttpClient, PollOutcome, Rendered,
    Toast,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_default();
    sei_dashboard::logging::init(&config.logging);

    tracing::info!("SEI Dashboard v{}", env!("CARGO_PKG_VERSION"));

    let api = Arc::new(HttpClient::new(config.api.clone())?);
    tracing::info!("Backend: {}", api.config().base_url);
    let (runtime, mut events) = DashboardRuntime::mount(api, config.polling.period());

    let mut boundary = ErrorBoundary::new();
    draw(&mut boundary, &runtime.snapshot().await);

    loop {
        tokio::select! {
            event = events.recv() => {
                let Some(event) = event else { break };
                match event {
                    DashboardEvent::TickSkipped => continue,
                    DashboardEvent::Topics(PollOutcome::Failed { toast, .. }) => report(&toast),
                    _ => {}
                }
                // Every fresh event is a retry after a failed draw
                boundary.reset();
                draw(&mut boundary, &runtime.snapshot().await);
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutting down...");
                break;
            }
        }
    }

    runtime.unmount().await;
    Ok(())
}

fn draw(boundary: &mut ErrorBoundary, dashboard: &Dashboard) {
    // Clear screen and home the cursor
    print!("\x1b[2J\x1b[H");

    match boundary.render(|| render::dashboard_screen(dashboard)) {
        Rendered::Content(screen) => print!("{}", screen),
        Rendered::Fallback(fallback) => {
            println!("{}", fallback.message);
            println!("({} on the next update)", fallback.reset_label);
        }
    }
}

fn report(toast: &Toast) {
    if toast.is_error() {
        tracing::error!("{}", toast);
    } else {
        tracing::info!("{}", toast);
    }
    eprintln!("[{}]", toast);
}
