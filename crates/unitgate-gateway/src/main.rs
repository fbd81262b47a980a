//! unitgate gateway binary.
//!
//! Boot order: logging, env config snapshot, backend selection, router,
//! then serve with peer addresses attached so the admission layer sees the
//! real connection source.

use std::net::SocketAddr;

use tracing_subscriber::{fmt, EnvFilter};

use unitgate_gateway::{app_state::AppState, config, controller, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_from_env().expect("config load failed");

    let mut modes = Vec::new();
    if cfg.security.has_api_key() {
        modes.push("API key".to_string());
    }
    if cfg.security.has_host_restriction() {
        modes.push(format!(
            "host allowlist ({} hosts)",
            cfg.security.allowed_hosts.len()
        ));
    }
    let security = if modes.is_empty() {
        "NONE (reverse proxy mode)".to_string()
    } else {
        modes.join(" + ")
    };

    let listen = SocketAddr::from(([0, 0, 0, 0], cfg.port));
    tracing::info!(%listen, services = cfg.services.len(), %security, "unitgate starting");
    for record in &cfg.services {
        tracing::info!(unit = %record.service, display = %record.display_name, "monitoring");
    }

    let backend = controller::select_controller().await;
    let state = AppState::new(cfg, backend);
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("server failed");
}
