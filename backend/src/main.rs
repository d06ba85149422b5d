use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hrdesk_backend::{config::Config, routes::app_router, state::AppState};

fn mask_secret(s: &str) -> String {
    if s.is_empty() {
        return "<empty>".into();
    }
    let prefix = s.chars().take(2).collect::<String>();
    format!("{}*** (len={})", prefix, s.len())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hrdesk_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!(
        bind_addr = %config.bind_addr,
        employees_script = %config.scripts.employees.host_str().unwrap_or_default(),
        upstream_timeout_secs = config.upstream_timeout.as_secs(),
        time_zone = %config.time_zone,
        allowed_email_domain = %config.allowed_email_domain,
        page_size = config.page_size,
        smtp_host = %config.smtp.host,
        smtp_password = %mask_secret(&config.smtp.password),
        smtp_skip_send = config.smtp.skip_send,
        "Loaded configuration from environment/.env"
    );

    let addr = config.bind_addr;
    let app = app_router(AppState::from_config(config)?);

    tracing::info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
