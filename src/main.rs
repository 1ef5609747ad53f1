use dotenvy::dotenv;
use tracing::info;

use reserve_master::infra::{app::create_app, setup::init_app, setup::init_tracing};
use std::net::SocketAddr;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let parts = init_app().await?;

    let bind_addr = parts.state.config.bind_addr;

    // Reminder emails run alongside the HTTP server for the life of the process.
    tokio::spawn(parts.scheduler.run());

    let app = create_app(parts.state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!("Backend listening at {}", &listener.local_addr()?);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
