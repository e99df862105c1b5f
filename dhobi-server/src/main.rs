use dhobi_server::{Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. dotenv + config + logging
    let config = setup_environment();

    print_banner(&config.shop_name);
    tracing::info!(
        work_dir = %config.work_dir,
        environment = %config.environment,
        "Dhobi server starting..."
    );

    // 2. Open the local store
    let state = ServerState::initialize(&config).await?;

    // 3. Serve until Ctrl-C
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
