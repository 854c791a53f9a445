use simple_time_service::config::{self, Config};
use simple_time_service::{AppState, logger, server, serverless};

#[tokio::main]
async fn main() -> anyhow::Result<()> {

    dotenvy::dotenv().ok();

    let in_lambda = config::serverless_runtime_present();
    logger::init(!in_lambda);

    let state = AppState::default();

    if in_lambda {
        serverless::run(state).await?;
        return Ok(());
    }

    let config = Config::from_env()?;
    tracing::debug!(?config, "configuration loaded");

    let listener = server::bind(config.bind_addr).await?;
    server::serve(listener, state).await?;

    Ok(())

}
