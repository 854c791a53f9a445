use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use crate::error::ServiceError;
use crate::{AppState, app};

pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServiceError> {

    TcpListener::bind(addr)
        .await
        .map_err(|source| ServiceError::Bind { addr, source })

}

/// Serves until SIGINT or SIGTERM.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<(), ServiceError> {

    serve_until(listener, state, shutdown_signal()).await

}

pub async fn serve_until(
    listener: TcpListener,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static
) -> Result<(), ServiceError> {

    let addr = listener.local_addr().map_err(ServiceError::Serve)?;
    tracing::info!(%addr, "listening");

    // the handler reads the peer address from ConnectInfo
    let service = app(state).into_make_service_with_connect_info::<SocketAddr>();

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServiceError::Serve)?;

    tracing::info!("server stopped");
    Ok(())

}

async fn shutdown_signal() {

    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");

}
