//! Graceful shutdown signal handling

use std::io;

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;
use tracing::info;

#[derive(Debug, Error)]
pub(crate) enum ShutdownError {
    #[error("failed to install Ctrl+C handler: {0}")]
    CtrlC(#[source] io::Error),

    #[cfg(unix)]
    #[error("failed to install SIGTERM handler: {0}")]
    SigTerm(#[source] io::Error),
}

/// Wait for an interrupt or terminate signal, then stop the server
/// gracefully.
pub(crate) async fn listen(handle: ServerHandle) -> Result<(), ShutdownError> {
    let ctrl_c = async { signal::ctrl_c().await.map_err(ShutdownError::CtrlC) };

    #[cfg(unix)]
    {
        let terminate = async {
            signal::unix::signal(signal::unix::SignalKind::terminate())
                .map_err(ShutdownError::SigTerm)?
                .recv()
                .await;

            Ok::<(), ShutdownError>(())
        };

        tokio::select! {
            result = ctrl_c => result?,
            result = terminate => result?,
        }
    }

    #[cfg(not(unix))]
    ctrl_c.await?;

    info!("shutdown signal received");

    handle.stop_graceful(None);

    Ok(())
}
