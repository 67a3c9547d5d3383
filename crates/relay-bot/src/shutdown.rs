// presence-relay/relay-bot
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::future::{pending, Future};
use std::io;

use tracing::{error, info};

/// Resolves on Ctrl-C. Never resolves if the signal handler could not be installed, in
/// which case the relay keeps running until its connection ends.
pub async fn signal() {
    wait_for(tokio::signal::ctrl_c()).await
}

async fn wait_for(signal: impl Future<Output = io::Result<()>>) {
    match signal.await {
        Ok(()) => info!("Received shutdown signal."),
        Err(err) => {
            error!("Failed to listen for shutdown signal. {}", err);
            pending::<()>().await
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::timeout;

    use super::*;

    #[tokio::test]
    async fn test_resolves_on_signal() {
        let result = timeout(Duration::from_secs(1), wait_for(async { Ok(()) })).await;
        assert!(result.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failing_signal_handler_does_not_request_shutdown() {
        let failing = async { Err(io::Error::new(io::ErrorKind::Other, "no signal support")) };
        let result = timeout(Duration::from_secs(3600), wait_for(failing)).await;
        assert!(result.is_err());
    }
}
