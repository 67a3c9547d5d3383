// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;
use std::time::Duration;

use jid::FullJid;
use secrecy::Secret;
use tokio::sync::{mpsc, watch};
use tokio::time::{self, Instant};
use tracing::{info, warn};

use relay_xmpp::ConnectionError;

use crate::app::deps::AppDependencies;
use crate::app::event_handlers::{ServerEvent, ServerEventHandlerQueue};
use crate::domain::session::SessionState;
use crate::relay_builder::RelayBuilder;

/// Priority of our own presence. Chosen high so that messages are still delivered to the
/// relay while someone else is logged into the same account.
pub const INITIAL_PRESENCE_PRIORITY: i8 = 30;
/// How long the event loop keeps running after a stop request before giving up on a
/// clean disconnect.
pub const SHUTDOWN_GRACE_PERIOD: Duration = Duration::from_secs(2);

/// A relay session. Owns the contact directory and the presence store and processes
/// inbound events one at a time on a single task.
pub struct Relay {
    deps: AppDependencies,
    state: SessionState,
    handlers: ServerEventHandlerQueue,
    events: mpsc::UnboundedReceiver<ServerEvent>,
    shutdown: watch::Receiver<bool>,
}

/// Requests a running relay to stop.
#[derive(Clone)]
pub struct RelayHandle {
    shutdown: Arc<watch::Sender<bool>>,
}

impl RelayHandle {
    /// Makes the relay disconnect and return from `run` once the connection was torn
    /// down or the grace period elapsed.
    pub fn stop(&self) {
        self.shutdown.send_replace(true);
    }
}

impl Relay {
    pub fn builder(salt: Secret<String>) -> RelayBuilder {
        RelayBuilder::new(salt)
    }

    pub fn new(
        deps: AppDependencies,
        salt: Secret<String>,
        events: mpsc::UnboundedReceiver<ServerEvent>,
    ) -> (Relay, RelayHandle) {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let relay = Relay {
            handlers: ServerEventHandlerQueue::from(&deps),
            deps,
            state: SessionState::new(salt),
            events,
            shutdown: shutdown_rx,
        };

        let handle = RelayHandle {
            shutdown: Arc::new(shutdown_tx),
        };

        (relay, handle)
    }

    /// Connects, loads our contacts, announces our presence and processes events until
    /// the connection is lost or the relay was stopped.
    pub async fn run(
        mut self,
        jid: &FullJid,
        password: Secret<String>,
    ) -> Result<(), ConnectionError> {
        info!("Connecting as {}…", jid);
        self.deps.connection_service.connect(jid, password).await?;

        self.load_contacts().await;

        if let Err(err) = self
            .deps
            .connection_service
            .send_initial_presence(INITIAL_PRESENCE_PRIORITY)
        {
            warn!("Failed to send initial presence. {}", err);
        }

        self.run_event_loop().await;
        info!("Relay stopped.");

        Ok(())
    }
}

impl Relay {
    async fn load_contacts(&mut self) {
        match self.deps.contact_list_service.load_contacts().await {
            Ok(contacts) => {
                info!("Loaded {} contacts.", contacts.len());
                for contact in contacts {
                    self.state.contacts.apply(contact);
                }
            }
            Err(err) => warn!("Failed to load contacts. {}", err),
        }
    }

    async fn run_event_loop(&mut self) {
        let mut deadline: Option<Instant> = None;
        let mut accepts_stop_requests = true;

        loop {
            tokio::select! {
                event = self.events.recv() => {
                    let Some(event) = event else {
                        info!("Event stream ended.");
                        break;
                    };

                    let is_terminal = event.is_terminal();
                    self.handlers.handle_event(&mut self.state, event);

                    if is_terminal {
                        break;
                    }
                }
                result = self.shutdown.changed(), if accepts_stop_requests => {
                    // Our handle was dropped, nobody can stop us anymore.
                    if result.is_err() {
                        accepts_stop_requests = false;
                        continue;
                    }
                    if !*self.shutdown.borrow() {
                        continue;
                    }

                    info!("Stopping relay…");
                    accepts_stop_requests = false;
                    self.deps.connection_service.disconnect();
                    deadline = Some(Instant::now() + SHUTDOWN_GRACE_PERIOD);
                }
                _ = sleep_until(deadline) => {
                    warn!("Connection did not close within the grace period.");
                    break;
                }
            }
        }
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
