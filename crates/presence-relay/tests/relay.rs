// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::{format_err, Result};
use mockall::predicate;
use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use secrecy::Secret;
use tokio::sync::mpsc;
use tokio::time::Instant;
use xmpp_parsers::message::MessageType;

use presence_relay::app::event_handlers::{
    ConnectionEvent, MessageEvent, MessageEventType, PresenceEvent, ServerEvent,
};
use presence_relay::domain::contacts::models::{Contact, PresenceSubscription};
use presence_relay::domain::user_info::models::{Presence, PresenceType};
use presence_relay::test::{MockAppDependencies, TEST_SALT};
use presence_relay::{
    contact_id, user_id, Relay, RelayHandle, INITIAL_PRESENCE_PRIORITY, SHUTDOWN_GRACE_PERIOD,
};
use relay_xmpp::{full, ConnectionError};

fn contact(jid: &str, name: Option<&str>) -> Contact {
    Contact {
        id: user_id!(jid),
        name: name.map(ToString::to_string),
        groups: vec![],
        subscription: PresenceSubscription::Both,
    }
}

fn expect_successful_startup(deps: &mut MockAppDependencies, contacts: Vec<Contact>) {
    deps.connection_service
        .expect_connect()
        .once()
        .with(
            predicate::eq(full!("relay@prose.org/relay")),
            predicate::always(),
        )
        .return_once(|_, _| Box::pin(async { Ok(()) }));
    deps.contact_list_service
        .expect_load_contacts()
        .once()
        .return_once(|| Box::pin(async { Ok(contacts) }));
    deps.connection_service
        .expect_send_initial_presence()
        .once()
        .with(predicate::eq(INITIAL_PRESENCE_PRIORITY))
        .returning(|_| Ok(()));
}

fn start(
    deps: MockAppDependencies,
    events: mpsc::UnboundedReceiver<ServerEvent>,
) -> (
    tokio::task::JoinHandle<Result<(), ConnectionError>>,
    RelayHandle,
) {
    let (relay, handle) = Relay::new(
        deps.into_deps(),
        Secret::new(TEST_SALT.to_string()),
        events,
    );

    let task = tokio::spawn(async move {
        let jid = full!("relay@prose.org/relay");
        relay.run(&jid, Secret::new("secret".to_string())).await
    });

    (task, handle)
}

fn available(from: &str) -> ServerEvent {
    ServerEvent::Presence(PresenceEvent {
        from: contact_id!(from),
        r#type: PresenceType::Available,
        presence: Presence::default(),
    })
}

fn disconnected() -> ServerEvent {
    ServerEvent::Connection(ConnectionEvent::Disconnected { error: None })
}

#[tokio::test]
async fn test_relays_messages_to_loaded_contacts() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    expect_successful_startup(
        &mut deps,
        vec![
            contact("a@prose.org", Some("Alice")),
            contact("b@prose.org", None),
        ],
    );

    let sent = Arc::new(Mutex::new(vec![]));
    let handler_sent = sent.clone();
    deps.messaging_service
        .expect_send_message()
        .returning(move |to, body| {
            handler_sent.lock().push((to.to_string(), body));
            Ok(())
        });

    let (tx, rx) = mpsc::unbounded_channel();
    let (task, _handle) = start(deps, rx);

    tx.send(available("a@prose.org/phone"))?;
    tx.send(available("b@prose.org/laptop"))?;
    tx.send(ServerEvent::Message(MessageEvent {
        from: contact_id!("a@prose.org/phone"),
        message_type: MessageType::Chat,
        r#type: MessageEventType::Received {
            body: Some("Hello".to_string()),
        },
    }))?;
    tx.send(disconnected())?;

    assert_eq!(task.await?, Ok(()));
    assert_eq!(
        *sent.lock(),
        vec![("b@prose.org".to_string(), "[Alice] Hello".to_string())]
    );

    Ok(())
}

#[tokio::test]
async fn test_events_after_disconnect_are_not_processed() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    expect_successful_startup(&mut deps, vec![contact("b@prose.org", None)]);
    deps.messaging_service.expect_send_message().never();

    let (tx, rx) = mpsc::unbounded_channel();
    let (task, _handle) = start(deps, rx);

    tx.send(available("b@prose.org/laptop"))?;
    tx.send(disconnected())?;
    tx.send(ServerEvent::Message(MessageEvent {
        from: contact_id!("a@prose.org/phone"),
        message_type: MessageType::Chat,
        r#type: MessageEventType::Received {
            body: Some("Too late".to_string()),
        },
    }))?;

    assert_eq!(task.await?, Ok(()));

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_stop_gives_up_after_grace_period() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    expect_successful_startup(&mut deps, vec![]);
    deps.connection_service
        .expect_disconnect()
        .once()
        .return_const(());

    let (_tx, rx) = mpsc::unbounded_channel();
    let (task, handle) = start(deps, rx);

    let started_at = Instant::now();
    handle.stop();
    // Stopping twice is harmless.
    handle.stop();

    assert_eq!(task.await?, Ok(()));
    assert!(started_at.elapsed() >= SHUTDOWN_GRACE_PERIOD);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_stop_returns_once_disconnected() -> Result<()> {
    let (tx, rx) = mpsc::unbounded_channel();

    let mut deps = MockAppDependencies::default();
    expect_successful_startup(&mut deps, vec![]);

    let disconnect_tx = tx.clone();
    deps.connection_service
        .expect_disconnect()
        .once()
        .returning(move || {
            _ = disconnect_tx.send(disconnected());
        });

    let (task, handle) = start(deps, rx);

    let started_at = Instant::now();
    handle.stop();

    assert_eq!(task.await?, Ok(()));
    assert!(started_at.elapsed() < SHUTDOWN_GRACE_PERIOD);

    Ok(())
}

#[tokio::test]
async fn test_connection_failure_is_returned() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.connection_service
        .expect_connect()
        .once()
        .return_once(|_, _| Box::pin(async { Err(ConnectionError::InvalidCredentials) }));
    deps.contact_list_service.expect_load_contacts().never();
    deps.connection_service.expect_send_initial_presence().never();

    let (_tx, rx) = mpsc::unbounded_channel();
    let (task, _handle) = start(deps, rx);

    assert_eq!(task.await?, Err(ConnectionError::InvalidCredentials));

    Ok(())
}

#[tokio::test]
async fn test_startup_failures_after_connecting_are_tolerated() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.connection_service
        .expect_connect()
        .once()
        .return_once(|_, _| Box::pin(async { Ok(()) }));
    deps.contact_list_service
        .expect_load_contacts()
        .once()
        .return_once(|| Box::pin(async { Err(format_err!("Request timed out")) }));
    deps.connection_service
        .expect_send_initial_presence()
        .once()
        .returning(|_| Err(format_err!("Client is not connected.")));

    let (tx, rx) = mpsc::unbounded_channel();
    let (task, _handle) = start(deps, rx);

    tx.send(available("a@prose.org/phone"))?;
    drop(tx);

    assert_eq!(task.await?, Ok(()));

    Ok(())
}
