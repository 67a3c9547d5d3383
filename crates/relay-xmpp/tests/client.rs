// presence-relay/relay-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::str::FromStr;
use std::time::Duration;

use anyhow::Result;
use minidom::Element;
use pretty_assertions::assert_eq;
use xmpp_parsers::iq::{Iq, IqType};
use xmpp_parsers::presence::{Presence, Show, Type};

use relay_xmpp::test::ConnectedClient;
use relay_xmpp::{jid, Event, RequestError};

#[tokio::test]
async fn test_answers_ping() -> Result<()> {
    let client = ConnectedClient::connect().await?;

    client.connection.receive_stanza(Element::from_str(
        r#"<iq xmlns="jabber:client" type="get" id="ping-1" from="prose.org">
          <ping xmlns="urn:xmpp:ping"/>
        </iq>"#,
    )?);

    let sent = client.connection.sent_stanzas();
    assert_eq!(sent.len(), 1);

    let response = Iq::try_from(sent[0].clone())?;
    assert_eq!(response.id, "ping-1");
    assert_eq!(response.to, Some(jid!("prose.org")));
    assert!(matches!(response.payload, IqType::Result(None)));
    assert!(client.events().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_forwards_presence() -> Result<()> {
    let client = ConnectedClient::connect().await?;

    client.connection.receive_stanza(Element::from_str(
        r#"<presence xmlns="jabber:client" from="a@prose.org/phone"><show>away</show></presence>"#,
    )?);

    let events = client.events();
    assert_eq!(events.len(), 1);

    let Event::Presence(presence) = &events[0] else {
        panic!("Expected presence event, got {:?}", events[0]);
    };
    assert_eq!(presence.from, Some(jid!("a@prose.org/phone")));
    assert_eq!(presence.show, Some(Show::Away));

    Ok(())
}

#[tokio::test]
async fn test_forwards_presence_with_explicit_available_type() -> Result<()> {
    let client = ConnectedClient::connect().await?;

    client.connection.receive_stanza(Element::from_str(
        r#"<presence xmlns="jabber:client" from="b@prose.org/laptop" type="available"/>"#,
    )?);

    let events = client.events();
    assert_eq!(events.len(), 1);

    let Event::Presence(presence) = &events[0] else {
        panic!("Expected presence event, got {:?}", events[0]);
    };
    assert_eq!(presence.from, Some(jid!("b@prose.org/laptop")));
    assert_eq!(presence.type_, Type::None);

    Ok(())
}

#[tokio::test]
async fn test_drops_presence_with_unknown_type() -> Result<()> {
    let client = ConnectedClient::connect().await?;

    client.connection.receive_stanza(Element::from_str(
        r#"<presence xmlns="jabber:client" from="b@prose.org/laptop" type="online"/>"#,
    )?);

    assert!(client.events().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_send_presence() -> Result<()> {
    let client = ConnectedClient::connect().await?;

    client.client.send_presence(30)?;

    let sent = client.connection.sent_stanzas();
    assert_eq!(sent.len(), 1);

    let presence = Presence::try_from(sent[0].clone())?;
    assert_eq!(presence.type_, Type::None);
    assert_eq!(presence.to, None);
    assert_eq!(presence.show, None);
    assert_eq!(presence.priority, 30);

    Ok(())
}

#[tokio::test]
async fn test_send_fails_after_disconnect() -> Result<()> {
    let client = ConnectedClient::connect().await?;

    client.client.disconnect();

    assert!(client.client.send_presence(30).is_err());
    assert!(client.connection.sent_stanzas().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_disconnect_fails_pending_requests() -> Result<()> {
    let client = ConnectedClient::connect().await?;

    let roster_client = client.client.clone();
    let request = tokio::spawn(async move { roster_client.load_roster().await });

    // Wait until the request went out.
    while client.connection.sent_stanzas().is_empty() {
        tokio::task::yield_now().await;
    }

    client.connection.simulate_disconnect(None);

    let err = request.await?.expect_err("Expected request to fail");
    assert!(matches!(
        err.downcast_ref::<RequestError>(),
        Some(RequestError::Disconnected)
    ));

    let events = client.events();
    assert_eq!(events.len(), 1);
    assert!(matches!(
        &events[0],
        Event::Disconnected { error: None }
    ));

    Ok(())
}

#[tokio::test]
async fn test_disconnect_ends_stream() -> Result<()> {
    let client = ConnectedClient::connect().await?;

    client.client.disconnect();
    assert!(client.connection.disconnect_requested());

    // The stream end is delivered asynchronously.
    while client.events().is_empty() {
        tokio::task::yield_now().await;
    }

    assert!(matches!(
        client.events().first(),
        Some(Event::Disconnected { error: None })
    ));

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_requests_time_out() -> Result<()> {
    let client = ConnectedClient::connect().await?;

    let roster_client = client.client.clone();
    let request = tokio::spawn(async move { roster_client.load_roster().await });

    while client.connection.sent_stanzas().is_empty() {
        tokio::task::yield_now().await;
    }

    tokio::time::advance(Duration::from_secs(10)).await;
    client.connection.fire_timeout_timer();
    tokio::task::yield_now().await;
    assert!(!request.is_finished());

    tokio::time::advance(Duration::from_secs(5)).await;
    client.connection.fire_timeout_timer();

    let err = request.await?.expect_err("Expected request to time out");
    assert!(matches!(
        err.downcast_ref::<RequestError>(),
        Some(RequestError::TimedOut)
    ));

    Ok(())
}
