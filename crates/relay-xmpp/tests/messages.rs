// presence-relay/relay-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::str::FromStr;

use anyhow::Result;
use minidom::Element;
use pretty_assertions::assert_eq;
use xmpp_parsers::chatstates::ChatState;
use xmpp_parsers::message::{Message, MessageType};

use relay_xmpp::test::ConnectedClient;
use relay_xmpp::{bare, jid, Event};

fn body(message: &Message) -> Option<&str> {
    message.get_best_body(vec![]).map(|(_, body)| body.0.as_str())
}

#[tokio::test]
async fn test_sends_message_event() -> Result<()> {
    let client = ConnectedClient::connect().await?;

    client.connection.receive_stanza(Element::from_str(
        r#"<message xmlns="jabber:client" from="sender@prose.org/phone" type="chat">
          <body>Hello World</body>
        </message>"#,
    )?);

    let events = client.events();
    assert_eq!(events.len(), 1);

    let Event::Message(message) = &events[0] else {
        panic!("Expected message event, got {:?}", events[0]);
    };
    assert_eq!(body(message), Some("Hello World"));
    assert_eq!(message.from, Some(jid!("sender@prose.org/phone")));

    Ok(())
}

#[tokio::test]
async fn test_message_with_body_and_chat_state_sends_both_events() -> Result<()> {
    let client = ConnectedClient::connect().await?;

    client.connection.receive_stanza(Element::from_str(
        r#"<message xmlns="jabber:client" from="sender@prose.org/phone" type="chat">
          <body>Hi</body>
          <active xmlns="http://jabber.org/protocol/chatstates"/>
        </message>"#,
    )?);

    let events = client.events();
    assert_eq!(events.len(), 2);
    assert!(matches!(
        &events[0],
        Event::ChatStateChanged {
            chat_state: ChatState::Active,
            message_type: MessageType::Chat,
            ..
        }
    ));
    assert!(matches!(&events[1], Event::Message(_)));

    Ok(())
}

#[tokio::test]
async fn test_chat_state_only_message_sends_chat_state_event() -> Result<()> {
    let client = ConnectedClient::connect().await?;

    client.connection.receive_stanza(Element::from_str(
        r#"<message xmlns="jabber:client" from="sender@prose.org/phone" type="chat">
          <composing xmlns="http://jabber.org/protocol/chatstates"/>
        </message>"#,
    )?);

    let events = client.events();
    assert_eq!(events.len(), 1);

    let Event::ChatStateChanged {
        from, chat_state, ..
    } = &events[0]
    else {
        panic!("Expected chat state event, got {:?}", events[0]);
    };
    assert_eq!(from, &jid!("sender@prose.org/phone"));
    assert_eq!(chat_state, &ChatState::Composing);

    Ok(())
}

#[tokio::test]
async fn test_messages_are_delivered_in_order() -> Result<()> {
    let client = ConnectedClient::connect().await?;

    for idx in 0..20 {
        client.connection.receive_stanza(Element::from_str(&format!(
            r#"<message xmlns="jabber:client" from="sender@prose.org/phone"><body>{}</body></message>"#,
            idx
        ))?);
    }

    let bodies = client
        .events()
        .iter()
        .filter_map(|event| match event {
            Event::Message(message) => body(message).map(ToString::to_string),
            _ => None,
        })
        .collect::<Vec<_>>();

    assert_eq!(
        bodies,
        (0..20).map(|idx| idx.to_string()).collect::<Vec<_>>()
    );

    Ok(())
}

#[tokio::test]
async fn test_send_message() -> Result<()> {
    let client = ConnectedClient::connect().await?;

    client
        .client
        .send_message(bare!("friend@prose.org"), "pong")?;

    let sent = client.connection.sent_stanzas();
    assert_eq!(sent.len(), 1);

    let message = Message::try_from(sent[0].clone())?;
    assert_eq!(message.id.as_deref(), Some("id-1"));
    assert_eq!(message.type_, MessageType::Chat);
    assert_eq!(message.to, Some(jid!("friend@prose.org")));
    assert_eq!(message.from, Some(jid!("relay@prose.org/test")));
    assert_eq!(body(&message), Some("pong"));

    Ok(())
}
