// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::{bail, Result};
use xmpp_parsers::message::Message;

use crate::app::event_handlers::{MessageEvent, MessageEventType};
use crate::domain::shared::models::ContactId;
use crate::infra::xmpp::event_parser::Context;

pub(super) fn parse_message(ctx: &mut Context, message: Message) -> Result<()> {
    let Some(from) = message.from.clone() else {
        bail!("Missing 'from' attribute in message")
    };

    // Prefers the language-neutral body.
    let body = message
        .get_best_body(vec![])
        .map(|(_, body)| body.0.clone());

    ctx.push_event(MessageEvent {
        from: ContactId::from(from),
        message_type: message.type_,
        r#type: MessageEventType::Received { body },
    });

    Ok(())
}
