// presence-relay/relay-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use jid::Jid;
use minidom::Element;
use tracing::{debug, error, warn};
use xmpp_parsers::chatstates::ChatState;
use xmpp_parsers::iq::{Iq, IqType};
use xmpp_parsers::message::Message;
use xmpp_parsers::roster::Roster;

use crate::client::client::ClientInner;
use crate::client::pending_requests::RequestResult;
use crate::stanza::InboundStanza;
use crate::{ns, Event, RequestError};

impl ClientInner {
    pub(super) fn handle_stanza(&self, stanza: Element) {
        #[cfg(feature = "trace-stanzas")]
        tracing::trace!(direction = "IN", "{}", String::from(&stanza));

        let stanza = match InboundStanza::try_from_element(stanza) {
            Ok(Some(stanza)) => stanza,
            Ok(None) => return,
            Err(err) => {
                error!("Failed to parse stanza. {}", err);
                return;
            }
        };

        let result = match stanza {
            InboundStanza::Iq(iq) => self.handle_iq(iq),
            InboundStanza::Message(message) => {
                self.handle_message(message);
                Ok(())
            }
            InboundStanza::Presence(presence) => {
                self.emit(Event::Presence(presence));
                Ok(())
            }
        };

        if let Err(err) = result {
            error!("Failed to handle stanza. {}", err)
        }
    }

    fn handle_iq(&self, iq: Iq) -> Result<()> {
        match iq.payload {
            IqType::Result(payload) => {
                self.resolve_request(&iq.id, Ok(payload));
                Ok(())
            }
            IqType::Error(err) => {
                self.resolve_request(&iq.id, Err(RequestError::XMPP { err }));
                Ok(())
            }
            IqType::Get(payload) if payload.is("ping", ns::PING) => self.send_stanza(Iq {
                from: None,
                to: iq.from,
                id: iq.id,
                payload: IqType::Result(None),
            }),
            IqType::Set(payload) if payload.is("query", ns::ROSTER) => {
                self.handle_roster_push(iq.from, iq.id, payload)
            }
            IqType::Get(payload) | IqType::Set(payload) => {
                debug!("Ignoring IQ {} ({}).", payload.name(), payload.ns());
                Ok(())
            }
        }
    }

    fn resolve_request(&self, id: &str, result: RequestResult) {
        if !self.pending_requests.lock().resolve(id, result) {
            debug!("Ignoring response to unknown request '{}'.", id);
        }
    }

    /// https://xmpp.org/rfcs/rfc6121.html#roster-syntax-actions-push
    fn handle_roster_push(&self, from: Option<Jid>, id: String, payload: Element) -> Result<()> {
        // Roster pushes must originate from our own account.
        if let Some(from) = &from {
            if from.to_bare() != self.bare_jid()? {
                warn!("Ignoring roster push from foreign entity {}.", from);
                return Ok(());
            }
        }

        let roster = Roster::try_from(payload)?;

        self.send_stanza(Iq {
            from: None,
            to: from,
            id,
            payload: IqType::Result(None),
        })?;

        for item in roster.items {
            self.emit(Event::RosterPush(item));
        }

        Ok(())
    }

    fn handle_message(&self, message: Message) {
        let chat_state = message
            .payloads
            .iter()
            .find(|payload| payload.has_ns(ns::CHATSTATES))
            .and_then(|payload| ChatState::try_from(payload.clone()).ok());

        if let (Some(from), Some(chat_state)) = (message.from.clone(), chat_state.clone()) {
            self.emit(Event::ChatStateChanged {
                from,
                chat_state,
                message_type: message.type_.clone(),
            });
        }

        // A message carrying nothing but a chat state was fully reported above.
        let only_chat_state = chat_state.is_some() && message.payloads.len() == 1;
        if message.bodies.is_empty()
            && message.subjects.is_empty()
            && (message.payloads.is_empty() || only_chat_state)
        {
            return;
        }

        self.emit(Event::Message(message));
    }
}
