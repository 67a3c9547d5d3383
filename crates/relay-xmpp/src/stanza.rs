// presence-relay/relay-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use minidom::Element;
use xmpp_parsers::iq::Iq;
use xmpp_parsers::message::Message;
use xmpp_parsers::presence::Presence;

use crate::ns;

#[derive(Debug)]
pub(crate) enum InboundStanza {
    Iq(Iq),
    Message(Message),
    Presence(Presence),
}

impl InboundStanza {
    /// Returns `None` for elements that are not stanzas (i.e. stream management nonzas).
    pub fn try_from_element(element: Element) -> Result<Option<Self>, xmpp_parsers::Error> {
        if element.is("iq", ns::JABBER_CLIENT) {
            Ok(Some(Self::Iq(Iq::try_from(element)?)))
        } else if element.is("message", ns::JABBER_CLIENT) {
            Ok(Some(Self::Message(Message::try_from(element)?)))
        } else if element.is("presence", ns::JABBER_CLIENT) {
            let element = strip_available_type(element);
            Ok(Some(Self::Presence(Presence::try_from(element)?)))
        } else {
            Ok(None)
        }
    }
}

/// Some clients announce availability with an explicit `type="available"`. RFC 6121 only
/// knows availability as the absence of a type, so the attribute is dropped before parsing.
fn strip_available_type(element: Element) -> Element {
    if element.attr("type") != Some("available") {
        return element;
    }

    let mut builder = Element::builder(element.name(), element.ns());
    for (name, value) in element.attrs().filter(|(name, _)| *name != "type") {
        builder = builder.attr(name, value);
    }
    builder.append_all(element.nodes().cloned()).build()
}
