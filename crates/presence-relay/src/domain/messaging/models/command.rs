// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

const NICK_PREFIX: &str = "-nick ";

/// What a contact asks the relay to do with a message body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    /// `ping`, answered with `pong`.
    Ping,
    /// `-nick <name>`, changes the sender's display name.
    ChangeNickname(&'a str),
    /// Anything else is relayed to all online contacts.
    Broadcast(&'a str),
}

impl<'a> Command<'a> {
    /// Returns `None` for empty bodies.
    pub fn parse(body: &'a str) -> Option<Self> {
        if body.is_empty() {
            return None;
        }

        if body == "ping" {
            return Some(Command::Ping);
        }

        // Only the whitespace separating the name from the prefix is dropped.
        if let Some(nickname) = body.strip_prefix(NICK_PREFIX).map(str::trim_start) {
            if !nickname.trim_end().is_empty() {
                return Some(Command::ChangeNickname(nickname));
            }
        }

        Some(Command::Broadcast(body))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_ping() {
        assert_eq!(Command::parse("ping"), Some(Command::Ping));
        assert_eq!(Command::parse("ping "), Some(Command::Broadcast("ping ")));
        assert_eq!(Command::parse("Ping"), Some(Command::Broadcast("Ping")));
    }

    #[test]
    fn test_parse_nickname() {
        assert_eq!(
            Command::parse("-nick Charlie"),
            Some(Command::ChangeNickname("Charlie"))
        );
        assert_eq!(
            Command::parse("-nick   Charlie Brown"),
            Some(Command::ChangeNickname("Charlie Brown"))
        );
    }

    #[test]
    fn test_nickname_keeps_trailing_whitespace() {
        assert_eq!(
            Command::parse("-nick  Charlie "),
            Some(Command::ChangeNickname("Charlie "))
        );
        assert_eq!(
            Command::parse("-nick Charlie\t"),
            Some(Command::ChangeNickname("Charlie\t"))
        );
    }

    #[test]
    fn test_empty_nickname_falls_through_to_broadcast() {
        assert_eq!(Command::parse("-nick "), Some(Command::Broadcast("-nick ")));
        assert_eq!(Command::parse("-nick   "), Some(Command::Broadcast("-nick   ")));
        assert_eq!(Command::parse("-nick"), Some(Command::Broadcast("-nick")));
        assert_eq!(
            Command::parse("-nickname"),
            Some(Command::Broadcast("-nickname"))
        );
    }

    #[test]
    fn test_parse_empty_body() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("  "), Some(Command::Broadcast("  ")));
    }
}
