// presence-relay/relay-bot
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::env;
use std::str::FromStr;

use jid::{BareJid, FullJid, Jid};
use secrecy::Secret;

const DEFAULT_RESOURCE: &str = "relay";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing environment variable {key}")]
    Missing { key: &'static str },
    #[error("Invalid value for {key}: {msg}")]
    Invalid { key: &'static str, msg: String },
}

pub struct Config {
    pub jid: FullJid,
    pub password: Secret<String>,
    pub salt: Secret<String>,
    pub log_level: String,
    pub trace: bool,
}

impl Config {
    /// Reads the configuration from the environment, after loading `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::Missing { key })
        };

        let jid = parse_jid(&required("RELAY_JID")?)?;
        let password = Secret::new(required("RELAY_PASSWORD")?);
        let salt = Secret::new(required("RELAY_SALT")?);

        let log_level = lookup("RELAY_LOG")
            .filter(|level| !level.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        let trace = match lookup("RELAY_TRACE") {
            Some(value) => parse_flag(&value).ok_or(ConfigError::Invalid {
                key: "RELAY_TRACE",
                msg: format!("'{}' is not a boolean", value),
            })?,
            None => false,
        };

        Ok(Config {
            jid,
            password,
            salt,
            log_level,
            trace,
        })
    }
}

/// A bare JID is completed with our default resource.
fn parse_jid(value: &str) -> Result<FullJid, ConfigError> {
    let invalid = |msg: String| ConfigError::Invalid {
        key: "RELAY_JID",
        msg,
    };

    match Jid::from_str(value).map_err(|err| invalid(err.to_string()))? {
        Jid::Full(jid) => Ok(jid),
        Jid::Bare(jid) => with_default_resource(&jid).map_err(invalid),
    }
}

fn with_default_resource(jid: &BareJid) -> Result<FullJid, String> {
    jid.with_resource_str(DEFAULT_RESOURCE)
        .map_err(|err| err.to_string())
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "0" | "false" | "no" | "off" => Some(false),
        "1" | "true" | "yes" | "on" => Some(true),
        _ => None,
    }
}
