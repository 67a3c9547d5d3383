// presence-relay/relay-bot
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Transport crates that are only interesting when tracing stanzas.
const TRANSPORT_TARGETS: [&str; 2] = ["tokio_xmpp", "xmpp_parsers"];

pub fn init(config: &Config) -> Result<()> {
    tracing_subscriber::registry()
        .with(env_filter(&config.log_level, config.trace)?)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()?;
    Ok(())
}

fn env_filter(level: &str, trace: bool) -> Result<EnvFilter> {
    let mut filter = EnvFilter::builder().parse(level)?;

    if trace {
        filter = filter.add_directive("relay_xmpp=trace".parse::<Directive>()?);
    } else {
        for target in TRANSPORT_TARGETS {
            filter = filter.add_directive(format!("{}=info", target).parse::<Directive>()?);
        }
    }

    Ok(filter)
}
