// presence-relay/relay-bot
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;

use presence_relay::Relay;

use crate::config::Config;

mod config;
mod logging;
mod shutdown;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    logging::init(&config)?;

    let (relay, handle) = Relay::builder(config.salt).build();

    let jid = config.jid;
    let password = config.password;
    let mut relay_task = tokio::spawn(async move { relay.run(&jid, password).await });

    let result = tokio::select! {
        result = &mut relay_task => result,
        _ = shutdown::signal() => {
            handle.stop();
            relay_task.await
        }
    };

    result??;
    Ok(())
}
