//! tgdoc bot - replies to Word documents with their Telegram rendering

mod config;
mod handlers;

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::update_listeners::webhooks;
use tgdoc::Converter;

use crate::config::BotConfig;
use crate::handlers::Handler;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = BotConfig::from_env()?;
    let bot = Bot::new(config.token.clone());

    // Uploaded documents come from arbitrary editors; tolerate broken style tables.
    let handler = Arc::new(Handler::new(
        Converter::new().lenient(),
        config.max_message_len,
    ));
    let answer = move |bot: Bot, msg: Message| {
        let handler = Arc::clone(&handler);
        async move { handler.handle(bot, msg).await }
    };

    match config.webhook_endpoint() {
        Some((addr, url)) => {
            log::info!("Starting webhook on {} for {}", addr, url);
            let listener = webhooks::axum(bot.clone(), webhooks::Options::new(addr, url)).await?;
            teloxide::repl_with_listener(bot, answer, listener).await;
        }
        None => {
            log::info!("Starting long polling");
            teloxide::repl(bot, answer).await;
        }
    }

    Ok(())
}
