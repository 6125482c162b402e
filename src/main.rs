mod attachment;
mod config;
mod redactor;

use std::sync::Arc;

use teloxide::prelude::*;
use tracing::{debug, info, warn};
use tracing_subscriber::prelude::*;

use attachment::AttachmentInfo;
use config::Config;

/// Telegram caps messages at 4096 chars; leave headroom for the ellipsis.
const MAX_REPLY_CHARS: usize = 4000;

#[tokio::main]
async fn main() {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "urlecho.json".to_string());
    let config = match Config::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let bot = Bot::new(&config.telegram_bot_token);

    // Setup logging
    let log_dir = config.data_dir.join("logs");
    std::fs::create_dir_all(&log_dir).ok();
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("urlecho.log"))
        .expect("Failed to open log file");
    let (non_blocking, _guard) = tracing_appender::non_blocking(log_file);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout)
                .with_filter(
                    tracing_subscriber::EnvFilter::from_default_env()
                        .add_directive(tracing::Level::INFO.into()),
                ),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(
                    tracing_subscriber::EnvFilter::from_default_env()
                        .add_directive(tracing::Level::INFO.into()),
                ),
        )
        .init();

    info!("Starting urlecho...");
    info!("Loaded config from {config_path}");
    info!("URL replacement token: {:?}", config.replacement);
    if config.allowed_chats.is_empty() {
        info!("Answering in all chats");
    } else {
        info!("Allowed chats: {:?}", config.allowed_chats);
    }

    let config = Arc::new(config);

    let handler = dptree::entry().branch(Update::filter_message().endpoint(handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![config])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}

async fn handle_message(bot: Bot, msg: Message, config: Arc<Config>) -> ResponseResult<()> {
    if !config.is_allowed_chat(msg.chat.id) {
        return Ok(());
    }

    debug!("full data = {:?}", msg);

    let reply = match AttachmentInfo::from_message(&msg) {
        Some(info) => {
            info!("Attachment in chat {}: {}", msg.chat.id, info.describe());
            format!("Received attachment type: {}", info.describe())
        }
        None => {
            let text = msg.text().unwrap_or("");
            let text_preview: String = text.chars().take(100).collect();
            info!("Message in chat {}: \"{text_preview}\"", msg.chat.id);
            format!(
                "Received message: {}",
                redactor::redact_urls(text, &config.replacement)
            )
        }
    };

    if let Err(e) = bot.send_message(msg.chat.id, &reply).await {
        warn!("Failed to send reply: {e}");
    }

    if config.echo_raw {
        let dump = redactor::redact_urls(&format!("{:?}", msg), &config.replacement);
        let dump = truncate_reply(&format!("Full data (URLs replaced): {dump}"));
        if let Err(e) = bot.send_message(msg.chat.id, &dump).await {
            warn!("Failed to send raw echo: {e}");
        }
    }

    Ok(())
}

fn truncate_reply(text: &str) -> String {
    if text.chars().count() > MAX_REPLY_CHARS {
        let truncated: String = text.chars().take(MAX_REPLY_CHARS).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}
