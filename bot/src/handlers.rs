//! Message handling: documents in, MarkdownV2 messages out.

use anyhow::Result;
use teloxide::net::Download;
use teloxide::prelude::*;
use teloxide::types::{Document, InputFile, ParseMode};
use teloxide::{ApiError, RequestError};
use tgdoc::Converter;

pub const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const DOC_MIME: &str = "application/msword";

const HELP_TEXT: &str = "Send me a Word document (.doc or .docx) and I will reply with its \
text formatted for Telegram.\n\nHeadings, bold, italic, underline and strikethrough are kept. \
Paragraphs styled Code become inline code, paragraphs styled Quote become spoilers.";
const WRONG_TYPE_TEXT: &str = "Please send a Word document (.doc or .docx).";
const EMPTY_TEXT: &str = "The document has no text to show.";
const FAILURE_TEXT: &str = "Sorry, something went wrong while converting the document. Please try again.";
const LEGACY_TEXT: &str = "Old .doc files cannot be read yet. Please save the document as .docx and send it again.";

/// What to send back for a converted document.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    /// Send as a MarkdownV2 message.
    Markup(String),
    /// Too long for one message; send as a file.
    Attachment { file_name: String, content: String },
    /// Nothing to show.
    Empty,
}

/// Decide how to deliver `markup` given the message length limit.
pub fn plan_reply(markup: String, max_len: usize, source_name: Option<&str>) -> Reply {
    if markup.is_empty() {
        Reply::Empty
    } else if markup.chars().count() > max_len {
        Reply::Attachment {
            file_name: attachment_name(source_name),
            content: markup,
        }
    } else {
        Reply::Markup(markup)
    }
}

/// Whether a document's MIME type is one we try to convert.
pub fn is_supported_mime(mime: Option<&str>) -> bool {
    matches!(mime, Some(DOCX_MIME | DOC_MIME))
}

/// File name for markup sent as an attachment: the source's stem plus `.md`.
pub fn attachment_name(source_name: Option<&str>) -> String {
    let stem = source_name
        .map(|name| name.rsplit_once('.').map_or(name, |(stem, _)| stem))
        .filter(|stem| !stem.is_empty())
        .unwrap_or("document");
    format!("{}.md", stem)
}

fn is_command(text: &str, command: &str) -> bool {
    text.split_whitespace()
        .next()
        .and_then(|word| word.strip_prefix('/'))
        .map(|word| word.split('@').next() == Some(command))
        .unwrap_or(false)
}

/// Reply text for a failed conversion.
fn failure_text(error: &anyhow::Error) -> &'static str {
    match error.downcast_ref::<tgdoc::Error>() {
        Some(tgdoc::Error::UnsupportedFormat(_)) => LEGACY_TEXT,
        _ => FAILURE_TEXT,
    }
}

/// Handles every incoming message. Holds no per-chat state.
pub struct Handler {
    converter: Converter,
    max_message_len: usize,
}

impl Handler {
    pub fn new(converter: Converter, max_message_len: usize) -> Self {
        Self {
            converter,
            max_message_len,
        }
    }

    pub async fn handle(&self, bot: Bot, msg: Message) -> ResponseResult<()> {
        if let Some(doc) = msg.document() {
            return self.handle_document(&bot, &msg, doc).await;
        }

        match msg.text() {
            Some(text) if is_command(text, "start") || is_command(text, "help") => {
                bot.send_message(msg.chat.id, HELP_TEXT).await?;
            }
            Some(_) => {
                bot.send_message(msg.chat.id, WRONG_TYPE_TEXT).await?;
            }
            None => {}
        }
        Ok(())
    }

    async fn handle_document(&self, bot: &Bot, msg: &Message, doc: &Document) -> ResponseResult<()> {
        let mime = doc.mime_type.as_ref().map(|m| m.essence_str());
        if !is_supported_mime(mime) {
            log::debug!("Ignoring document with type {:?}", mime);
            bot.send_message(msg.chat.id, WRONG_TYPE_TEXT).await?;
            return Ok(());
        }

        let markup = match self.convert(bot, doc).await {
            Ok(markup) => markup,
            Err(e) => {
                log::error!(
                    "Failed to convert {:?} in chat {}: {:#}",
                    doc.file_name,
                    msg.chat.id,
                    e
                );
                bot.send_message(msg.chat.id, failure_text(&e)).await?;
                return Ok(());
            }
        };

        log::info!(
            "Converted {:?} for chat {} ({} chars)",
            doc.file_name,
            msg.chat.id,
            markup.chars().count()
        );
        self.deliver(bot, msg.chat.id, markup, doc.file_name.as_deref())
            .await
    }

    async fn convert(&self, bot: &Bot, doc: &Document) -> Result<String> {
        let file = bot.get_file(doc.file.id.clone()).await?;
        let mut data = Vec::new();
        bot.download_file(&file.path, &mut data).await?;

        let converter = self.converter.clone();
        let markup = tokio::task::spawn_blocking(move || converter.convert_owned(data)).await??;
        Ok(markup)
    }

    async fn deliver(
        &self,
        bot: &Bot,
        chat_id: ChatId,
        markup: String,
        source_name: Option<&str>,
    ) -> ResponseResult<()> {
        match plan_reply(markup, self.max_message_len, source_name) {
            Reply::Empty => {
                bot.send_message(chat_id, EMPTY_TEXT).await?;
            }
            Reply::Attachment { file_name, content } => {
                send_attachment(bot, chat_id, file_name, content).await?;
            }
            Reply::Markup(text) => {
                let sent = bot
                    .send_message(chat_id, text.clone())
                    .parse_mode(ParseMode::MarkdownV2)
                    .await;
                match sent {
                    Ok(_) => {}
                    Err(RequestError::Api(ApiError::CantParseEntities(reason))) => {
                        log::warn!("Telegram rejected markup ({}), sending as file", reason);
                        send_attachment(bot, chat_id, attachment_name(source_name), text).await?;
                    }
                    Err(e) => return Err(e),
                }
            }
        }
        Ok(())
    }
}

async fn send_attachment(
    bot: &Bot,
    chat_id: ChatId,
    file_name: String,
    content: String,
) -> ResponseResult<()> {
    let file = InputFile::memory(content.into_bytes()).file_name(file_name);
    bot.send_document(chat_id, file).await?;
    Ok(())
}
