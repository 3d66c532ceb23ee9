use crate::api::{ChatClient, ChatRequest};
use crate::config::WidgetConfig;
use crate::transcript::{Sender, Transcript};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Bot message shown when the server answers 2xx without a usable answer.
pub const MISSING_ANSWER_TEXT: &str = "No response received from server.";
/// Bot message shown for transport failures and non-success statuses.
pub const CONNECTION_ERROR_TEXT: &str = "Unable to connect to the server. Please try again.";

/// One bot-side transcript entry produced by a finished request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotReply {
    pub text: String,
}

pub type ReplySender = mpsc::UnboundedSender<BotReply>;
pub type ReplyReceiver = mpsc::UnboundedReceiver<BotReply>;

/// The chat widget controller: input buffer, transcript, language
/// selection, and the submit/reply cycle.
///
/// Each submit spawns one independent request task. Tasks deliver their
/// result over the reply channel, so overlapping in-flight requests land
/// in arrival order, which may differ from send order. There is no
/// timeout, retry, or cancellation; a stale reply is still applied when
/// it arrives.
#[derive(Debug)]
pub struct ChatWidget {
    client: Arc<ChatClient>,
    transcript: Transcript,
    input: String,
    languages: Vec<String>,
    language_idx: usize,
    replies: ReplySender,
}

impl ChatWidget {
    /// Config must have passed [`WidgetConfig::validate`], so the language
    /// list is non-empty.
    pub fn new(config: &WidgetConfig, replies: ReplySender) -> Self {
        Self {
            client: Arc::new(ChatClient::new(config.endpoint.clone())),
            transcript: Transcript::new(),
            input: String::new(),
            languages: config.languages.clone(),
            language_idx: 0,
            replies,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn push_char(&mut self, ch: char) {
        self.input.push(ch);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Currently selected language option.
    pub fn language(&self) -> &str {
        &self.languages[self.language_idx]
    }

    pub fn cycle_language(&mut self) {
        self.language_idx = (self.language_idx + 1) % self.languages.len();
    }

    /// Submits the current input line.
    ///
    /// A whitespace-only input is silently ignored: no transcript entry, no
    /// request. Otherwise the trimmed text is appended as a user entry, the
    /// input is cleared, and one request task is spawned. The task always
    /// resolves to exactly one [`BotReply`]: the answer, the fixed
    /// missing-answer fallback, or the fixed connection-error text.
    pub fn submit(&mut self) {
        let text = self.input.trim().to_string();
        if text.is_empty() {
            return;
        }

        self.transcript.append(text.clone(), Sender::User);
        self.input.clear();

        let request = ChatRequest::new(text, self.language());
        let client = Arc::clone(&self.client);
        let replies = self.replies.clone();

        tracing::debug!(query = %request.query, language = %request.language, "submitting chat query");

        tokio::spawn(async move {
            let reply = match client.ask(&request).await {
                Ok(Some(answer)) => BotReply { text: answer },
                Ok(None) => BotReply {
                    text: MISSING_ANSWER_TEXT.to_string(),
                },
                Err(e) => {
                    tracing::error!(error = %e, "chat request failed");
                    BotReply {
                        text: CONNECTION_ERROR_TEXT.to_string(),
                    }
                }
            };
            // Receiver gone means the app is shutting down.
            let _ = replies.send(reply);
        });
    }

    /// Appends a finished request's reply to the transcript.
    pub fn apply_reply(&mut self, reply: BotReply) {
        self.transcript.append(reply.text, Sender::Bot);
    }
}
