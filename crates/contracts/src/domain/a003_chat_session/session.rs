use super::transport::GenerateTransport;
use crate::domain::a001_settings::{
    KeyValueStorage, Settings, SettingsStatus, SettingsStore, UiMode,
};
use crate::domain::a002_chat_message::{ChatMessage, ConversationLog};
use crate::shared::errors::{SendError, SettingsError, TransportError};
use crate::shared::generate_content::{interpret_response, GenerateContentRequest, RawResponse};
use crate::shared::request_url::build_request_url;

pub const SETTINGS_SAVED_TEXT: &str = "Settings saved.";
pub const SETTINGS_CLEARED_TEXT: &str = "Settings cleared.";
pub const SETTINGS_MISSING_TEXT: &str = "Key & URL not saved. Please save settings first.";
pub const NO_CONTENT_TEXT: &str = "No response from AI.";
pub const NETWORK_ERROR_TEXT: &str = "Network error. Check internet connection.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// User-visible alert, drained by the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// The network half of a send, produced by `begin_send`
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSend {
    pub url: String,
    pub body: GenerateContentRequest,
}

/// State of one page session.
///
/// Settings are never cached here: every operation re-reads the store, and
/// `mode` is recomputed from what was read.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatSession {
    mode: UiMode,
    status: SettingsStatus,
    log: ConversationLog,
    pending_input: String,
    credential_field: String,
    endpoint_field: String,
    sending: bool,
    focus_requested: bool,
    notices: Vec<Notice>,
    encode_credential: bool,
}

impl ChatSession {
    /// Initial transition: mode from the persisted settings
    pub fn start<S: KeyValueStorage>(store: &SettingsStore<S>) -> Self {
        let settings = store.load();
        let session = Self {
            mode: UiMode::from_settings(&settings),
            status: SettingsStatus::from_settings(&settings),
            log: ConversationLog::new(),
            pending_input: String::new(),
            credential_field: String::new(),
            endpoint_field: String::new(),
            sending: false,
            focus_requested: false,
            notices: Vec::new(),
            encode_credential: false,
        };
        log::debug!("Chat session started in {:?} mode", session.mode);
        session
    }

    pub fn with_credential_encoding(mut self, encode: bool) -> Self {
        self.encode_credential = encode;
        self
    }

    pub fn mode(&self) -> UiMode {
        self.mode
    }

    pub fn status(&self) -> SettingsStatus {
        self.status
    }

    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn credential_field(&self) -> &str {
        &self.credential_field
    }

    pub fn endpoint_field(&self) -> &str {
        &self.endpoint_field
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Text field and submit action share this flag
    pub fn input_enabled(&self) -> bool {
        !self.sending
    }

    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    pub fn set_credential_field(&mut self, text: impl Into<String>) {
        self.credential_field = text.into();
    }

    pub fn set_endpoint_field(&mut self, text: impl Into<String>) {
        self.endpoint_field = text.into();
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn take_focus_request(&mut self) -> bool {
        std::mem::replace(&mut self.focus_requested, false)
    }

    /// Persist the edit fields and recompute the mode from a fresh load
    pub fn save_settings<S: KeyValueStorage>(
        &mut self,
        store: &SettingsStore<S>,
    ) -> Result<(), SettingsError> {
        match store.save(&self.credential_field, &self.endpoint_field) {
            Ok(_) => {
                self.credential_field.clear();
                self.endpoint_field.clear();
                self.refresh(&store.load());
                self.notify(NoticeKind::Info, SETTINGS_SAVED_TEXT);
                Ok(())
            }
            Err(e) => {
                log::warn!("Settings not saved: {}", e);
                self.notify(NoticeKind::Error, e.to_string());
                Err(e)
            }
        }
    }

    pub fn clear_settings<S: KeyValueStorage>(&mut self, store: &SettingsStore<S>) {
        store.clear();
        self.refresh(&store.load());
        self.notify(NoticeKind::Info, SETTINGS_CLEARED_TEXT);
    }

    /// Back to the settings view with the stored values pre-filled.
    /// Persisted settings stay as they are.
    pub fn request_change<S: KeyValueStorage>(&mut self, store: &SettingsStore<S>) {
        if self.mode != UiMode::ChatActive {
            return;
        }
        let settings = store.load();
        self.credential_field = settings.credential().unwrap_or_default().to_string();
        self.endpoint_field = settings.endpoint_url().unwrap_or_default().to_string();
        self.mode = UiMode::SetupRequired;
        self.status = SettingsStatus::Changing;
    }

    /// Leave the settings view without saving
    pub fn cancel_change<S: KeyValueStorage>(&mut self, store: &SettingsStore<S>) {
        if self.status != SettingsStatus::Changing {
            return;
        }
        self.credential_field.clear();
        self.endpoint_field.clear();
        self.refresh(&store.load());
    }

    /// Local half of a send: validate, append the user message, lock the input.
    ///
    /// Returns `None` when nothing is to be sent; the log and the input
    /// surface are then untouched.
    pub fn begin_send<S: KeyValueStorage>(
        &mut self,
        store: &SettingsStore<S>,
    ) -> Option<PendingSend> {
        if self.sending {
            log::debug!("Send ignored: a request is already in flight");
            return None;
        }

        let text = self.pending_input.trim().to_string();
        if text.is_empty() {
            return None;
        }

        let settings = store.load();
        let Some((credential, endpoint_url)) = settings.pair() else {
            self.notify(NoticeKind::Error, SETTINGS_MISSING_TEXT);
            return None;
        };

        if self.mode != UiMode::ChatActive {
            log::debug!("Send ignored: chat view is not active");
            return None;
        }

        let url = build_request_url(endpoint_url, credential, self.encode_credential);
        self.log.push(ChatMessage::user(text.clone()));
        self.pending_input.clear();
        self.sending = true;

        log::debug!("Sending message ({} chars)", text.chars().count());
        Some(PendingSend {
            url,
            body: GenerateContentRequest::single_text(text),
        })
    }

    /// Network half of a send: append exactly one assistant message and unlock
    pub fn complete_send(&mut self, outcome: Result<RawResponse, TransportError>) {
        if !self.sending {
            log::warn!("Response arrived with no send in flight, dropped");
            return;
        }

        let result = outcome
            .map_err(SendError::from)
            .and_then(|response| interpret_response(&response));

        let reply = match result {
            Ok(text) => text,
            Err(SendError::RemoteApi(message)) => {
                self.notify(NoticeKind::Error, format!("API Error: {}", message));
                format!("Error: {}", message)
            }
            Err(SendError::MalformedResponse) => NO_CONTENT_TEXT.to_string(),
            Err(e) => {
                log::error!("Network or other error: {}", e);
                NETWORK_ERROR_TEXT.to_string()
            }
        };

        self.log.push(ChatMessage::assistant(reply));
        self.sending = false;
        self.focus_requested = true;
    }

    /// Whole lifecycle in one call. Returns whether a request was issued.
    pub async fn send_message<S, T>(&mut self, store: &SettingsStore<S>, transport: &T) -> bool
    where
        S: KeyValueStorage,
        T: GenerateTransport + ?Sized,
    {
        let Some(pending) = self.begin_send(store) else {
            return false;
        };
        let outcome = transport.post_json(&pending.url, &pending.body).await;
        self.complete_send(outcome);
        true
    }

    fn refresh(&mut self, settings: &Settings) {
        self.mode = UiMode::from_settings(settings);
        self.status = SettingsStatus::from_settings(settings);
    }

    fn notify(&mut self, kind: NoticeKind, text: impl Into<String>) {
        self.notices.push(Notice {
            kind,
            text: text.into(),
        });
    }
}
