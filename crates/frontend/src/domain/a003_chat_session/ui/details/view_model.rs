//! Chat Session - View Model

use crate::shared::config::AppConfig;
use crate::shared::markdown::renderer;
use crate::shared::storage::BrowserLocalStorage;
use crate::shared::transport::GlooTransport;
use contracts::domain::a001_settings::{SettingsStatus, SettingsStore, UiMode};
use contracts::domain::a002_chat_message::ChatMessage;
use contracts::domain::a003_chat_session::{ChatSession, GenerateTransport, NoticeKind};
use contracts::shared::render::render_message;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Collaborators of the session, shared by all handlers
#[derive(Debug, Clone)]
pub struct ChatServices {
    pub store: SettingsStore<BrowserLocalStorage>,
    pub transport: GlooTransport,
    pub markdown: bool,
}

#[derive(Clone, Copy)]
pub struct ChatSessionVm {
    pub session: RwSignal<ChatSession>,
    pub services: StoredValue<ChatServices>,
}

impl ChatSessionVm {
    pub fn new(config: &AppConfig) -> Self {
        let store = SettingsStore::with_keys(BrowserLocalStorage, config.settings_keys());
        let session =
            ChatSession::start(&store).with_credential_encoding(config.request.encode_credential);
        let services = ChatServices {
            store,
            transport: GlooTransport::new(config.timeout_ms()),
            markdown: config.render.markdown,
        };

        Self {
            session: RwSignal::new(session),
            services: StoredValue::new(services),
        }
    }

    pub fn mode(&self) -> UiMode {
        self.session.with(|s| s.mode())
    }

    pub fn status(&self) -> SettingsStatus {
        self.session.with(|s| s.status())
    }

    pub fn is_sending(&self) -> bool {
        self.session.with(|s| s.is_sending())
    }

    pub fn save_settings(&self) {
        let session = self.session;
        self.services.with_value(|svc| {
            session.update(|s| {
                // the outcome is surfaced as a notice
                let _ = s.save_settings(&svc.store);
            })
        });
        self.flush_notices();
    }

    pub fn clear_settings(&self) {
        let session = self.session;
        self.services
            .with_value(|svc| session.update(|s| s.clear_settings(&svc.store)));
        self.flush_notices();
    }

    pub fn request_change(&self) {
        let session = self.session;
        self.services
            .with_value(|svc| session.update(|s| s.request_change(&svc.store)));
    }

    pub fn cancel_change(&self) {
        let session = self.session;
        self.services
            .with_value(|svc| session.update(|s| s.cancel_change(&svc.store)));
    }

    /// Start a send; `on_settled` runs after the reply has been appended
    pub fn send(&self, on_settled: Callback<()>) {
        let session = self.session;
        let pending = self
            .services
            .with_value(|svc| session.try_update(|s| s.begin_send(&svc.store)))
            .flatten();
        self.flush_notices();

        let Some(pending) = pending else {
            return;
        };

        let transport = self.services.with_value(|svc| svc.transport);
        let vm = *self;
        spawn_local(async move {
            let outcome = transport.post_json(&pending.url, &pending.body).await;
            session.update(|s| s.complete_send(outcome));
            vm.flush_notices();
            if session
                .try_update_untracked(|s| s.take_focus_request())
                .unwrap_or(false)
            {
                on_settled.run(());
            }
        });
    }

    /// HTML of one log entry under the configured renderer
    pub fn render(&self, message: &ChatMessage) -> String {
        let markdown = self.services.with_value(|svc| svc.markdown);
        render_message(message, renderer(markdown))
    }

    /// Show queued notices the way the page always has: `window.alert`
    pub fn flush_notices(&self) {
        let notices = self
            .session
            .try_update_untracked(|s| s.take_notices())
            .unwrap_or_default();
        for notice in notices {
            if notice.kind == NoticeKind::Error {
                log::warn!("{}", notice.text);
            }
            web_sys::window().and_then(|w| w.alert_with_message(&notice.text).ok());
        }
    }
}
