use crate::domain::a003_chat_session::ui::details::ChatSessionPage;
use crate::shared::config::AppConfig;
use leptos::prelude::*;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    view! {
        <ChatSessionPage config=config />
    }
}
