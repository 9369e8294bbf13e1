//! Chat Session - View Component
//!
//! The whole page is a function of the session signal: the settings panel
//! while setup is required, the conversation otherwise.

use super::view_model::ChatSessionVm;
use crate::domain::a001_settings::ui::details::SettingsPanel;
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use contracts::domain::a001_settings::UiMode;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ChatSessionPage(config: AppConfig) -> impl IntoView {
    let vm = ChatSessionVm::new(&config);
    let chat_active = Memo::new(move |_| vm.mode() == UiMode::ChatActive);

    view! {
        <div class="chat-app">
            <Show
                when=move || chat_active.get()
                fallback=move || view! { <SettingsPanel vm=vm /> }
            >
                <ChatArea vm=vm />
            </Show>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn ChatArea(vm: ChatSessionVm) -> impl IntoView {
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let messages = Memo::new(move |_| vm.session.with(|s| s.log().messages().to_vec()));
    let sending = Memo::new(move |_| vm.is_sending());

    // Scroll to bottom whenever the log grows
    Effect::new(move |_| {
        let _ = messages.with(|m| m.len());
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    // Input is re-enabled by the next render, focus after it
    let on_settled = Callback::new(move |_| {
        request_animation_frame(move || {
            if let Some(input) = input_ref.get_untracked() {
                let _ = input.focus();
            }
        });
    });

    let send = move || vm.send(on_settled);

    view! {
        <div style="height: 100%; display: flex; flex-direction: column;">
            // Header
            <Flex
                justify=FlexJustify::SpaceBetween
                align=FlexAlign::Center
                style="padding: 12px 16px; border-bottom: 1px solid var(--colorNeutralStroke2);"
            >
                <Flex align=FlexAlign::Center style="gap: 16px;">
                    <h2 style="font-size: 18px; font-weight: bold;">{icon("chat")} " Chat"</h2>
                    <span style="color: var(--colorNeutralForeground3); font-size: 14px;">
                        {move || format!("Messages: {}", messages.with(|m| m.len()))}
                    </span>
                </Flex>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=sending
                    on_click=move |_| vm.request_change()
                >
                    {icon("settings")}
                    " Change settings"
                </Button>
            </Flex>

            // Messages area
            <div node_ref=messages_container_ref class="chat-log">
                <For
                    each=move || messages.get()
                    key=|msg| msg.id.as_string()
                    let:msg
                >
                    {{
                        let wrapper_class = if msg.is_user() {
                            "message-wrapper user-message"
                        } else {
                            "message-wrapper ai-message"
                        };
                        let html = vm.render(&msg);
                        let time = msg
                            .created_at
                            .with_timezone(&chrono::Local)
                            .format("%H:%M")
                            .to_string();
                        view! {
                            <div class=wrapper_class>
                                <div class="message" inner_html=html></div>
                                <div class="message-meta">{time}</div>
                            </div>
                        }
                    }}
                </For>
            </div>

            // Input area
            <div class="input-area">
                <input
                    type="text"
                    class="chat-input"
                    node_ref=input_ref
                    placeholder="Type a message... (Enter to send)"
                    prop:value=move || vm.session.with(|s| s.pending_input().to_string())
                    on:input=move |ev| {
                        vm.session.update(|s| s.set_pending_input(event_target_value(&ev)))
                    }
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            send();
                        }
                    }
                    disabled=move || sending.get()
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=sending
                    on_click=move |_| send()
                >
                    {icon("send")}
                    {move || if sending.get() { " Sending..." } else { " Send" }}
                </Button>
            </div>
        </div>
    }
}
