use crate::domain::a003_chat_session::ui::details::ChatSessionVm;
use crate::shared::icons::icon;
use contracts::domain::a001_settings::SettingsStatus;
use leptos::prelude::*;
use thaw::*;

/// Credential and endpoint entry. Shown whenever setup is required.
#[component]
#[allow(non_snake_case)]
pub fn SettingsPanel(vm: ChatSessionVm) -> impl IntoView {
    let is_changing = move || vm.status() == SettingsStatus::Changing;

    let on_enter = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            vm.save_settings();
        }
    };

    view! {
        <div class="settings-container">
            <div class="settings-box">
                <h2>"Chat settings"</h2>
                <p class="settings-status">{move || vm.status().text()}</p>

                <div class="settings-form">
                    <div class="form-group">
                        <label for="api-key-input">"API key"</label>
                        <input
                            type="password"
                            id="api-key-input"
                            autocomplete="off"
                            placeholder="Your API key"
                            prop:value=move || vm.session.with(|s| s.credential_field().to_string())
                            on:input=move |ev| {
                                vm.session.update(|s| s.set_credential_field(event_target_value(&ev)))
                            }
                            on:keydown=on_enter
                        />
                    </div>

                    <div class="form-group">
                        <label for="model-url-input">"Model URL"</label>
                        <input
                            type="url"
                            id="model-url-input"
                            placeholder="https://.../models/<model>:generateContent"
                            prop:value=move || vm.session.with(|s| s.endpoint_field().to_string())
                            on:input=move |ev| {
                                vm.session.update(|s| s.set_endpoint_field(event_target_value(&ev)))
                            }
                            on:keydown=on_enter
                        />
                    </div>

                    <Flex style="gap: 8px;">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| vm.save_settings()
                        >
                            {icon("save")}
                            " Save"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| vm.clear_settings()
                        >
                            {icon("delete")}
                            " Clear"
                        </Button>
                        <Show when=is_changing>
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| vm.cancel_change()
                            >
                                {icon("close")}
                                " Cancel"
                            </Button>
                        </Show>
                    </Flex>
                </div>
            </div>
        </div>
    }
}
