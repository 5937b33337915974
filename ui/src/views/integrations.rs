use api::{TelegramSettings, WhatsAppSettings};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, Label, Textarea};
use crate::{
    log_activity, surface_error, use_activity_log, use_api, use_auth, use_toast, LogLevel,
    ToastOptions,
};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Messaging integration settings: the Telegram bot and the WhatsApp sender.
///
/// Secrets come back masked from the backend and the inputs stay blank; a
/// blank secret on save keeps whatever is stored, so editing the channel or
/// template never requires re-entering the token.
#[component]
pub fn IntegrationsView() -> Element {
    let client = use_api();
    let tg_save_client = client.clone();
    let tg_test_client = client.clone();
    let wa_save_client = client.clone();
    let wa_test_client = client.clone();
    let auth = use_auth();
    let toasts = use_toast();
    let mut activity_log = use_activity_log();

    // Telegram form state
    let mut bot_token = use_signal(String::new);
    let mut stored_bot_token = use_signal(String::new);
    let mut channel_id = use_signal(String::new);
    let mut template = use_signal(String::new);
    let mut tg_enabled = use_signal(|| false);
    let mut tg_saving = use_signal(|| false);
    let mut tg_saved = use_signal(|| false);
    let mut tg_testing = use_signal(|| false);

    // WhatsApp form state
    let mut api_key = use_signal(String::new);
    let mut stored_api_key = use_signal(String::new);
    let mut sender_id = use_signal(String::new);
    let mut group_ids_text = use_signal(String::new);
    let mut wa_enabled = use_signal(|| false);
    let mut wa_saving = use_signal(|| false);
    let mut wa_saved = use_signal(|| false);
    let mut wa_testing = use_signal(|| false);

    let _loader = use_resource(move || {
        let client = client.clone();
        async move {
            match client.telegram_settings().await {
                Ok(settings) => {
                    stored_bot_token.set(settings.bot_token);
                    channel_id.set(settings.channel_id);
                    template.set(settings.template);
                    tg_enabled.set(settings.enabled);
                }
                Err(err) => surface_error(auth, toasts, &err),
            }
            match client.whatsapp_settings().await {
                Ok(settings) => {
                    stored_api_key.set(settings.api_key);
                    sender_id.set(settings.sender_id);
                    group_ids_text.set(settings.group_ids.join("\n"));
                    wa_enabled.set(settings.enabled);
                }
                Err(err) => surface_error(auth, toasts, &err),
            }
        }
    });

    let handle_telegram_save = move |_| {
        let client = tg_save_client.clone();
        spawn(async move {
            tg_saving.set(true);
            let settings = TelegramSettings {
                bot_token: bot_token().trim().to_string(),
                channel_id: channel_id().trim().to_string(),
                enabled: tg_enabled(),
                template: template(),
            };
            match client.save_telegram_settings(&settings).await {
                Ok(saved) => {
                    stored_bot_token.set(saved.bot_token);
                    channel_id.set(saved.channel_id);
                    template.set(saved.template);
                    tg_enabled.set(saved.enabled);
                    bot_token.set(String::new());
                    tg_saved.set(true);
                    log_activity(&mut activity_log, LogLevel::Info, "Telegram settings saved");
                    toasts.success("Telegram settings saved".to_string(), ToastOptions::new());
                }
                Err(err) => surface_error(auth, toasts, &err),
            }
            tg_saving.set(false);
        });
    };

    let handle_telegram_test = move |_| {
        let client = tg_test_client.clone();
        spawn(async move {
            tg_testing.set(true);
            match client.send_telegram_test().await {
                Ok(()) => {
                    toasts.success("Test message sent to Telegram".to_string(), ToastOptions::new());
                }
                Err(err) => surface_error(auth, toasts, &err),
            }
            tg_testing.set(false);
        });
    };

    let handle_whatsapp_save = move |_| {
        let client = wa_save_client.clone();
        spawn(async move {
            wa_saving.set(true);
            let group_ids: Vec<String> = group_ids_text()
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect();
            let settings = WhatsAppSettings {
                api_key: api_key().trim().to_string(),
                sender_id: sender_id().trim().to_string(),
                group_ids,
                enabled: wa_enabled(),
            };
            match client.save_whatsapp_settings(&settings).await {
                Ok(saved) => {
                    stored_api_key.set(saved.api_key);
                    sender_id.set(saved.sender_id);
                    group_ids_text.set(saved.group_ids.join("\n"));
                    wa_enabled.set(saved.enabled);
                    api_key.set(String::new());
                    wa_saved.set(true);
                    log_activity(&mut activity_log, LogLevel::Info, "WhatsApp settings saved");
                    toasts.success("WhatsApp settings saved".to_string(), ToastOptions::new());
                }
                Err(err) => surface_error(auth, toasts, &err),
            }
            wa_saving.set(false);
        });
    };

    let handle_whatsapp_test = move |_| {
        let client = wa_test_client.clone();
        spawn(async move {
            wa_testing.set(true);
            match client.send_whatsapp_test().await {
                Ok(()) => {
                    toasts.success("Test message sent to WhatsApp".to_string(), ToastOptions::new());
                }
                Err(err) => surface_error(auth, toasts, &err),
            }
            wa_testing.set(false);
        });
    };

    let token_hint = if stored_bot_token().is_empty() {
        "Token from @BotFather. Stored encrypted, never shown again."
    } else {
        "A token is already stored. Leave blank to keep it."
    };
    let api_key_hint = if stored_api_key().is_empty() {
        "API key from your WhatsApp provider."
    } else {
        "A key is already stored. Leave blank to keep it."
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view integrations-view",
            div {
                class: "view-header",
                h2 { "Integrations" }
            }

            div {
                class: "card",
                h3 { "Telegram" }

                div {
                    class: "form-field",
                    Label { html_for: "tg-token", "Bot token" }
                    Input {
                        id: "tg-token",
                        r#type: "password",
                        placeholder: stored_bot_token(),
                        value: bot_token(),
                        oninput: move |evt: FormEvent| {
                            bot_token.set(evt.value());
                            tg_saved.set(false);
                        },
                    }
                    p { class: "form-hint", "{token_hint}" }
                }

                div {
                    class: "form-field",
                    Label { html_for: "tg-channel", "Channel" }
                    Input {
                        id: "tg-channel",
                        placeholder: "@dealdeck_deals",
                        value: channel_id(),
                        oninput: move |evt: FormEvent| {
                            channel_id.set(evt.value());
                            tg_saved.set(false);
                        },
                    }
                }

                div {
                    class: "form-field",
                    Label { html_for: "tg-template", "Message template" }
                    Textarea {
                        id: "tg-template",
                        rows: 5,
                        placeholder: "🔥 {{title}} now {{price}}\n{{url}}",
                        value: template(),
                        oninput: move |evt: FormEvent| {
                            template.set(evt.value());
                            tg_saved.set(false);
                        },
                    }
                    p {
                        class: "form-hint",
                        "Placeholders: {{title}}, {{price}}, {{old_price}}, {{discount}}, {{url}}."
                    }
                }

                label {
                    class: "check-row",
                    input {
                        r#type: "checkbox",
                        checked: tg_enabled(),
                        onchange: move |evt: FormEvent| {
                            tg_enabled.set(evt.checked());
                            tg_saved.set(false);
                        },
                    }
                    span { "Post new deals to the channel automatically" }
                }

                div {
                    class: "form-actions",
                    Button {
                        disabled: tg_saving(),
                        onclick: handle_telegram_save,
                        if tg_saving() { "Saving..." } else { "Save" }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: tg_testing(),
                        onclick: handle_telegram_test,
                        if tg_testing() { "Sending..." } else { "Send test message" }
                    }
                    if tg_saved() {
                        span { class: "save-status", "Saved" }
                    }
                }
            }

            div {
                class: "card",
                h3 { "WhatsApp" }

                div {
                    class: "form-field",
                    Label { html_for: "wa-key", "API key" }
                    Input {
                        id: "wa-key",
                        r#type: "password",
                        placeholder: stored_api_key(),
                        value: api_key(),
                        oninput: move |evt: FormEvent| {
                            api_key.set(evt.value());
                            wa_saved.set(false);
                        },
                    }
                    p { class: "form-hint", "{api_key_hint}" }
                }

                div {
                    class: "form-field",
                    Label { html_for: "wa-sender", "Sender id" }
                    Input {
                        id: "wa-sender",
                        placeholder: "dealdeck",
                        value: sender_id(),
                        oninput: move |evt: FormEvent| {
                            sender_id.set(evt.value());
                            wa_saved.set(false);
                        },
                    }
                }

                div {
                    class: "form-field",
                    Label { html_for: "wa-groups", "Group chats" }
                    Textarea {
                        id: "wa-groups",
                        rows: 4,
                        placeholder: "one group id per line",
                        value: group_ids_text(),
                        oninput: move |evt: FormEvent| {
                            group_ids_text.set(evt.value());
                            wa_saved.set(false);
                        },
                    }
                    p { class: "form-hint", "Deals are broadcast to every group listed here." }
                }

                label {
                    class: "check-row",
                    input {
                        r#type: "checkbox",
                        checked: wa_enabled(),
                        onchange: move |evt: FormEvent| {
                            wa_enabled.set(evt.checked());
                            wa_saved.set(false);
                        },
                    }
                    span { "Broadcast new deals to the groups automatically" }
                }

                div {
                    class: "form-actions",
                    Button {
                        disabled: wa_saving(),
                        onclick: handle_whatsapp_save,
                        if wa_saving() { "Saving..." } else { "Save" }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: wa_testing(),
                        onclick: handle_whatsapp_test,
                        if wa_testing() { "Sending..." } else { "Send test message" }
                    }
                    if wa_saved() {
                        span { class: "save-status", "Saved" }
                    }
                }
            }
        }
    }
}
