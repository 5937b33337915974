//! Basic form controls. Styling lives in the shared view stylesheet; these
//! exist so every form in the app reads the same way.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Outline,
    Danger,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            Self::Primary => "btn btn--primary",
            Self::Outline => "btn btn--outline",
            Self::Danger => "btn btn--danger",
        }
    }
}

#[component]
pub fn Button(
    #[props(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[props(default)] class: String,
    #[props(default)] disabled: bool,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let classes = format!("{} {}", variant.class(), class);
    rsx! {
        button {
            class: classes,
            r#type: r#type,
            disabled: disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default)] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(default)] disabled: bool,
    #[props(default)] oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    let classes = format!("field-input {class}");
    rsx! {
        input {
            id: id,
            class: classes,
            r#type: r#type,
            placeholder: placeholder,
            value: value,
            disabled: disabled,
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
        }
    }
}

#[component]
pub fn Label(#[props(default)] html_for: String, children: Element) -> Element {
    rsx! {
        label {
            r#for: html_for,
            class: "field-label",
            {children}
        }
    }
}

#[component]
pub fn Textarea(
    #[props(default)] id: String,
    #[props(default)] class: String,
    #[props(default = 4u32)] rows: u32,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(default)] disabled: bool,
    #[props(default)] oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    let classes = format!("field-input {class}");
    rsx! {
        textarea {
            id: id,
            class: classes,
            rows: "{rows}",
            placeholder: placeholder,
            value: value,
            disabled: disabled,
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
        }
    }
}

#[component]
pub fn Select(
    #[props(default)] id: String,
    #[props(default)] class: String,
    #[props(default)] value: String,
    #[props(default)] disabled: bool,
    #[props(default)] onchange: Option<EventHandler<FormEvent>>,
    children: Element,
) -> Element {
    let classes = format!("field-input {class}");
    rsx! {
        select {
            id: id,
            class: classes,
            value: value,
            disabled: disabled,
            onchange: move |evt| {
                if let Some(handler) = &onchange {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
