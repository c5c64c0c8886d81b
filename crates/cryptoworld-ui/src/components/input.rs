//! Input Field Components
//!
//! Translucent text inputs with a green focus ring.

use dioxus::prelude::*;

use crate::components::{Icon, LucideIcon};

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input type (text, email, search, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Text input field
///
/// # Example
///
/// ```rust,ignore
/// let mut email = use_signal(String::new);
///
/// rsx! {
///     Input {
///         value: email(),
///         oninput: move |s| email.set(s),
///         input_type: "email".to_string(),
///         placeholder: "Enter your email address".to_string(),
///         required: true,
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let extra_class = props.class.as_deref().unwrap_or("");
    let input_class = if extra_class.is_empty() {
        "input-field".to_string()
    } else {
        format!("input-field {}", extra_class)
    };

    rsx! {
        input {
            class: "{input_class}",
            r#type: "{props.input_type}",
            value: "{props.value}",
            placeholder: props.placeholder.as_deref().unwrap_or(""),
            required: props.required,
            disabled: props.disabled,
            oninput: move |e| props.oninput.call(e.value()),
        }
    }
}

/// Search input with a leading magnifier icon
#[derive(Clone, PartialEq, Props)]
pub struct SearchInputProps {
    /// Current search value
    pub value: String,
    /// Handler called when search changes
    pub oninput: EventHandler<String>,
    #[props(default = "Search...".to_string())]
    pub placeholder: String,
}

#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    rsx! {
        div { class: "search-input-wrapper",
            span { class: "search-icon",
                LucideIcon { icon: Icon::Search, size: 16 }
            }
            input {
                class: "input-field search-input",
                r#type: "text",
                placeholder: "{props.placeholder}",
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}
