//! # Input Components
//!
//! Form inputs shared by the console dialogs and list toolbars:
//! - **TextInput**: Single-line text input
//! - **Select**: Dropdown selection
//! - **Toggle**: Switch-style toggle
//!
//! Colours come from the theme variables in `main.css`, so the same
//! markup renders in light and dark mode.

use dioxus::prelude::*;

// ============================================================================
// Text Input Component
// ============================================================================

/// Properties for TextInput component
#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    /// Input value
    pub value: String,

    /// Label text (optional)
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Error message (shows error state)
    #[props(default)]
    pub error: Option<String>,

    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,

    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Whether the input is readonly
    #[props(default = false)]
    pub readonly: bool,

    /// Input type (text, tel, number, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,

    /// Additional CSS classes
    #[props(default)]
    pub class: Option<String>,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,

    /// Enter key handler
    #[props(default)]
    pub on_enter: EventHandler<String>,
}

/// Single-line text input component
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let input_class = build_input_class(props.error.is_some(), props.disabled, &props.class);

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    "{label}"
                    if props.required {
                        span { class: "input-required", "*" }
                    }
                }
            }

            input {
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                readonly: props.readonly,
                oninput: move |e| props.on_change.call(e.value()),
                onkeydown: move |e| {
                    if e.key() == Key::Enter {
                        props.on_enter.call(props.value.clone());
                    }
                },
            }

            if let Some(error) = &props.error {
                p { class: "input-error", "{error}" }
            }
        }
    }
}

// ============================================================================
// Select Component
// ============================================================================

/// A single option for the Select component
#[derive(Clone, PartialEq, Debug)]
pub struct SelectOption {
    /// Option value
    pub value: String,
    /// Display label
    pub label: String,
}

impl SelectOption {
    /// Create a new select option
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Properties for Select component
#[derive(Props, Clone, PartialEq)]
pub struct SelectProps {
    /// Selected value
    pub value: String,

    /// Available options
    pub options: Vec<SelectOption>,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Whether required
    #[props(default = false)]
    pub required: bool,

    /// Whether disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Additional CSS classes
    #[props(default)]
    pub class: Option<String>,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Dropdown select component
#[component]
pub fn Select(props: SelectProps) -> Element {
    let select_class = build_input_class(false, props.disabled, &props.class);

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    "{label}"
                    if props.required {
                        span { class: "input-required", "*" }
                    }
                }
            }

            select {
                class: "{select_class}",
                disabled: props.disabled,
                onchange: move |e| props.on_change.call(e.value()),

                for option in &props.options {
                    option {
                        key: "{option.value}",
                        value: "{option.value}",
                        selected: props.value == option.value,
                        "{option.label}"
                    }
                }
            }
        }
    }
}

// ============================================================================
// Toggle Component
// ============================================================================

/// Properties for Toggle component
#[derive(Props, Clone, PartialEq)]
pub struct ToggleProps {
    /// Whether on
    pub checked: bool,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<bool>,
}

/// Switch-style toggle component
#[component]
pub fn Toggle(props: ToggleProps) -> Element {
    let checked = props.checked;
    let track_class = if checked {
        "toggle-track toggle-on"
    } else {
        "toggle-track"
    };

    rsx! {
        label {
            class: "toggle",
            button {
                r#type: "button",
                class: "{track_class}",
                role: "switch",
                "aria-checked": "{checked}",
                onclick: move |_| props.on_change.call(!checked),
                span { class: "toggle-thumb" }
            }
            if let Some(label) = &props.label {
                span { class: "toggle-label", "{label}" }
            }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Build CSS classes for text inputs and selects
fn build_input_class(has_error: bool, disabled: bool, extra: &Option<String>) -> String {
    let mut classes = vec!["form-input"];

    if has_error {
        classes.push("form-input-error");
    }

    if disabled {
        classes.push("is-disabled");
    }

    if let Some(extra) = extra {
        classes.push(extra);
    }

    classes.join(" ")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_input_class() {
        let class = build_input_class(false, false, &None);
        assert_eq!(class, "form-input");
    }

    #[test]
    fn test_build_input_class_error() {
        let class = build_input_class(true, false, &None);
        assert!(class.contains("form-input-error"));
    }

    #[test]
    fn test_build_input_class_disabled_with_extra() {
        let class = build_input_class(false, true, &Some("w-narrow".to_string()));
        assert!(class.contains("is-disabled"));
        assert!(class.ends_with("w-narrow"));
    }

    #[test]
    fn test_select_option_new() {
        let opt = SelectOption::new("creationTime DESC", "Newest first");
        assert_eq!(opt.value, "creationTime DESC");
        assert_eq!(opt.label, "Newest first");
    }
}
