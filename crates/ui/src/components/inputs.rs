//! # Input Components
//!
//! Reusable form inputs for the console screens: single-line text,
//! multi-line text, and a dropdown select. Styling comes from the
//! semantic classes in `assets/styles/main.css`.

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

    /// Input type (text, email, password, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Single-line text input with label and inline error
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let input_class = field_input_class(props.error.is_some());

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
                oninput: move |e| props.on_change.call(e.value()),
            }

            if let Some(error) = &props.error {
                p { class: "input-error", "{error}" }
            }
        }
    }
}

// ============================================================================
// Text Area Component
// ============================================================================

/// Properties for TextArea component
#[derive(Props, Clone, PartialEq)]
pub struct TextAreaProps {
    /// Input value
    pub value: String,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Error message
    #[props(default)]
    pub error: Option<String>,

    /// Number of visible rows
    #[props(default = 3)]
    pub rows: usize,

    /// Whether required
    #[props(default = false)]
    pub required: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Multi-line text input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let input_class = field_input_class(props.error.is_some());

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

            textarea {
                class: "{input_class}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                oninput: move |e| props.on_change.call(e.value()),
                "{props.value}"
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

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Dropdown select
#[component]
pub fn Select(props: SelectProps) -> Element {
    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label { class: "input-label", "{label}" }
            }

            select {
                class: "form-select",
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
// Helper Functions
// ============================================================================

/// Build the input class string
fn field_input_class(has_error: bool) -> &'static str {
    if has_error {
        "form-input form-input-error"
    } else {
        "form-input"
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_input_class() {
        assert_eq!(field_input_class(false), "form-input");
        assert!(field_input_class(true).contains("form-input-error"));
    }

    #[test]
    fn test_select_option_new() {
        let opt = SelectOption::new("espresso", "Espresso");
        assert_eq!(opt.value, "espresso");
        assert_eq!(opt.label, "Espresso");
    }
}
