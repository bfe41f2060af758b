//! `<select>` that navigates on change (wired by the layout script).

use dioxus::prelude::*;

#[derive(Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavSelectProps {
    pub id: String,
    pub label: String,
    pub options: Vec<SelectOption>,
    pub selected: String,
    /// Path prefix the selected value is appended to
    #[props(default)]
    pub navigate: Option<String>,
    /// Query parameter set to the selected value instead
    #[props(default)]
    pub param: Option<String>,
}

#[component]
pub fn NavSelect(props: NavSelectProps) -> Element {
    let has_selection = props.options.iter().any(|o| o.value == props.selected);

    rsx! {
        label { r#for: "{props.id}",
            "{props.label}"
            select {
                id: "{props.id}",
                "data-navigate": props.navigate.clone(),
                "data-param": props.param.clone(),
                if !has_selection {
                    option { value: "", selected: true, disabled: true, "{props.label}" }
                }
                for opt in props.options.iter() {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == props.selected,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}
