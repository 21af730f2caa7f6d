use std::str::FromStr;

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::class_names::resolve_classes;
use crate::variant::UnknownVariant;

const BASE: &str = "inline-flex items-center justify-center gap-2 rounded-md font-medium transition-colors";
const FOCUS: &str = "focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-offset-2";
const INERT: &str = "opacity-50 cursor-not-allowed pointer-events-none";

/// Visual variant for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Danger,
    Outline,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 5] = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Ghost,
        ButtonVariant::Danger,
        ButtonVariant::Outline,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Ghost => "ghost",
            ButtonVariant::Danger => "danger",
            ButtonVariant::Outline => "outline",
        }
    }

    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-blue-600 text-white hover:bg-blue-700 focus-visible:ring-blue-500"
            }
            ButtonVariant::Secondary => {
                "bg-gray-100 text-gray-900 hover:bg-gray-200 focus-visible:ring-gray-500"
            }
            ButtonVariant::Ghost => {
                "bg-transparent text-gray-700 hover:bg-gray-100 focus-visible:ring-gray-500"
            }
            ButtonVariant::Danger => {
                "bg-red-600 text-white hover:bg-red-700 focus-visible:ring-red-500"
            }
            ButtonVariant::Outline => {
                "border-2 border-gray-300 bg-transparent text-gray-700 hover:bg-gray-50 focus-visible:ring-gray-500"
            }
        }
    }
}

impl FromStr for ButtonVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ButtonVariant::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("button variant", s))
    }
}

/// Height, padding and font size of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub const ALL: [ButtonSize; 3] = [ButtonSize::Sm, ButtonSize::Md, ButtonSize::Lg];

    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonSize::Sm => "sm",
            ButtonSize::Md => "md",
            ButtonSize::Lg => "lg",
        }
    }

    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Sm => "h-8 px-3 text-sm",
            ButtonSize::Md => "h-10 px-4 text-base",
            ButtonSize::Lg => "h-12 px-6 text-lg",
        }
    }
}

impl FromStr for ButtonSize {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ButtonSize::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("button size", s))
    }
}

/// The HTML `type` of the rendered `<button>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
            ButtonType::Reset => "reset",
        }
    }
}

/// A button is inert while disabled or while an action is in flight.
pub fn is_effectively_disabled(disabled: bool, is_loading: bool) -> bool {
    disabled || is_loading
}

/// Class string for a button with the given state.
pub fn button_classes(
    variant: ButtonVariant,
    size: ButtonSize,
    inert: bool,
    class_override: Option<&str>,
) -> String {
    resolve_classes(
        [
            (true, BASE),
            (true, FOCUS),
            (true, variant.class()),
            (true, size.class()),
            (inert, INERT),
        ],
        class_override,
    )
}

/// A Tailwind-styled button with optional icons and a loading state.
///
/// While `is_loading` is set the button is disabled, the spinner takes the
/// place of `left_icon` and `right_icon` is hidden.
#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    #[props(default = false)]
    pub is_loading: bool,
    #[props(default = false)]
    pub disabled: bool,
    pub left_icon: Option<Element>,
    pub right_icon: Option<Element>,
    #[props(default)]
    pub button_type: ButtonType,
    pub name: Option<String>,
    pub value: Option<String>,
    pub aria_label: Option<String>,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    /// Extra classes appended after the computed ones.
    pub class: Option<String>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let ButtonProps {
        variant,
        size,
        is_loading,
        disabled,
        left_icon,
        right_icon,
        button_type,
        name,
        value,
        aria_label,
        onclick,
        class,
        children,
    } = props;

    let inert = is_effectively_disabled(disabled, is_loading);
    let class = button_classes(variant, size, inert, class.as_deref());
    let busy = is_loading.then_some("true");

    rsx! {
        button {
            r#type: button_type.as_str(),
            class: class,
            disabled: inert,
            name: name,
            value: value,
            "aria-label": aria_label,
            "aria-busy": busy,
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            if is_loading {
                Spinner {}
            } else {
                {left_icon}
            }
            {children}
            if !is_loading {
                {right_icon}
            }
        }
    }
}

/// Spinning progress glyph shown inside a loading [`Button`].
#[component]
pub fn Spinner() -> Element {
    rsx! {
        svg {
            class: "h-4 w-4 animate-spin",
            "xmlns": "http://www.w3.org/2000/svg",
            fill: "none",
            view_box: "0 0 24 24",
            "aria-hidden": "true",
            circle {
                class: "opacity-25",
                cx: "12",
                cy: "12",
                r: "10",
                stroke: "currentColor",
                stroke_width: "4",
            }
            path {
                class: "opacity-75",
                fill: "currentColor",
                d: "M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z",
            }
        }
    }
}
