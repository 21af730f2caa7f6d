use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdArrowRight, LdLock, LdMail, LdSearch};
use dioxus_free_icons::Icon;
use ui_patterns::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardFooter, CardHeader, CardPadding,
    CardVariant, FooterAlign, Input,
};

const MIN_PASSWORD_LEN: usize = 8;

/// Validation message for the demo password field. Nothing is reported
/// until the user has typed something.
pub fn password_error(value: &str) -> String {
    if !value.is_empty() && value.chars().count() < MIN_PASSWORD_LEN {
        format!("Password must be at least {MIN_PASSWORD_LEN} characters")
    } else {
        String::new()
    }
}

#[component]
fn Section(title: String, children: Element) -> Element {
    rsx! {
        section { class: "space-y-4",
            h2 { class: "text-lg font-medium text-gray-700", "{title}" }
            {children}
        }
    }
}

#[component]
pub fn ButtonSection() -> Element {
    let mut saving = use_signal(|| false);

    rsx! {
        Section { title: "Buttons",
            div { class: "flex flex-wrap items-center gap-3",
                for variant in ButtonVariant::ALL {
                    Button { key: "{variant.as_str()}", variant: variant, "{variant.as_str()}" }
                }
            }
            div { class: "flex flex-wrap items-center gap-3",
                for size in ButtonSize::ALL {
                    Button {
                        key: "{size.as_str()}",
                        variant: ButtonVariant::Outline,
                        size: size,
                        "Size {size.as_str()}"
                    }
                }
            }
            div { class: "flex flex-wrap items-center gap-3",
                Button {
                    is_loading: saving(),
                    left_icon: rsx! { Icon::<LdLock> { icon: LdLock, width: 16, height: 16 } },
                    right_icon: rsx! { Icon::<LdArrowRight> { icon: LdArrowRight, width: 16, height: 16 } },
                    onclick: move |_| saving.set(true),
                    "Save"
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| saving.set(false),
                    "Reset"
                }
                Button { variant: ButtonVariant::Danger, disabled: true, "Disabled" }
            }
        }
    }
}

#[component]
pub fn CardSection() -> Element {
    rsx! {
        Section { title: "Cards",
            Card { variant: CardVariant::Elevated,
                CardHeader {
                    title: "Card Title",
                    description: "Card description goes here",
                    action: rsx! {
                        Button { size: ButtonSize::Sm, "Action" }
                    },
                }
                CardContent {
                    p { class: "text-gray-700", "Card content goes here" }
                }
                CardFooter {
                    Button { variant: ButtonVariant::Ghost, "Cancel" }
                    Button { "Save" }
                }
            }
            div { class: "grid gap-4 sm:grid-cols-3",
                for variant in CardVariant::ALL {
                    Card {
                        key: "{variant.as_str()}",
                        variant: variant,
                        padding: CardPadding::Md,
                        p { class: "text-sm text-gray-700", "{variant.as_str()}" }
                    }
                }
            }
            Card { variant: CardVariant::Outlined,
                CardContent { class: "pt-4".to_string(),
                    "Footer rows can spread their items apart."
                }
                CardFooter { align: FooterAlign::Between,
                    Button { variant: ButtonVariant::Secondary, size: ButtonSize::Sm, "Back" }
                    Button { size: ButtonSize::Sm, "Next" }
                }
            }
        }
    }
}

/// Password input whose error replaces the hint while the value is too short.
#[component]
fn PasswordField(password: Signal<String>) -> Element {
    let mut password = password;
    let error = password_error(&password.read());

    rsx! {
        Input {
            label: "Password",
            input_type: "password",
            value: password(),
            error: error,
            hint: "Use 8 or more characters",
            required: true,
            on_input: move |evt: FormEvent| password.set(evt.value()),
        }
    }
}

#[component]
pub fn InputSection() -> Element {
    let password = use_signal(String::new);

    rsx! {
        Section { title: "Inputs",
            div { class: "max-w-sm space-y-6",
                Input {
                    label: "Email",
                    input_type: "email",
                    placeholder: "you@example.com".to_string(),
                    autocomplete: "email".to_string(),
                    hint: "We'll never share your email",
                    left_icon: rsx! { Icon::<LdMail> { icon: LdMail, width: 16, height: 16 } },
                }
                PasswordField { password: password }
                Input {
                    id: "gallery-search".to_string(),
                    input_type: "search",
                    placeholder: "Search components".to_string(),
                    right_icon: rsx! { Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 } },
                }
                Input {
                    label: "Disabled",
                    value: "Read only value".to_string(),
                    disabled: true,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn password_error_only_after_typing() {
        assert_eq!(password_error(""), "");
        assert_eq!(password_error("hunter2"), "Password must be at least 8 characters");
        assert_eq!(password_error("hunter22"), "");
    }

    #[test]
    fn card_section_renders_usage_example() {
        let html = render(|| rsx! { CardSection {} });
        assert!(html.contains("Card Title"));
        assert!(html.contains("Card description goes here"));
        assert!(html.contains("justify-between"));
        assert!(html.contains("h-8 px-3 text-sm"));
    }

    #[test]
    fn input_section_starts_without_errors() {
        let html = render(|| rsx! { InputSection {} });
        assert!(!html.contains("text-red-600"));
        assert!(html.contains("Use 8 or more characters"));
        assert!(html.contains("id=\"gallery-search\""));
    }

    #[test]
    fn short_password_swaps_hint_for_error() {
        fn app() -> Element {
            let password = use_signal(|| "hunter2".to_string());
            rsx! { PasswordField { password: password } }
        }

        let html = render(app);
        assert!(html.contains("Password must be at least 8 characters"));
        assert!(html.contains("text-red-600"));
        assert!(!html.contains("Use 8 or more characters"));
        assert!(html.contains("aria-invalid=\"true\""));
    }

    #[test]
    fn long_enough_password_shows_hint() {
        fn app() -> Element {
            let password = use_signal(|| "correct horse".to_string());
            rsx! { PasswordField { password: password } }
        }

        let html = render(app);
        assert!(!html.contains("text-red-600"));
        assert!(html.contains("Use 8 or more characters"));
    }

    #[test]
    fn button_section_lists_every_variant() {
        let html = render(|| rsx! { ButtonSection {} });
        for variant in ButtonVariant::ALL {
            assert!(html.contains(variant.as_str()));
        }
        assert!(!html.contains("animate-spin"));
    }
}
