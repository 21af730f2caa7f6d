use std::str::FromStr;

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::class_names::resolve_classes;
use crate::variant::UnknownVariant;

/// Surface treatment of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardVariant {
    #[default]
    Elevated,
    Outlined,
    Flat,
}

impl CardVariant {
    pub const ALL: [CardVariant; 3] = [CardVariant::Elevated, CardVariant::Outlined, CardVariant::Flat];

    pub fn as_str(&self) -> &'static str {
        match self {
            CardVariant::Elevated => "elevated",
            CardVariant::Outlined => "outlined",
            CardVariant::Flat => "flat",
        }
    }

    fn class(&self) -> &'static str {
        match self {
            CardVariant::Elevated => "shadow-md",
            CardVariant::Outlined => "border border-gray-200",
            CardVariant::Flat => "bg-gray-50",
        }
    }
}

impl FromStr for CardVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CardVariant::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("card variant", s))
    }
}

/// Inner padding of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardPadding {
    #[default]
    None,
    Sm,
    Md,
    Lg,
}

impl CardPadding {
    pub const ALL: [CardPadding; 4] = [CardPadding::None, CardPadding::Sm, CardPadding::Md, CardPadding::Lg];

    pub fn as_str(&self) -> &'static str {
        match self {
            CardPadding::None => "none",
            CardPadding::Sm => "sm",
            CardPadding::Md => "md",
            CardPadding::Lg => "lg",
        }
    }

    fn class(&self) -> &'static str {
        match self {
            CardPadding::None => "",
            CardPadding::Sm => "p-3",
            CardPadding::Md => "p-4",
            CardPadding::Lg => "p-6",
        }
    }
}

impl FromStr for CardPadding {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CardPadding::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("card padding", s))
    }
}

/// Horizontal distribution of the items in a [`CardFooter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterAlign {
    Left,
    Center,
    #[default]
    Right,
    Between,
}

impl FooterAlign {
    pub const ALL: [FooterAlign; 4] = [
        FooterAlign::Left,
        FooterAlign::Center,
        FooterAlign::Right,
        FooterAlign::Between,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FooterAlign::Left => "left",
            FooterAlign::Center => "center",
            FooterAlign::Right => "right",
            FooterAlign::Between => "between",
        }
    }

    fn class(&self) -> &'static str {
        match self {
            FooterAlign::Left => "justify-start",
            FooterAlign::Center => "justify-center",
            FooterAlign::Right => "justify-end",
            FooterAlign::Between => "justify-between",
        }
    }
}

impl FromStr for FooterAlign {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FooterAlign::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("footer alignment", s))
    }
}

pub fn card_classes(variant: CardVariant, padding: CardPadding, class_override: Option<&str>) -> String {
    resolve_classes(
        [
            (true, "rounded-lg bg-white"),
            (true, variant.class()),
            (true, padding.class()),
        ],
        class_override,
    )
}

pub fn card_footer_classes(align: FooterAlign, class_override: Option<&str>) -> String {
    resolve_classes(
        [
            (true, "flex items-center gap-2 border-t border-gray-100 p-4"),
            (true, align.class()),
        ],
        class_override,
    )
}

/// A rounded card container.
#[component]
pub fn Card(
    #[props(default)] variant: CardVariant,
    #[props(default)] padding: CardPadding,
    class: Option<String>,
    children: Element,
) -> Element {
    let class = card_classes(variant, padding, class.as_deref());

    rsx! {
        div { class: class, {children} }
    }
}

/// Header row of a Card: title and description on the left, an optional
/// action slot on the right.
#[component]
pub fn CardHeader(
    #[props(default)] title: String,
    #[props(default)] description: String,
    action: Option<Element>,
    class: Option<String>,
    children: Element,
) -> Element {
    let class = resolve_classes(
        [(true, "flex items-start justify-between gap-4 p-4")],
        class.as_deref(),
    );

    rsx! {
        div { class: class,
            div { class: "space-y-1",
                if !title.is_empty() {
                    h3 { class: "text-lg font-semibold text-gray-900", "{title}" }
                }
                if !description.is_empty() {
                    p { class: "text-sm text-gray-500", "{description}" }
                }
                {children}
            }
            if let Some(action) = action {
                div { class: "shrink-0", {action} }
            }
        }
    }
}

/// Body of a Card. Has no top padding so it sits flush under a header.
#[component]
pub fn CardContent(class: Option<String>, children: Element) -> Element {
    let class = resolve_classes([(true, "p-4 pt-0")], class.as_deref());

    rsx! {
        div { class: class, {children} }
    }
}

/// Footer row of a Card, separated by a top border.
#[component]
pub fn CardFooter(
    #[props(default)] align: FooterAlign,
    class: Option<String>,
    children: Element,
) -> Element {
    let class = card_footer_classes(align, class.as_deref());

    rsx! {
        div { class: class, {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        assert_eq!(CardVariant::default(), CardVariant::Elevated);
        assert_eq!(CardPadding::default(), CardPadding::None);
        assert_eq!(FooterAlign::default(), FooterAlign::Right);
    }

    #[test]
    fn keys_parse() {
        for align in FooterAlign::ALL {
            assert_eq!(align.as_str().parse::<FooterAlign>(), Ok(align));
        }
        assert_eq!("outlined".parse::<CardVariant>(), Ok(CardVariant::Outlined));
        assert_eq!("none".parse::<CardPadding>(), Ok(CardPadding::None));
        assert!("raised".parse::<CardVariant>().is_err());
    }

    #[test]
    fn card_classes_per_variant() {
        assert_eq!(
            card_classes(CardVariant::Elevated, CardPadding::None, None),
            "rounded-lg bg-white shadow-md"
        );
        assert_eq!(
            card_classes(CardVariant::Outlined, CardPadding::Md, None),
            "rounded-lg bg-white border border-gray-200 p-4"
        );
        assert_eq!(
            card_classes(CardVariant::Flat, CardPadding::Lg, Some("max-w-sm")),
            "rounded-lg bg-white bg-gray-50 p-6 max-w-sm"
        );
    }

    #[test]
    fn no_padding_leaves_no_gap() {
        for variant in CardVariant::ALL {
            let classes = card_classes(variant, CardPadding::None, Some("w-full"));
            assert!(!classes.contains("  "));
            assert!(!classes.contains("p-"));
            assert!(classes.ends_with(" w-full"));
        }
    }

    #[test]
    fn footer_alignment_classes() {
        assert!(card_footer_classes(FooterAlign::Between, None).ends_with("p-4 justify-between"));
        assert!(card_footer_classes(FooterAlign::Left, None).ends_with("justify-start"));
        assert!(card_footer_classes(FooterAlign::Center, None).ends_with("justify-center"));
        assert!(card_footer_classes(FooterAlign::default(), None).ends_with("justify-end"));
    }

    #[test]
    fn header_renders_title_description_and_action() {
        let html = dioxus_ssr::render_element(rsx! {
            CardHeader {
                title: "Card Title".to_string(),
                description: "Card description goes here".to_string(),
                action: rsx! { button { "Action" } },
            }
        });
        assert!(html.contains("<h3 class=\"text-lg font-semibold text-gray-900\">"));
        assert!(html.contains("Card Title"));
        assert!(html.contains("Card description goes here"));
        let action = html.find("<div class=\"shrink-0\">").unwrap();
        assert!(html[action..].contains("Action"));
    }

    #[test]
    fn header_omits_absent_parts() {
        let html = dioxus_ssr::render_element(rsx! {
            CardHeader { span { "custom" } }
        });
        assert!(!html.contains("<h3"));
        assert!(!html.contains("text-sm text-gray-500"));
        assert!(!html.contains("shrink-0"));
        assert!(html.contains("custom"));
    }

    #[test]
    fn composed_card_nests_sections() {
        let html = dioxus_ssr::render_element(rsx! {
            Card { variant: CardVariant::Outlined,
                CardHeader { title: "Title".to_string() }
                CardContent { p { "Body" } }
                CardFooter { align: FooterAlign::Between, "Footer" }
            }
        });
        assert!(html.starts_with("<div class=\"rounded-lg bg-white border border-gray-200\">"));
        assert!(html.contains("<div class=\"p-4 pt-0\">"));
        assert!(html.contains("border-t border-gray-100 p-4 justify-between"));
        let header = html.find("Title").unwrap();
        let body = html.find("Body").unwrap();
        let footer = html.find("Footer").unwrap();
        assert!(header < body && body < footer);
    }
}
