use dioxus::prelude::*;
use uuid::Uuid;

use crate::class_names::resolve_classes;

const FIELD_BASE: &str = "block w-full rounded-md border bg-white px-3 py-2 text-gray-900 transition-colors";
const FIELD_PLACEHOLDER: &str = "placeholder:text-gray-400";
const FIELD_FOCUS: &str = "focus:outline-none focus:ring-2 focus:ring-offset-0";
const FIELD_DEFAULT_PALETTE: &str = "border-gray-300 focus:border-blue-500 focus:ring-blue-500/20";
const FIELD_ERROR_PALETTE: &str = "border-red-500 focus:border-red-500 focus:ring-red-500/20";
const FIELD_DISABLED: &str = "disabled:cursor-not-allowed disabled:bg-gray-50 disabled:text-gray-500";

const LEFT_ICON_WRAPPER: &str =
    "pointer-events-none absolute inset-y-0 left-0 flex items-center pl-3 text-gray-400";
const RIGHT_ICON_WRAPPER: &str =
    "pointer-events-none absolute inset-y-0 right-0 flex items-center pr-3 text-gray-400";

/// Generate a fresh `input-xxxxxxxx` id from the first 8 hex digits of a v4
/// UUID.
///
/// Collisions are unlikely but not checked for, so the result is only fit
/// for linking a field to its label and messages. It is not a globally
/// unique identity.
pub fn new_input_id() -> String {
    let id = format!("input-{}", &Uuid::new_v4().simple().to_string()[..8]);
    tracing::trace!(%id, "generated input id");
    id
}

/// Which message is shown under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Error,
    Hint,
}

/// The single message displayed below an [`Input`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback<'a> {
    pub kind: FeedbackKind,
    pub message: &'a str,
}

impl<'a> Feedback<'a> {
    /// Pick the message to show. A non-empty error always wins over the hint;
    /// empty strings count as absent.
    pub fn select(error: &'a str, hint: &'a str) -> Option<Self> {
        let present = |s: &'a str| (!s.is_empty()).then_some(s);
        match (present(error), present(hint)) {
            (Some(message), _) => Some(Feedback {
                kind: FeedbackKind::Error,
                message,
            }),
            (None, Some(message)) => Some(Feedback {
                kind: FeedbackKind::Hint,
                message,
            }),
            (None, None) => None,
        }
    }

    /// Id of the message element, also used as the field's
    /// `aria-describedby` target.
    pub fn element_id(&self, input_id: &str) -> String {
        match self.kind {
            FeedbackKind::Error => format!("{input_id}-error"),
            FeedbackKind::Hint => format!("{input_id}-hint"),
        }
    }

    fn class(&self) -> &'static str {
        match self.kind {
            FeedbackKind::Error => "mt-1.5 text-sm text-red-600",
            FeedbackKind::Hint => "mt-1.5 text-sm text-gray-500",
        }
    }
}

/// The caller's id when it is non-empty, otherwise the instance's generated
/// one.
pub fn resolve_input_id(explicit: Option<&str>, generated: &str) -> String {
    explicit
        .filter(|id| !id.is_empty())
        .unwrap_or(generated)
        .to_string()
}

pub fn input_classes(
    has_error: bool,
    has_left_icon: bool,
    has_right_icon: bool,
    class_override: Option<&str>,
) -> String {
    resolve_classes(
        [
            (true, FIELD_BASE),
            (true, FIELD_PLACEHOLDER),
            (true, FIELD_FOCUS),
            (!has_error, FIELD_DEFAULT_PALETTE),
            (has_error, FIELD_ERROR_PALETTE),
            (true, FIELD_DISABLED),
            (has_left_icon, "pl-10"),
            (has_right_icon, "pr-10"),
        ],
        class_override,
    )
}

/// A labeled text field with optional icons and a single error or hint line.
///
/// The field, its label and its message are linked through one id. When
/// `id` is not given, an id is generated on first render and kept for the
/// lifetime of the component.
#[component]
pub fn Input(
    #[props(default)] label: String,
    #[props(default)] error: String,
    #[props(default)] hint: String,
    left_icon: Option<Element>,
    right_icon: Option<Element>,
    id: Option<String>,
    #[props(default = "text".to_string())] input_type: String,
    name: Option<String>,
    value: Option<String>,
    placeholder: Option<String>,
    autocomplete: Option<String>,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] required: bool,
    #[props(default = false)] read_only: bool,
    #[props(default)] on_input: Option<EventHandler<FormEvent>>,
    #[props(default)] on_change: Option<EventHandler<FormEvent>>,
    #[props(default)] on_blur: Option<EventHandler<FocusEvent>>,
    /// Receives the mounted `<input>` node, e.g. to focus it.
    #[props(default)] on_mounted: Option<EventHandler<MountedEvent>>,
    class: Option<String>,
) -> Element {
    let generated_id = use_hook(new_input_id);
    let input_id = resolve_input_id(id.as_deref(), &generated_id);

    let feedback = Feedback::select(&error, &hint);
    let has_error = matches!(feedback, Some(Feedback { kind: FeedbackKind::Error, .. }));
    let described_by = feedback.map(|f| f.element_id(&input_id));
    let message_id = described_by.clone();
    let aria_invalid = if has_error { "true" } else { "false" };

    let field_class = input_classes(
        has_error,
        left_icon.is_some(),
        right_icon.is_some(),
        class.as_deref(),
    );

    rsx! {
        div { class: "w-full",
            if !label.is_empty() {
                label {
                    r#for: "{input_id}",
                    class: "mb-1.5 block text-sm font-medium text-gray-700",
                    "{label}"
                }
            }
            div { class: "relative",
                if let Some(icon) = left_icon {
                    div { class: LEFT_ICON_WRAPPER, {icon} }
                }
                input {
                    id: "{input_id}",
                    r#type: "{input_type}",
                    class: field_class,
                    name: name,
                    value: value,
                    placeholder: placeholder,
                    autocomplete: autocomplete,
                    disabled: disabled,
                    required: required,
                    readonly: read_only,
                    "aria-invalid": aria_invalid,
                    "aria-describedby": described_by,
                    oninput: move |evt| {
                        if let Some(handler) = on_input {
                            handler.call(evt);
                        }
                    },
                    onchange: move |evt| {
                        if let Some(handler) = on_change {
                            handler.call(evt);
                        }
                    },
                    onblur: move |evt| {
                        if let Some(handler) = on_blur {
                            handler.call(evt);
                        }
                    },
                    onmounted: move |evt| {
                        if let Some(handler) = on_mounted {
                            handler.call(evt);
                        }
                    },
                }
                if let Some(icon) = right_icon {
                    div { class: RIGHT_ICON_WRAPPER, {icon} }
                }
            }
            if let (Some(feedback), Some(message_id)) = (feedback, message_id) {
                p { id: "{message_id}", class: feedback.class(), {feedback.message} }
            }
        }
    }
}
