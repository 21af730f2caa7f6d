//! Tailwind-styled reference components for Dioxus: Button, the Card family
//! and Input.

pub mod class_names;
pub mod components;
pub mod variant;

pub use class_names::resolve_classes;
pub use components::*;
pub use variant::UnknownVariant;
