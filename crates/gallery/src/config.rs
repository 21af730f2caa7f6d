use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::OnceLock;

static CONFIG: OnceLock<GalleryConfig> = OnceLock::new();

/// File name of the config, looked up relative to the working directory.
const CONFIG_PATH: &str = "gallery.toml";

/// Where to look for the config, in order: the working directory, then the
/// gallery crate directory so `cargo run -p gallery` from the workspace root
/// still finds the shipped file.
fn config_candidates() -> Vec<PathBuf> {
    vec![
        PathBuf::from(CONFIG_PATH),
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(CONFIG_PATH),
    ]
}

fn default_title() -> String {
    "UI patterns".to_string()
}

fn enabled() -> bool {
    true
}

/// Which showcase sections the gallery renders. Every section is on unless
/// the config file turns it off.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GallerySections {
    #[serde(default = "enabled")]
    pub buttons: bool,
    #[serde(default = "enabled")]
    pub cards: bool,
    #[serde(default = "enabled")]
    pub inputs: bool,
}

impl Default for GallerySections {
    fn default() -> Self {
        Self {
            buttons: true,
            cards: true,
            inputs: true,
        }
    }
}

/// Top-level structure of `gallery.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub sections: GallerySections,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            sections: GallerySections::default(),
        }
    }
}

/// Parse a config document, falling back to defaults when it is malformed.
pub fn parse_config(contents: &str) -> GalleryConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(path = CONFIG_PATH, error = %e, "failed to parse gallery config, using defaults");
        GalleryConfig::default()
    })
}

/// Read `gallery.toml` once and keep it for the rest of the process. Later
/// calls are no-ops.
///
/// The first readable file from [`config_candidates`] wins. When none is
/// readable (always the case on the web target) the defaults are used.
pub fn load_gallery_config() {
    CONFIG.get_or_init(|| {
        let found = config_candidates()
            .into_iter()
            .find_map(|path| std::fs::read_to_string(&path).ok().map(|c| (path, c)));
        let config = match found {
            Some((path, contents)) => {
                tracing::debug!(path = %path.display(), "reading gallery config");
                parse_config(&contents)
            }
            None => {
                tracing::warn!(path = CONFIG_PATH, "gallery config not found, using defaults");
                GalleryConfig::default()
            }
        };
        tracing::info!(?config, "gallery config loaded");
        config
    });
}

/// The loaded config, or the defaults if `load_gallery_config()` has not run.
pub fn gallery_config() -> GalleryConfig {
    CONFIG.get().cloned().unwrap_or_default()
}
