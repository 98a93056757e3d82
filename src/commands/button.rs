//! Render a button from command-line flags

use crate::components::{self, ButtonConfig};

/// Flags accepted by the `button` command
#[derive(Debug, Clone, Default)]
pub struct ButtonArgs {
    pub color: String,
    pub label: Option<String>,
    pub link: Option<String>,
    pub external: bool,
    pub download: bool,
    pub disabled: bool,
    pub white_text_hover: bool,
    pub class: Option<String>,
}

impl From<ButtonArgs> for ButtonConfig {
    fn from(args: ButtonArgs) -> Self {
        ButtonConfig {
            label: args.label,
            color: args.color,
            white_text_hover: args.white_text_hover,
            disabled: args.disabled,
            link: args.link,
            external: args.external,
            download: args.download,
            action: None,
            class_name: args.class,
        }
    }
}

/// Render the button's markup
pub fn run(args: ButtonArgs) -> String {
    let config = ButtonConfig::from(args);
    tracing::debug!("Rendering {:?} as {:?}", config, components::classify(&config));
    components::render(&config)
}
