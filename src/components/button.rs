//! Button component
//!
//! A [`ButtonConfig`] resolves to exactly one [`ButtonVariant`], first match wins:
//!
//! 1. `disabled` renders a static, dimmed element and ignores everything else
//! 2. no `link` renders a `<button>` that runs `action` when activated
//! 3. `link` plus `external` or `download` opens a new browsing context with a
//!    trailing icon
//! 4. any other `link` is an in-app route handled by the client-side router
//!
//! Inconsistent flag combinations are never rejected; they fall to whichever
//! variant comes first.

use std::fmt;
use std::sync::Arc;

use super::html_escape;
use super::icon::Icon;

/// Callback run when an action button is activated
pub type Action = Arc<dyn Fn() + Send + Sync>;

/// Inputs for a single button render
#[derive(Clone, Default)]
pub struct ButtonConfig {
    pub label: Option<String>,
    /// Accent colour used as the hover background
    pub color: String,
    /// Hover text is white instead of black
    pub white_text_hover: bool,
    pub disabled: bool,
    pub link: Option<String>,
    pub external: bool,
    pub download: bool,
    pub action: Option<Action>,
    /// Extra class appended for external styling
    pub class_name: Option<String>,
}

impl fmt::Debug for ButtonConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonConfig")
            .field("label", &self.label)
            .field("color", &self.color)
            .field("white_text_hover", &self.white_text_hover)
            .field("disabled", &self.disabled)
            .field("link", &self.link)
            .field("external", &self.external)
            .field("download", &self.download)
            .field("action", &self.action.as_ref().map(|_| "Fn()"))
            .field("class_name", &self.class_name)
            .finish()
    }
}

impl ButtonConfig {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            ..Self::default()
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn white_text_hover(mut self, white: bool) -> Self {
        self.white_text_hover = white;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn external(mut self, external: bool) -> Self {
        self.external = external;
        self
    }

    pub fn download(mut self, download: bool) -> Self {
        self.download = download;
        self
    }

    pub fn action<F>(mut self, action: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }
}

/// The one shape a button takes, with only the fields that shape uses
#[derive(Clone)]
pub enum ButtonVariant<'a> {
    Disabled,
    Action { action: Option<&'a Action> },
    ExternalOrDownload { href: &'a str, download: bool },
    InternalLink { href: &'a str },
}

impl fmt::Debug for ButtonVariant<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ButtonVariant::Disabled => write!(f, "Disabled"),
            ButtonVariant::Action { action } => f
                .debug_struct("Action")
                .field("action", &action.map(|_| "Fn()"))
                .finish(),
            ButtonVariant::ExternalOrDownload { href, download } => f
                .debug_struct("ExternalOrDownload")
                .field("href", href)
                .field("download", download)
                .finish(),
            ButtonVariant::InternalLink { href } => {
                f.debug_struct("InternalLink").field("href", href).finish()
            }
        }
    }
}

impl ButtonVariant<'_> {
    /// Modifier class for the variant
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Disabled => "button--disabled",
            ButtonVariant::Action { .. } => "button--action",
            ButtonVariant::ExternalOrDownload { .. } => "button--external",
            ButtonVariant::InternalLink { .. } => "button--link",
        }
    }

    pub fn icon(&self) -> Option<Icon> {
        match self {
            ButtonVariant::ExternalOrDownload { download: true, .. } => Some(Icon::Download),
            ButtonVariant::ExternalOrDownload { .. } => Some(Icon::ExternalLink),
            _ => None,
        }
    }
}

/// Pick the variant for a config
pub fn classify(config: &ButtonConfig) -> ButtonVariant<'_> {
    if config.disabled {
        return ButtonVariant::Disabled;
    }

    // An empty link counts as no link
    let link = config.link.as_deref().filter(|l| !l.is_empty());

    match link {
        None => ButtonVariant::Action {
            action: config.action.as_ref(),
        },
        Some(href) if config.external || config.download => ButtonVariant::ExternalOrDownload {
            href,
            download: config.download,
        },
        Some(href) => ButtonVariant::InternalLink { href },
    }
}

/// A colour value cut down to a single declaration value
fn css_token(value: &str) -> &str {
    value
        .split(|c| matches!(c, ';' | '{' | '}'))
        .next()
        .unwrap_or_default()
        .trim()
}

/// Render a button to HTML
pub fn render(config: &ButtonConfig) -> String {
    let variant = classify(config);
    let label = config.label.as_deref().map(html_escape).unwrap_or_default();

    let mut class = format!("button {}", variant.class());
    if let Some(extra) = config.class_name.as_deref().filter(|c| !c.is_empty()) {
        class.push(' ');
        class.push_str(&html_escape(extra));
    }

    let style = format!(
        "--button-accent: {}; --button-hover-text: var({})",
        html_escape(css_token(&config.color)),
        if config.white_text_hover {
            "--white"
        } else {
            "--black"
        }
    );

    let icon = variant.icon().map(|i| i.svg()).unwrap_or_default();

    match variant {
        ButtonVariant::Disabled => format!(
            r#"<div class="{}" aria-disabled="true">{}</div>"#,
            class, label
        ),
        ButtonVariant::Action { .. } => format!(
            r#"<button type="button" class="{}" style="{}">{}</button>"#,
            class, style, label
        ),
        ButtonVariant::ExternalOrDownload { href, download } => {
            format!(
                r#"<a class="{}" style="{}" href="{}" target="_blank" rel="noopener noreferrer external"{}>{}{}</a>"#,
                class,
                style,
                html_escape(href),
                if download { " download" } else { "" },
                label,
                icon
            )
        }
        ButtonVariant::InternalLink { href } => format!(
            r#"<a class="{}" style="{}" href="{}" data-router-link>{}</a>"#,
            class,
            style,
            html_escape(href),
            label
        ),
    }
}

/// Client-side navigation primitive a button hands destinations to
pub trait Navigator {
    /// Route within the app without a page reload
    fn navigate(&mut self, to: &str);

    /// Open `href` in a new browsing context, saving it instead when `download` is set
    fn open_new_context(&mut self, href: &str, download: bool);
}

/// A navigation a [`Navigator`] was asked to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Route(String),
    NewContext { href: String, download: bool },
}

/// In-memory navigator that records every request
#[derive(Debug, Default)]
pub struct History {
    pub entries: Vec<Navigation>,
}

impl Navigator for History {
    fn navigate(&mut self, to: &str) {
        self.entries.push(Navigation::Route(to.to_string()));
    }

    fn open_new_context(&mut self, href: &str, download: bool) {
        self.entries.push(Navigation::NewContext {
            href: href.to_string(),
            download,
        });
    }
}

/// Activate a button the way a click would
pub fn activate(config: &ButtonConfig, navigator: &mut dyn Navigator) {
    match classify(config) {
        ButtonVariant::Disabled => {}
        ButtonVariant::Action { action } => {
            if let Some(action) = action {
                action();
            }
        }
        ButtonVariant::ExternalOrDownload { href, download } => {
            navigator.open_new_context(href, download)
        }
        ButtonVariant::InternalLink { href } => navigator.navigate(href),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_action(counter: &Arc<AtomicUsize>) -> impl Fn() + Send + Sync + 'static {
        let counter = Arc::clone(counter);
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// Every combination of the boolean flags, with and without a link
    fn all_configs(counter: &Arc<AtomicUsize>) -> Vec<ButtonConfig> {
        let mut configs = Vec::new();
        for bits in 0..32u8 {
            let mut config = ButtonConfig::new("#ff0000")
                .label("Label")
                .disabled(bits & 1 != 0)
                .external(bits & 2 != 0)
                .download(bits & 4 != 0)
                .white_text_hover(bits & 8 != 0);
            if bits & 16 != 0 {
                config = config.link("/target");
            }
            configs.push(config.action(counting_action(counter)));
        }
        configs
    }

    #[test]
    fn test_disabled_wins_over_everything() {
        let counter = Arc::new(AtomicUsize::new(0));
        for config in all_configs(&counter).into_iter().filter(|c| c.disabled) {
            assert!(matches!(classify(&config), ButtonVariant::Disabled));

            let html = render(&config);
            assert!(html.starts_with("<div"));
            assert!(!html.contains("href"));
            assert!(!html.contains("style="));

            let mut history = History::default();
            activate(&config, &mut history);
            assert!(history.entries.is_empty());
        }
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_no_link_is_action() {
        let counter = Arc::new(AtomicUsize::new(0));
        let configs: Vec<_> = all_configs(&counter)
            .into_iter()
            .filter(|c| !c.disabled && c.link.is_none())
            .collect();
        assert_eq!(configs.len(), 8);

        for config in &configs {
            assert!(matches!(
                classify(config),
                ButtonVariant::Action { action: Some(_) }
            ));

            let html = render(config);
            assert!(html.starts_with(r#"<button type="button""#));
            assert!(!html.contains("href"));

            let before = counter.load(Ordering::SeqCst);
            let mut history = History::default();
            activate(config, &mut history);
            assert_eq!(counter.load(Ordering::SeqCst), before + 1);
            assert!(history.entries.is_empty());
        }
    }

    #[test]
    fn test_external_or_download() {
        let counter = Arc::new(AtomicUsize::new(0));
        for config in all_configs(&counter)
            .into_iter()
            .filter(|c| !c.disabled && c.link.is_some() && (c.external || c.download))
        {
            let variant = classify(&config);
            assert!(matches!(
                variant,
                ButtonVariant::ExternalOrDownload { href: "/target", .. }
            ));
            let expected_icon = if config.download {
                Icon::Download
            } else {
                Icon::ExternalLink
            };
            assert_eq!(variant.icon(), Some(expected_icon));

            let html = render(&config);
            assert!(html.contains(r#"target="_blank""#));
            assert!(html.contains(r#"rel="noopener noreferrer external""#));
            assert!(html.contains(&format!("icon-{}", expected_icon.name())));
            assert_eq!(html.contains(" download>"), config.download);

            let mut history = History::default();
            activate(&config, &mut history);
            assert_eq!(
                history.entries,
                vec![Navigation::NewContext {
                    href: "/target".to_string(),
                    download: config.download
                }]
            );
        }
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_internal_link() {
        let counter = Arc::new(AtomicUsize::new(0));
        for config in all_configs(&counter)
            .into_iter()
            .filter(|c| !c.disabled && c.link.is_some() && !c.external && !c.download)
        {
            let variant = classify(&config);
            assert!(matches!(
                variant,
                ButtonVariant::InternalLink { href: "/target" }
            ));
            assert_eq!(variant.icon(), None);

            let html = render(&config);
            assert!(html.contains(r#"href="/target""#));
            assert!(!html.contains("target=\"_blank\""));
            assert!(!html.contains("<svg"));

            let mut history = History::default();
            activate(&config, &mut history);
            assert_eq!(
                history.entries,
                vec![Navigation::Route("/target".to_string())]
            );
        }
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_download_scenario() {
        let config = ButtonConfig::new("#fff")
            .label("Download")
            .link("/f.pdf")
            .download(true);
        let html = render(&config);
        assert!(html.starts_with("<a "));
        assert!(html.contains(r#"href="/f.pdf""#));
        assert!(html.contains(" download>Download<svg"));
        assert!(html.contains("icon-download"));
    }

    #[test]
    fn test_internal_link_scenario() {
        let config = ButtonConfig::new("#000").label("Go").link("/about");
        assert_eq!(
            render(&config),
            r#"<a class="button button--link" style="--button-accent: #000; --button-hover-text: var(--black)" href="/about" data-router-link>Go</a>"#
        );
    }

    #[test]
    fn test_download_without_link_falls_back_to_action() {
        let config = ButtonConfig::new("#000").label("Save").download(true);
        assert!(matches!(
            classify(&config),
            ButtonVariant::Action { action: None }
        ));

        let mut history = History::default();
        activate(&config, &mut history);
        assert!(history.entries.is_empty());
    }

    #[test]
    fn test_empty_link_is_no_link() {
        let config = ButtonConfig::new("#000").link("");
        assert!(matches!(classify(&config), ButtonVariant::Action { .. }));
    }

    #[test]
    fn test_hover_text_and_class_hook() {
        let config = ButtonConfig::new("#0af")
            .label("Hi")
            .white_text_hover(true)
            .class_name("hero-cta");
        let html = render(&config);
        assert!(html.contains(r#"class="button button--action hero-cta""#));
        assert!(html.contains("--button-hover-text: var(--white)"));
        assert!(html.contains("--button-accent: #0af"));
    }

    #[test]
    fn test_escapes_label_and_href() {
        let config = ButtonConfig::new("#000")
            .label("<b>Fish & Chips</b>")
            .link("/menu?a=\"1\"")
            .external(true);
        let html = render(&config);
        assert!(html.contains("&lt;b&gt;Fish &amp; Chips&lt;/b&gt;"));
        assert!(html.contains(r#"href="/menu?a=&quot;1&quot;""#));
    }

    #[test]
    fn test_color_cannot_add_declarations() {
        let config = ButtonConfig::new("red; background: url(x)").label("Hi");
        let html = render(&config);
        assert!(html.contains(r#"style="--button-accent: red; --button-hover-text: var(--black)""#));
        assert!(!html.contains("background"));

        let config = ButtonConfig::new("#fff}").link("/a");
        assert!(render(&config).contains("--button-accent: #fff;"));
    }

    #[test]
    fn test_missing_label_renders_empty() {
        let html = render(&ButtonConfig::new("#000").disabled(true));
        assert_eq!(
            html,
            r#"<div class="button button--disabled" aria-disabled="true"></div>"#
        );
    }
}
