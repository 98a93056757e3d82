//! Inline SVG icons

/// Trailing icon shown on buttons that leave the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Download,
    ExternalLink,
}

impl Icon {
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Download => "download",
            Icon::ExternalLink => "external-link",
        }
    }

    fn path(&self) -> &'static str {
        match self {
            Icon::Download => "M12 3v12m0 0l-5-5m5 5l5-5M4 21h16",
            Icon::ExternalLink => {
                "M14 3h7v7M21 3l-9 9M19 14v5a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V7a2 2 0 0 1 2-2h5"
            }
        }
    }

    /// Markup sized to the surrounding text
    pub fn svg(&self) -> String {
        format!(
            r#"<svg class="button__icon icon-{}" viewBox="0 0 24 24" width="1em" height="1em" fill="none" stroke="currentColor" stroke-width="2.5" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><path d="{}"/></svg>"#,
            self.name(),
            self.path()
        )
    }
}
