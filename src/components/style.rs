//! Shared button stylesheet

use crate::config::ButtonTheme;

/// Classes of the variants that react to hover
const ENABLED: &[&str] = &["button--action", "button--link", "button--external"];

fn selector_list(suffix: &str) -> String {
    ENABLED
        .iter()
        .map(|class| format!(".{}{}", class, suffix))
        .collect::<Vec<_>>()
        .join(", ")
}

/// CSS for every button variant under the given palette
///
/// Hover colours apply only on viewports at least `hover_breakpoint` wide; the
/// disabled variant never changes on interaction.
pub fn stylesheet(theme: &ButtonTheme) -> String {
    format!(
        r#":root {{
  --text: {text};
  --grey: {grey};
  --bkg: {background};
  --white: {white};
  --black: {black};
}}

.button {{
  border: 2px solid var(--grey);
  background-color: var(--bkg);
  color: var(--grey);
  font-family: 'Open Sans', sans-serif;
  font-size: 1.125rem;
  font-weight: 600;
  display: flex;
  justify-content: center;
  align-items: center;
  padding: 0.75rem 1rem;
  user-select: none;
  text-decoration: none;
}}

{enabled} {{
  color: var(--text);
  border-color: var(--text);
  transition: 0.1s ease-in;
}}

.button__icon {{
  margin-left: 10px;
  margin-top: -2px;
  margin-right: -5px;
}}

@media only screen and (min-width: {breakpoint}px) {{
  {hover} {{
    background-color: var(--button-accent);
    color: var(--button-hover-text);
  }}

  .button--action:hover {{
    cursor: pointer;
  }}
}}
"#,
        text = theme.text,
        grey = theme.grey,
        background = theme.background,
        white = theme.white,
        black = theme.black,
        enabled = selector_list(""),
        hover = selector_list(":hover"),
        breakpoint = theme.hover_breakpoint,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_gated_by_breakpoint() {
        let css = stylesheet(&ButtonTheme::default());
        let media = css.find("@media only screen and (min-width: 700px)").unwrap();
        let hover = css.find(".button--action:hover, .button--link:hover").unwrap();
        assert!(hover > media);
    }

    #[test]
    fn test_disabled_has_no_hover_rule() {
        let css = stylesheet(&ButtonTheme::default());
        assert!(!css.contains("button--disabled"));
        assert_eq!(css.matches("cursor: pointer").count(), 1);
    }

    #[test]
    fn test_custom_theme() {
        let theme = ButtonTheme {
            text: "#111".to_string(),
            hover_breakpoint: 900,
            ..ButtonTheme::default()
        };
        let css = stylesheet(&theme);
        assert!(css.contains("--text: #111;"));
        assert!(css.contains("(min-width: 900px)"));
    }
}
