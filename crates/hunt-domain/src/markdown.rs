//! Render de markdown a HTML: transformación pura de texto, sin estado.

use pulldown_cmark::{html, Options, Parser};

/// Convierte el cuerpo markdown de un registro en HTML.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(source, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::render_markdown;

    #[test]
    fn renders_basic_markdown() {
        let html = render_markdown("# Pista\n\nBusca el **banco** verde.");
        assert!(html.contains("<h1>Pista</h1>"));
        assert!(html.contains("<strong>banco</strong>"));
    }

    #[test]
    fn empty_body_renders_empty() {
        assert_eq!(render_markdown(""), "");
    }
}
