//! Server-side rendering of the single input/result page.

use crate::domain::report::{ArtifactKind, BaseName};

const INDEX_TEMPLATE: &str = include_str!("index.html");

/// A link to one written artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLink {
    pub label: &'static str,
    pub file_name: String,
    pub href: String,
}

impl DownloadLink {
    pub fn new(kind: ArtifactKind, base_name: &BaseName) -> Self {
        let file_name = base_name.file_name(kind);
        Self {
            label: kind.label(),
            href: format!("/download/{}", encode_path_segment(&file_name)),
            file_name,
        }
    }
}

/// What the page shows besides the form.
#[derive(Debug, Clone, Default)]
pub struct PageView {
    pub prompt: String,
    pub generated_text: Option<String>,
    pub downloads: Vec<DownloadLink>,
}

impl PageView {
    /// Page after a successful generation, with one link per format.
    pub fn with_result(prompt: String, generated_text: String, base_name: &BaseName) -> Self {
        Self {
            prompt,
            generated_text: Some(generated_text),
            downloads: ArtifactKind::ALL
                .iter()
                .map(|kind| DownloadLink::new(*kind, base_name))
                .collect(),
        }
    }
}

/// Escapes text for HTML element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Percent-encodes one path segment (spaces as `%20`, not `+`).
pub fn encode_path_segment(segment: &str) -> String {
    url::form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

fn render_result(view: &PageView) -> String {
    let Some(text) = &view.generated_text else {
        return String::new();
    };

    let links: String = view
        .downloads
        .iter()
        .map(|link| {
            format!(
                "    <a href=\"{}\" download=\"{}\">Baixar {}</a>\n",
                escape_html(&link.href),
                escape_html(&link.file_name),
                link.label
            )
        })
        .collect();

    format!(
        "  <section>\n    <h2>Resposta</h2>\n    <pre>{}</pre>\n  </section>\n  <section class=\"downloads\">\n    <h2>Downloads</h2>\n{}  </section>\n",
        escape_html(text),
        links
    )
}

/// Renders the full page.
///
/// Placeholders are substituted in a single pass over the template, so
/// user text that looks like a placeholder is never expanded.
pub fn render_page(view: &PageView) -> String {
    let mut html = String::with_capacity(INDEX_TEMPLATE.len() + 1024);
    let mut rest = INDEX_TEMPLATE;

    while let Some(start) = rest.find("{{") {
        let Some(len) = rest[start..].find("}}") else {
            break;
        };
        html.push_str(&rest[..start]);
        match &rest[start + 2..start + len] {
            "prompt" => html.push_str(&escape_html(&view.prompt)),
            "result" => html.push_str(&render_result(view)),
            _ => html.push_str(&rest[start..start + len + 2]),
        }
        rest = &rest[start + len + 2..];
    }

    html.push_str(rest);
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_page_has_form_and_no_result() {
        let html = render_page(&PageView::default());

        assert!(html.contains("action=\"/gerar\""));
        assert!(html.contains("name=\"prompt\""));
        assert!(html.contains("href=\"/novo_chat\""));
        assert!(!html.contains("Resposta"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn result_page_links_all_formats() {
        let base = BaseName::new("relatorio_explique_ia").unwrap();
        let html = render_page(&PageView::with_result("p".into(), "1. A".into(), &base));

        assert!(html.contains("href=\"/download/relatorio_explique_ia.docx\""));
        assert!(html.contains("href=\"/download/relatorio_explique_ia.xlsx\""));
        assert!(html.contains("href=\"/download/relatorio_explique_ia.pdf\""));
        assert!(html.contains("Baixar Word"));
        assert!(html.contains("<pre>1. A</pre>"));
    }

    #[test]
    fn generated_text_and_prompt_are_escaped() {
        let base = BaseName::fallback();
        let view = PageView::with_result(
            "<b>oi</b>".into(),
            "<script>alert('x')</script> & mais".into(),
            &base,
        );

        let html = render_page(&view);

        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; mais"));
        assert!(html.contains("&lt;b&gt;oi&lt;/b&gt;</textarea>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn template_markers_in_prompt_are_not_expanded() {
        let html = render_page(&PageView {
            prompt: "{{result}}".into(),
            ..Default::default()
        });

        assert!(html.contains(">{{result}}</textarea>"));
    }

    #[test]
    fn template_markers_in_generated_text_are_not_expanded() {
        let view = PageView::with_result("segredo".into(), "{{prompt}}".into(), &BaseName::fallback());

        let html = render_page(&view);

        assert!(html.contains("<pre>{{prompt}}</pre>"));
    }

    #[test]
    fn non_ascii_file_names_are_percent_encoded() {
        let base = BaseName::new("relatorio_robôs").unwrap();
        let link = DownloadLink::new(ArtifactKind::Pdf, &base);

        assert_eq!(link.href, "/download/relatorio_rob%C3%B4s.pdf");
        assert_eq!(link.file_name, "relatorio_robôs.pdf");
    }

    #[test]
    fn spaces_encode_as_percent_twenty() {
        assert_eq!(encode_path_segment("a b.pdf"), "a%20b.pdf");
    }
}
