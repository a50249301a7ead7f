//! Serializing a [`Figure`] for display: plotly JSON text or a standalone HTML page.

use crate::Result;
use crate::figure::Figure;

pub const DEFAULT_PLOTLY_JS_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Id of the `<div>` the figure is drawn into. Sanitized before use.
    pub div_id: String,
    pub plotly_js_url: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            div_id: "ribbons-figure".to_string(),
            plotly_js_url: DEFAULT_PLOTLY_JS_URL.to_string(),
        }
    }
}

/// Turns a caller-chosen name into an HTML `id` that `Plotly.newPlot` can target.
///
/// Runs of characters outside `[A-Za-z0-9_]` become a single `-`. Ids that would not start with
/// a letter get an `r-` prefix; names with nothing usable become `r-untitled`.
pub fn sanitize_div_id(raw: &str) -> String {
    let mut token = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            token.push(ch);
        } else if !token.is_empty() && !token.ends_with('-') {
            token.push('-');
        }
    }
    let token = token.trim_end_matches('-');
    match token.chars().next() {
        None => "r-untitled".to_string(),
        Some(first) if first.is_ascii_alphabetic() => token.to_string(),
        Some(_) => format!("r-{token}"),
    }
}

/// JSON is embedded in a `<script>` block; `</` must not terminate it early.
fn script_safe_json(json: &str) -> String {
    json.replace("</", "<\\/")
}

impl Figure {
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Renders a self-contained HTML page that loads plotly.js and draws this figure.
    pub fn to_html(&self, options: &HtmlOptions) -> Result<String> {
        let div_id = sanitize_div_id(&options.div_id);
        let title = htmlize::escape_text(self.title().unwrap_or("ribbons"));
        let script_url = htmlize::escape_attribute(&options.plotly_js_url);
        let data = script_safe_json(&serde_json::to_string(&self.data)?);
        let layout = script_safe_json(&serde_json::to_string(&self.layout)?);

        let page = format!(
            "<!DOCTYPE html>\n\
             <html>\n\
             <head>\n\
             <meta charset=\"utf-8\">\n\
             <title>{title}</title>\n\
             <script src=\"{script_url}\"></script>\n\
             </head>\n\
             <body>\n\
             <div id=\"{div_id}\" style=\"width:100%;height:100%;\"></div>\n\
             <script>\n\
             Plotly.newPlot(\"{div_id}\", {data}, {layout});\n\
             </script>\n\
             </body>\n\
             </html>\n"
        );
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::{SankeyLink, SankeyNode, SankeyTrace};

    fn figure() -> Figure {
        Figure::new(SankeyTrace::new(
            SankeyNode::with_labels(["</script>", "B"]),
            SankeyLink::new(vec![0], vec![1], vec![1.0]),
        ))
        .with_title("A & B")
    }

    #[test]
    fn sanitize_div_id_normalizes() {
        assert_eq!(sanitize_div_id("  my chart #1 "), "my-chart-1");
        assert_eq!(sanitize_div_id("1st"), "r-1st");
        assert_eq!(sanitize_div_id("   "), "r-untitled");
        assert_eq!(sanitize_div_id("!!!"), "r-untitled");
        assert_eq!(sanitize_div_id("--flows--by--region"), "flows-by-region");
        assert_eq!(sanitize_div_id("_private"), "r-_private");
    }

    #[test]
    fn html_escapes_title_and_script_content() {
        let html = figure().to_html(&HtmlOptions::default()).unwrap();
        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(html.contains(DEFAULT_PLOTLY_JS_URL));
        assert!(html.contains("Plotly.newPlot(\"ribbons-figure\""));
        assert!(html.contains("<\\/script>"));
        assert_eq!(html.matches("</script>").count(), 2);
    }

    #[test]
    fn json_round_trips_through_value() {
        let fig = figure();
        let text = fig.to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, fig.to_value().unwrap());
    }
}
