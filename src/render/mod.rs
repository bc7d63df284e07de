//! HTML page composition.
//!
//! Every dashboard becomes one standalone HTML document: the shared shell
//! (navigation bar plus content card), a heading, and a fixed 2x2 grid of
//! chart panels hydrated client-side from embedded figure JSON.

use std::fmt::Write as _;

use crate::charts::Figure;

/// Plotly bundle loaded by every page
const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.32.0.min.js";

/// Shell styling shared by every dashboard page
const SHELL_CSS: &str = r"
body {
    font-family: 'Segoe UI', sans-serif;
    background-color: #f5f7fa;
    margin: 0;
    padding: 0;
}
.navbar {
    display: flex;
    justify-content: center;
    background-color: #2c3e50;
    padding: 15px 0;
}
.nav-link {
    color: white;
    text-decoration: none;
    margin: 0 20px;
    font-size: 18px;
    transition: color 0.3s;
}
.nav-link:hover {
    color: #1abc9c;
}
.content {
    max-width: 1300px;
    margin: 30px auto;
    padding: 20px;
    background: white;
    box-shadow: 0 4px 8px rgba(0,0,0,0.05);
    border-radius: 12px;
}
.page-title {
    text-align: center;
}
.panel-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 20px;
    padding: 20px;
}
.panel {
    padding: 10px;
}
";

/// Navigation entries shared by every page
const NAV_LINKS: &[(&str, &str)] = &[
    ("/dashboard1", "General"),
    ("/dashboard2", "Demographic"),
    ("/dashboard3", "COVID-19"),
    ("/dashboard4", "Obesity and Health"),
];

/// One titled chart slot on a dashboard
#[derive(Debug, Clone)]
pub struct Panel {
    /// Heading shown above the chart
    pub heading: String,
    /// The chart itself
    pub figure: Figure,
}

impl Panel {
    /// Create a panel from a heading and a figure
    #[must_use]
    pub fn new(heading: impl Into<String>, figure: Figure) -> Self {
        Self {
            heading: heading.into(),
            figure,
        }
    }
}

/// A fully assembled dashboard: title, route slug, and its chart panels
#[derive(Debug, Clone)]
pub struct DashboardPage {
    /// Page heading
    pub title: String,
    /// Route path the page is served under
    pub slug: &'static str,
    /// Chart panels in grid order
    pub panels: Vec<Panel>,
}

/// Render a dashboard into a standalone HTML document
#[must_use]
pub fn render_page(page: &DashboardPage) -> String {
    let mut panels_html = String::new();
    let mut scripts = String::new();
    for (index, panel) in page.panels.iter().enumerate() {
        let _ = write!(
            panels_html,
            "<div class=\"panel\"><h2>{}</h2><div id=\"panel-{index}\"></div></div>",
            panel.heading
        );
        let _ = write!(
            scripts,
            "Plotly.newPlot(\"panel-{index}\", {}, {}, {{responsive: true}});",
            serde_json::to_string(&panel.figure.data).unwrap_or_else(|_| "[]".to_string()),
            serde_json::to_string(&panel.figure.layout).unwrap_or_else(|_| "{}".to_string()),
        );
    }

    let nav = NAV_LINKS
        .iter()
        .map(|(href, label)| format!("<a class=\"nav-link\" href=\"{href}\">{label}</a>"))
        .collect::<String>();

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title} - Multi Dashboard App</title>\n<script src=\"{PLOTLY_CDN}\"></script>\n<style>{SHELL_CSS}</style>\n</head>\n<body>\n<nav class=\"navbar\">{nav}</nav>\n<div class=\"content\">\n<h1 class=\"page-title\">{title}</h1>\n<div class=\"panel-grid\">{panels_html}</div>\n</div>\n<script>{scripts}</script>\n</body>\n</html>\n",
        title = page.title,
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample_page() -> DashboardPage {
        DashboardPage {
            title: "Sample Dashboard".to_string(),
            slug: "/dashboard1",
            panels: vec![Panel::new(
                "A Chart",
                Figure {
                    data: vec![json!({ "type": "bar", "x": ["a"], "y": [1.0] })],
                    layout: json!({ "title": { "text": "A Chart" } }),
                },
            )],
        }
    }

    #[test]
    fn test_render_embeds_panels_and_nav() {
        let html = render_page(&sample_page());
        assert!(html.contains("<h1 class=\"page-title\">Sample Dashboard</h1>"));
        assert!(html.contains("id=\"panel-0\""));
        assert!(html.contains("Plotly.newPlot(\"panel-0\""));
        for (href, _) in NAV_LINKS {
            assert!(html.contains(href));
        }
    }
}
