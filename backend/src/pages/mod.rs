//! Server-rendered HTML pages.
//!
//! Pages are self-contained: CSS and JavaScript are inlined, and the only
//! external asset is the Chart.js bundle used by the trends page.

pub mod landing;
pub mod trends;

pub use landing::render_index;
pub use trends::render_trends;

/// Chart.js bundle shared by the landing and trends pages.
const CHART_JS_CDN: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";

/// Wrap page content in the shared document shell.
fn render_page(title: &str, body: &str, script: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <nav>
        <a href="/">Predict</a>
        <a href="/trends">Trends</a>
    </nav>
    <main class="container">
        {body}
    </main>
    {script}
</body>
</html>"#,
        title = html_escape(title),
        css = inline_css(),
        body = body,
        script = script,
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn inline_css() -> &'static str {
    r#"
* { box-sizing: border-box; margin: 0; padding: 0; }
body {
    font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
    line-height: 1.6;
    color: #111827;
    background: #f9fafb;
}
nav { display: flex; gap: 1.5rem; padding: 1rem 2rem; background: #111827; }
nav a { color: #f9fafb; text-decoration: none; font-weight: 600; }
.container { max-width: 1100px; margin: 0 auto; padding: 2rem; }
h1 { margin-bottom: 1rem; }
h2 { margin: 2rem 0 1rem; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 1rem; }
label { display: block; font-size: 0.9rem; font-weight: 600; margin-bottom: 0.25rem; }
input { width: 100%; padding: 0.5rem; border: 1px solid #d1d5db; border-radius: 6px; }
button {
    margin-top: 1.5rem; padding: 0.75rem 2rem; border: none; border-radius: 6px;
    background: #2563eb; color: #fff; font-weight: 600; cursor: pointer;
}
.card { background: #fff; border-radius: 10px; padding: 1.5rem; margin-top: 1.5rem; box-shadow: 0 1px 3px rgba(0,0,0,0.1); }
.aqi-value { font-size: 3rem; font-weight: 700; color: #fff; padding: 1rem; border-radius: 8px; text-align: center; }
.error { color: #b91c1c; font-weight: 600; }
table { width: 100%; border-collapse: collapse; background: #fff; }
th, td { text-align: left; padding: 0.75rem; border-bottom: 1px solid #e5e7eb; vertical-align: top; }
.swatch { display: inline-block; width: 1rem; height: 1rem; border-radius: 3px; margin-right: 0.5rem; vertical-align: middle; }
.chart-box { position: relative; height: 420px; }
.chart-box.small { height: 260px; margin-top: 1rem; }
button.secondary { background: #6b7280; margin-left: 0.5rem; }
.report-aqi { display: flex; gap: 1rem; align-items: baseline; border-left: 6px solid #2563eb; padding: 1rem; margin: 1rem 0; }
#reportAqiValue { font-size: 2.5rem; font-weight: 700; }
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_shell_contains_navigation() {
        let page = render_page("Title <1>", "<p>body</p>", "");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Title &lt;1&gt;</title>"));
        assert!(page.contains(r#"href="/trends""#));
        assert!(page.contains("<p>body</p>"));
    }
}
