//! Landing page: prediction form, result card, downloadable report and the
//! AQI band legend.

use super::{html_escape, render_page, CHART_JS_CDN};
use crate::api::LandingData;

/// Pollutant inputs plotted after a prediction, with their bar colors.
pub const CHARTED_POLLUTANTS: [(&str, &str); 6] = [
    ("PM2.5", "#ef4444"),
    ("PM10", "#f59e0b"),
    ("NO2", "#3b82f6"),
    ("SO2", "#10b981"),
    ("CO", "#6b7280"),
    ("Ozone", "#8b5cf6"),
];

/// Placeholder text for a result field the server left empty.
const NO_DATA: &str = "No data available";

/// Render the landing page.
pub fn render_index(data: &LandingData) -> String {
    let body = format!(
        r#"<h1>Air Quality Index Predictor</h1>
        <p>Enter sensor readings to estimate the AQI and its health impact.</p>
        <form id="predictForm" class="card">
            <div class="grid">
                {inputs}
            </div>
            <button type="submit">Predict AQI</button>
        </form>
        <div id="resultCard" class="card" style="display:none">
            <div id="aqiDisplay" class="aqi-value"><span id="aqiValue"></span></div>
            <h2 id="categoryLabel"></h2>
            <p id="categoryRange"></p>
            <p><strong>Health implications:</strong> <span id="healthText"></span></p>
            <p><strong>Safety measures:</strong> <span id="safetyText"></span></p>
            <h3>Submitted pollutant levels</h3>
            <div class="chart-box small"><canvas id="pollutantChart"></canvas></div>
            <button type="button" id="reportButton">View report</button>
        </div>
        <section id="report" class="card" style="display:none">
            <h2>Air Quality Report</h2>
            <p><span id="reportDate"></span> <span id="reportTime"></span></p>
            <div id="reportAqiDisplay" class="report-aqi">
                <span id="reportAqiValue"></span>
                <strong id="reportCategoryLabel"></strong>
                <span id="reportCategoryRange"></span>
            </div>
            <h3>Health implications</h3>
            <p id="reportHealthImplications"></p>
            <h3>Recommended safety measures</h3>
            <p id="reportSafetyMeasures"></p>
            <button type="button" id="downloadReport">Download report</button>
            <button type="button" id="closeReport" class="secondary">Close</button>
        </section>
        <p id="errorText" class="error"></p>
        <h2>AQI Categories</h2>
        <table>
            <thead><tr><th>Range</th><th>Category</th><th>Health implications</th></tr></thead>
            <tbody>
                {rows}
            </tbody>
        </table>"#,
        inputs = render_inputs(data.features),
        rows = render_category_rows(data),
    );
    render_page("AQI Predictor", &body, &predict_script())
}

fn render_inputs(features: &[&str]) -> String {
    features
        .iter()
        .map(|name| {
            let name = html_escape(name);
            format!(
                r#"<div><label for="{name}">{name}</label><input id="{name}" name="{name}" type="number" step="any" required></div>"#,
                name = name
            )
        })
        .collect::<Vec<_>>()
        .join("\n                ")
}

fn render_category_rows(data: &LandingData) -> String {
    data.categories
        .iter()
        .map(|band| {
            format!(
                r#"<tr><td>{range}</td><td><span class="swatch" style="background:{color}"></span>{label}</td><td>{health}</td></tr>"#,
                range = html_escape(band.range),
                color = html_escape(band.color),
                label = html_escape(band.label),
                health = html_escape(band.health_implications),
            )
        })
        .collect::<Vec<_>>()
        .join("\n                ")
}

/// Plain-text layout of the downloadable report.
///
/// `{generated}`, `{aqi}`, `{category}`, `{range}`, `{health}` and
/// `{safety}` are filled in client-side from the last prediction.
pub fn report_template() -> String {
    [
        "AIR QUALITY REPORT",
        "Generated: {generated}",
        "",
        "AQI VALUE: {aqi}",
        "CATEGORY: {category}",
        "AQI RANGE: {range}",
        "",
        "HEALTH IMPLICATIONS:",
        "{health}",
        "",
        "RECOMMENDED SAFETY MEASURES:",
        "{safety}",
        "",
        "---",
        "Report generated by AQI Predictor",
    ]
    .join("\n")
}

fn js_string(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

fn predict_script() -> String {
    let pollutants = CHARTED_POLLUTANTS
        .iter()
        .map(|(name, _)| js_string(name))
        .collect::<Vec<_>>()
        .join(", ");
    let colors = CHARTED_POLLUTANTS
        .iter()
        .map(|(_, color)| js_string(color))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r##"<script src="{cdn}"></script>
<script>
const POLLUTANTS = [{pollutants}];
const POLLUTANT_COLORS = [{colors}];
const REPORT_TEMPLATE = {template};
const NO_DATA = {no_data};
let lastPrediction = null;
let pollutantChart = null;

function renderPollutantChart() {{
    const values = POLLUTANTS.map((id) => {{
        const v = parseFloat(document.getElementById(id).value);
        return Number.isFinite(v) ? v : 0;
    }});
    if (pollutantChart) {{
        pollutantChart.data.datasets[0].data = values;
        pollutantChart.update();
        return;
    }}
    pollutantChart = new Chart(document.getElementById("pollutantChart"), {{
        type: "bar",
        data: {{
            labels: POLLUTANTS,
            datasets: [{{ label: "Pollutant value", data: values, backgroundColor: POLLUTANT_COLORS }}],
        }},
        options: {{ responsive: true, maintainAspectRatio: false, scales: {{ y: {{ beginAtZero: true }} }} }},
    }});
}}

function showReport() {{
    if (!lastPrediction) return;
    const now = new Date();
    const text = (id, value) => {{ document.getElementById(id).textContent = value; }};
    text("reportAqiValue", lastPrediction.aqi);
    text("reportCategoryLabel", lastPrediction.category);
    text("reportCategoryRange", "AQI Range: " + lastPrediction.range);
    text("reportHealthImplications", lastPrediction.health_implications || NO_DATA);
    text("reportSafetyMeasures", lastPrediction.safety_measures || NO_DATA);
    text("reportDate", now.toLocaleDateString("en-US", {{ year: "numeric", month: "long", day: "numeric" }}));
    text("reportTime", now.toLocaleTimeString("en-US", {{ hour: "2-digit", minute: "2-digit" }}));
    document.getElementById("reportAqiDisplay").style.borderColor = lastPrediction.color;
    const report = document.getElementById("report");
    report.style.display = "block";
    report.scrollIntoView({{ behavior: "smooth", block: "start" }});
}}

function downloadReport() {{
    if (!lastPrediction) return;
    const fields = {{
        generated: new Date().toLocaleString(),
        aqi: lastPrediction.aqi,
        category: lastPrediction.category,
        range: lastPrediction.range,
        health: lastPrediction.health_implications || NO_DATA,
        safety: lastPrediction.safety_measures || NO_DATA,
    }};
    const content = REPORT_TEMPLATE.replace(/\{{(\w+)\}}/g, (_, key) => fields[key]);
    const url = URL.createObjectURL(new Blob([content], {{ type: "text/plain" }}));
    const link = document.createElement("a");
    link.href = url;
    link.download = "AQI_Report_" + lastPrediction.aqi + "_" + new Date().toISOString().split("T")[0] + ".txt";
    document.body.appendChild(link);
    link.click();
    document.body.removeChild(link);
    URL.revokeObjectURL(url);
}}

document.getElementById("reportButton").addEventListener("click", showReport);
document.getElementById("downloadReport").addEventListener("click", downloadReport);
document.getElementById("closeReport").addEventListener("click", () => {{
    document.getElementById("report").style.display = "none";
}});

document.getElementById("predictForm").addEventListener("submit", async (event) => {{
    event.preventDefault();
    const errorText = document.getElementById("errorText");
    errorText.textContent = "";
    const body = new URLSearchParams(new FormData(event.target));
    try {{
        const response = await fetch("{endpoint}", {{ method: "POST", body }});
        const data = await response.json();
        if (!response.ok || !data.success) {{
            errorText.textContent = data.error || "Prediction failed";
            return;
        }}
        lastPrediction = data;
        document.getElementById("aqiValue").textContent = data.aqi;
        document.getElementById("aqiDisplay").style.background = data.color;
        document.getElementById("categoryLabel").textContent = data.category;
        document.getElementById("categoryRange").textContent = "AQI Range: " + data.range;
        document.getElementById("healthText").textContent = data.health_implications;
        document.getElementById("safetyText").textContent = data.safety_measures;
        document.getElementById("report").style.display = "none";
        const card = document.getElementById("resultCard");
        card.style.display = "block";
        renderPollutantChart();
        card.scrollIntoView({{ behavior: "smooth" }});
    }} catch (err) {{
        errorText.textContent = "Request failed: " + err;
    }}
}});
</script>"##,
        cdn = CHART_JS_CDN,
        pollutants = pollutants,
        colors = colors,
        template = js_string(&report_template()),
        no_data = js_string(NO_DATA),
        endpoint = crate::routes::predict::POST_PREDICT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AQI_CATEGORIES, FEATURE_NAMES};

    #[test]
    fn test_index_has_an_input_per_feature() {
        let page = render_index(&LandingData::current());
        for name in FEATURE_NAMES {
            assert!(page.contains(&format!(r#"name="{}""#, name)), "missing input {}", name);
        }
    }

    #[test]
    fn test_index_lists_categories() {
        let page = render_index(&LandingData::current());
        for band in AQI_CATEGORIES.iter() {
            assert!(page.contains(band.label));
            assert!(page.contains(band.color));
        }
        assert!(page.contains("400+"));
    }

    #[test]
    fn test_charted_pollutants_are_form_inputs() {
        for (name, color) in CHARTED_POLLUTANTS {
            assert!(FEATURE_NAMES.contains(&name), "{} is not a feature", name);
            assert!(color.starts_with('#') && color.len() == 7);
        }
    }

    #[test]
    fn test_index_wires_pollutant_chart() {
        let page = render_index(&LandingData::current());
        assert!(page.contains(r#"id="pollutantChart""#));
        assert!(page.contains(CHART_JS_CDN));
        assert!(page.contains(r#"const POLLUTANTS = ["PM2.5", "PM10", "NO2", "SO2", "CO", "Ozone"];"#));
        assert!(page.contains(r##""#8b5cf6""##));
    }

    #[test]
    fn test_report_template_layout() {
        let template = report_template();
        let lines: Vec<&str> = template.lines().collect();
        assert_eq!(lines[0], "AIR QUALITY REPORT");
        assert_eq!(lines[1], "Generated: {generated}");
        assert!(lines.contains(&"AQI VALUE: {aqi}"));
        assert!(lines.contains(&"CATEGORY: {category}"));
        assert!(lines.contains(&"AQI RANGE: {range}"));
        assert!(lines.contains(&"{health}"));
        assert!(lines.contains(&"{safety}"));
    }

    #[test]
    fn test_index_embeds_report_download() {
        let page = render_index(&LandingData::current());
        assert!(page.contains(r#"id="report""#));
        assert!(page.contains(r#"id="downloadReport""#));
        assert!(page.contains(r#""AQI_Report_" + lastPrediction.aqi + "_""#));
        // The template is embedded as an escaped JSON string literal.
        assert!(page.contains(r#"const REPORT_TEMPLATE = "AIR QUALITY REPORT\nGenerated: {generated}"#));
        assert!(page.contains(r#"fetch("/predict""#));
    }
}
