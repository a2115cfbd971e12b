//! Trends page. The chart data is fetched client-side from the sample-data API.

use super::{render_page, CHART_JS_CDN};
use crate::routes::trends::GET_SAMPLE_DATA;

/// Render the standalone monthly trend page.
pub fn render_trends() -> String {
    let body = r#"<h1>Monthly AQI Trend</h1>
        <p>Average AQI, PM2.5 and PM10 per month.</p>
        <div class="card chart-box"><canvas id="trendChart"></canvas></div>
        <p id="errorText" class="error"></p>"#;
    let script = format!(
        r##"<script src="{cdn}"></script>
    <script>
    fetch("{endpoint}")
        .then((response) => response.json())
        .then((points) => {{
            if (!points.length) {{
                document.getElementById("errorText").textContent = "No trend data available.";
                return;
            }}
            const series = (key, label, color) => ({{
                label,
                data: points.map((p) => p[key]),
                borderColor: color,
                backgroundColor: color,
                tension: 0.3,
                spanGaps: true,
            }});
            new Chart(document.getElementById("trendChart"), {{
                type: "line",
                data: {{
                    labels: points.map((p) => p.month),
                    datasets: [
                        series("aqi", "AQI", "#ef4444"),
                        series("pm25", "PM2.5", "#3b82f6"),
                        series("pm10", "PM10", "#f59e0b"),
                    ],
                }},
                options: {{ responsive: true, maintainAspectRatio: false }},
            }});
        }})
        .catch((err) => {{
            document.getElementById("errorText").textContent = "Failed to load trends: " + err;
        }});
    </script>"##,
        cdn = CHART_JS_CDN,
        endpoint = GET_SAMPLE_DATA,
    );
    render_page("AQI Trends", body, &script)
}
