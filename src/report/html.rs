//! HTML templates for the comparison report and the correlation scatter view.
//!
//! Both documents are self-contained apart from the Chart.js CDN script tag.
//! Everything interpolated from data files is escaped; chart payloads are
//! numeric literals only.

use crate::core::{ComparisonResults, ProjectStats, ProjectSummary};
use html_escape::encode_text;
use std::collections::BTreeMap;
use std::fmt::Write;

const CHART_JS_TAG: &str = r#"<script src="https://cdn.jsdelivr.net/npm/chart.js"></script>"#;

/// Table + pie chart report over the comparison results.
pub fn render_comparison_report(results: &ComparisonResults) -> String {
    let overall = &results.overall;
    let project_sections: String = results
        .by_project
        .iter()
        .map(|(name, summary)| render_project_section(name, summary))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <title>Complexity Changes After Bug Fixes</title>
  {CHART_JS_TAG}
  <style>
    body {{ font-family: Arial, sans-serif; margin: 20px; }}
    .chart-container {{ width: 800px; height: 400px; margin-bottom: 30px; }}
    table {{ border-collapse: collapse; width: 100%; margin-top: 20px; }}
    th, td {{ border: 1px solid #ddd; padding: 8px; text-align: left; }}
    th {{ background-color: #f2f2f2; }}
    .positive {{ color: #d9534f; }}
    .negative {{ color: #5cb85c; }}
    .neutral {{ color: #f0ad4e; }}
  </style>
</head>
<body>
  <h1>Complexity Changes After Bug Fixes</h1>

  <h2>Overall Results</h2>
  <p>
    <strong>Total defects analyzed:</strong> {total}<br>
    <strong>Complexity increased:</strong> {inc} ({pct_inc}%)<br>
    <strong>Complexity decreased:</strong> {dec} ({pct_dec}%)<br>
    <strong>Complexity unchanged:</strong> {unc} ({pct_unc}%)
  </p>

  <div class="chart-container">
    <canvas id="overallChart"></canvas>
  </div>

  <h2>Results by Project</h2>
{project_sections}
  <script>
    const ctx = document.getElementById('overallChart').getContext('2d');
    const chart = new Chart(ctx, {{
      type: 'pie',
      data: {{
        labels: ['Increased', 'Decreased', 'Unchanged'],
        datasets: [{{
          data: [{inc}, {dec}, {unc}],
          backgroundColor: [
            'rgba(217, 83, 79, 0.7)',
            'rgba(92, 184, 92, 0.7)',
            'rgba(240, 173, 78, 0.7)'
          ],
          borderColor: [
            'rgba(217, 83, 79, 1)',
            'rgba(92, 184, 92, 1)',
            'rgba(240, 173, 78, 1)'
          ],
          borderWidth: 1
        }}]
      }},
      options: {{
        responsive: true,
        plugins: {{
          legend: {{ position: 'top' }},
          title: {{
            display: true,
            text: 'Complexity Changes After Bug Fixes'
          }}
        }}
      }}
    }});
  </script>
</body>
</html>
"#,
        total = overall.total_defects,
        inc = overall.complexity_increased,
        dec = overall.complexity_decreased,
        unc = overall.complexity_unchanged,
        pct_inc = fmt_percent(overall.percent_increased),
        pct_dec = fmt_percent(overall.percent_decreased),
        pct_unc = fmt_percent(overall.percent_unchanged),
    )
}

fn render_project_section(name: &str, summary: &ProjectSummary) -> String {
    let total = summary.total_defects as f64;
    let pct = |count: usize| format!("{:.2}", count as f64 / total * 100.0);

    let mut section = format!(
        r#"  <h3>{name}</h3>
  <p>
    <strong>Total defects analyzed:</strong> {total}<br>
    <strong>Complexity increased:</strong> {inc} ({pct_inc}%)<br>
    <strong>Complexity decreased:</strong> {dec} ({pct_dec}%)<br>
    <strong>Complexity unchanged:</strong> {unc} ({pct_unc}%)
  </p>

  <h4>Defect Details</h4>
  <table>
    <tr>
      <th>Defect ID</th>
      <th>Buggy Complexity</th>
      <th>Fixed Complexity</th>
      <th>Modified Files Complexity</th>
      <th>Change</th>
      <th>Percent Change</th>
    </tr>
"#,
        name = encode_text(name),
        total = summary.total_defects,
        inc = summary.complexity_increased,
        dec = summary.complexity_decreased,
        unc = summary.complexity_unchanged,
        pct_inc = pct(summary.complexity_increased),
        pct_dec = pct(summary.complexity_decreased),
        pct_unc = pct(summary.complexity_unchanged),
    );

    for defect in &summary.defects {
        let change_class = match defect.complexity_change.display_name() {
            "increased" => "positive",
            "decreased" => "negative",
            _ => "neutral",
        };
        let percent_class = if defect.percent_change > 0.0 {
            "positive"
        } else if defect.percent_change < 0.0 {
            "negative"
        } else {
            "neutral"
        };
        let _ = writeln!(
            section,
            r#"    <tr>
      <td>{id}</td>
      <td>{buggy:.2}</td>
      <td>{fixed:.2}</td>
      <td>{modified}</td>
      <td class="{change_class}">{change}</td>
      <td class="{percent_class}">{percent:.2}%</td>
    </tr>"#,
            id = encode_text(&defect.id),
            buggy = defect.buggy_complexity,
            fixed = defect.fixed_complexity,
            modified = defect.modified_files_complexity,
            change = defect.complexity_change.display_name(),
            percent = defect.percent_change,
        );
    }

    section.push_str("  </table>\n");
    section
}

/// Scatter chart of complexity vs defect density plus the raw project table.
///
/// Projects without a usable average complexity stay in the table but are
/// left off the chart.
pub fn render_visualization(stats: &BTreeMap<String, ProjectStats>) -> String {
    let table_rows: String = stats
        .iter()
        .map(|(name, project)| {
            format!(
                r#"    <tr>
      <td>{name}</td>
      <td>{loc}</td>
      <td>{defects}</td>
      <td>{density}</td>
      <td>{complexity}</td>
    </tr>
"#,
                name = encode_text(name),
                loc = format_thousands(project.loc),
                defects = project.defect_count,
                density = project.defect_density,
                complexity = project.avg_complexity,
            )
        })
        .collect();

    let chart_points: String = stats
        .iter()
        .filter_map(|(name, project)| {
            project.avg_complexity.value().map(|complexity| {
                format!(
                    "{{ x: {complexity}, y: {density}, label: '{label}' }}",
                    density = project.defect_density,
                    label = encode_text(name),
                )
            })
        })
        .collect::<Vec<_>>()
        .join(",\n            ");

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <title>Defect Density vs. Cyclomatic Complexity Analysis</title>
  {CHART_JS_TAG}
  <style>
    body {{ font-family: Arial, sans-serif; margin: 20px; }}
    .chart-container {{ width: 800px; height: 500px; }}
    table {{ border-collapse: collapse; width: 100%; margin-top: 20px; }}
    th, td {{ border: 1px solid #ddd; padding: 8px; text-align: left; }}
    th {{ background-color: #f2f2f2; }}
  </style>
</head>
<body>
  <h1>Defect Density vs. Cyclomatic Complexity Analysis</h1>

  <div class="chart-container">
    <canvas id="correlationChart"></canvas>
  </div>

  <h2>Project Data</h2>
  <table>
    <tr>
      <th>Project</th>
      <th>Lines of Code</th>
      <th>Defect Count</th>
      <th>Defect Density (per KLOC)</th>
      <th>Avg. Cyclomatic Complexity</th>
    </tr>
{table_rows}  </table>

  <script>
    const ctx = document.getElementById('correlationChart').getContext('2d');
    const chart = new Chart(ctx, {{
      type: 'scatter',
      data: {{
        datasets: [{{
          label: 'Projects',
          data: [
            {chart_points}
          ],
          backgroundColor: 'rgba(54, 162, 235, 0.7)',
          borderColor: 'rgba(54, 162, 235, 1)',
          borderWidth: 1
        }}]
      }},
      options: {{
        scales: {{
          x: {{
            title: {{
              display: true,
              text: 'Average Cyclomatic Complexity'
            }}
          }},
          y: {{
            title: {{
              display: true,
              text: 'Defect Density (defects per KLOC)'
            }}
          }}
        }},
        plugins: {{
          tooltip: {{
            callbacks: {{
              label: function(context) {{
                const point = context.raw;
                return `${{point.label}}: (Complexity: ${{point.x}}, Defect Density: ${{point.y}})`;
              }}
            }}
          }}
        }}
      }}
    }});
  </script>
</body>
</html>
"#
    )
}

fn fmt_percent(value: Option<f64>) -> String {
    format!("{:.2}", value.unwrap_or(f64::NAN))
}

/// Group digits in threes, matching the locale formatting of the reference
/// tables (e.g. 85000 -> "85,000").
fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
