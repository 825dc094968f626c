//! Printable feedback report — a self-contained HTML document the handler
//! serves inline so the browser's print dialog can save it as a PDF.

use chrono::NaiveDateTime;

use super::escape_html;
use crate::api::types::{Feedback, Role, Sentiment};
use crate::dates;

/// Render the full report document. The summary counts are derived from the
/// sequence itself, not from backend stats, so an export always matches
/// exactly what it lists.
pub fn render(feedback: &[Feedback], role: Role, user_name: &str, generated: NaiveDateTime) -> String {
    let total = feedback.len();
    let count_of = |sentiment: Sentiment| {
        feedback
            .iter()
            .filter(|f| f.overall_sentiment == sentiment)
            .count()
    };
    let positive = count_of(Sentiment::Positive);
    let neutral = count_of(Sentiment::Neutral);
    let negative = count_of(Sentiment::Negative);
    let acknowledged = feedback.iter().filter(|f| f.acknowledged).count();

    let items_html = feedback
        .iter()
        .map(|item| render_item(item, role))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Feedback Report — {name}</title>
    <style>
        * {{
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }}
        body {{
            font-family: -apple-system, system-ui, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            background: #fff;
            padding: 2rem;
        }}
        header {{
            text-align: center;
            border-bottom: 3px solid #333;
            padding-bottom: 1.5rem;
            margin-bottom: 2rem;
        }}
        h1 {{
            font-size: 1.75rem;
            margin-bottom: 0.5rem;
        }}
        .meta {{
            font-size: 0.9rem;
            color: #666;
        }}
        .summary {{
            background: #f4f4f5;
            border-radius: 8px;
            padding: 1.25rem;
            margin-bottom: 2rem;
        }}
        .summary h2 {{
            font-size: 1.1rem;
            margin-bottom: 0.75rem;
        }}
        .stats {{
            display: grid;
            grid-template-columns: repeat(4, 1fr);
            gap: 1rem;
        }}
        .stat {{
            text-align: center;
            background: #fff;
            border-radius: 6px;
            padding: 0.75rem;
        }}
        .stat .value {{
            font-size: 1.5rem;
            font-weight: 700;
        }}
        .stat .label {{
            font-size: 0.8rem;
            color: #666;
        }}
        .feedback-item {{
            border: 1px solid #e5e7eb;
            border-radius: 8px;
            padding: 1.25rem;
            margin-bottom: 1.5rem;
            page-break-inside: avoid;
        }}
        .feedback-item-header {{
            display: flex;
            justify-content: space-between;
            align-items: center;
            border-bottom: 1px solid #e5e7eb;
            padding-bottom: 0.75rem;
            margin-bottom: 0.75rem;
        }}
        .sentiment {{
            padding: 2px 10px;
            border-radius: 20px;
            font-size: 0.75rem;
            font-weight: 700;
            text-transform: uppercase;
        }}
        .sentiment.positive {{ background: #dcfce7; color: #166534; }}
        .sentiment.neutral  {{ background: #fef3c7; color: #92400e; }}
        .sentiment.negative {{ background: #fee2e2; color: #991b1b; }}
        .section {{
            margin-bottom: 0.75rem;
        }}
        .section h4 {{
            font-size: 0.85rem;
            color: #374151;
            margin-bottom: 0.25rem;
        }}
        .meta-info {{
            font-size: 0.8rem;
            color: #6b7280;
            border-top: 1px solid #e5e7eb;
            padding-top: 0.5rem;
            margin-top: 0.75rem;
        }}
        @media print {{
            body {{ padding: 0; }}
            header, .feedback-item {{ page-break-inside: avoid; }}
        }}
    </style>
</head>
<body>
    <header>
        <h1>Feedback Report</h1>
        <p class="meta"><strong>{name}</strong> — {role_label}</p>
        <p class="meta">Generated on {generated}</p>
    </header>

    <div class="summary">
        <h2>Summary</h2>
        <p>Total feedback: <strong>{total}</strong></p>
        <div class="stats">
            <div class="stat"><div class="value">{positive}</div><div class="label">Positive</div></div>
            <div class="stat"><div class="value">{neutral}</div><div class="label">Neutral</div></div>
            <div class="stat"><div class="value">{negative}</div><div class="label">Negative</div></div>
            <div class="stat"><div class="value">{acknowledged}</div><div class="label">Acknowledged</div></div>
        </div>
    </div>

    <main>
{items}
    </main>
    <script>window.addEventListener('load', function () {{ window.print(); }});</script>
</body>
</html>"#,
        name = escape_html(user_name),
        role_label = role.label(),
        generated = generated.format("%B %-d, %Y"),
        total = total,
        positive = positive,
        neutral = neutral,
        negative = negative,
        acknowledged = acknowledged,
        items = items_html,
    )
}

fn render_item(item: &Feedback, role: Role) -> String {
    let direction = match role {
        Role::Manager => "To",
        Role::Employee => "From",
    };
    let acknowledgement = match item.acknowledged_display() {
        Some(ts) => format!("<p>Acknowledged: {}</p>", escape_html(&ts)),
        None => "<p>Not yet acknowledged</p>".to_string(),
    };

    format!(
        r#"        <div class="feedback-item">
            <div class="feedback-item-header">
                <strong>{direction}: {counterparty}</strong>
                <span class="sentiment {sentiment}">{sentiment}</span>
            </div>
            <div class="section">
                <h4>Strengths</h4>
                <p>{strengths}</p>
            </div>
            <div class="section">
                <h4>Areas to Improve</h4>
                <p>{areas}</p>
            </div>
            <div class="meta-info">
                <p>Created: {created}</p>
                {acknowledgement}
            </div>
        </div>"#,
        direction = direction,
        counterparty = escape_html(item.counterparty_name(role)),
        sentiment = item.overall_sentiment,
        strengths = escape_html(&item.strengths).replace('\n', "<br>"),
        areas = escape_html(&item.areas_to_improve).replace('\n', "<br>"),
        created = escape_html(&dates::format_long(&item.created_at)),
        acknowledgement = acknowledgement,
    )
}
