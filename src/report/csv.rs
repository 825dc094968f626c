//! CSV export of a feedback collection.

use chrono::NaiveDate;

use crate::api::types::{Feedback, Role};
use crate::dates;

/// Quote a field when it contains the delimiter, quotes, or newlines;
/// embedded quotes are doubled.
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Render the feedback list as CSV. The counterparty column is labelled for
/// the reader's role: managers export the employee names, employees the
/// manager names.
pub fn render(feedback: &[Feedback], role: Role) -> String {
    let counterparty = match role {
        Role::Manager => "Employee",
        Role::Employee => "Manager",
    };
    let mut out = format!(
        "Date,{counterparty},Sentiment,Strengths,Areas to Improve,Acknowledged,Acknowledged Date\n"
    );

    for item in feedback {
        let acknowledged_date = if item.acknowledged {
            item.acknowledged_at
                .as_deref()
                .map(dates::format_short)
                .unwrap_or_default()
        } else {
            String::new()
        };

        out.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            escape_csv(&dates::format_short(&item.created_at)),
            escape_csv(item.counterparty_name(role)),
            item.overall_sentiment,
            escape_csv(&item.strengths),
            escape_csv(&item.areas_to_improve),
            if item.acknowledged { "Yes" } else { "No" },
            escape_csv(&acknowledged_date),
        ));
    }

    out
}

/// Download name for a CSV generated on the given date.
pub fn filename(date: NaiveDate) -> String {
    format!("feedback-report-{}.csv", date.format("%Y-%m-%d"))
}
