//! Sentiment aggregation for the dashboard.
//!
//! Percentages are rounded half-up and each category is rounded
//! independently, so they need not sum to exactly 100. Consumers depend on
//! that exact behavior; do not normalize.

use crate::api::types::DashboardStats;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentSummary {
    pub positive_pct: i64,
    pub neutral_pct: i64,
    pub negative_pct: i64,
}

/// Integer percentage per category; all zero when there is no feedback.
pub fn percentages(stats: &DashboardStats) -> SentimentSummary {
    if stats.total_feedback <= 0 {
        return SentimentSummary::default();
    }
    let total = stats.total_feedback as f64;
    let pct = |count: i64| ((count as f64 / total) * 100.0).round() as i64;
    SentimentSummary {
        positive_pct: pct(stats.positive_feedback),
        neutral_pct: pct(stats.neutral_feedback),
        negative_pct: pct(stats.negative_feedback),
    }
}

/// Qualitative banner derived from the percentage thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverallSentiment {
    Excellent,
    Good,
    NeedsAttention,
    Neutral,
}

impl OverallSentiment {
    pub fn from_summary(summary: &SentimentSummary) -> Self {
        if summary.positive_pct >= 60 {
            OverallSentiment::Excellent
        } else if summary.positive_pct >= 40 {
            OverallSentiment::Good
        } else if summary.negative_pct >= 40 {
            OverallSentiment::NeedsAttention
        } else {
            OverallSentiment::Neutral
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OverallSentiment::Excellent => "Excellent",
            OverallSentiment::Good => "Good",
            OverallSentiment::NeedsAttention => "Needs Attention",
            OverallSentiment::Neutral => "Neutral",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            OverallSentiment::Excellent => "excellent",
            OverallSentiment::Good => "good",
            OverallSentiment::NeedsAttention => "needs-attention",
            OverallSentiment::Neutral => "neutral",
        }
    }
}

/// Coaching lines shown under the chart. More than one can apply at once
/// (the thresholds overlap), so all applicable lines are returned in order.
pub fn insights(summary: &SentimentSummary, is_manager: bool) -> Vec<&'static str> {
    let mut lines = Vec::new();
    if is_manager {
        if summary.positive_pct >= 60 {
            lines.push("Great job! Your team is receiving mostly positive feedback. Keep up the good work!");
        }
        if summary.positive_pct < 60 && summary.negative_pct < 30 {
            lines.push("Your feedback is balanced. Consider focusing on specific areas for improvement.");
        }
        if summary.negative_pct >= 30 {
            lines.push("Consider having one-on-one meetings to address areas of concern with your team.");
        }
    } else {
        if summary.positive_pct >= 60 {
            lines.push("Excellent! You're receiving mostly positive feedback. Keep up the great work!");
        }
        if summary.positive_pct < 60 && summary.negative_pct < 30 {
            lines.push("You're on the right track. Focus on the improvement areas mentioned in your feedback.");
        }
        if summary.negative_pct >= 30 {
            lines.push("Consider discussing with your manager about specific steps to improve in the mentioned areas.");
        }
    }
    lines
}
