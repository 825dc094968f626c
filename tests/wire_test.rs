//! Wire-format tests — decoding backend JSON payloads and HTML form bodies,
//! plus the display helpers views and reports rely on.

mod common;

use common::*;
use teampulse::api::types::{
    DashboardData, Feedback, FeedbackRequest, FeedbackUpdate, RequestStatus, Role, Sentiment,
};
use teampulse::handlers::auth_handlers::LoginForm;
use teampulse::handlers::feedback_handlers::FeedbackForm;
use teampulse::handlers::request_handlers::RequestForm;

#[test]
fn dashboard_payload_decodes() {
    let payload = r#"{
        "feedback": [{
            "id": 7,
            "manager_id": 1,
            "employee_id": 2,
            "strengths": "Ships reliably",
            "areas_to_improve": "Writes sparse docs",
            "overall_sentiment": "positive",
            "acknowledged": true,
            "acknowledged_at": "2025-07-02T09:30:00",
            "created_at": "2025-07-01T12:00:00",
            "employee": {
                "id": 2,
                "email": "evan@example.com",
                "full_name": "Evan Employee",
                "role": "employee",
                "is_active": true,
                "created_at": "2025-01-01T00:00:00"
            }
        }],
        "stats": {
            "total_feedback": 1,
            "positive_feedback": 1,
            "neutral_feedback": 0,
            "negative_feedback": 0,
            "team_members_count": 3
        }
    }"#;

    let data: DashboardData = serde_json::from_str(payload).unwrap();
    assert_eq!(data.stats.team_members_count, 3);
    assert_eq!(data.feedback.len(), 1);

    let item = &data.feedback[0];
    assert_eq!(item.overall_sentiment, Sentiment::Positive);
    assert!(item.acknowledged);
    // Optional embeds default cleanly when the backend omits them
    assert!(item.manager.is_none());
    assert_eq!(item.employee_name(), "Evan Employee");
}

#[test]
fn feedback_request_decodes_with_optional_fields() {
    let payload = r#"{
        "id": 3,
        "employee_id": 2,
        "manager_id": 1,
        "status": "pending",
        "created_at": "2025-07-01T08:00:00"
    }"#;

    let request: FeedbackRequest = serde_json::from_str(payload).unwrap();
    assert_eq!(request.status, RequestStatus::Pending);
    assert!(request.message.is_none());
    assert!(request.completed_at.is_none());
    assert_eq!(request.employee_name(), "Unknown Employee");
    // Falls back to the creation timestamp in the history list
    assert_eq!(request.resolved_display(), "Jul 1, 2025, 08:00");
}

#[test]
fn enums_use_lowercase_wire_names() {
    assert_eq!(serde_json::to_string(&Sentiment::Negative).unwrap(), "\"negative\"");
    assert_eq!(
        serde_json::from_str::<RequestStatus>("\"cancelled\"").unwrap(),
        RequestStatus::Cancelled
    );
    assert_eq!(serde_json::to_string(&Role::Manager).unwrap(), "\"manager\"");
}

#[test]
fn feedback_update_omits_unset_fields() {
    let update = FeedbackUpdate {
        strengths: Some("New strengths".to_string()),
        ..Default::default()
    };
    let json = serde_json::to_value(&update).unwrap();
    assert_eq!(json, serde_json::json!({ "strengths": "New strengths" }));
}

#[test]
fn counterparty_name_degrades_to_blank() {
    let mut item = feedback(1, Sentiment::Neutral, false);
    item.employee = None;
    item.manager = None;
    assert_eq!(item.counterparty_name(Role::Manager), "");
    assert_eq!(item.counterparty_name(Role::Employee), "");
}

#[test]
fn acknowledged_display_requires_both_flag_and_timestamp() {
    let acked = feedback(1, Sentiment::Positive, true);
    assert_eq!(
        acked.acknowledged_display().as_deref(),
        Some("Jul 2, 2025, 09:30")
    );

    let unacked = feedback(2, Sentiment::Positive, false);
    assert!(unacked.acknowledged_display().is_none());

    // A stray timestamp without the flag never renders an acknowledgement
    let mut inconsistent: Feedback = feedback(3, Sentiment::Positive, false);
    inconsistent.acknowledged_at = Some("2025-07-02T09:30:00".to_string());
    assert!(inconsistent.acknowledged_display().is_none());
}

#[test]
fn feedback_form_decodes_from_urlencoded_body() {
    let body = "employee_id=3&strengths=Clear+writing&areas_to_improve=Estimates&overall_sentiment=positive&csrf_token=tok";
    let form: FeedbackForm = serde_urlencoded::from_str(body).unwrap();
    assert_eq!(form.employee_id, 3);
    assert_eq!(form.overall_sentiment, Sentiment::Positive);
    assert_eq!(form.strengths, "Clear writing");
}

#[test]
fn login_and_request_forms_decode() {
    let login: LoginForm =
        serde_urlencoded::from_str("email=a%40b.com&password=secret&csrf_token=tok").unwrap();
    assert_eq!(login.email, "a@b.com");

    let request: RequestForm =
        serde_urlencoded::from_str("message=&csrf_token=tok").unwrap();
    assert_eq!(request.message, "");
}
