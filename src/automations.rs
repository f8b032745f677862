//! Catalog of automated actions an `automated` node can reference.
//!
//! This is configuration data for the editor's action picker, served by
//! `GET /automations`. It plays no part in validation or traversal
//! beyond the action id an automated node stores.

use serde::{Deserialize, Serialize};

/// Descriptor for one automated action: stable id, display label, and
/// the parameter names the action expects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomationAction {
    pub id: String,
    pub label: String,
    pub params: Vec<String>,
}

impl AutomationAction {
    fn new(id: &str, label: &str, params: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            params: params.iter().map(|p| (*p).to_string()).collect(),
        }
    }
}

/// The available automated actions, in display order.
#[must_use]
pub fn catalog() -> Vec<AutomationAction> {
    vec![
        AutomationAction::new("send_email", "Send Email", &["to", "subject", "body"]),
        AutomationAction::new("generate_doc", "Generate Document", &["template", "recipient"]),
        AutomationAction::new("slack_notify", "Slack Notification", &["channel", "message"]),
        AutomationAction::new(
            "create_ticket",
            "Create Support Ticket",
            &["title", "priority", "assignee"],
        ),
        AutomationAction::new("update_crm", "Update CRM Record", &["recordId", "field", "value"]),
        AutomationAction::new(
            "schedule_meeting",
            "Schedule Meeting",
            &["attendees", "duration", "subject"],
        ),
        AutomationAction::new("webhook_call", "Call Webhook", &["url", "method", "payload"]),
        AutomationAction::new("data_transform", "Transform Data", &["source", "transformation"]),
    ]
}

/// Looks up an action by id.
#[must_use]
pub fn find(action_id: &str) -> Option<AutomationAction> {
    catalog().into_iter().find(|action| action.id == action_id)
}
