use serde::{Deserialize, Serialize};

/// Service type excluded from every dashboard view. Records of this
/// type belong to a separate screen and must never surface here.
pub const RESERVED_SERVICE_TYPE: &str = "tarot-frequencial";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Installment,
}

/// A single billable service record. The store file is written by an
/// external editor flow and carries more fields than the dashboard
/// reads; those ride along in `extra` and survive a persist.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub client_name: String,
    /// Kept as the raw string from the store; parsed on demand.
    pub appointment_date: String,
    pub service_type: String,
    /// Decimal string; may be empty or malformed, coerced to 0 when summed.
    pub amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
    #[serde(default)]
    pub attention_flag: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attention_note: Option<String>,
    /// Editor-written fields the dashboard does not read. Captured so
    /// a full-replace persist hands them back to the store intact.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Appointment {
    pub fn is_reserved(&self) -> bool {
        self.service_type == RESERVED_SERVICE_TYPE
    }
}

/// On-disk store format: the full, unscoped record list.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    pub appointments: Vec<Appointment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// Payload handed to the notification sink; this service delivers it
/// in HTTP response bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SetPeriodRequest {
    pub period: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsResponse {
    pub count: usize,
    pub week_count: usize,
    pub period: String,
    pub period_label: String,
    pub period_amount: f64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditResponse {
    pub navigate_to: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StagedDeleteResponse {
    pub staged: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutcomeResponse {
    pub notification: Option<Notification>,
    pub totals: TotalsResponse,
}
