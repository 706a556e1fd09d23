use serde::Serialize;
use serde_json::Value;

const USER_FIELD: &str = "id_user";
const EVENT_FIELD: &str = "id_event";

/// Content of an attendee QR code: who is checking in to which event.
///
/// Ids are carried as opaque strings; resolving them is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QrPayload {
    #[serde(rename = "id_user")]
    pub user_id: String,
    #[serde(rename = "id_event")]
    pub event_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QrCodecError {
    #[error("Invalid QR payload")]
    InvalidPayload,
}

/// Encode `(user_id, event_id)` as `{"id_user":"..","id_event":".."}`.
pub fn encode(user_id: &str, event_id: &str) -> String {
    // Value's Display escapes the strings
    format!(
        "{{\"{USER_FIELD}\":{},\"{EVENT_FIELD}\":{}}}",
        Value::from(user_id),
        Value::from(event_id)
    )
}

/// Decode a scanned payload.
///
/// Fails unless the text is a JSON object whose `id_user` and `id_event`
/// fields are both non-empty strings.
pub fn decode(payload: &str) -> Result<QrPayload, QrCodecError> {
    let value: Value =
        serde_json::from_str(payload.trim()).map_err(|_| QrCodecError::InvalidPayload)?;

    let object = value.as_object().ok_or(QrCodecError::InvalidPayload)?;

    let field = |name: &str| -> Result<String, QrCodecError> {
        match object.get(name).and_then(Value::as_str) {
            Some(s) if !s.is_empty() => Ok(s.to_string()),
            _ => Err(QrCodecError::InvalidPayload),
        }
    };

    Ok(QrPayload {
        user_id: field(USER_FIELD)?,
        event_id: field(EVENT_FIELD)?,
    })
}
