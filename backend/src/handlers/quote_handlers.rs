use axum::{http::StatusCode, Json};
use serde::Deserialize;
use serde_json::{json, Value};

/// Quote request as posted by the site's form.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuoteRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub postcode: String,
    pub service: String,
    pub property_type: String,
    pub roof_type: String,
    pub message: String,
    pub subject: String,
}

impl QuoteRequest {
    /// Wire names of required fields left blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("service", &self.service),
            ("propertyType", &self.property_type),
            ("roofType", &self.roof_type),
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("postcode", &self.postcode),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}

pub async fn submit_quote(Json(request): Json<QuoteRequest>) -> (StatusCode, Json<Value>) {
    let missing = request.missing_fields();
    if !missing.is_empty() {
        tracing::warn!(?missing, "Rejected incomplete quote request");
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "ok": false, "missing": missing })),
        );
    }

    tracing::info!(
        subject = %request.subject,
        service = %request.service,
        postcode = %request.postcode,
        "Received quote request"
    );
    (StatusCode::OK, Json(json!({ "ok": true })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_are_reported_by_wire_name() {
        let request = QuoteRequest {
            name: "Jo".into(),
            email: "jo@example.com".into(),
            phone: "  ".into(),
            postcode: "SO14 1AA".into(),
            service: "roof-repairs".into(),
            property_type: String::new(),
            roof_type: "flat".into(),
            ..QuoteRequest::default()
        };
        assert_eq!(request.missing_fields(), vec!["propertyType", "phone"]);
    }

    #[test]
    fn message_is_optional() {
        let request: QuoteRequest = serde_json::from_value(json!({
            "name": "Jo", "email": "jo@example.com", "phone": "07700 900123",
            "postcode": "SO14 1AA", "service": "leadwork",
            "propertyType": "detached", "roofType": "pitched-slate"
        }))
        .unwrap();
        assert!(request.missing_fields().is_empty());
        assert!(request.message.is_empty());
    }
}
