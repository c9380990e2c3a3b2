//! State for the multi-step quote request form.
//!
//! The steps are strictly linear and each one is gated on its required
//! fields being filled in. Nothing here touches the DOM, the modal in
//! `components::quote_modal` drives it.

use serde::Serialize;
use std::fmt;

pub const TOTAL_STEPS: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteStep {
    #[default]
    ServiceType,
    PropertyType,
    RoofType,
    ContactDetails,
    Message,
}

impl QuoteStep {
    pub fn number(self) -> u8 {
        match self {
            QuoteStep::ServiceType => 1,
            QuoteStep::PropertyType => 2,
            QuoteStep::RoofType => 3,
            QuoteStep::ContactDetails => 4,
            QuoteStep::Message => 5,
        }
    }

    pub fn next(self) -> Option<QuoteStep> {
        match self {
            QuoteStep::ServiceType => Some(QuoteStep::PropertyType),
            QuoteStep::PropertyType => Some(QuoteStep::RoofType),
            QuoteStep::RoofType => Some(QuoteStep::ContactDetails),
            QuoteStep::ContactDetails => Some(QuoteStep::Message),
            QuoteStep::Message => None,
        }
    }

    pub fn prev(self) -> Option<QuoteStep> {
        match self {
            QuoteStep::ServiceType => None,
            QuoteStep::PropertyType => Some(QuoteStep::ServiceType),
            QuoteStep::RoofType => Some(QuoteStep::PropertyType),
            QuoteStep::ContactDetails => Some(QuoteStep::RoofType),
            QuoteStep::Message => Some(QuoteStep::ContactDetails),
        }
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }

    pub fn heading(self) -> &'static str {
        match self {
            QuoteStep::ServiceType => "What do you need help with?",
            QuoteStep::PropertyType => "What type of property is it?",
            QuoteStep::RoofType => "What kind of roof do you have?",
            QuoteStep::ContactDetails => "How can we reach you?",
            QuoteStep::Message => "Anything else we should know?",
        }
    }

    /// Fields that must be non-blank before leaving this step.
    pub fn required(self) -> &'static [Field] {
        match self {
            QuoteStep::ServiceType => &[Field::Service],
            QuoteStep::PropertyType => &[Field::PropertyType],
            QuoteStep::RoofType => &[Field::RoofType],
            QuoteStep::ContactDetails => &[Field::Name, Field::Email, Field::Phone, Field::Postcode],
            QuoteStep::Message => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Service,
    PropertyType,
    RoofType,
    Name,
    Email,
    Phone,
    Postcode,
    Message,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Service => "service",
            Field::PropertyType => "property type",
            Field::RoofType => "roof type",
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone number",
            Field::Postcode => "postcode",
            Field::Message => "message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteError {
    MissingFields(Vec<Field>),
    LastStep,
    Network(String),
    Rejected(u16),
}

impl fmt::Display for QuoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuoteError::MissingFields(fields) => {
                let names: Vec<&str> = fields.iter().map(|field| field.label()).collect();
                write!(f, "Please fill in your {}", names.join(", "))
            }
            QuoteError::LastStep => write!(f, "Already on the last step"),
            // The visitor never sees transport details, only that it failed.
            QuoteError::Network(_) | QuoteError::Rejected(_) => write!(
                f,
                "Something went wrong sending your request. Please try again or call us."
            ),
        }
    }
}

/// JSON body posted to the form service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSubmission {
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

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuoteForm {
    pub step: QuoteStep,
    pub service: String,
    pub property_type: String,
    pub roof_type: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub postcode: String,
    pub message: String,
}

impl QuoteForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Service => &self.service,
            Field::PropertyType => &self.property_type,
            Field::RoofType => &self.roof_type,
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Postcode => &self.postcode,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Service => self.service = value,
            Field::PropertyType => self.property_type = value,
            Field::RoofType => self.roof_type = value,
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Postcode => self.postcode = value.to_uppercase(),
            Field::Message => self.message = value,
        }
    }

    pub fn missing_fields(&self, step: QuoteStep) -> Vec<Field> {
        step.required()
            .iter()
            .copied()
            .filter(|field| self.get(*field).trim().is_empty())
            .collect()
    }

    pub fn can_advance(&self) -> bool {
        self.missing_fields(self.step).is_empty()
    }

    pub fn advance(&mut self) -> Result<QuoteStep, QuoteError> {
        let missing = self.missing_fields(self.step);
        if !missing.is_empty() {
            return Err(QuoteError::MissingFields(missing));
        }
        let next = self.step.next().ok_or(QuoteError::LastStep)?;
        self.step = next;
        Ok(next)
    }

    pub fn back(&mut self) -> QuoteStep {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
        self.step
    }

    /// Validates every step, not just the current one, and builds the wire body.
    pub fn submission(&self) -> Result<QuoteSubmission, QuoteError> {
        let mut missing = Vec::new();
        let mut step = Some(QuoteStep::ServiceType);
        while let Some(current) = step {
            missing.extend(self.missing_fields(current));
            step = current.next();
        }
        if !missing.is_empty() {
            return Err(QuoteError::MissingFields(missing));
        }

        let name = self.name.trim().to_string();
        Ok(QuoteSubmission {
            subject: format!("New quote request from {}", name),
            name,
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            postcode: self.postcode.trim().to_string(),
            service: self.service.clone(),
            property_type: self.property_type.clone(),
            roof_type: self.roof_type.clone(),
            message: self.message.trim().to_string(),
        })
    }

    pub fn reset(&mut self) {
        *self = QuoteForm::default();
    }
}

/// What the quote modal holds between renders: the form plus the state of
/// any in-flight send.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuoteSession {
    pub form: QuoteForm,
    pub submitting: bool,
    pub error: Option<String>,
}

impl QuoteSession {
    pub fn advance(&mut self) {
        match self.form.advance() {
            Ok(_) => self.error = None,
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub fn back(&mut self) {
        self.form.back();
        self.error = None;
    }

    /// Values survive a close, only the step resets.
    pub fn close(&mut self) {
        self.form.step = QuoteStep::default();
        self.error = None;
    }

    /// Body to send, or `None` while a send is running or the form is incomplete.
    pub fn begin_submit(&mut self) -> Option<QuoteSubmission> {
        if self.submitting {
            return None;
        }
        match self.form.submission() {
            Ok(body) => {
                self.submitting = true;
                self.error = None;
                Some(body)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Applies the outcome of a send. Returns `true` when the modal should close.
    pub fn finish_submit(&mut self, outcome: Result<(), QuoteError>) -> bool {
        self.submitting = false;
        match outcome {
            Ok(()) => {
                self.form.reset();
                self.error = None;
                true
            }
            Err(e) => {
                self.error = Some(e.to_string());
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> QuoteForm {
        let mut form = QuoteForm::default();
        form.set(Field::Service, "roof-repairs".into());
        form.set(Field::PropertyType, "terraced".into());
        form.set(Field::RoofType, "pitched-tiled".into());
        form.set(Field::Name, "Jo Bloggs".into());
        form.set(Field::Email, "jo@example.com".into());
        form.set(Field::Phone, "07700 900123".into());
        form.set(Field::Postcode, "so14 1aa".into());
        form
    }

    #[test]
    fn cannot_advance_with_empty_required_field() {
        let mut form = QuoteForm::default();
        assert!(!form.can_advance());
        assert_eq!(
            form.advance(),
            Err(QuoteError::MissingFields(vec![Field::Service]))
        );
        assert_eq!(form.step, QuoteStep::ServiceType);

        form.set(Field::Service, "   ".into());
        assert!(form.advance().is_err());
    }

    #[test]
    fn contact_step_needs_all_four_fields() {
        let mut form = filled();
        form.step = QuoteStep::ContactDetails;
        form.set(Field::Phone, String::new());
        form.set(Field::Email, String::new());
        assert_eq!(form.missing_fields(QuoteStep::ContactDetails), vec![Field::Email, Field::Phone]);
        assert!(form.advance().is_err());
    }

    #[test]
    fn walks_all_steps_in_order() {
        let mut form = filled();
        let mut seen = vec![form.step.number()];
        while !form.step.is_last() {
            form.advance().unwrap();
            seen.push(form.step.number());
        }
        assert_eq!(seen, vec![1, 2, 3, 4, 5]);
        assert_eq!(seen.len() as u8, TOTAL_STEPS);
        assert_eq!(form.advance(), Err(QuoteError::LastStep));
    }

    #[test]
    fn back_stops_at_first_step() {
        let mut form = filled();
        form.advance().unwrap();
        assert_eq!(form.back(), QuoteStep::ServiceType);
        assert_eq!(form.back(), QuoteStep::ServiceType);
    }

    #[test]
    fn postcode_is_uppercased() {
        assert_eq!(filled().postcode, "SO14 1AA");
    }

    #[test]
    fn submission_has_camel_case_wire_names() {
        let body = filled().submission().unwrap();
        assert_eq!(body.subject, "New quote request from Jo Bloggs");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["propertyType"], "terraced");
        assert_eq!(json["roofType"], "pitched-tiled");
        assert_eq!(json["message"], "");
        assert_eq!(json.as_object().unwrap().len(), 9);
    }

    #[test]
    fn submission_rejects_incomplete_earlier_steps() {
        let mut form = filled();
        form.set(Field::RoofType, String::new());
        form.step = QuoteStep::Message;
        assert_eq!(
            form.submission(),
            Err(QuoteError::MissingFields(vec![Field::RoofType]))
        );
    }

    #[test]
    fn reset_clears_everything() {
        let mut form = filled();
        form.advance().unwrap();
        form.reset();
        assert_eq!(form, QuoteForm::default());
        assert_eq!(form.step, QuoteStep::ServiceType);
    }

    #[test]
    fn transport_errors_show_generic_text() {
        let text = QuoteError::Network("dns failure".into()).to_string();
        assert!(!text.is_empty());
        assert!(!text.contains("dns"));
        assert_eq!(text, QuoteError::Rejected(500).to_string());
    }

    fn sending() -> QuoteSession {
        let mut form = filled();
        form.set(Field::Message, "Tiles blew off".into());
        form.step = QuoteStep::Message;
        let mut session = QuoteSession { form, ..QuoteSession::default() };
        assert!(session.begin_submit().is_some());
        session
    }

    #[test]
    fn only_one_send_at_a_time() {
        let mut session = sending();
        assert!(session.submitting);
        assert_eq!(session.begin_submit(), None);
    }

    #[test]
    fn failed_send_keeps_values_and_stays_open() {
        let mut session = sending();
        let before = session.form.clone();

        let close = session.finish_submit(Err(QuoteError::Network("offline".into())));

        assert!(!close);
        assert!(!session.submitting);
        assert!(!session.error.as_deref().unwrap_or("").is_empty());
        assert_eq!(session.form, before);
        let fields = [
            Field::Service, Field::PropertyType, Field::RoofType, Field::Name,
            Field::Email, Field::Phone, Field::Postcode, Field::Message,
        ];
        for field in fields {
            assert!(!session.form.get(field).is_empty(), "{:?} was cleared", field);
        }
        // retrying the same submit works
        assert!(session.begin_submit().is_some());
    }

    #[test]
    fn successful_send_clears_and_closes() {
        let mut session = sending();
        assert!(session.finish_submit(Ok(())));
        assert_eq!(session, QuoteSession::default());
    }

    #[test]
    fn blocked_advance_reports_missing_fields() {
        let mut session = QuoteSession::default();
        session.advance();
        assert_eq!(session.form.step, QuoteStep::ServiceType);
        assert_eq!(session.error.as_deref(), Some("Please fill in your service"));

        session.form.set(Field::Service, "leadwork".into());
        session.advance();
        assert_eq!(session.form.step, QuoteStep::PropertyType);
        assert_eq!(session.error, None);
    }

    #[test]
    fn close_resets_step_but_keeps_values() {
        let mut session = QuoteSession { form: filled(), ..QuoteSession::default() };
        session.advance();
        session.advance();
        session.close();
        assert_eq!(session.form.step, QuoteStep::ServiceType);
        assert_eq!(session.form.name, "Jo Bloggs");
    }

    #[test]
    fn incomplete_submit_sets_error_without_sending() {
        let mut session = QuoteSession::default();
        assert_eq!(session.begin_submit(), None);
        assert!(!session.submitting);
        assert!(session.error.is_some());
    }
}
