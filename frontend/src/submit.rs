//! Contact form state and the collaborators that deliver a submitted message.

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];
}

impl ContactMessage {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("could not build request: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Request(String),
    #[error("server answered with status {0}")]
    Status(u16),
}

pub type SubmitFuture = Pin<Box<dyn Future<Output = Result<(), SubmitError>>>>;

/// Delivers a contact message somewhere.
pub trait ContactSubmitter {
    fn submit(&self, message: ContactMessage) -> SubmitFuture;
}

/// Posts the message as JSON to the backend.
pub struct HttpSubmitter {
    url: String,
}

impl HttpSubmitter {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl ContactSubmitter for HttpSubmitter {
    fn submit(&self, message: ContactMessage) -> SubmitFuture {
        let url = self.url.clone();
        Box::pin(async move {
            let request = Request::post(&url)
                .json(&message)
                .map_err(|e| SubmitError::Encode(e.to_string()))?;
            let response = request
                .send()
                .await
                .map_err(|e| SubmitError::Request(e.to_string()))?;
            if response.ok() {
                Ok(())
            } else {
                Err(SubmitError::Status(response.status()))
            }
        })
    }
}

/// Accepts every message and only writes it to the log.
pub struct LogSubmitter;

impl ContactSubmitter for LogSubmitter {
    fn submit(&self, message: ContactMessage) -> SubmitFuture {
        Box::pin(async move {
            log::info!(
                "contact message from {} <{}>: {:?}",
                message.name,
                message.email,
                message.subject
            );
            Ok(())
        })
    }
}

/// Shared handle so a submitter can travel through props and context.
#[derive(Clone)]
pub struct SubmitterHandle(pub Rc<dyn ContactSubmitter>);

impl PartialEq for SubmitterHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl SubmitterHandle {
    pub fn new<S: ContactSubmitter + 'static>(submitter: S) -> Self {
        Self(Rc::new(submitter))
    }

    /// Backend delivery in release builds, logging otherwise.
    pub fn from_config() -> Self {
        if config::CONTACT_SUBMIT_ENABLED {
            Self::new(HttpSubmitter::new(config::contact_url()))
        } else {
            Self::new(LogSubmitter)
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

impl FormStatus {
    pub fn note(&self) -> Option<String> {
        match self {
            FormStatus::Idle => None,
            FormStatus::Sending => Some("Отправляем...".to_string()),
            FormStatus::Sent => Some("Спасибо! Мы свяжемся с вами в ближайшее время.".to_string()),
            FormStatus::Failed(reason) => Some(format!("Не удалось отправить сообщение: {}", reason)),
        }
    }
}

pub enum FormAction {
    Edit(ContactField, String),
    Submit,
    Finished(Result<(), SubmitError>),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub message: ContactMessage,
    pub status: FormStatus,
    /// Snapshot of what went out with the request in flight.
    in_flight: Option<ContactMessage>,
}

impl ContactForm {
    pub fn is_sending(&self) -> bool {
        self.status == FormStatus::Sending
    }
}

impl Reducible for ContactForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Edit(field, value) => {
                next.message.set(field, value);
                if matches!(next.status, FormStatus::Sent | FormStatus::Failed(_)) {
                    next.status = FormStatus::Idle;
                }
            }
            FormAction::Submit => {
                if self.is_sending() {
                    return self;
                }
                next.status = FormStatus::Sending;
                next.in_flight = Some(self.message.clone());
            }
            FormAction::Finished(_) if !self.is_sending() => return self,
            FormAction::Finished(Ok(())) => {
                // Only clear what was sent, text typed since then stays
                if let Some(sent) = next.in_flight.take() {
                    for field in ContactField::ALL {
                        if next.message.get(field) == sent.get(field) {
                            next.message.set(field, String::new());
                        }
                    }
                }
                next.status = FormStatus::Sent;
            }
            FormAction::Finished(Err(err)) => {
                next.in_flight = None;
                next.status = FormStatus::Failed(err.to_string());
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn filled() -> Rc<ContactForm> {
        let form = Rc::new(ContactForm::default());
        let form = form.reduce(FormAction::Edit(ContactField::Name, "Анна".into()));
        let form = form.reduce(FormAction::Edit(ContactField::Email, "anna@example.com".into()));
        let form = form.reduce(FormAction::Edit(ContactField::Subject, "Сайт".into()));
        form.reduce(FormAction::Edit(ContactField::Message, "Нужен лендинг".into()))
    }

    #[test]
    fn edits_land_in_their_field() {
        let form = filled();
        assert_eq!(form.message.get(ContactField::Name), "Анна");
        assert_eq!(form.message.get(ContactField::Email), "anna@example.com");
        assert_eq!(form.message.get(ContactField::Subject), "Сайт");
        assert_eq!(form.message.get(ContactField::Message), "Нужен лендинг");
        assert_eq!(form.status, FormStatus::Idle);
    }

    #[test]
    fn successful_submit_clears_fields() {
        let form = filled().reduce(FormAction::Submit);
        assert!(form.is_sending());
        assert_eq!(form.message.name, "Анна");

        let form = form.reduce(FormAction::Finished(Ok(())));
        assert_eq!(form.status, FormStatus::Sent);
        assert_eq!(form.message, ContactMessage::default());
    }

    #[test]
    fn failed_submit_keeps_fields_and_reports() {
        let form = filled()
            .reduce(FormAction::Submit)
            .reduce(FormAction::Finished(Err(SubmitError::Status(502))));

        assert_eq!(form.status, FormStatus::Failed("server answered with status 502".into()));
        assert_eq!(form.message.email, "anna@example.com");
        assert!(form.status.note().unwrap().contains("502"));

        // Editing again clears the stale error
        let form = form.reduce(FormAction::Edit(ContactField::Subject, "Сайт и бот".into()));
        assert_eq!(form.status, FormStatus::Idle);
    }

    #[test]
    fn second_submit_while_sending_is_ignored() {
        let sending = filled().reduce(FormAction::Submit);
        let again = sending.clone().reduce(FormAction::Submit);
        assert!(Rc::ptr_eq(&sending, &again));
    }

    #[test]
    fn text_typed_while_sending_survives_success() {
        let form = filled()
            .reduce(FormAction::Submit)
            .reduce(FormAction::Edit(ContactField::Message, "И еще бот".into()))
            .reduce(FormAction::Finished(Ok(())));

        assert_eq!(form.status, FormStatus::Sent);
        assert_eq!(form.message.name, "");
        assert_eq!(form.message.email, "");
        assert_eq!(form.message.subject, "");
        assert_eq!(form.message.message, "И еще бот");
    }

    #[test]
    fn late_result_without_pending_send_is_dropped() {
        let idle = filled();
        let after = idle.clone().reduce(FormAction::Finished(Ok(())));
        assert!(Rc::ptr_eq(&idle, &after));
        assert_eq!(after.message.name, "Анна");

        let sent = filled()
            .reduce(FormAction::Submit)
            .reduce(FormAction::Finished(Ok(())));
        let twice = sent.clone().reduce(FormAction::Finished(Err(SubmitError::Status(500))));
        assert_eq!(twice.status, FormStatus::Sent);
    }

    #[test]
    fn log_submitter_always_succeeds() {
        let message = filled().message.clone();
        assert_eq!(block_on(LogSubmitter.submit(message)), Ok(()));
    }

    #[test]
    fn message_serializes_with_plain_field_names() {
        let json = serde_json::to_value(&filled().message).unwrap();
        assert_eq!(json["name"], "Анна");
        assert_eq!(json["email"], "anna@example.com");
        assert_eq!(json["subject"], "Сайт");
        assert_eq!(json["message"], "Нужен лендинг");
    }

    #[test]
    fn handles_compare_by_identity() {
        let a = SubmitterHandle::new(LogSubmitter);
        let b = a.clone();
        let c = SubmitterHandle::new(LogSubmitter);
        assert!(a == b);
        assert!(a != c);
    }
}
