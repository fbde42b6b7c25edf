use serde::Serialize;

use crate::config::{EmailJsConfig, RECIPIENT_NAME};
use crate::contact::form::FormState;

/// Variables consumed by the lead email template.
///
/// The template reads both the `from_*` and the `user_*` names, so every
/// value is sent under each of them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_title: String,
    pub from_email: String,
    pub message: String,
    pub to_name: String,
    pub reply_to: String,
    pub user_name: String,
    pub user_email: String,
    pub user_message: String,
    pub user_title: String,
}

impl TemplateParams {
    pub fn from_form(form: &FormState) -> Self {
        Self {
            from_name: form.name.clone(),
            from_title: form.title.clone(),
            from_email: form.email.clone(),
            message: form.message.clone(),
            to_name: RECIPIENT_NAME.to_string(),
            reply_to: form.email.clone(),
            user_name: form.name.clone(),
            user_email: form.email.clone(),
            user_message: form.message.clone(),
            user_title: form.title.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmailJsRequest {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: TemplateParams,
}

impl EmailJsRequest {
    pub fn new(config: &EmailJsConfig, form: &FormState) -> Self {
        Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            user_id: config.public_key.clone(),
            template_params: TemplateParams::from_form(form),
        }
    }
}
