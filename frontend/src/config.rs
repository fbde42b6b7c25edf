use log::Level;

pub const EMAILJS_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

pub const EMAILJS_SERVICE_ID: &str = match option_env!("JDS_EMAILJS_SERVICE_ID") {
    Some(id) => id,
    None => "service_an3nu74",
};

pub const EMAILJS_TEMPLATE_ID: &str = match option_env!("JDS_EMAILJS_TEMPLATE_ID") {
    Some(id) => id,
    None => "template_5n2qs91",
};

pub const EMAILJS_PUBLIC_KEY: &str = match option_env!("JDS_EMAILJS_PUBLIC_KEY") {
    Some(key) => key,
    None => "gNxPGHOi6K9jb8rdM",
};

/// Shown as the addressee in every lead email.
pub const RECIPIENT_NAME: &str = "JDS Team";

pub const SUCCESS_RESET_MS: u32 = 3_000;
pub const ERROR_RESET_MS: u32 = 5_000;

pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;

pub const MIN_MESSAGE_LEN: usize = 10;

/// Identifiers handed to the email-delivery service with every send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub api_url: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            api_url: EMAILJS_API_URL.to_string(),
            service_id: EMAILJS_SERVICE_ID.to_string(),
            template_id: EMAILJS_TEMPLATE_ID.to_string(),
            public_key: EMAILJS_PUBLIC_KEY.to_string(),
        }
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Local trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
