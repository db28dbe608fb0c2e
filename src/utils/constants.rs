use std::time::Duration;

pub const DEFAULT_HOST: &str = "mandrillapp.com";
pub const SEND_RAW_PATH: &str = "/api/1.0/messages/send-raw.json";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub mod env {
    pub const MANDRILL_API_KEY_ENV_VAR: &str = "MANDRILL_API_KEY";
    pub const MANDRILL_HOST_ENV_VAR: &str = "MANDRILL_HOST";
    pub const MANDRILL_PORT_ENV_VAR: &str = "MANDRILL_PORT";
}
