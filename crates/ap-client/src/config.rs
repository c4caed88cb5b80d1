//! Client configuration.
//!
//! `Config` is immutable once built. The builder applies the fixed defaults
//! first and overlays only the fields the caller explicitly set, so merge
//! depth and precedence are explicit rather than hidden in a generic
//! recursive merge.
//!
//! Sensitive fields (password, signature) are redacted in Debug output.

use url::Url;

use crate::error::{Error, ErrorKind, Result};
use crate::{PRODUCTION_HOSTNAME, SANDBOX_APP_ID, SANDBOX_HOSTNAME};

/// Default production approval redirect template (`%s` is the pay key).
pub const APPROVAL_URL: &str =
    "https://www.paypal.com/cgi-bin/webscr?cmd=_ap-payment&paykey=%s";
/// Default sandbox approval redirect template.
pub const SANDBOX_APPROVAL_URL: &str =
    "https://www.sandbox.paypal.com/cgi-bin/webscr?cmd=_ap-payment&paykey=%s";
/// Default production preapproval redirect template (`%s` is the preapproval key).
pub const PREAPPROVAL_URL: &str =
    "https://www.paypal.com/cgi-bin/webscr?cmd=_ap-preapproval&preapprovalkey=%s";
/// Default sandbox preapproval redirect template.
pub const SANDBOX_PREAPPROVAL_URL: &str =
    "https://www.sandbox.paypal.com/cgi-bin/webscr?cmd=_ap-preapproval&preapprovalkey=%s";

/// Effective, immutable client configuration.
///
/// Construct through [`Config::builder`]; validation happens in
/// [`ConfigBuilder::build`] and a built `Config` never changes, so it is safe
/// to share across any number of concurrent calls.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    user_id: String,
    password: String,
    signature: String,
    app_id: String,
    sandbox: bool,
    request_format: String,
    response_format: String,
    production_hostname: String,
    sandbox_hostname: String,
    approval_url: String,
    sandbox_approval_url: String,
    preapproval_url: String,
    sandbox_preapproval_url: String,
    sandbox_email_address: Option<String>,
    device_ip_address: Option<String>,
    subject: Option<String>,
    endpoint_override: Option<String>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("user_id", &self.user_id)
            .field("password", &"[REDACTED]")
            .field("signature", &"[REDACTED]")
            .field("app_id", &self.app_id)
            .field("sandbox", &self.sandbox)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Create a builder seeded with the three required credentials.
    pub fn builder(
        user_id: impl Into<String>,
        password: impl Into<String>,
        signature: impl Into<String>,
    ) -> ConfigBuilder {
        ConfigBuilder::new(user_id, password, signature)
    }

    /// The API user id.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// The API password.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// The API signature.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// The application id.
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// Whether sandbox mode is enabled.
    pub fn sandbox(&self) -> bool {
        self.sandbox
    }

    /// The request data format header value.
    pub fn request_format(&self) -> &str {
        &self.request_format
    }

    /// The response data format header value.
    pub fn response_format(&self) -> &str {
        &self.response_format
    }

    /// The hostname selected by the sandbox flag.
    pub fn hostname(&self) -> &str {
        if self.sandbox {
            &self.sandbox_hostname
        } else {
            &self.production_hostname
        }
    }

    /// The approval redirect template selected by the sandbox flag.
    pub fn approval_template(&self) -> &str {
        if self.sandbox {
            &self.sandbox_approval_url
        } else {
            &self.approval_url
        }
    }

    /// The preapproval redirect template selected by the sandbox flag.
    pub fn preapproval_template(&self) -> &str {
        if self.sandbox {
            &self.sandbox_preapproval_url
        } else {
            &self.preapproval_url
        }
    }

    /// The sandbox email address, if configured.
    pub fn sandbox_email_address(&self) -> Option<&str> {
        self.sandbox_email_address.as_deref()
    }

    /// The device IP address, if configured.
    pub fn device_ip_address(&self) -> Option<&str> {
        self.device_ip_address.as_deref()
    }

    /// The security subject, if configured.
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// Full base URL replacing scheme and host, if configured.
    pub fn endpoint_override(&self) -> Option<&str> {
        self.endpoint_override.as_deref()
    }
}

/// Builder for [`Config`].
///
/// Every `with_*` call overlays one field on top of the defaults; precedence
/// is always caller over default, never the other way around.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    user_id: String,
    password: String,
    signature: String,
    app_id: Option<String>,
    sandbox: bool,
    request_format: Option<String>,
    response_format: Option<String>,
    production_hostname: Option<String>,
    sandbox_hostname: Option<String>,
    approval_url: Option<String>,
    sandbox_approval_url: Option<String>,
    preapproval_url: Option<String>,
    sandbox_preapproval_url: Option<String>,
    sandbox_email_address: Option<String>,
    device_ip_address: Option<String>,
    subject: Option<String>,
    endpoint_override: Option<String>,
}

impl ConfigBuilder {
    /// Create a builder with the required credentials.
    pub fn new(
        user_id: impl Into<String>,
        password: impl Into<String>,
        signature: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            password: password.into(),
            signature: signature.into(),
            ..Self::default()
        }
    }

    /// Set the application id.
    pub fn with_app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self
    }

    /// Enable or disable sandbox mode.
    pub fn sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    /// Set the request data format.
    pub fn with_request_format(mut self, format: impl Into<String>) -> Self {
        self.request_format = Some(format.into());
        self
    }

    /// Set the response data format.
    pub fn with_response_format(mut self, format: impl Into<String>) -> Self {
        self.response_format = Some(format.into());
        self
    }

    /// Override the production hostname.
    pub fn with_production_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.production_hostname = Some(hostname.into());
        self
    }

    /// Override the sandbox hostname.
    pub fn with_sandbox_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.sandbox_hostname = Some(hostname.into());
        self
    }

    /// Override the production approval redirect template.
    pub fn with_approval_url(mut self, url: impl Into<String>) -> Self {
        self.approval_url = Some(url.into());
        self
    }

    /// Override the sandbox approval redirect template.
    pub fn with_sandbox_approval_url(mut self, url: impl Into<String>) -> Self {
        self.sandbox_approval_url = Some(url.into());
        self
    }

    /// Override the production preapproval redirect template.
    pub fn with_preapproval_url(mut self, url: impl Into<String>) -> Self {
        self.preapproval_url = Some(url.into());
        self
    }

    /// Override the sandbox preapproval redirect template.
    pub fn with_sandbox_preapproval_url(mut self, url: impl Into<String>) -> Self {
        self.sandbox_preapproval_url = Some(url.into());
        self
    }

    /// Set the sandbox email address header value.
    pub fn with_sandbox_email_address(mut self, email: impl Into<String>) -> Self {
        self.sandbox_email_address = Some(email.into());
        self
    }

    /// Set the device IP address header value.
    pub fn with_device_ip_address(mut self, ip: impl Into<String>) -> Self {
        self.device_ip_address = Some(ip.into());
        self
    }

    /// Set the security subject header value.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Replace scheme and host with a full base URL (mainly for tests).
    pub fn with_endpoint_override(mut self, base_url: impl Into<String>) -> Self {
        self.endpoint_override = Some(base_url.into());
        self
    }

    /// Validate and build the effective configuration.
    ///
    /// Fails with a `Config` error if a required credential is missing or
    /// empty, or if `app_id` is absent outside sandbox mode.
    pub fn build(self) -> Result<Config> {
        for (name, value) in [
            ("userId", &self.user_id),
            ("password", &self.password),
            ("signature", &self.signature),
        ] {
            if value.is_empty() {
                return Err(Error::new(ErrorKind::Config(format!(
                    "{name} is required and must be non-empty"
                ))));
            }
        }

        let app_id = match self.app_id {
            Some(app_id) => app_id,
            None if self.sandbox => SANDBOX_APP_ID.to_string(),
            None => {
                return Err(Error::new(ErrorKind::Config(
                    "appId is required outside sandbox mode".to_string(),
                )))
            }
        };

        if let Some(ref base) = self.endpoint_override {
            Url::parse(base).map_err(|e| {
                Error::with_source(
                    ErrorKind::Config(format!("invalid endpoint override {base:?}: {e}")),
                    e,
                )
            })?;
        }

        Ok(Config {
            user_id: self.user_id,
            password: self.password,
            signature: self.signature,
            app_id,
            sandbox: self.sandbox,
            request_format: self.request_format.unwrap_or_else(|| "JSON".to_string()),
            response_format: self.response_format.unwrap_or_else(|| "JSON".to_string()),
            production_hostname: self
                .production_hostname
                .unwrap_or_else(|| PRODUCTION_HOSTNAME.to_string()),
            sandbox_hostname: self
                .sandbox_hostname
                .unwrap_or_else(|| SANDBOX_HOSTNAME.to_string()),
            approval_url: self.approval_url.unwrap_or_else(|| APPROVAL_URL.to_string()),
            sandbox_approval_url: self
                .sandbox_approval_url
                .unwrap_or_else(|| SANDBOX_APPROVAL_URL.to_string()),
            preapproval_url: self
                .preapproval_url
                .unwrap_or_else(|| PREAPPROVAL_URL.to_string()),
            sandbox_preapproval_url: self
                .sandbox_preapproval_url
                .unwrap_or_else(|| SANDBOX_PREAPPROVAL_URL.to_string()),
            sandbox_email_address: self.sandbox_email_address,
            device_ip_address: self.device_ip_address,
            subject: self.subject,
            endpoint_override: self.endpoint_override,
        })
    }
}
