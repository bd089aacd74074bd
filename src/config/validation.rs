use crate::config::schema::Config;

#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

#[derive(Debug)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

#[derive(Debug)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
}

/// Reports configuration problems. Dispatch never consults this; a provider
/// with a malformed URL still fires and fails at the transport.
pub fn validate_config(config: &Config) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    validate_log_level(&config.log.level, &mut errors);

    if config.http.timeout_secs == Some(0) {
        errors.push(ValidationError {
            field: "http.timeout_secs".to_string(),
            message: "Request timeout must be positive".to_string(),
            suggestion: Some("Remove the setting to use the client default".to_string()),
        });
    }

    let providers = &config.providers;

    if let Some(ref slack) = providers.slack {
        validate_endpoint(
            "providers.slack.webhook_url",
            &slack.webhook_url,
            &mut errors,
            &mut warnings,
        );
    }

    if let Some(ref pushover) = providers.pushover {
        validate_pair(
            "providers.pushover",
            ("token", &pushover.token),
            ("user", &pushover.user),
            &mut warnings,
        );
        validate_endpoint(
            "providers.pushover.api_url",
            &pushover.api_url,
            &mut errors,
            &mut warnings,
        );
    }

    if let Some(ref telegram) = providers.telegram {
        validate_pair(
            "providers.telegram",
            ("chat_id", &telegram.chat_id),
            ("bot_token", &telegram.bot_token),
            &mut warnings,
        );
        validate_endpoint(
            "providers.telegram.api_base",
            &telegram.api_base,
            &mut errors,
            &mut warnings,
        );
    }

    if let Some(ref lark) = providers.lark {
        validate_endpoint(
            "providers.lark.webhook_url",
            &lark.webhook_url,
            &mut errors,
            &mut warnings,
        );
        if lark.webhook_url.is_empty() && lark.signing_secret().is_some() {
            warnings.push(ValidationWarning {
                field: "providers.lark.secret".to_string(),
                message: "Signing secret set without a webhook URL".to_string(),
            });
        }
    }

    if let Some(ref discord) = providers.discord {
        validate_endpoint(
            "providers.discord.webhook_url",
            &discord.webhook_url,
            &mut errors,
            &mut warnings,
        );
        if discord.webhook_url.trim_end_matches('/').ends_with("/slack") {
            warnings.push(ValidationWarning {
                field: "providers.discord.webhook_url".to_string(),
                message: "URL already ends in /slack; the suffix is appended automatically"
                    .to_string(),
            });
        }
    }

    if let Some(ref teams) = providers.teams {
        validate_endpoint(
            "providers.teams.webhook_url",
            &teams.webhook_url,
            &mut errors,
            &mut warnings,
        );
    }

    if providers.is_empty() {
        warnings.push(ValidationWarning {
            field: "providers".to_string(),
            message: "No provider is fully configured; notifications will be dropped".to_string(),
        });
    }

    ValidationResult { errors, warnings }
}

fn validate_log_level(level: &str, errors: &mut Vec<ValidationError>) {
    let level = level.trim().to_lowercase();
    let valid = ["trace", "debug", "info", "warn", "error"];
    if !valid.iter().any(|value| *value == level) {
        errors.push(ValidationError {
            field: "log.level".to_string(),
            message: format!("Invalid log level: {level}"),
            suggestion: Some(format!("Valid levels: {}", valid.join(", "))),
        });
    }
}

fn validate_endpoint(
    field: &str,
    url: &str,
    errors: &mut Vec<ValidationError>,
    warnings: &mut Vec<ValidationWarning>,
) {
    if url.is_empty() {
        warnings.push(ValidationWarning {
            field: field.to_string(),
            message: "URL is empty; provider will not fire".to_string(),
        });
        return;
    }

    if !is_http_url(url) {
        errors.push(ValidationError {
            field: field.to_string(),
            message: "URL must start with http:// or https://".to_string(),
            suggestion: None,
        });
        return;
    }

    if url.trim().to_lowercase().starts_with("http://") {
        warnings.push(ValidationWarning {
            field: field.to_string(),
            message: "URL uses plain http; credentials travel unencrypted".to_string(),
        });
    }
}

fn validate_pair(
    section: &str,
    first: (&str, &str),
    second: (&str, &str),
    warnings: &mut Vec<ValidationWarning>,
) {
    let (first_name, first_value) = first;
    let (second_name, second_value) = second;
    let missing = match (first_value.is_empty(), second_value.is_empty()) {
        (true, false) => first_name,
        (false, true) => second_name,
        (true, true) => {
            warnings.push(ValidationWarning {
                field: section.to_string(),
                message: format!(
                    "Section present but {first_name} and {second_name} are empty; provider will not fire"
                ),
            });
            return;
        }
        (false, false) => return,
    };

    warnings.push(ValidationWarning {
        field: format!("{section}.{missing}"),
        message: format!("{missing} is empty; provider will not fire"),
    });
}

fn is_http_url(value: &str) -> bool {
    let value = value.trim().to_lowercase();
    value.starts_with("http://") || value.starts_with("https://")
}
