use serde::Deserialize;
use thiserror::Error;
use url::Url;

const SITE_JSON: &str = include_str!("../site.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse site configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("invalid `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ImageConfig {
    pub url: String,
    pub alt: String,
    pub width: u32,
    pub height: u32,
}

/// One entry of the "How it works" explainer.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct StepConfig {
    pub title: String,
    pub description: String,
    pub image: ImageConfig,
    /// Entrance transition delay, used to stagger sibling steps.
    #[serde(default)]
    pub delay_ms: u32,
    /// Share of the card that must be visible before it animates in.
    #[serde(default)]
    pub reveal_threshold: Option<f64>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct LegalLinks {
    pub privacy_url: String,
    pub terms_url: String,
}

/// Everything the landing page shows that isn't layout: links, contact
/// details and the explainer steps. Loaded once at startup and handed to
/// the components through props.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SiteConfig {
    pub brand: String,
    pub tagline: String,
    /// External checkout page. Every "join" link on the page points here.
    pub checkout_url: String,
    pub contact_email: String,
    pub how_it_works_anchor: String,
    pub price_note: String,
    pub legal: LegalLinks,
    pub steps: Vec<StepConfig>,
}

impl SiteConfig {
    /// Parses the configuration embedded into the binary at build time.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.brand.trim().is_empty() {
            return Err(invalid("brand", "must not be empty"));
        }

        let checkout = Url::parse(&self.checkout_url)?;
        if checkout.scheme() != "https" || checkout.host().is_none() {
            return Err(invalid(
                "checkout_url",
                format!("expected an absolute https URL, got {:?}", self.checkout_url),
            ));
        }

        let mut parts = self.contact_email.split('@');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty() => {}
            _ => {
                return Err(invalid(
                    "contact_email",
                    format!("{:?} is not an email address", self.contact_email),
                ))
            }
        }

        if self.how_it_works_anchor.is_empty() {
            return Err(invalid("how_it_works_anchor", "must not be empty"));
        }
        if self.how_it_works_anchor.starts_with('#') {
            return Err(invalid("how_it_works_anchor", "give the id without the leading '#'"));
        }

        if self.steps.is_empty() {
            return Err(invalid("steps", "at least one step is required"));
        }
        if self
            .steps
            .iter()
            .filter_map(|step| step.reveal_threshold)
            .any(|t| !(0.0..=1.0).contains(&t))
        {
            return Err(invalid("steps", "reveal_threshold must be between 0 and 1"));
        }
        // Steps animate in the order they are listed.
        if self.steps.windows(2).any(|pair| pair[1].delay_ms < pair[0].delay_ms) {
            return Err(invalid("steps", "delay_ms must not decrease from one step to the next"));
        }

        Ok(())
    }

    pub fn anchor_href(&self) -> String {
        format!("#{}", self.how_it_works_anchor)
    }

    pub fn contact_href(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn embedded() -> Value {
        serde_json::from_str(SITE_JSON).unwrap()
    }

    fn parse(value: Value) -> Result<SiteConfig, ConfigError> {
        SiteConfig::from_json(&value.to_string())
    }

    fn invalid_field(value: Value) -> &'static str {
        match parse(value) {
            Err(ConfigError::Invalid { field, .. }) => field,
            other => panic!("expected a validation error, got {:?}", other),
        }
    }

    #[test]
    fn embedded_config_loads() {
        let config = SiteConfig::load().unwrap();
        assert_eq!(config.brand, "Select Pump");
        assert_eq!(config.steps.len(), 3);
        assert_eq!(config.steps[0].title, "1. Join the Club");
        let delays: Vec<u32> = config.steps.iter().map(|s| s.delay_ms).collect();
        assert_eq!(delays, vec![0, 200, 400]);
    }

    #[test]
    fn derived_hrefs() {
        let config = SiteConfig::load().unwrap();
        assert_eq!(config.anchor_href(), "#how-it-works");
        assert_eq!(config.contact_href(), format!("mailto:{}", config.contact_email));
    }

    #[test]
    fn rejects_non_https_checkout() {
        let mut value = embedded();
        value["checkout_url"] = json!("http://buy.example.com/abc");
        assert_eq!(invalid_field(value), "checkout_url");

        let mut value = embedded();
        value["checkout_url"] = json!("mailto:pay@example.com");
        assert_eq!(invalid_field(value), "checkout_url");
    }

    #[test]
    fn rejects_malformed_checkout() {
        for url in ["https://not a url", "https://exa mple.com/pay", "https://:::", "https://", "buy.stripe.com/x"] {
            let mut value = embedded();
            value["checkout_url"] = json!(url);
            assert!(
                matches!(parse(value), Err(ConfigError::InvalidUrl(_))),
                "{url} should not parse"
            );
        }
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        let mut value = embedded();
        value["steps"][2]["reveal_threshold"] = json!(1.5);
        assert_eq!(invalid_field(value), "steps");

        let mut value = embedded();
        value["steps"][2]["reveal_threshold"] = json!(0.25);
        assert_eq!(parse(value).unwrap().steps[2].reveal_threshold, Some(0.25));
    }

    #[test]
    fn rejects_bad_email() {
        for email in ["", "nobody", "@example.com", "a@b@c", "me@"] {
            let mut value = embedded();
            value["contact_email"] = json!(email);
            assert_eq!(invalid_field(value), "contact_email", "{email}");
        }
    }

    #[test]
    fn rejects_hash_prefixed_anchor() {
        let mut value = embedded();
        value["how_it_works_anchor"] = json!("#how-it-works");
        assert_eq!(invalid_field(value), "how_it_works_anchor");
    }

    #[test]
    fn rejects_empty_or_unordered_steps() {
        let mut value = embedded();
        value["steps"] = json!([]);
        assert_eq!(invalid_field(value), "steps");

        let mut value = embedded();
        value["steps"][1]["delay_ms"] = json!(500);
        assert_eq!(invalid_field(value), "steps");
    }

    #[test]
    fn missing_delay_defaults_to_zero() {
        let mut value = embedded();
        let first = value["steps"][0].clone();
        value["steps"] = json!([first]);
        value["steps"][0].as_object_mut().unwrap().remove("delay_ms");
        let config = parse(value).unwrap();
        assert_eq!(config.steps[0].delay_ms, 0);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            SiteConfig::from_json("{ \"brand\": "),
            Err(ConfigError::Parse(_))
        ));
    }
}
