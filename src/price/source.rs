//! Price quote sources.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::config::schema::PriceConfig;

/// Errors from the price collaborator.
#[derive(Debug, Error)]
pub enum PriceError {
    /// The quote endpoint URL in the configuration is unusable.
    #[error("invalid price endpoint: {0}")]
    Endpoint(String),

    /// The HTTP request failed or returned a non-success status.
    #[error("price endpoint request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not a fiat-symbol → rate mapping.
    #[error("quote response malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The response parsed but carried no rate for the requested fiat symbol.
    #[error("quote response missing {0} rate")]
    MissingRate(String),
}

/// Source of asset → fiat conversion rates.
pub trait PriceSource: Clone + Send + Sync + 'static {
    /// Fetch the current `fiat` rate for one unit of `asset`.
    fn fetch_rate(
        &self,
        asset: &str,
        fiat: &str,
    ) -> impl Future<Output = Result<f64, PriceError>> + Send;
}

/// One HTTP GET against a public quote endpoint returning a JSON mapping of
/// fiat symbol to rate, e.g. `{"USD": 2514.37}`. No authentication, no retry.
#[derive(Debug, Clone)]
pub struct HttpPriceSource {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpPriceSource {
    /// Build a source from the price configuration.
    pub fn new(config: &PriceConfig) -> Result<Self, PriceError> {
        let endpoint: Url = config
            .endpoint
            .parse()
            .map_err(|e| PriceError::Endpoint(format!("'{}': {}", config.endpoint, e)))?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, endpoint })
    }
}

impl PriceSource for HttpPriceSource {
    async fn fetch_rate(&self, asset: &str, fiat: &str) -> Result<f64, PriceError> {
        let body = self
            .client
            .get(self.endpoint.clone())
            .query(&[("fsym", asset), ("tsyms", fiat)])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let rates = parse_rates(&body)?;
        pick_rate(&rates, fiat)
    }
}

fn parse_rates(body: &str) -> Result<HashMap<String, f64>, PriceError> {
    Ok(serde_json::from_str(body)?)
}

fn pick_rate(rates: &HashMap<String, f64>, fiat: &str) -> Result<f64, PriceError> {
    rates
        .get(fiat)
        .copied()
        .ok_or_else(|| PriceError::MissingRate(fiat.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rates() {
        let rates = parse_rates(r#"{"USD": 2514.37}"#).unwrap();
        assert_eq!(rates.get("USD"), Some(&2514.37));

        // CryptoCompare signals errors with a non-numeric payload.
        assert!(matches!(
            parse_rates(r#"{"Response":"Error","Message":"fsym missing"}"#),
            Err(PriceError::Malformed(_))
        ));
        assert!(matches!(
            parse_rates("not json"),
            Err(PriceError::Malformed(_))
        ));
    }

    #[test]
    fn test_pick_rate() {
        let mut rates = HashMap::new();
        rates.insert("USD".to_string(), 2514.37);

        assert_eq!(pick_rate(&rates, "USD").unwrap(), 2514.37);
        assert!(matches!(
            pick_rate(&rates, "EUR"),
            Err(PriceError::MissingRate(_))
        ));
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let config = PriceConfig {
            endpoint: "not a url".to_string(),
            ..PriceConfig::default()
        };
        assert!(matches!(
            HttpPriceSource::new(&config),
            Err(PriceError::Endpoint(_))
        ));
    }
}
