//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0) and parseability of addresses/URLs
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: AppConfig → Result<(), Vec<ValidationError>>

use alloy::primitives::Address;
use url::Url;

use crate::config::schema::{AppConfig, ChainMode};

/// One failed semantic check.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every failed check from one validation pass, rendered as one line.
#[derive(Debug, Clone)]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Run all semantic checks, collecting every failure.
pub fn validate_config(config: &AppConfig) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    if config.chain.rpc_timeout_secs == 0 {
        push(&mut errors, "chain.rpc_timeout_secs", "must be greater than zero");
    }

    if config.chain.mode == ChainMode::Rpc {
        if config.chain.rpc_url.parse::<Url>().is_err() {
            push(&mut errors, "chain.rpc_url", "not a valid URL");
        }
        if config.chain.contract_address.parse::<Address>().is_err() {
            push(
                &mut errors,
                "chain.contract_address",
                "not a valid contract address",
            );
        }
        if config.chain.chain_id == 0 {
            push(&mut errors, "chain.chain_id", "must be greater than zero");
        }
    }

    if config.price.enabled {
        if config.price.endpoint.parse::<Url>().is_err() {
            push(&mut errors, "price.endpoint", "not a valid URL");
        }
        if config.price.asset.is_empty() {
            push(&mut errors, "price.asset", "must not be empty");
        }
        if config.price.fiat.is_empty() {
            push(&mut errors, "price.fiat", "must not be empty");
        }
        if config.price.timeout_secs == 0 {
            push(&mut errors, "price.timeout_secs", "must be greater than zero");
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

fn push(errors: &mut Vec<ValidationError>, field: &str, message: &str) {
    errors.push(ValidationError {
        field: field.to_string(),
        message: message.to_string(),
    });
}
