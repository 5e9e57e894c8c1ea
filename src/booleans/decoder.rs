// ABOUTME: Request decoding into validated drafts from query parameters and a typed body
// ABOUTME: Selects a JSON or form-urlencoded body decoder by media type, rejecting anything else
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Request decoding
//!
//! Query parameters are decoded and validated first so a bad expiry fails
//! before the body is touched. The body decoder is then chosen from the
//! declared content type. Media type parameters such as `charset` are ignored
//! and the comparison is case-insensitive.

use super::{parse_bool, BooleanDraft, Resource, Validator, WriteIntent};
use crate::constants::{media_types, params};
use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use tracing::debug;

/// Decodes a request body into resource fields
pub trait BodyDecoder: Send + Sync {
    /// Media type this decoder handles
    fn media_type(&self) -> &'static str;

    /// Decode `body`
    ///
    /// # Errors
    ///
    /// Returns a bad request error if the body is malformed
    fn decode(&self, body: &[u8]) -> AppResult<Resource>;
}

/// `application/json` bodies
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

/// `application/x-www-form-urlencoded` bodies
#[derive(Debug, Clone, Copy, Default)]
pub struct FormDecoder;

static JSON_DECODER: JsonDecoder = JsonDecoder;
static FORM_DECODER: FormDecoder = FormDecoder;

#[derive(Deserialize)]
struct JsonBody {
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    value: Option<bool>,
}

impl BodyDecoder for JsonDecoder {
    fn media_type(&self) -> &'static str {
        media_types::JSON
    }

    fn decode(&self, body: &[u8]) -> AppResult<Resource> {
        let parsed: JsonBody = serde_json::from_slice(body).map_err(|e| {
            debug!("Invalid JSON body: {e}");
            AppError::bad_request(format!("Invalid JSON body: {e}"))
        })?;

        Ok(Resource {
            label: parsed.label.unwrap_or_default(),
            value: parsed.value.unwrap_or_default(),
        })
    }
}

#[derive(Deserialize)]
struct FormBody {
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    value: Option<String>,
}

impl BodyDecoder for FormDecoder {
    fn media_type(&self) -> &'static str {
        media_types::FORM
    }

    fn decode(&self, body: &[u8]) -> AppResult<Resource> {
        let parsed: FormBody = serde_urlencoded::from_bytes(body).map_err(|e| {
            debug!("Invalid form body: {e}");
            AppError::bad_request(format!("Invalid form body: {e}"))
        })?;

        let value = match parsed.value.as_deref() {
            None | Some("") => false,
            Some(raw) => parse_bool(raw).ok_or_else(|| {
                debug!("Invalid form boolean '{raw}'");
                AppError::bad_request(format!("Invalid boolean value '{raw}'"))
            })?,
        };

        Ok(Resource {
            label: parsed.label.unwrap_or_default(),
            value,
        })
    }
}

/// Media type of a `Content-Type` header value, without parameters, lowercased
fn essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Look up the body decoder for a declared content type
///
/// # Errors
///
/// Returns `UNSUPPORTED_MEDIA_TYPE` when the type is missing or not handled
pub fn decoder_for(content_type: Option<&str>) -> AppResult<&'static dyn BodyDecoder> {
    let declared = content_type.unwrap_or_default();

    match essence(declared).as_str() {
        media_types::JSON => Ok(&JSON_DECODER),
        media_types::FORM => Ok(&FORM_DECODER),
        _ => {
            debug!(content_type = %declared, "No body decoder for content type");
            Err(AppError::unsupported_media_type(declared))
        }
    }
}

/// Raw query parameters; empty values count as absent
#[derive(Deserialize)]
struct QueryParams {
    #[serde(default)]
    expires_at: Option<String>,
    #[serde(default)]
    expires_in: Option<String>,
}

fn parse_epoch_param(name: &str, raw: Option<String>) -> AppResult<Option<i64>> {
    let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
        return Ok(None);
    };

    let parsed: i64 = raw.trim().parse().map_err(|e| {
        debug!("Invalid {name} parameter '{raw}': {e}");
        AppError::bad_request(format!("Invalid {name} parameter"))
    })?;

    Ok(Some(parsed).filter(|value| *value != 0))
}

/// Builds validated drafts from inbound requests
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestDecoder {
    validator: Validator,
}

impl RequestDecoder {
    /// Create a decoder using `validator`
    #[must_use]
    pub const fn new(validator: Validator) -> Self {
        Self { validator }
    }

    /// Decode the query string into a validated intent
    ///
    /// Any `id` parameter is ignored; the target is set from the route.
    ///
    /// # Errors
    ///
    /// Returns a bad request error for unparseable or invalid expiry values
    pub fn decode_intent(&self, raw_query: Option<&str>) -> AppResult<WriteIntent> {
        let query: QueryParams = serde_urlencoded::from_str(raw_query.unwrap_or_default())
            .map_err(|e| {
                debug!("Invalid query string: {e}");
                AppError::bad_request("Invalid query string")
            })?;

        let intent = WriteIntent {
            expires_at: parse_epoch_param(params::EXPIRES_AT, query.expires_at)?,
            expires_in: parse_epoch_param(params::EXPIRES_IN, query.expires_in)?,
            id: None,
        };

        self.validator.validate_intent(&intent)?;
        Ok(intent)
    }

    /// Decode a full write request into a validated draft
    ///
    /// `target` is the identifier to replace, or `None` to create.
    ///
    /// # Errors
    ///
    /// Returns `BAD_REQUEST` for invalid parameters or a malformed body, and
    /// `UNSUPPORTED_MEDIA_TYPE` when the content type has no decoder
    pub fn decode(
        &self,
        raw_query: Option<&str>,
        content_type: Option<&str>,
        body: &[u8],
        target: Option<String>,
    ) -> AppResult<BooleanDraft> {
        let mut intent = self.decode_intent(raw_query)?;

        let resource = decoder_for(content_type)?.decode(body)?;

        intent.id = target;
        let draft = BooleanDraft { resource, intent };
        self.validator.validate_draft(&draft)?;

        Ok(draft)
    }
}
