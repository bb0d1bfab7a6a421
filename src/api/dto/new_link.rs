//! DTOs for link registration endpoint.

use serde::Deserialize;
use validator::Validate;

use crate::utils::target_url::HTTP_URL_REGEX;

/// Query parameters of `GET|POST /new`.
#[derive(Debug, Deserialize, Validate)]
pub struct NewLinkParams {
    /// The target URL to register (must start with `http://` or `https://`).
    #[validate(
        required(message = "Missing url parameter"),
        regex(path = *HTTP_URL_REGEX, message = "URL must start with http:// or https://")
    )]
    pub url: Option<String>,
}
