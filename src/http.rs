//! Verb helpers over the reqwest transport.

use reqwest::{
    header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT},
    ClientBuilder, Method,
};

use crate::types::{RequestOptions, Response};

/// Sends a GET request described by `options`. The body-less verbs ignore
/// [RequestOptions::data].
pub async fn get(options: RequestOptions) -> Result<Response, reqwest::Error> {
    execute(Method::GET, options, false).await
}

/// Sends a POST request described by `options`, serializing
/// [RequestOptions::data] as the JSON body when present.
pub async fn post(options: RequestOptions) -> Result<Response, reqwest::Error> {
    execute(Method::POST, options, true).await
}

/// Sends a PATCH request described by `options`, serializing
/// [RequestOptions::data] as the JSON body when present.
pub async fn patch(options: RequestOptions) -> Result<Response, reqwest::Error> {
    execute(Method::PATCH, options, true).await
}

/// Sends a DELETE request described by `options`. The body-less verbs ignore
/// [RequestOptions::data].
pub async fn destroy(options: RequestOptions) -> Result<Response, reqwest::Error> {
    execute(Method::DELETE, options, false).await
}

async fn execute(
    method: Method,
    options: RequestOptions,
    body_allowed: bool,
) -> Result<Response, reqwest::Error> {
    let client = ClientBuilder::new().build()?;

    // Every request advertises json, body or not.
    let mut req = client
        .request(method, options.path.as_str())
        .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
        .header(
            USER_AGENT,
            HeaderValue::from_static(
                "async-request/0.1.0 (https://github.com/async-request-rs/async-request)",
            ),
        );

    if let Some(authorization) = &options.authorization {
        // The token is passed through verbatim, no scheme prefix is assumed.
        if !authorization.is_empty() {
            req = req.header(AUTHORIZATION, authorization.as_str());
        }
    }

    if body_allowed {
        if let Some(data) = &options.data {
            req = req.json(data);
        }
    }

    req.send().await
}
