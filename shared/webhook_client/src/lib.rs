//!
//! Client used to deliver JSON payloads to webhooks.
//! Every attempt is bounded by a timeout and failed deliveries
//! are retried with exponential backoff.
//!

mod client;
mod error;
mod retry;

pub use client::{WebhookClient, WebhookClientConfig};
pub use error::Error;
pub use reqwest::{StatusCode, Url};
