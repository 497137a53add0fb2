//! Letter submission to a kiki node.
//!
//! A letter is the node's unit of shared content. kikitool only ever
//! sends `share-text` letters addressed to the public feed.

use anyhow::{Context, Result, bail};
use serde::Serialize;

/// Purpose tag for a shared text post.
pub const PURPOSE_SHARE_TEXT: &str = "share-text";

/// Recipient tag for the public feed.
pub const RECIPIENT_PUBLIC: &str = "public";

/// The payload accepted by a node's `POST /letter` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct Letter {
    pub content: String,
    pub purpose: String,
    pub to: Vec<String>,
}

impl Letter {
    /// A public text post carrying the given HTML content.
    pub fn share_text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            purpose: PURPOSE_SHARE_TEXT.to_string(),
            to: vec![RECIPIENT_PUBLIC.to_string()],
        }
    }
}

/// Post a letter and return the node's JSON reply
/// (`{"success": ..., "message": ...}`).
pub async fn post(url: &str, letter: &Letter) -> Result<serde_json::Value> {
    let client = reqwest::Client::new();
    let resp = client
        .post(url)
        .json(letter)
        .send()
        .await
        .with_context(|| format!("failed to reach {}", url))?;

    if !resp.status().is_success() {
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        bail!("letter endpoint error ({}): {}", status, text);
    }

    resp.json()
        .await
        .context("letter endpoint returned malformed JSON")
}
