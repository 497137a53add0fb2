//! Quote fetching and formatting.

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::consts::UNKNOWN_AUTHOR;

/// One quote as returned by the quote service.
#[derive(Debug, Clone, Deserialize)]
pub struct Quote {
    #[serde(rename = "Text")]
    pub text: String,
    #[serde(rename = "Name", default)]
    pub name: String,
}

impl Quote {
    /// The author, with a placeholder when the service has no name on file.
    pub fn author(&self) -> &str {
        if self.name.is_empty() {
            UNKNOWN_AUTHOR
        } else {
            &self.name
        }
    }

    /// The HTML snippet posted to the feed.
    pub fn to_html(&self) -> String {
        format!("<p>“{}”</p><p>- <em>{}</em></p>", self.text, self.author())
    }
}

/// Fetch one quote. The service answers with a JSON array; the first
/// entry is used.
pub async fn fetch(url: &str) -> Result<Quote> {
    let client = reqwest::Client::new();
    let resp = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("failed to reach {}", url))?;

    if !resp.status().is_success() {
        bail!("quote service error ({})", resp.status());
    }

    let quotes: Vec<Quote> = resp
        .json()
        .await
        .context("quote service returned malformed JSON")?;

    quotes
        .into_iter()
        .next()
        .ok_or_else(|| anyhow::anyhow!("quote service returned no quotes"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_is_the_name_when_present() {
        let quote = Quote {
            text: "A friend is a second self.".to_string(),
            name: "Aristotle".to_string(),
        };
        assert_eq!(quote.author(), "Aristotle");
    }

    #[test]
    fn author_falls_back_to_unknown() {
        let quote = Quote {
            text: "Anonymous wisdom.".to_string(),
            name: String::new(),
        };
        assert_eq!(quote.author(), "Unknown");
    }

    #[test]
    fn html_embeds_text_and_author() {
        let quote = Quote {
            text: "A friend is a second self.".to_string(),
            name: "Aristotle".to_string(),
        };
        assert_eq!(
            quote.to_html(),
            "<p>“A friend is a second self.”</p><p>- <em>Aristotle</em></p>"
        );
    }

    #[test]
    fn deserializes_the_service_casing() {
        let quote: Quote = serde_json::from_str(r#"{"Text": "t", "Name": "n"}"#).unwrap();
        assert_eq!(quote.text, "t");
        assert_eq!(quote.name, "n");
    }

    #[test]
    fn missing_name_deserializes_as_empty() {
        let quote: Quote = serde_json::from_str(r#"{"Text": "t"}"#).unwrap();
        assert!(quote.name.is_empty());
        assert_eq!(quote.author(), "Unknown");
    }
}
