//! Rule-based support assistant.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;

use super::Assistant;
use crate::conversation::Message;
use crate::error::Result;

static ORDER_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"order[:\s]*#?(\d+)").unwrap_or_else(|e| panic!("invalid order pattern: {e}"))
});

/// Customer intent recognised from a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    Goodbye,
    OrderStatus,
    ReturnPolicy,
    Shipping,
    Help,
    Unknown,
}

/// Rules in priority order. Keywords match whole words or phrases.
const RULES: &[(Intent, &[&str])] = &[
    (
        Intent::Greeting,
        &["hello", "hi", "hey", "good morning", "good afternoon", "good evening"],
    ),
    (
        Intent::Goodbye,
        &["bye", "goodbye", "see you", "thank you", "thanks"],
    ),
    (
        Intent::OrderStatus,
        &["order", "track", "status", "where is", "shipped", "delivered"],
    ),
    (
        Intent::ReturnPolicy,
        &["return", "refund", "exchange", "policy", "money back"],
    ),
    (
        Intent::Shipping,
        &["shipping", "delivery", "how long", "when", "tracking"],
    ),
    (
        Intent::Help,
        &["help", "support", "assist", "problem", "issue"],
    ),
];

impl Intent {
    /// Stable label stored on messages.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::Goodbye => "goodbye",
            Self::OrderStatus => "order_status",
            Self::ReturnPolicy => "return_policy",
            Self::Shipping => "shipping",
            Self::Help => "help",
            Self::Unknown => "unknown",
        }
    }

    /// Classify a message.
    #[must_use]
    pub fn classify(text: &str) -> Self {
        let normalized = normalize(text);
        RULES
            .iter()
            .find(|(_, keywords)| {
                keywords
                    .iter()
                    .any(|keyword| normalized.contains(&format!(" {keyword} ")))
            })
            .map_or(Self::Unknown, |(intent, _)| *intent)
    }
}

/// Lowercase words separated and surrounded by single spaces.
fn normalize(text: &str) -> String {
    let words: Vec<String> = text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect();
    format!(" {} ", words.join(" "))
}

/// Answers support questions from fixed keyword rules.
#[derive(Debug, Clone, Default)]
pub struct KeywordAssistant;

impl KeywordAssistant {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Reply text for an already classified message.
    #[must_use]
    pub fn respond(&self, intent: Intent, text: &str) -> String {
        match intent {
            Intent::Greeting => {
                "Hello! Welcome to our store. How can I help you today?".to_string()
            }
            Intent::Goodbye => "Thank you for shopping with us! Have a great day!".to_string(),
            Intent::OrderStatus => match order_number(text) {
                Some(number) => format!(
                    "I can see order #{number}. Let me check the status for you. \
                     Please provide your user ID for verification."
                ),
                None => "I can help you track your order! Please provide your order number \
                         or user ID."
                    .to_string(),
            },
            Intent::ReturnPolicy => "Our return policy:\n\
                 \u{2022} Return window: 30 days from delivery\n\
                 \u{2022} Items must be unworn, unwashed, and with original tags\n\
                 \u{2022} Refunds go to the original payment method within 5-7 business days\n\
                 \u{2022} Return shipping is free for defective items\n\
                 Need help with a specific return? Please provide your order number."
                .to_string(),
            Intent::Shipping => "Here's our shipping information:\n\
                 \u{2022} Standard: 5-7 business days ($5.99, free over $50)\n\
                 \u{2022} Express: 2-3 business days ($12.99)\n\
                 \u{2022} Overnight: next business day ($24.99)\n\
                 All orders include tracking numbers."
                .to_string(),
            Intent::Help => "I can help you with:\n\
                 \u{2022} Order tracking\n\
                 \u{2022} Return policies\n\
                 \u{2022} Shipping information\n\
                 What would you like to know?"
                .to_string(),
            Intent::Unknown => "I'm not sure I understood that. I can help with order \
                 tracking, returns and refunds, or shipping information. Could you \
                 please rephrase your question?"
                .to_string(),
        }
    }
}

fn order_number(text: &str) -> Option<String> {
    ORDER_NUMBER
        .captures(&text.to_lowercase())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[async_trait]
impl Assistant for KeywordAssistant {
    fn classify(&self, text: &str) -> Option<String> {
        Some(Intent::classify(text).as_str().to_string())
    }

    async fn reply(&self, history: &[Message], text: &str) -> Result<String> {
        let intent = Intent::classify(text);
        tracing::debug!(
            name: "assistant.intent.classified",
            intent = ?intent,
            history_len = history.len(),
            "Intent classified"
        );
        Ok(self.respond(intent, text))
    }
}
