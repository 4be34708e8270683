//! Outgoing chat messages and the per-request collector.

use serde::Serialize;
use serde_json::Value;

use crate::cards::{Card, OrderCard, PromotionCard};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Button {
    pub title: String,
    pub payload: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl Button {
    /// A button that simply sends `payload` back as the user's next message.
    pub fn plain(title: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            payload: payload.into(),
            id: None,
            metadata: None,
        }
    }
}

/// Rich payload rendered by the chat widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CustomPayload {
    Cards { cards: Vec<Card> },
    OrderCards { orders: Vec<OrderCard> },
    PromotionCards { promotions: Vec<PromotionCard> },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BotMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Button>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomPayload>,
}

impl BotMessage {
    pub fn cards(&self) -> Option<&[Card]> {
        match &self.custom {
            Some(CustomPayload::Cards { cards }) => Some(cards),
            _ => None,
        }
    }
}

/// Collects the messages one action run produces, in order.
#[derive(Debug, Default)]
pub struct Dispatcher {
    messages: Vec<BotMessage>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn utter(&mut self, msg: BotMessage) {
        self.messages.push(msg);
    }

    pub fn text(&mut self, text: impl Into<String>) {
        self.utter(BotMessage {
            text: Some(text.into()),
            ..Default::default()
        });
    }

    pub fn buttons(&mut self, text: impl Into<String>, buttons: Vec<Button>) {
        self.utter(BotMessage {
            text: Some(text.into()),
            buttons,
            custom: None,
        });
    }

    /// Product cards, with or without a lead-in line.
    pub fn cards(&mut self, text: Option<String>, cards: Vec<Card>) {
        self.utter(BotMessage {
            text,
            buttons: Vec::new(),
            custom: Some(CustomPayload::Cards { cards }),
        });
    }

    pub fn custom(&mut self, text: impl Into<String>, custom: CustomPayload) {
        self.utter(BotMessage {
            text: Some(text.into()),
            buttons: Vec::new(),
            custom: Some(custom),
        });
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn into_messages(self) -> Vec<BotMessage> {
        self.messages
    }
}
