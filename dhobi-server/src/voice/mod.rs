//! Voice order intake
//!
//! - [`machine`] - recognition state machine driving a [`SpeechEngine`]
//! - [`parser`] - transcript to customer name and quantity
//! - [`handle_transcript`] - turns a final transcript into an order

pub mod machine;
pub mod parser;

pub use machine::{
    Effect, ListenState, RecognitionResult, SpeechEngine, SpeechError, SpeechEvent,
    VoiceRecognizer, transition,
};
pub use parser::{ParsedTranscript, parse_transcript};

use serde::Serialize;

use shared::models::{NewOrder, Order};

use crate::money::format_rupees;
use crate::shop::{ShopResult, ShopStorage};

/// Recognition language
pub const LANGUAGE: &str = "hi-IN";

/// Marker the engine leaves on transcripts that are still being spoken
pub const INTERIM_MARKER: &str = "...";

/// What happened to a transcript
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TranscriptOutcome {
    /// Still being spoken; only shown, never saved
    Interim { transcript: String },
    /// Order saved; `confirmation` is the line read back to the shopkeeper
    Recorded { order: Order, confirmation: String },
}

pub fn is_interim(transcript: &str) -> bool {
    transcript.contains(INTERIM_MARKER)
}

/// Spoken confirmation ("OK, noted {qty} clothes for {name}. Total is {total} rupees.")
pub fn confirmation_line(order: &Order) -> String {
    format!(
        "ठीक है, {} के {} कपड़े नोट कर लिए हैं। कुल राशि {} रुपये है।",
        order.customer_name,
        order.quantity,
        format_rupees(order.total_amount)
    )
}

/// Create an order from a final transcript at the shop's default rate
pub async fn handle_transcript(shop: &ShopStorage, transcript: &str) -> ShopResult<TranscriptOutcome> {
    if is_interim(transcript) {
        return Ok(TranscriptOutcome::Interim {
            transcript: transcript.to_string(),
        });
    }

    let parsed = parse_transcript(transcript);
    tracing::debug!(name = %parsed.name, quantity = parsed.quantity, "Transcript parsed");

    let order = shop
        .record_order(NewOrder {
            customer_name: parsed.name,
            customer_phone: String::new(),
            quantity: parsed.quantity,
            rate_per_item: None,
            photo_url: None,
        })
        .await?;
    let confirmation = confirmation_line(&order);
    Ok(TranscriptOutcome::Recorded {
        order,
        confirmation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shop::ShopError;
    use rust_decimal_macros::dec;
    use shared::store::MemoryStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_interim_transcript_is_not_saved() {
        let shop = ShopStorage::new(Arc::new(MemoryStore::new()));
        let outcome = handle_transcript(&shop, "anita ke 5...").await.unwrap();
        assert!(matches!(outcome, TranscriptOutcome::Interim { .. }));
        assert!(shop.customers().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_oversized_quantity_is_rejected() {
        let shop = ShopStorage::new(Arc::new(MemoryStore::new()));
        let err = handle_transcript(&shop, "Ravi 99999999999 kapde")
            .await
            .unwrap_err();
        assert!(matches!(err, ShopError::InvalidQuantity(q) if q == u32::MAX));
        assert!(shop.customers().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_final_transcript_creates_order() {
        let shop = ShopStorage::new(Arc::new(MemoryStore::new()));
        let outcome = handle_transcript(&shop, "Anita ke 5 kapde").await.unwrap();
        let TranscriptOutcome::Recorded {
            order,
            confirmation,
        } = outcome
        else {
            panic!("expected a recorded order");
        };
        assert_eq!(order.customer_name, "Anita ke");
        assert_eq!(order.quantity, 5);
        assert_eq!(order.total_amount, dec!(40));
        assert_eq!(
            confirmation,
            "ठीक है, Anita ke के 5 कपड़े नोट कर लिए हैं। कुल राशि 40 रुपये है।"
        );
    }
}
