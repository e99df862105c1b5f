//! Photo garment counter
//!
//! The detector itself is an external model behind [`ObjectDetector`];
//! this module filters its predictions down to clothing and counts them.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::money::line_total;

/// Detector classes that count as clothing (substring match, case-insensitive)
pub const CLOTHING_CLASSES: &[&str] = &[
    "person", "shirt", "tie", "hat", "shoe", "bag", "dress", "sock", "pant", "jacket", "shorts",
    "skirt", "watch", "belt", "boot", "glove", "coat", "handbag", "backpack", "suitcase",
];

/// Predictions at or below this score are not counted
pub const MIN_SCORE: f32 = 0.3;

/// Confidence reported when nothing resembling clothing was detected
pub const FALLBACK_CONFIDENCE: f32 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub class: String,
    pub score: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    /// Never below 1
    pub count: u32,
    /// `"<class> (<pct>%)"` for every counted prediction
    pub items: Vec<String>,
    pub confidence: f32,
}

#[derive(Debug, Error)]
pub enum DetectorError {
    #[error("Detector model not loaded: {0}")]
    NotLoaded(String),

    #[error("Detection failed: {0}")]
    Failed(String),
}

/// Object detection model contract
#[async_trait]
pub trait ObjectDetector: Send + Sync {
    async fn detect(&self, image: &[u8]) -> Result<Vec<Prediction>, DetectorError>;
}

pub fn is_clothing(class: &str) -> bool {
    let class = class.to_lowercase();
    CLOTHING_CLASSES.iter().any(|c| class.contains(c))
}

/// Count clothing in raw detector output
pub fn count_clothing(predictions: &[Prediction]) -> DetectionResult {
    let clothing: Vec<&Prediction> = predictions.iter().filter(|p| is_clothing(&p.class)).collect();

    let items: Vec<String> = clothing
        .iter()
        .filter(|p| p.score > MIN_SCORE)
        .map(|p| format!("{} ({:.0}%)", p.class, p.score * 100.0))
        .collect();

    // Confidence is the detector's top prediction, whatever its class
    let confidence = match predictions.first() {
        Some(first) if !clothing.is_empty() => first.score,
        _ => FALLBACK_CONFIDENCE,
    };

    DetectionResult {
        count: (items.len() as u32).max(1),
        items,
        confidence,
    }
}

/// Run the detector on an image and count the clothing in it
pub async fn count_image(
    detector: &dyn ObjectDetector,
    image: &[u8],
) -> Result<DetectionResult, DetectorError> {
    let predictions = detector.detect(image).await?;
    tracing::debug!(predictions = predictions.len(), "Detector returned");
    Ok(count_clothing(&predictions))
}

/// Price for `count` garments at `rate` each
pub fn calculate_cost(count: u32, rate: Decimal) -> Decimal {
    line_total(count, rate)
}
