//! Emoji query data models and API response types.
//!
//! This module defines:
//! - `EmojiQuery`: A previously seen emoji together with its stored analyses
//! - `EmojiAnalysis`: One pre-computed analysis payload
//! - `AnalysisContext`: The typed view of a payload returned to clients
//! - `EmojiInterpretResponse`: Response body for the interpret endpoint

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An emoji with its stored analyses.
///
/// # Database Tables
///
/// Built from `emoji_queries` joined with `emoji_analyses`. Analyses are
/// ordered oldest first; only the first one is ever consulted.
#[derive(Debug, Clone, Default)]
pub struct EmojiQuery {
    pub id: String,
    pub emoji: String,
    pub analyses: Vec<EmojiAnalysis>,
}

/// A pre-computed analysis stored as free-form JSON.
///
/// Populated by an out-of-scope process. The payload may be missing, empty,
/// or shaped differently than expected.
#[derive(Debug, Clone, Default)]
pub struct EmojiAnalysis {
    pub analysis_result: Option<Value>,
}

/// Row shape of the `emoji_queries LEFT JOIN emoji_analyses` lookup.
///
/// `analysis_id` is null when the query has no analyses at all.
#[derive(Debug, sqlx::FromRow)]
pub struct EmojiQueryRow {
    pub id: String,
    pub emoji: String,
    pub analysis_id: Option<String>,
    pub analysis_result: Option<Value>,
}

impl EmojiQuery {
    /// Fold the joined rows of a single query into one record.
    ///
    /// Returns `None` for an empty row set. Row order is preserved.
    pub fn from_rows(rows: Vec<EmojiQueryRow>) -> Option<Self> {
        let mut rows = rows.into_iter().peekable();
        let first = rows.peek()?;
        let mut query = EmojiQuery {
            id: first.id.clone(),
            emoji: first.emoji.clone(),
            analyses: Vec::new(),
        };

        for row in rows {
            if row.analysis_id.is_some() {
                query.analyses.push(EmojiAnalysis {
                    analysis_result: row.analysis_result,
                });
            }
        }

        Some(query)
    }

    /// Context from the first stored analysis, if it carries a non-empty payload.
    pub fn first_context(&self) -> Option<AnalysisContext> {
        self.analyses
            .first()?
            .analysis_result
            .as_ref()
            .and_then(AnalysisContext::from_payload)
    }
}

/// Additional context attached to an interpretation.
///
/// # JSON Example
///
/// ```json
/// {
///   "related_emojis": ["😀"],
///   "usage_examples": ["hi!"],
///   "sentiment_score": 0.9
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisContext {
    pub related_emojis: Vec<String>,
    pub usage_examples: Vec<String>,
    pub sentiment_score: Option<f64>,
}

impl AnalysisContext {
    /// Decode a stored payload.
    ///
    /// Empty payloads (`null`, `{}`, `[]`, `""`, `0`, `false`) yield `None`.
    /// Any other payload yields a context; keys that are missing or hold the
    /// wrong type fall back to their defaults instead of failing.
    pub fn from_payload(payload: &Value) -> Option<Self> {
        if is_empty_payload(payload) {
            return None;
        }

        Some(Self {
            related_emojis: string_list(payload.get("related_emojis")),
            usage_examples: string_list(payload.get("usage_examples")),
            sentiment_score: payload.get("sentiment_score").and_then(Value::as_f64),
        })
    }
}

fn is_empty_payload(payload: &Value) -> bool {
    match payload {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(|v| serde_json::from_value(v.clone()).ok())
        .unwrap_or_default()
}

/// Response body for `GET /emoji/interpret/{emoji_input}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmojiInterpretResponse {
    pub original_emoji: String,
    pub textual_interpretation: String,
    pub additional_context: Option<AnalysisContext>,
}
