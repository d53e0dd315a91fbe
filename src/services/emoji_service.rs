//! Emoji interpretation service.
//!
//! Combines the fixed emoji-to-text mapping with whatever analysis has been
//! stored for the emoji ahead of time. Nothing is computed on demand and
//! nothing is written back.

use tracing::debug;

use crate::{
    db::Store, error::AppError, models::emoji::EmojiInterpretResponse,
    services::demojize::demojize,
};

/// Interpret an emoji.
///
/// # Process
///
/// 1. Map the input to text (`😀` -> `:grinning_face:`); unknown input is kept as is
/// 2. Look up the stored query for the exact input, with its analyses
/// 3. Attach the first analysis as additional context when its payload is non-empty
///
/// # Errors
///
/// - `Database`: the lookup itself failed. Malformed payloads never error.
pub async fn interpret_emoji(
    store: &dyn Store,
    emoji_input: &str,
) -> Result<EmojiInterpretResponse, AppError> {
    let textual_interpretation = demojize(emoji_input);

    let query = store.find_emoji_query(emoji_input).await?;
    let additional_context = query.as_ref().and_then(|q| q.first_context());

    debug!(
        emoji = emoji_input,
        stored = query.is_some(),
        has_context = additional_context.is_some(),
        "Emoji interpreted"
    );

    Ok(EmojiInterpretResponse {
        original_emoji: emoji_input.to_string(),
        textual_interpretation,
        additional_context,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::MemoryStore;
    use crate::models::emoji::{AnalysisContext, EmojiAnalysis, EmojiQuery};
    use serde_json::{Value, json};

    fn stored(emoji: &str, payloads: Vec<Option<Value>>) -> EmojiQuery {
        EmojiQuery {
            id: "q1".to_string(),
            emoji: emoji.to_string(),
            analyses: payloads
                .into_iter()
                .map(|analysis_result| EmojiAnalysis { analysis_result })
                .collect(),
        }
    }

    #[tokio::test]
    async fn unknown_emoji_has_no_context() {
        let store = MemoryStore::default();

        let result = interpret_emoji(&store, "😀").await.unwrap();
        assert_eq!(
            result,
            EmojiInterpretResponse {
                original_emoji: "😀".to_string(),
                textual_interpretation: ":grinning_face:".to_string(),
                additional_context: None,
            }
        );
    }

    #[tokio::test]
    async fn stored_analysis_is_attached() {
        let payload = json!({
            "related_emojis": ["😀"],
            "usage_examples": ["hi!"],
            "sentiment_score": 0.9
        });
        let store = MemoryStore::default().with_emoji_query(stored("😀", vec![Some(payload)]));

        let result = interpret_emoji(&store, "😀").await.unwrap();
        assert_eq!(
            result.additional_context,
            Some(AnalysisContext {
                related_emojis: vec!["😀".to_string()],
                usage_examples: vec!["hi!".to_string()],
                sentiment_score: Some(0.9),
            })
        );
    }

    #[tokio::test]
    async fn query_without_analyses_has_no_context() {
        let store = MemoryStore::default().with_emoji_query(stored("😀", Vec::new()));

        let result = interpret_emoji(&store, "😀").await.unwrap();
        assert_eq!(result.additional_context, None);
    }

    #[tokio::test]
    async fn empty_first_payload_hides_later_ones() {
        let store = MemoryStore::default().with_emoji_query(stored(
            "😀",
            vec![Some(json!({})), Some(json!({ "sentiment_score": 0.1 }))],
        ));

        let result = interpret_emoji(&store, "😀").await.unwrap();
        assert_eq!(result.additional_context, None);
    }

    #[tokio::test]
    async fn arbitrary_text_is_accepted() {
        let store = MemoryStore::default();

        let result = interpret_emoji(&store, "not an emoji").await.unwrap();
        assert_eq!(result.textual_interpretation, "not an emoji");
        assert_eq!(result.original_emoji, "not an emoji");
    }

    #[tokio::test]
    async fn lookup_failure_propagates() {
        let store = MemoryStore::failing();

        assert!(interpret_emoji(&store, "😀").await.is_err());
    }
}
