//! Emoji interpretation endpoint.

use crate::{
    error::AppError, models::emoji::EmojiInterpretResponse, services::emoji_service,
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
};

/// Interpret an emoji.
///
/// # Endpoint
///
/// `GET /emoji/interpret/{emoji_input}`
///
/// The path segment is percent-decoded before interpretation, so
/// `/emoji/interpret/%F0%9F%98%80` interprets `😀`.
///
/// # Response
///
/// - **Success (200 OK)**: Interpretation with optional stored context
/// - **Error (500)**: Lookup failed
///
/// ```json
/// {
///   "original_emoji": "😀",
///   "textual_interpretation": ":grinning_face:",
///   "additional_context": null
/// }
/// ```
pub async fn interpret_emoji(
    State(state): State<AppState>,
    Path(emoji_input): Path<String>,
) -> Result<Json<EmojiInterpretResponse>, AppError> {
    let response = emoji_service::interpret_emoji(state.store.as_ref(), &emoji_input).await?;

    Ok(Json(response))
}
