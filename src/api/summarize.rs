use tracing::{info, warn};
use uuid::Uuid;

use crate::ai::FallbackChain;
use crate::core::models::{SummaryRequest, SummaryResponse, SummaryResult, char_len};
use crate::prompt::Prompt;

/// Runs one validated request through the fallback chain and shapes the reply.
///
/// Provider failures never escape: a fully exhausted chain still yields a
/// response, carrying the fixed diagnostic text and `model_used = "None"`.
#[tracing::instrument(
    level = "info",
    skip(chain, request),
    fields(request_id = %Uuid::new_v4())
)]
pub async fn summarize_text(chain: &FallbackChain, request: &SummaryRequest) -> SummaryResponse {
    info!(
        original_length = char_len(request.text()),
        max_length = request.max_length(),
        min_length = request.min_length(),
        "Summarize request received"
    );

    let prompt = Prompt::for_summary(request.text(), request.max_length());
    let result = chain.summarize(&prompt).await;

    if let SummaryResult::Exhausted { diagnostic } = &result {
        warn!(%diagnostic, "Returning graceful failure payload");
    }

    let response = SummaryResponse::from_result(request.text(), result);
    info!(
        model_used = %response.model_used,
        summary_length = response.summary_length,
        "Summarize request completed"
    );
    response
}
