//! Commentary generated by a language model.

use super::{CommentaryError, CommentaryRequest, Commentator, prompt};
use crate::llm_client::LlmClient;
use tracing::instrument;

/// Commentator backed by an [`LlmClient`].
#[derive(Debug, Clone)]
pub struct LlmCommentator {
    client: LlmClient,
}

impl LlmCommentator {
    /// Creates a commentator using the given client.
    pub fn new(client: LlmClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Commentator for LlmCommentator {
    #[instrument(skip(self, request))]
    async fn comment(&self, request: &CommentaryRequest) -> Result<String, CommentaryError> {
        let system = prompt::system_prompt(*request.mover());
        let user = prompt::user_prompt(request);
        let line = self.client.generate(&system, &user).await?;
        Ok(line.trim().to_string())
    }

    fn name(&self) -> &str {
        self.client.config().model()
    }
}
