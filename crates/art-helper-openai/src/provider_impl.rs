use std::sync::Arc;
use std::{future::Future, pin::Pin};

use art_helper_core::error::Result;
use art_helper_core::provider::CompletionProvider;

use crate::{
    OpenAiBackend,
    api_v1::{ChatCompletionMessage, ChatCompletionRequest, ChatCompletionResponse},
    error::OpenAiError,
};

impl CompletionProvider for OpenAiBackend {
    fn complete<'p>(
        &'p self,
        prompt: &'p str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'p>> {
        let client = Arc::clone(&self.client);
        let request = ChatCompletionRequest::new(
            self.model.clone(),
            vec![ChatCompletionMessage::user(prompt)],
        )
        .with_max_tokens(self.max_tokens)
        .with_temperature(self.temperature);

        Box::pin(async move {
            let response = client.chat_completion(request).await?;
            extract_content(response)
        })
    }
}

/// Pull the reply text out of a parsed response: first choice, trimmed.
/// An envelope without choices is malformed; present-but-blank content gets
/// its own category so the front-ends can show the dedicated message.
fn extract_content(response: ChatCompletionResponse) -> Result<String> {
    let Some(first_choice) = response.choices.into_iter().next() else {
        return Err(OpenAiError::Format("response has no choices".into()).into());
    };

    let content = first_choice.message.content.unwrap_or_default();
    let content = content.trim();
    if content.is_empty() {
        return Err(OpenAiError::EmptyContent.into());
    }

    Ok(content.to_string())
}
