use std::sync::Arc;

use synthgen_core::{
    error::GenerationError,
    provider::{CompletionParameters, CompletionProvider},
};

use crate::{
    OpenAiAdapter,
    api_v1::ChatCompletionRequest,
    model_map::map_model,
};

impl CompletionProvider for OpenAiAdapter {
    fn complete<'p>(
        &'p self,
        params: CompletionParameters,
    ) -> std::pin::Pin<
        Box<dyn Future<Output = synthgen_core::error::Result<String>> + Send + 'p>,
    > {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let model = params.model();
            let model = map_model(&model).ok_or(GenerationError::InvalidRequest(format!(
                "backend does not support selected model: {model:?}"
            )))?;

            let request = ChatCompletionRequest::new(
                model.into(),
                params.messages.into_iter().map(Into::into).collect(),
                params.max_tokens,
            );

            let raw = client.chat_completion(request).await?;
            Ok(raw)
        })
    }
}
