//! Grow a dataset across two calls and read back the accumulated records.
//!
//! ```bash
//! OPENAI_API_KEY=sk-... cargo run --example openai_generate_more
//! ```

use synthgen::{
    AppendRequest, GenerationRequest, GenerationService, store::MemoryStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let backend = synthgen::openai::OpenAiAdapterBuilder::new_from_env().build()?;
    let service = GenerationService::new(backend, MemoryStore::new());

    service
        .generate(GenerationRequest::new("European Capitals", 3, 3))
        .await?;

    let increment = service
        .generate_more(
            AppendRequest::new("European Capitals", 2)
                .with_properties(vec!["city".into(), "country".into(), "population".into()]),
        )
        .await?;
    println!("new records: {}", serde_json::to_string_pretty(&increment)?);

    let all = service.get_by_topic("European Capitals")?;
    println!("accumulated: {} records", all.len());

    service.delete_by_topic("European Capitals")?;
    Ok(())
}
