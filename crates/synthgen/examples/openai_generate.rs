//! Generate a small synthetic dataset and print it.
//!
//! ```bash
//! OPENAI_API_KEY=sk-... cargo run --example openai_generate
//! ```

use synthgen::{GenerationRequest, GenerationService, store::MemoryStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let backend = synthgen::openai::OpenAiAdapterBuilder::new_from_env().build()?;
    let service = GenerationService::new(backend, MemoryStore::new());

    let records = service
        .generate(GenerationRequest::new("Flight Schedules", 3, 2))
        .await?;

    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}
