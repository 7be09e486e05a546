use synthgen_core::model::{Model, OpenAiModel};

pub const GPT4: &str = "gpt-4";
pub const GPT4_O: &str = "gpt-4o";
pub const GPT4_O_MINI: &str = "gpt-4o-mini";

pub(crate) fn map_model(model: &Model) -> Option<&'static str> {
    match model {
        Model::Custom(custom) => Some(*custom),
        Model::OpenAi(openai_model) => match openai_model {
            OpenAiModel::Gpt4 => Some(GPT4),
            OpenAiModel::Gpt4o => Some(GPT4_O),
            OpenAiModel::Gpt4oMini => Some(GPT4_O_MINI),
        },
    }
}
