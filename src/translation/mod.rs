mod backend;
mod orchestrator;
mod providers;

pub use backend::{HfInferenceClient, TranslationBackend};
pub use orchestrator::{StreamSummary, TranslationJob, translate_single, translate_stream};
pub use providers::{
    ModelTemplate, PROVIDERS, ProviderSpec, known_providers, provider_spec, resolve_model_name,
};
