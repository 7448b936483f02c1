pub mod completion;
pub mod openai_compat;
pub mod registry;
pub mod traits;
pub mod util;

// Re-exports for convenience.
pub use completion::CompletionGateway;
pub use registry::ProviderRegistry;
pub use traits::{ChatRequest, ChatResponse, LlmProvider, Usage};
