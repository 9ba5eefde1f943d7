// Interview practice: question generation, answer evaluation and the session ledger.
// All LLM calls go through llm_client via the CompletionClient — no direct API calls here.

pub mod completion;
pub mod handlers;
pub mod ledger;
pub mod prompts;
pub mod sanitizer;
pub mod session;
pub mod summary;
