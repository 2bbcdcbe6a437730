mod mock_completion;
mod openai_responses_client;

pub use mock_completion::*;
pub use openai_responses_client::*;
