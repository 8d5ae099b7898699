use serde::{Deserialize, Serialize};

/// Token accounting reported by the endpoint alongside a completion.
#[derive(Debug, Deserialize, Serialize, Clone, Copy)]
pub struct Usage {
    pub prompt_tokens: i32,
    pub completion_tokens: i32,
    pub total_tokens: i32,
}
