use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct AnalyzeRequest {
    pub url: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct KeywordEntry {
    pub word: String,
    pub weight: f32,
}

#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum AnalyzeResponse {
    Words { words: Vec<KeywordEntry> },
    Error { error: String },
}
