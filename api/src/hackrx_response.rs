use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct HackRxResponse {
    pub answers: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct StatusMessage {
    pub message: String,
}
