use serde_json::Value;

use crate::hackrx_request::HackRxRequest;

/// Produces one placeholder answer per question, in question order.
pub fn mock_answers(request: &HackRxRequest) -> Vec<String> {
    let documents = render(&request.documents);
    request
        .questions
        .iter()
        .map(|question| {
            format!(
                "Mock answer for: {} (from document: {})",
                render(question),
                documents
            )
        })
        .collect()
}

// Strings are inlined as-is; anything else uses its compact JSON text.
fn render(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
