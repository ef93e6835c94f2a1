use reqwest::Client;
use serde_json::json;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let client = Client::new();
    let base_url = env::var("HACKRX_BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:3000".to_string());
    let token = env::var("HACKRX_BEARER_TOKEN")?;
    let run_url = format!("{}/api/v1/hackrx/run", base_url);

    println!("🧪 Testing Policynth API with Authentication");

    // Status check
    println!("\n📋 Status:");
    let status_response = client.get(&base_url).send().await?;
    println!("Status: {}", status_response.status());
    let status_json: serde_json::Value = status_response.json().await?;
    println!("Response: {}", serde_json::to_string_pretty(&status_json)?);

    // Valid token
    println!("\n🔍 Run with valid token:");
    let payload = json!({
        "documents": "https://hackrx.blob.core.windows.net/assets/hackrx_6/policies/BAJHLIP23020V012223.pdf",
        "questions": [
            "What is the definition of Accident?",
            "How many days of post-hospitalization expenses are covered?"
        ]
    });

    let run_response = client
        .post(&run_url)
        .bearer_auth(&token)
        .json(&payload)
        .send()
        .await?;

    println!("Status: {}", run_response.status());
    let run_json: serde_json::Value = run_response.json().await?;
    if let (Some(questions), Some(answers)) = (
        payload["questions"].as_array(),
        run_json["answers"].as_array(),
    ) {
        for (i, (question, answer)) in questions.iter().zip(answers).enumerate() {
            println!("\n{}. Q: {}", i + 1, question);
            println!("   A: {}", answer);
        }
    } else {
        println!("Response: {}", serde_json::to_string_pretty(&run_json)?);
    }

    // Invalid token
    println!("\n🔒 Run with invalid token:");
    let rejected = client
        .post(&run_url)
        .bearer_auth("invalid_token_123")
        .json(&json!({
            "documents": "https://example.com/test.pdf",
            "questions": ["Test question?"]
        }))
        .send()
        .await?;

    println!("Status: {}", rejected.status());
    println!("Response: {}", rejected.text().await?);

    println!("\n✅ Client test completed!");
    Ok(())
}
