use axum::{debug_handler, extract::State, Json};
use reqwest::Client;

use crate::models::{AnalyzeRequest, AnalyzeResponse};
use crate::services::article_fetching::fetch_article_text;
use crate::services::keyword_ranking::extract_keywords;

pub const TOP_KEYWORD_COUNT: usize = 30;

#[debug_handler]
pub async fn analyze_article(
    State(client): State<Client>,
    Json(request): Json<AnalyzeRequest>,
) -> Json<AnalyzeResponse> {
    println!("Analyzing article: {:?}", request.url);

    let article_text = fetch_article_text(&client, &request.url).await;
    if article_text.is_empty() {
        return Json(error_response("Failed to fetch article text"));
    }

    match extract_keywords(&article_text, TOP_KEYWORD_COUNT) {
        Ok(words) => Json(AnalyzeResponse::Words { words }),
        Err(e) => {
            eprintln!("Failed to rank keywords for {:?}: {:?}", request.url, e);
            Json(error_response("No keywords found in article text"))
        }
    }
}

fn error_response(message: &str) -> AnalyzeResponse {
    AnalyzeResponse::Error {
        error: message.to_string(),
    }
}
