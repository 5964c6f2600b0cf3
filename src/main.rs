use wordcloud_server::config::load_config;
use wordcloud_server::routes::create_router;
use wordcloud_server::services::article_fetching::build_http_client;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    let client = build_http_client()?;

    let app = create_router(client);

    println!("Listening on {}", config.server_address);
    let listener = tokio::net::TcpListener::bind(&config.server_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
