use dotenv::dotenv;
use std::env;

pub struct Config {
    pub server_address: String,
}

pub fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
    dotenv().ok();

    let server_address = env::var("SERVER_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8000".to_string());

    Ok(Config { server_address })
}
