pub mod article_fetching;
pub mod keyword_ranking;
