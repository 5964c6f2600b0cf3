use anyhow::{anyhow, Error};
use keyword_extraction::tf_idf::{TfIdf, TfIdfParams};

use crate::models::KeywordEntry;

/// Scores `text` as a one-document corpus and returns the `top_n` highest
/// weighted terms, sorted by descending weight.
///
/// With a single document the IDF factor is the same for every term, so the
/// ranking reduces to normalized term frequency over the stop-word-filtered
/// tokens.
pub fn extract_keywords(text: &str, top_n: usize) -> Result<Vec<KeywordEntry>, Error> {
    let stop_words = stop_words::get(stop_words::LANGUAGE::English);

    let documents = vec![text.to_string()];
    let tf_idf = TfIdf::new(TfIdfParams::UnprocessedDocuments(
        &documents,
        &stop_words,
        None,
    ));

    let ranked_words = tf_idf.get_ranked_word_scores(top_n);
    if ranked_words.is_empty() {
        return Err(anyhow!(
            "no terms left after tokenization and stop-word filtering"
        ));
    }

    Ok(ranked_words
        .into_iter()
        .map(|(word, weight)| KeywordEntry { word, weight })
        .collect())
}
