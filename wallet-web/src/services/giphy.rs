//! Keyword image lookup against the Giphy search API

use gloo_net::http::Request;
use serde::Deserialize;

const SEARCH_URL: &str = "https://api.giphy.com/v1/gifs/search";

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<Gif>,
}

#[derive(Deserialize)]
struct Gif {
    images: GifImages,
}

#[derive(Deserialize)]
struct GifImages {
    downsized_medium: GifImage,
}

#[derive(Deserialize)]
struct GifImage {
    url: String,
}

/// Build the search URL for a keyword. Whitespace is removed from the query.
pub fn search_url(api_key: &str, keyword: &str) -> String {
    let query: String = keyword.split_whitespace().collect();
    format!(
        "{}?api_key={}&q={}&limit=1",
        SEARCH_URL,
        urlencoding::encode(api_key),
        urlencoding::encode(&query)
    )
}

/// Fetch the first GIF for `keyword`. Failures are logged and yield `None`.
pub async fn fetch_keyword_gif(api_key: &str, keyword: &str) -> Option<String> {
    if keyword.trim().is_empty() {
        return None;
    }

    let url = search_url(api_key, keyword);
    let response = match Request::get(&url).send().await {
        Ok(resp) if resp.ok() => resp,
        Ok(resp) => {
            log::warn!("[giphy] search returned status {}", resp.status());
            return None;
        }
        Err(e) => {
            log::warn!("[giphy] request failed: {:?}", e);
            return None;
        }
    };

    match response.json::<SearchResponse>().await {
        Ok(body) => body
            .data
            .into_iter()
            .next()
            .map(|gif| gif.images.downsized_medium.url),
        Err(e) => {
            log::warn!("[giphy] unexpected response: {:?}", e);
            None
        }
    }
}
