//! Loading tiles from local files.
//!
//! A `.json` file holds an array of [`NewsTile`]s; anything else is parsed as
//! an RSS/Atom document. Network fetching is the host's business.

use std::path::Path;

use chrono::{DateTime, Utc};
use feed_rs::parser;
use uuid::Uuid;

use crate::tile::NewsTile;
use crate::{Error, Result};

/// Load tiles from a JSON or RSS/Atom file, keeping document order
pub fn load_tiles(path: &Path) -> Result<Vec<NewsTile>> {
    let content = std::fs::read(path)?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let tiles = if is_json {
        serde_json::from_slice(&content)?
    } else {
        parse_feed(&content)?
    };

    tracing::debug!("Loaded {} tiles from {}", tiles.len(), path.display());
    Ok(tiles)
}

/// Parse RSS/Atom feed content into tiles
pub fn parse_feed(content: &[u8]) -> Result<Vec<NewsTile>> {
    let feed = parser::parse(content).map_err(|e| Error::FeedParse(e.to_string()))?;

    let source = feed.title.map(|t| t.content);

    let tiles = feed
        .entries
        .into_iter()
        .map(|entry| {
            let title = entry
                .title
                .map(|t| t.content)
                .unwrap_or_else(|| "Untitled".to_string());

            let url = entry.links.first().map(|l| l.href.clone());

            let html = entry
                .content
                .and_then(|c| c.body)
                .or_else(|| entry.summary.map(|s| s.content));

            let summary = html
                .as_deref()
                .map(html_to_text)
                .filter(|text| !text.is_empty());

            let published_at = entry
                .published
                .or(entry.updated)
                .map(DateTime::<Utc>::from);

            // Media thumbnail, then media content, then the first <img> in the body
            let image_url = entry
                .media
                .first()
                .and_then(|m| m.thumbnails.first())
                .map(|t| t.image.uri.clone())
                .or_else(|| {
                    entry
                        .media
                        .first()
                        .and_then(|m| m.content.first())
                        .and_then(|c| c.url.as_ref())
                        .map(|u| u.to_string())
                })
                .or_else(|| html.as_deref().and_then(extract_first_image_url));

            NewsTile {
                id: Uuid::new_v4(),
                title,
                summary,
                source: source.clone(),
                url,
                image_url,
                published_at,
            }
        })
        .collect();

    Ok(tiles)
}

/// Find the `src` of the first `<img>` tag, skipping tracking pixels
fn extract_first_image_url(html: &str) -> Option<String> {
    let html_lower = html.to_ascii_lowercase();
    let img_start = html_lower.find("<img")?;
    let remaining = &html[img_start..];

    let src_start = remaining.to_ascii_lowercase().find("src=")?;
    let src_remaining = &remaining[src_start + 4..];

    // Handle both src="url" and src='url'
    let quote_char = src_remaining.chars().next()?;
    if quote_char != '"' && quote_char != '\'' {
        return None;
    }
    let url_end = src_remaining[1..].find(quote_char)?;
    let url = &src_remaining[1..1 + url_end];

    if url.is_empty() || url.contains("1x1") || url.contains("pixel") || url.contains("tracking")
    {
        return None;
    }
    Some(url.to_string())
}

fn html_to_text(html: &str) -> String {
    html2text::from_read(html.as_bytes(), 80)
        .unwrap_or_else(|_| html.to_string())
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::Tile;

    const RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Morning Wire</title>
    <link>https://example.com</link>
    <description>Headlines</description>
    <item>
      <title>Bridge reopens</title>
      <link>https://example.com/bridge</link>
      <description>&lt;p&gt;&lt;img src="https://example.com/bridge.jpg"&gt;Traffic resumes.&lt;/p&gt;</description>
    </item>
    <item>
      <title>Council meets</title>
      <link>https://example.com/council</link>
      <description>Budget talks continue.</description>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn test_parse_feed_detects_images() {
        let tiles = parse_feed(RSS.as_bytes()).unwrap();
        assert_eq!(tiles.len(), 2);

        assert_eq!(tiles[0].title, "Bridge reopens");
        assert_eq!(
            tiles[0].image_url.as_deref(),
            Some("https://example.com/bridge.jpg")
        );
        assert!(tiles[0].has_large_form());

        assert_eq!(tiles[1].title, "Council meets");
        assert!(!tiles[1].has_large_form());
        assert!(tiles[1]
            .summary
            .as_deref()
            .is_some_and(|s| s.contains("Budget talks")));
        assert_eq!(tiles[1].source.as_deref(), Some("Morning Wire"));
    }

    #[test]
    fn test_parse_feed_rejects_garbage() {
        assert!(matches!(
            parse_feed(b"definitely not a feed"),
            Err(Error::FeedParse(_))
        ));
    }

    #[test]
    fn test_extract_first_image_url() {
        assert_eq!(
            extract_first_image_url(r#"<div><IMG class="x" src='https://a/b.png'></div>"#),
            Some("https://a/b.png".to_string())
        );
        assert_eq!(
            extract_first_image_url(r#"<img src="https://a/pixel.gif">"#),
            None
        );
        assert_eq!(extract_first_image_url("<p>no images</p>"), None);
    }

    #[test]
    fn test_load_tiles_from_json() {
        let dir = std::env::temp_dir().join(format!("newsdeck-source-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("tiles.json");
        std::fs::write(
            &path,
            r#"[
                {"title": "One"},
                {"title": "Two", "image_url": "https://example.com/two.jpg"}
            ]"#,
        )
        .unwrap();

        let tiles = load_tiles(&path).unwrap();
        assert_eq!(tiles.len(), 2);
        assert!(!tiles[0].has_large_form());
        assert!(tiles[1].has_large_form());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_tiles_missing_file() {
        let path = std::env::temp_dir().join("newsdeck-definitely-missing.json");
        assert!(matches!(load_tiles(&path), Err(Error::Io(_))));
    }
}
