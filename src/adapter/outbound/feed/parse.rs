//! Feed document to [`RawItem`] conversion.

use crate::domain::RawItem;
use crate::error::FetchError;

/// Parse a feed body into raw items in document order.
///
/// Entries without a title or link are kept with the missing field left
/// empty; the pipeline counts them as malformed.
///
/// # Errors
///
/// Returns [`FetchError::Parse`] if the body is not a recognizable feed.
pub fn parse_feed(body: &[u8], source_id: &str) -> Result<Vec<RawItem>, FetchError> {
    let feed = feed_rs::parser::parse(body)?;

    let items = feed
        .entries
        .into_iter()
        .map(|entry| {
            let title = entry
                .title
                .map(|t| t.content.trim().to_string())
                .unwrap_or_default();
            let link = entry
                .links
                .first()
                .map(|l| l.href.trim().to_string())
                .unwrap_or_default();
            let mut item = RawItem::new(source_id, title, link);
            if let Some(at) = entry.published.or(entry.updated) {
                item = item.published(at);
            }
            item
        })
        .collect();

    Ok(items)
}
