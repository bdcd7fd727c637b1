//!
//! src/catalog.rs
//!
//! Resolves an album id to its metadata through the catalog endpoint
//!

use tracing::{info, warn};

use crate::errors::RaterError;
use crate::fetch::CatalogClient;
use crate::identifier::Identifier;
use crate::types::{AccessToken, AlbumRecord};

/// Any decodable body is a success, even one with every field empty.
pub async fn resolve(client: &CatalogClient, id: &Identifier, token: AccessToken) ->
    Result<AlbumRecord, RaterError> {
    let response = client.album_request(id, &token)
        .send()
        .await?;
    drop(token);

    let status = response.status();
    if !status.is_success() {
        warn!(status = %status, id = %id, "catalog.resolve.status");
    }

    let body = response.bytes().await?;
    let record = decode_album(&body)?;
    info!(
        status = %status, id = %id, 
        album = %record.album_name, artist = %record.artist_name, 
        "catalog.resolve"
    );
    Ok(record)
}

fn decode_album(body: &[u8]) -> Result<AlbumRecord, RaterError> {
    serde_json::from_slice(body)
        .map_err(|e| RaterError::Parse(format!("album response: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_record() {
        let record = decode_album(
            br#"{"albumName":"OK Computer","artistName":"Radiohead","img":"http://x","link":"http://y"}"#
        ).unwrap();
        assert_eq!(record.album_name, "OK Computer");
        assert_eq!(record.link, "http://y");
    }

    #[test]
    fn not_found_shape_is_empty_record() {
        let record = decode_album(br#"{"error":"no such album"}"#).unwrap();
        assert_eq!(record, AlbumRecord::default());
    }

    #[test]
    fn non_json_is_parse_error() {
        assert!(matches!(decode_album(b"Bad Gateway"), Err(RaterError::Parse(_))));
        assert!(matches!(decode_album(b""), Err(RaterError::Parse(_))));
        assert!(matches!(decode_album(b"[1,2]"), Err(RaterError::Parse(_))));
    }
}
