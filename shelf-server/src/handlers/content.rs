//! Streaming of raw book resources

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    body::{Body, Bytes},
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use futures::stream::{self, StreamExt};
use shelf_core::split_book_path;
use std::convert::Infallible;
use std::io::{self, Write};
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

/// Chunks buffered between the archive reader and the response body
const CHANNEL_DEPTH: usize = 8;

/// Stream a resource from inside a book (`/content/{id}{resource}`)
///
/// The response status is decided before the first byte is sent: a missing
/// book or entry still yields an error status. Failures after that point
/// only cut the body short.
pub async fn get_content(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Response, ApiError> {
    let (id, resource) = split_book_path(&path)
        .ok_or_else(|| ApiError::BadRequest(format!("no .epub identifier in {:?}", path)))?;
    if resource.is_empty() {
        return Err(ApiError::BadRequest("missing resource path".to_string()));
    }
    let content_type = content_type_for(resource);

    let (tx, mut rx) = mpsc::channel::<Bytes>(CHANNEL_DEPTH);
    let shelf = state.shelf.clone();
    let (id, resource) = (id.to_string(), resource.to_string());
    let task = tokio::task::spawn_blocking(move || {
        let mut writer = ChannelWriter { tx };
        shelf.copy_content(&id, &resource, &mut writer)
    });

    let Some(first) = rx.recv().await else {
        // Sender dropped without data: either an error or an empty entry
        task.await??;
        return Ok(([(header::CONTENT_TYPE, content_type)], Body::empty()).into_response());
    };

    tokio::spawn(async move {
        match task.await {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => tracing::warn!("Content stream ended early: {}", e),
            Err(e) => tracing::error!("Content task failed: {}", e),
        }
    });

    let chunks = stream::once(async move { first })
        .chain(ReceiverStream::new(rx))
        .map(Ok::<_, Infallible>);

    Ok(([(header::CONTENT_TYPE, content_type)], Body::from_stream(chunks)).into_response())
}

/// Blocking writer that forwards every write as one body chunk
struct ChannelWriter {
    tx: mpsc::Sender<Bytes>,
}

impl Write for ChannelWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        self.tx
            .blocking_send(Bytes::copy_from_slice(buf))
            .map_err(|_| io::Error::new(io::ErrorKind::BrokenPipe, "client disconnected"))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Content type for a resource, guessed from its extension
pub fn content_type_for(resource: &str) -> String {
    mime_guess::from_path(resource)
        .first_or_octet_stream()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_for() {
        assert_eq!(content_type_for("/text/ch1.xhtml"), "application/xhtml+xml");
        assert_eq!(content_type_for("/images/Cover.JPG"), "image/jpeg");
        assert_eq!(content_type_for("/styles/main.css"), "text/css");
        assert_eq!(content_type_for("/mimetype"), "application/octet-stream");
    }

    #[test]
    fn test_content_type_for_media_resources() {
        assert_eq!(content_type_for("/audio/track.mp3"), "audio/mpeg");
        assert_eq!(content_type_for("/media/clip.mp4"), "video/mp4");
        assert_eq!(content_type_for("/images/fig.tiff"), "image/tiff");
    }
}
