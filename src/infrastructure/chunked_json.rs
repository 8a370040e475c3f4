// Chunked JSON streaming utilities
use crate::infrastructure::http_response::brotli;
use axum::body::Body;
use axum::http::{Response, StatusCode, header};
use axum::response::IntoResponse;
use bytes::{BufMut, Bytes, BytesMut};
use futures::StreamExt;
use futures::stream::Stream;
use serde::Serialize;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// Create a chunked streaming response of length-prefixed JSON frames
pub fn chunked_json_stream<S, T>(stream: S, compress: bool) -> Result<Response<Body>, StatusCode>
where
    S: Stream<Item = T> + Send + 'static,
    T: Serialize + Send + Sync + 'static,
{
    let byte_stream = stream.then(move |msg| async move { serialize_chunk(&msg, compress).await });

    // Frames are compressed one by one, so no Content-Encoding on the response itself.
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/octet-stream")
        .header(header::TRANSFER_ENCODING, "chunked")
        .body(Body::from_stream(byte_stream))
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// A 4-byte big-endian length followed by the (optionally Brotli) JSON body.
pub async fn serialize_chunk<T: Serialize>(msg: &T, compress: bool) -> std::io::Result<Bytes> {
    let json = serde_json::to_vec(msg)?;

    let payload = if compress { brotli(json).await? } else { json };

    let length = payload.len() as u32;
    let mut chunk = BytesMut::with_capacity(4 + payload.len());
    chunk.put_u32(length);
    chunk.put_slice(&payload);

    Ok(chunk.freeze())
}

/// Stream the current value of `rx`, then every subsequent change.
pub fn stream_from_watch<T>(rx: watch::Receiver<T>, compress: bool) -> impl IntoResponse
where
    T: Serialize + Clone + Send + Sync + 'static,
{
    match chunked_json_stream(WatchStream::new(rx), compress) {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Buf;
    use serde_json::json;

    #[tokio::test]
    async fn test_chunk_is_length_prefixed() {
        let mut chunk = serialize_chunk(&json!({"connected": true}), false).await.unwrap();
        let length = chunk.get_u32() as usize;
        assert_eq!(length, chunk.len());
        assert_eq!(&chunk[..], br#"{"connected":true}"#);
    }

    #[tokio::test]
    async fn test_watch_stream_starts_with_current_value() {
        let (tx, rx) = watch::channel(1u32);
        let mut frames = WatchStream::new(rx);
        assert_eq!(frames.next().await, Some(1));
        tx.send(2).unwrap();
        assert_eq!(frames.next().await, Some(2));
    }
}
