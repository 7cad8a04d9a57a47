use bytes::Bytes;

pub fn sse_delta(content: &str) -> String {
    format!(
        "data: {{\"choices\":[{{\"delta\":{{\"content\":{}}}}}]}}\n\n",
        serde_json::to_string(content).unwrap()
    )
}

pub fn sse_done() -> String {
    "data: [DONE]\n\n".to_string()
}

/// A short advisor reply as one SSE body.
pub fn advisor_reply_body(parts: &[&str]) -> String {
    let mut body = String::new();
    for part in parts {
        body.push_str(&sse_delta(part));
    }
    body.push_str(&sse_done());
    body
}

/// The same body cut into fixed-size byte chunks, simulating arbitrary
/// network framing.
pub fn chunked(body: &str, chunk_size: usize) -> Vec<Bytes> {
    body.as_bytes()
        .chunks(chunk_size)
        .map(Bytes::copy_from_slice)
        .collect()
}
