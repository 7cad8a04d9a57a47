use crate::errors::{CropGuardError, CropGuardResult};
use crate::services::chat::assembler::DeltaAssembler;
use crate::services::chat::types::MessageUpdate;
use crate::transport::ByteStream;
use futures::stream::{Stream, StreamExt};
use std::collections::VecDeque;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Stream of [`MessageUpdate`]s for one assistant reply, driven by the raw
/// byte stream of a `/crop-chat` response.
pub struct ChatReplyStream {
    inner: ByteStream,
    assembler: DeltaAssembler,
    pending: VecDeque<MessageUpdate>,
    finished: bool,
}

impl std::fmt::Debug for ChatReplyStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatReplyStream")
            .field("pending", &self.pending)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

impl ChatReplyStream {
    pub fn new(inner: ByteStream) -> Self {
        Self {
            inner,
            assembler: DeltaAssembler::new(),
            pending: VecDeque::new(),
            finished: false,
        }
    }

    /// Drains the stream and returns the full assistant text.
    pub async fn collect_text(mut self) -> CropGuardResult<String> {
        let mut content = String::new();
        while let Some(update) = self.next().await {
            content = update?.content;
        }
        Ok(content)
    }
}

impl Stream for ChatReplyStream {
    type Item = CropGuardResult<MessageUpdate>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        loop {
            if let Some(update) = this.pending.pop_front() {
                return Poll::Ready(Some(Ok(update)));
            }

            if this.finished {
                return Poll::Ready(None);
            }

            match this.inner.as_mut().poll_next(cx) {
                Poll::Ready(Some(Ok(chunk))) => {
                    this.pending.extend(this.assembler.feed(&chunk));
                }
                Poll::Ready(Some(Err(e))) => {
                    this.finished = true;
                    return Poll::Ready(Some(Err(CropGuardError::Stream(e.to_string()))));
                }
                Poll::Ready(None) => {
                    this.finished = true;
                    if let Some(update) = this.assembler.finish() {
                        this.pending.push_back(update);
                    }
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}
