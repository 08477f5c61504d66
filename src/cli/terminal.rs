//! Process terminal plumbing: stdin on its own thread and Ctrl-C as a
//! stream of interrupts.
//!
//! Tokio's `stdin()` performs its reads on the blocking pool, and a read
//! that is pending when the session ends keeps the runtime from shutting
//! down until another line arrives. Reading on a detached thread instead
//! lets the process exit while that thread is still blocked.

use std::io::{self, BufRead};
use std::pin::Pin;
use std::task::{ready, Context, Poll};
use std::thread;
use tokio::io::{AsyncBufRead, AsyncRead, ReadBuf};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Lines read from stdin so far, kept ahead of the console.
const STDIN_BACKLOG: usize = 16;

/// Interrupt signals delivered to a [`Console`](super::Console).
pub type Interrupts = mpsc::UnboundedReceiver<()>;

/// Stdin as an async buffered reader, fed line by line from a reader thread.
///
/// End of input is reported once the thread has seen end of file and every
/// line it read has been consumed.
#[derive(Debug)]
pub struct StdinLines {
    lines: mpsc::Receiver<io::Result<Vec<u8>>>,
    chunk: Vec<u8>,
    pos: usize,
}

impl StdinLines {
    /// Start the reader thread.
    pub fn spawn() -> io::Result<Self> {
        let (tx, lines) = mpsc::channel(STDIN_BACKLOG);

        thread::Builder::new()
            .name("stdin-reader".to_string())
            .spawn(move || {
                let stdin = io::stdin();
                let mut stdin = stdin.lock();
                loop {
                    let mut line = Vec::new();
                    let sent = match stdin.read_until(b'\n', &mut line) {
                        Ok(0) => break,
                        Ok(_) => tx.blocking_send(Ok(line)),
                        Err(e) => {
                            let _ = tx.blocking_send(Err(e));
                            break;
                        }
                    };
                    // Console dropped
                    if sent.is_err() {
                        break;
                    }
                }
                debug!("Stdin reader finished");
            })?;

        Ok(Self::from_receiver(lines))
    }

    fn from_receiver(lines: mpsc::Receiver<io::Result<Vec<u8>>>) -> Self {
        Self {
            lines,
            chunk: Vec::new(),
            pos: 0,
        }
    }
}

impl AsyncBufRead for StdinLines {
    fn poll_fill_buf(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<&[u8]>> {
        let this = self.get_mut();

        while this.pos >= this.chunk.len() {
            match ready!(this.lines.poll_recv(cx)) {
                Some(Ok(chunk)) => {
                    this.chunk = chunk;
                    this.pos = 0;
                }
                Some(Err(e)) => return Poll::Ready(Err(e)),
                None => break,
            }
        }

        Poll::Ready(Ok(&this.chunk[this.pos..]))
    }

    fn consume(self: Pin<&mut Self>, amt: usize) {
        let this = self.get_mut();
        this.pos = (this.pos + amt).min(this.chunk.len());
    }
}

impl AsyncRead for StdinLines {
    fn poll_read(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        let available = ready!(self.as_mut().poll_fill_buf(cx))?;
        let n = available.len().min(buf.remaining());
        buf.put_slice(&available[..n]);
        self.consume(n);
        Poll::Ready(Ok(()))
    }
}

/// Forward every Ctrl-C of the process to the returned receiver.
///
/// A single listener task lives for the whole session, so a Ctrl-C that
/// arrives while no prompt is pending is queued rather than lost. Must be
/// called from within a tokio runtime.
pub fn ctrl_c_interrupts() -> Interrupts {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        loop {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "Cannot listen for Ctrl-C");
                break;
            }
            debug!("Received Ctrl-C");
            if tx.send(()).is_err() {
                break;
            }
        }
    });

    rx
}
