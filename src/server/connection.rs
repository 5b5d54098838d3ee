//! Connection handling
//!
//! The accept loop and the per-connection line loop.

use std::future::Future;
use std::time::Duration;

use anyhow::Context;
use tokio::io::{
    self, AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader,
};
use tokio::net::TcpListener;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use super::handlers::{handle_line, AppState};
use crate::error::ProtocolError;
use crate::models::Response;

/// How long to wait for a client to hang up after its line was rejected
const DRAIN_TIMEOUT: Duration = Duration::from_secs(2);

/// Accepts connections until `shutdown` resolves.
///
/// Each connection runs on its own task and shares `state` with the others.
pub async fn serve<F>(listener: TcpListener, state: AppState, max_line_length: usize, shutdown: F)
where
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accepted = listener.accept() => match accepted {
                Ok((socket, peer)) => {
                    info!(%peer, "client connected");
                    let state = state.clone();
                    tokio::spawn(async move {
                        if let Err(e) = handle_connection(socket, state, max_line_length).await {
                            warn!(%peer, error = %e, "connection closed with error");
                        }
                        debug!(%peer, "client disconnected");
                    });
                }
                Err(e) => warn!(error = %e, "failed to accept connection"),
            },
            _ = &mut shutdown => {
                info!("No longer accepting connections");
                return;
            }
        }
    }
}

/// Serves one client until it disconnects or sends `QUIT`.
///
/// Lines longer than `max_line_length` bytes (`\n` or `\r\n` excluded) get
/// an error reply and end the connection.
pub async fn handle_connection<S>(
    stream: S,
    state: AppState,
    max_line_length: usize,
) -> anyhow::Result<()>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let mut stream = BufReader::new(stream);
    let mut line = String::new();
    let limit = u64::try_from(max_line_length)
        .unwrap_or(u64::MAX)
        .saturating_add(2);

    loop {
        line.clear();
        let read = (&mut stream)
            .take(limit)
            .read_line(&mut line)
            .await
            .context("failed to read command line")?;

        if read == 0 {
            return Ok(());
        }

        if content_length(&line) > max_line_length {
            warn!(limit = max_line_length, "command line too long");
            let response = Response::error(ProtocolError::LineTooLong(max_line_length));
            write_response(&mut stream, &response).await?;
            close_after_reject(&mut stream).await?;
            return Ok(());
        }

        let response = handle_line(&state, &line).await;
        write_response(&mut stream, &response).await?;

        if response == Response::Bye {
            return Ok(());
        }
    }
}

/// Length of a line without its terminator.
fn content_length(line: &str) -> usize {
    line.strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .unwrap_or(line)
        .len()
}

/// Ends the conversation after a rejected line.
///
/// The rest of the rejected line is still queued; it is discarded until the
/// client hangs up so closing the socket does not reset the connection
/// before the error reply is read.
async fn close_after_reject<S>(stream: &mut S) -> anyhow::Result<()>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    stream
        .shutdown()
        .await
        .context("failed to shut down write side")?;
    if timeout(DRAIN_TIMEOUT, io::copy(stream, &mut io::sink()))
        .await
        .is_err()
    {
        debug!("client kept the connection open after rejection");
    }
    Ok(())
}

async fn write_response<W>(writer: &mut W, response: &Response) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer
        .write_all(response.to_line().as_bytes())
        .await
        .context("failed to write response")?;
    writer.flush().await.context("failed to flush response")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::io::Builder;

    const MAX_LINE: usize = 256;

    #[tokio::test]
    async fn test_set_then_get() {
        let stream = Builder::new()
            .read(b"SET greeting hello there\n")
            .write(b"OK\n")
            .read(b"GET greeting\n")
            .write(b"VALUE hello there\n")
            .build();

        handle_connection(stream, AppState::default(), MAX_LINE)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_crlf_terminated_lines() {
        let stream = Builder::new()
            .read(b"SET a 1\r\n")
            .write(b"OK\n")
            .read(b"GET a\r\n")
            .write(b"VALUE 1\n")
            .build();

        handle_connection(stream, AppState::default(), MAX_LINE)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_errors_keep_connection_open() {
        let stream = Builder::new()
            .read(b"BOGUS\n")
            .write(b"ERR unknown command 'BOGUS'\n")
            .read(b"GET missing\n")
            .write(b"NOT_FOUND\n")
            .build();

        handle_connection(stream, AppState::default(), MAX_LINE)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_quit_ends_connection() {
        let stream = Builder::new().read(b"QUIT\n").write(b"BYE\n").build();

        handle_connection(stream, AppState::default(), MAX_LINE)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_line_too_long_closes_connection() {
        let stream = Builder::new()
            .read(b"SET key 0123456789\n")
            .write(b"ERR line too long (limit 8 bytes)\n")
            .build();
        let state = AppState::default();

        handle_connection(stream, state.clone(), 8).await.unwrap();

        assert!(state.cache.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_line_at_limit_is_accepted() {
        let stream = Builder::new().read(b"SET k 12\n").write(b"OK\n").build();

        handle_connection(stream, AppState::default(), 8).await.unwrap();
    }

    #[tokio::test]
    async fn test_crlf_line_at_limit_is_accepted() {
        let stream = Builder::new().read(b"SET k 12\r\n").write(b"OK\n").build();

        handle_connection(stream, AppState::default(), 8).await.unwrap();
    }

    #[tokio::test]
    async fn test_one_byte_over_limit_is_rejected() {
        let stream = Builder::new()
            .read(b"SET k 123\n")
            .write(b"ERR line too long (limit 8 bytes)\n")
            .build();

        handle_connection(stream, AppState::default(), 8).await.unwrap();
    }

    #[tokio::test]
    async fn test_rejected_line_is_drained() {
        let stream = Builder::new()
            .read(b"SET key 0123456789\n")
            .write(b"ERR line too long (limit 8 bytes)\n")
            .read(b"SET other 1\n")
            .build();
        let state = AppState::default();

        handle_connection(stream, state.clone(), 8).await.unwrap();

        assert!(state.cache.read().await.is_empty());
    }

    #[test]
    fn test_content_length_excludes_terminator() {
        assert_eq!(content_length("SET k 12\r\n"), 8);
        assert_eq!(content_length("SET k 12\n"), 8);
        assert_eq!(content_length("SET k 12"), 8);
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_an_error() {
        let stream = Builder::new().read(b"\xff\xfe\n").build();

        let result = handle_connection(stream, AppState::default(), MAX_LINE).await;

        assert!(result.is_err());
    }
}
