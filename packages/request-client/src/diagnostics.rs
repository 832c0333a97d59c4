use tracing::error;

use crate::error::ClientError;

/// Receives one entry per failed request, before the error is returned.
pub trait DiagnosticSink: Send + Sync {
    fn request_failed(&self, url: &str, error: &ClientError);
}

/// Default sink: one `error` event on the `request_client` target.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn request_failed(&self, url: &str, error: &ClientError) {
        error!(
            target: "request_client",
            url = url,
            kind = error.kind(),
            status = error.status(),
            error = %error,
            "Error fetching data"
        );
    }
}

/// Discards diagnostics.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn request_failed(&self, _url: &str, _error: &ClientError) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

    impl CapturedOutput {
        fn contents(&self) -> String {
            match self.0.lock() {
                Ok(guard) => String::from_utf8_lossy(&guard).into_owned(),
                Err(poisoned) => String::from_utf8_lossy(&poisoned.into_inner()).into_owned(),
            }
        }
    }

    impl io::Write for CapturedOutput {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if let Ok(mut guard) = self.0.lock() {
                guard.extend_from_slice(buf);
            }
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture<F: FnOnce()>(f: F) -> String {
        let output = CapturedOutput::default();
        let writer = output.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        output.contents()
    }

    #[test]
    fn tracing_sink_emits_one_error_event() {
        let logged = capture(|| {
            TracingSink.request_failed(
                "https://api.example.com/users?id=42",
                &ClientError::HttpStatus(404),
            );
        });

        let lines: Vec<&str> = logged.lines().collect();
        assert_eq!(lines.len(), 1, "expected one event, got {logged:?}");
        assert!(lines[0].contains("ERROR"));
        assert!(lines[0].contains("Error fetching data"));
        assert!(lines[0].contains("HTTP error! status: 404"));
        assert!(lines[0].contains("https://api.example.com/users?id=42"));
        assert!(lines[0].contains("http_status"));
    }

    #[test]
    fn noop_sink_emits_nothing() {
        let logged = capture(|| {
            NoopSink.request_failed(
                "https://api.example.com/users?",
                &ClientError::Transport("connection refused".into()),
            );
        });
        assert!(logged.is_empty(), "expected no output, got {logged:?}");
    }
}
