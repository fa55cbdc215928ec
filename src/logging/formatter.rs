use std::fmt;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::{format::Writer, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Timestamp layout used in diagnostic lines
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Wraps each field of a diagnostic line in brackets
/// Format: [TIMESTAMP] [LEVEL] [SPAN] [TARGET: FILE:LINE]: MESSAGE
#[derive(Debug, Clone, Copy)]
pub struct BracketedFormatter {
    timestamps: bool,
}

impl BracketedFormatter {
    pub fn new() -> Self {
        Self { timestamps: true }
    }

    /// Leave the timestamp out, for output that has to be compared verbatim
    pub fn without_timestamps() -> Self {
        Self { timestamps: false }
    }
}

impl Default for BracketedFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, N> FormatEvent<S, N> for BracketedFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();

        if self.timestamps {
            write!(writer, "[{}] ", chrono::Local::now().format(TIMESTAMP_FORMAT))?;
        }

        write!(writer, "[{:5}] ", metadata.level())?;

        // Innermost span, or the last path segment of the target outside any span
        let scope_name = ctx
            .event_scope()
            .and_then(|scope| scope.from_root().last().map(|span| span.name()))
            .unwrap_or_else(|| metadata.target().rsplit("::").next().unwrap_or("unknown"));
        write!(writer, "[{}] ", scope_name)?;

        match (metadata.file(), metadata.line()) {
            (Some(file), Some(line)) => write!(writer, "[{}: {}:{}]: ", metadata.target(), file, line)?,
            _ => write!(writer, "[{}]: ", metadata.target())?,
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(body: impl FnOnce()) -> String {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .event_format(BracketedFormatter::without_timestamps())
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, body);

        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_event_outside_span() {
        let output = capture(|| tracing::info!("seed ready"));

        assert!(output.starts_with("[INFO"));
        assert!(output.contains("] [tests] [experiment_kit::logging::formatter::tests: "));
        assert!(output.ends_with("]: seed ready\n"));
    }

    #[test]
    fn test_event_inside_span_uses_span_name() {
        let output = capture(|| {
            let span = tracing::info_span!("rotate_checkpoint");
            let _guard = span.enter();
            tracing::warn!("backup missing");
        });

        assert!(output.starts_with("[WARN"));
        assert!(output.contains("] [rotate_checkpoint] "));
        assert!(output.ends_with("backup missing\n"));
    }
}
