/// Output sinks the networking logger writes its lines to
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Destination of rendered log lines.
///
/// Errors are reported back to the plugin, which logs and drops them.
#[cfg_attr(test, mockall::automock)]
pub trait LogSink: Send + Sync {
    /// Write one line. The sink adds the line terminator.
    fn write_line(&self, line: &str) -> Result<(), String>;
}

impl<T: LogSink + ?Sized> LogSink for Arc<T> {
    fn write_line(&self, line: &str) -> Result<(), String> {
        (**self).write_line(line)
    }
}

impl<T: LogSink + ?Sized> LogSink for Box<T> {
    fn write_line(&self, line: &str) -> Result<(), String> {
        (**self).write_line(line)
    }
}

/// Prints lines to standard output.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn write_line(&self, line: &str) -> Result<(), String> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{line}").map_err(|e| format!("Failed to write to stdout: {e}"))
    }
}

/// Writes lines to any [`Write`] implementation, one writer at a time.
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the sink and returns the underlying writer.
    pub fn into_inner(self) -> Result<W, String> {
        self.writer
            .into_inner()
            .map_err(|e| format!("Failed to unlock writer: {e}"))
    }
}

impl WriterSink<File> {
    /// Opens `path` for appending, creating the file if needed.
    pub fn append_to(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(file))
    }
}

impl<W: Write + Send> LogSink for WriterSink<W> {
    fn write_line(&self, line: &str) -> Result<(), String> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| format!("Failed to lock writer: {e}"))?;

        writeln!(writer, "{line}").map_err(|e| format!("Failed to write log line: {e}"))?;

        writer
            .flush()
            .map_err(|e| format!("Failed to flush writer: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writer_sink_appends_newline() {
        let sink = WriterSink::new(Vec::new());
        assert!(sink.write_line("first").is_ok());
        assert!(sink.write_line("second").is_ok());

        let written = sink.into_inner().map(String::from_utf8);
        assert!(matches!(written, Ok(Ok(ref text)) if text == "first\nsecond\n"));
    }

    #[test]
    fn test_writer_sink_reports_write_failure() {
        let sink = WriterSink::new(BrokenWriter);
        let result = sink.write_line("lost");
        assert!(result.is_err());
        assert!(result
            .err()
            .is_some_and(|e| e.starts_with("Failed to write log line")));
    }

    #[test]
    fn test_writer_sink_appends_to_file() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = tempfile::tempdir()?;
        let path = temp_dir.path().join("networking.log");
        std::fs::write(&path, "existing\n")?;

        let sink = WriterSink::append_to(&path)?;
        sink.write_line("appended")?;
        drop(sink);

        let mut contents = String::new();
        File::open(&path)?.read_to_string(&mut contents)?;
        assert_eq!(contents, "existing\nappended\n");
        Ok(())
    }

    #[test]
    fn test_shared_sink_forwards() {
        let mut mock = MockLogSink::new();
        mock.expect_write_line()
            .withf(|line| line == "shared")
            .times(2)
            .returning(|_| Ok(()));

        let sink = Arc::new(mock);
        let clone = Arc::clone(&sink);
        assert!(sink.write_line("shared").is_ok());
        assert!(clone.write_line("shared").is_ok());
    }
}
