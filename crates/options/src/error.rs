use std::io::Write;

use clap::error::ErrorKind;

/// Header written to stderr ahead of every usage error.
pub const INVALID_OPTIONS: &str = "Invalid command line options";

/// The only way parsing fails: malformed, unrecognised or mistyped input.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct UsageError {
    kind: ErrorKind,
    message: String,
    usage: String,
}

impl UsageError {
    pub(crate) fn from_clap(err: clap::Error, usage: String) -> Self {
        let kind = err.kind();
        let rendered = err.render().to_string();
        let first = rendered.lines().next().unwrap_or_default();
        let message = first.strip_prefix("error: ").unwrap_or(first).to_string();
        Self {
            kind,
            message,
            usage,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// One-line description of what was wrong with the arguments.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Generated usage text listing every option and its default.
    pub fn usage(&self) -> &str {
        &self.usage
    }

    /// Process exit status for every usage error.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Write the diagnostic to `out`: the header, the message and the usage.
    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{INVALID_OPTIONS}")?;
        writeln!(out, "{}", self.message)?;
        write!(out, "{}", self.usage)?;
        out.flush()
    }

    /// Report to stderr.
    pub fn report(&self) {
        let _ = self.write_to(&mut std::io::stderr().lock());
    }
}
