//! Command-line options of the bond-issuance workflow: sandbox host, sandbox
//! port and the parties to act for.
pub mod defaults;
pub mod error;
pub mod options;
pub mod parties;

pub use defaults::{DEFAULT_SANDBOX_HOST, DEFAULT_SANDBOX_PORT, Defaults};
pub use error::UsageError;
pub use options::{PROGRAM_NAME, ParsedOptions, parse_args, usage};
pub use parties::{ALL_PARTIES, Party};
