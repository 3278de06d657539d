use std::ffi::OsString;

use clap::{Arg, ArgAction, Command, CommandFactory, FromArgMatches, Parser};
use tracing::debug;

use crate::defaults::Defaults;
use crate::error::UsageError;

/// Program name shown in usage text. Argument lists handed to the parser
/// never include it.
pub const PROGRAM_NAME: &str = "bond-issuance";

/// Flag table. Absent options stay `None` so that defaults can be supplied
/// at parse time instead of being compiled in.
#[derive(Debug, Parser)]
#[command(name = PROGRAM_NAME, about = "Bond issuance workflow", disable_help_flag = true)]
struct CliArgs {
    /// Sandbox host
    #[arg(short = 's', value_name = "SANDBOX_HOST")]
    sandbox_host: Option<String>,

    /// Sandbox port
    #[arg(short = 'p', value_name = "SANDBOX_PORT", allow_negative_numbers = true)]
    sandbox_port: Option<i32>,

    /// Parties to run the application for.
    #[arg(short = 'u', value_name = "PARTIES", num_args = 0.., action = ArgAction::Append)]
    parties: Option<Vec<String>>,
}

/// Sandbox connection settings and the parties to act for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedOptions {
    sandbox_host: String,
    sandbox_port: i32,
    parties: Vec<String>,
}

impl ParsedOptions {
    /// Parse `args` (without the program name), filling absent options from
    /// `defaults`.
    pub fn try_parse_from<I, T>(args: I, defaults: &Defaults) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut cmd = command(defaults);
        let argv = std::iter::once(OsString::from(PROGRAM_NAME)).chain(args.into_iter().map(Into::into));

        let matches = match cmd.try_get_matches_from_mut(argv) {
            Ok(matches) => matches,
            Err(err) => return Err(UsageError::from_clap(err, cmd.render_help().to_string())),
        };
        let cli = match CliArgs::from_arg_matches(&matches) {
            Ok(cli) => cli,
            Err(err) => return Err(UsageError::from_clap(err, cmd.render_help().to_string())),
        };

        let defaulted_host = cli.sandbox_host.is_none();
        let defaulted_port = cli.sandbox_port.is_none();
        let defaulted_parties = cli.parties.is_none();
        let options = Self {
            sandbox_host: cli.sandbox_host.unwrap_or_else(|| defaults.sandbox_host.clone()),
            sandbox_port: cli.sandbox_port.unwrap_or(defaults.sandbox_port),
            parties: cli.parties.unwrap_or_else(|| defaults.parties.clone()),
        };
        debug!(
            sandbox_host = %options.sandbox_host,
            sandbox_port = options.sandbox_port,
            parties = ?options.parties,
            defaulted_host,
            defaulted_port,
            defaulted_parties,
            "parsed command line options"
        );
        Ok(options)
    }

    /// Like [`ParsedOptions::try_parse_from`], but reports any error and
    /// terminates the process with its exit code.
    pub fn parse_from<I, T>(args: I, defaults: &Defaults) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(args, defaults).unwrap_or_else(|err| {
            err.report();
            std::process::exit(err.exit_code())
        })
    }

    pub fn sandbox_host(&self) -> &str {
        &self.sandbox_host
    }

    pub fn sandbox_port(&self) -> i32 {
        self.sandbox_port
    }

    pub fn parties(&self) -> &[String] {
        &self.parties
    }

    /// `host:port` of the sandbox ledger.
    pub fn sandbox_endpoint(&self) -> String {
        format!("{}:{}", self.sandbox_host, self.sandbox_port)
    }
}

/// Parse process arguments against the built-in defaults, exiting on error.
pub fn parse_args<I, T>(args: I) -> ParsedOptions
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    ParsedOptions::parse_from(args, &Defaults::default())
}

/// Generated help text, with the effective default of every option.
pub fn usage(defaults: &Defaults) -> String {
    command(defaults).render_help().to_string()
}

fn command(defaults: &Defaults) -> Command {
    CliArgs::command()
        .mut_arg("sandbox_host", |arg| with_default(arg, &defaults.sandbox_host))
        .mut_arg("sandbox_port", |arg| with_default(arg, &defaults.sandbox_port.to_string()))
        .mut_arg("parties", |arg| with_default(arg, &defaults.parties.join(", ")))
}

fn with_default(arg: Arg, value: &str) -> Arg {
    let help = arg.get_help().map(ToString::to_string).unwrap_or_default();
    arg.help(format!("{help} [default: {value}]"))
}
