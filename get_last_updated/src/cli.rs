use crate::error::{Error, Result};
use clap::Parser;
use std::ffi::OsString;

/// Printed verbatim, followed by a newline, when TAG_URL is missing.
pub const USAGE: &str = concat!(
    "Usage: \n",
    "    get-last-updated TAG_URL\n",
    "\n",
    "    TAG_URL -> URL for a container image which includes its last updated time (Required)\n",
    "\n",
    "    Example Usage:\n",
    "    $ get-last-updated https://hub.docker.com/v2/repositories/selenium/standalone-chrome/tags/latest/\n",
    "    ",
);

/// The tool takes no flags: the first argument is always the URL, whatever
/// it looks like, and everything after it is ignored.
#[derive(Parser, Debug)]
#[command(name = "get-last-updated")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    #[arg(value_name = "TAG_URL", allow_hyphen_values = true)]
    pub tag_url: String,

    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub rest: Vec<String>,
}

pub fn parse() -> Result<Args> {
    parse_from(std::env::args_os())
}

/// Parses the argument list. The only failure is a missing TAG_URL, reported
/// as [`Error::Usage`].
pub fn parse_from<I, T>(args: I) -> Result<Args>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Args::try_parse_from(args) {
        Ok(args) => {
            if !args.rest.is_empty() {
                log::debug!("ignoring {} extra argument(s)", args.rest.len());
            }
            Ok(args)
        }
        Err(e) => {
            log::debug!("argument parsing failed: {}", e);
            Err(Error::Usage)
        }
    }
}
