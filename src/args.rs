use lexopt::{Arg, Parser, ValueExt};
use std::path::PathBuf;

pub(crate) const USAGE: &str = concat!(
    "Usage: powersnake [<options>]\n",
    "\n",
    "Play snake with obstacles and powerups in the terminal\n",
    "\n",
    "Options:\n",
    "  -c, --config <FILE>     Read configuration from the given file\n",
    "      --log-file <FILE>   Write logs to the given file\n",
    "      --seed <INT>        Seed the random number generator\n",
    "  -h, --help              Display this help message and exit\n",
    "  -V, --version           Show the program version and exit\n",
);

/// What the command line asked for
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Invocation {
    Run(RunArgs),
    Help,
    Version,
}

impl Invocation {
    pub(crate) fn from_parser(mut parser: Parser) -> Result<Invocation, lexopt::Error> {
        let mut args = RunArgs::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => args.log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Long("seed") => args.seed = Some(parser.value()?.parse()?),
                Arg::Short('h') | Arg::Long("help") => return Ok(Invocation::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Invocation::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Invocation::Run(args))
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct RunArgs {
    /// Configuration file to use instead of the default one
    pub(crate) config: Option<PathBuf>,

    /// Seed for the random number generator; when unset, the generator is
    /// seeded from the OS
    pub(crate) seed: Option<u64>,

    /// Log file overriding the one in the configuration
    pub(crate) log_file: Option<PathBuf>,
}
