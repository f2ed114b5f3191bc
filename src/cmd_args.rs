use std::ffi::OsString;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Profile name
    /// Optional. Profile section to read from the profile file. Default is 'default'.
    /// If the profile is not configured, built-in defaults are used.
    #[clap(short = 'p', long, default_value = "default", help = "profile name")]
    profile: String,

    /// Base URL of the posts API
    #[clap(long, help = "base URL of the posts API")]
    base_url: Option<String>,

    /// Number of posts shown in the recent posts view
    #[clap(long, help = "number of recent posts to load")]
    recent_limit: Option<usize>,

    /// Smallest post id accepted by search
    #[clap(long, help = "smallest post id accepted by search")]
    min_id: Option<u64>,

    /// Largest post id accepted by search
    #[clap(long, help = "largest post id accepted by search")]
    max_id: Option<u64>,

    /// Request timeout in seconds. No timeout when omitted.
    #[clap(long, help = "request timeout in seconds")]
    timeout_secs: Option<u64>,

    /// Verbose mode
    /// Optional. Render post bodies and author emails in the recent posts list.
    #[clap(
        short = 'v',
        long,
        help = "Print verbose output",
        default_value = "false"
    )]
    verbose: bool,
}

#[derive(Debug, Clone, Default)]
pub struct CommandLineArgs {
    profile: String,
    base_url: Option<String>,
    recent_limit: Option<usize>,
    min_id: Option<u64>,
    max_id: Option<u64>,
    timeout_secs: Option<u64>,
    verbose: bool,
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            profile: args.profile,
            base_url: args.base_url,
            recent_limit: args.recent_limit,
            min_id: args.min_id,
            max_id: args.max_id,
            timeout_secs: args.timeout_secs,
            verbose: args.verbose,
        }
    }
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    pub fn profile(&self) -> &String {
        &self.profile
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn recent_limit(&self) -> Option<usize> {
        self.recent_limit
    }

    pub fn min_id(&self) -> Option<u64> {
        self.min_id
    }

    pub fn max_id(&self) -> Option<u64> {
        self.max_id
    }

    pub fn timeout_secs(&self) -> Option<u64> {
        self.timeout_secs
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
