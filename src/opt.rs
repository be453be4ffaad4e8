use clap::{ArgAction, Args, Parser};

#[derive(Parser, Debug)]
#[clap(version, about)]
pub struct Options {
    /// Logging verbosity (-v debug, -vv trace)
    #[arg(short = 'v', action = ArgAction::Count, global = true)]
    pub log_verbosity: u8,

    #[command(flatten)]
    pub settings: Settings,
}

/// Raw, untrimmed settings; see `Config::resolve` for how they are interpreted
#[derive(Args, Debug, Default)]
pub struct Settings {
    #[arg(
        long,
        env = "REDIRECT_LISTEN",
        default_value = "",
        hide_default_value = true,
        help = "Address to listen on (--help for more)",
        long_help = r"Address to listen on:
    - defaults to :80
    - a bare :port listens on all IPv4 interfaces
Examples:
    - :8080
    - 127.0.0.1:3000
    - [::1]:8080"
    )]
    pub listen: String,

    #[arg(
        long,
        env = "REDIRECT_TARGET",
        default_value = "",
        hide_default_value = true,
        help = "URL to redirect to (--help for more)",
        long_help = r"URL to redirect to:
    - required
    - with a trailing slash, the request path is appended to the target
    - without one, every request goes to the target unchanged
Examples:
    - https://example.com
    - https://example.com/docs/"
    )]
    pub target: String,

    /// Path prefix to strip from requests before appending them to the target
    #[arg(long, env = "REDIRECT_PREFIX", default_value = "", hide_default_value = true)]
    pub prefix: String,

    /// Use a permanent redirect (301) instead of a temporary one (302)
    #[arg(
        long,
        env = "REDIRECT_PERMANENT",
        default_value = "",
        hide_default_value = true,
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub permanent: String,

    /// Log every redirected request
    #[arg(
        long,
        env = "REDIRECT_VERBOSE",
        default_value = "",
        hide_default_value = true,
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub verbose: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Options::command().debug_assert();
    }

    #[test]
    fn flags_without_values_mean_true() {
        let options = Options::try_parse_from([
            "redirected",
            "--target",
            "https://b.example.com/",
            "--permanent",
            "-vv",
        ])
        .unwrap();
        assert_eq!(options.log_verbosity, 2);
        assert_eq!(options.settings.target, "https://b.example.com/");
        assert_eq!(options.settings.permanent, "true");
    }

    #[test]
    fn flags_take_explicit_values() {
        let options =
            Options::try_parse_from(["redirected", "--verbose=false", "--prefix", " /bbb "])
                .unwrap();
        assert_eq!(options.settings.verbose, "false");
        assert_eq!(options.settings.prefix, " /bbb ");
    }
}
