//! CLI argument parsing via clap.

use clap::Parser;

/// A modal, vim-like shell in the terminal. Type `:q` to exit.
#[derive(Debug, Parser)]
#[command(name = "vimshell", version)]
pub struct Args {
    /// Path to config file (default: ./vimshell.toml or ~/.config/vimshell/vimshell.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Write logs to this file.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<String>,

    /// Override the prefix shown before the command buffer.
    #[arg(long = "prefix")]
    pub prefix: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;

    #[test]
    fn no_flags_leaves_overrides_unset() {
        let args = Args::parse_from(["vimshell"]);
        assert!(args.config.is_none());
        assert!(args.log_file.is_none());
        assert!(args.prefix.is_none());
    }

    #[test]
    fn all_flags_parse() {
        let args = Args::parse_from([
            "vimshell",
            "-c",
            "shell.toml",
            "--log-file",
            "/tmp/vimshell.log",
            "--prefix",
            "> ",
        ]);
        assert_eq!(args.config.as_deref(), Some("shell.toml"));
        assert_eq!(args.log_file.as_deref(), Some("/tmp/vimshell.log"));
        assert_eq!(args.prefix.as_deref(), Some("> "));
    }

    #[test]
    fn empty_prefix_is_accepted() {
        let args = Args::parse_from(["vimshell", "--prefix", ""]);
        assert_eq!(args.prefix.as_deref(), Some(""));
    }
}
