//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Resolve relative paths against this directory
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Only log errors
//! - `--json`: Print results as JSON

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// bgit - Git repository queries for build scripts
#[derive(Parser, Debug)]
#[command(name = "bgit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Resolve relative paths as if bgit was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "debug")]
    pub quiet: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Arguments shared by the yes/no queries.
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Repository directory
    pub path: PathBuf,

    /// Print nothing; exit 0 for yes and 2 for no
    #[arg(long)]
    pub check: bool,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check if a directory is a valid Git repository
    #[command(
        name = "is-valid",
        long_about = "Check if a directory is a valid Git repository.\n\n\
            The path must be the repository itself: a work tree root, a .git \
            directory, or a bare repository. Subdirectories of a work tree are \
            not repositories. A directory that exists but is not a repository \
            prints 'false'; a path that doesn't exist is an error.",
        after_help = "\
EXAMPLES:
    bgit is-valid .
    if bgit is-valid --check vendor/lib; then echo repo; fi"
    )]
    IsValid {
        #[command(flatten)]
        args: CheckArgs,
    },

    /// Check if a repository has uncommitted changes
    #[command(
        name = "is-dirty",
        long_about = "Check if a repository has uncommitted changes.\n\n\
            Staged changes, unstaged changes to tracked files, conflicts and \
            (unless --tracked-only or the status.include_untracked config key \
            says otherwise) untracked files all count. Ignored files never do.",
        after_help = "\
EXAMPLES:
    # Refuse to release from a dirty tree
    bgit is-dirty --check . && { echo 'commit first'; exit 1; }

    # Ignore untracked build outputs
    bgit is-dirty --tracked-only ."
    )]
    IsDirty {
        #[command(flatten)]
        args: CheckArgs,

        /// Only consider tracked files
        #[arg(long)]
        tracked_only: bool,
    },

    /// Check if a repository has untracked files
    #[command(name = "has-untracked")]
    HasUntracked {
        #[command(flatten)]
        args: CheckArgs,
    },

    /// Check if a repository has staged changes
    #[command(name = "has-staged")]
    HasStaged {
        #[command(flatten)]
        args: CheckArgs,
    },

    /// Show a working tree status summary
    #[command(name = "status")]
    Status {
        /// Repository directory
        path: PathBuf,

        /// Only consider tracked files
        #[arg(long)]
        tracked_only: bool,
    },

    /// Show the branch HEAD points at
    #[command(name = "branch")]
    Branch {
        /// Repository directory
        path: PathBuf,
    },

    /// Show the commit HEAD points at
    #[command(name = "tip")]
    Tip {
        /// Repository directory
        path: PathBuf,
    },

    /// Print the work tree root of the repository containing a path
    #[command(name = "root")]
    Root {
        /// Any directory inside the repository
        path: PathBuf,
    },

    /// Show configuration
    #[command(name = "config")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
EXAMPLES:
    bgit completion bash >> ~/.bashrc
    bgit completion zsh >> ~/.zshrc
    bgit completion fish > ~/.config/fish/completions/bgit.fish"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    #[command(alias = "list")]
    Show,
    /// Print the path of the config file in use
    Path,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_is_dirty_flags() {
        let cli = Cli::try_parse_from(["bgit", "is-dirty", "--tracked-only", "--check", "repo"])
            .unwrap();
        match cli.command {
            Command::IsDirty { args, tracked_only } => {
                assert!(tracked_only);
                assert!(args.check);
                assert_eq!(args.path, PathBuf::from("repo"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["bgit", "branch", ".", "--json", "--cwd", "/tmp"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.cwd, Some(PathBuf::from("/tmp")));
    }

    #[test]
    fn path_is_required() {
        assert!(Cli::try_parse_from(["bgit", "is-valid"]).is_err());
    }

    #[test]
    fn config_show_parses_with_list_alias() {
        for action in ["show", "list"] {
            let cli = Cli::try_parse_from(["bgit", "config", action]).unwrap();
            assert!(matches!(
                cli.command,
                Command::Config {
                    action: ConfigAction::Show
                }
            ));
        }
    }

    #[test]
    fn quiet_conflicts_with_debug() {
        assert!(Cli::try_parse_from(["bgit", "--quiet", "--debug", "tip", "."]).is_err());
    }
}
