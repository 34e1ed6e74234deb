/*!
 * Configuration handling for rper
 */

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::error::{Result, RperError};
use crate::mode::ModeSpec;

/// How much of the walk is narrated, and where
///
/// Progress lines go to stdout and diagnostics to stderr, so suppressing
/// one does not suppress the other: `Quiet` keeps errors, only `Silent`
/// drops both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show changes on stdout and errors on stderr
    #[default]
    Normal,
    /// Suppress normal output, keep errors (-s)
    Quiet,
    /// Suppress all output, errors included (-S)
    Silent,
    /// Show everything, including symlink follows and untargeted entries (-v)
    Verbose,
}

impl OutputMode {
    /// Resolve the three verbosity flags into a single mode
    ///
    /// `-v` wins over both suppression flags, and `-s` wins over `-S`.
    pub fn resolve(quiet: bool, silent: bool, verbose: bool) -> Self {
        if verbose {
            OutputMode::Verbose
        } else if quiet {
            OutputMode::Quiet
        } else if silent {
            OutputMode::Silent
        } else {
            OutputMode::Normal
        }
    }

    /// True when per-entry progress lines are printed
    pub fn shows_progress(self) -> bool {
        matches!(self, OutputMode::Normal | OutputMode::Verbose)
    }

    /// True when diagnostics are printed to stderr
    pub fn shows_errors(self) -> bool {
        self != OutputMode::Silent
    }

    /// True when the final summary is printed
    pub fn shows_summary(self) -> bool {
        self != OutputMode::Silent
    }

    /// True under `-v`
    pub fn is_verbose(self) -> bool {
        self == OutputMode::Verbose
    }
}

/// What to do with a symlink discovered during the walk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymlinkMode {
    /// Leave the link alone and note it (default)
    #[default]
    Skip,
    /// Change the permissions of the link target (-L)
    Follow,
    /// Report the link as an error and leave it alone (-k)
    Error,
}

/// Command-line arguments for rper
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "rper",
    version = env!("CARGO_PKG_VERSION"),
    about = "Recursively change permissions of directories and/or files",
    long_about = "Walks a directory tree and rewrites POSIX permission bits to an octal \
                  target. A '*' in the mode keeps the matching permission group, so -p 6*4 \
                  sets user to 6 and other to 4 while leaving group untouched."
)]
pub struct Args {
    /// Directory whose contents are processed
    pub directory: Option<String>,

    /// Change permissions of regular files (default if -d is not given)
    #[clap(short = 'f', long = "files")]
    pub files: bool,

    /// Change permissions of directories (can be combined with -f)
    #[clap(short = 'd', long = "dirs")]
    pub dirs: bool,

    /// Also change the directory given as argument (only with -d)
    #[clap(short = 'i', long = "include-root")]
    pub include_root: bool,

    /// Do not recurse into subdirectories
    #[clap(short = 'n', long = "non-recursive")]
    pub non_recursive: bool,

    /// Suppress normal output, keep errors
    #[clap(short = 's', long = "quiet")]
    pub quiet: bool,

    /// Suppress all output, errors included
    #[clap(short = 'S', long = "silent")]
    pub silent: bool,

    /// Show everything, including symlink follows and untargeted entries
    #[clap(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Follow symlinks and change their targets
    #[clap(short = 'L', long = "follow-symlinks")]
    pub follow_symlinks: bool,

    /// Stop at symlinks and report them as errors
    #[clap(short = 'k', long = "error-on-symlink", conflicts_with = "follow_symlinks")]
    pub error_on_symlink: bool,

    /// Target permissions in octal; '*' keeps a group (e.g. 755, 0644, 6*4)
    #[clap(short = 'p', long = "mode", value_name = "MODE")]
    pub mode: Option<String>,

    /// Print information about rper
    #[clap(short = 'a', long = "about")]
    pub about: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum, value_name = "SHELL")]
    pub generate: Option<Shell>,
}

/// Validated walk configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory of the walk
    pub target_dir: PathBuf,
    /// Permission template applied to each targeted entry
    pub mode_spec: ModeSpec,
    /// Whether regular files are rewritten
    pub change_files: bool,
    /// Whether directories are rewritten
    pub change_dirs: bool,
    /// Whether subdirectories are descended into
    pub recursive: bool,
    /// Whether the root directory itself is rewritten (needs change_dirs)
    pub include_root: bool,
    /// Verbosity of progress and diagnostics
    pub output: OutputMode,
    /// Symlink handling policy
    pub symlinks: SymlinkMode,
}

impl Config {
    /// Create configuration from command-line arguments
    ///
    /// Fails on a missing directory argument, a missing `-p`, or a mode
    /// specification outside the accepted grammar; those are the only
    /// process-fatal errors. Whether the directory actually exists is
    /// discovered during the walk, not here.
    pub fn from_args(args: Args) -> Result<Self> {
        let directory = args.directory.ok_or_else(|| {
            RperError::Config(
                "missing directory argument (directory argument should be last)".into(),
            )
        })?;
        let mode = args
            .mode
            .ok_or_else(|| RperError::Config("no permissions given (use -p)".into()))?;
        let mode_spec: ModeSpec = mode.parse()?;

        let symlinks = if args.follow_symlinks {
            SymlinkMode::Follow
        } else if args.error_on_symlink {
            SymlinkMode::Error
        } else {
            SymlinkMode::Skip
        };

        Ok(Self {
            target_dir: PathBuf::from(directory),
            mode_spec,
            // Neither -f nor -d given defaults to files only
            change_files: args.files || !args.dirs,
            change_dirs: args.dirs,
            recursive: !args.non_recursive,
            include_root: args.include_root,
            output: OutputMode::resolve(args.quiet, args.silent, args.verbose),
            symlinks,
        })
    }
}
