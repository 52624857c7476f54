use clap::{Parser, Subcommand};
use medcvapp::model::RecordKind;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format for releases: "v0.4.2"
/// Format for dev builds: "v0.4.2\ndev: abc1234 2026-01-15 14:30"
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" {
            format!("v{}", VERSION)
        } else {
            format!("v{}\ndev: {} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "medcv",
    bin_name = "medcv",
    version = get_version(),
    disable_help_subcommand = true,
    after_help = "Inside a session, type `help` for the list of session lines."
)]
#[command(about = "Resume builder for medical professionals", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Starting template (professional or executive)
    #[arg(long, global = true, help_heading = "Options")]
    pub template: Option<String>,

    /// Directory exported files are written to
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub out: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive session on stdin (the default)
    #[command(display_order = 1)]
    Session,

    /// Run a file of session lines, stopping at the first failure
    #[command(display_order = 2)]
    Run { script: PathBuf },

    /// Print the values offered for enumerated fields
    #[command(display_order = 3)]
    Options,
}

/// One line of a session, parsed with the same machinery as the process arguments.
#[derive(Parser, Debug)]
#[command(
    name = "medcv",
    no_binary_name = true,
    disable_help_subcommand = true,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum SessionCommand {
    /// Set a personal-details field
    #[command(alias = "p")]
    Personal {
        field: String,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },

    /// Edit the panel draft for a kind, or show it when no field is given
    #[command(alias = "d")]
    Draft {
        #[arg(value_parser = parse_kind)]
        kind: RecordKind,
        field: Option<String>,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },

    /// Commit the draft for a kind
    Submit {
        #[arg(value_parser = parse_kind)]
        kind: RecordKind,
    },

    /// Change one field of a committed record
    Edit {
        #[arg(value_parser = parse_kind)]
        kind: RecordKind,
        id: String,
        field: String,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },

    /// Delete a committed record
    #[command(alias = "rm")]
    Remove {
        #[arg(value_parser = parse_kind)]
        kind: RecordKind,
        id: String,
    },

    /// List committed records
    #[command(alias = "ls")]
    List {
        #[arg(value_parser = parse_kind)]
        kind: Option<RecordKind>,
        #[arg(long)]
        json: bool,
    },

    /// Hobbies panel
    Hobby {
        #[command(subcommand)]
        action: HobbyAction,
    },

    /// Replace the free-text publication list, one argument per line
    Pubtext {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        lines: Vec<String>,
    },

    /// Pick the layout
    Template { name: String },

    Preview,

    /// Write the resume through the exporter
    Export,

    Options,

    Help,

    #[command(alias = "exit")]
    Quit,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum HobbyAction {
    Add {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    #[command(alias = "rm")]
    Remove {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
}

fn parse_kind(value: &str) -> Result<RecordKind, String> {
    value.parse().map_err(|e: medcvapp::error::ResumeError| e.to_string())
}

/// Joins the words of a multi-word value back together.
pub fn join_words(words: &[String]) -> String {
    words.join(" ")
}
