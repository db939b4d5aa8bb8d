use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jot")]
#[command(version, about = "Flat-file note taking from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Notes directory (defaults to $JOT_DIR, then ./notes)
    #[arg(short, long, global = true)]
    pub dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new note
    #[command(alias = "n")]
    New {
        /// Note text (opens the editor if not provided)
        #[arg(required = false)]
        content: Option<String>,
    },

    /// List saved notes (the default when no command is given)
    #[command(alias = "ls")]
    List,

    /// Print one or more notes in full
    #[command(alias = "v")]
    View {
        /// Filenames as shown by `jot list`
        #[arg(required = true, num_args = 1..)]
        filenames: Vec<String>,
    },

    /// Rewrite a note's content
    #[command(alias = "e")]
    Edit {
        /// Filename as shown by `jot list`
        filename: String,

        /// Replacement text (opens the editor on the current text when omitted)
        #[arg(required = false)]
        content: Option<String>,
    },

    /// Delete one or more notes
    #[command(alias = "rm")]
    Delete {
        /// Filenames as shown by `jot list`
        #[arg(required = true, num_args = 1..)]
        filenames: Vec<String>,
    },
}
