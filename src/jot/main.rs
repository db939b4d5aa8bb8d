use clap::Parser;
use colored::*;
use jot::api::{CmdMessage, JotApi, MessageLevel};
use jot::editor::edit_content;
use jot::error::Result;
use jot::model::{Note, NoteEntry};
use jot::store::fs::FileStore;
use std::env;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let store = FileStore::open(notes_dir(&cli))?;
    let mut api = JotApi::new(store);

    match cli.command {
        Some(Commands::New { content }) => handle_new(&mut api, content),
        Some(Commands::List) | None => handle_list(&api),
        Some(Commands::View { filenames }) => handle_view(&api, filenames),
        Some(Commands::Edit { filename, content }) => handle_edit(&mut api, filename, content),
        Some(Commands::Delete { filenames }) => handle_delete(&mut api, filenames),
    }
}

fn notes_dir(cli: &Cli) -> PathBuf {
    if let Some(dir) = &cli.dir {
        return dir.clone();
    }
    if let Ok(dir) = env::var("JOT_DIR") {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    PathBuf::from("notes")
}

fn handle_new(api: &mut JotApi<FileStore>, content: Option<String>) -> Result<()> {
    let content = match content {
        Some(text) => text,
        None => edit_content("")?,
    };
    let result = api.create_note(content)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(api: &JotApi<FileStore>) -> Result<()> {
    let result = api.list_notes()?;
    print_entries(&result.listed_entries);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(api: &JotApi<FileStore>, filenames: Vec<String>) -> Result<()> {
    let result = api.view_notes(&filenames)?;
    print_full_notes(&result.affected_notes);
    Ok(())
}

fn handle_edit(
    api: &mut JotApi<FileStore>,
    filename: String,
    content: Option<String>,
) -> Result<()> {
    let content = match content {
        Some(text) => text,
        None => {
            let current = api.read_note(&filename)?;
            edit_content(&current)?
        }
    };
    let result = api.update_note(&filename, content)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(api: &mut JotApi<FileStore>, filenames: Vec<String>) -> Result<()> {
    let result = api.delete_notes(&filenames)?;
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_entries(entries: &[NoteEntry]) {
    if entries.is_empty() {
        println!("No notes found.");
        return;
    }

    let name_width = entries
        .iter()
        .map(|entry| entry.filename.width())
        .max()
        .unwrap_or(0);

    for entry in entries {
        let padding = name_width.saturating_sub(entry.filename.width());
        println!(
            "  {}{}  {}",
            entry.filename.cyan(),
            " ".repeat(padding),
            entry.summary
        );
    }
}

fn print_full_notes(notes: &[Note]) {
    for (i, note) in notes.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!("{}", note.filename.bold());
        println!("--------------------------------");
        println!("{}", note.content);
    }
}
