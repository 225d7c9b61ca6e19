//! CLI commands implementation

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use workbench_runtime::InferenceAdapter;
use workbench_store::{EntryKind, FileEntry, FileStore};

/// Create the directory
pub fn create(store: &FileStore) -> Result<()> {
    let existed = store.exists();
    store.create()?;

    if existed {
        println!("Directory '{}' already exists", store.root_path().display());
    } else {
        println!("Directory '{}' created", store.root_path().display());
    }
    Ok(())
}

/// Write a text file
pub fn add_text(store: &FileStore, name: &str, content: &str) -> Result<()> {
    store.add_text_file(name, content)?;
    println!("File '{}' added to '{}'", name, store.root_path().display());
    Ok(())
}

/// Copy a file into the directory
pub fn add_file(store: &FileStore, source: &Path, name: Option<&str>) -> Result<()> {
    let name = match name {
        Some(name) => {
            store.add_binary_file(name, source)?;
            name.to_string()
        }
        None => store.add_file_from(source)?,
    };
    println!("File '{}' added to '{}'", name, store.root_path().display());
    Ok(())
}

/// JSON listing payload
#[derive(Debug, Serialize)]
struct Listing<'a> {
    root: String,
    exists: bool,
    entries: &'a [FileEntry],
}

/// List files
pub fn list(store: &FileStore, long: bool, json: bool) -> Result<()> {
    if json {
        let entries = store.list_detailed()?;
        let listing = Listing {
            root: store.root_path().display().to_string(),
            exists: store.exists(),
            entries: &entries,
        };
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    if !store.exists() {
        println!("Directory '{}' does not exist", store.root_path().display());
        return Ok(());
    }

    if long {
        let entries = store.list_detailed()?;
        if entries.is_empty() {
            println!("No files found in '{}'", store.root_path().display());
            return Ok(());
        }

        println!("{:<8} {:>10} {:<20} NAME", "KIND", "SIZE", "MODIFIED");
        for entry in entries {
            print_entry(&entry);
        }
    } else {
        let names = store.list_entries()?;
        if names.is_empty() {
            println!("No files found in '{}'", store.root_path().display());
            return Ok(());
        }

        println!("Files in '{}':", store.root_path().display());
        for name in names {
            println!(" - {}", name);
        }
    }

    Ok(())
}

fn print_entry(entry: &FileEntry) {
    let modified = entry
        .modified
        .map(|m| m.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string());
    println!(
        "{:<8} {:>10} {:<20} {}",
        entry.kind.to_string(),
        entry.size,
        modified,
        entry.name
    );
}

/// Print a file
pub fn cat(store: &FileStore, name: &str) -> Result<()> {
    let bytes = store.read_binary_file(name)?;

    match String::from_utf8(bytes) {
        Ok(text) if EntryKind::from_name(name) != EntryKind::Image => print!("{}", text),
        Ok(text) => println!("{} file, {} bytes", EntryKind::Image, text.len()),
        Err(e) => println!(
            "{} file, {} bytes",
            EntryKind::from_name(name),
            e.as_bytes().len()
        ),
    }
    Ok(())
}

/// Delete a file
pub fn remove(store: &FileStore, name: &str) -> Result<()> {
    store.remove_entry(name)?;
    println!("File '{}' removed from '{}'", name, store.root_path().display());
    Ok(())
}

/// Run the model on `text`
pub fn run(adapter: &InferenceAdapter, text: &str) -> Result<()> {
    let text = text.trim();
    if text.is_empty() {
        anyhow::bail!("input text is empty");
    }

    let measured = adapter.run_model_measured(text);
    tracing::debug!(
        adapter = adapter.name(),
        duration_ms = measured.elapsed_ms(),
        "Model run finished"
    );

    let output = measured.into_result()?;
    println!("{}", output);
    Ok(())
}

/// Create a directory, add a file, and run the model
pub fn demo(store: &FileStore, adapter: &InferenceAdapter) -> Result<()> {
    create(store)?;
    list(store, false, false)?;
    add_text(store, "example.txt", "Hello World!")?;
    list(store, false, false)?;

    println!("{}", adapter.info());
    let measured = adapter.run_model_measured("1, 2, 3, 4");
    let elapsed = measured.elapsed;
    let output = measured.into_result()?;
    println!("Model result: {}", output);
    println!("run_model took {:.4} seconds", elapsed.as_secs_f64());
    Ok(())
}
