//! `split`: backup document to sharded layout

use std::path::Path;

use colored::Colorize;
use notes_fs::NormalizedPath;
use notes_model::{Backup, ShardWriter};

use crate::error::{CliError, Result};

pub fn run_split(cwd: &Path, backup: &Path, out: &Path) -> Result<()> {
    let backup_path = NormalizedPath::new(cwd.join(backup));
    if !backup_path.is_file() {
        return Err(CliError::user(format!(
            "Backup file {} not found",
            backup_path
        )));
    }

    println!("{} Reading {}...", "=>".blue().bold(), backup_path);
    let document = Backup::load(&backup_path)?;
    println!(
        "   Found {} notes and {} labels.",
        document.notes.len(),
        document.labels.len()
    );

    let writer = ShardWriter::new(cwd.join(out));
    let report = writer.write(&document)?;

    println!(
        "{} Wrote {} note files, {} labels and a bundle to {}",
        "OK".green().bold(),
        report.notes_written,
        report.labels_written,
        writer.out_dir().as_str().cyan()
    );
    if report.skipped_missing_id > 0 {
        println!(
            "   {} {} notes without an id were skipped",
            "!".yellow(),
            report.skipped_missing_id
        );
    }
    for id in &report.skipped_invalid_id {
        println!("   {} skipped note with unusable id {:?}", "!".yellow(), id);
    }

    Ok(())
}
