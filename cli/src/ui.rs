use changelog::EntryStore;
use colored::Colorize;
use std::io::{self, Write};

/// Print a status message with a spinner-like indicator
pub fn status_message(message: &str) {
    println!("{} {} ... ", "⏳".yellow(), message.bright_white());
    let _ = io::stdout().flush();
}

pub fn success_message(message: &str) {
    println!("{} {}", "✅".green(), message.green());
}

pub fn warning_message(message: &str) {
    println!("{} {}", "⚠️ ".yellow(), message.yellow());
}

pub fn info_message(message: &str) {
    println!("{} {}", "ℹ️ ".blue(), message.blue());
}

/// Print a section header to separate logical sections of output
pub fn section_header(title: &str) {
    println!("\n{}", format!("==== {} ====", title).cyan().bold());
}

/// Report a session that ended before anything was written
pub fn premature_exit(message: &str) {
    eprintln!("{} {}", "⏹ ".yellow(), message.yellow().bold());
}

/// Print how many messages each non-empty category holds
pub fn entry_summary(entries: &EntryStore) {
    for (category, messages) in entries.iter().filter(|(_, m)| !m.is_empty()) {
        println!(
            "  {} {}",
            format!("{:<10}", category.as_str()).cyan(),
            messages.len()
        );
    }
}

/// Print the top section that was written, indented under a rule
pub fn markdown_preview(markdown: &str) {
    println!("{}", "----".dimmed());
    for line in markdown.lines() {
        println!("  {}", line.bright_white());
    }
    println!("{}", "----".dimmed());
}
