use colored::Colorize;
use std::fmt;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
}

fn build_label(kind: MessageKind) -> (&'static str, &'static str) {
    match kind {
        MessageKind::Info => ("INFO", "[i]"),
        MessageKind::Success => ("SUCCESS", "[+]"),
        MessageKind::Warning => ("WARNING", "[!]"),
        MessageKind::Error => ("ERROR", "[x]"),
        MessageKind::Section => ("INFO", ""),
    }
}

fn apply_style(kind: MessageKind, message: impl fmt::Display) -> String {
    let text = message.to_string();

    let formatted = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        _ => {
            let (label, icon) = build_label(kind);
            format!("{label}: {icon} {text}")
        }
    };

    match kind {
        MessageKind::Success => formatted.bright_green().to_string(),
        MessageKind::Warning => formatted.bright_yellow().to_string(),
        MessageKind::Error => formatted.bright_red().to_string(),
        MessageKind::Section => formatted.bold().to_string(),
        MessageKind::Info => formatted,
    }
}

fn emit(kind: MessageKind, message: impl fmt::Display) {
    println!("{}", apply_style(kind, message));
}

pub fn info(message: impl fmt::Display) {
    emit(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    emit(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    emit(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    emit(MessageKind::Error, message);
}

pub fn section(message: impl fmt::Display) {
    emit(MessageKind::Section, message);
}

/// Plain line without a label, used for listing rows.
pub fn line(message: impl fmt::Display) {
    println!("{message}");
}
