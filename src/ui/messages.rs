//! One-line status messages and section headers for terminal output.

use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW};
use std::fmt;

const BOLD: &str = "\x1b[1m";

#[derive(Debug, Clone, Copy)]
enum Level {
    Info,
    Ok,
    Warn,
}

impl Level {
    fn tag(self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Ok => "ok",
            Level::Warn => "warn",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Level::Info => CYAN,
            Level::Ok => GREEN,
            Level::Warn => YELLOW,
        }
    }
}

fn emit(level: Level, msg: impl fmt::Display) {
    println!("{}[{}]{} {}", level.color(), level.tag(), RESET, msg);
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Level::Info, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Level::Ok, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Level::Warn, msg);
}

/// Bold title underlined to its own width.
pub fn section(title: &str) -> String {
    let rule = "─".repeat(title.chars().count());
    format!("{BOLD}{title}{RESET}\n{rule}")
}

pub fn header<T: fmt::Display>(title: T) {
    println!("{}", section(&title.to_string()));
}
