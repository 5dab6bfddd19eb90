//! User-facing status lines. Diagnostics go through `tracing` instead.

use crate::utils::colors::{BLUE, GREEN, RED, RESET, YELLOW};
use std::fmt;

const BOLD: &str = "\x1b[1m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn styled(color: &str, icon: &str, msg: impl fmt::Display) -> String {
    format!("{color}{BOLD}{icon}{RESET} {msg}")
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", styled(BLUE, ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", styled(GREEN, ICON_OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", styled(YELLOW, ICON_WARN, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", styled(RED, ICON_ERR, msg));
}

/// Section header, e.g. above the event table
pub fn header<T: fmt::Display>(msg: T) {
    println!("{BLUE}{BOLD}== {msg}{RESET}\n");
}
