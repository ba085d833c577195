//! Status lines printed by the commands.

use crate::utils::colors::{BLUE, BOLD, GREEN, GREY, RED, RESET, YELLOW};
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn line<T: fmt::Display>(color: &str, icon: &str, msg: T) -> String {
    format!("{}{}{} {}{}", color, BOLD, icon, RESET, msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(BLUE, ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(GREEN, ICON_OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(YELLOW, ICON_WARN, msg));
}

/// Errors go to stderr.
pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(RED, ICON_ERR, msg));
}

/// Section title above tables, with a grey subtitle.
pub fn header<T: fmt::Display>(title: T, subtitle: &str) {
    println!("{}{}{}{} {}{}", BLUE, BOLD, title, RESET, GREY, subtitle);
    println!("{}", RESET);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::table::strip_ansi;

    #[test]
    fn lines_carry_icon_and_message() {
        let out = strip_ansi(&line(GREEN, ICON_OK, "Alarm saved"));
        assert_eq!(out, format!("{} Alarm saved", ICON_OK));
    }
}
