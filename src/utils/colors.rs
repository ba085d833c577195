/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const BOLD: &str = "\x1b[1m";

/// Green "on" / grey "off" marker for the active switch.
pub fn colorize_active(active: bool) -> String {
    if active {
        format!("{GREEN}on{RESET}")
    } else {
        format!("{GREY}off{RESET}")
    }
}

/// Inactive alarms are dimmed in the list.
pub fn dim_unless(active: bool, value: &str) -> String {
    if active {
        value.to_string()
    } else {
        format!("{GREY}{value}{RESET}")
    }
}

/// Returns GREY for placeholder captions ("No Days", "No Label").
pub fn color_for_caption(value: &str) -> &'static str {
    match value.trim() {
        "" | "No Days" | "No Label" => GREY,
        _ => RESET,
    }
}
