//! Human and JSON rendering of command results.

use serde::Serialize;

/// A command result that can be shown to a person or to a script.
pub trait CommandOutput: Serialize {
    /// One-line summary for a terminal
    fn to_human(&self) -> String;

    /// Machine-readable form; defaults to the serialized fields
    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Print `result` on stdout in the selected mode.
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        print_json(&result.to_json());
    } else {
        println!("{}", result.to_human());
    }
}

/// Pretty-print a JSON value on stdout.
pub fn print_json(value: &serde_json::Value) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
