use sudoers_core::{Document, Record};

/// Build an owned string list from literals
#[allow(dead_code)]
pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Parse `text` as the content of a throwaway target
#[allow(dead_code)]
pub fn doc(text: &str) -> Document {
    Document::parse("/tmp/sudoers.test", text).unwrap()
}

/// Parse, resolve and serialize one line
#[allow(dead_code)]
pub fn round_trip(line: &str) -> String {
    let parsed = sudoers_core::parse_line(line).unwrap();
    let resolved: Vec<Record> = sudoers_core::resolve(vec![parsed]);
    sudoers_core::to_line(&resolved[0])
}
