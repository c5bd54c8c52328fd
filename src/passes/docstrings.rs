use once_cell::sync::Lazy;
use regex::Regex;

static DEF_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\s*)def\s+(\w+)\s*\(").unwrap());

fn opens_docstring(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("\"\"\"") || trimmed.starts_with("'''")
}

/// Insert a placeholder docstring after each undocumented `def` header.
///
/// The check looks past blank lines to the next non-blank line; the
/// insertion itself lands immediately after the header, before those
/// blanks, indented one level past the header. Reruns find the inserted
/// docstring as the next non-blank line and do nothing.
pub fn apply(content: &str) -> String {
    let lines: Vec<&str> = content.split_inclusive('\n').collect();
    let mut result = String::with_capacity(content.len());

    for (i, line) in lines.iter().enumerate() {
        result.push_str(line);

        let Some(caps) = DEF_HEADER.captures(line) else {
            continue;
        };

        // Look ahead past blank lines; a header with nothing after it
        // gets no docstring.
        let next_non_blank = lines[i + 1..].iter().find(|l| !l.trim().is_empty());
        let Some(next) = next_non_blank else {
            continue;
        };

        if !opens_docstring(next) {
            let indent = caps.get(1).map_or("", |m| m.as_str());
            let name = caps.get(2).map_or("", |m| m.as_str());
            result.push_str(&format!(
                "{indent}    \"\"\"TODO: Add description for {name}\"\"\"\n"
            ));
        }
    }

    result
}
