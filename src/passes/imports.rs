/// Module names kept even when the body never mentions them. These are
/// common utility modules whose absence from the body text usually means
/// indirect use, not dead weight.
const KEEP_MODULES: &[&str] = &["os", "sys", "typing"];

/// Names from `from ... import ...` kept unconditionally; typing names
/// frequently appear only inside string annotations the substring check
/// would miss.
const KEEP_NAMES: &[&str] = &["Optional", "List", "Dict", "Union"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    Header,
    Body,
}

fn is_import_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("import ") || trimmed.starts_with("from ")
}

/// Drop header imports whose names never appear in the body text.
///
/// The file splits into a leading header (contiguous import-style and
/// blank lines from the top) and the body (everything from the first
/// other line on; import lines deeper in the file are body, never
/// header). "Used" is a substring check against the body, so a name
/// occurring only in a comment, a string, or inside a longer identifier
/// still counts as used. The heuristic over-keeps by design.
pub fn apply(content: &str) -> String {
    let mut header: Vec<&str> = Vec::new();
    let mut body: Vec<&str> = Vec::new();
    let mut region = Region::Header;

    for line in content.split_inclusive('\n') {
        match region {
            Region::Header if is_import_line(line) || line.trim().is_empty() => {
                header.push(line);
            }
            _ => {
                region = Region::Body;
                body.push(line);
            }
        }
    }

    let body_text: String = body.concat();

    let mut result = String::with_capacity(content.len());
    for line in &header {
        if keep_import_line(line, &body_text) {
            result.push_str(line);
        }
    }
    result.push_str(&body_text);
    result
}

fn keep_import_line(line: &str, body: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return true;
    }

    if let Some(modules) = trimmed.strip_prefix("import ") {
        return modules.split(',').any(|module| {
            let root = module
                .trim()
                .split(" as ")
                .next()
                .unwrap_or("")
                .split('.')
                .next()
                .unwrap_or("");
            body.contains(root) || KEEP_MODULES.contains(&root)
        });
    }

    if trimmed.starts_with("from ") {
        let Some((_, names)) = trimmed.split_once(" import ") else {
            // Malformed from-line; keep rather than risk dropping.
            return true;
        };
        return names.split(',').any(|name| {
            let name = name.trim().split(" as ").next().unwrap_or("").trim();
            body.contains(name) || KEEP_NAMES.contains(&name)
        });
    }

    true
}
