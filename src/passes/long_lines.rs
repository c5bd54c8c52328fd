const MAX_LINE_LENGTH: usize = 100;

/// Inserted comments start with this prefix; it doubles as the marker
/// that stops a rerun from annotating the same line again.
const ANNOTATION_PREFIX: &str = "# TODO: Consider breaking this long line";

/// Markers that make a long line unsafe to annotate: splitting advice is
/// useless for URLs and risks corrupting multi-line strings.
const SKIP_MARKERS: &[&str] = &["http://", "https://", "\"\"\"", "'''"];

fn annotation(length: usize) -> String {
    format!("{ANNOTATION_PREFIX} (length: {length})\n")
}

/// Insert a comment line before each over-length line stating its length.
///
/// Lines that are themselves comments are skipped, as is any line whose
/// preceding line already carries the annotation; the second check is
/// what makes reruns no-ops.
pub fn apply(content: &str) -> String {
    let mut result = String::with_capacity(content.len());
    let mut last_emitted_was_annotation = false;

    for line in content.split_inclusive('\n') {
        let length = line.trim_end().chars().count();
        let should_annotate = length > MAX_LINE_LENGTH
            && !SKIP_MARKERS.iter().any(|marker| line.contains(marker))
            && !line.trim_start().starts_with('#')
            && !last_emitted_was_annotation;

        if should_annotate {
            result.push_str(&annotation(length));
        }
        last_emitted_was_annotation = line.trim_start().starts_with(ANNOTATION_PREFIX);
        result.push_str(line);
    }

    result
}
