use once_cell::sync::Lazy;
use regex::Regex;

// The capture is the body indentation; replacements must reuse it so the
// inserted comment lines up with the `pass` it precedes.
static BARE_EXCEPT_PASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"except:\s*\n([ \t]+)pass").unwrap());
static BROAD_EXCEPT_PASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"except Exception:\s*\n([ \t]+)pass").unwrap());

/// Rewrite silent catch-all blocks.
///
/// A bare `except:` over a `pass` body is renamed to the broad exception
/// form and gains a reminder comment; an already-broad `except
/// Exception:` only gains the comment. Both substitutions are idempotent
/// because the inserted comment breaks the header-to-`pass` adjacency
/// the patterns require.
pub fn apply(content: &str) -> String {
    let content = BARE_EXCEPT_PASS.replace_all(
        content,
        "except Exception as e:\n$1# TODO: Handle specific exception types\n${1}pass",
    );
    BROAD_EXCEPT_PASS
        .replace_all(
            &content,
            "except Exception:\n$1# TODO: Consider logging this exception\n${1}pass",
        )
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn bare_except_is_renamed_and_commented() {
        let input = indoc! {"
            try:
                risky()
            except:
                pass
        "};
        let expected = indoc! {"
            try:
                risky()
            except Exception as e:
                # TODO: Handle specific exception types
                pass
        "};
        assert_eq!(apply(input), expected);
    }

    #[test]
    fn broad_except_gains_comment_without_rename() {
        let input = indoc! {"
            try:
                risky()
            except Exception:
                pass
        "};
        let expected = indoc! {"
            try:
                risky()
            except Exception:
                # TODO: Consider logging this exception
                pass
        "};
        assert_eq!(apply(input), expected);
    }

    #[test]
    fn nested_indentation_is_preserved() {
        let input = indoc! {"
            def f():
                try:
                    risky()
                except:
                    pass
        "};
        let expected = indoc! {"
            def f():
                try:
                    risky()
                except Exception as e:
                    # TODO: Handle specific exception types
                    pass
        "};
        assert_eq!(apply(input), expected);
    }

    #[test]
    fn handled_exceptions_are_left_alone() {
        let input = indoc! {"
            try:
                risky()
            except ValueError:
                pass
            except Exception:
                log.warn('boom')
        "};
        assert_eq!(apply(input), input);
    }

    #[test]
    fn both_forms_rewritten_in_one_file() {
        let input = indoc! {"
            try:
                a()
            except:
                pass
            try:
                b()
            except Exception:
                pass
        "};
        let output = apply(input);
        assert!(output.contains("# TODO: Handle specific exception types"));
        assert!(output.contains("# TODO: Consider logging this exception"));
    }

    #[test]
    fn idempotent() {
        let input = indoc! {"
            try:
                a()
            except:
                pass
            try:
                b()
            except Exception:
                pass
        "};
        let once = apply(input);
        assert_eq!(apply(&once), once);
    }
}
