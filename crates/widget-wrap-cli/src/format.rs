//! Best-effort reindentation by delimiter depth.
//!
//! Stand-in for a real formatter: two spaces per open bracket level,
//! delimiters inside string literals and comments ignored. Runs after every
//! successful wrap; a line it gets wrong is a cosmetic problem, never a
//! correctness one.

/// Reindent every line of `text` to its delimiter depth.
pub fn reindent(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut depth: usize = 0;
    let mut in_block_comment: usize = 0;

    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let (opens, closes, leading_closes) = scan_line(trimmed, &mut in_block_comment);
        let level = depth.saturating_sub(leading_closes);
        for _ in 0..level {
            out.push_str("  ");
        }
        out.push_str(trimmed);
        depth = (depth + opens).saturating_sub(closes);
    }

    if text.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// Count bracket opens/closes on one line, plus the closers that lead the
/// line (those dedent the line itself). Strings, `//` comments and block
/// comments are skipped; block-comment state carries across lines.
fn scan_line(line: &str, in_block_comment: &mut usize) -> (usize, usize, usize) {
    let mut opens = 0;
    let mut closes = 0;
    let mut leading_closes = 0;
    let mut seen_content = false;
    let mut in_string: Option<char> = None;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if *in_block_comment > 0 {
            match ch {
                '*' if chars.peek() == Some(&'/') => {
                    chars.next();
                    *in_block_comment -= 1;
                }
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    *in_block_comment += 1;
                }
                _ => {}
            }
            continue;
        }
        if let Some(quote) = in_string {
            match ch {
                '\\' => {
                    chars.next();
                }
                c if c == quote => in_string = None,
                _ => {}
            }
            continue;
        }
        match ch {
            '(' | '[' | '{' => {
                opens += 1;
                seen_content = true;
            }
            ')' | ']' | '}' => {
                closes += 1;
                if !seen_content {
                    leading_closes += 1;
                }
            }
            '\'' | '"' => {
                in_string = Some(ch);
                seen_content = true;
            }
            '/' if chars.peek() == Some(&'/') => break,
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                *in_block_comment += 1;
            }
            c if c.is_whitespace() => {}
            _ => seen_content = true,
        }
    }

    (opens, closes, leading_closes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn indents_to_bracket_depth() {
        let source = "Column(children: [\nText('a'),\nText('b'),\n],\n)";

        assert_eq!(
            reindent(source),
            "Column(children: [\n    Text('a'),\n    Text('b'),\n  ],\n)"
        );
    }

    #[test]
    fn single_lines_pass_through() {
        let source = "Center(child: Padding(padding: EdgeInsets.all(8.0), child: Text('hi')))";
        assert_eq!(reindent(source), source);
    }

    #[test]
    fn delimiters_in_strings_do_not_change_depth() {
        let source = "Text('(('),\nText(')')";
        assert_eq!(reindent(source), source);
    }

    #[test]
    fn line_comments_do_not_change_depth() {
        let source = "Row( // children: [\nText('a'),\n)";
        assert_eq!(reindent(source), "Row( // children: [\n  Text('a'),\n)");
    }

    #[test]
    fn block_comments_carry_across_lines() {
        let source = "Row(\n/* (((\n))) */\nText('a'),\n)";
        assert_eq!(reindent(source), "Row(\n  /* (((\n  ))) */\n  Text('a'),\n)");
    }

    #[test]
    fn empty_lines_stay_empty() {
        let source = "Row(\n\nText('a'),\n)";
        assert_eq!(reindent(source), "Row(\n\n  Text('a'),\n)");
    }

    #[test]
    fn trailing_newline_is_preserved() {
        assert_eq!(reindent("Text('a')\n"), "Text('a')\n");
        assert_eq!(reindent("Text('a')"), "Text('a')");
    }

    #[test]
    fn reindent_is_idempotent() {
        let source = "Column(children: [\n      Text('a'),\n],\n)";
        let once = reindent(source);
        assert_eq!(reindent(&once), once);
    }
}
