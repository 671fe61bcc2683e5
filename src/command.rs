//! Editor command templating and detached process launch

use crate::error::TemplateError;
use std::process::{Command, Stdio};
use tracing::debug;

/// Placeholder replaced by the decimal source line.
pub const TOKEN_LINE: &str = "%{line}";
/// Placeholder replaced by the decimal source column.
pub const TOKEN_COLUMN: &str = "%{column}";
/// Placeholder replaced by the resolved source file name.
pub const TOKEN_INPUT: &str = "%{input}";

/// Split an editor command template into an argument vector, shell-style.
///
/// Supports single quotes (literal), double quotes (backslash escapes the
/// next character), and bare backslash escapes. No variable expansion, no
/// globbing - this is word splitting only; the first word is later resolved
/// as an executable via the search path.
pub fn tokenize(template: &str) -> Result<Vec<String>, TemplateError> {
    let mut argv: Vec<String> = Vec::new();
    let mut cur = String::new();
    let mut chars = template.chars();
    // Distinguishes "" (an intentional empty argument) from no argument.
    let mut has_arg = false;
    let mut in_single = false;
    let mut in_double = false;

    while let Some(ch) = chars.next() {
        if in_single {
            if ch == '\'' {
                in_single = false;
            } else {
                cur.push(ch);
            }
            continue;
        }
        if in_double {
            match ch {
                '"' => in_double = false,
                '\\' => {
                    let next = chars.next().ok_or(TemplateError::TrailingEscape)?;
                    cur.push(next);
                }
                _ => cur.push(ch),
            }
            continue;
        }
        match ch {
            '\'' => {
                in_single = true;
                has_arg = true;
            }
            '"' => {
                in_double = true;
                has_arg = true;
            }
            '\\' => {
                let next = chars.next().ok_or(TemplateError::TrailingEscape)?;
                cur.push(next);
                has_arg = true;
            }
            c if c.is_whitespace() => {
                if has_arg {
                    argv.push(std::mem::take(&mut cur));
                    has_arg = false;
                }
            }
            _ => {
                cur.push(ch);
                has_arg = true;
            }
        }
    }

    if in_single || in_double {
        return Err(TemplateError::UnterminatedQuote);
    }
    if has_arg {
        argv.push(cur);
    }
    if argv.is_empty() {
        return Err(TemplateError::Empty);
    }
    Ok(argv)
}

/// Replace every occurrence of `token` with `value` in each argument.
///
/// A pure transform: argument count and order are preserved, and it is the
/// identity when the token does not occur.
pub fn substitute(argv: &[String], token: &str, value: &str) -> Vec<String> {
    argv.iter().map(|arg| arg.replace(token, value)).collect()
}

/// Launch an argument vector as a detached process, fire-and-forget.
///
/// The executable is resolved via the standard search path. The child is
/// never waited on and launch failure is a debug log only.
pub fn spawn_detached(argv: &[String]) {
    let Some((program, args)) = argv.split_first() else {
        return;
    };
    match Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(_child) => {}
        Err(err) => debug!("failed to launch editor '{program}': {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_tokenize_plain_words() {
        let args = tokenize("vim +%{line} %{input}").unwrap();
        assert_eq!(args, argv(&["vim", "+%{line}", "%{input}"]));
    }

    #[test]
    fn test_tokenize_quotes() {
        let args = tokenize(r#"code --goto "%{input}:%{line}:%{column}""#).unwrap();
        assert_eq!(args, argv(&["code", "--goto", "%{input}:%{line}:%{column}"]));

        let args = tokenize("sh -c 'emacsclient +%{line} %{input}'").unwrap();
        assert_eq!(args, argv(&["sh", "-c", "emacsclient +%{line} %{input}"]));
    }

    #[test]
    fn test_tokenize_escapes() {
        let args = tokenize(r"open my\ file").unwrap();
        assert_eq!(args, argv(&["open", "my file"]));

        let args = tokenize(r#"echo "a \" b""#).unwrap();
        assert_eq!(args, argv(&["echo", r#"a " b"#]));
    }

    #[test]
    fn test_tokenize_empty_argument_is_kept() {
        let args = tokenize(r#"editor "" %{input}"#).unwrap();
        assert_eq!(args, argv(&["editor", "", "%{input}"]));
    }

    #[test]
    fn test_tokenize_errors() {
        assert_eq!(tokenize("vim '+call"), Err(TemplateError::UnterminatedQuote));
        assert_eq!(tokenize(r#"vim "foo"#), Err(TemplateError::UnterminatedQuote));
        assert_eq!(tokenize("vim \\"), Err(TemplateError::TrailingEscape));
        assert_eq!(tokenize(""), Err(TemplateError::Empty));
        assert_eq!(tokenize("   "), Err(TemplateError::Empty));
    }

    #[test]
    fn test_substitute_every_occurrence() {
        let args = argv(&["ed", "%{line}:%{line}", "x"]);
        let out = substitute(&args, TOKEN_LINE, "12");
        assert_eq!(out, argv(&["ed", "12:12", "x"]));
    }

    #[test]
    fn test_substitute_missing_token_is_identity() {
        let args = argv(&["ed", "+42", "file.tex"]);
        let out = substitute(&args, "%{missing}", "v");
        assert_eq!(out, args);
    }

    #[test]
    fn test_substitute_preserves_count_and_order() {
        let args = argv(&["a", "%{input}", "b", "%{input}"]);
        let out = substitute(&args, TOKEN_INPUT, "main.tex");
        assert_eq!(out.len(), args.len());
        assert_eq!(out, argv(&["a", "main.tex", "b", "main.tex"]));
    }
}
