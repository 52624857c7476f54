//! The session loop: split a line into words, parse it, hand it to a handler, print the
//! output.

use anyhow::{anyhow, bail, Context};
use clap::Parser;
use std::io::{BufRead, Write};
use tracing::debug;

use super::handlers::{handle, AppState, Outcome};
use super::render::Renderer;
use super::setup::SessionLine;

/// Splits a session line into words. Single or double quotes group words and are dropped;
/// a backslash escapes the next character outside single quotes. `""` yields an empty word.
pub fn tokenize(line: &str) -> anyhow::Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('"') | None, '\\') => {
                let escaped = chars
                    .next()
                    .ok_or_else(|| anyhow!("Trailing backslash"))?;
                current.push(escaped);
                in_word = true;
            }
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        bail!("Unterminated {} quote", q);
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

/// A line with only whitespace or a `#` comment.
fn is_blank(line: &str) -> bool {
    let line = line.trim_start();
    line.is_empty() || line.starts_with('#')
}

pub struct Session {
    state: AppState,
    renderer: Renderer,
}

impl Session {
    pub fn new(state: AppState, renderer: Renderer) -> Self {
        Self { state, renderer }
    }

    /// Runs one line. Blank lines and comments produce empty output.
    pub fn execute(&mut self, line: &str) -> anyhow::Result<Outcome> {
        if is_blank(line) {
            return Ok(Outcome::Output(String::new()));
        }
        let words = tokenize(line)?;
        debug!(?words, "session line");

        let parsed = match SessionLine::try_parse_from(&words) {
            Ok(parsed) => parsed,
            Err(e) => bail!("{}", e.to_string().trim_end()),
        };
        handle(&mut self.state, &self.renderer, parsed.command)
    }

    /// Reads lines until end of input or `quit`. Failing lines are reported on `out` and the
    /// session goes on.
    pub fn run_interactive<R: BufRead, W: Write>(
        &mut self,
        input: R,
        out: &mut W,
        prompt: bool,
    ) -> anyhow::Result<()> {
        let mut lines = input.lines();
        loop {
            if prompt {
                write!(out, "{}", self.renderer.prompt())?;
                out.flush()?;
            }
            let Some(line) = lines.next() else {
                break;
            };
            let line = line.context("Failed to read session input")?;
            match self.execute(&line) {
                Ok(Outcome::Output(text)) => write!(out, "{}", text)?,
                Ok(Outcome::Quit) => break,
                Err(e) => write!(out, "{}", self.renderer.error(&format!("{:#}", e))?)?,
            }
        }
        Ok(())
    }

    /// Runs every line of `script`, stopping at the first failure. The error names the line.
    pub fn run_script<W: Write>(&mut self, script: &str, out: &mut W) -> anyhow::Result<()> {
        for (index, line) in script.lines().enumerate() {
            let outcome = self
                .execute(line)
                .with_context(|| format!("line {}: {}", index + 1, line.trim()))?;
            match outcome {
                Outcome::Output(text) => write!(out, "{}", text)?,
                Outcome::Quit => break,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medcvapp::export::{ExportOptions, HtmlFileExporter};
    use medcvapp::model::Template;
    use tempfile::tempdir;

    fn session(dir: &std::path::Path) -> Session {
        let state = AppState::new(
            Template::default(),
            HtmlFileExporter::new(dir),
            ExportOptions::default(),
        )
        .unwrap();
        Session::new(state, Renderer::with_color(false).unwrap())
    }

    #[test]
    fn tokenizer_splits_on_whitespace() {
        assert_eq!(
            tokenize("  draft   award title  ").unwrap(),
            vec!["draft", "award", "title"]
        );
    }

    #[test]
    fn tokenizer_groups_quoted_words() {
        assert_eq!(
            tokenize(r#"draft award title "Gold Medal" 'for "merit"'"#).unwrap(),
            vec!["draft", "award", "title", "Gold Medal", r#"for "merit""#]
        );
    }

    #[test]
    fn tokenizer_keeps_empty_quoted_word() {
        assert_eq!(
            tokenize(r#"personal phone """#).unwrap(),
            vec!["personal", "phone", ""]
        );
    }

    #[test]
    fn tokenizer_quote_edge_cases() {
        assert_eq!(
            tokenize("O'Brien").unwrap_err().to_string(),
            "Unterminated ' quote"
        );
        assert_eq!(tokenize(r#"O\'Brien"#).unwrap(), vec!["O'Brien"]);
        assert_eq!(tokenize(r#"a"b c"d"#).unwrap(), vec!["ab cd"]);
    }

    #[test]
    fn interactive_errors_do_not_stop_the_session() {
        let dir = tempdir().unwrap();
        let mut session = session(dir.path());
        let input = "template classic\nhobby add Chess\nquit\nhobby add Golf\n";
        let mut out = Vec::new();
        session
            .run_interactive(input.as_bytes(), &mut out, false)
            .unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Unknown template: classic"));
        assert!(out.contains("Hobbies: Chess"));
        assert!(!out.contains("Golf"));
    }

    #[test]
    fn script_stops_at_first_failure() {
        let dir = tempdir().unwrap();
        let mut session = session(dir.path());
        let script = "# comment\nhobby add Chess\nsubmit award\nhobby add Golf\n";
        let mut out = Vec::new();
        let err = session.run_script(script, &mut out).unwrap_err();

        assert!(format!("{:#}", err).starts_with("line 3: submit award: Cannot submit award"));
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Chess"));
        assert!(!out.contains("Golf"));
    }

    #[test]
    fn unknown_session_command_is_an_error() {
        let dir = tempdir().unwrap();
        let mut session = session(dir.path());
        assert!(session.execute("frobnicate").is_err());
    }

    #[test]
    fn help_is_a_session_command_not_a_flag() {
        let dir = tempdir().unwrap();
        let mut session = session(dir.path());
        match session.execute("help").unwrap() {
            Outcome::Output(text) => assert!(text.contains("submit <kind>")),
            Outcome::Quit => panic!("help must not end the session"),
        }
        assert!(session.execute("--help").is_err());
    }

    #[test]
    fn blank_and_comment_lines_are_silent() {
        let dir = tempdir().unwrap();
        let mut session = session(dir.path());
        assert_eq!(
            session.execute("   # nothing").unwrap(),
            Outcome::Output(String::new())
        );
    }
}
