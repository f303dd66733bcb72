//! A scanning session: one handler and one configuration shared by every
//! run, whether a whole script or a sequence of prompt lines.

use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use lox_lex::{scan_all, Token};
use lox_util::{Handler, StderrEmitter};
use tracing::debug;

use crate::config::{Config, OutputFormat};
use crate::error::{DriverError, Result, EXIT_DATA_ERR};

/// Outcome of scanning a script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// No lexical errors were reported
    Success,
    /// At least one lexical error was reported
    LexicalErrors,
}

impl Status {
    /// Process exit status for this outcome.
    pub fn exit_code(self) -> u8 {
        match self {
            Status::Success => 0,
            Status::LexicalErrors => EXIT_DATA_ERR,
        }
    }
}

/// Driver session
pub struct Session {
    config: Config,
    handler: Handler,
}

impl Session {
    /// Create a session whose diagnostics are printed to stderr.
    pub fn new(config: Config) -> Self {
        Self::with_handler(config, Handler::with_emitter(StderrEmitter))
    }

    /// Create a session around an existing handler.
    pub fn with_handler(config: Config, handler: Handler) -> Self {
        Self { config, handler }
    }

    /// The error sink shared by every run in this session.
    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    /// Scan `source` and print its tokens to `out`.
    ///
    /// Lexical errors go to the handler; the returned tokens always end in
    /// `EOF`. Only failures to write the output are returned as errors.
    pub fn run<W: Write>(&mut self, source: &str, out: &mut W) -> Result<Vec<Token>> {
        let tokens = scan_all(source, &mut self.handler);
        debug!(
            tokens = tokens.len(),
            errors = self.handler.error_count(),
            "scanned source"
        );
        write_tokens(&tokens, self.config.output.format, out)?;
        Ok(tokens)
    }

    /// Scan a whole script file.
    pub fn run_file<W: Write>(&mut self, path: &Path, out: &mut W) -> Result<Status> {
        let source = fs::read_to_string(path).map_err(|source| DriverError::ReadSource {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = source.len(), "scanning file");

        self.run(&source, out)?;
        out.flush()?;

        if self.handler.has_errors() {
            Ok(Status::LexicalErrors)
        } else {
            Ok(Status::Success)
        }
    }

    /// Read lines from `input` until it is exhausted, scanning each one on
    /// its own.
    ///
    /// Every line starts again at line 1 and the handler is cleared after
    /// each line, so an error never leaks into the next one. Bytes that are
    /// not UTF-8 decode to U+FFFD and scan as unexpected characters.
    pub fn run_prompt<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> Result<()> {
        let mut line = Vec::new();
        loop {
            write!(out, "{}", self.config.repl.prompt)?;
            out.flush()?;

            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                writeln!(out)?;
                break;
            }

            let text = String::from_utf8_lossy(&line);
            let source = text.trim_end_matches(['\n', '\r']);
            self.run(source, out)?;
            self.handler.clear();
        }
        out.flush()?;
        Ok(())
    }
}

fn write_tokens<W: Write>(tokens: &[Token], format: OutputFormat, out: &mut W) -> Result<()> {
    for token in tokens {
        match format {
            OutputFormat::Plain => writeln!(out, "{}", token)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, token)?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OutputConfig, ReplConfig};
    use lox_util::BufferEmitter;
    use tempfile::TempDir;

    fn buffered(config: Config) -> (Session, BufferEmitter) {
        let buffer = BufferEmitter::new();
        let session = Session::with_handler(config, Handler::with_emitter(buffer.clone()));
        (session, buffer)
    }

    fn output(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_run_prints_plain_tokens() {
        let (mut session, _) = buffered(Config::default());
        let mut out = Vec::new();
        session.run("var x = 12;", &mut out).unwrap();

        assert_eq!(
            output(out),
            "VAR var\nIDENTIFIER x\nEQUAL =\nNUMBER 12 12.0\nSEMICOLON ;\nEOF\n"
        );
    }

    #[test]
    fn test_run_prints_json_tokens() {
        let config = Config {
            output: OutputConfig {
                format: OutputFormat::Json,
            },
            ..Config::default()
        };
        let (mut session, _) = buffered(config);
        let mut out = Vec::new();
        session.run("\"hi\"", &mut out).unwrap();

        let text = output(out);
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["kind"], "STRING");
        assert_eq!(lines[0]["literal"], "hi");
        assert_eq!(lines[1]["kind"], "EOF");
    }

    #[test]
    fn test_run_file_reports_lexical_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.lox");
        fs::write(&path, "print 1;\nvar a = @;\n").unwrap();

        let (mut session, buffer) = buffered(Config::default());
        let mut out = Vec::new();
        let status = session.run_file(&path, &mut out).unwrap();

        assert_eq!(status, Status::LexicalErrors);
        assert_eq!(status.exit_code(), EXIT_DATA_ERR);
        assert_eq!(buffer.lines(), vec!["[line 2] Error: Unexpected character."]);
        assert!(output(out).ends_with("EOF\n"));
    }

    #[test]
    fn test_run_file_clean() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ok.lox");
        fs::write(&path, "fun f() { return nil; }\n").unwrap();

        let (mut session, buffer) = buffered(Config::default());
        let status = session.run_file(&path, &mut Vec::new()).unwrap();

        assert_eq!(status, Status::Success);
        assert_eq!(status.exit_code(), 0);
        assert!(buffer.lines().is_empty());
    }

    #[test]
    fn test_run_file_missing() {
        let (mut session, _) = buffered(Config::default());
        let err = session
            .run_file(Path::new("/nonexistent/script.lox"), &mut Vec::new())
            .unwrap_err();
        assert!(matches!(err, DriverError::ReadSource { .. }));
    }

    #[test]
    fn test_prompt_resets_errors_between_lines() {
        let (mut session, buffer) = buffered(Config::default());
        let mut out = Vec::new();
        session
            .run_prompt(&b"@\n\"open\nprint x;\n"[..], &mut out)
            .unwrap();

        assert!(!session.handler().has_errors());
        assert_eq!(
            buffer.lines(),
            vec![
                "[line 1] Error: Unexpected character.",
                "[line 1] Error: Unterminated string.",
            ]
        );

        let text = output(out);
        assert!(text.contains("PRINT print\nIDENTIFIER x\nSEMICOLON ;\nEOF\n"));
        assert_eq!(text.matches(">> ").count(), 4);
    }

    #[test]
    fn test_prompt_survives_invalid_utf8_line() {
        let (mut session, buffer) = buffered(Config::default());
        let mut out = Vec::new();
        session
            .run_prompt(&b"\xff\nprint 1;\n"[..], &mut out)
            .unwrap();

        assert_eq!(buffer.lines(), vec!["[line 1] Error: Unexpected character."]);
        assert!(!session.handler().has_errors());

        let text = output(out);
        assert!(text.contains("PRINT print\nNUMBER 1 1.0\nSEMICOLON ;\nEOF\n"));
        assert_eq!(text.matches(">> ").count(), 3);
    }

    #[test]
    fn test_prompt_uses_configured_prompt() {
        let config = Config {
            repl: ReplConfig {
                prompt: "lox> ".to_string(),
            },
            ..Config::default()
        };
        let (mut session, _) = buffered(config);
        let mut out = Vec::new();
        session.run_prompt(&b"1\r\n"[..], &mut out).unwrap();

        assert_eq!(output(out), "lox> NUMBER 1 1.0\nEOF\nlox> \n");
    }

    #[test]
    fn test_prompt_empty_input() {
        let (mut session, _) = buffered(Config::default());
        let mut out = Vec::new();
        session.run_prompt(&b""[..], &mut out).unwrap();
        assert_eq!(output(out), ">> \n");
    }
}
