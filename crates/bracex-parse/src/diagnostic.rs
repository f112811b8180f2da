//! Diagnostic rendering for parse errors.

use ariadne::{Color, Config, Label, Report, ReportKind, Source};

use crate::{ParseError, ParseErrorKind};

/// Get ariadne config, respecting NO_COLOR env var.
fn ariadne_config() -> Config {
    if std::env::var("NO_COLOR").is_ok() {
        Config::default().with_color(false)
    } else {
        Config::default()
    }
}

impl ParseError {
    /// Render this error with ariadne.
    ///
    /// Returns a string containing the formatted error message with source context.
    pub fn render(&self, filename: &str, source: &str) -> String {
        let mut output = Vec::new();
        self.write_report(filename, source, &mut output);
        String::from_utf8(output).unwrap_or_else(|_| format!("{}", self))
    }

    /// Write the error report to a writer.
    pub fn write_report<W: std::io::Write>(&self, filename: &str, source: &str, writer: W) {
        let report = self.build_report(filename);
        let _ = report
            .with_config(ariadne_config())
            .finish()
            .write((filename, Source::from(source)), writer);
    }

    fn build_report<'a>(
        &self,
        filename: &'a str,
    ) -> ariadne::ReportBuilder<'static, (&'a str, std::ops::Range<usize>)> {
        let range: std::ops::Range<usize> = self.span.into();

        match &self.kind {
            ParseErrorKind::UnmatchedBrace => Report::build(ReportKind::Error, (filename, range.clone()))
                .with_message("unclosed expression")
                .with_label(
                    Label::new((filename, range))
                        .with_message("expression opened here")
                        .with_color(Color::Red),
                )
                .with_help("add a closing '}'"),

            ParseErrorKind::UnmatchedNestedPair { open } => {
                let close = crate::closing_pair(*open).unwrap_or(*open);
                Report::build(ReportKind::Error, (filename, range.clone()))
                    .with_message(format!("unclosed '{open}' inside expression"))
                    .with_label(
                        Label::new((filename, range))
                            .with_message(format!("'{open}' opened here"))
                            .with_color(Color::Red),
                    )
                    .with_help(format!(
                        "add a closing '{close}' before the end of the item"
                    ))
            }

            ParseErrorKind::MixedItemKinds { .. } => Report::build(ReportKind::Error, (filename, range.clone()))
                .with_message("illegal mix of plain list and hashes")
                .with_label(
                    Label::new((filename, range))
                        .with_message("some items have keys, some don't")
                        .with_color(Color::Red),
                )
                .with_help("give every item a `key: ` prefix, or none of them"),
        }
    }
}
