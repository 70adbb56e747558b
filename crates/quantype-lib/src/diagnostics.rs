//! Builder-pattern printer for parse errors.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

use crate::syntax::{ParseError, Span};

/// Renders a [`ParseError`] against the source it came from.
pub struct ErrorPrinter<'e, 's> {
    error: &'e ParseError,
    source: &'s str,
    path: Option<&'s str>,
    colored: bool,
}

impl<'e, 's> ErrorPrinter<'e, 's> {
    pub fn new(error: &'e ParseError, source: &'s str) -> Self {
        Self {
            error,
            source,
            path: None,
            colored: false,
        }
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let range = adjust_range(self.error.span, self.source.len());
        let mut snippet = Snippet::source(self.source).line_start(1).annotation(
            AnnotationKind::Primary
                .span(range)
                .label(&self.error.message),
        );
        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }

        let title_group = Level::ERROR.primary_title(&self.error.message).element(snippet);
        let report: Vec<Group> = vec![title_group];
        write!(w, "{}", renderer.render(&report))
    }
}

// Empty spans (end of input) still need one column to point at.
fn adjust_range(span: Span, limit: usize) -> std::ops::Range<usize> {
    let range = span.range();
    if range.start == range.end {
        return range.start..(range.start + 1).min(limit);
    }
    range
}

impl ParseError {
    pub fn printer<'s>(&self, source: &'s str) -> ErrorPrinter<'_, 's> {
        ErrorPrinter::new(self, source)
    }
}
