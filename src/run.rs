//! Application run: logger init, input reading and document output.

use std::fs;
use std::io::{self, Read, Write};
use std::ops::Range;

use serde::Serialize;

use text_markup::app;
use text_markup::config::Config;
use text_markup::markup::{self, MarkupDocument, Segment};

use crate::cli::{Args, Format};

const HIGHLIGHT_START: &str = "\x1b[31m";
const HIGHLIGHT_END: &str = "\x1b[0m";

/// Initialize env_logger on stderr, filtered by -v/-q unless RUST_LOG is set.
pub fn init_logger(args: &Args) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level()),
    )
    .target(env_logger::Target::Stderr)
    .try_init();
}

/// Read the whole input from the path argument or stdin.
fn read_input(args: &Args) -> io::Result<String> {
    match &args.input {
        Some(path) if !args.reads_stdin() => fs::read_to_string(path),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Parse the input and print it in the requested format.
pub fn run(args: &Args, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    log::debug!("{} {}", app::NAME, app::VERSION);
    let input = read_input(args)?;
    let doc = MarkupDocument::with_extractor(&input, &config.extractor());
    log::info!(
        "parsed {} bytes: reasoning={}, body={} bytes",
        input.len(),
        doc.reasoning.is_some(),
        doc.body.len()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        Format::Text => write_text(&mut out, &doc, &args.keyword)?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, &JsonOutput::new(&doc, &args.keyword))?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Plain-text line with keyword occurrences wrapped in ANSI red.
fn render_line(line: &str, keyword: &str) -> String {
    let mut rendered = String::with_capacity(line.len());
    for span in markup::render_plain_line(line, keyword) {
        if span.highlighted {
            rendered.push_str(HIGHLIGHT_START);
            rendered.push_str(&span.text);
            rendered.push_str(HIGHLIGHT_END);
        } else {
            rendered.push_str(&span.text);
        }
    }
    rendered
}

fn write_indented<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    for line in text.lines() {
        writeln!(out, "  {}", line)?;
    }
    Ok(())
}

/// Line-oriented preview: one entry per segment, prefixed with its kind.
pub(crate) fn write_text<W: Write>(
    out: &mut W,
    doc: &MarkupDocument,
    keyword: &str,
) -> io::Result<()> {
    if let Some(reasoning) = &doc.reasoning {
        writeln!(out, "reasoning:")?;
        write_indented(out, reasoning)?;
    }
    for segment in doc.segments() {
        match segment {
            Segment::PlainText(line) => {
                writeln!(out, "{}: {}", segment.kind(), render_line(line, keyword))?
            }
            Segment::InlineCode(code) => writeln!(out, "{}: {}", segment.kind(), code)?,
            Segment::CodeBlock { content, language } => {
                if language.is_empty() {
                    writeln!(out, "{}:", segment.kind())?;
                } else {
                    writeln!(out, "{} ({}):", segment.kind(), language)?;
                }
                write_indented(out, content)?;
            }
            Segment::Math(expr) => {
                let label = match segment.math_display() {
                    Some(markup::MathDisplay::Block) => "math_block",
                    _ => "math_inline",
                };
                if expr.contains('\n') {
                    writeln!(out, "{}:", label)?;
                    write_indented(out, expr)?;
                } else {
                    writeln!(out, "{}: {}", label, expr)?;
                }
            }
        }
    }
    Ok(())
}

/// Highlighted byte ranges of one plain-text segment.
#[derive(Debug, Serialize)]
struct SegmentHighlights {
    segment: usize,
    ranges: Vec<Range<usize>>,
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    reasoning: Option<&'a str>,
    segments: Vec<Segment<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    highlights: Vec<SegmentHighlights>,
}

impl<'a> JsonOutput<'a> {
    fn new(doc: &'a MarkupDocument, keyword: &str) -> Self {
        let view = doc.view();
        let highlights = if keyword.is_empty() {
            Vec::new()
        } else {
            view.segments
                .iter()
                .enumerate()
                .filter(|(_, seg)| seg.is_plain_text())
                .filter_map(|(i, seg)| {
                    let ranges: Vec<_> = markup::highlight_ranges(seg.content(), keyword)
                        .into_iter()
                        .filter_map(|(range, hit)| hit.then_some(range))
                        .collect();
                    (!ranges.is_empty()).then_some(SegmentHighlights { segment: i, ranges })
                })
                .collect()
        };
        Self {
            reasoning: view.reasoning,
            segments: view.segments,
            highlights,
        }
    }
}
