//! Serialization of the document model into the final Nix text.
//!
//! Indent depth is tracked explicitly while descending, so real whitespace
//! is emitted directly in a single pass.

use crate::builder::Builder;
use crate::model::{Document, Package};
use sdknix_schema::License;

/// Rendering options for the generated document.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Spaces per nesting level.
    pub indent_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { indent_width: 2 }
    }
}

const HEADER: &str = "### DO NOT EDIT! This file is generated automatically by sdknix.";

/// Render the assembled document to its final textual form.
pub fn render(document: &Document, options: RenderOptions) -> String {
    let mut w = Writer::new(options.indent_width);
    w.line(HEADER);
    w.line(&signature());
    w.blank();
    w.open("");
    for package in &document.packages {
        write_package(&mut w, package);
    }
    w.close("");
    w.finish()
}

/// The document's function signature: one builder parameter per category,
/// generic fallback last.
fn signature() -> String {
    let params: Vec<&str> = Builder::ALL.iter().map(|b| b.fn_name()).collect();
    format!("{{ {} }}:", params.join(", "))
}

fn write_package(w: &mut Writer, package: &Package) {
    w.open(&format!(
        "{} = {} ",
        attr(&package.attr_key()),
        package.builder.fn_name()
    ));
    w.line(&kv("id", &package.id));
    w.line(&kv("pname", &package.pname));
    w.line(&kv("version", &package.version));
    w.open("sources = ");
    for source in &package.sources {
        w.open(&format!("{} = ", source.platform));
        w.line(&kv("url", &source.url));
        w.line(&kv(source.algorithm.as_str(), &source.checksum));
        w.close(";");
    }
    w.close(";");
    w.line(&kv("displayName", &package.display_name));
    w.line(&kv("path", &package.dir));
    write_license(w, &package.license);
    w.line(&format!("xml = ./{}.xml;", package.pname));
    w.close(";");
}

fn write_license(w: &mut Writer, license: &License) {
    w.open("license = ");
    w.line(&kv("id", &license.id));
    w.line(&kv("hash", &license.hash));
    w.close(";");
}

fn kv(key: &str, value: &str) -> String {
    format!("{key} = \"{}\";", escape(value))
}

/// Escape a string for a Nix double-quoted literal.
fn escape(raw: &str) -> String {
    raw.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace("${", "\\${")
}

/// Quote an attribute key unless it is a bare Nix identifier.
fn attr(key: &str) -> String {
    if is_bare_identifier(key) {
        key.to_string()
    } else {
        format!("\"{}\"", escape(key))
    }
}

fn is_bare_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '\''))
}

struct Writer {
    out: String,
    width: usize,
    depth: usize,
}

impl Writer {
    fn new(width: usize) -> Self {
        Self {
            out: String::new(),
            width,
            depth: 0,
        }
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.depth * self.width {
            self.out.push(' ');
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    /// Start a nested record: `{head}{` on its own line, one level deeper
    /// until the matching [`close`](Self::close).
    fn open(&mut self, head: &str) {
        self.line(&format!("{head}{{"));
        self.depth += 1;
    }

    fn close(&mut self, tail: &str) {
        self.depth -= 1;
        self.line(&format!("}}{tail}"));
    }

    fn finish(self) -> String {
        self.out
    }
}
