//! Best-effort structure parser: raw source text to declaration records.
//!
//! Line-oriented, never fails. Lines that match no pattern are dropped so a
//! partially valid input still yields the structure it does contain.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{instrument, trace};

use crate::types::{ClassDecl, Declaration, MethodDecl, VariableDecl};

static CLASS_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"class\s+(\w+)").expect("class pattern"));

static METHOD_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"(void|String|int|bool|double)\s+(\w+)\s*\(([^)]*)\)")
    .expect("method pattern")
});

static VAR_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"(var|final|const|String|int|bool|List)\s+(\w+)\s*=\s*(.+?);?\s*$")
    .expect("variable pattern")
});

/// Cheap precondition before the method regex runs: a typed return keyword
/// and a parenthesized list must both be present.
fn looks_like_method(line: &str) -> bool {
  (line.contains("void ")
    || line.contains("String ")
    || line.contains("int ")
    || line.contains("bool ")
    || line.contains("double "))
    && line.contains('(')
    && line.contains(')')
}

/// Cheap precondition before the variable regex runs: a qualifier or type
/// keyword and an assignment must both be present.
fn looks_like_variable(line: &str) -> bool {
  (line.contains("var ")
    || line.contains("final ")
    || line.contains("const ")
    || line.contains("String ")
    || line.contains("int ")
    || line.contains("List "))
    && line.contains('=')
}

/// Parses source text into declaration records.
///
/// Scans trimmed, non-empty lines while accumulating brace depth. A line
/// matching the class pattern opens a class; while one is open, each line is
/// tried against the method pattern first, then the variable pattern (that
/// precedence is deliberate: a typed variable whose value contains
/// parentheses classifies as a method). The class closes when depth returns
/// to zero on a lone closing brace. Anything else is skipped.
#[instrument(level = "trace", skip(code))]
pub fn parse_source(code: &str) -> Vec<Declaration> {
  let mut declarations: Vec<Declaration> = Vec::new();
  let mut open_class: Option<usize> = None;
  let mut brace_depth: i64 = 0;

  for line in code.lines().map(str::trim).filter(|l| !l.is_empty()) {
    brace_depth += line.matches('{').count() as i64;
    brace_depth -= line.matches('}').count() as i64;

    if line.starts_with("class ") {
      if let Some(caps) = CLASS_RE.captures(line) {
        trace!(name = &caps[1], "class opened");
        declarations.push(Declaration::Class(ClassDecl::new(&caps[1])));
        open_class = Some(declarations.len() - 1);
        continue;
      }
    }

    if let Some(idx) = open_class {
      if looks_like_method(line) {
        if let Some(caps) = METHOD_RE.captures(line) {
          push_member(
            &mut declarations,
            idx,
            Declaration::Method(MethodDecl {
              return_type: caps[1].to_string(),
              name: caps[2].to_string(),
              parameters: caps[3].trim().to_string(),
            }),
          );
          continue;
        }
      }

      if looks_like_variable(line) {
        if let Some(caps) = VAR_RE.captures(line) {
          push_member(
            &mut declarations,
            idx,
            Declaration::Variable(VariableDecl {
              var_type: caps[1].to_string(),
              name: caps[2].to_string(),
              value: caps[3].trim().to_string(),
            }),
          );
          continue;
        }
      }

      if brace_depth == 0 && line == "}" {
        trace!("class closed");
        open_class = None;
      }
    }
  }

  declarations
}

fn push_member(declarations: &mut [Declaration], idx: usize, member: Declaration) {
  if let Some(Declaration::Class(class)) = declarations.get_mut(idx) {
    class.members.push(member);
  }
}
