//! Property tests for quoting and rendering.

use buildinfo_lib::{BuildRecord, ModuleRef, format_json, format_text, quote_if};
use proptest::prelude::*;

/// Reverse the escapes produced by `quote_if(_, true)`.
fn unquote(quoted: &str) -> Option<String> {
  let inner = quoted.strip_prefix('"')?.strip_suffix('"')?;
  let mut out = String::new();
  let mut chars = inner.chars();

  while let Some(c) = chars.next() {
    if c != '\\' {
      out.push(c);
      continue;
    }
    match chars.next()? {
      'a' => out.push('\u{7}'),
      'b' => out.push('\u{8}'),
      'f' => out.push('\u{c}'),
      'n' => out.push('\n'),
      'r' => out.push('\r'),
      't' => out.push('\t'),
      'v' => out.push('\u{b}'),
      '\\' => out.push('\\'),
      '"' => out.push('"'),
      'x' => out.push(hex_escape(&mut chars, 2)?),
      'u' => out.push(hex_escape(&mut chars, 4)?),
      'U' => out.push(hex_escape(&mut chars, 8)?),
      _ => return None,
    }
  }

  Some(out)
}

fn hex_escape(chars: &mut std::str::Chars<'_>, digits: usize) -> Option<char> {
  let hex: String = chars.by_ref().take(digits).collect();
  if hex.len() != digits {
    return None;
  }
  char::from_u32(u32::from_str_radix(&hex, 16).ok()?)
}

fn module() -> impl Strategy<Value = ModuleRef> {
  ("[a-z./-]{1,12}", "v[0-9]\\.[0-9]", "(h1:[a-f0-9]{8})?").prop_map(|(p, v, s)| ModuleRef::new(&p, &v).with_sum(&s))
}

fn record() -> impl Strategy<Value = BuildRecord> {
  (
    any::<String>(),
    any::<String>(),
    module(),
    proptest::collection::vec(module(), 0..4),
    proptest::collection::vec(("[A-Z_]{1,8}", any::<String>()), 0..4),
  )
    .prop_map(|(tool, path, main, deps, settings)| {
      let mut record = BuildRecord::new(&tool, &path, main);
      for dep in deps {
        record = record.with_dep(dep);
      }
      for (key, value) in settings {
        record = record.with_setting(&key, &value);
      }
      record
    })
}

proptest! {
  #[test]
  fn unquoted_is_identity(s in any::<String>()) {
    prop_assert_eq!(quote_if(&s, false), s.as_str());
  }

  #[test]
  fn quoted_unescapes_to_input(s in any::<String>()) {
    let quoted = quote_if(&s, true);
    prop_assert!(quoted.starts_with('"'));
    prop_assert!(quoted.ends_with('"'));
    prop_assert_eq!(unquote(&quoted), Some(s.clone()));
  }

  #[test]
  fn quoted_has_no_raw_controls(s in any::<String>()) {
    let quoted = quote_if(&s, true);
    prop_assert!(!quoted.chars().any(char::is_control));
  }

  #[test]
  fn quoted_text_is_single_line_per_field(record in record(), prefix in "[#> ]{0,3}") {
    let out = format_text(&record, true, &prefix, "  ");
    let expected = 6 + if record.deps.is_empty() { 0 } else { 1 + 3 * record.deps.len() }
      + if record.settings.is_empty() { 0 } else { 1 + record.settings.len() };

    prop_assert_eq!(out.lines().count(), expected);
    prop_assert!(out.ends_with('\n'));
    for line in out.lines() {
      prop_assert!(line.starts_with(prefix.as_str()));
    }
  }

  #[test]
  fn json_parses_after_stripping_prefix(record in record(), prefix in "[#/ ]{0,3}", indent in "[ \t]{0,4}") {
    let out = format_json(&record, &prefix, &indent).unwrap();
    let body = out.strip_prefix(prefix.as_str()).unwrap();

    let parsed: BuildRecord = serde_json::from_str(body).unwrap();
    prop_assert_eq!(parsed, record);
  }
}

#[test]
fn empty_string_quotes_to_pair_of_quotes() {
  assert_eq!(quote_if("", true), "\"\"");
}

#[test]
fn dependency_order_is_preserved() {
  let record = BuildRecord::new("rustc 1.85.0", "app", ModuleRef::new("app", "0.1.0"))
    .with_dep(ModuleRef::new("d1", "v1"))
    .with_dep(ModuleRef::new("d2", "v2"))
    .with_dep(ModuleRef::new("d3", "v3"));

  let out = format_text(&record, false, "", "  ");

  let positions: Vec<_> = ["Path: d1", "Path: d2", "Path: d3"]
    .iter()
    .map(|needle| out.find(needle).unwrap())
    .collect();
  assert!(positions.windows(2).all(|w| w[0] < w[1]));
}
