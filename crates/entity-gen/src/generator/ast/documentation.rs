use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

/// Doc comment lines attached to a generated item. Each line becomes one `#[doc = "..."]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Documentation {
  lines: Vec<String>,
}

impl Documentation {
  #[must_use]
  pub fn from_lines(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
    Self {
      lines: lines.into_iter().map(Into::into).collect(),
    }
  }

  #[cfg(test)]
  #[must_use]
  pub fn lines(&self) -> &[String] {
    &self.lines
  }

  /// Appends a blank separator line followed by `text`, one doc line per source line.
  /// Blank `text` is ignored.
  pub fn push_paragraph(&mut self, text: &str) {
    let text = text.trim();
    if text.is_empty() {
      return;
    }
    if !self.lines.is_empty() {
      self.lines.push(String::new());
    }
    self.lines.extend(text.lines().map(|line| line.trim_end().to_string()));
  }
}

impl ToTokens for Documentation {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    if self.lines.is_empty() {
      return;
    }
    // rustdoc expects a leading space after `///`.
    let doc_lines: Vec<TokenStream> = self
      .lines
      .iter()
      .map(|line| {
        let line = if line.is_empty() { String::new() } else { format!(" {line}") };
        quote! { #[doc = #line] }
      })
      .collect();
    quote! { #(#doc_lines)* }.to_tokens(tokens);
  }
}

impl<S: Into<String>> FromIterator<S> for Documentation {
  fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
    Self::from_lines(iter)
  }
}

#[cfg(test)]
mod tests {
  use quote::quote;

  use super::*;

  #[test]
  fn empty_documentation_produces_no_tokens() {
    let doc = Documentation::default();
    let tokens = quote! { #doc };
    assert!(tokens.is_empty());
  }

  #[test]
  fn lines_get_leading_space() {
    let doc = Documentation::from_lines(["Line 1", "", "Line 2"]);
    let tokens = quote! { #doc };
    let expected = quote! {
      #[doc = " Line 1"]
      #[doc = ""]
      #[doc = " Line 2"]
    };
    assert_eq!(tokens.to_string(), expected.to_string());
  }

  #[test]
  fn push_paragraph_separates_blocks() {
    let mut doc = Documentation::from_lines(["Account Name (name)"]);
    doc.push_paragraph("  First line\nSecond line  ");
    doc.push_paragraph("   ");
    assert_eq!(doc.lines(), &["Account Name (name)", "", "First line", "Second line"]);
  }

  #[test]
  fn push_paragraph_on_empty_has_no_separator() {
    let mut doc = Documentation::default();
    doc.push_paragraph("Only");
    assert_eq!(doc.lines(), &["Only"]);
  }
}
