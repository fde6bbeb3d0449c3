pub(crate) mod context;
pub(crate) mod entities;
pub(crate) mod enums;
pub(crate) mod mod_file;

use proc_macro2::{Literal, TokenStream};
use quote::{ToTokens, quote};
use strum::{Display, EnumString};

use crate::generator::ast::ClaimStatus;

#[cfg(test)]
mod tests;

/// Visibility of every generated item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Visibility {
  #[default]
  Public,
  Crate,
  File,
}

impl Visibility {
  /// Visibility for types and modules. Generated files reference each other's types, so `file`
  /// widens to `crate` here and only narrows members.
  #[must_use]
  pub const fn for_types(self) -> Self {
    match self {
      Self::File => Self::Crate,
      other => other,
    }
  }
}

impl ToTokens for Visibility {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let vis = match self {
      Self::Public => quote! { pub },
      Self::Crate => quote! { pub(crate) },
      Self::File => quote! {},
    };
    vis.to_tokens(tokens);
  }
}

/// Marks a suppressed declaration inactive while keeping it in the source.
pub(crate) fn inactive_attr(status: ClaimStatus) -> TokenStream {
  if status.is_suppressed() {
    quote! { #[cfg(any())] }
  } else {
    quote! {}
  }
}

/// Integer literal without a type suffix; negative values become a negation expression.
pub(crate) fn int_literal(value: i32) -> TokenStream {
  let magnitude = Literal::u32_unsuffixed(value.unsigned_abs());
  if value < 0 {
    quote! { -#magnitude }
  } else {
    quote! { #magnitude }
  }
}

/// Parses and pretty-prints a generated file.
pub(crate) fn format_tokens(tokens: TokenStream) -> anyhow::Result<String> {
  let syntax_tree: syn::File = syn::parse2(tokens)?;
  Ok(prettyplease::unparse(&syntax_tree))
}
