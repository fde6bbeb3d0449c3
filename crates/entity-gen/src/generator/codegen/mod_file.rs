use proc_macro2::TokenStream;
use quote::quote;

use super::Visibility;
use crate::generator::{
  ast::{ContextDef, EntityClassDef},
  naming::identifiers::to_ident,
};

/// Emits the three `mod.rs` files tying the generated tree together.
pub(crate) struct ModFileGenerator<'a> {
  classes: &'a [EntityClassDef],
  visibility: Visibility,
}

impl<'a> ModFileGenerator<'a> {
  pub(crate) fn new(classes: &'a [EntityClassDef], visibility: Visibility) -> Self {
    Self { classes, visibility }
  }

  /// `mod.rs` at the output root.
  pub(crate) fn root(&self, context: &ContextDef) -> TokenStream {
    let vis = self.visibility.for_types();
    let context_ident = to_ident(&context.name);
    quote! {
      #vis mod entity;
      #vis mod service_context;

      #vis use service_context::#context_ident;
    }
  }

  /// `entity/mod.rs`: the enum module plus one module per entity.
  pub(crate) fn entity(&self) -> TokenStream {
    let vis = self.visibility.for_types();
    let modules = self.module_decls();
    quote! {
      #vis mod enums;
      #(#modules)*
    }
  }

  /// `entity/enums/mod.rs`.
  pub(crate) fn enums(&self) -> TokenStream {
    let modules = self.module_decls();
    quote! {
      #(#modules)*
    }
  }

  fn module_decls(&self) -> Vec<TokenStream> {
    let vis = self.visibility.for_types();
    self
      .classes
      .iter()
      .map(|class| {
        let module = to_ident(&class.module_name);
        quote! { #vis mod #module; }
      })
      .collect()
  }
}
