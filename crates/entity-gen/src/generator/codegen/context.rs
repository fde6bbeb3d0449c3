use proc_macro2::TokenStream;
use quote::quote;

use super::{Visibility, inactive_attr};
use crate::generator::{ast::ContextDef, naming::identifiers::to_ident};

/// Emits the `ServiceContext` aggregate with one query accessor per entity.
pub(crate) struct ContextGenerator<'a> {
  def: &'a ContextDef,
  visibility: Visibility,
}

impl<'a> ContextGenerator<'a> {
  pub(crate) fn new(def: &'a ContextDef, visibility: Visibility) -> Self {
    Self { def, visibility }
  }

  pub(crate) fn generate(&self) -> TokenStream {
    let vis = self.visibility;
    let type_vis = vis.for_types();
    let name = to_ident(&self.def.name);

    let accessors = self.def.collections.iter().map(|collection| {
      let inactive = inactive_attr(collection.status);
      let docs = &collection.docs;
      let accessor = to_ident(&collection.name);
      let module = to_ident(&collection.module_name);
      let class = to_ident(&collection.class_name);
      quote! {
        #inactive
        #docs
        #vis fn #accessor(&self) -> Query<super::entity::#module::#class> {
          self.inner.create_query()
        }
      }
    });

    quote! {
      #![allow(non_snake_case)]

      use std::{ops::Deref, sync::Arc};

      use entity_gen_support::{OrganizationService, Query};

      /// Typed entry point over an organization service: one query per generated entity.
      #[derive(Debug, Clone)]
      #type_vis struct #name {
        inner: entity_gen_support::context::ServiceContext,
      }

      impl #name {
        #type_vis fn new(service: Arc<dyn OrganizationService>) -> Self {
          Self {
            inner: entity_gen_support::context::ServiceContext::new(service),
          }
        }

        #(#accessors)*
      }

      impl Deref for #name {
        type Target = entity_gen_support::context::ServiceContext;

        fn deref(&self) -> &Self::Target {
          &self.inner
        }
      }
    }
  }
}
