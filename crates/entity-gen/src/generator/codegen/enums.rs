use proc_macro2::TokenStream;
use quote::quote;

use super::{Visibility, inactive_attr, int_literal};
use crate::generator::{
  ast::{EntityClassDef, EnumDef, EnumKind},
  naming::identifiers::to_ident,
};

/// Emits one synthesized enum with its integer conversions.
pub(crate) struct EnumGenerator<'a> {
  def: &'a EnumDef,
  visibility: Visibility,
}

impl<'a> EnumGenerator<'a> {
  pub(crate) fn new(def: &'a EnumDef, visibility: Visibility) -> Self {
    Self { def, visibility }
  }

  pub(crate) fn generate(&self) -> TokenStream {
    let def = self.def;
    let vis = self.visibility.for_types();
    let name = to_ident(&def.name);
    let docs = &def.docs;
    let inactive = inactive_attr(def.status);
    let repr = (!def.variants.is_empty()).then(|| quote! { #[repr(i32)] });

    let idents: Vec<_> = def.variants.iter().map(|variant| to_ident(&variant.name)).collect();
    let values: Vec<_> = def.variants.iter().map(|variant| int_literal(variant.value)).collect();
    let variants = def.variants.iter().zip(&idents).zip(&values).map(|((variant, ident), value)| {
      let variant_docs = &variant.docs;
      quote! {
        #variant_docs
        #ident = #value
      }
    });

    let try_from_arms = idents.iter().zip(&values).map(|(ident, value)| {
      quote! { #value => ::core::result::Result::Ok(Self::#ident), }
    });
    let into_arms = idents.iter().zip(&values).map(|(ident, value)| {
      quote! { #name::#ident => #value, }
    });
    let bool_conversions = self.bool_conversions();

    quote! {
      #inactive
      #docs
      #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
      #repr
      #vis enum #name {
        #(#variants),*
      }

      #inactive
      impl ::core::convert::TryFrom<::core::primitive::i32> for #name {
        type Error = ::core::primitive::i32;

        fn try_from(value: ::core::primitive::i32) -> ::core::result::Result<Self, Self::Error> {
          match value {
            #(#try_from_arms)*
            other => ::core::result::Result::Err(other),
          }
        }
      }

      #inactive
      impl ::core::convert::From<#name> for ::core::primitive::i32 {
        fn from(value: #name) -> Self {
          match value {
            #(#into_arms)*
          }
        }
      }

      #bool_conversions
    }
  }

  /// Two-option enums map `false`/`true` onto the variants valued 0 and 1.
  fn bool_conversions(&self) -> Option<TokenStream> {
    let def = self.def;
    if def.kind != EnumKind::Boolean {
      return None;
    }
    let false_variant = def.variants.iter().find(|variant| variant.value == 0)?;
    let true_variant = def.variants.iter().find(|variant| variant.value == 1)?;

    let name = to_ident(&def.name);
    let false_ident = to_ident(&false_variant.name);
    let true_ident = to_ident(&true_variant.name);
    let inactive = inactive_attr(def.status);

    Some(quote! {
      #inactive
      impl ::core::convert::From<::core::primitive::bool> for #name {
        fn from(value: ::core::primitive::bool) -> Self {
          if value { Self::#true_ident } else { Self::#false_ident }
        }
      }

      #inactive
      impl ::core::convert::From<#name> for ::core::primitive::bool {
        fn from(value: #name) -> Self {
          <::core::primitive::i32 as ::core::convert::From<#name>>::from(value) != 0
        }
      }
    })
  }
}

/// Emits the enum module of one entity. The module exists even when the entity has no enums.
pub(crate) struct EnumModuleGenerator<'a> {
  class: &'a EntityClassDef,
  visibility: Visibility,
}

impl<'a> EnumModuleGenerator<'a> {
  pub(crate) fn new(class: &'a EntityClassDef, visibility: Visibility) -> Self {
    Self { class, visibility }
  }

  pub(crate) fn generate(&self) -> TokenStream {
    let enums = self
      .class
      .enums
      .iter()
      .map(|def| EnumGenerator::new(def, self.visibility).generate());

    quote! {
      #![allow(non_camel_case_types)]

      #(#enums)*
    }
  }
}
