use proc_macro2::TokenStream;
use quote::quote;

use super::{Visibility, inactive_attr, int_literal};
use crate::generator::{
  ast::{AccessorKind, ClassBody, EntityClassDef, ExposedType, MemberDef, MemberOutcome, Placeholder, ScalarType},
  naming::identifiers::{setter_name, to_ident},
};

/// Emits the binding struct of one entity: the struct, its canonical and friendly member blocks,
/// and the `AbstractEntity` plumbing.
///
/// The file imports nothing. Every type is spelled with an absolute path, so a class may be named
/// after any support or std type without shadowing it.
pub(crate) struct EntityGenerator<'a> {
  class: &'a EntityClassDef,
  visibility: Visibility,
}

impl<'a> EntityGenerator<'a> {
  pub(crate) fn new(class: &'a EntityClassDef, visibility: Visibility) -> Self {
    Self { class, visibility }
  }

  pub(crate) fn generate(&self) -> TokenStream {
    let class = self.class;
    let type_vis = self.visibility.for_types();
    let name = to_ident(&class.class_name);
    let docs = &class.docs;

    let fixed_members = self.fixed_members();
    let canonical = self.body_members(&class.canonical);
    let friendly = self.body_members(&class.friendly);
    let abstract_impl = self.abstract_entity_impl();

    quote! {
      #![allow(non_snake_case, non_camel_case_types)]

      #docs
      #[derive(Debug, Clone, PartialEq)]
      #type_vis struct #name {
        entity: ::entity_gen_support::Entity,
      }

      impl ::core::default::Default for #name {
        fn default() -> Self {
          Self::new()
        }
      }

      impl #name {
        #fixed_members

        #(#canonical)*
      }

      impl #name {
        #(#friendly)*
      }

      #abstract_impl

      impl ::core::convert::From<::entity_gen_support::Entity> for #name {
        fn from(entity: ::entity_gen_support::Entity) -> Self {
          Self { entity }
        }
      }

      impl ::core::convert::From<#name> for ::entity_gen_support::Entity {
        fn from(value: #name) -> Self {
          value.entity
        }
      }
    }
  }

  fn fixed_members(&self) -> TokenStream {
    let class = self.class;
    let vis = self.visibility;
    let logical_name = &class.logical_name;
    let primary_name = &class.primary_name_attribute;
    let string = ScalarType::String;
    let type_code = class.type_code.map(|code| {
      let code = int_literal(code);
      quote! { #vis const ENTITY_TYPE_CODE: ::core::primitive::i32 = #code; }
    });

    quote! {
      #vis const ENTITY_LOGICAL_NAME: &'static ::core::primitive::str = #logical_name;
      #type_code

      #vis fn new() -> Self {
        Self {
          entity: ::entity_gen_support::Entity::new(Self::ENTITY_LOGICAL_NAME),
        }
      }

      #vis fn with_id(id: ::entity_gen_support::Uuid) -> Self {
        let mut value = Self::new();
        ::entity_gen_support::AbstractEntity::set_id(&mut value, id);
        value
      }

      /// Value of the primary name attribute.
      #vis fn primary_name(&self) -> ::core::option::Option<#string> {
        self.entity.get_attribute_value::<#string>(#primary_name)
      }
    }
  }

  fn body_members(&self, body: &ClassBody) -> Vec<TokenStream> {
    body
      .members
      .iter()
      .map(|outcome| match outcome {
        MemberOutcome::Member(member) => self.member(member),
        MemberOutcome::Placeholder(placeholder) => placeholder_tokens(placeholder),
      })
      .collect()
  }

  fn member(&self, member: &MemberDef) -> TokenStream {
    let vis = self.visibility;
    let docs = &member.docs;
    let inactive = inactive_attr(member.status);
    let getter = to_ident(&member.name);
    let logical_name = &member.logical_name;
    let shape = member.shape;
    let storage_type = shape.storage;
    let storage = quote! { #storage_type };

    let exposed = match shape.exposed {
      ExposedType::Scalar(scalar) => quote! { #scalar },
      ExposedType::Enum => {
        let module = to_ident(&self.class.module_name);
        quote! { super::enums::#module::#getter }
      }
    };
    let option_code = quote! { ::core::primitive::i32 };

    let read = quote! { self.entity.get_attribute_value::<#storage>(#logical_name) };
    let getter_body = match shape.accessor {
      AccessorKind::Direct | AccessorKind::IdentityMirror | AccessorKind::ReadOnly => read,
      AccessorKind::Cast | AccessorKind::BooleanEnum => {
        let convert = from_path(&exposed, &storage);
        quote! { #read.map(#convert) }
      }
      AccessorKind::ChoiceEnum => quote! {
        #read.and_then(|code| <#exposed as ::core::convert::TryFrom<#option_code>>::try_from(code.value()).ok())
      },
    };

    let getter_fn = quote! {
      #inactive
      #docs
      #vis fn #getter(&self) -> ::core::option::Option<#exposed> {
        #getter_body
      }
    };

    let setter_body = match shape.accessor {
      AccessorKind::ReadOnly => return getter_fn,
      AccessorKind::Direct => quote! { self.entity.set_attribute_value(#logical_name, value); },
      AccessorKind::Cast | AccessorKind::BooleanEnum => {
        let convert = from_path(&storage, &exposed);
        quote! { self.entity.set_attribute_value(#logical_name, value.map(#convert)); }
      }
      AccessorKind::ChoiceEnum => {
        let convert = from_path(&option_code, &exposed);
        let option_set_value = ScalarType::OptionSetValue;
        quote! {
          self.entity.set_attribute_value(#logical_name, value.map(|value| #option_set_value::new(#convert(value))));
        }
      }
      AccessorKind::IdentityMirror => quote! {
        self.entity.set_attribute_value(#logical_name, value);
        self.entity.set_id(value.unwrap_or_default());
      },
    };
    let setter = to_ident(&setter_name(&member.name));

    quote! {
      #getter_fn

      #inactive
      #docs
      #vis fn #setter(&mut self, value: ::core::option::Option<#exposed>) {
        #setter_body
      }
    }
  }

  fn abstract_entity_impl(&self) -> TokenStream {
    let class = self.class;
    let name = to_ident(&class.class_name);
    let logical_name = &class.logical_name;
    let primary_id = &class.primary_id_attribute;
    let primary_name = &class.primary_name_attribute;
    let type_code = match class.type_code {
      Some(code) => {
        let code = int_literal(code);
        quote! { ::core::option::Option::Some(#code) }
      }
      None => quote! { ::core::option::Option::None },
    };

    quote! {
      impl ::entity_gen_support::AbstractEntity for #name {
        const ENTITY_LOGICAL_NAME: &'static ::core::primitive::str = #logical_name;
        const ENTITY_TYPE_CODE: ::core::option::Option<::core::primitive::i32> = #type_code;
        const PRIMARY_ID_ATTRIBUTE: &'static ::core::primitive::str = #primary_id;
        const PRIMARY_NAME_ATTRIBUTE: &'static ::core::primitive::str = #primary_name;

        fn entity(&self) -> &::entity_gen_support::Entity {
          &self.entity
        }

        fn entity_mut(&mut self) -> &mut ::entity_gen_support::Entity {
          &mut self.entity
        }
      }
    }
  }
}

/// `From` conversion spelled through the trait, so it resolves even when a local type shadows a
/// prelude name.
fn from_path(target: &TokenStream, source: &TokenStream) -> TokenStream {
  quote! { <#target as ::core::convert::From<#source>>::from }
}

fn placeholder_tokens(placeholder: &Placeholder) -> TokenStream {
  let message = &placeholder.message;
  quote! {
    ::entity_gen_support::unsupported_attribute!(#message);
  }
}
