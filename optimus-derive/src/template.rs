//! Implementation of the `#[derive(Template)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, GenericParam, parse_macro_input};

/// Main implementation of the `Template` derive macro.
pub fn derive_template_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let expanded = generate_template(&input).unwrap_or_else(syn::Error::into_compile_error);
    TokenStream::from(expanded)
}

fn generate_template(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let generics = &input.generics;

    if let Some(where_clause) = &generics.where_clause {
        return Err(syn::Error::new_spanned(
            where_clause,
            "Template cannot be derived for types with a where clause.",
        ));
    }

    let mut params = generics.params.iter();
    let parameter = match (params.next(), params.next()) {
        (Some(GenericParam::Type(parameter)), None) => parameter,
        (Some(GenericParam::Type(_)), Some(extra)) | (Some(extra), _) => {
            return Err(syn::Error::new_spanned(
                extra,
                "Template requires exactly one type parameter and no other generic parameters.",
            ));
        }
        (None, _) => {
            return Err(syn::Error::new_spanned(
                name,
                "Template requires exactly one type parameter.",
            ));
        }
    };

    if !parameter.bounds.is_empty() {
        return Err(syn::Error::new_spanned(
            &parameter.bounds,
            "The type parameter of a Template must be unbounded.",
        ));
    }

    let ident = &parameter.ident;
    Ok(quote! {
        impl<#ident> ::optimus::function::Template for #name<#ident> {
            type Instance<__OptimusInstance> = #name<__OptimusInstance>;
        }
    })
}
