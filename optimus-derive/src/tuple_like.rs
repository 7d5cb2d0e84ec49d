//! Implementation of the `#[derive(TupleLike)]` macro.

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{
    Data, DeriveInput, Fields, GenericParam, Generics, Ident, Index, Lifetime, LifetimeParam,
    Member, Type, parse_macro_input, parse_quote,
};

/// Main implementation of the `TupleLike` derive macro.
pub fn derive_tuple_like_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match &input.data {
        Data::Struct(data_struct) => {
            generate_tuple_like(&input.ident, &input.generics, &data_struct.fields)
        }
        Data::Enum(_) => syn::Error::new_spanned(
            &input.ident,
            "TupleLike can only be derived for structs, not enums.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "TupleLike cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

/// One struct field seen as a tuple element.
struct Element<'a> {
    member: Member,
    ty: &'a Type,
    binding: Ident,
    index: TokenStream2,
}

fn collect_elements(fields: &Fields) -> Vec<Element<'_>> {
    fields
        .iter()
        .enumerate()
        .map(|(position, field)| {
            let member = field.ident.clone().map_or_else(
                || Member::Unnamed(Index::from(position)),
                Member::Named,
            );
            let index = format_ident!("U{}", position);
            Element {
                member,
                ty: &field.ty,
                binding: format_ident!("__field{}", position),
                index: quote!(::optimus::typenum::consts::#index),
            }
        })
        .collect()
}

/// `Cons<A, Cons<B, Nil>>` for the given element types.
fn cons_type(types: impl DoubleEndedIterator<Item = TokenStream2>) -> TokenStream2 {
    types.rev().fold(quote!(::optimus::tuple::Nil), |tail, head| {
        quote!(::optimus::tuple::Cons<#head, #tail>)
    })
}

/// `Cons { head: a, tail: Cons { head: b, tail: Nil } }`, as an expression
/// or a pattern.
fn cons_value(values: impl DoubleEndedIterator<Item = TokenStream2>) -> TokenStream2 {
    values.rev().fold(quote!(::optimus::tuple::Nil), |tail, head| {
        quote!(::optimus::tuple::Cons { head: #head, tail: #tail })
    })
}

fn with_params(generics: &Generics, params: impl IntoIterator<Item = GenericParam>) -> Generics {
    let mut extended = generics.clone();
    let mut prefix: Vec<GenericParam> = params.into_iter().collect();
    // Lifetimes go first.
    prefix.extend(extended.params.iter().cloned());
    prefix.sort_by_key(|param| !matches!(param, GenericParam::Lifetime(_)));
    extended.params = prefix.into_iter().collect();
    extended
}

fn generate_tuple_like(name: &Ident, generics: &Generics, fields: &Fields) -> TokenStream2 {
    let elements = collect_elements(fields);
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();
    let self_type = quote!(#name #type_generics);

    let lifetime = Lifetime::new("'__optimus", Span::call_site());
    let borrowed_generics = with_params(
        generics,
        [GenericParam::Lifetime(LifetimeParam::new(lifetime.clone()))],
    );
    let (borrowed_impl_generics, _, _) = borrowed_generics.split_for_impl();

    let length = format_ident!("U{}", elements.len());
    let size_impl = quote! {
        impl #impl_generics ::optimus::tuple::TupleSize for #self_type #where_clause {
            type Len = ::optimus::typenum::consts::#length;
        }
    };

    let get_impls = elements.iter().map(|element| {
        let Element {
            member, ty, index, ..
        } = element;
        quote! {
            impl #impl_generics ::optimus::tuple::TupleGet<#index> for #self_type #where_clause {
                type Output = #ty;

                #[inline]
                fn get(self) -> Self::Output {
                    self.#member
                }
            }

            impl #borrowed_impl_generics ::optimus::tuple::TupleGet<#index>
                for &#lifetime #self_type #where_clause
            {
                type Output = &#lifetime #ty;

                #[inline]
                fn get(self) -> Self::Output {
                    &self.#member
                }
            }

            impl #borrowed_impl_generics ::optimus::tuple::TupleGet<#index>
                for &#lifetime mut #self_type #where_clause
            {
                type Output = &#lifetime mut #ty;

                #[inline]
                fn get(self) -> Self::Output {
                    &mut self.#member
                }
            }
        }
    });

    let types: Vec<&Type> = elements.iter().map(|element| element.ty).collect();
    let members: Vec<&Member> = elements.iter().map(|element| &element.member).collect();
    let bindings: Vec<&Ident> = elements.iter().map(|element| &element.binding).collect();

    let list_type = cons_type(types.iter().map(|ty| quote!(#ty)));
    let list_value = cons_value(members.iter().map(|member| quote!(value.#member)));
    let list_pattern = cons_value(bindings.iter().map(|binding| quote!(#binding)));
    let construct = match fields {
        Fields::Named(_) => quote!(Self { #(#members: #bindings),* }),
        Fields::Unnamed(_) => quote!(Self(#(#bindings),*)),
        Fields::Unit => quote!(Self),
    };

    let conversion_impls = quote! {
        impl #impl_generics ::core::convert::From<#self_type> for #list_type #where_clause {
            #[inline]
            #[allow(unused_variables)]
            fn from(value: #self_type) -> Self {
                #list_value
            }
        }

        impl #impl_generics ::core::convert::From<#list_type> for #self_type #where_clause {
            #[inline]
            fn from(list: #list_type) -> Self {
                let #list_pattern = list;
                #construct
            }
        }
    };

    let native_impls = quote! {
        impl #impl_generics ::optimus::tuple::IntoNative for #self_type #where_clause {
            type Native = (#(#types,)*);

            #[inline]
            fn into_native(self) -> Self::Native {
                (#(self.#members,)*)
            }
        }

        impl #borrowed_impl_generics ::optimus::tuple::IntoNative
            for &#lifetime #self_type #where_clause
        {
            type Native = (#(&#lifetime #types,)*);

            #[inline]
            fn into_native(self) -> Self::Native {
                (#(&self.#members,)*)
            }
        }

        impl #borrowed_impl_generics ::optimus::tuple::IntoNative
            for &#lifetime mut #self_type #where_clause
        {
            type Native = (#(&#lifetime mut #types,)*);

            #[inline]
            fn into_native(self) -> Self::Native {
                (#(&mut self.#members,)*)
            }
        }
    };

    let unpack_generics = with_params(
        generics,
        [parse_quote!(__OptimusFunc), parse_quote!(__OptimusOut)],
    );
    let (unpack_impl_generics, _, _) = unpack_generics.split_for_impl();
    let borrowed_unpack_generics = with_params(
        &unpack_generics,
        [GenericParam::Lifetime(LifetimeParam::new(lifetime.clone()))],
    );
    let (borrowed_unpack_impl_generics, _, _) = borrowed_unpack_generics.split_for_impl();
    let unpack_where = |arguments: TokenStream2| {
        let predicates = where_clause.map(|clause| {
            let predicates = clause.predicates.iter();
            quote!(#(#predicates,)*)
        });
        quote! {
            where
                #predicates
                __OptimusFunc: ::core::ops::FnOnce(#arguments) -> __OptimusOut
        }
    };
    let owned_where = unpack_where(quote!(#(#types),*));
    let shared_where = unpack_where(quote!(#(&#lifetime #types),*));
    let mutable_where = unpack_where(quote!(#(&#lifetime mut #types),*));

    let unpack_impls = quote! {
        impl #unpack_impl_generics ::optimus::tuple::Unpack<__OptimusFunc> for #self_type
        #owned_where
        {
            type Output = __OptimusOut;

            #[inline]
            fn unpack(self, function: __OptimusFunc) -> __OptimusOut {
                function(#(self.#members),*)
            }
        }

        impl #borrowed_unpack_impl_generics ::optimus::tuple::Unpack<__OptimusFunc>
            for &#lifetime #self_type
        #shared_where
        {
            type Output = __OptimusOut;

            #[inline]
            fn unpack(self, function: __OptimusFunc) -> __OptimusOut {
                function(#(&self.#members),*)
            }
        }

        impl #borrowed_unpack_impl_generics ::optimus::tuple::Unpack<__OptimusFunc>
            for &#lifetime mut #self_type
        #mutable_where
        {
            type Output = __OptimusOut;

            #[inline]
            fn unpack(self, function: __OptimusFunc) -> __OptimusOut {
                function(#(&mut self.#members),*)
            }
        }
    };

    quote! {
        #size_impl
        #(#get_impls)*
        #conversion_impls
        #native_impls
        #unpack_impls
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_cons_type_nests_in_order() {
        let ty = cons_type([quote!(u8), quote!(char)].into_iter());
        let expected = quote!(
            ::optimus::tuple::Cons<u8, ::optimus::tuple::Cons<char, ::optimus::tuple::Nil> >
        );
        assert_eq!(
            ty.to_string().replace(' ', ""),
            expected.to_string().replace(' ', "")
        );
    }

    #[rstest]
    fn test_cons_value_of_nothing_is_nil() {
        let value = cons_value(std::iter::empty());
        assert_eq!(value.to_string(), quote!(::optimus::tuple::Nil).to_string());
    }

    #[rstest]
    fn test_elements_use_field_order() {
        let input: DeriveInput = parse_quote! {
            struct Point { x: i32, y: i64 }
        };
        let Data::Struct(data) = &input.data else {
            panic!("expected a struct");
        };
        let elements = collect_elements(&data.fields);
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[1].binding, "__field1");
        assert!(elements[1].index.to_string().ends_with("U1"));
    }

    #[rstest]
    fn test_lifetimes_stay_in_front() {
        let generics: Generics = parse_quote!(<'a, T>);
        let lifetime: GenericParam = parse_quote!('__optimus);
        let extended = with_params(&generics, [lifetime]);
        let rendered: Vec<String> = extended
            .params
            .iter()
            .map(|param| quote!(#param).to_string())
            .collect();
        assert_eq!(rendered, vec!["'__optimus", "'a", "T"]);
    }
}
