extern crate proc_macro;

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::*;

mod field_attributes;
use field_attributes::FieldBehavior;

static WHITTLE_ATTRIBUTE_NAME: &str = "whittle";

#[proc_macro_derive(Reduce, attributes(whittle))]
pub fn derive_reduce(tokens: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = syn::parse_macro_input!(tokens as DeriveInput);
    expand_derive_reduce(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_derive_reduce(input: DeriveInput) -> Result<TokenStream> {
    let fields_ident = fields_ident();

    let body = match &input.data {
        Data::Struct(data) => gen_struct_body(&data.fields)?,
        Data::Enum(data) => gen_enum_body(data)?,
        Data::Union(_) => {
            return Err(Error::new_spanned(
                &input,
                "cannot `derive(Reduce)` on a union",
            ))
        }
    };

    let name = &input.ident;
    let (impl_generics, ty_generics, _) = input.generics.split_for_impl();
    let where_clause = gen_where_clause(&input)?;

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics whittle::Reduce for #name #ty_generics #where_clause {
            fn reduce(&self) -> whittle::Reduction<Self> {
                #[allow(unused_mut)]
                let mut #fields_ident = whittle::reduce::Fields::new();
                #body
            }
        }
    })
}

/// The local holding the in-progress `whittle::reduce::Fields` round.
fn fields_ident() -> Ident {
    Ident::new("__whittle_fields", Span::call_site())
}

fn binding_ident(i: usize) -> Ident {
    Ident::new(&format!("__whittle_field_{i}"), Span::call_site())
}

/// A destructuring pattern for a struct or variant, and the expression that
/// rebuilds it from its reduced fields.
struct Shape {
    pattern: TokenStream,
    rebuild: TokenStream,
}

fn gen_shape(path: TokenStream, fields: &Fields) -> Result<Shape> {
    let fields_ident = fields_ident();

    let mut bindings = vec![];
    let mut exprs = vec![];
    for (i, f) in fields.iter().enumerate() {
        let binding = binding_ident(i);
        exprs.push(match FieldBehavior::for_field(f)? {
            FieldBehavior::Reduce => quote! { #fields_ident.field(#binding) },
            FieldBehavior::Ignore => quote! { ::core::clone::Clone::clone(#binding) },
        });
        bindings.push(binding);
    }

    Ok(match fields {
        Fields::Named(named) => {
            let idents = named.named.iter().map(|f| &f.ident).collect::<Vec<_>>();
            Shape {
                pattern: quote! { #path { #( #idents: #bindings ),* } },
                rebuild: quote! { #path { #( #idents: #exprs ),* } },
            }
        }
        Fields::Unnamed(_) => Shape {
            pattern: quote! { #path( #( #bindings ),* ) },
            rebuild: quote! { #path( #( #exprs ),* ) },
        },
        Fields::Unit => Shape {
            pattern: quote! { #path },
            rebuild: quote! { #path },
        },
    })
}

fn gen_struct_body(fields: &Fields) -> Result<TokenStream> {
    let fields_ident = fields_ident();
    let Shape { pattern, rebuild } = gen_shape(quote! { Self }, fields)?;
    Ok(quote! {
        let #pattern = self;
        let value = #rebuild;
        #fields_ident.finish(value)
    })
}

fn gen_enum_body(data: &DataEnum) -> Result<TokenStream> {
    if data.variants.is_empty() {
        return Ok(quote! { match *self {} });
    }

    let fields_ident = fields_ident();
    let arms = data
        .variants
        .iter()
        .map(|v| {
            let variant = &v.ident;
            let Shape { pattern, rebuild } = gen_shape(quote! { Self::#variant }, &v.fields)?;
            Ok(quote! {
                #pattern => {
                    let value = #rebuild;
                    #fields_ident.finish(value)
                }
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(quote! {
        match self {
            #( #arms )*
        }
    })
}

/// The type's own bounds, plus `whittle::Arg` for every reduced field's type
/// and `Clone` for every ignored field's type.
fn gen_where_clause(input: &DeriveInput) -> Result<TokenStream> {
    let mut bounds = vec![];

    if let Some(wc) = &input.generics.where_clause {
        for bound in wc.predicates.iter() {
            bounds.push(quote! { #bound });
        }
    }

    let all_fields: Vec<&Field> = match &input.data {
        Data::Struct(data) => data.fields.iter().collect(),
        Data::Enum(data) => data.variants.iter().flat_map(|v| v.fields.iter()).collect(),
        Data::Union(_) => vec![],
    };

    for f in all_fields {
        let ty = &f.ty;
        bounds.push(match FieldBehavior::for_field(f)? {
            FieldBehavior::Reduce => quote! { #ty: whittle::Arg },
            FieldBehavior::Ignore => quote! { #ty: ::core::clone::Clone },
        });
    }

    if bounds.is_empty() {
        Ok(quote! {})
    } else {
        Ok(quote! { where #( #bounds ),* })
    }
}
