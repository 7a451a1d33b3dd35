use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::{format_ident, quote};
use syn::{
    Attribute, Data, DataEnum, DataStruct, DeriveInput, Fields, Generics, Ident, Index, Member,
    parse_macro_input, parse_quote, spanned::Spanned,
};

const INT_REPRS: &[&str] = &[
    "u8", "u16", "u32", "u64", "u128", "usize", "i8", "i16", "i32", "i64", "i128", "isize",
];

/// Derives `hashmix::GetHash`.
///
/// - structs and enums with data fold their fields like `hash_all!`;
///   `#[get_hash(skip)]` leaves a field out.
/// - field-less enums hash as their `#[repr]` integer (`isize` by default).
/// - `#[get_hash(std)]` on the type hashes it through `std::hash::Hash`.
#[proc_macro_derive(GetHash, attributes(get_hash))]
pub fn derive_get_hash(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Strategy {
    Std,
    Fields,
}

fn expand(input: DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let span = input.span();
    let strategy = container_strategy(&input.attrs)?;
    let ident = &input.ident;

    match (&input.data, strategy) {
        (Data::Union(_), _) => Err(syn::Error::new(
            span,
            "#[derive(GetHash)] does not support unions",
        )),
        (_, Strategy::Std) => Ok(expand_std(ident, &input.generics)),
        (Data::Struct(data), Strategy::Fields) => expand_struct(ident, &input.generics, data),
        (Data::Enum(data), Strategy::Fields) if is_field_less(data) => {
            let repr = repr_type(&input.attrs)?.unwrap_or_else(|| format_ident!("isize"));
            Ok(expand_enumerated(ident, &input.generics, data, &repr))
        }
        (Data::Enum(data), Strategy::Fields) => expand_enum(ident, &input.generics, data),
    }
}

fn expand_std(ident: &Ident, generics: &Generics) -> proc_macro2::TokenStream {
    let mut generics = generics.clone();
    generics
        .make_where_clause()
        .predicates
        .push(parse_quote!(Self: ::core::hash::Hash));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics ::hashmix::GetHash for #ident #ty_generics #where_clause {
            #[inline]
            fn get_hash(&self) -> ::hashmix::HashValue {
                ::hashmix::std_hash(self)
            }
        }
    }
}

fn expand_struct(
    ident: &Ident,
    generics: &Generics,
    data: &DataStruct,
) -> syn::Result<proc_macro2::TokenStream> {
    let generics = with_get_hash_bounds(generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let mut values = Vec::new();
    for (idx, field) in data.fields.iter().enumerate() {
        if is_skipped(&field.attrs)? {
            continue;
        }
        let member = match &field.ident {
            Some(name) => Member::Named(name.clone()),
            None => Member::Unnamed(Index::from(idx)),
        };
        values.push(quote! { self.#member });
    }
    let body = fold_hashes(&values);

    Ok(quote! {
        impl #impl_generics ::hashmix::GetHash for #ident #ty_generics #where_clause {
            fn get_hash(&self) -> ::hashmix::HashValue {
                #body
            }
        }
    })
}

fn expand_enumerated(
    ident: &Ident,
    generics: &Generics,
    data: &DataEnum,
    repr: &Ident,
) -> proc_macro2::TokenStream {
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let arms = data.variants.iter().map(|variant| {
        let variant_ident = &variant.ident;
        quote! { Self::#variant_ident => Self::#variant_ident as #repr }
    });

    quote! {
        impl #impl_generics ::hashmix::Enumerated for #ident #ty_generics #where_clause {
            type Repr = #repr;

            #[inline]
            fn to_repr(&self) -> #repr {
                match self {
                    #(#arms,)*
                }
            }
        }

        impl #impl_generics ::hashmix::GetHash for #ident #ty_generics #where_clause {
            #[inline]
            fn get_hash(&self) -> ::hashmix::HashValue {
                ::hashmix::enum_hash(self)
            }
        }
    }
}

fn expand_enum(
    ident: &Ident,
    generics: &Generics,
    data: &DataEnum,
) -> syn::Result<proc_macro2::TokenStream> {
    let generics = with_get_hash_bounds(generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    if data.variants.is_empty() {
        return Ok(quote! {
            impl #impl_generics ::hashmix::GetHash for #ident #ty_generics #where_clause {
                fn get_hash(&self) -> ::hashmix::HashValue {
                    match *self {}
                }
            }
        });
    }

    let mut arms = Vec::new();
    for (idx, variant) in data.variants.iter().enumerate() {
        let variant_ident = &variant.ident;
        // The variant index leads the fold so unit variants still differ.
        let index = idx as u64;
        let mut bindings = vec![quote! { #index }];

        let pattern = match &variant.fields {
            Fields::Named(named) => {
                let mut pats = Vec::new();
                for (pos, field) in named.named.iter().enumerate() {
                    if let Some(name) = &field.ident
                        && !is_skipped(&field.attrs)?
                    {
                        let binding = field_binding(pos);
                        pats.push(quote! { #name: #binding });
                        bindings.push(quote! { #binding });
                    }
                }
                quote! { Self::#variant_ident { #(#pats,)* .. } }
            }
            Fields::Unnamed(unnamed) => {
                let mut pats = Vec::new();
                for (pos, field) in unnamed.unnamed.iter().enumerate() {
                    if is_skipped(&field.attrs)? {
                        pats.push(quote! { _ });
                    } else {
                        let binding = field_binding(pos);
                        pats.push(quote! { #binding });
                        bindings.push(quote! { #binding });
                    }
                }
                quote! { Self::#variant_ident(#(#pats),*) }
            }
            Fields::Unit => quote! { Self::#variant_ident },
        };

        let body = fold_hashes(&bindings);
        arms.push(quote! {
            #pattern => { #body }
        });
    }

    Ok(quote! {
        impl #impl_generics ::hashmix::GetHash for #ident #ty_generics #where_clause {
            fn get_hash(&self) -> ::hashmix::HashValue {
                match self {
                    #(#arms,)*
                }
            }
        }
    })
}

/// Folds `values` the way tuples do: the first hash seeds the accumulator and
/// each later one is mixed in as `hash_combine(value, acc)`. Unrolled so field
/// counts are not capped by the tuple impls.
fn fold_hashes(values: &[proc_macro2::TokenStream]) -> proc_macro2::TokenStream {
    let Some((first, rest)) = values.split_first() else {
        return quote! { 0 };
    };
    let acc = Ident::new("__hash", Span::mixed_site());
    quote! {
        let #acc = ::hashmix::GetHash::get_hash(&#first);
        #(
            let #acc = ::hashmix::hash_combine(::hashmix::GetHash::get_hash(&#rest), #acc);
        )*
        #acc
    }
}

// Mixed-site so field names in the user's type never shadow the bindings.
fn field_binding(pos: usize) -> Ident {
    format_ident!("__field{}", pos, span = Span::mixed_site())
}

fn is_field_less(data: &DataEnum) -> bool {
    !data.variants.is_empty()
        && data
            .variants
            .iter()
            .all(|variant| matches!(variant.fields, Fields::Unit))
}

fn with_get_hash_bounds(generics: &Generics) -> Generics {
    let mut generics = generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!(::hashmix::GetHash));
    }
    generics
}

fn container_strategy(attrs: &[Attribute]) -> syn::Result<Strategy> {
    let mut strategy = Strategy::Fields;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("get_hash")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("std") {
                strategy = Strategy::Std;
                Ok(())
            } else {
                Err(meta.error("unsupported get_hash attribute, expected `std`"))
            }
        })?;
    }
    Ok(strategy)
}

fn is_skipped(attrs: &[Attribute]) -> syn::Result<bool> {
    let mut skip = false;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("get_hash")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else {
                Err(meta.error("unsupported get_hash attribute, expected `skip`"))
            }
        })?;
    }
    Ok(skip)
}

fn repr_type(attrs: &[Attribute]) -> syn::Result<Option<Ident>> {
    let mut repr = None;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("repr")) {
        attr.parse_nested_meta(|meta| {
            if let Some(ident) = meta.path.get_ident()
                && INT_REPRS.contains(&ident.to_string().as_str())
            {
                repr = Some(ident.clone());
            } else if meta.input.peek(syn::token::Paren) {
                // align(N), packed(N)
                let _args;
                syn::parenthesized!(_args in meta.input);
            }
            Ok(())
        })?;
    }
    Ok(repr)
}
