//! Attribute helpers for the optional Python bindings of `rental`.
//!
//! PyO3 does not support its method attributes behind conditional clauses
//! (<https://github.com/PyO3/pyo3/issues/780>). When the header of a block like `pymethods` is
//! behind a `cfg_attr`, the nested attributes (like `new`) are not seen. [`py_attr()`] moves the
//! nested attribute onto every method so the whole block can stay conditional.

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{
    parse::Parser, parse_macro_input, punctuated::Punctuated, Attribute, Error, ImplItem,
    ItemImpl, Meta, Token,
};

/// Mark an `impl` block as `pymethods` and give each of its methods the remaining attributes.
///
/// The first argument must be `pymethods`, the rest are attached to every function in the block,
/// in order:
///
/// ```rust,ignore
/// #[pymethods]
/// impl Date {
///     #[new]
///     pub fn new(day: u8, month: u8, year: i32) -> Self { todo!() }
/// }
///
/// // can be conditionally written like so:
///
/// #[cfg_attr(feature = "py", py_attr(pymethods, new))]
/// impl Date {
///     pub fn new(day: u8, month: u8, year: i32) -> Self { todo!() }
/// }
/// ```
///
/// Methods that already carry one of the given attributes are left as they are.
#[proc_macro_attribute]
pub fn py_attr(args: TokenStream, tokens: TokenStream) -> TokenStream {
    let metas = match Punctuated::<Meta, Token![,]>::parse_terminated.parse(args) {
        Ok(v) => v,
        Err(e) => return e.to_compile_error().into(),
    };

    let mut metas = metas.into_iter();
    let parent = match metas.next() {
        Some(v) if v.path().is_ident("pymethods") => v,
        Some(v) => {
            return Error::new_spanned(v, "only `pymethods` is supported as the parent")
                .to_compile_error()
                .into();
        }
        None => {
            return Error::new(Span::call_site(), "expected `pymethods` and method attributes")
                .to_compile_error()
                .into();
        }
    };
    let nested: Vec<Meta> = metas.collect();

    let mut item_impl = parse_macro_input!(tokens as ItemImpl);
    for item in item_impl.items.iter_mut() {
        let ImplItem::Fn(func) = item else {
            continue;
        };
        for meta in nested.iter() {
            let present = func.attrs.iter().any(|a| a.path() == meta.path());
            if present {
                continue;
            }
            func.attrs.push(Attribute {
                pound_token: Default::default(),
                style: syn::AttrStyle::Outer,
                bracket_token: Default::default(),
                meta: meta.clone(),
            });
        }
    }

    quote! {
        #[#parent]
        #item_impl
    }
    .into()
}
