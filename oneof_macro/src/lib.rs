//! Macro `#[define_oneof]` for defining named variant types.
//!
//! See [`oneof` crate](https://docs.rs/oneof).

use std::collections::HashSet;

use convert_case::{Case, Casing};
use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote, quote_spanned};
use syn::spanned::Spanned;
use syn::visit::Visit;
use syn::{Attribute, Data, DeriveInput, Fields, Ident, PathSegment, Type, Visibility};

/// Macro for defining a named variant type from an `enum`-like declaration.
///
/// Each variant of the enum becomes one alternative. A tuple variant with a
/// single field contributes its field type; a unit variant contributes
/// `oneof::Monostate`. Types may repeat.
///
/// # Examples
///
/// ```
/// use oneof::prelude::*;
///
/// #[define_oneof]
/// /// A token of a small expression language.
/// pub enum Token {
///     Number(i64),
///     /// Not a number.
///     Ident(String),
///     Punct(char),
///     Space(char),
///     Eof,
/// }
///
/// # fn main() {
/// let t: Token = token::ident(String::from("x"));
/// assert_eq!(t.index(), token::IDENT);
/// assert!(t.holds_at::<token::index::Ident>());
///
/// // `Punct` and `Space` both hold a `char`; positions tell them apart.
/// let p = token::punct('+');
/// let s = token::space(' ');
/// assert!(p.try_get_at::<token::index::Space>().is_none());
/// assert_eq!(s.get_at::<token::index::Space>(), Ok(&' '));
///
/// let mut describe = token::Match {
///     number: |n: &i64| format!("number {}", n),
///     ident: |s: &String| format!("ident {}", s),
///     punct: |c: &char| format!("punct {}", c),
///     space: |_: &char| String::from("space"),
///     eof: || String::from("eof"),
/// };
/// assert_eq!(p.visit(&mut describe).unwrap(), "punct +");
/// assert_eq!(token::eof().visit(&mut describe).unwrap(), "eof");
/// # }
/// ```
///
/// # Generated API
///
/// See crate [`oneof_example`](https://docs.rs/oneof_example) for an example of the generated code.
///
/// For an enum `MyType`, the following is generated:
///
/// * A type alias `MyType = oneof::Variant<my_type::Alternatives>`, carrying
///   the enum's doc comments.
/// * A module `my_type` (the snake-case version of the enum name), containing:
///   * a type `Alternatives`, the alternative list in declaration order. Field
///     types resolve where the enum is declared, so a field type may share a
///     name with any of the items listed here.
///   * a module `index` with one type-level position per variant, named after
///     the variant
///   * one `usize` constant per variant, its position, named in upper snake case
///   * one constructor function per variant, named in snake case
///   * a type `Match<...>` with one closure field per variant (snake case),
///     implementing `oneof::Visitor` for every position
///
/// # Restrictions
///
/// The macro takes no arguments. The enum must be non-empty and not generic,
/// its variants must be unit variants or tuple variants with exactly one
/// field, without explicit discriminants, and field types may not refer to
/// `Self`. Only doc comments are allowed as attributes.
#[proc_macro_attribute]
pub fn define_oneof(
    attrs: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let attrs: proc_macro2::TokenStream = attrs.into();
    let item: proc_macro2::TokenStream = item.into();
    match define_oneof_impl(attrs, item.clone()) {
        Ok(x) => x,
        Err(Error(msg, span)) => {
            let error = quote_spanned!(span =>
                ::core::compile_error!(#msg);
            );
            quote!(
                #item
                #error
            )
        }
    }
    .into()
}

struct Error(&'static str, Span);

fn define_oneof_impl(ty_attrs: TokenStream, d: TokenStream) -> Result<TokenStream, Error> {
    if let Some(tok) = ty_attrs.into_iter().next() {
        return Err(Error("define_oneof takes no arguments", tok.span()));
    }
    let d: DeriveInput = match syn::parse2(d) {
        Ok(d) => d,
        Err(e) => {
            return Err(Error(
                "define_oneof could not parse this as an enum",
                e.span(),
            ))
        }
    };
    let variants = if let Data::Enum(e) = d.data {
        e.variants
    } else {
        return Err(Error("define_oneof requires an enum", d.ident.span()));
    };
    if let Some(param) = d.generics.params.first() {
        return Err(Error(
            "define_oneof does not support generic parameters",
            param.span(),
        ));
    }
    if let Some(w) = &d.generics.where_clause {
        return Err(Error(
            "define_oneof does not support where clauses",
            w.where_token.span,
        ));
    }
    if variants.is_empty() {
        return Err(Error(
            "define_oneof requires at least one variant",
            d.ident.span(),
        ));
    }
    let ty_docs = doc_attrs(&d.attrs)?;

    let (tyvis, tyvis_inner) = SimpleVisibility::try_parse(&d.vis)?;
    let tyname = d.ident;

    let mut mod_name = format_ident!("{}", tyname.to_string().to_case(Case::Snake));
    mod_name.set_span(Span::call_site());
    // Field types are spelled next to the enum, where the user wrote them.
    let list_name = format_ident!("__{}Alternatives", tyname);

    let mut seen = HashSet::new();
    let mut alts = Vec::with_capacity(variants.len());
    for (position, v) in variants.into_iter().enumerate() {
        if let Some((_, expr)) = &v.discriminant {
            return Err(Error(
                "define_oneof does not support explicit discriminants",
                expr.span(),
            ));
        }
        let docs = doc_attrs(&v.attrs)?;
        let ty = match v.fields {
            Fields::Unit => None,
            Fields::Unnamed(f) if f.unnamed.len() == 1 => {
                let field = &f.unnamed[0];
                if let Some(a) = field.attrs.first() {
                    return Err(Error(
                        "define_oneof does not support attributes on fields",
                        a.path.span(),
                    ));
                }
                let ty = field.ty.clone();
                SelfRefs::check(&ty)?;
                Some(ty)
            }
            Fields::Unnamed(_) => {
                return Err(Error(
                    "define_oneof requires exactly one field per tuple variant",
                    v.ident.span(),
                ))
            }
            Fields::Named(_) => {
                return Err(Error(
                    "define_oneof requires unit or tuple variants",
                    v.ident.span(),
                ))
            }
        };
        let snake = v.ident.to_string().to_case(Case::Snake);
        if !seen.insert(snake.clone()) {
            return Err(Error(
                "define_oneof variant names must stay distinct in snake case",
                v.ident.span(),
            ));
        }
        alts.push(Alternative::new(position, docs, v.ident, &snake, ty)?);
    }

    let alt_ty = alts.iter().map(Alternative::field_ty).collect::<Vec<_>>();
    let variant_ident = alts.iter().map(|a| &a.ident).collect::<Vec<_>>();
    let variant_docs = alts.iter().map(|a| &a.docs).collect::<Vec<_>>();
    let index_ty = alts.iter().map(|a| index_type(a.position)).collect::<Vec<_>>();
    let position = alts.iter().map(|a| a.position).collect::<Vec<_>>();
    let konst = alts.iter().map(|a| &a.konst).collect::<Vec<_>>();
    let field = alts.iter().map(|a| &a.field).collect::<Vec<_>>();
    let visit_param = alts.iter().map(|a| &a.visit_param).collect::<Vec<_>>();
    let ctor = alts.iter().map(|a| a.constructor(&tyname, tyvis_inner)).collect::<Vec<_>>();
    let visit_impl = alts.iter().map(|a| a.visit_impl(&visit_param)).collect::<Vec<_>>();

    let alias_doc = format!(" Alternatives of [`{}`](super::{}), in declaration order.", tyname, tyname);
    let match_doc = format!(" Visitor for [`{}`](super::{}) with one closure per alternative.", tyname, tyname);

    Ok(quote! {
        #(#ty_docs)*
        #tyvis type #tyname = ::oneof::Variant<#list_name>;

        #[doc(hidden)]
        #tyvis type #list_name = ::oneof::Alts![#(#alt_ty),*];

        #tyvis mod #mod_name {
            #[doc = #alias_doc]
            #tyvis_inner type Alternatives = super::#list_name;

            /// Type-level position of each alternative.
            #tyvis_inner mod index {
                #(
                    #(#variant_docs)*
                    pub type #variant_ident = #index_ty;
                )*
            }

            #(
                #(#variant_docs)*
                #tyvis_inner const #konst: usize = #position;
            )*

            #(#ctor)*

            #[doc = #match_doc]
            #tyvis_inner struct Match<#(#visit_param),*> {
                #(
                    #(#variant_docs)*
                    #tyvis_inner #field: #visit_param,
                )*
            }

            #(#visit_impl)*
        }
    })
}

/// Position `n` as an `oneof::index` type.
fn index_type(n: usize) -> TokenStream {
    if n < 16 {
        let alias = format_ident!("U{}", n);
        quote!(::oneof::index::#alias)
    } else {
        let inner = index_type(n - 1);
        quote!(::oneof::index::UInt<#inner>)
    }
}

fn doc_attrs(attrs: &[Attribute]) -> Result<Vec<Attribute>, Error> {
    attrs
        .iter()
        .map(|a| {
            if a.path.is_ident("doc") {
                Ok(a.clone())
            } else {
                Err(Error(
                    "define_oneof only supports doc comments as attributes",
                    a.path.span(),
                ))
            }
        })
        .collect()
}

/// Identifier for `name`, raw if `name` is a keyword.
fn ident_for(name: &str, span: Span) -> Result<Ident, Error> {
    match name {
        "self" | "super" | "crate" | "_" => {
            return Err(Error("define_oneof cannot use this variant name", span))
        }
        _ => {}
    }
    let mut ident = if syn::parse_str::<Ident>(name).is_ok() {
        format_ident!("{}", name)
    } else {
        format_ident!("r#{}", name)
    };
    ident.set_span(span);
    Ok(ident)
}

struct Alternative {
    /// Position in the alternative list.
    position: usize,
    /// Doc comments on the variant.
    docs: Vec<Attribute>,
    /// Name of the variant.
    ident: Ident,
    /// Field type, `None` for unit variants.
    ty: Option<Type>,
    /// Name of the position constant.
    konst: Ident,
    /// Name of the constructor function.
    ctor: Ident,
    /// Name of the closure field in `Match`.
    field: Ident,
    /// Type parameter of the closure field in `Match`.
    visit_param: Ident,
}

impl Alternative {
    fn new(
        position: usize,
        docs: Vec<Attribute>,
        ident: Ident,
        snake: &str,
        ty: Option<Type>,
    ) -> Result<Self, Error> {
        let span = ident.span();
        let fn_ident = ident_for(snake, span)?;
        let konst = format_ident!("{}", snake.to_case(Case::UpperSnake), span = span);
        let visit_param = format_ident!(
            "Visit{}",
            ident.to_string().to_case(Case::UpperCamel),
            span = span
        );
        Ok(Alternative {
            position,
            docs,
            ident,
            ty,
            konst,
            ctor: fn_ident.clone(),
            field: fn_ident,
            visit_param,
        })
    }

    /// The alternative type as written on the enum.
    fn field_ty(&self) -> TokenStream {
        match &self.ty {
            Some(ty) => quote!(#ty),
            None => quote!(::oneof::Monostate),
        }
    }

    /// The alternative type as seen from inside the generated module.
    fn alt_ty(&self) -> TokenStream {
        let ident = &self.ident;
        match &self.ty {
            Some(_) => quote!(<Alternatives as ::oneof::Select<index::#ident>>::Alt),
            None => quote!(::oneof::Monostate),
        }
    }

    fn constructor(&self, tyname: &Ident, vis: SimpleVisibility) -> TokenStream {
        let Alternative {
            docs, ident, ctor, ..
        } = self;
        let ty = self.alt_ty();
        match &self.ty {
            Some(_) => quote! {
                #(#docs)*
                #[inline]
                #vis fn #ctor(value: #ty) -> super::#tyname {
                    ::oneof::Variant::in_place_index::<index::#ident>(::oneof::MoveFrom(value))
                }
            },
            None => quote! {
                #(#docs)*
                #[inline]
                #vis fn #ctor() -> super::#tyname {
                    ::oneof::Variant::in_place_index::<index::#ident>(
                        ::oneof::MoveFrom(::oneof::Monostate),
                    )
                }
            },
        }
    }

    fn visit_impl(&self, all_params: &[&Ident]) -> TokenStream {
        let Alternative {
            ident,
            field,
            visit_param,
            ..
        } = self;
        let alt_ty = self.alt_ty();
        let (bound, call) = match &self.ty {
            Some(_) => (
                quote!(::core::ops::FnMut(&#alt_ty) -> MatchOutput),
                quote!((self.#field)(value)),
            ),
            None => (
                quote!(::core::ops::FnMut() -> MatchOutput),
                quote!({
                    let _ = value;
                    (self.#field)()
                }),
            ),
        };
        quote! {
            impl<MatchOutput, #(#all_params),*>
                ::oneof::Visitor<#alt_ty, index::#ident, MatchOutput> for Match<#(#all_params),*>
            where
                #visit_param: #bound,
            {
                #[inline]
                fn visit(&mut self, value: &#alt_ty) -> MatchOutput {
                    #call
                }
            }
        }
    }
}

/// Finds uses of `Self` in a field type.
struct SelfRefs {
    found: Option<Span>,
}

impl SelfRefs {
    fn check(ty: &Type) -> Result<(), Error> {
        let mut refs = SelfRefs { found: None };
        refs.visit_type(ty);
        match refs.found {
            Some(span) => Err(Error(
                "define_oneof alternatives cannot refer to `Self`",
                span,
            )),
            None => Ok(()),
        }
    }
}

impl<'ast> Visit<'ast> for SelfRefs {
    fn visit_path_segment(&mut self, s: &'ast PathSegment) {
        if s.ident == "Self" && self.found.is_none() {
            self.found = Some(s.ident.span());
        }
        syn::visit::visit_path_segment(self, s);
    }
}

#[derive(Clone, Copy)]
enum SimpleVisibility {
    Private,
    Super,
    SuperSuper,
    Crate,
    Public,
}

impl quote::ToTokens for SimpleVisibility {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        match self {
            SimpleVisibility::Private => {}
            SimpleVisibility::Super => tokens.extend(quote!(pub(super))),
            SimpleVisibility::SuperSuper => tokens.extend(quote!(pub(in super::super))),
            SimpleVisibility::Crate => tokens.extend(quote!(pub(crate))),
            SimpleVisibility::Public => tokens.extend(quote!(pub)),
        }
    }
}

impl SimpleVisibility {
    fn bad_visibility(span: Span) -> Error {
        Error(
            "Visibility must be one of: (none), pub, pub(crate), pub(self), pub(super)",
            span,
        )
    }

    /// Visibility of the declaration, and the same visibility seen from one
    /// module deeper.
    fn try_parse(v: &Visibility) -> Result<(SimpleVisibility, SimpleVisibility), Error> {
        Ok(match v {
            Visibility::Public(_) => (SimpleVisibility::Public, SimpleVisibility::Public),
            Visibility::Crate(_) => (SimpleVisibility::Crate, SimpleVisibility::Crate),
            Visibility::Restricted(r) => {
                if r.path.is_ident("crate") {
                    (SimpleVisibility::Crate, SimpleVisibility::Crate)
                } else if r.path.is_ident("super") {
                    (SimpleVisibility::Super, SimpleVisibility::SuperSuper)
                } else if r.path.is_ident("self") {
                    (SimpleVisibility::Private, SimpleVisibility::Super)
                } else {
                    return Err(Self::bad_visibility(r.pub_token.span));
                }
            }
            Visibility::Inherited => (SimpleVisibility::Private, SimpleVisibility::Super),
        })
    }
}
