use crate::attr::parse_query_attrs;
use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, Result as SynResult, parse_macro_input};

/// #[derive(Query)] 宏实现
/// 支持结构体与枚举（含泛型），为其生成 `Query::NAME`
pub(crate) fn expand(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand_derive(&input) {
        Ok(ts) => TokenStream::from(ts),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_derive(input: &DeriveInput) -> SynResult<proc_macro2::TokenStream> {
    if let syn::Data::Union(u) = &input.data {
        return Err(syn::Error::new(
            u.union_token.span,
            "#[derive(Query)] supports only struct or enum",
        ));
    }

    let cfg = parse_query_attrs(&input.attrs)?;

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // 未显式指定时使用类型完整路径；泛型参数不参与名称
    let name = match cfg.name {
        Some(lit) => quote! { #lit },
        None => {
            let ident_str = ident.to_string();
            quote! { ::core::concat!(::core::module_path!(), "::", #ident_str) }
        }
    };

    Ok(quote! {
        impl #impl_generics ::query_messaging::query::Query for #ident #ty_generics #where_clause {
            const NAME: &'static str = #name;
        }
    })
}
