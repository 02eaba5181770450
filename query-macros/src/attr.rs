use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Attribute, Expr, Ident, Result as SynResult, Token, parse::Parse, parse::ParseStream};

pub(crate) struct QueryAttrConfig {
    pub(crate) name: Option<syn::LitStr>,
}

// 解析 #[query(name = "...")]，允许出现多次但键不可重复
pub(crate) fn parse_query_attrs(attrs: &[Attribute]) -> SynResult<QueryAttrConfig> {
    let mut name: Option<syn::LitStr> = None;

    for attr in attrs.iter().filter(|a| a.path().is_ident("query")) {
        let syn::Meta::List(_) = &attr.meta else {
            return Err(syn::Error::new_spanned(
                attr,
                "expected #[query(name = \"...\")]",
            ));
        };

        let pairs: Punctuated<QueryAttrKv, Token![,]> =
            attr.parse_args_with(Punctuated::<QueryAttrKv, Token![,]>::parse_terminated)?;

        for kv in pairs {
            match kv.key.to_string().as_str() {
                "name" => {
                    if name.is_some() {
                        return Err(syn::Error::new(
                            kv.key.span(),
                            "duplicate key 'name' in attribute",
                        ));
                    }
                    let lit = match kv.value {
                        Expr::Lit(syn::ExprLit {
                            lit: syn::Lit::Str(lit),
                            ..
                        }) => lit,
                        other => {
                            return Err(syn::Error::new(
                                other.span(),
                                "expected string literal for 'name'",
                            ));
                        }
                    };
                    if lit.value().trim().is_empty() {
                        return Err(syn::Error::new(lit.span(), "query name must not be empty"));
                    }
                    name = Some(lit);
                }
                _ => {
                    return Err(syn::Error::new(
                        kv.key.span(),
                        "unknown key; expected 'name'",
                    ));
                }
            }
        }
    }

    Ok(QueryAttrConfig { name })
}

struct QueryAttrKv {
    key: Ident,
    #[allow(dead_code)]
    eq: Token![=],
    value: Expr,
}

impl Parse for QueryAttrKv {
    fn parse(input: ParseStream) -> SynResult<Self> {
        Ok(Self {
            key: input.parse()?,
            eq: input.parse()?,
            value: input.parse()?,
        })
    }
}
