//! 组件标记宏实现

use crate::utils::{expect_lit_str, reject_generics, registration_fn_ident};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::Parse, parse::ParseStream, punctuated::Punctuated, Expr, ItemStruct, Meta, Path,
    Result, Token,
};

/// 组件配置参数
#[derive(Clone, Default)]
pub struct ComponentArgs {
    /// 自定义组件名称
    pub name: Option<String>,
    /// 作用域标签，未指定时为单例
    pub scope: Option<String>,
    /// 自定义无参构造函数
    pub constructor: Option<Path>,
}

impl Parse for ComponentArgs {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let mut args = ComponentArgs::default();

        let parsed = Punctuated::<Meta, Token![,]>::parse_terminated(input)?;

        for meta in parsed {
            match meta {
                Meta::Path(path) => {
                    if path.is_ident("singleton") {
                        args.scope = Some("singleton".to_string());
                    } else if path.is_ident("prototype") {
                        args.scope = Some("prototype".to_string());
                    } else {
                        return Err(syn::Error::new_spanned(path, "未知的组件参数"));
                    }
                }
                Meta::NameValue(nv) => {
                    if nv.path.is_ident("name") {
                        // 空名称等同于未指定，由类型名推导
                        args.name = Some(expect_lit_str(&nv.value, "name")?);
                    } else if nv.path.is_ident("scope") {
                        args.scope = Some(expect_lit_str(&nv.value, "scope")?);
                    } else if nv.path.is_ident("constructor") {
                        match nv.value {
                            Expr::Path(expr_path) => args.constructor = Some(expr_path.path),
                            other => {
                                return Err(syn::Error::new_spanned(
                                    other,
                                    "参数 `constructor` 需要函数路径",
                                ));
                            }
                        }
                    } else {
                        return Err(syn::Error::new_spanned(nv.path, "未知的组件参数"));
                    }
                }
                Meta::List(list) => {
                    return Err(syn::Error::new_spanned(list, "未知的组件参数"));
                }
            }
        }

        Ok(args)
    }
}

/// 实现 #[component] 宏
pub fn component_impl(args: TokenStream, input: TokenStream) -> TokenStream {
    let expanded = syn::parse::<ComponentArgs>(args).and_then(|args| {
        let item = syn::parse::<ItemStruct>(input)?;
        expand_component(&args, &item)
    });

    match expanded {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

/// 实现 #[unit] 宏
pub fn unit_impl(args: TokenStream, input: TokenStream) -> TokenStream {
    if !args.is_empty() {
        let args = TokenStream2::from(args);
        return syn::Error::new_spanned(args, "#[unit] 不接受参数")
            .to_compile_error()
            .into();
    }

    match syn::parse::<ItemStruct>(input).and_then(|item| expand_unit(&item)) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

/// 生成组件实现和注册代码
pub fn expand_component(args: &ComponentArgs, item: &ItemStruct) -> Result<TokenStream2> {
    reject_generics(&item.generics, "component")?;

    let struct_name = &item.ident;
    let marker_value = args.name.as_deref().unwrap_or("");

    let construct_body = match &args.constructor {
        Some(path) => quote! {
            #path().map_err(::core::convert::Into::into)
        },
        None => quote! {
            ::core::result::Result::Ok(<Self as ::core::default::Default>::default())
        },
    };

    let scope_const = args.scope.as_deref().map(|scope| {
        quote! {
            const SCOPE: ::core::option::Option<::infrastructure_common::ScopeMarker> =
                ::core::option::Option::Some(::infrastructure_common::ScopeMarker::new(#scope));
        }
    });

    let registration_fn_name = registration_fn_ident("component", struct_name);

    Ok(quote! {
        #item

        impl ::infrastructure_common::Constructible for #struct_name {
            fn construct() -> ::core::result::Result<Self, ::infrastructure_common::BoxError> {
                #construct_body
            }
        }

        impl ::infrastructure_common::Component for #struct_name {
            const COMPONENT: ::infrastructure_common::ComponentMarker =
                ::infrastructure_common::ComponentMarker::new(#marker_value);
            #scope_const
        }

        // 使用 ctor 在程序启动时注册到全局类型目录
        #[ctor::ctor]
        fn #registration_fn_name() {
            let namespace = ::infrastructure_common::namespace_from_module_path(module_path!());
            let _ = ::infrastructure_common::TypeCatalog::global()
                .register_component::<#struct_name>(namespace);
        }
    })
}

/// 生成未标记单元的注册代码
pub fn expand_unit(item: &ItemStruct) -> Result<TokenStream2> {
    reject_generics(&item.generics, "unit")?;

    let struct_name = &item.ident;
    let registration_fn_name = registration_fn_ident("unit", struct_name);

    Ok(quote! {
        #item

        #[ctor::ctor]
        fn #registration_fn_name() {
            let namespace = ::infrastructure_common::namespace_from_module_path(module_path!());
            let _ = ::infrastructure_common::TypeCatalog::global()
                .register(::infrastructure_common::TypeHandle::of::<#struct_name>(namespace));
        }
    })
}
