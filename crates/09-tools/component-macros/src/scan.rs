//! 扫描配置宏实现

use crate::utils::{is_valid_namespace, reject_generics};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{ItemStruct, LitStr, Result};

/// 实现 #[component_scan] 宏
pub fn component_scan_impl(args: TokenStream, input: TokenStream) -> TokenStream {
    let expanded = syn::parse::<LitStr>(args).and_then(|root| {
        let item = syn::parse::<ItemStruct>(input)?;
        expand_component_scan(&root, &item)
    });

    match expanded {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

/// 生成 `ScanConfiguration` 实现
pub fn expand_component_scan(root: &LitStr, item: &ItemStruct) -> Result<TokenStream2> {
    reject_generics(&item.generics, "component_scan")?;

    let namespace = root.value();
    if !is_valid_namespace(&namespace) {
        return Err(syn::Error::new_spanned(
            root,
            format!("扫描命名空间无效: '{namespace}'"),
        ));
    }

    let struct_name = &item.ident;
    Ok(quote! {
        #item

        impl ::infrastructure_common::ScanConfiguration for #struct_name {
            const SCAN_ROOT: &'static str = #root;
        }
    })
}
