//! 宏工具函数

use proc_macro2::Span;
use syn::{Expr, Generics, Ident, Lit, Result};

/// 将驼峰命名转换为蛇形命名
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, &ch) in chars.iter().enumerate() {
        if ch.is_uppercase() && i > 0 {
            // 检查前一个字符是否为小写，或者下一个字符是否为小写
            let prev_is_lower = chars.get(i - 1).map_or(false, |c| c.is_lowercase());
            let next_is_lower = chars.get(i + 1).map_or(false, |c| c.is_lowercase());

            if prev_is_lower || next_is_lower {
                result.push('_');
            }
        }
        result.extend(ch.to_lowercase());
    }

    result
}

/// 生成注册函数名，如 `__register_component_user_service`
pub fn registration_fn_ident(kind: &str, struct_name: &Ident) -> Ident {
    Ident::new(
        &format!(
            "__register_{}_{}",
            kind,
            to_snake_case(&struct_name.to_string())
        ),
        Span::call_site(),
    )
}

/// 组件类型必须可以直接命名，不支持泛型
pub fn reject_generics(generics: &Generics, macro_name: &str) -> Result<()> {
    if generics.params.is_empty() && generics.where_clause.is_none() {
        return Ok(());
    }
    Err(syn::Error::new_spanned(
        generics,
        format!("#[{macro_name}] 不支持泛型类型"),
    ))
}

/// 取出字符串字面量的值
pub fn expect_lit_str(expr: &Expr, key: &str) -> Result<String> {
    match expr {
        Expr::Lit(expr_lit) => match &expr_lit.lit {
            Lit::Str(lit_str) => Ok(lit_str.value()),
            other => Err(syn::Error::new_spanned(
                other,
                format!("参数 `{key}` 需要字符串字面量"),
            )),
        },
        other => Err(syn::Error::new_spanned(
            other,
            format!("参数 `{key}` 需要字符串字面量"),
        )),
    }
}

/// 验证标识符是否有效
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first_char) = chars.next() else {
        return false;
    };

    // 第一个字符必须是字母或下划线
    if !first_char.is_alphabetic() && first_char != '_' {
        return false;
    }

    // 其余字符必须是字母、数字或下划线
    chars.all(|ch| ch.is_alphanumeric() || ch == '_')
}

/// 点分命名空间的每一段都必须是合法标识符
pub fn is_valid_namespace(namespace: &str) -> bool {
    !namespace.is_empty() && namespace.split('.').all(is_valid_identifier)
}
