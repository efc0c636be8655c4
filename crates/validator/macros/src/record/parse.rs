//! Parsing of `#[validate(...)]` field attributes

use syn::meta::ParseNestedMeta;
use syn::{Attribute, Expr, ExprLit, ExprUnary, Lit, LitStr, UnOp};

/// Tag variant names in the runtime crate, as written in generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TagName {
    Required,
    Max,
    Min,
    MaxLen,
    MinLen,
    Email,
}

impl TagName {
    pub(super) fn variant(self) -> &'static str {
        match self {
            TagName::Required => "Required",
            TagName::Max => "Max",
            TagName::Min => "Min",
            TagName::MaxLen => "MaxLen",
            TagName::MinLen => "MinLen",
            TagName::Email => "Email",
        }
    }
}

/// One declared constraint: the tag and its raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct RawConstraint {
    pub tag: TagName,
    pub raw: String,
}

/// Everything `#[validate(...)]` says about a field.
#[derive(Debug, Default, Clone)]
pub(super) struct FieldAttrs {
    pub constraints: Vec<RawConstraint>,
    pub rename: Option<String>,
}

impl FieldAttrs {
    /// Collects every `#[validate(...)]` attribute on a field, in order.
    pub(super) fn from_attributes(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("validate") {
                continue;
            }
            attr.parse_nested_meta(|meta| result.parse_meta(&meta))?;
        }

        Ok(result)
    }

    fn parse_meta(&mut self, meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
        let path = &meta.path;

        let bound_tag = if path.is_ident("max") {
            Some(TagName::Max)
        } else if path.is_ident("min") {
            Some(TagName::Min)
        } else if path.is_ident("maxLen") || path.is_ident("max_len") {
            Some(TagName::MaxLen)
        } else if path.is_ident("minLen") || path.is_ident("min_len") {
            Some(TagName::MinLen)
        } else {
            None
        };

        if let Some(tag) = bound_tag {
            let expr: Expr = meta.value()?.parse()?;
            let raw = bound_text(&expr).ok_or_else(|| {
                syn::Error::new_spanned(&expr, "expected an integer or string literal")
            })?;
            self.constraints.push(RawConstraint { tag, raw });
            return Ok(());
        }

        let flag_tag = if path.is_ident("required") {
            Some(TagName::Required)
        } else if path.is_ident("email") {
            Some(TagName::Email)
        } else {
            None
        };

        if let Some(tag) = flag_tag {
            let raw = if meta.input.peek(syn::Token![=]) {
                let value: LitStr = meta.value()?.parse()?;
                value.value()
            } else {
                "true".to_owned()
            };
            self.constraints.push(RawConstraint { tag, raw });
            return Ok(());
        }

        if path.is_ident("rename") {
            let value: LitStr = meta.value()?.parse()?;
            self.rename = Some(value.value());
            return Ok(());
        }

        Err(meta.error(format!(
            "unknown validation attribute `{}`.\n\
             Supported: required, max, min, maxLen (max_len), minLen (min_len), email, rename",
            path.get_ident()
                .map_or_else(|| "<path>".to_owned(), ToString::to_string)
        )))
    }
}

/// Raw text of a bound: an integer literal's digits (with sign) or a
/// string literal's contents, verbatim.
fn bound_text(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Int(int), ..
        }) => Some(int.base10_digits().to_owned()),
        Expr::Lit(ExprLit {
            lit: Lit::Str(s), ..
        }) => Some(s.value()),
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr,
            ..
        }) => match &**expr {
            Expr::Lit(ExprLit {
                lit: Lit::Int(int), ..
            }) => Some(format!("-{}", int.base10_digits())),
            _ => None,
        },
        Expr::Group(group) => bound_text(&group.expr),
        _ => None,
    }
}
