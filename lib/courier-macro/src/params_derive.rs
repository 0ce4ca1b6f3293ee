//! Params derive macro implementation.
//!
//! The derive emits one descriptor row per named field. Attributes are
//! folded into the row's tag string (`"name,flag,flag"`), which courier's
//! runtime tag parser interprets — the macro only decides what goes into
//! the table, not how tags behave.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Fields, parse2};

/// Struct-level options parsed from `#[param(...)]` attributes.
#[derive(Debug, Clone, Default)]
struct ParamStructOptions {
    /// Rename all fields using the given case convention.
    rename_all: Option<RenameRule>,
}

/// Case conversion rules for `rename_all`.
#[derive(Debug, Clone, Copy)]
enum RenameRule {
    /// `lowercase`
    LowerCase,
    /// `UPPERCASE`
    UpperCase,
    /// `camelCase`
    CamelCase,
    /// `PascalCase`
    PascalCase,
    /// `snake_case`
    SnakeCase,
    /// `kebab-case`
    KebabCase,
}

impl RenameRule {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "lowercase" => Some(Self::LowerCase),
            "UPPERCASE" => Some(Self::UpperCase),
            "camelCase" => Some(Self::CamelCase),
            "PascalCase" => Some(Self::PascalCase),
            "snake_case" => Some(Self::SnakeCase),
            "kebab-case" => Some(Self::KebabCase),
            _ => None,
        }
    }

    fn apply(self, name: &str) -> String {
        match self {
            Self::LowerCase => name.to_lowercase(),
            Self::UpperCase => name.to_uppercase(),
            Self::CamelCase => to_camel_case(name),
            Self::PascalCase => to_pascal_case(name),
            Self::SnakeCase => to_snake_case(name),
            Self::KebabCase => to_snake_case(name).replace('_', "-"),
        }
    }
}

fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.push(c.to_lowercase().next().unwrap_or(c));
        } else {
            result.push(c);
        }
    }
    result
}

fn to_camel_case(s: &str) -> String {
    let mut result = String::new();
    let mut capitalize_next = false;
    for c in s.chars() {
        if c == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            result.push(c.to_uppercase().next().unwrap_or(c));
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }
    result
}

fn to_pascal_case(s: &str) -> String {
    let camel = to_camel_case(s);
    let mut chars = camel.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Field options parsed from `#[param(...)]` attributes.
#[derive(Debug, Clone, Default)]
struct ParamFieldOptions {
    rename: Option<String>,
    omitempty: bool,
    squash: bool,
    recursive: bool,
    skip: bool,
}

impl ParamFieldOptions {
    /// Fold the options into the runtime tag string.
    ///
    /// No rename leaves the name token empty so the runtime parser falls
    /// back to the field identifier.
    fn tag(&self, struct_options: &ParamStructOptions, field_name: &str) -> String {
        if self.skip {
            return "-".to_string();
        }

        let mut tag = if let Some(rename) = &self.rename {
            rename.clone()
        } else if let Some(rule) = struct_options.rename_all {
            rule.apply(field_name)
        } else {
            String::new()
        };

        if self.omitempty {
            tag.push_str(",omitempty");
        }
        if self.squash {
            tag.push_str(",squash");
        }
        if self.recursive {
            tag.push_str(",recursive");
        }
        tag
    }
}

/// Expand the `#[derive(Params)]` macro.
pub fn expand_params_derive(input: TokenStream) -> syn::Result<TokenStream> {
    let input: DeriveInput = parse2(input)?;
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let struct_options = parse_param_struct_options(&input.attrs)?;

    // Only structs with named fields have a descriptor table
    let fields = match &input.data {
        syn::Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input,
                    "Params derive only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "Params derive only supports structs",
            ));
        }
    };

    let mut rows = Vec::new();

    for field in fields {
        let Some(field_ident) = field.ident.as_ref() else {
            continue;
        };
        let field_name = field_ident.to_string();
        let options = parse_param_field_options(&field.attrs)?;
        let tag = options.tag(&struct_options, &field_name);

        rows.push(quote! {
            fields.push(::courier::Field::new(
                #tag,
                #field_name,
                ::courier::ToValue::to_value(&self.#field_ident),
            ));
        });
    }

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::courier::Params for #name #ty_generics #where_clause {
            fn fields(&self) -> ::std::vec::Vec<::courier::Field> {
                let mut fields = ::std::vec::Vec::new();
                #(#rows)*
                fields
            }
        }

        #[automatically_derived]
        impl #impl_generics ::courier::ToValue for #name #ty_generics #where_clause {
            fn to_value(&self) -> ::courier::Value {
                ::courier::Value::Struct(::courier::Params::fields(self))
            }
        }
    })
}

/// Parse struct-level options from `#[param(...)]` attributes.
fn parse_param_struct_options(attrs: &[syn::Attribute]) -> syn::Result<ParamStructOptions> {
    let mut options = ParamStructOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("param") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                let value: syn::LitStr = meta.value()?.parse()?;
                let rule = RenameRule::parse(&value.value()).ok_or_else(|| {
                    syn::Error::new_spanned(
                        &value,
                        format!(
                            "unknown rename_all value: \"{}\". Expected one of: \
                             lowercase, UPPERCASE, camelCase, PascalCase, \
                             snake_case, kebab-case",
                            value.value()
                        ),
                    )
                })?;
                options.rename_all = Some(rule);
            }
            Ok(())
        })?;
    }

    Ok(options)
}

/// Parse field options from `#[param(...)]` attributes.
fn parse_param_field_options(attrs: &[syn::Attribute]) -> syn::Result<ParamFieldOptions> {
    let mut options = ParamFieldOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("param") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let value: syn::LitStr = meta.value()?.parse()?;
                options.rename = Some(value.value());
            } else if meta.path.is_ident("omitempty") {
                options.omitempty = true;
            } else if meta.path.is_ident("squash") {
                options.squash = true;
            } else if meta.path.is_ident("recursive") {
                options.recursive = true;
            } else if meta.path.is_ident("skip") {
                options.skip = true;
            }
            Ok(())
        })?;
    }

    Ok(options)
}
