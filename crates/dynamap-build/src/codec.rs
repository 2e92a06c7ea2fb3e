use convert_case::{Case, Casing};
use dynamap_schema::{
    node::{Entity, Field},
    types::{CodecId, DeclaredType, MappingStrategy, Primitive},
};
use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::parse_str;
use thiserror::Error as ThisError;

///
/// EmitError
///

#[derive(Debug, ThisError)]
pub enum EmitError {
    #[error("field '{entity}.{field}': strategy {strategy} is not supported by codec emission")]
    UnsupportedStrategy {
        entity: String,
        field: String,
        strategy: MappingStrategy,
    },

    #[error("entity '{entity}': '{path}' is not a valid Rust path")]
    InvalidPath { entity: String, path: String },

    #[error("field '{entity}.{field}': declared type does not match strategy {strategy}")]
    MalformedField {
        entity: String,
        field: String,
        strategy: MappingStrategy,
    },
}

/// Emit the full codec definition for one entity: struct, constructor-style
/// dependency wiring, `encode`/`decode`, and the item/batch convenience
/// wrappers.
pub fn generate(entity: &Entity) -> Result<TokenStream, EmitError> {
    let codec_ident = format_ident!("{}", entity.codec_id().as_str());
    let entity_path = entity_path(entity)?;

    let dependencies: Vec<&CodecId> = entity.dependencies.iter().collect();
    let dep_idents: Vec<Ident> = dependencies.iter().map(|dep| dep_field_ident(dep)).collect();
    let dep_types: Vec<Ident> = dependencies
        .iter()
        .map(|dep| format_ident!("{}", dep.as_str()))
        .collect();

    let encode_blocks = entity
        .fields
        .iter()
        .map(|field| encode_block(entity, field))
        .collect::<Result<Vec<_>, _>>()?;
    let decode_blocks = entity
        .fields
        .iter()
        .map(|field| decode_block(entity, field))
        .collect::<Result<Vec<_>, _>>()?;

    let struct_doc = format!(
        "Generated attribute-value codec for `{}`. DO NOT EDIT: regenerated on every build.",
        entity.simple_name()
    );

    let dep_assembles = dep_types.iter().map(|ty| quote!(#ty::assemble()));

    Ok(quote! {
        #[doc = #struct_doc]
        pub struct #codec_ident {
            #(#dep_idents: #dep_types,)*
        }

        impl #codec_ident {
            #[must_use]
            pub const fn new(#(#dep_idents: #dep_types),*) -> Self {
                Self { #(#dep_idents),* }
            }

            /// Construct this codec with its dependency codecs wired in,
            /// following the resolved generation order.
            #[must_use]
            pub const fn assemble() -> Self {
                Self::new(#(#dep_assembles),*)
            }

            /// Encode a value into its wire form. Absent input stays absent.
            #[must_use]
            pub fn encode(
                &self,
                value: Option<&#entity_path>,
            ) -> Option<::dynamap::value::AttributeValue> {
                let value = value?;

                Some(::dynamap::value::AttributeValue::map(self.encode_fields(value)))
            }

            /// Decode a wire value. Absent or non-map input decodes to absent;
            /// individual fields degrade to their defaults, never failing the
            /// record.
            #[must_use]
            pub fn decode(
                &self,
                value: Option<&::dynamap::value::AttributeValue>,
            ) -> Option<#entity_path> {
                let item = value?.as_map()?;

                Some(self.decode_fields(item))
            }

            fn encode_fields(&self, value: &#entity_path) -> ::dynamap::value::Attributes {
                let mut attributes = ::dynamap::value::Attributes::new();
                #(#encode_blocks)*
                attributes
            }

            fn decode_fields(&self, item: &::dynamap::value::Attributes) -> #entity_path {
                let mut value = <#entity_path>::default();
                #(#decode_blocks)*
                value
            }

            /// Item form of `encode`, for put-style operations.
            #[must_use]
            pub fn encode_item(
                &self,
                value: Option<&#entity_path>,
            ) -> Option<::dynamap::value::Attributes> {
                self.encode(value)
                    .and_then(::dynamap::value::AttributeValue::into_map)
            }

            /// Batch form of `encode_item`; absent results are filtered out.
            #[must_use]
            pub fn encode_items(&self, values: &[#entity_path]) -> Vec<::dynamap::value::Attributes> {
                values
                    .iter()
                    .filter_map(|value| self.encode_item(Some(value)))
                    .collect()
            }

            /// Item form of `decode`, for get-style responses. An empty item
            /// decodes to absent.
            #[must_use]
            pub fn decode_item(&self, item: &::dynamap::value::Attributes) -> Option<#entity_path> {
                if item.is_empty() {
                    return None;
                }

                Some(self.decode_fields(item))
            }

            /// Batch form of `decode_item`; absent results are filtered out.
            #[must_use]
            pub fn decode_items(&self, items: &[::dynamap::value::Attributes]) -> Vec<#entity_path> {
                items.iter().filter_map(|item| self.decode_item(item)).collect()
            }
        }
    })
}

fn entity_path(entity: &Entity) -> Result<syn::Path, EmitError> {
    parse_str(&entity.path).map_err(|_| EmitError::InvalidPath {
        entity: entity.path.clone(),
        path: entity.path.clone(),
    })
}

fn dep_field_ident(dep: &CodecId) -> Ident {
    format_ident!("{}", dep.as_str().to_case(Case::Snake))
}

fn enum_path(entity: &Entity, field: &Field) -> Result<syn::Path, EmitError> {
    let (inner, _) = field.ty.unwrap_optional();
    let DeclaredType::Named(path) = inner else {
        return Err(malformed(entity, field));
    };

    parse_str(path).map_err(|_| EmitError::InvalidPath {
        entity: entity.path.clone(),
        path: path.clone(),
    })
}

/// Numeric kind carried by a Number/NumberList/NestedNumberList field.
fn numeric_ident(entity: &Entity, field: &Field) -> Result<Ident, EmitError> {
    let (inner, _) = field.ty.unwrap_optional();

    let primitive = match inner {
        DeclaredType::Scalar(primitive) => Some(*primitive),
        DeclaredType::List(element) => match element.as_ref() {
            DeclaredType::Scalar(primitive) => Some(*primitive),
            DeclaredType::List(inner) => match inner.as_ref() {
                DeclaredType::Scalar(primitive) => Some(*primitive),
                _ => None,
            },
            _ => None,
        },
        _ => None,
    };

    primitive
        .filter(|primitive| primitive.is_numeric())
        .map(|primitive| format_ident!("{}", Primitive::rust_type(primitive)))
        .ok_or_else(|| malformed(entity, field))
}

fn dependency_ident(entity: &Entity, field: &Field) -> Result<Ident, EmitError> {
    field
        .dependency
        .as_ref()
        .map(dep_field_ident)
        .ok_or_else(|| malformed(entity, field))
}

fn malformed(entity: &Entity, field: &Field) -> EmitError {
    EmitError::MalformedField {
        entity: entity.path.clone(),
        field: field.ident.clone(),
        strategy: field.strategy,
    }
}

// ──────────────────────────
// ENCODE
// ──────────────────────────

fn encode_block(entity: &Entity, field: &Field) -> Result<TokenStream, EmitError> {
    let key = field.ident.as_str();
    let ident = format_ident!("{}", field.ident);

    let tokens = match field.strategy {
        MappingStrategy::String => {
            if field.primitive {
                quote! {
                    attributes.insert(
                        #key.to_string(),
                        ::dynamap::value::AttributeValue::string(&value.#ident),
                    );
                }
            } else {
                quote! {
                    if let Some(v) = &value.#ident {
                        attributes.insert(
                            #key.to_string(),
                            ::dynamap::value::AttributeValue::string(v),
                        );
                    }
                }
            }
        }

        MappingStrategy::Number => {
            if field.primitive {
                quote! {
                    attributes.insert(
                        #key.to_string(),
                        ::dynamap::value::AttributeValue::number(value.#ident),
                    );
                }
            } else {
                quote! {
                    if let Some(v) = value.#ident {
                        attributes.insert(
                            #key.to_string(),
                            ::dynamap::value::AttributeValue::number(v),
                        );
                    }
                }
            }
        }

        MappingStrategy::Boolean => {
            if field.primitive {
                quote! {
                    attributes.insert(
                        #key.to_string(),
                        ::dynamap::value::AttributeValue::boolean(value.#ident),
                    );
                }
            } else {
                quote! {
                    if let Some(v) = value.#ident {
                        attributes.insert(
                            #key.to_string(),
                            ::dynamap::value::AttributeValue::boolean(v),
                        );
                    }
                }
            }
        }

        MappingStrategy::Timestamp => {
            if field.primitive {
                quote! {
                    if let Some(text) = ::dynamap::convert::format_timestamp(value.#ident) {
                        attributes.insert(
                            #key.to_string(),
                            ::dynamap::value::AttributeValue::string(text),
                        );
                    }
                }
            } else {
                quote! {
                    if let Some(v) = &value.#ident {
                        if let Some(text) = ::dynamap::convert::format_timestamp(*v) {
                            attributes.insert(
                                #key.to_string(),
                                ::dynamap::value::AttributeValue::string(text),
                            );
                        }
                    }
                }
            }
        }

        MappingStrategy::Enum => {
            if field.primitive {
                quote! {
                    attributes.insert(
                        #key.to_string(),
                        ::dynamap::value::AttributeValue::string(value.#ident.to_string()),
                    );
                }
            } else {
                quote! {
                    if let Some(v) = &value.#ident {
                        attributes.insert(
                            #key.to_string(),
                            ::dynamap::value::AttributeValue::string(v.to_string()),
                        );
                    }
                }
            }
        }

        MappingStrategy::StringList => quote! {
            if !value.#ident.is_empty() {
                attributes.insert(
                    #key.to_string(),
                    ::dynamap::value::AttributeValue::string_set(value.#ident.clone()),
                );
            }
        },

        MappingStrategy::NumberList => quote! {
            if !value.#ident.is_empty() {
                let items: Vec<::dynamap::value::AttributeValue> = value.#ident
                    .iter()
                    .map(|n| ::dynamap::value::AttributeValue::number(*n))
                    .collect();
                attributes.insert(#key.to_string(), ::dynamap::value::AttributeValue::list(items));
            }
        },

        MappingStrategy::NestedNumberList => quote! {
            if !value.#ident.is_empty() {
                let outer: Vec<::dynamap::value::AttributeValue> = value.#ident
                    .iter()
                    .filter(|inner| !inner.is_empty())
                    .map(|inner| {
                        ::dynamap::value::AttributeValue::list(
                            inner
                                .iter()
                                .map(|n| ::dynamap::value::AttributeValue::number(*n))
                                .collect(),
                        )
                    })
                    .collect();
                if !outer.is_empty() {
                    attributes.insert(
                        #key.to_string(),
                        ::dynamap::value::AttributeValue::list(outer),
                    );
                }
            }
        },

        MappingStrategy::ComplexObject => {
            let dep = dependency_ident(entity, field)?;
            let input = if field.primitive {
                quote!(Some(&value.#ident))
            } else {
                quote!(value.#ident.as_ref())
            };

            quote! {
                if let Some(encoded) = self.#dep.encode(#input) {
                    attributes.insert(#key.to_string(), encoded);
                }
            }
        }

        MappingStrategy::ComplexList => {
            let dep = dependency_ident(entity, field)?;

            quote! {
                if !value.#ident.is_empty() {
                    let items: Vec<::dynamap::value::AttributeValue> = value.#ident
                        .iter()
                        .filter_map(|element| self.#dep.encode(Some(element)))
                        .collect();
                    if !items.is_empty() {
                        attributes.insert(
                            #key.to_string(),
                            ::dynamap::value::AttributeValue::list(items),
                        );
                    }
                }
            }
        }

        MappingStrategy::Map => {
            return Err(EmitError::UnsupportedStrategy {
                entity: entity.path.clone(),
                field: field.ident.clone(),
                strategy: field.strategy,
            });
        }
    };

    Ok(tokens)
}

// ──────────────────────────
// DECODE
// ──────────────────────────

fn decode_block(entity: &Entity, field: &Field) -> Result<TokenStream, EmitError> {
    let key = field.ident.as_str();
    let ident = format_ident!("{}", field.ident);

    let body = match field.strategy {
        MappingStrategy::String => {
            let assign = assign(&ident, field.primitive, quote!(text.to_string()));
            quote! {
                if let Some(text) = ::dynamap::convert::text(attr) {
                    #assign
                }
            }
        }

        MappingStrategy::Number => {
            let kind = numeric_ident(entity, field)?;
            let assign = assign(&ident, field.primitive, quote!(parsed));
            quote! {
                if let Some(parsed) = ::dynamap::convert::number::<#kind>(attr) {
                    #assign
                }
            }
        }

        MappingStrategy::Boolean => {
            let assign = assign(&ident, field.primitive, quote!(parsed));
            quote! {
                if let Some(parsed) = ::dynamap::convert::boolean(attr) {
                    #assign
                }
            }
        }

        MappingStrategy::Timestamp => {
            let assign = assign(&ident, field.primitive, quote!(parsed));
            quote! {
                if let Some(parsed) = ::dynamap::convert::timestamp(attr) {
                    #assign
                }
            }
        }

        MappingStrategy::Enum => {
            let path = enum_path(entity, field)?;
            let assign = assign(&ident, field.primitive, quote!(parsed));
            quote! {
                if let Some(text) = ::dynamap::convert::text(attr) {
                    if let Ok(parsed) = text.parse::<#path>() {
                        #assign
                    }
                }
            }
        }

        MappingStrategy::StringList => quote! {
            if let Some(values) = attr.as_string_set() {
                value.#ident = values.to_vec();
            }
        },

        MappingStrategy::NumberList => {
            let kind = numeric_ident(entity, field)?;
            quote! {
                if let Some(items) = attr.as_list() {
                    value.#ident = items
                        .iter()
                        .filter_map(::dynamap::convert::number::<#kind>)
                        .collect();
                }
            }
        }

        MappingStrategy::NestedNumberList => {
            let kind = numeric_ident(entity, field)?;
            quote! {
                if let Some(outer) = attr.as_list() {
                    let rows: Vec<Vec<#kind>> = outer
                        .iter()
                        .filter_map(|row| {
                            let inner: Vec<#kind> = row
                                .as_list()?
                                .iter()
                                .filter_map(::dynamap::convert::number::<#kind>)
                                .collect();
                            if inner.is_empty() { None } else { Some(inner) }
                        })
                        .collect();
                    if !rows.is_empty() {
                        value.#ident = rows;
                    }
                }
            }
        }

        MappingStrategy::ComplexObject => {
            let dep = dependency_ident(entity, field)?;
            let assign = assign(&ident, field.primitive, quote!(decoded));
            quote! {
                if let Some(decoded) = self.#dep.decode(Some(attr)) {
                    #assign
                }
            }
        }

        MappingStrategy::ComplexList => {
            let dep = dependency_ident(entity, field)?;
            quote! {
                if let Some(items) = attr.as_list() {
                    let decoded: Vec<_> = items
                        .iter()
                        .filter_map(|element| self.#dep.decode(Some(element)))
                        .collect();
                    if !decoded.is_empty() {
                        value.#ident = decoded;
                    }
                }
            }
        }

        MappingStrategy::Map => {
            return Err(EmitError::UnsupportedStrategy {
                entity: entity.path.clone(),
                field: field.ident.clone(),
                strategy: field.strategy,
            });
        }
    };

    Ok(quote! {
        if let Some(attr) = item.get(#key) {
            #body
        }
    })
}

fn assign(ident: &Ident, primitive: bool, expr: TokenStream) -> TokenStream {
    if primitive {
        quote!(value.#ident = #expr;)
    } else {
        quote!(value.#ident = Some(#expr);)
    }
}

///
/// TESTS
///
