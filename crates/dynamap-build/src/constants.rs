use convert_case::{Case, Casing};
use dynamap_schema::node::Entity;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// Emit the field-name-constant module for one entity.
///
/// One string constant per declared field, valued with the field's own
/// name, so downstream query code never hand-writes attribute keys.
#[must_use]
pub fn generate(entity: &Entity) -> TokenStream {
    let module = format_ident!("{}_fields", entity.simple_name().to_case(Case::Snake));
    let doc = format!(
        "Field name constants for `{}`. DO NOT EDIT: regenerated on every build.",
        entity.simple_name()
    );

    let constants = entity.fields.iter().map(|field| {
        let ident = format_ident!("{}", field.ident.to_case(Case::UpperSnake));
        let value = field.ident.as_str();

        quote! {
            pub const #ident: &str = #value;
        }
    });

    quote! {
        #[doc = #doc]
        pub mod #module {
            #(#constants)*
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use dynamap_schema::{
        node::{Field, FieldList},
        types::{DeclaredType, MappingStrategy, Primitive},
    };
    use std::collections::BTreeSet;

    #[test]
    fn constants_enumerate_declared_fields() {
        let entity = Entity {
            path: "domain::Waypoint".to_string(),
            table: None,
            fields: FieldList {
                fields: vec![Field {
                    ident: "display_name".to_string(),
                    ty: DeclaredType::optional(DeclaredType::named("String")),
                    strategy: MappingStrategy::String,
                    primitive: false,
                    dependency: None,
                }],
            },
            dependencies: BTreeSet::new(),
        };

        let text = generate(&entity).to_string();
        assert!(text.contains("pub mod waypoint_fields"));
        assert!(text.contains("pub const DISPLAY_NAME"));
        assert!(text.contains("\"display_name\""));
    }
}
