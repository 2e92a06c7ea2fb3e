use dynamap_schema::node::Entity;
use proc_macro2::TokenStream;
use quote::quote;

/// Emit the schema-wide table registry.
///
/// One match arm per table-annotated entity; an unknown identity resolves
/// to an error enumerating every known identity. Rebuilt fresh every run;
/// there is no incremental state to go stale.
#[must_use]
pub fn generate(entities: &[&Entity]) -> TokenStream {
    let known = entities.iter().map(|entity| entity.path.as_str());

    let arms = entities.iter().map(|entity| {
        let path = entity.path.as_str();
        let table = entity.table_name();

        quote! {
            #path => Ok(#table),
        }
    });

    let doc = format!(
        "Resolves the storage table name for a schema entity identity. \
         Covers {} table{}. DO NOT EDIT: regenerated on every build.",
        entities.len(),
        if entities.len() == 1 { "" } else { "s" },
    );

    quote! {
        /// Every entity identity the generated registry knows about.
        pub const KNOWN_TABLE_ENTITIES: &[&str] = &[#(#known),*];

        #[doc = #doc]
        pub fn resolve_table_name(
            entity: &str,
        ) -> Result<&'static str, ::dynamap::error::UnknownEntityError> {
            match entity {
                #(#arms)*
                other => Err(::dynamap::error::UnknownEntityError::new(
                    other,
                    KNOWN_TABLE_ENTITIES,
                )),
            }
        }
    }
}

///
/// TESTS
///
