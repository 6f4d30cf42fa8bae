use crate::error::Error;
use crate::types::{GenerationPlan, RelationKind, RelationMeta, ResolvedRepository};
use heck::ToSnakeCase;
use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use std::fs;
use std::process;
use tracing::{debug, info};

/// Renders a generation plan to the tokens of a repository module: the typed
/// model struct plus the `Repository` impl the host's `crate::api` surface
/// expects.
pub fn render(plan: &GenerationPlan) -> TokenStream {
    let model_ident = format_ident!("{}", plan.model_name);
    let repository_ident = format_ident!("{}Repository", plan.model_name);
    let table_name = plan.table_name.as_str();

    let struct_fields: Vec<TokenStream> = if plan.columns.is_empty() {
        // No schema to draw from (`--no-fields`, or the table is not
        // migrated yet): the identity column is still guaranteed.
        vec![quote! { pub id: i32 }]
    } else {
        plan.columns
            .iter()
            .map(|column| {
                let field_ident = format_ident!("{}", column.column_name.to_snake_case());
                let field_type = &column.column_type;
                quote! { pub #field_ident: #field_type }
            })
            .collect()
    };

    let field_declarations: Vec<TokenStream> = plan
        .plain_fields()
        .map(|column| {
            let name = column.column_name.as_str();
            if column.not_null {
                quote! { Field::new(#name).required() }
            } else {
                quote! { Field::new(#name) }
            }
        })
        .collect();

    let relation_declarations: Vec<TokenStream> =
        plan.relations.iter().map(relation_declaration).collect();

    let relation_uses = relation_uses(plan);

    quote! {
        use sea_orm::prelude::{DateTime, Decimal};

        use crate::api::{Field, Relation, Repository};
        #(#relation_uses)*

        #[derive(Clone, Debug, PartialEq)]
        pub struct #model_ident {
            #(#struct_fields),*
        }

        pub struct #repository_ident;

        impl Repository for #repository_ident {
            type Model = #model_ident;

            const TABLE: &'static str = #table_name;

            fn fields() -> Vec<Field> {
                vec![
                    Field::id(),
                    #(#field_declarations),*
                ]
            }

            fn relations() -> Vec<Relation> {
                vec![
                    #(#relation_declarations),*
                ]
            }
        }
    }
}

fn relation_declaration(relation: &RelationMeta) -> TokenStream {
    let name = relation.relation_name.as_str();

    let constructor = match relation.kind {
        RelationKind::BelongsTo => quote! { Relation::belongs_to(#name) },
        RelationKind::HasMany => quote! { Relation::has_many(#name) },
    };

    match &relation.target {
        Some(target) => {
            let class_ident = format_ident!("{}", target.class_name);
            quote! { #constructor.repository::<#class_ident>() }
        }
        None => constructor,
    }
}

fn relation_uses(plan: &GenerationPlan) -> Vec<TokenStream> {
    let mut targets: Vec<&ResolvedRepository> = plan
        .relations
        .iter()
        .filter_map(|relation| relation.target.as_ref())
        .collect();
    targets.sort_by(|a, b| a.class_name.cmp(&b.class_name));
    targets.dedup_by(|a, b| a.class_name == b.class_name);

    targets
        .into_iter()
        .map(|target| {
            let segments: Vec<Ident> = target
                .module_segments
                .iter()
                .map(|segment| format_ident!("{}", segment))
                .collect();
            let class_ident = format_ident!("{}", target.class_name);
            quote! { use crate::#(#segments::)*#class_ident; }
        })
        .collect()
}

/// Writes the rendered module, refusing to clobber an existing destination
/// unless the plan's overwrite flag is set. Rendering happens before the
/// first write, so there are no partial files.
pub fn write(plan: &GenerationPlan) -> Result<(), Error> {
    if plan.target_file.exists() && !plan.overwrite {
        return Err(Error::DestinationExists(plan.target_file.clone()));
    }

    let tokens = render(plan);

    if let Some(parent) = plan.target_file.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&plan.target_file, tokens.to_string())?;
    info!(path = %plan.target_file.display(), "wrote repository module");

    // Raw token output is still valid source when rustfmt is missing.
    if let Err(err) = process::Command::new("rustfmt").arg(&plan.target_file).output() {
        debug!(error = %err, "rustfmt pass skipped");
    }

    Ok(())
}
