use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use dotenv::dotenv;
use heck::ToSnakeCase;
use repogen::pattern::REPOSITORY_FILE_SUFFIX;
use repogen::types::GenerationPlan;
use repogen::{
    generator, get_database_schema, infer, naming, Config, Error, Inference, PathPatternDetector,
    RepositoryResolver,
};
use sqlx::SqlitePool;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "repogen", about = "scaffold an API repository module")]
struct Args {
    /// base name of the new repository class, e.g. `Post` or `PostRepository`
    name: String,

    /// overwrite an existing destination without asking
    #[arg(long)]
    force: bool,

    /// skip schema introspection and emit only the identity field
    #[arg(long)]
    no_fields: bool,

    /// sqlite connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// host project directory
    #[arg(long, default_value = ".")]
    project_root: PathBuf,

    /// debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    if let Err(err) = run(args).await {
        eprintln!("{} {}", style("error:").red().bold(), style(err).red());
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let config = Config::load(&args.project_root)?;

    let model_name = naming::model_name(&args.name);
    let table_name = naming::table_name(&model_name);

    let detector = PathPatternDetector::new(&args.project_root, &config);
    let detection = detector.detect(&model_name);

    let target_file = detection.target_dir.join(format!(
        "{}{}",
        model_name.to_snake_case(),
        REPOSITORY_FILE_SUFFIX
    ));

    let inferred = if args.no_fields {
        Inference::default()
    } else {
        let database_url = args
            .database_url
            .clone()
            .or_else(|| config.database_url.clone())
            .unwrap_or_else(|| "sqlite://database.db".to_string());

        let connection = SqlitePool::connect(&database_url)
            .await
            .map_err(|err| Error::SchemaUnavailable(err.to_string()))?;
        let schema = get_database_schema(connection).await?;

        let resolver = RepositoryResolver::conventional(&args.project_root, &config);
        infer(&table_name, &schema, &resolver)
    };

    let mut plan = GenerationPlan {
        model_name,
        table_name,
        pattern: detection.pattern,
        target_file,
        columns: inferred.columns,
        relations: inferred.relations,
        overwrite: args.force,
    };

    match generator::write(&plan) {
        Ok(()) => {}
        Err(Error::DestinationExists(path)) => {
            let proceed = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(format!("{} already exists. overwrite?", path.display()))
                .default(false)
                .interact()
                .context("overwrite confirmation failed")?;

            if !proceed {
                println!("{}", style("aborted, nothing written").yellow());
                return Ok(());
            }

            plan.overwrite = true;
            generator::write(&plan)?;
        }
        Err(err) => return Err(err.into()),
    }

    println!(
        "{} {} {}",
        style("created").green().bold(),
        style(plan.target_file.display()).yellow(),
        style(format!("({})", plan.pattern)).dim()
    );

    Ok(())
}
