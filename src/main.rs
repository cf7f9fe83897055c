//! owloop CLI: inspect ontology snapshots through descriptors.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use miette::{IntoDiagnostic, Result};

use owloop::config::OntologyConfig;
use owloop::descriptor::{
    Descriptor, FullConceptDesc, FullDataPropertyDesc, FullIndividualDesc,
    FullObjectPropertyDesc,
};
use owloop::ground::GroundConfig;
use owloop::ontology::{EntityKind, MemOntology, OntologyRef};

#[derive(Parser)]
#[command(name = "owloop", version, about = "Descriptor-based OWL ontology synchronization")]
struct Cli {
    /// Ontology config file.
    #[arg(long, global = true, default_value = "owloop.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a new ontology config.
    Init {
        /// Registry name of the ontology.
        #[arg(long)]
        name: String,

        /// Base IRI, e.g. http://example.org/robots.
        #[arg(long)]
        iri: String,

        /// Snapshot file the ontology is loaded from and saved to.
        #[arg(long)]
        file: Option<PathBuf>,

        /// Defer reasoner synchronization.
        #[arg(long)]
        buffering: bool,
    },

    /// Render the full descriptor of an entity.
    Show {
        /// Entity kind.
        #[arg(long, value_enum, default_value = "class")]
        kind: KindArg,

        /// Entity name.
        name: String,
    },

    /// List asserted axioms as JSON.
    Axioms {
        /// Only axioms whose top-level slots mention this entity name.
        #[arg(long)]
        entity: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Class,
    Individual,
    ObjectProperty,
    DataProperty,
}

impl From<KindArg> for EntityKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Class => EntityKind::Class,
            KindArg::Individual => EntityKind::Individual,
            KindArg::ObjectProperty => EntityKind::ObjectProperty,
            KindArg::DataProperty => EntityKind::DataProperty,
        }
    }
}

fn open(config: &Path) -> Result<MemOntology> {
    let config = OntologyConfig::load(config).into_diagnostic()?;
    MemOntology::open(&config).into_diagnostic()
}

fn render<D: Descriptor + std::fmt::Display>(config: GroundConfig) -> Result<String> {
    let mut descriptor = D::new(config).into_diagnostic()?;
    descriptor.read_expression_axioms().into_diagnostic()?;
    Ok(descriptor.to_string())
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init {
            name,
            iri,
            file,
            buffering,
        } => {
            // Validates the IRI before anything is written.
            MemOntology::new(&name, &iri).into_diagnostic()?;
            let mut config = OntologyConfig::new(name, iri).with_buffering(buffering);
            if let Some(file) = file {
                config = config.with_file(file);
            }
            config.save(&cli.config).into_diagnostic()?;
            println!("Wrote {}", cli.config.display());
        }

        Commands::Show { kind, name } => {
            let ontology = OntologyRef::new(open(&cli.config)?);
            let kind = EntityKind::from(kind);
            let entity = ontology.resolve(kind, &name).into_diagnostic()?;
            let ground = GroundConfig::new(entity, &ontology);
            let rendered = match kind {
                EntityKind::Class => render::<FullConceptDesc>(ground)?,
                EntityKind::Individual => render::<FullIndividualDesc>(ground)?,
                EntityKind::ObjectProperty => render::<FullObjectPropertyDesc>(ground)?,
                EntityKind::DataProperty => render::<FullDataPropertyDesc>(ground)?,
            };
            println!("{rendered}");
        }

        Commands::Axioms { entity } => {
            let ontology = open(&cli.config)?;
            let axioms: Vec<_> = ontology
                .axioms()
                .into_iter()
                .filter(|axiom| {
                    entity.as_deref().is_none_or(|name| {
                        axiom.slots().iter().any(|(e, _)| e.name() == name)
                    })
                })
                .collect();
            let json = serde_json::to_string_pretty(&axioms).into_diagnostic()?;
            println!("{json}");
        }
    }

    Ok(())
}
