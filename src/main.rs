use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use ui_render_core::config::{self, ContractPolicy, RenderConfig};
use ui_render_core::contract::overlay;
use ui_render_core::props::bag_from_json;
use ui_render_core::{logging, ComponentRegistry, RefHandle, Renderer};

#[derive(Parser)]
#[command(
    name = "ui-render",
    version,
    about = "Inspect component catalogs and resolve render plans",
    long_about = None
)]
struct Cli {
    /// JSON file with an array of component definitions
    #[arg(short, long)]
    components: PathBuf,

    /// Config file (default: ~/.ui-render/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List component display names
    List,
    /// Print component metadata as JSON
    Inspect {
        /// Only this component
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Resolve a render plan for a JSON prop bag
    Render {
        /// Component display name
        #[arg(short, long)]
        name: String,
        /// Props as a JSON object
        #[arg(short, long, default_value = "{}")]
        props: String,
        /// Forwarded reference id
        #[arg(long = "ref")]
        ref_id: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let render_config = match &cli.config {
        Some(path) => config::load_config_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => config::load_config(),
    };
    let _guard = logging::init(&render_config);

    let registry = ComponentRegistry::load(&cli.components)
        .with_context(|| format!("loading components from {}", cli.components.display()))?;

    match cli.command {
        Command::List => {
            for name in registry.names() {
                println!("{}", name);
            }
        }
        Command::Inspect { name } => match name {
            Some(name) => {
                let spec = registry.require(&name)?;
                println!("{}", serde_json::to_string_pretty(&spec.metadata())?);
            }
            None => println!("{}", registry.metadata_json()?),
        },
        Command::Render {
            name,
            props,
            ref_id,
        } => render_plan(&registry, &render_config, &name, &props, ref_id)?,
    }

    Ok(())
}

fn render_plan(
    registry: &ComponentRegistry,
    render_config: &RenderConfig,
    name: &str,
    props: &str,
    ref_id: Option<u64>,
) -> Result<()> {
    let spec = registry.require(name)?;
    let props = bag_from_json(serde_json::from_str(props).context("parsing --props")?);
    let renderer = Renderer::from_config(render_config);

    let plan = renderer.render(spec, &props, ref_id.map(RefHandle::new));
    info!(component = name, element = %plan.element_type, "Rendered plan");

    let mut output = serde_json::Map::new();
    output.insert("plan".into(), serde_json::to_value(&plan)?);
    if render_config.contract_policy == ContractPolicy::Collect {
        output.insert("violations".into(), serde_json::to_value(overlay().take())?);
    }
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
