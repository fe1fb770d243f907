//! garment-impact CLI
//!
//! Usage: garment-impact <COMMAND>
//!
//! Commands:
//!   calculate   Compute the impact of one garment choice
//!   collection  Compute the combined impact of a JSON list of garments
//!   factors     List the effective factor table
//!   industry    Show fashion-industry baseline figures
//!   check       Validate configuration

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use garment_impact::config::{Config, LoadedConfig, OutputFormat};
use garment_impact::presentation::output::{self, TextRenderer};
use garment_impact::presentation::{create_calculator, Cli, Commands};
use garment_impact::{
    Category, GarmentInput, ImpactCalculator, ImpactError, IndustryBaseline, Material,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut json = cli.json;

    let result = run(cli, &mut json);

    if let Err(err) = &result {
        if json {
            let event = match err.downcast_ref::<ImpactError>() {
                Some(impact) => output::impact_error_event(impact),
                None => output::error_event(&format!("{:#}", err)),
            };
            println!("{}", event);
            std::process::exit(1);
        }
    }
    result
}

/// Settings shared by every command after config and flags are merged
struct Session {
    loaded: LoadedConfig,
    json: bool,
    text: TextRenderer,
}

fn run(cli: Cli, json: &mut bool) -> Result<()> {
    let cwd = std::env::current_dir().context("could not determine working directory")?;

    let mut loaded = Config::resolve(cli.config.as_deref(), &cwd)?;
    loaded.config = loaded.config.with_env_overrides();
    if let Some(precision) = cli.precision {
        loaded.config.output.precision = precision;
    }
    if cli.json {
        loaded.config.output.format = OutputFormat::Json;
    }
    *json = loaded.config.output.format == OutputFormat::Json;

    garment_impact::logging::init(cli.verbose, loaded.config.logging.level.as_deref());
    match &loaded.source {
        Some(path) => tracing::info!(path = %path.display(), "using config file"),
        None => tracing::info!("using built-in defaults"),
    }
    for warning in &loaded.warnings {
        tracing::warn!("{}", warning);
    }

    let ctx = Session {
        text: TextRenderer::new(loaded.config.output.precision),
        json: *json,
        loaded,
    };

    match cli.command {
        Commands::Calculate {
            category,
            material,
            quantity,
        } => cmd_calculate(&ctx, GarmentInput::new(category, material, quantity)),
        Commands::Collection { file } => cmd_collection(&ctx, &file),
        Commands::Factors { category, material } => {
            cmd_factors(&ctx, category.as_deref(), material.as_deref())
        }
        Commands::Industry {
            category,
            material,
            quantity,
        } => {
            let input = match (category, material) {
                (Some(c), Some(m)) => Some(GarmentInput::new(c, m, quantity)),
                _ => None,
            };
            cmd_industry(&ctx, input)
        }
        Commands::Check => cmd_check(&ctx),
    }
}

fn calculator(ctx: &Session) -> Result<ImpactCalculator> {
    let calc = create_calculator(&ctx.loaded.config).context("could not build factor table")?;
    Ok(calc)
}

fn cmd_calculate(ctx: &Session, input: GarmentInput) -> Result<()> {
    let calc = calculator(ctx)?;
    tracing::debug!(?input, "calculating impact");
    let report = calc.compute_impact_from_input(&input)?;

    if ctx.json {
        println!("{}", output::report_event(&report));
    } else {
        print!("{}", ctx.text.report(&report));
    }
    Ok(())
}

fn cmd_collection(ctx: &Session, file: &Path) -> Result<()> {
    let content = if file == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("could not read garments from stdin")?;
        buf
    } else {
        std::fs::read_to_string(file)
            .with_context(|| format!("could not read {}", file.display()))?
    };

    let inputs: Vec<GarmentInput> = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a JSON array of garments", file.display()))?;
    tracing::debug!(items = inputs.len(), "calculating collection impact");

    let calc = calculator(ctx)?;
    let report = calc.compute_collection_from_inputs(&inputs)?;

    if ctx.json {
        println!("{}", output::collection_event(&report));
    } else {
        print!("{}", ctx.text.collection(&report));
    }
    Ok(())
}

fn cmd_factors(ctx: &Session, category: Option<&str>, material: Option<&str>) -> Result<()> {
    let category = category.map(str::parse::<Category>).transpose()?;
    let material = material.map(str::parse::<Material>).transpose()?;
    let calc = calculator(ctx)?;

    if ctx.json {
        println!("{}", output::factors_event(calc.table(), category, material));
    } else {
        print!("{}", ctx.text.factors(calc.table(), category, material));
    }
    Ok(())
}

fn cmd_industry(ctx: &Session, input: Option<GarmentInput>) -> Result<()> {
    let baseline = IndustryBaseline::default();
    let report = match input {
        Some(input) => Some(calculator(ctx)?.compute_impact_from_input(&input)?),
        None => None,
    };
    let comparison = report.as_ref().map(|r| (r, baseline.compare(r)));
    let comparison = comparison.as_ref().map(|(r, c)| (*r, c));

    if ctx.json {
        println!("{}", output::industry_event(&baseline, comparison));
    } else {
        print!("{}", ctx.text.industry(&baseline, comparison));
    }
    Ok(())
}

fn cmd_check(ctx: &Session) -> Result<()> {
    let table = ctx
        .loaded
        .config
        .build_table()
        .context("config describes an invalid factor table")?;

    if ctx.json {
        println!("{}", output::check_event(&ctx.loaded, &table));
    } else {
        print!("{}", ctx.text.check(&ctx.loaded, &table));
    }
    Ok(())
}
