use clap::{Parser, Subcommand};
use image_resize::imaging::{
    Filter, ImageBackend, ResizeError, ResizeOptions, ResizePolicy, RustBackend, checked_plan,
    resize_with, validator_for,
};
use image_resize::output::Outcome;
use image_resize::types::{Color, Size};
use image_resize::{config, naming, output};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

type CliError = Box<dyn std::error::Error + Send + Sync>;

/// Policy name and target, shared by every command that resizes.
#[derive(clap::Args, Clone)]
struct PolicyArgs {
    /// crop, cover, contain, width, height or thumbnail
    policy: String,
    /// Target: WxH for box policies, a single number for width/height
    target: String,
}

impl PolicyArgs {
    fn policy(&self) -> Result<ResizePolicy, ResizeError> {
        Ok(ResizePolicy::parse(&self.policy, &self.target)?)
    }
}

#[derive(Parser)]
#[command(name = "image-resize")]
#[command(about = "Crop, cover, contain, width, height and thumbnail resizing")]
#[command(long_about = "\
Crop, cover, contain, width, height and thumbnail resizing

Policies:

  crop 200x200       center crop, source must be larger on both axes
  cover 200x100      scale to cover the box, then center crop
  contain 200x100    shrink to fit, pad to exactly the box
  width 200          fixed width, height follows the aspect ratio
  height 200         fixed height, width follows the aspect ratio
  thumbnail 200x200  shrink to fit inside the box, never upscale

Run 'image-resize gen-config' to generate a documented config file.")]
#[command(version)]
struct Cli {
    /// Config file (defaults are used when it does not exist)
    #[arg(long, default_value = "image-resize.toml", global = true)]
    config: PathBuf,

    /// Log what each step does (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resize one or more images
    Resize {
        #[command(flatten)]
        policy: PolicyArgs,
        /// Input images
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        /// Output file for a single input, or output directory
        #[arg(short, long)]
        output: PathBuf,
        /// Skip the source size check
        #[arg(long)]
        no_validate: bool,
        /// Resampling filter (overrides config)
        #[arg(long, value_enum)]
        filter: Option<Filter>,
        /// Padding color for contain as R,G,B[,A] (overrides config)
        #[arg(long)]
        background: Option<Color>,
    },
    /// Show the geometry a policy applies to a source size, without pixels
    Plan {
        #[command(flatten)]
        policy: PolicyArgs,
        /// Source size as WxH
        #[arg(long)]
        source: Size,
        /// Plan even when the source is too small for the policy
        #[arg(long)]
        no_validate: bool,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Check whether images are large enough for a policy
    Check {
        #[command(flatten)]
        policy: PolicyArgs,
        /// Input images
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },
    /// Print a stock config file with all options documented
    GenConfig,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Resize {
            policy,
            inputs,
            output: out,
            no_validate,
            filter,
            background,
        } => {
            let policy = policy.policy()?;
            let config = config::load_config(&cli.config)?;
            init_thread_pool(&config.processing);

            let mut options = config.options();
            if let Some(filter) = filter {
                options.filter = filter;
            }
            if let Some(background) = background {
                options.background = background;
            }
            let validate = config.resize.validate && !no_validate;
            let backend = RustBackend::with_quality(config.output.quality);

            let batch = inputs.len() > 1 || out.is_dir();
            let targets = if batch {
                std::fs::create_dir_all(&out)?;
                naming::batch_output_paths(&inputs, &out)
            } else {
                vec![Ok(out.clone())]
            };
            info!(%policy, files = inputs.len(), validate, "resizing");

            let outcomes: Vec<Outcome> = inputs
                .par_iter()
                .zip(&targets)
                .map(|(input, target)| {
                    let result = target
                        .as_ref()
                        .map_err(|collision| -> CliError { collision.clone().into() })
                        .and_then(|target| {
                            let (source, produced) =
                                resize_file(&backend, policy, input, target, &options, validate)?;
                            Ok(output::format_resized(input, source, target, produced))
                        });
                    match result {
                        Ok(line) => Outcome::Done(line),
                        Err(e) => Outcome::Failed {
                            input: input.clone(),
                            error: e.to_string(),
                        },
                    }
                })
                .collect();

            finish_batch("Resized", &outcomes)?;
        }
        Command::Plan {
            policy,
            source,
            no_validate,
            json,
        } => {
            let policy = policy.policy()?;
            let config = config::load_config(&cli.config)?;
            let validate = config.resize.validate && !no_validate;
            let plan = checked_plan(&policy, source, config.resize.background, validate)?;
            if json {
                let doc = serde_json::json!({
                    "source": source,
                    "policy": policy,
                    "plan": plan,
                    "output": plan.output_size(),
                });
                println!("{}", serde_json::to_string_pretty(&doc)?);
            } else {
                output::print_plan(&policy.to_string(), source, &plan);
            }
        }
        Command::Check { policy, inputs } => {
            let policy = policy.policy()?;
            let config = config::load_config(&cli.config)?;
            init_thread_pool(&config.processing);
            let backend = RustBackend::new();
            let check = validator_for(policy);

            let outcomes: Vec<Outcome> = inputs
                .par_iter()
                .map(|input| match backend.identify(input) {
                    Ok(source) => match check(source) {
                        Ok(()) => Outcome::Done(output::format_check(input, source, None)),
                        Err(e) => {
                            let reason = e.to_string();
                            let line = output::format_check(input, source, Some(reason.as_str()));
                            Outcome::Rejected(line)
                        }
                    },
                    Err(e) => Outcome::Failed {
                        input: input.clone(),
                        error: e.to_string(),
                    },
                })
                .collect();

            finish_batch("Checked", &outcomes)?;
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Open, resize and save one file. Returns source and output sizes.
fn resize_file(
    backend: &RustBackend,
    policy: ResizePolicy,
    input: &Path,
    target: &Path,
    options: &ResizeOptions,
    validate: bool,
) -> Result<(Size, Size), CliError> {
    let image = backend.open(input)?;
    let source = backend.dimensions(&image);
    let resized = resize_with(backend, policy, &image, options, validate)?;
    backend.save(&resized, target)?;
    debug!(input = %input.display(), output = %target.display(), "saved");
    Ok((source, backend.dimensions(&resized)))
}

/// Print per-file lines in input order and the summary. Errors if any input
/// failed or was rejected, so scripts see a non-zero exit.
fn finish_batch(verb: &str, outcomes: &[Outcome]) -> Result<(), CliError> {
    let (lines, failed) = output::format_outcomes(outcomes);
    output::print_lines(&lines);
    println!();
    println!(
        "{}",
        output::format_summary(verb, outcomes.len() - failed, failed)
    );
    if failed > 0 {
        return Err(format!("{failed} of {} images failed", outcomes.len()).into());
    }
    Ok(())
}

/// Logs go to stderr so stdout stays clean for results.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores. Config can only lower it.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
