//! sketchforge - photo to sketch conversion through Gemini image models

#![allow(missing_docs)]

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context as _;
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::{debug, info};

use sketchforge::utils::logging::{LogFormat, init_logging};
use sketchforge::{
    BatchRunner, BatchUpdate, Config, EncodedImage, ItemOutcome, SessionEvent, SketchGenerator,
    SketchStyle, Studio, StyleParams, UploadMode, create_generator,
};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (git ",
    env!("GIT_HASH"),
    ", ",
    env!("RUST_VERSION"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "sketchforge", version, long_version = LONG_VERSION, about)]
struct Cli {
    /// YAML configuration file
    #[arg(long, short = 'c', global = true, env = "SKETCHFORGE_CONFIG")]
    config: Option<PathBuf>,

    /// Log output format (pretty or json)
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Turn one photo into a sketch.
    Sketch {
        /// Photo to sketch
        input: PathBuf,
        /// Output file; defaults to `<stem><suffix>.<ext>` next to the input
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[command(flatten)]
        style: StyleArgs,
    },
    /// Sketch several photos, one after another.
    Batch {
        /// Photos to sketch, processed in order
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        /// Output directory; defaults to each input's directory
        #[arg(short = 'o', long = "output-dir")]
        output_dir: Option<PathBuf>,
        #[command(flatten)]
        style: StyleArgs,
    },
    /// Modify an existing sketch with a free-text instruction.
    Refine {
        /// Sketch to modify
        input: PathBuf,
        /// What to change, e.g. "make the lines thicker"
        #[arg(short, long)]
        instruction: String,
        /// Output file; defaults to `<stem><suffix>.<ext>` next to the input
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Style the sketch is in; defaults to the configured style
        #[arg(long)]
        style: Option<SketchStyle>,
    },
    /// Generate a source image from a text description.
    Prompt {
        /// Description of the image
        text: String,
        /// Output file; defaults to `generated.<ext>` in the output directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the available sketch styles.
    Styles,
}

#[derive(Args, Debug, Default)]
struct StyleArgs {
    /// Sketch style, e.g. vector-pencil or coloring-book
    #[arg(long)]
    style: Option<SketchStyle>,
    /// Detail level, 0-100
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    detail: Option<u8>,
    /// Shading intensity, 0-100
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    shading: Option<u8>,
    /// Stroke weight, 0-100
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    stroke: Option<u8>,
    /// Line roughness, 0-100
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    roughness: Option<u8>,
}

impl StyleArgs {
    /// Command-line values over the configured defaults
    fn apply(&self, base: StyleParams) -> StyleParams {
        StyleParams {
            style: self.style.unwrap_or(base.style),
            detail: self.detail.unwrap_or(base.detail),
            shading: self.shading.unwrap_or(base.shading),
            stroke: self.stroke.unwrap_or(base.stroke),
            roughness: self.roughness.unwrap_or(base.roughness),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = Config::load(cli.config.as_deref())
        .await
        .context("failed to load configuration")?;

    let level = match cli.verbose {
        0 => config.logging().level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    init_logging(&level, cli.log_format.unwrap_or(config.logging().format))?;
    debug!(version = LONG_VERSION, "sketchforge starting");

    match cli.command {
        Command::Styles => {
            print_styles();
            Ok(ExitCode::SUCCESS)
        }
        Command::Sketch {
            input,
            output,
            style,
        } => {
            let params = style.apply(*config.defaults());
            let mut studio = Studio::with_params(generator(&config)?, params);
            studio.dispatch(SessionEvent::SourceSelected(load_image(&input).await?));

            let sketch = studio.create_sketch().await?;
            let path = output
                .unwrap_or_else(|| config.output().output_path(&input, sketch.file_extension()));
            save_image(&sketch, &path).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Refine {
            input,
            instruction,
            output,
            style,
        } => {
            let mut studio = Studio::with_params(generator(&config)?, *config.defaults());
            if let Some(style) = style {
                studio.dispatch(SessionEvent::StyleSelected(style));
            }
            studio.dispatch(SessionEvent::SourceSelected(load_image(&input).await?));

            let refined = studio.refine(&instruction).await?;
            let path = output
                .unwrap_or_else(|| config.output().output_path(&input, refined.file_extension()));
            save_image(&refined, &path).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Prompt { text, output } => {
            let mut studio = Studio::with_params(generator(&config)?, *config.defaults());
            studio.dispatch(SessionEvent::UploadModeChanged(UploadMode::Generate));
            studio.dispatch(SessionEvent::GenerationPromptChanged(text));

            let image = studio.generate_from_prompt().await?;
            let path = output.unwrap_or_else(|| {
                let name = format!("generated.{}", image.file_extension());
                match &config.output().directory {
                    Some(dir) => dir.join(name),
                    None => PathBuf::from(name),
                }
            });
            save_image(&image, &path).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Batch {
            inputs,
            output_dir,
            style,
        } => {
            let params = style.apply(*config.defaults());
            run_batch(&config, generator(&config)?, inputs, output_dir, params).await
        }
    }
}

async fn run_batch(
    config: &Config,
    generator: Arc<dyn SketchGenerator>,
    inputs: Vec<PathBuf>,
    output_dir: Option<PathBuf>,
    params: StyleParams,
) -> anyhow::Result<ExitCode> {
    let sources = futures::future::try_join_all(inputs.iter().map(|path| load_image(path))).await?;

    let mut output = config.output().clone();
    if output_dir.is_some() {
        output.directory = output_dir;
    }
    if let Some(dir) = &output.directory {
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }

    let report = BatchRunner::new(generator)
        .run(sources, params, |update| match update {
            BatchUpdate::Progress(progress) => {
                eprintln!(
                    "[{}/{}] {}",
                    progress.current,
                    progress.total,
                    inputs[progress.current - 1].display()
                );
            }
            BatchUpdate::ItemSettled { index, items } => {
                if let Some(message) = items[index].error() {
                    eprintln!("    failed: {}", message);
                }
            }
            BatchUpdate::Started { .. } | BatchUpdate::Finished => {}
        })
        .await;

    for (item, input) in report.items.iter().zip(&inputs) {
        match &item.outcome {
            ItemOutcome::Rendered(sketch) => {
                let path = output.output_path(input, sketch.file_extension());
                save_image(sketch, &path).await?;
            }
            ItemOutcome::Failed(message) => {
                println!("{} -> failed: {}", input.display(), message);
            }
            ItemOutcome::Pending => {}
        }
    }

    println!(
        "{} of {} rendered, {} failed ({:.1?})",
        report.summary.succeeded,
        report.summary.total,
        report.summary.failed,
        report.summary.total_duration
    );
    info!(batch_id = %report.batch_id, "Batch complete");

    Ok(if report.all_failed() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn generator(config: &Config) -> anyhow::Result<Arc<dyn SketchGenerator>> {
    create_generator(config.gemini().clone()).context("failed to set up the Gemini client")
}

async fn load_image(path: &Path) -> anyhow::Result<EncodedImage> {
    EncodedImage::from_path(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))
}

async fn save_image(image: &EncodedImage, path: &Path) -> anyhow::Result<()> {
    image
        .save(path)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("{}", path.display());
    Ok(())
}

fn print_styles() {
    for style in SketchStyle::ALL {
        println!("{:<15} {:<15} {}", style.id(), style.display_name(), style.description());
    }
}
