// Iconsmith - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config file loading and logging initialisation
// 3. Running the icon build with console progress
// 4. Turning failures into guidance text and an exit status

use iconsmith::app::build::run_build;
use iconsmith::core::model::{BuildPlan, BuildProgress};
use iconsmith::core::raster::DefaultRasterizer;
use iconsmith::platform::{config, fs};
use iconsmith::util::constants;
use iconsmith::util::error::{ErrorTier, IconError};
use iconsmith::util::logging;

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Iconsmith - render an SVG icon into a multi-resolution ICO and a PNG.
///
/// With no arguments, reads `public/icon.svg` beside the project root and
/// writes `public/icon.ico` (16-256 px) and `public/icon.png` (512 px).
#[derive(Parser, Debug)]
#[command(name = "iconsmith", version, about)]
struct Cli {
    /// Asset directory containing icon.svg.
    #[arg(short = 'a', long = "asset-dir")]
    asset_dir: Option<PathBuf>,

    /// Config file (defaults to iconsmith.toml beside the asset directory).
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Exit with a non-zero status when the build fails.
    #[arg(long = "strict")]
    strict: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // The config file is located from the CLI asset dir (or the default one),
    // and may in turn redirect the asset dir.
    let lookup_dir = cli.asset_dir.clone().unwrap_or_else(fs::default_asset_dir);
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| config::default_config_path(&lookup_dir));
    let (app_config, config_warnings) = config::load_config(&config_path);

    logging::init(cli.debug, app_config.log_level.as_deref());

    tracing::info!(
        version = constants::APP_VERSION,
        debug = cli.debug,
        config = %config_path.display(),
        "Iconsmith starting"
    );

    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
        eprintln!("Warning: {warning}");
    }

    let asset_dir = cli
        .asset_dir
        .or_else(|| app_config.asset_dir.clone())
        .unwrap_or_else(fs::default_asset_dir);
    let plan = app_config.plan(&asset_dir);
    let strict = cli.strict || app_config.strict;

    let rasterizer = DefaultRasterizer::default();
    match run_build(&plan, &rasterizer, print_progress) {
        Ok(report) => {
            tracing::info!(
                ico_bytes = report.ico_bytes,
                png_bytes = report.png_bytes,
                "Icon build complete"
            );
            println!("\nIcon generation complete!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, tier = ?e.tier(), "Icon build failed");
            print_failure(&e, &plan);
            if strict {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
    }
}

/// Console line for each build event.
fn print_progress(event: BuildProgress) {
    match event {
        BuildProgress::Started { .. } => println!("Generating icon images..."),
        BuildProgress::SourceLoaded { .. } => {}
        BuildProgress::SizeRendered { size } => println!("  Generated {size}x{size}"),
        BuildProgress::ContainerWritten { path, .. } => {
            println!("\nSuccessfully created: {}", path.display())
        }
        BuildProgress::ReferenceWritten { path, .. } => {
            println!("Also created: {}", path.display())
        }
    }
}

/// Explain a failure and suggest converting the icon by hand.
fn print_failure(error: &IconError, plan: &BuildPlan) {
    let source = plan.source_path.display();
    match error.tier() {
        ErrorTier::EnvironmentUnavailable => {
            println!("Error: Required rendering support is not available");
            println!("  {error}");
            println!("\nPlease install a build with rendering support:");
            println!("  {}", constants::INSTALL_HINT);
            println!(
                "\nAlternative: Use an online SVG to ICO converter with the {source} file"
            );
        }
        ErrorTier::OperationFailed => {
            println!("Error generating icons: {error}");
            println!("\nAlternative solution:");
            println!("1. Open {source} in a browser");
            println!(
                "2. Use an online converter like {}",
                constants::FALLBACK_CONVERTER_URL
            );
            println!("3. Save the result as {}", plan.ico_path.display());
        }
    }
}
