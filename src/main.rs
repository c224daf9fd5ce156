use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use oklch_hue::shades::{chroma_ramp, hue_ramp, lightness_ramp, linear_gradient};
use oklch_hue::{shade_ladder, LinearRgb, Oklab, Oklch, Rgb};
use poemtint::api;
use poemtint::assets::AssetLoader;
use poemtint::models::{AppConfig, Mode, Mood};
use poemtint::server;
use poemtint::services::gradient_art::{DEFAULT_GRID_SIZE, MAX_GRID_SIZE};
use poemtint::services::{derive_palette, generate_artwork, ImageHueService};

#[derive(Parser)]
#[command(name = "poemtint")]
#[command(about = "OKLCH theme colors derived from the dominant hue of an image")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Extract the dominant hue of an image file
    Hue {
        /// Image file (PNG, JPEG, GIF, WebP, ...)
        image: PathBuf,

        /// Print the full analysis as JSON
        #[arg(long)]
        json: bool,
    },
    /// Convert an OKLCH color to hex and RGB (gamut-mapped)
    Oklch {
        /// Lightness, 0..1
        l: f64,
        /// Chroma, >= 0
        c: f64,
        /// Hue in degrees
        #[arg(allow_negative_numbers = true)]
        h: f64,
    },
    /// Convert a hex color to OKLCH
    Hex {
        /// Six hex digits, optional leading '#'
        hex: String,
    },
    /// Print the shade ladder around an OKLCH color
    Shades {
        l: f64,
        c: f64,
        #[arg(allow_negative_numbers = true)]
        h: f64,
    },
    /// Print a theme palette as CSS custom properties
    Theme {
        /// Theme hue in degrees (default from config)
        #[arg(long, allow_negative_numbers = true)]
        hue: Option<f64>,

        /// intense or vintage
        #[arg(long)]
        mood: Option<Mood>,

        /// light or dark
        #[arg(long)]
        mode: Option<Mode>,

        /// Take the hue from this image instead
        #[arg(long, conflicts_with = "hue")]
        image: Option<PathBuf>,
    },
    /// Print generated gradient-art colors
    Art {
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Grid side length
        #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
        size: usize,
    },
    /// Write the embedded config.yaml to disk for customization
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Poemtint API",
        description = "OKLCH theme colors derived from the dominant hue of an image",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_oklch,
        api::handle_hex,
        api::handle_shades,
        api::handle_theme,
        api::handle_hue,
        api::handle_art,
    ),
    components(schemas(
        api::OklchColorResponse,
        api::HexColorResponse,
        api::ShadesResponse,
        api::ShadeValue,
        api::OklchValue,
        api::OklabValue,
        api::RgbValue,
        api::HueResponse,
        api::ColorCount,
        poemtint::services::ThemePalette,
        poemtint::services::PaletteEntry,
        poemtint::services::ColorValue,
        poemtint::services::Artwork,
        poemtint::services::ArtworkColors,
        poemtint::services::GradientCell,
        Mood,
        Mode,
    )),
    tags(
        (name = "Color", description = "OKLCH and hex conversion"),
        (name = "Theme", description = "Theme palette derivation"),
        (name = "Hue", description = "Dominant hue extraction"),
        (name = "Art", description = "Gradient artwork colors")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Init { force }) => run_init_command(force),
        Some(command) => {
            init_cli_tracing();
            run_cli_command(command).await
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for CLI
fn init_cli_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "poemtint=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn load_config() -> anyhow::Result<AppConfig> {
    let loader = AssetLoader::from_env();
    if let Err(e) = loader.seed_if_configured() {
        tracing::warn!(%e, "Failed to seed config file");
    }
    let config = AppConfig::load_from_assets(&loader);
    config.validate()?;
    Ok(config)
}

async fn run_cli_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Hue { image, json } => run_hue_command(&image, json).await,
        Commands::Oklch { l, c, h } => {
            run_oklch_command(Oklch::new(l, c, h));
            Ok(())
        }
        Commands::Hex { hex } => run_hex_command(&hex),
        Commands::Shades { l, c, h } => {
            let config = load_config()?;
            run_shades_command(Oklch::new(l, c, h), &config.shades);
            Ok(())
        }
        Commands::Theme {
            hue,
            mood,
            mode,
            image,
        } => run_theme_command(hue, mood, mode, image.as_deref()).await,
        Commands::Art { seed, size } => run_art_command(seed, size),
        Commands::Serve | Commands::Init { .. } => Ok(()),
    }
}

async fn run_hue_command(image: &Path, json: bool) -> anyhow::Result<()> {
    let config = load_config()?;
    let service = ImageHueService::new(&config.extraction);
    let analysis = service
        .hue_from_path(image)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {e}", image.display()))?;

    if json {
        let response = api::HueResponse::from(analysis);
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", analysis.hue);
    }
    Ok(())
}

fn run_shades_command(base: Oklch, offsets: &[f64]) {
    for shade in shade_ladder(base, offsets) {
        println!("{:+.1}  {}  {}", shade.offset, shade.hex(), shade.label());
    }
    println!();
    println!("hue:       {}", linear_gradient(&hue_ramp(base.l, base.c)));
    println!("chroma:    {}", linear_gradient(&chroma_ramp(base.l, base.h)));
    println!("lightness: {}", linear_gradient(&lightness_ramp(base.c, base.h)));
}

fn run_oklch_command(color: Oklch) {
    let rgb = color.to_rgb();
    println!("css:  {}", color.to_css());
    println!("hex:  {}", rgb.to_hex());
    println!("rgb:  {}", rgb.to_css());
}

fn run_hex_command(hex: &str) -> anyhow::Result<()> {
    let rgb: Rgb = hex.parse().map_err(|e| anyhow::anyhow!("'{hex}': {e}"))?;
    let oklab = Oklab::from(LinearRgb::from(rgb));
    let oklch = Oklch::from(oklab);

    println!("hex:   {}", rgb.to_hex());
    println!("rgb:   {}", rgb.to_css());
    println!("oklab: {:.4} {:.4} {:.4}", oklab.l, oklab.a, oklab.b);
    println!("oklch: {:.4} {:.4} {:.2}", oklch.l, oklch.c, oklch.h);
    Ok(())
}

async fn run_theme_command(
    hue: Option<f64>,
    mood: Option<Mood>,
    mode: Option<Mode>,
    image: Option<&Path>,
) -> anyhow::Result<()> {
    let config = load_config()?;

    let hue = match image {
        Some(path) => {
            let service = ImageHueService::new(&config.extraction);
            service
                .hue_from_path(path)
                .await
                .map_err(|e| anyhow::anyhow!("{}: {e}", path.display()))?
                .hue
        }
        None => hue.unwrap_or(config.defaults.hue),
    };
    let mood = mood.unwrap_or(config.defaults.mood);
    let mode = mode.unwrap_or(config.defaults.mode);

    let palette = derive_palette(config.themes.tokens(mood), hue, mood, mode);
    println!("/* {mood} {mode}, hue {} (accent {}) */", palette.hue, palette.accent_hue);
    print!("{}", palette.css_declarations());
    Ok(())
}

fn run_art_command(seed: Option<u64>, size: usize) -> anyhow::Result<()> {
    if size == 0 || size > MAX_GRID_SIZE {
        anyhow::bail!("--size must be between 1 and {MAX_GRID_SIZE}");
    }
    let art = generate_artwork(seed, size);

    println!("seed:   {}", art.seed);
    println!("color1: {} (hue {})", art.colors.color1, art.colors.hue1);
    println!("color2: {} (hue {})", art.colors.color2, art.colors.hue2);
    for row in art.grid.chunks(size) {
        let line: Vec<String> = row.iter().map(|c| format!("{:>3}", c.direction)).collect();
        println!("{}", line.join(" "));
    }
    Ok(())
}

/// Extract the embedded config.yaml
fn run_init_command(force: bool) -> anyhow::Result<()> {
    let report = AssetLoader::from_env().init(force)?;

    for f in &report.written {
        println!("Extracted {f}");
    }
    for f in &report.skipped {
        println!("Skipped existing {f} (use --force to overwrite)");
    }
    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    println!("Poemtint v{VERSION}");
    println!("OKLCH theme colors derived from the dominant hue of an image\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    let config_source = match config_file {
        Some(path) if Path::new(&path).exists() => path,
        Some(_) => "embedded (file not found)".to_string(),
        None => "embedded".to_string(),
    };
    println!("\nConfig: {config_source}");

    println!("\nCommands:");
    println!("  poemtint serve     Start the HTTP server");
    println!("  poemtint hue       Dominant hue of an image");
    println!("  poemtint oklch     OKLCH to hex/rgb");
    println!("  poemtint hex       Hex to OKLCH");
    println!("  poemtint shades    Shade ladder");
    println!("  poemtint theme     Theme palette as CSS variables");
    println!("  poemtint art       Gradient artwork colors");
    println!("  poemtint init      Extract embedded config.yaml");
    println!("\nRun 'poemtint --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "poemtint=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let asset_loader = Arc::new(AssetLoader::from_env());

    tracing::info!(
        config = ?asset_loader
            .config_file()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "embedded".to_string()),
        "Config source"
    );

    if let Err(e) = asset_loader.seed_if_configured() {
        tracing::warn!(%e, "Failed to seed config file");
    }

    let state = server::create_app_state(asset_loader)?;

    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Poemtint server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
