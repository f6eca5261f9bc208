use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use shotframe::{
    AspectRatio, Color, EditorSession, ExportFormat, ExportOptions, ExportSink, FileSink,
    SettingsPatch, StyleSettings,
};

#[derive(Parser, Debug)]
#[command(name = "shotframe", version, about = "Frame screenshots for sharing")]
struct Cli {
    /// Log every pipeline step to stderr.
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Frame an image and write it as PNG, JPEG or WebP.
    Render(RenderArgs),
    /// List the built-in presets.
    Presets(PresetsArgs),
    /// Print the canvas size an image would be framed at.
    Size(SizeArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input screenshot (PNG, JPEG or WebP).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output file. Defaults to a timestamped name in `--out-dir`.
    #[arg(long, conflicts_with = "out_dir")]
    out: Option<PathBuf>,

    /// Directory for a timestamped `beautified-screenshot-*` file.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Output format. Inferred from `--out` when omitted, otherwise PNG.
    #[arg(long)]
    format: Option<ExportFormat>,

    /// Quality for JPEG and WebP in 0..=1.
    #[arg(long, default_value_t = shotframe::encode::export::DEFAULT_QUALITY)]
    quality: f32,

    /// Pixel scale over the logical canvas.
    #[arg(long, default_value_t = shotframe::DEFAULT_EXPORT_SCALE)]
    scale: u32,

    #[command(flatten)]
    style: StyleArgs,
}

#[derive(Parser, Debug)]
struct PresetsArgs {
    /// Print the catalog as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser, Debug)]
struct SizeArgs {
    /// Input screenshot.
    #[arg(long = "in")]
    in_path: PathBuf,

    #[command(flatten)]
    style: StyleArgs,
}

/// Style layering: defaults, then `--settings`, then `--preset`, then individual flags.
#[derive(Args, Debug)]
struct StyleArgs {
    /// JSON file with a partial settings object (camelCase keys).
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Preset id (see `shotframe presets`).
    #[arg(long)]
    preset: Option<String>,

    /// Padding around the image, in px.
    #[arg(long)]
    padding: Option<f64>,

    /// Corner radius, in px.
    #[arg(long)]
    radius: Option<f64>,

    /// Shadow intensity in 0..=100.
    #[arg(long)]
    shadow: Option<f64>,

    /// Solid background color (hex); turns the gradient off.
    #[arg(long)]
    background: Option<Color>,

    /// Diagonal gradient from START to END (hex); turns the gradient on.
    #[arg(long, num_args = 2, value_names = ["START", "END"])]
    gradient: Option<Vec<Color>>,

    /// Use the solid background even if a preset enabled the gradient.
    #[arg(long, default_value_t = false, conflicts_with = "gradient")]
    no_gradient: bool,

    /// Draw a blurred copy of the image behind it.
    #[arg(long, default_value_t = false)]
    blur: bool,

    /// Disable the blurred backdrop.
    #[arg(long, default_value_t = false, conflicts_with = "blur")]
    no_blur: bool,

    /// Aspect ratio: 1:1, 16:9, 4:5, 9:16 or auto.
    #[arg(long)]
    aspect: Option<AspectRatio>,
}

impl StyleArgs {
    fn flags_patch(&self) -> SettingsPatch {
        let mut patch = SettingsPatch {
            padding: self.padding,
            border_radius: self.radius,
            shadow_intensity: self.shadow,
            aspect_ratio: self.aspect,
            ..SettingsPatch::default()
        };
        if let Some(bg) = self.background {
            patch.background_color = Some(bg);
            patch.use_gradient = Some(false);
        }
        if let Some([start, end]) = self.gradient.as_deref() {
            patch.gradient_start = Some(*start);
            patch.gradient_end = Some(*end);
            patch.use_gradient = Some(true);
        }
        if self.no_gradient {
            patch.use_gradient = Some(false);
        }
        if self.blur {
            patch.blur_background = Some(true);
        } else if self.no_blur {
            patch.blur_background = Some(false);
        }
        patch
    }

    fn build_session(&self) -> anyhow::Result<EditorSession> {
        let mut session = EditorSession::new();
        if let Some(path) = &self.settings {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("read settings '{}'", path.display()))?;
            let settings: StyleSettings = session
                .settings()
                .with_patch_json(&json)
                .with_context(|| format!("apply settings '{}'", path.display()))?;
            session.replace_settings(settings)?;
        }
        if let Some(id) = &self.preset {
            session.apply_preset(id)?;
        }
        session.apply_patch(&self.flags_patch())?;
        Ok(session)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Presets(args) => cmd_presets(args),
        Command::Size(args) => cmd_size(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut session = args.style.build_session()?;
    session
        .load_image_path(&args.in_path)
        .with_context(|| format!("load '{}'", args.in_path.display()))?;

    let format = args
        .format
        .or_else(|| args.out.as_deref().and_then(ExportFormat::from_path))
        .unwrap_or_default();
    let opts = ExportOptions {
        format,
        quality: args.quality,
        scale: args.scale,
    };

    let mut sink = match &args.out {
        Some(path) => FileSink::to_path(path),
        None => FileSink::to_directory(&args.out_dir),
    };
    let encoded = session.export(&opts)?;
    let written = sink.deliver(&encoded)?;

    if let Some(path) = written {
        eprintln!(
            "wrote {} ({}x{} {})",
            path.display(),
            encoded.width,
            encoded.height,
            encoded.format
        );
    }
    Ok(())
}

fn cmd_presets(args: PresetsArgs) -> anyhow::Result<()> {
    let catalog = shotframe::presets();
    if args.json {
        let entries: Vec<_> = catalog
            .iter()
            .map(|p| {
                serde_json::json!({
                    "id": p.id,
                    "name": p.name,
                    "description": p.description,
                    "settings": p.patch,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }
    for p in catalog {
        println!("{:<16} {:<16} {}", p.id, p.name, p.description);
    }
    Ok(())
}

fn cmd_size(args: SizeArgs) -> anyhow::Result<()> {
    let mut session = args.style.build_session()?;
    session
        .load_image_path(&args.in_path)
        .with_context(|| format!("load '{}'", args.in_path.display()))?;
    println!("{}", session.canvas_size());
    Ok(())
}
