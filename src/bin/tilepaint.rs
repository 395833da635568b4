use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tilepaint", version)]
struct Cli {
    /// Emit debug logs to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a theme's styles scaled for a tile render at the given zoom level.
    Scale(ScaleArgs),
}

#[derive(Parser, Debug)]
struct ScaleArgs {
    /// Theme JSON.
    #[arg(long)]
    theme: PathBuf,

    /// Tile zoom level.
    #[arg(long, allow_negative_numbers = true)]
    zoom: i8,

    /// Text scale multiplier.
    #[arg(long, default_value_t = 1.0)]
    text_scale: f32,
}

#[derive(serde::Serialize)]
struct ScaleReport {
    zoom_level: i8,
    stroke_scale: f32,
    text_scale: f32,
    layers: usize,
    levels: usize,
    styles: BTreeMap<String, ScaledStyle>,
}

#[derive(serde::Serialize)]
struct ScaledStyle {
    level: usize,
    stroke_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    font_size: Option<f32>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }
    match cli.cmd {
        Command::Scale(args) => cmd_scale(args),
    }
}

fn read_theme_json(path: &Path) -> anyhow::Result<tilepaint::ThemeDef> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read theme '{}'", path.display()))?;
    let def = tilepaint::ThemeDef::from_json_str(&s)
        .with_context(|| format!("load theme '{}'", path.display()))?;
    Ok(def)
}

fn cmd_scale(args: ScaleArgs) -> anyhow::Result<()> {
    let def = Arc::new(read_theme_json(&args.theme)?);
    let mut theme = def.instantiate();
    let job = tilepaint::RendererJob::new(tilepaint::Tile::new(0, 0, args.zoom), args.text_scale);

    let ctx = tilepaint::RenderContext::new(&mut theme, &job);
    let scaled = ctx.theme();
    let styles = def
        .styles
        .iter()
        .map(|(name, style)| {
            let s = ScaledStyle {
                level: style.level,
                stroke_width: scaled.stroke_width(name),
                font_size: scaled.font_size(name),
            };
            (name.clone(), s)
        })
        .collect();

    let report = ScaleReport {
        zoom_level: args.zoom,
        stroke_scale: scaled.stroke_scale(),
        text_scale: scaled.text_scale(),
        layers: ctx.ways().len(),
        levels: ctx.levels(),
        styles,
    };

    let out = serde_json::to_string_pretty(&report).context("serialize scale report")?;
    println!("{out}");
    Ok(())
}
