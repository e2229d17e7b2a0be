use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use stickgen::{FrameSize, Palette};

#[derive(Parser, Debug)]
#[command(name = "stickgen", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every action's frame sequence plus metadata.json.
    Generate(GenerateArgs),
    /// Pack existing frame sequences into per-action sprite sheets.
    Pack(PackArgs),
    /// Generate frames, then pack them.
    All(AllArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Frame output root.
    #[arg(long, default_value = "sprite_assets")]
    assets_root: PathBuf,
}

#[derive(Parser, Debug)]
struct PackArgs {
    /// Frame input root (the generate stage's output).
    #[arg(long, default_value = "sprite_assets")]
    assets_root: PathBuf,

    /// Sheet output root.
    #[arg(long, default_value = "public/sprites")]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct AllArgs {
    /// Frame root shared by both stages.
    #[arg(long, default_value = "sprite_assets")]
    assets_root: PathBuf,

    /// Sheet output root.
    #[arg(long, default_value = "public/sprites")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(&args.assets_root),
        Command::Pack(args) => cmd_pack(&args.assets_root, &args.out),
        Command::All(args) => {
            cmd_generate(&args.assets_root)?;
            cmd_pack(&args.assets_root, &args.out)
        }
    }
}

fn cmd_generate(assets_root: &Path) -> anyhow::Result<()> {
    let metadata = stickgen::generate_all(assets_root, FrameSize::default(), Palette::default())?;
    let total_frames: u32 = metadata.values().map(|m| m.frame_count).sum();
    eprintln!(
        "wrote {} actions ({total_frames} frames) under '{}'",
        metadata.len(),
        assets_root.display()
    );
    Ok(())
}

fn cmd_pack(assets_root: &Path, out: &Path) -> anyhow::Result<()> {
    let summary = stickgen::pack_all(assets_root, out)?;

    let mut total_kib = 0.0;
    for meta in &summary.completed {
        let sheet_path = out.join(format!("{}_sprite.png", meta.action));
        let bytes = std::fs::metadata(&sheet_path)
            .with_context(|| format!("stat '{}'", sheet_path.display()))?
            .len();
        let kib = bytes as f64 / 1024.0;
        total_kib += kib;
        eprintln!("wrote {} ({kib:.1} KiB, {} frames)", sheet_path.display(), meta.frame_count);
    }

    if summary.skipped.is_empty() {
        eprintln!("packed {} sheets ({total_kib:.1} KiB total)", summary.completed.len());
    } else {
        let skipped: Vec<&str> = summary.skipped.iter().map(|a| a.name()).collect();
        eprintln!(
            "packed {} sheets ({total_kib:.1} KiB total); skipped: {}",
            summary.completed.len(),
            skipped.join(", ")
        );
    }
    Ok(())
}
