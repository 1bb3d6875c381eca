use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use wardrobe::{
    Candidate, GenerateConfig, Manifest, MetadataPolicy, ProbeContext, RasterSettings, Rasterizer,
    raster::probe_all,
};

#[derive(Parser, Debug)]
#[command(name = "wardrobe", version)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw every catalog asset, rasterize it and write the manifest.
    Generate(GenerateArgs),
    /// Merge game-data JSON fragments into one document.
    Merge(MergeArgs),
    /// Print which raster backends are available, in priority order.
    Backends(ProbeArgs),
}

#[derive(Parser, Debug)]
struct ProbeArgs {
    /// Skip the in-process renderers.
    #[arg(long)]
    no_in_process: bool,

    /// Directories searched for converter executables, in PATH syntax.
    /// Defaults to WARDROBE_SEARCH_PATH, then PATH.
    #[arg(long)]
    search_path: Option<OsString>,
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Output directory for PNGs and the manifest.
    #[arg(long, default_value = "assets")]
    out_dir: PathBuf,

    /// Backend to use; `auto` probes in priority order.
    #[arg(long, value_enum, default_value_t = BackendChoice::Auto)]
    backend: BackendChoice,

    #[command(flatten)]
    probe: ProbeArgs,

    /// Subdirectory of the output directory for SVG sources.
    #[arg(long, default_value = "svg")]
    svg_subdir: String,

    /// Manifest file name inside the output directory.
    #[arg(long = "manifest", default_value = "manifest.json")]
    manifest_name: String,
}

#[derive(Parser, Debug)]
struct MergeArgs {
    /// Fragment JSON files; the first supplies the base document. Repeatable.
    #[arg(long = "fragment", required = true)]
    fragments: Vec<PathBuf>,

    /// Output path for the merged document.
    #[arg(long)]
    out: PathBuf,

    /// How to treat top-level keys that differ between fragments.
    #[arg(long, value_enum, default_value_t = MetadataPolicy::FirstWins)]
    metadata: MetadataPolicy,

    /// Append the images listed in a generation manifest as data URLs.
    #[arg(long)]
    inject_manifest: Option<PathBuf>,

    /// Indent the output instead of writing it compact.
    #[arg(long)]
    pretty: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BackendChoice {
    Auto,
    Resvg,
    VelloCpu,
    Cairosvg,
    RsvgConvert,
    Inkscape,
    Qlmanage,
    Html,
}

impl BackendChoice {
    fn candidate(self) -> Option<Candidate> {
        match self {
            Self::Auto => None,
            Self::Resvg => Some(Candidate::Resvg),
            Self::VelloCpu => Some(Candidate::VelloCpu),
            Self::Cairosvg => Some(Candidate::CairoSvg),
            Self::RsvgConvert => Some(Candidate::RsvgConvert),
            Self::Inkscape => Some(Candidate::Inkscape),
            Self::Qlmanage => Some(Candidate::QuickLook),
            Self::Html => Some(Candidate::Html),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Merge(args) => cmd_merge(args),
        Command::Backends(args) => cmd_backends(args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn probe_context(args: &ProbeArgs, forced: Option<Candidate>) -> ProbeContext {
    let mut ctx = ProbeContext::from_env();
    if let Some(path) = &args.search_path {
        ctx.search_path = Some(path.clone());
    }
    ctx.allow_in_process = !args.no_in_process;
    ctx.forced = forced;
    ctx
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let cfg = GenerateConfig {
        out_dir: args.out_dir,
        svg_subdir: args.svg_subdir,
        manifest_name: args.manifest_name,
    };
    cfg.validate()?;

    let ctx = probe_context(&args.probe, args.backend.candidate());
    let rasterizer = Rasterizer::select(&ctx, &RasterSettings::default())?;

    let manifest = wardrobe::generate(wardrobe::CATALOG, &rasterizer, &cfg)?;
    eprintln!(
        "wrote {} assets and {}",
        manifest.assets.len(),
        cfg.manifest_path().display()
    );
    Ok(())
}

fn cmd_merge(args: MergeArgs) -> anyhow::Result<()> {
    let fragments = args
        .fragments
        .iter()
        .map(|p| wardrobe::read_fragment(p))
        .collect::<Result<Vec<_>, _>>()?;

    let mut merged = wardrobe::merge_fragments(&fragments, args.metadata)?;

    if let Some(manifest_path) = &args.inject_manifest {
        let manifest = Manifest::read(manifest_path)?;
        let root = manifest_root(manifest_path);
        let added = wardrobe::inject_generated(&mut merged, &manifest, root)
            .with_context(|| format!("inject assets from '{}'", manifest_path.display()))?;
        tracing::info!(added, "injected generated assets");
    }

    wardrobe::write_document(&args.out, &merged, args.pretty)?;

    for (category, count) in wardrobe::category_summary(&merged) {
        tracing::info!(category = %category, items = count, "category summary");
    }
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

/// Manifest paths are relative to the parent of the directory holding the manifest.
fn manifest_root(manifest_path: &Path) -> &Path {
    manifest_path
        .parent()
        .and_then(Path::parent)
        .unwrap_or_else(|| Path::new(""))
}

fn cmd_backends(args: ProbeArgs) -> anyhow::Result<()> {
    let ctx = probe_context(&args, None);
    for (candidate, found) in probe_all(&ctx) {
        let status = match found {
            Some(kind) => format!("available ({kind:?})"),
            None => "missing".to_owned(),
        };
        println!("{:<14} {status}", candidate.as_str());
    }
    println!("{:<14} always (degraded fallback)", Candidate::Html.as_str());
    Ok(())
}
