use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use emblem_core::{Group, Node};
use emblem_render::ExportFormat;

mod artwork;

#[derive(Parser, Debug)]
#[command(name = "emblem", version, about = "Parametric logo renderer")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in artwork and backgrounds.
    List,
    /// Export one artwork over one background.
    Export(ExportArgs),
    /// Export every artwork x background combination into a directory.
    Batch(BatchArgs),
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Artwork name (see `list`).
    name: String,

    /// Background name, or "none" for bare artwork.
    #[arg(long, default_value = "slate")]
    background: String,

    /// Output width in pixels (raster) or user units (vector).
    #[arg(long, default_value_t = 512)]
    width: u32,

    /// Output height.
    #[arg(long, default_value_t = 512)]
    height: u32,

    /// Output format; inferred from the output extension when omitted.
    #[arg(long)]
    format: Option<String>,

    /// Output path.
    #[arg(short, long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    /// Output directory.
    dir: PathBuf,

    #[arg(long, default_value_t = 1366)]
    width: u32,

    #[arg(long, default_value_t = 768)]
    height: u32,

    /// Output format for every file.
    #[arg(long, default_value = "png")]
    format: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::List => cmd_list(),
        Command::Export(args) => cmd_export(args),
        Command::Batch(args) => cmd_batch(args),
    }
}

fn cmd_list() -> anyhow::Result<()> {
    println!("artwork:");
    for name in artwork::artwork().keys() {
        println!("  {name}");
    }
    println!("backgrounds:");
    for name in artwork::backgrounds().keys() {
        println!("  {name}");
    }
    Ok(())
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let art = lookup(artwork::artwork(), "artwork", &args.name)?;
    let background = match args.background.as_str() {
        "none" => None,
        name => Some(lookup(artwork::backgrounds(), "background", name)?),
    };
    let format = resolve_format(args.format.as_deref(), &args.out)?;

    let tree = compose(art, background);
    emblem_render::export_to_file(&tree, &args.out, format, args.width, args.height)
        .with_context(|| format!("export '{}'", args.out.display()))?;
    log::info!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_batch(args: BatchArgs) -> anyhow::Result<()> {
    let format: ExportFormat = args.format.parse()?;
    std::fs::create_dir_all(&args.dir)
        .with_context(|| format!("create output dir '{}'", args.dir.display()))?;

    for (art_name, art) in artwork::artwork() {
        for (bg_name, bg) in artwork::backgrounds() {
            let tree = compose(*art, Some(*bg));
            let path = args
                .dir
                .join(format!("{art_name}-{bg_name}.{}", format.extension()));
            emblem_render::export_to_file(&tree, &path, format, args.width, args.height)
                .with_context(|| format!("export '{}'", path.display()))?;
            log::info!("wrote {}", path.display());
        }
    }
    Ok(())
}

/// Stack an artwork on top of an optional background.
fn compose(art: artwork::NodeFactory, background: Option<artwork::NodeFactory>) -> Node {
    match background {
        Some(bg) => Group::new().with(bg()).with(art()).into(),
        None => art(),
    }
}

fn lookup(
    table: &'static BTreeMap<&'static str, artwork::NodeFactory>,
    kind: &str,
    name: &str,
) -> anyhow::Result<artwork::NodeFactory> {
    table.get(name).copied().ok_or_else(|| {
        anyhow::anyhow!(
            "unknown {kind} '{name}', choose from {}",
            table.keys().copied().collect::<Vec<_>>().join(", ")
        )
    })
}

fn resolve_format(flag: Option<&str>, out: &Path) -> anyhow::Result<ExportFormat> {
    match flag {
        Some(name) => Ok(name.parse()?),
        None => ExportFormat::from_path(out).with_context(|| {
            format!(
                "cannot infer format from '{}', pass --format",
                out.display()
            )
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_orders_background_first() {
        let art = *artwork::artwork().get("triskel").unwrap();
        let bg = *artwork::backgrounds().get("slate").unwrap();
        match compose(art, Some(bg)) {
            Node::Group(group) => {
                assert!(matches!(group.children()[0], Node::Background(_)));
                assert!(matches!(group.children()[1], Node::Group(_)));
            }
            other => panic!("expected a group, got {other:?}"),
        }
    }

    #[test]
    fn test_lookup_error_names_the_options() {
        let err = lookup(artwork::artwork(), "artwork", "swirl").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("swirl"));
        assert!(message.contains("triskel"));
    }

    #[test]
    fn test_resolve_format_prefers_flag() {
        let format = resolve_format(Some("svg"), Path::new("logo.png")).unwrap();
        assert_eq!(format, ExportFormat::Svg);
    }

    #[test]
    fn test_resolve_format_falls_back_to_extension() {
        let format = resolve_format(None, Path::new("logo.png")).unwrap();
        assert_eq!(format, ExportFormat::Png);
        assert!(resolve_format(None, Path::new("logo")).is_err());
    }

    #[test]
    fn test_batch_combination_exports_to_files() {
        let dir = tempfile::tempdir().unwrap();
        let args = BatchArgs {
            dir: dir.path().to_owned(),
            width: 64,
            height: 32,
            format: "svg".to_owned(),
        };
        cmd_batch(args).unwrap();

        let count = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(count, artwork::artwork().len() * artwork::backgrounds().len());
        assert!(dir.path().join("triskel-slate.svg").exists());
    }
}
