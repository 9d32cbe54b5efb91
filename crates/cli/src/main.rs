use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use shapes::{Recorder, Scene, SvgSurface};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod scene_file;
mod transform;

use transform::Mode;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Line transformer and shape scene renderer")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Upper-case (fast) or sort (safe) lines from a file or stdin
    Transform {
        /// Path to input file; stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = Mode::Fast)]
        mode: Mode,
        #[arg(long)]
        verbose: bool,
    },
    /// Print one line per shape (plus area for triangles)
    Describe {
        /// JSON scene file; the demo scene when omitted
        #[arg(long)]
        scene: Option<PathBuf>,
    },
    /// Render a scene to SVG or to a JSON primitive list, with a provenance sidecar
    Render {
        #[arg(long)]
        scene: Option<PathBuf>,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Svg)]
        format: Format,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Svg,
    Json,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let verbose = matches!(cmd.action, Action::Transform { verbose: true, .. });
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    // stdout carries command output; logs go to stderr.
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Transform { input, mode, .. } => run_transform(input.as_deref(), mode),
        Action::Describe { scene } => describe(scene.as_deref()),
        Action::Render { scene, out, format } => render(scene.as_deref(), &out, format),
    }
}

fn run_transform(input: Option<&Path>, mode: Mode) -> Result<()> {
    let lines = transform::load_lines(input)?;
    tracing::debug!(lines = lines.len(), ?mode, "loaded input");
    let out = transform::apply(lines, mode);
    println!("{}", transform::format_output(&out));
    Ok(())
}

fn load_scene(path: Option<&Path>) -> Result<Scene> {
    match path {
        Some(p) => scene_file::load(p),
        None => Ok(Scene::demo()),
    }
}

fn describe(scene: Option<&Path>) -> Result<()> {
    let scene = load_scene(scene)?;
    for line in scene.info_lines() {
        println!("{line}");
    }
    Ok(())
}

fn render_bytes(scene: &Scene, format: Format) -> Result<Vec<u8>> {
    Ok(match format {
        Format::Svg => {
            let mut svg = SvgSurface::new();
            scene.render(&mut svg);
            svg.to_svg().into_bytes()
        }
        Format::Json => {
            let mut rec = Recorder::new();
            scene.render(&mut rec);
            serde_json::to_vec_pretty(&scene_file::primitives_json(&rec.primitives))?
        }
    })
}

fn render(scene_path: Option<&Path>, out: &Path, format: Format) -> Result<()> {
    let scene = load_scene(scene_path)?;
    tracing::info!(shapes = scene.len(), out = %out.display(), ?format, "render");
    let bytes = render_bytes(&scene, format)?;
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, &bytes).with_context(|| format!("writing {}", out.display()))?;

    let params = serde_json::json!({
        "scene": scene_path.map(|p| p.display().to_string()),
        "format": format!("{format:?}").to_lowercase(),
        "shapes": scene.len(),
    });
    let sidecar = provenance::write_sidecar(out, &params)?;
    tracing::info!(sidecar = %sidecar.display(), "wrote provenance");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parses_transform_flags() {
        let cmd = Cmd::try_parse_from(["cli", "transform", "--mode", "safe", "--verbose"]).unwrap();
        match cmd.action {
            Action::Transform {
                input,
                mode,
                verbose,
            } => {
                assert!(input.is_none());
                assert_eq!(mode, Mode::Safe);
                assert!(verbose);
            }
            _ => panic!("expected transform"),
        }
        assert!(Cmd::try_parse_from(["cli", "transform", "--mode", "slow"]).is_err());
    }

    #[test]
    fn render_writes_svg_and_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("figs").join("demo.svg");
        render(None, &out, Format::Svg).unwrap();
        let svg = std::fs::read_to_string(&out).unwrap();
        assert_eq!(svg.matches("<rect ").count(), 3);
        assert_eq!(svg.matches("<polygon ").count(), 2);
        assert!(dir.path().join("figs").join("demo.provenance.json").exists());
    }

    #[test]
    fn render_json_lists_primitives() {
        let bytes = render_bytes(&Scene::demo(), Format::Json).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(v.as_array().unwrap().len(), 5);
        assert_eq!(v[4]["vertices"].as_array().unwrap().len(), 200);
    }
}
