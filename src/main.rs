use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use featgfx::config::{self, ComposerConfig};
use featgfx::{ensure_png_support, ComposeError, GraphicComposer};

#[derive(Parser, Debug)]
#[command(author, version, about = "Compose screenshots and a title into a store feature graphic")]
struct Args {
    /// Screenshots to place left-to-right.
    screenshots: Vec<PathBuf>,

    /// Output PNG path.
    #[arg(short, long, default_value = config::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// TrueType/OpenType font for the title; falls back to a built-in face.
    #[arg(long, default_value = config::DEFAULT_FONT_PATH)]
    font: PathBuf,

    /// Title caption.
    #[arg(long, default_value = config::DEFAULT_TITLE)]
    title: String,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = config::DEFAULT_CANVAS_WIDTH)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = config::DEFAULT_CANVAS_HEIGHT)]
    height: u32,
}

impl From<Args> for ComposerConfig {
    fn from(args: Args) -> Self {
        Self {
            screenshots: args.screenshots,
            output_path: args.output,
            canvas_width: args.width,
            canvas_height: args.height,
            font_path: Some(args.font),
            title_text: args.title,
            ..Self::default()
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter())
        .init();

    if let Err(ComposeError::MissingCapability { format }) = ensure_png_support() {
        eprintln!(
            "{format} support is missing. Rebuild with the `png` feature of the `image` crate enabled."
        );
        return ExitCode::FAILURE;
    }

    let args = Args::parse();
    match GraphicComposer::new(args.into()).compose() {
        Ok(path) => {
            println!("Feature graphic saved to {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", failure_report(e));
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` directives plus `featgfx=info`.
fn env_filter() -> EnvFilter {
    let filter = EnvFilter::from_default_env();
    match "featgfx=info".parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// One-line error with its full cause chain.
fn failure_report(e: ComposeError) -> String {
    format!("Composition failed: {:#}", anyhow::Error::new(e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["featgfx"]).unwrap();
        let config = ComposerConfig::from(args);

        assert!(config.screenshots.is_empty());
        assert_eq!(config, ComposerConfig::default());
    }

    #[test]
    fn test_args_override() {
        let args = Args::try_parse_from([
            "featgfx",
            "a.png",
            "b.jpg",
            "-o",
            "out/graphic.png",
            "--title",
            "Hello",
            "--width",
            "800",
            "--height",
            "400",
        ])
        .unwrap();
        let config = ComposerConfig::from(args);

        assert_eq!(config.screenshots, vec![PathBuf::from("a.png"), PathBuf::from("b.jpg")]);
        assert_eq!(config.output_path, PathBuf::from("out/graphic.png"));
        assert_eq!(config.title_text, "Hello");
        assert_eq!((config.canvas_width, config.canvas_height), (800, 400));
        assert_eq!(config.padding, config::DEFAULT_PADDING);
    }

    #[test]
    fn test_env_filter_keeps_default_directive() {
        assert!(env_filter().to_string().contains("featgfx=info"));
    }

    #[test]
    fn test_failure_report_carries_cause_chain() {
        let err = ComposeError::Decode {
            path: PathBuf::from("shot.png"),
            source: anyhow::anyhow!("Failed to read image: \"shot.png\""),
        };
        let report = failure_report(err);
        assert!(report.starts_with("Composition failed: failed to decode screenshot"));
        assert!(report.contains("Failed to read image"));
        assert_eq!(report.lines().count(), 1);
    }

    #[test]
    fn test_args_reject_bad_width() {
        assert!(Args::try_parse_from(["featgfx", "--width", "wide"]).is_err());
    }
}
