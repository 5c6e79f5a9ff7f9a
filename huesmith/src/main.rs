use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

mod config;
mod render;

pub const CONFIG_FILE: &str = "huesmith.toml";

mod flags {
    use std::path::PathBuf;

    use hueline::body::BodyMode;

    xflags::xflags! {
        /// Generates content-derived gradient parameters for blog posts.
        cmd huesmith {
            /// Log more; repeat for trace output. `RUST_LOG` takes precedence.
            repeated -v, --verbose

            /// Generate gradients for every post beneath a site's content directory.
            cmd build {
                /// The site root, where `huesmith.toml` is looked up.
                required site: PathBuf
                /// Where to write the manifest or, with `--split`, the per-post files.
                optional -o, --output output: PathBuf
                /// How post bodies are analyzed: `raw` or `text`.
                optional --body body: BodyMode
                /// Include posts marked as drafts.
                optional --drafts
                /// Write one `<slug>.json` per post instead of a single manifest.
                optional --split
            }

            /// Print the gradient for a single post.
            cmd post {
                required file: PathBuf
                optional --body body: BodyMode
            }

            /// Print a single post's features, theme, seed, hues, and gradient.
            cmd inspect {
                required file: PathBuf
                optional --body body: BodyMode
            }
        }
    }
}

fn init_tracing(verbose: u32) {
    let default = match verbose {
        0 => "huesmith=info,hueline=info",
        1 => "huesmith=debug,hueline=debug",
        _ => "huesmith=trace,hueline=trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(flags: flags::Huesmith) -> hueline::error::Result<()> {
    match flags.subcommand {
        flags::HuesmithCmd::Build(build) => render::build(&build).map(|_| ()),
        flags::HuesmithCmd::Post(post) => {
            println!("{}", render::post(&post.file, post.body.unwrap_or_default())?);
            Ok(())
        }
        flags::HuesmithCmd::Inspect(inspect) => {
            println!("{}", render::inspect(&inspect.file, inspect.body.unwrap_or_default())?);
            Ok(())
        }
    }
}

pub fn main() -> ExitCode {
    let flags = flags::Huesmith::from_env_or_exit();
    init_tracing(flags.verbose);

    match run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
