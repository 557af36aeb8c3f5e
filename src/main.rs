use bootstrap_blocks::blocks::BlockContext;
use bootstrap_blocks::document::BlockTree;
use bootstrap_blocks::grid::{GridColumnSpec, parse_directive};
use bootstrap_blocks::render::{SuffixThumbnailer, render_page, render_tree};
use bootstrap_blocks::sizing::{AspectRatioSpec, compute_targets};
use bootstrap_blocks::{config, output};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "bootstrap-blocks")]
#[command(about = "Bootstrap 3 content blocks: grid classes, responsive sizes, markup")]
#[command(long_about = "\
Bootstrap 3 content blocks: grid classes, responsive sizes, markup

A document is a JSON tree of blocks (rows, columns, images, carousels,
panels, ...). Every block validates its own fields; images and carousels
get a responsive size set per breakpoint, derived from their aspect ratio.

Document structure:

  {
    \"blocks\": [
      { \"type\": \"row\", \"children\": [
        { \"type\": \"column\", \"grid\": { \"sm\": { \"col\": 6 } }, \"children\": [
          { \"type\": \"image\", \"file\": { \"url\": \"/media/a.jpg\" },
            \"aspect_ratio\": \"16x9\" }
        ]}
      ]}
    ]
  }

Grid directives have the form device:element=value, e.g. sm:col=6 or
md:offset=2. Devices: xs, sm, md, lg. Elements: col, offset, push, pull.

Run 'bootstrap-blocks gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Directory holding config.toml
    #[arg(long, default_value = ".", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the size set for an aspect ratio
    Srcset {
        /// Aspect ratio such as 16x9; omit for none
        #[arg(long, default_value = "")]
        ratio: String,
        /// Fixed width used at every breakpoint
        #[arg(long)]
        width: Option<i64>,
        /// Height used when no ratio is given
        #[arg(long)]
        height: Option<i64>,
    },
    /// Print column classes for grid directives
    Classes {
        /// Directives such as sm:col=6 md:offset=2
        #[arg(required = true)]
        directives: Vec<String>,
    },
    /// Validate a document and print its block tree
    Check {
        /// Document JSON file
        document: PathBuf,
    },
    /// Print the size set of every image and carousel in a document
    Sizes {
        /// Document JSON file
        document: PathBuf,
    },
    /// Render a document as a Bootstrap 3 page
    Render {
        /// Document JSON file
        document: PathBuf,
        /// Write HTML here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Command::GenConfig = cli.command {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    let blocks_config = config::load_config(&cli.config)?;
    init_thread_pool(&blocks_config.processing);
    let ctx = BlockContext::from_config(&blocks_config);

    match cli.command {
        Command::Srcset {
            ratio,
            width,
            height,
        } => {
            let ratio = AspectRatioSpec::parse(&ratio)?;
            let set = compute_targets(&ctx.breakpoints, ratio, width, height);
            output::print_size_set(&set);
        }
        Command::Classes { directives } => {
            let mut spec = GridColumnSpec::new();
            for directive in &directives {
                let (device, element, value) = parse_directive(directive)?;
                spec.set(device, element, value, ctx.grid_size)?;
            }
            output::print_classes(&spec.classes());
        }
        Command::Check { document } => {
            println!("==> Checking {}", document.display());
            let tree = load_valid_tree(&document, &ctx)?;
            output::print_tree(&tree);
            output::print_check_summary(&tree);
        }
        Command::Sizes { document } => {
            let tree = load_valid_tree(&document, &ctx)?;
            output::print_node_sizes(&tree.size_sets(&ctx));
        }
        Command::Render {
            document,
            output: destination,
        } => {
            let tree = load_valid_tree(&document, &ctx)?;
            let title = document
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let page = render_page(&title, render_tree(&tree, &ctx, &SuffixThumbnailer));
            match destination {
                Some(path) => {
                    std::fs::write(&path, page.into_string())?;
                    println!("==> Rendered {} blocks → {}", tree.len(), path.display());
                }
                None => println!("{}", page.into_string()),
            }
        }
        Command::GenConfig => {}
    }

    Ok(())
}

/// Load a document and validate it against the configured context.
fn load_valid_tree(path: &Path, ctx: &BlockContext) -> Result<BlockTree, Box<dyn std::error::Error>> {
    let tree = BlockTree::load(path)?;
    tree.validate(ctx)?;
    Ok(tree)
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores: the user can constrain down, not up.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
