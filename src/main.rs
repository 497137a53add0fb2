use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use kikitool::color::{ColorGen, Hue, Luminosity};
use kikitool::consts::{
    DEFAULT_CONVERT_BIN, DEFAULT_FUZZ_PERCENT, DEFAULT_KEY_COLOR, GREY_FILL, LETTER_URL,
    QUOTE_URL, default_tile_set,
};
use kikitool::letter::{self, Letter};
use kikitool::quote;
use kikitool::variants::{self, BatchConfig, magick::Magick};

#[derive(Parser)]
#[command(name = "kikitool", version, about = "Companion utilities for a kiki node.")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch a quote about friends and share it to the public feed.
    PostQuote {
        /// Quote service endpoint
        #[arg(long, default_value = QUOTE_URL)]
        quote_url: String,

        /// Letter endpoint of the local node
        #[arg(long, default_value = LETTER_URL)]
        letter_url: String,
    },
    /// Recolor source tiles with a generated palette.
    Colorize {
        /// Source tiles (key-colored originals)
        #[arg(default_value = "kiki.png")]
        sources: Vec<PathBuf>,

        /// Number of colors in the palette
        #[arg(short = 'n', long, default_value_t = 100)]
        count: usize,

        /// Palette shape
        #[arg(long, value_enum, default_value_t = Palette::Flat)]
        palette: Palette,

        /// Bias every color toward one hue (flat palette only)
        #[arg(long, value_enum)]
        hue: Option<Hue>,

        /// Luminosity of the sampled colors
        #[arg(long, value_enum, default_value_t = Luminosity::Bright)]
        luminosity: Luminosity,

        #[command(flatten)]
        batch: BatchArgs,
    },
    /// Recolor the numbered profile tile set with the fixed grey.
    Greyscale {
        /// Source tiles (defaults to all/kikiset-01..08.png)
        sources: Vec<PathBuf>,

        #[command(flatten)]
        batch: BatchArgs,
    },
}

/// How `colorize` fills its palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Palette {
    /// Independent random colors
    Flat,
    /// Cycle the fixed hue list in order
    AcrossHues,
}

#[derive(Args)]
struct BatchArgs {
    /// Output directory (default: `.` for colorize, `processed` for greyscale)
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Output file name prefix
    #[arg(long, default_value = "kiki_")]
    prefix: String,

    /// First output index
    #[arg(long, default_value_t = 0)]
    start: usize,

    /// Fuzz tolerance (percent) for the color replace
    #[arg(long, default_value_t = DEFAULT_FUZZ_PERCENT)]
    fuzz: u8,

    /// Key color replaced in the source tiles
    #[arg(long, default_value = DEFAULT_KEY_COLOR)]
    opaque: String,

    /// Image tool binary
    #[arg(long, default_value = DEFAULT_CONVERT_BIN)]
    convert_bin: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::PostQuote {
            quote_url,
            letter_url,
        } => post_quote(&quote_url, &letter_url).await,
        Command::Colorize {
            sources,
            count,
            palette,
            hue,
            luminosity,
            batch,
        } => {
            let mut colors = ColorGen::new(hue, luminosity);
            let fills = match palette {
                Palette::Flat => colors.generate(count),
                Palette::AcrossHues => colors.across_hues(count),
            };
            run_batch(&sources, &fills, batch, ".").await
        }
        Command::Greyscale { sources, batch } => {
            let sources = if sources.is_empty() {
                default_tile_set()
            } else {
                sources
            };
            let fills = vec![GREY_FILL.to_string()];
            run_batch(&sources, &fills, batch, "processed").await
        }
    }
}

async fn post_quote(quote_url: &str, letter_url: &str) -> anyhow::Result<()> {
    let quote = quote::fetch(quote_url).await?;
    let letter = Letter::share_text(quote.to_html());
    let reply = letter::post(letter_url, &letter).await?;
    println!("{}", reply);
    Ok(())
}

async fn run_batch(
    sources: &[PathBuf],
    fills: &[String],
    args: BatchArgs,
    default_out_dir: &str,
) -> anyhow::Result<()> {
    let config = BatchConfig {
        out_dir: args
            .out_dir
            .unwrap_or_else(|| PathBuf::from(default_out_dir)),
        prefix: args.prefix,
        start: args.start,
        fuzz_percent: args.fuzz,
        opaque: args.opaque,
    };

    let jobs = variants::plan(sources, fills, &config);
    println!(
        "recoloring {} tile(s) x {} color(s) -> {} output(s)",
        sources.len(),
        fills.len(),
        jobs.len()
    );

    let tool = Magick::new(args.convert_bin);
    let report = variants::run(&tool, &jobs).await;

    if report.failed > 0 {
        println!("done: {} written, {} failed", report.completed, report.failed);
    } else {
        println!("done: {} written", report.completed);
    }
    Ok(())
}
