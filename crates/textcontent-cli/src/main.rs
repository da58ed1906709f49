use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use textcontent::{parse_document, parse_html, select, Node, TextContentOptions, TextContentService};

#[derive(Parser)]
#[command(name = "textcontent")]
#[command(about = "Print the rendered text content of an HTML document")]
#[command(version)]
struct Cli {
    /// HTML file to read (stdin when omitted)
    input: Option<PathBuf>,

    /// Only print the text of elements matching this CSS selector
    #[arg(short, long)]
    selector: Option<String>,

    /// Parse the input as a fragment instead of a full document
    #[arg(long, conflicts_with = "selector")]
    fragment: bool,

    /// Base URL for resolving relative image sources
    #[arg(long, default_value = "")]
    base_url: String,

    /// Keep images out of the text instead of replacing them by alt/src
    #[arg(long)]
    no_replace_img: bool,

    /// Do not fall back to the image source when alt is missing
    #[arg(long)]
    no_img_to_src: bool,

    /// Line feeds required around paragraphs
    #[arg(long, default_value_t = 1)]
    line_breaks: usize,
}

impl Cli {
    fn options(&self) -> TextContentOptions {
        TextContentOptions {
            replace_img: !self.no_replace_img,
            img_to_src: !self.no_img_to_src,
            base_url: self.base_url.clone(),
            required_line_break_count: self.line_breaks,
        }
    }

    fn read_input(&self) -> Result<String> {
        match &self.input {
            Some(path) => fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display())),
            None => {
                let mut html = String::new();
                io::stdin()
                    .read_to_string(&mut html)
                    .context("failed to read stdin")?;
                Ok(html)
            }
        }
    }

    fn roots(&self, html: &str) -> Result<Vec<Node>> {
        if let Some(selector) = &self.selector {
            return Ok(select(html, selector)?);
        }
        let root = if self.fragment {
            parse_html(html)
        } else {
            parse_document(html)
        };
        Ok(vec![root])
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let service = TextContentService::with_options(cli.options());

    let html = cli.read_input()?;
    let roots = cli.roots(&html)?;
    debug!(roots = roots.len(), "extracting text");

    for root in &roots {
        println!("{}", service.text_content(root)?);
    }

    Ok(())
}
