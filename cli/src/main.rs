use anyhow::{bail, Context, Result};
use clap::Parser;
use quaero_core::loader::load_corpus;
use quaero_core::{answer, Query};
use std::io::{self, BufRead, Write};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "quaero")]
#[command(about = "Answer questions from a directory of text documents", long_about = None)]
struct Args {
    /// Corpus directory containing .txt documents
    corpus: String,
    /// Answer a single query and exit instead of prompting
    #[arg(long)]
    query: Option<String>,
    /// How many top-ranked documents to pull sentences from
    #[arg(long, default_value_t = 1)]
    files: usize,
    /// How many answer sentences to print
    #[arg(long, default_value_t = 1)]
    sentences: usize,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    let corpus = load_corpus(&args.corpus)
        .with_context(|| format!("loading corpus from {}", args.corpus))?;
    if corpus.is_empty() {
        bail!("no .txt documents found in {}", args.corpus);
    }
    let files = args.files.max(1);
    let sentences = args.sentences.max(1);

    if let Some(q) = args.query {
        for sentence in answer(&Query::parse(&q), &corpus, files, sentences)? {
            println!("{sentence}");
        }
        return Ok(());
    }

    let stdin = io::stdin();
    let mut out = io::stdout();
    loop {
        write!(out, "Query: ")?;
        out.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        match answer(&Query::parse(line), &corpus, files, sentences) {
            Ok(matches) => {
                for sentence in matches {
                    println!("{sentence}");
                }
            }
            Err(err) => eprintln!("error: {err}"),
        }
    }
    Ok(())
}
