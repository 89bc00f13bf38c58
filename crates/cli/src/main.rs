//! invoice-pdf: render invoice/quote JSON documents to PDF

mod fetch;

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use fetch::HttpFetcher;
use invoice_template::{
    output_file_name, parse_company, parse_document, render_to_file, CompanyProfile, DocumentType,
    InvoiceForm, LogoSource,
};
use invoice_text::parse_iso_date;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about = "Render invoice and quote documents to PDF")]
struct Cli {
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a document JSON file to PDF
    Render(RenderArgs),
    /// Write a fresh document JSON with the editor's starting values
    New(NewArgs),
}

#[derive(clap::Args, Debug)]
struct RenderArgs {
    /// Document JSON file
    input: PathBuf,

    /// Directory the PDF is written to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Logo image file (PNG or JPEG)
    #[arg(long, conflicts_with = "logo_url")]
    logo_file: Option<PathBuf>,

    /// Logo image URL
    #[arg(long)]
    logo_url: Option<String>,

    /// Company profile JSON (missing fields use the built-in profile)
    #[arg(long)]
    company: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Kind {
    Invoice,
    Quote,
}

#[derive(clap::Args, Debug)]
struct NewArgs {
    /// Issue date (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    date: Option<String>,

    /// Document number suffix (last two digits are used)
    #[arg(short, long, default_value = "1")]
    suffix: u32,

    #[arg(short = 't', long = "type", value_enum, default_value = "invoice")]
    kind: Kind,

    /// Company profile JSON supplying tax labels and rates
    #[arg(long)]
    company: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_company(path: Option<&Path>) -> Result<CompanyProfile> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading company profile {}", path.display()))?;
            parse_company(&json).with_context(|| format!("parsing {}", path.display()))
        }
        None => Ok(CompanyProfile::default()),
    }
}

/// Logo source from the flags; a missing file is an error, a bad image is not
fn logo_source(args: &RenderArgs) -> Result<LogoSource> {
    if let Some(path) = &args.logo_file {
        let data = std::fs::read(path)
            .with_context(|| format!("reading logo {}", path.display()))?;
        return Ok(LogoSource::InlineBytes(data));
    }
    Ok(args
        .logo_url
        .clone()
        .map(LogoSource::FetchByUrl)
        .unwrap_or_default())
}

async fn run_render(args: RenderArgs) -> Result<()> {
    let json = std::fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let document =
        parse_document(&json).with_context(|| format!("parsing {}", args.input.display()))?;
    let company = load_company(args.company.as_deref())?;

    if !args.out_dir.is_dir() {
        bail!("output directory {} does not exist", args.out_dir.display());
    }

    let source = logo_source(&args)?;
    let fetcher = HttpFetcher::new()?;
    let path = render_to_file(&document, source, &fetcher, &company, &args.out_dir)
        .await
        .with_context(|| format!("writing {}", output_file_name(&document)))?;

    println!("{}", path.display());
    Ok(())
}

fn new_document_json(args: &NewArgs, today: NaiveDate) -> Result<String> {
    let date = match &args.date {
        Some(text) => parse_iso_date(text)?,
        None => today,
    };
    let company = load_company(args.company.as_deref())?;

    let mut form = InvoiceForm::new(date, args.suffix, &company)?;
    if args.kind == Kind::Quote {
        form.set_document_type(DocumentType::Quote);
    }
    Ok(serde_json::to_string_pretty(&form.to_document())?)
}

fn run_new(args: NewArgs) -> Result<()> {
    let json = new_document_json(&args, Local::now().date_naive())?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, json + "\n")
                .with_context(|| format!("writing {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Render(args) => run_render(args).await,
        Command::New(args) => run_new(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    fn new_args(argv: &[&str]) -> NewArgs {
        match Cli::try_parse_from(argv).unwrap().command {
            Command::New(args) => args,
            other => panic!("expected new, got {other:?}"),
        }
    }

    fn render_args(argv: &[&str]) -> RenderArgs {
        match Cli::try_parse_from(argv).unwrap().command {
            Command::Render(args) => args,
            other => panic!("expected render, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_render_defaults() {
        let args = render_args(&["invoice-pdf", "render", "doc.json"]);
        assert_eq!(args.input, PathBuf::from("doc.json"));
        assert_eq!(args.out_dir, PathBuf::from("."));
        assert!(args.company.is_none());
        assert_eq!(logo_source(&args).unwrap(), LogoSource::None);
    }

    #[test]
    fn test_logo_url_source() {
        let args = render_args(&[
            "invoice-pdf",
            "render",
            "doc.json",
            "--logo-url",
            "https://example.test/logo.png",
        ]);
        assert_eq!(
            logo_source(&args).unwrap(),
            LogoSource::FetchByUrl("https://example.test/logo.png".to_string())
        );
    }

    #[test]
    fn test_logo_flags_conflict() {
        let result = Cli::try_parse_from([
            "invoice-pdf",
            "render",
            "doc.json",
            "--logo-file",
            "logo.png",
            "--logo-url",
            "https://example.test/logo.png",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_logo_file_is_error() {
        let args = render_args(&[
            "invoice-pdf",
            "render",
            "doc.json",
            "--logo-file",
            "/nonexistent/logo.png",
        ]);
        assert!(logo_source(&args).is_err());
    }

    #[test]
    fn test_new_document_json() {
        let args = new_args(&["invoice-pdf", "new", "--date", "2025-01-05", "--suffix", "42"]);
        let today = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        let json = new_document_json(&args, today).unwrap();
        let document = parse_document(&json).unwrap();

        assert_eq!(document.document_number, "2025010542");
        assert_eq!(document.issue_date, "JAN 5, 2025");
        assert_eq!(document.due_date, "FEB 4, 2025");
        assert!((document.grand_total - 753.76).abs() < 1e-9);
    }

    #[test]
    fn test_new_quote_defaults_to_today() {
        let args = new_args(&["invoice-pdf", "new", "-t", "quote", "-s", "7"]);
        let today = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        let document = parse_document(&new_document_json(&args, today).unwrap()).unwrap();

        assert_eq!(document.document_type, DocumentType::Quote);
        assert_eq!(document.document_number, "2025030907Q");
    }

    #[test]
    fn test_new_rejects_bad_date() {
        let args = new_args(&["invoice-pdf", "new", "--date", "05/01/2025"]);
        let today = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert!(new_document_json(&args, today).is_err());
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["invoice-pdf", "new", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
