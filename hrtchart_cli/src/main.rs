use chrono::NaiveDate;
use clap::Parser;
use hrtchart_core::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hrtchart")]
#[command(about = "Hormone dosing calendar generator", long_about = None)]
struct Cli {
    /// Start day in YYYY-MM-DD format
    #[arg(long, default_value = "2024-01-01")]
    start_day: String,

    /// Base output file name (defaults to the configured name)
    #[arg(long)]
    file_name: Option<String>,

    /// Output directory (defaults to the configured directory)
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Skip the spreadsheet export
    #[arg(long)]
    skip_sheet: bool,

    /// Skip the document export
    #[arg(long)]
    skip_doc: bool,

    /// Email the generated document as an attachment
    #[arg(long)]
    send: bool,

    /// Recipient address override for --send
    #[arg(long)]
    recipient: Option<String>,

    /// Config file override
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging
    hrtchart_core::logging::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Parse the start day before touching the filesystem; a bad date must
    // abort before any file is created.
    let start_date = NaiveDate::parse_from_str(&cli.start_day, "%Y-%m-%d")?;

    if cli.send && cli.skip_doc {
        return Err(Error::Config(
            "--send requires the document export; drop --skip-doc".into(),
        ));
    }

    let file_name = cli
        .file_name
        .unwrap_or_else(|| config.output.file_name.clone());
    let out_dir = cli
        .out_dir
        .unwrap_or_else(|| config.output.out_dir.clone());
    std::fs::create_dir_all(&out_dir)?;

    // Output names carry the start day, matching prior runs on disk
    let base_name = format!("{}{}", file_name, cli.start_day);

    if !cli.skip_sheet {
        let rows = generate(start_date, DosageVariant::Sheet);
        let sheet_path = out_dir.join(format!("{}.xlsx", base_name));
        write_schedule_sheet(&sheet_path, &rows)?;
        println!("✓ Spreadsheet written: {}", sheet_path.display());
    }

    if !cli.skip_doc {
        let rows = generate(start_date, DosageVariant::Document);
        let doc_path = write_schedule_doc(&out_dir.join(format!("{}.docx", base_name)), &rows)?;
        println!("✓ Document written: {}", doc_path.display());

        if cli.send {
            let recipient = cli
                .recipient
                .clone()
                .unwrap_or_else(|| config.mail.recipient.clone());
            send_document(&config.mail, &doc_path, &recipient)?;
            println!("✓ Document sent to {}", recipient);
        }
    }

    Ok(())
}
