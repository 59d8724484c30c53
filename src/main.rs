use clap::Parser;
use clap::error::ErrorKind;
use shrinkpics::imaging::RustBackend;
use shrinkpics::{outdir, output, process};
use std::io::{self, IsTerminal};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shrinkpics")]
#[command(version)]
#[command(about = "Orient, resize and recompress every image in a folder")]
#[command(long_about = "\
Orient, resize and recompress every image in a folder

Every file under INPUT_FOLDER (subfolders included) is decoded, turned
upright according to its EXIF orientation, scaled to 1500px high and saved
as a quality-75 JPEG directly in OUTPUT_FOLDER:

  photos/                          out/
  ├── IMG_0042.JPG    (rotated)    ├── IMG_0042.jpg
  └── 2023/
      └── scan.png                 └── scan.jpg

The folder structure is not kept: files with the same name minus extension
overwrite each other. If OUTPUT_FOLDER already has files in it you are asked
whether to delete them first.")]
struct Cli {
    /// Folder to read images from (searched recursively)
    input: PathBuf,

    /// Folder to write JPEGs into (created if missing)
    output: PathBuf,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            // Wrong arguments: show usage and stop before touching anything
            e.print()?;
            return Ok(());
        }
    };

    init_tracing();

    // Scan before preparing the output: a mistyped input path must fail
    // before anything there is deleted.
    let (tx, rx) = std::sync::mpsc::channel();
    let files = process::scan(&cli.input, Some(&tx))?;
    for event in rx.try_iter() {
        output::print_process_event(&event);
    }

    let prepared = outdir::prepare(&cli.output, |entries| {
        let prompt = output::format_delete_prompt(&cli.output, entries.len());
        outdir::confirm(&mut io::stdin().lock(), &mut io::stdout(), &prompt)
    })?;
    output::print_prepared(&cli.output, prepared);

    let printer = std::thread::spawn(move || {
        for event in rx {
            output::print_process_event(&event);
        }
    });
    let result = process::process_files(&RustBackend::new(), &files, &cli.output, Some(tx));
    printer
        .join()
        .map_err(|_| "progress printer thread panicked")?;

    let result = result?;
    output::print_summary(&result, &cli.output);

    Ok(())
}

/// Compact, colored log lines on stdout: level + message, nothing else.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .without_time()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(io::stdout().is_terminal())
        .with_writer(io::stdout)
        .compact()
        .init();
}
