use barscan::{BarcodeDecoder, read_bitmap, write_bitmap};
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "barscan",
    version,
    about = "Decode a parity-checked barcode from a 24-bit bitmap"
)]
struct Cli {
    /// Bitmap file to read
    bitmap: PathBuf,
    /// Print the image dimensions and exit without decoding
    #[arg(short = 'd', long = "debug")]
    debug: bool,
    /// Write a re-encoded copy of the input bitmap to this path
    #[arg(long, value_name = "PATH")]
    copy: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let image = match read_bitmap(&cli.bitmap) {
        Ok(image) => image,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(target) = &cli.copy {
        if let Err(err) = write_bitmap(target, &image) {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
        log::info!("wrote copy to {}", target.display());
    }

    if cli.debug {
        println!("Read file {}", cli.bitmap.display());
        println!("Width: {}", image.width());
        println!("Height: {}", image.height());
        return ExitCode::SUCCESS;
    }

    match BarcodeDecoder::new().decode(&image) {
        Ok(result) => {
            println!("{result}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("file format error: {err}");
            ExitCode::FAILURE
        }
    }
}
