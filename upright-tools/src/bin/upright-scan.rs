use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use upright::jpeg::Jpeg;

/// Show the Exif orientation of JPEG files
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// List the marker segments in front of the image data
    #[arg(long)]
    segments: bool,
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    upright_tools::init_logging();
    let args = Args::parse();

    let mut status = ExitCode::SUCCESS;
    for path in &args.files {
        let data = match std::fs::read(path) {
            Ok(data) => data,
            Err(err) => {
                eprintln!("{}: {err}", path.display());
                status = ExitCode::FAILURE;
                continue;
            }
        };

        let orientation = upright::scan(&data);
        println!(
            "{}: {} ({orientation})",
            path.display(),
            orientation.exif_code()
        );

        if args.segments {
            show_segments(&data);
        }
    }

    status
}

fn show_segments(data: &[u8]) {
    let jpeg = match Jpeg::new(data) {
        Ok(jpeg) => jpeg,
        Err(err) => {
            println!("  {err}");
            return;
        }
    };

    for segment in jpeg.segments() {
        match segment {
            Ok(segment) => {
                let exif = if segment.is_exif() { " Exif" } else { "" };
                println!(
                    "  - {:?} at {}: {} bytes from {}{exif}",
                    segment.marker(),
                    segment.pos(),
                    segment.data().len(),
                    segment.data_pos()
                );
            }
            Err(err) => println!("  - {err}"),
        }
    }
}
