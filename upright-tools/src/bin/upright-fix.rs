use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use image::codecs::jpeg::JpegEncoder;
use image::ImageFormat;

/// Rotate and mirror an image according to its Exif orientation
///
/// The output does not carry any metadata.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    input: PathBuf,
    /// Format is chosen by the file extension
    output: PathBuf,
    /// JPEG quality from 1 to 100
    #[arg(long, default_value_t = 85, value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: u8,
}

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image: {0}")]
    Image(#[from] image::ImageError),
}

fn main() -> ExitCode {
    upright_tools::init_logging();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err}", args.input.display());
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let data = std::fs::read(&args.input)?;

    let orientation = upright::scan(&data);
    tracing::info!("Orientation {}: {orientation}", orientation.exif_code());

    let image = upright::correct(image::load_from_memory(&data)?, orientation);

    let format = ImageFormat::from_path(&args.output)?;
    if format == ImageFormat::Jpeg {
        let file = File::create(&args.output)?;
        let encoder = JpegEncoder::new_with_quality(BufWriter::new(file), args.quality);
        // JPEG has no alpha channel
        image.into_rgb8().write_with_encoder(encoder)?;
    } else {
        image.save_with_format(&args.output, format)?;
    }

    Ok(())
}
