//! pixpress: CLI for image downscaling, recompression, and upload.

use anyhow::Context;
use clap::{Parser, Subcommand};
use pixpress_core::{probe, recompress, CompressionParams, ImageBytes};
use pixpress_upload::UploadClient;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pixpress")]
#[command(about = "Downscale and recompress images as lossy JPEG")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recompress an image to a width-bounded JPEG
    Compress {
        /// Path to input image
        input: PathBuf,
        /// Output path (default: <input>-compressed.jpg)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Maximum output width in pixels
        #[arg(long, default_value_t = 1024)]
        max_width: u32,
        /// JPEG quality factor, 0.0 (smallest) to 1.0 (best)
        #[arg(long, default_value_t = 0.6)]
        quality: f32,
        /// Output a JSON summary instead of text
        #[arg(long)]
        json: bool,
    },
    /// Inspect an image's media type and dimensions
    Inspect {
        /// Path to image file
        path: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Recompress an image and upload it to a server
    Upload {
        /// Path to input image
        input: PathBuf,
        /// Upload endpoint URL
        #[arg(short, long)]
        endpoint: String,
        /// Maximum output width in pixels
        #[arg(long, default_value_t = 1024)]
        max_width: u32,
        /// JPEG quality factor, 0.0 (smallest) to 1.0 (best)
        #[arg(long, default_value_t = 0.6)]
        quality: f32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("pixpress=debug")
            .init();
    }

    match cli.command {
        Commands::Compress {
            input,
            output,
            max_width,
            quality,
            json,
        } => {
            let params = CompressionParams { max_width, quality };
            let out_path = output.unwrap_or_else(|| default_output_path(&input));
            run_compress(&input, &out_path, &params, json)?;
        }

        Commands::Inspect { path, json } => {
            run_inspect(&path, json)?;
        }

        Commands::Upload {
            input,
            endpoint,
            max_width,
            quality,
        } => {
            let params = CompressionParams { max_width, quality };
            run_upload(&input, &endpoint, &params).await?;
        }
    }

    Ok(())
}

/// Default output path: `<stem>-compressed.jpg` next to the input.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{stem}-compressed.jpg"))
}

fn run_compress(
    input: &Path,
    output: &Path,
    params: &CompressionParams,
    json: bool,
) -> anyhow::Result<()> {
    let data = std::fs::read(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let original_bytes = data.len();

    let payload = ImageBytes::sniffed(data);
    let result = recompress(&payload, params)
        .with_context(|| format!("failed to compress {}", input.display()))?;

    std::fs::write(output, &result.bytes)
        .with_context(|| format!("failed to write {}", output.display()))?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "input": input.to_string_lossy(),
                "output": output.to_string_lossy(),
                "media_type": result.media_type(),
                "original_size_bytes": original_bytes,
                "compressed_size_bytes": result.size_bytes,
            }))?
        );
    } else {
        println!("Wrote {}", output.display());
        println!("Original size: {:.2} KB", original_bytes as f64 / 1024.0);
        println!("Compressed size: {:.2} KB", result.size_kb());
    }

    Ok(())
}

fn run_inspect(path: &Path, json: bool) -> anyhow::Result<()> {
    let data = std::fs::read(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let size_bytes = data.len();

    let payload = ImageBytes::sniffed(data);
    let dims = probe(&payload)
        .with_context(|| format!("failed to inspect {}", path.display()))?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "path": path.to_string_lossy(),
                "media_type": payload.media_type(),
                "width": dims.width,
                "height": dims.height,
                "size_bytes": size_bytes,
            }))?
        );
    } else {
        println!("Media type: {}", payload.media_type());
        println!("Dimensions: {}x{}", dims.width, dims.height);
        println!("Aspect ratio: {:.2}", dims.aspect_ratio());
        println!("Size: {} bytes", size_bytes);
    }

    Ok(())
}

async fn run_upload(
    input: &Path,
    endpoint: &str,
    params: &CompressionParams,
) -> anyhow::Result<()> {
    let data = std::fs::read(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let filename = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image.jpg".to_string());

    let payload = ImageBytes::sniffed(data);
    let result = recompress(&payload, params)
        .with_context(|| format!("failed to compress {}", input.display()))?;

    println!("Compressed to {:.2} KB, uploading...", result.size_kb());

    let client = UploadClient::new(endpoint)?;
    let ack = client
        .upload(&result, &filename)
        .await
        .context("upload failed")?;

    println!("Upload successful: {}", ack.message);
    Ok(())
}
