use clap::{Parser, Subcommand};
use dreamgen::{
    logger, present, DreamGatewayClient, GatewayConfig, GenerationJob, ImageToImageRequest,
    ImageToVideoRequest, OperationKind, TextToImageRequest,
};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "dreamgen",
    version,
    about = "Run generation jobs against the Livepeer AI Dream Gateway"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a text-to-image job
    T2i {
        /// The text prompt to render
        #[arg(long, default_value = "A Cat on the Beach!")]
        prompt: String,
        /// Model id to use instead of the default
        #[arg(long)]
        model: Option<String>,
    },
    /// Run an image-to-image job
    I2i {
        /// The input image file path
        #[arg(long)]
        image: PathBuf,
        /// The text prompt guiding the transformation
        #[arg(long, default_value = "A Cat on the Beach!")]
        prompt: String,
        /// Model id to use instead of the default
        #[arg(long)]
        model: Option<String>,
    },
    /// Run an image-to-video job
    I2v {
        /// The input image file path
        #[arg(long)]
        image: PathBuf,
        #[arg(long, default_value_t = 128)]
        width: u32,
        #[arg(long, default_value_t = 128)]
        height: u32,
        /// Model id to use instead of the default
        #[arg(long)]
        model: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    logger::init_with_config(logger::LoggerConfig::development())?;

    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    let config = GatewayConfig::from_env();
    logger::log_startup_info("dreamgen", env!("CARGO_PKG_VERSION"), config.host());
    logger::log_config_info(&config);

    let client = match DreamGatewayClient::new(config) {
        Ok(client) => {
            log::info!("✅ Gateway client initialized successfully");
            client
        }
        Err(e) => {
            log::error!("❌ Failed to initialize gateway client: {}", e);
            return Err(e.into());
        }
    };

    let job = match cli.command {
        Command::T2i { prompt, model } => GenerationJob::TextToImage(TextToImageRequest {
            prompt,
            model_id: model,
            width: None,
            height: None,
            negative_prompt: None,
            num_images: None,
        }),
        Command::I2i {
            image,
            prompt,
            model,
        } => {
            let bytes = fs::read(&image)?;
            log::info!("🖼️  Loaded input image: {} ({} bytes)", image.display(), bytes.len());
            GenerationJob::ImageToImage(ImageToImageRequest {
                prompt,
                image: bytes,
                model_id: model,
                strength: None,
            })
        }
        Command::I2v {
            image,
            width,
            height,
            model,
        } => {
            let bytes = fs::read(&image)?;
            log::info!("🖼️  Loaded input image: {} ({} bytes)", image.display(), bytes.len());
            GenerationJob::ImageToVideo(ImageToVideoRequest {
                image: bytes,
                model_id: model,
                width: Some(width),
                height: Some(height),
                fps: None,
            })
        }
    };

    let kind = job.kind();
    log::info!("🎨 Running {} job...", kind.route().trim_start_matches('/'));

    let pipeline_timer = logger::timer("generation pipeline");
    let saved = match client.generate_to_file(job).await {
        Ok(saved) => {
            log::info!("✅ Media downloaded successfully ({} bytes)", saved.len);
            saved
        }
        Err(e) => {
            log::error!("❌ Generation failed: {}", e);
            return Err(e.into());
        }
    };
    drop(pipeline_timer);

    match kind {
        OperationKind::ImageToVideo => {
            log::info!("🎬 Video saved at: {}", saved.path);
        }
        _ => {
            log::info!("💾 Image saved to: {}", saved.path);
            match present::show(&saved.path) {
                Ok(_) => log::info!("👁️  Opened {} in the system viewer", saved.path),
                Err(e) => log::warn!("⚠️  {}", e),
            }
        }
    }

    Ok(())
}
