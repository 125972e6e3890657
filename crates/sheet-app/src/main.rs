// Binary crate — internal items need no rustdoc.
#![allow(missing_docs)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use sheet_app::{launch, Device};
use snapshot_specs::Appearance;
use snapshot_surface::SharedDisplay;

#[derive(Parser)]
#[command(name = "sheet-app")]
#[command(about = "Render the sheet demo app to a PNG", long_about = None)]
#[command(version)]
struct Cli {
    /// Where to write the rendered screen
    #[arg(default_value = "sheet-app.png")]
    output: PathBuf,

    /// Render in dark appearance
    #[arg(long)]
    dark: bool,

    /// Device profile
    #[arg(long, value_enum, default_value_t = DeviceArg::Iphone8)]
    device: DeviceArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum DeviceArg {
    Iphone8,
    Ipad,
}

impl From<DeviceArg> for Device {
    fn from(arg: DeviceArg) -> Self {
        match arg {
            DeviceArg::Iphone8 => Device::Iphone8,
            DeviceArg::Ipad => Device::Ipad,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let appearance = if cli.dark {
        Appearance::Dark
    } else {
        Appearance::Light
    };
    let config = Device::from(cli.device).configuration(appearance);

    let bitmap = {
        let mut app = SharedDisplay::lock();
        launch(&mut app);
        let (bitmap, stats) = app.capture(&config).context("failed to render the app scene")?;
        tracing::debug!(?stats, "Captured key window");
        bitmap
    };

    bitmap
        .save_png(&cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    tracing::info!(
        path = %cli.output.display(),
        width = bitmap.width(),
        height = bitmap.height(),
        "Wrote screen"
    );
    Ok(())
}
