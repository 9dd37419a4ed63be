//! Lens Select CLI
//!
//! Resolves a lens position to a camera id against a device profile.

use clap::Parser;
use lens_select::{CameraManager, CameraSelector, DeviceProfile, LensPosition, ProfileCameraManager};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "lens-select")]
#[command(about = "Select a camera id by lens-facing position")]
#[command(version)]
struct Args {
    /// Path to a TOML device profile (built-in default when omitted)
    #[arg(short, long, value_name = "PATH")]
    profile: Option<PathBuf>,

    /// Lens position to resolve
    #[arg(short, long, value_enum, default_value_t = LensPosition::Back)]
    lens: LensPosition,

    /// List every camera instead of resolving one
    #[arg(long)]
    list: bool,

    /// Print the default profile in TOML format and exit
    #[arg(long)]
    print_profile: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    if args.print_profile {
        return match DeviceProfile::default().to_toml_string() {
            Ok(text) => {
                print!("{}", text);
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("{}", e);
                ExitCode::FAILURE
            }
        };
    }

    let profile = match &args.profile {
        Some(path) => match DeviceProfile::from_file(path) {
            Ok(profile) => {
                info!("Loaded profile from {}", path.display());
                profile
            }
            Err(e) => {
                error!("Failed to load profile: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => DeviceProfile::default(),
    };

    let manager = match ProfileCameraManager::new(profile) {
        Ok(manager) => manager,
        Err(e) => {
            error!("Invalid profile: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let selector = CameraSelector::new(manager);

    if args.list {
        return match selector.list_cameras() {
            Ok(cameras) => {
                for camera in cameras {
                    let facing = camera
                        .lens_facing
                        .map(|facing| facing.to_string())
                        .unwrap_or_else(|| "-".to_string());
                    println!("{}\t{}", camera.id, facing);
                }
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("{}", e);
                ExitCode::FAILURE
            }
        };
    }

    if !selector.supports(args.lens) {
        error!(
            "{} cameras cannot be selected at {}",
            args.lens,
            selector.manager().api_level()
        );
        return ExitCode::from(2);
    }

    match selector.find_camera_id(args.lens) {
        Ok(id) => {
            println!("{}", id);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
