use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use satellite_scraper_pc::capture_settings::CaptureSettings;
use satellite_scraper_pc::global_constants::{
    DEFAULT_BATCH_SIZE, LOG_TAG_MAIN, STARTUP_GRACE_DELAY_MS,
};
use satellite_scraper_pc::infrastructure::{
    EnigoInputInjector, FilesystemSequenceScanner, RdevCancellationListener,
    SystemPointerPositionProvider, XcapScreenCapturer,
};
use satellite_scraper_pc::services::CaptureOrchestrator;
use satellite_scraper_pc::utils;

/// Automated map-tile screenshot scraper.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct CaptureArgs {
    /// Number of capture iterations to run before stopping.
    #[arg(default_value_t = DEFAULT_BATCH_SIZE)]
    batch: u32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CaptureArgs::parse();
    log::info!("{} batch argument: {}", LOG_TAG_MAIN, args.batch);
    // TODO: forward args.batch into the run settings; the argument is parsed
    // and logged but the run below always uses the configured batch_size.

    if !utils::ensure_single_instance() {
        log::error!("{} refusing to start a second capture run", LOG_TAG_MAIN);
        return Ok(());
    }

    let settings = CaptureSettings::load()?;

    // Give the operator a moment to bring the map application to the front.
    thread::sleep(Duration::from_millis(STARTUP_GRACE_DELAY_MS));

    let screen_capturer = XcapScreenCapturer::initialize();
    let pointer_position_provider = SystemPointerPositionProvider::initialize();
    let mut input_injector = EnigoInputInjector::initialize(settings.enable_input_fail_safe)?;
    let cancellation_listener = RdevCancellationListener::initialize();
    let sequence_scanner = FilesystemSequenceScanner::initialize();

    let mut orchestrator = CaptureOrchestrator::initialize(
        settings,
        &screen_capturer,
        &pointer_position_provider,
        &mut input_injector,
        &cancellation_listener,
        &sequence_scanner,
    )?;

    let report = orchestrator.run()?;

    log::info!(
        "{} captured {} images, sequence now at {}",
        LOG_TAG_MAIN,
        report.images_captured,
        report.last_sequence_index
    );

    Ok(())
}
