use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use rand::Rng;

use crate::capture_settings::CaptureSettings;
use crate::core::models::{MovementBorder, PanDirection};
use crate::core::ports::{
    CancellationSignal, InputInjector, PointerPositionProvider, ScreenCapturer, SequenceRecovery,
};
use crate::global_constants::{
    CAPTURE_TRIGGER_KEY, LOG_TAG_CAPTURE, MESSAGE_CANCEL_REQUESTED, MESSAGE_CAPTURE_FINISHED,
    MESSAGE_STARTING_CAPTURE, STARTUP_BANNER,
};

#[derive(Debug)]
pub struct CaptureRunReport {
    pub images_captured: u32,
    pub last_sequence_index: u32,
}

/// Runs the capture batch: move the pointer, trigger a capture, crop and save
/// the screenshot, pan the view, repeat until the batch is exhausted or the
/// quit key is observed.
pub struct CaptureOrchestrator<'a> {
    settings: CaptureSettings,
    movement_border: MovementBorder,
    output_folder: PathBuf,
    screen_capturer: &'a dyn ScreenCapturer,
    pointer_position_provider: &'a dyn PointerPositionProvider,
    input_injector: &'a mut dyn InputInjector,
    cancellation_signal: &'a dyn CancellationSignal,
    capture_counter: u32,
    batch_remaining: u32,
    previous_direction: Option<PanDirection>,
}

impl<'a> CaptureOrchestrator<'a> {
    pub fn initialize(
        settings: CaptureSettings,
        screen_capturer: &'a dyn ScreenCapturer,
        pointer_position_provider: &'a dyn PointerPositionProvider,
        input_injector: &'a mut dyn InputInjector,
        cancellation_signal: &'a dyn CancellationSignal,
        sequence_recovery: &dyn SequenceRecovery,
    ) -> Result<Self> {
        let output_folder = PathBuf::from(&settings.output_folder);
        std::fs::create_dir_all(&output_folder)
            .with_context(|| format!("failed to create output folder {:?}", output_folder))?;

        let (screen_width, screen_height) = screen_capturer.detect_screen_dimensions()?;
        let movement_border = MovementBorder::from_screen_dimensions(screen_width, screen_height);

        let capture_counter =
            sequence_recovery.recover_last_index(&output_folder, &settings.file_prefix)?;
        let batch_remaining = settings.batch_size;

        Ok(Self {
            settings,
            movement_border,
            output_folder,
            screen_capturer,
            pointer_position_provider,
            input_injector,
            cancellation_signal,
            capture_counter,
            batch_remaining,
            previous_direction: None,
        })
    }

    pub fn run(&mut self) -> Result<CaptureRunReport> {
        println!("{}", STARTUP_BANNER);
        log::info!("{} {}", LOG_TAG_CAPTURE, MESSAGE_STARTING_CAPTURE);

        let mut rng = rand::thread_rng();
        let starting_counter = self.capture_counter;

        loop {
            self.move_to_random_position(&mut rng)?;

            thread::sleep(Duration::from_millis(self.settings.settle_delay_ms));
            self.input_injector.tap_key(CAPTURE_TRIGGER_KEY)?;

            self.capture_and_crop()?;

            let next_direction = PanDirection::choose_next(&mut rng, self.previous_direction);
            self.drag_view(next_direction)?;
            self.previous_direction = Some(next_direction);

            if self.batch_remaining == 0 {
                log::info!("{} {}", LOG_TAG_CAPTURE, MESSAGE_CAPTURE_FINISHED);
                break;
            }

            if self.cancellation_signal.is_cancellation_requested() {
                log::info!("{} {}", LOG_TAG_CAPTURE, MESSAGE_CANCEL_REQUESTED);
                break;
            }
        }

        Ok(CaptureRunReport {
            images_captured: self.capture_counter - starting_counter,
            last_sequence_index: self.capture_counter,
        })
    }

    fn move_to_random_position<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        let target_position = self.movement_border.random_point_within(rng);

        self.input_injector.move_pointer_smoothly(
            target_position,
            Duration::from_millis(self.settings.pointer_move_duration_ms),
        )?;

        log::info!(
            "{} moved to random position: {}",
            LOG_TAG_CAPTURE,
            target_position
        );

        Ok(())
    }

    fn capture_and_crop(&mut self) -> Result<()> {
        let full_frame = self.screen_capturer.capture_full_screen()?;
        let cropped_frame = full_frame.crop_region(
            self.settings.crop_x_offset,
            self.settings.crop_y_offset,
            self.settings.crop_width,
            self.settings.crop_height,
        )?;

        self.capture_counter += 1;
        self.batch_remaining = self.batch_remaining.saturating_sub(1);

        let file_name = format!("{}{:04}.png", self.settings.file_prefix, self.capture_counter);
        let output_path = self.output_folder.join(&file_name);
        cropped_frame.save_as_png(&output_path)?;

        log::info!(
            "{} saved cropped image: {}",
            LOG_TAG_CAPTURE,
            output_path.display()
        );

        Ok(())
    }

    fn drag_view(&mut self, direction: PanDirection) -> Result<PanDirection> {
        let current_position = self
            .pointer_position_provider
            .get_current_pointer_position()
            .map_err(|error| anyhow::anyhow!(error))?;

        let destination = self.movement_border.clamp_drag_destination(
            current_position,
            direction,
            self.settings.drag_distance_pixels,
        );

        self.input_injector.drag_pointer_smoothly(
            current_position,
            destination,
            Duration::from_millis(self.settings.drag_duration_ms),
        )?;

        log::info!(
            "{} dragged {} from {} to {}",
            LOG_TAG_CAPTURE,
            direction,
            current_position,
            destination
        );

        Ok(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    use crate::core::models::{CaptureFrame, ScreenPoint};
    use crate::infrastructure::FilesystemSequenceScanner;

    struct StubScreenCapturer {
        width: u32,
        height: u32,
    }

    impl ScreenCapturer for StubScreenCapturer {
        fn detect_screen_dimensions(&self) -> Result<(u32, u32)> {
            Ok((self.width, self.height))
        }

        fn capture_full_screen(&self) -> Result<CaptureFrame> {
            let raw_data = vec![255u8; (self.width * self.height * 4) as usize];
            Ok(CaptureFrame::build_from_raw_data(
                self.width,
                self.height,
                raw_data,
            ))
        }
    }

    struct StubPointerPositionProvider {
        position: ScreenPoint,
    }

    impl PointerPositionProvider for StubPointerPositionProvider {
        fn get_current_pointer_position(&self) -> Result<ScreenPoint, String> {
            Ok(self.position)
        }
    }

    #[derive(Default)]
    struct RecordingInputInjector {
        moves: u32,
        drags: u32,
        key_taps: u32,
    }

    impl InputInjector for RecordingInputInjector {
        fn move_pointer_smoothly(
            &mut self,
            _destination: ScreenPoint,
            _duration: Duration,
        ) -> Result<()> {
            self.moves += 1;
            Ok(())
        }

        fn drag_pointer_smoothly(
            &mut self,
            _from: ScreenPoint,
            _to: ScreenPoint,
            _duration: Duration,
        ) -> Result<()> {
            self.drags += 1;
            Ok(())
        }

        fn tap_key(&mut self, _key_character: char) -> Result<()> {
            self.key_taps += 1;
            Ok(())
        }
    }

    struct StubCancellationSignal {
        requested: AtomicBool,
    }

    impl CancellationSignal for StubCancellationSignal {
        fn is_cancellation_requested(&self) -> bool {
            self.requested.load(Ordering::SeqCst)
        }
    }

    fn test_settings(folder_name: &str, batch_size: u32) -> (CaptureSettings, PathBuf) {
        let output_folder = std::env::temp_dir().join(folder_name);
        std::fs::remove_dir_all(&output_folder).ok();

        let settings = CaptureSettings {
            output_folder: output_folder.to_string_lossy().into_owned(),
            crop_width: 20,
            crop_height: 20,
            crop_x_offset: 10,
            crop_y_offset: 10,
            batch_size,
            drag_distance_pixels: 40,
            settle_delay_ms: 0,
            pointer_move_duration_ms: 0,
            drag_duration_ms: 0,
            ..CaptureSettings::default()
        };

        (settings, output_folder)
    }

    fn saved_file_names(folder: &PathBuf) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(folder)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_batch_of_n_iterations_writes_exactly_n_files_then_halts() {
        let (settings, output_folder) = test_settings("satellite-scraper-orchestrator-batch", 3);
        let screen_capturer = StubScreenCapturer {
            width: 200,
            height: 150,
        };
        let pointer_position_provider = StubPointerPositionProvider {
            position: ScreenPoint::at_coordinates(100, 75),
        };
        let mut input_injector = RecordingInputInjector::default();
        let cancellation_signal = StubCancellationSignal {
            requested: AtomicBool::new(false),
        };
        let sequence_scanner = FilesystemSequenceScanner::initialize();

        let report = {
            let mut orchestrator = CaptureOrchestrator::initialize(
                settings,
                &screen_capturer,
                &pointer_position_provider,
                &mut input_injector,
                &cancellation_signal,
                &sequence_scanner,
            )
            .unwrap();
            orchestrator.run().unwrap()
        };

        assert_eq!(report.images_captured, 3);
        assert_eq!(
            saved_file_names(&output_folder),
            vec![
                "satellite_crop_0001.png",
                "satellite_crop_0002.png",
                "satellite_crop_0003.png"
            ]
        );
        assert_eq!(input_injector.key_taps, 3);
        assert_eq!(input_injector.drags, 3);
        std::fs::remove_dir_all(&output_folder).ok();
    }

    #[test]
    fn test_counter_resumes_from_highest_existing_file() {
        let (settings, output_folder) = test_settings("satellite-scraper-orchestrator-resume", 1);
        std::fs::create_dir_all(&output_folder).unwrap();
        std::fs::write(output_folder.join("satellite_crop_0007.png"), b"").unwrap();

        let screen_capturer = StubScreenCapturer {
            width: 200,
            height: 150,
        };
        let pointer_position_provider = StubPointerPositionProvider {
            position: ScreenPoint::at_coordinates(100, 75),
        };
        let mut input_injector = RecordingInputInjector::default();
        let cancellation_signal = StubCancellationSignal {
            requested: AtomicBool::new(false),
        };
        let sequence_scanner = FilesystemSequenceScanner::initialize();

        let report = {
            let mut orchestrator = CaptureOrchestrator::initialize(
                settings,
                &screen_capturer,
                &pointer_position_provider,
                &mut input_injector,
                &cancellation_signal,
                &sequence_scanner,
            )
            .unwrap();
            orchestrator.run().unwrap()
        };

        assert_eq!(report.last_sequence_index, 8);
        assert!(output_folder.join("satellite_crop_0008.png").exists());
        std::fs::remove_dir_all(&output_folder).ok();
    }

    #[test]
    fn test_cancellation_request_stops_after_the_current_iteration() {
        let (settings, output_folder) = test_settings("satellite-scraper-orchestrator-cancel", 50);
        let screen_capturer = StubScreenCapturer {
            width: 200,
            height: 150,
        };
        let pointer_position_provider = StubPointerPositionProvider {
            position: ScreenPoint::at_coordinates(100, 75),
        };
        let mut input_injector = RecordingInputInjector::default();
        let cancellation_signal = StubCancellationSignal {
            requested: AtomicBool::new(true),
        };
        let sequence_scanner = FilesystemSequenceScanner::initialize();

        let report = {
            let mut orchestrator = CaptureOrchestrator::initialize(
                settings,
                &screen_capturer,
                &pointer_position_provider,
                &mut input_injector,
                &cancellation_signal,
                &sequence_scanner,
            )
            .unwrap();
            orchestrator.run().unwrap()
        };

        assert_eq!(report.images_captured, 1);
        assert_eq!(saved_file_names(&output_folder), vec!["satellite_crop_0001.png"]);
        std::fs::remove_dir_all(&output_folder).ok();
    }

    #[test]
    fn test_initialize_creates_the_output_folder() {
        let (settings, output_folder) = test_settings("satellite-scraper-orchestrator-folder", 1);
        assert!(!output_folder.exists());

        let screen_capturer = StubScreenCapturer {
            width: 200,
            height: 150,
        };
        let pointer_position_provider = StubPointerPositionProvider {
            position: ScreenPoint::at_coordinates(100, 75),
        };
        let mut input_injector = RecordingInputInjector::default();
        let cancellation_signal = StubCancellationSignal {
            requested: AtomicBool::new(false),
        };
        let sequence_scanner = FilesystemSequenceScanner::initialize();

        CaptureOrchestrator::initialize(
            settings,
            &screen_capturer,
            &pointer_position_provider,
            &mut input_injector,
            &cancellation_signal,
            &sequence_scanner,
        )
        .unwrap();

        assert!(output_folder.exists());
        std::fs::remove_dir_all(&output_folder).ok();
    }
}
