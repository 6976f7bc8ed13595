#![allow(dead_code)]

pub const APPLICATION_NAME: &str = "Satellite Scraper - Desktop";

pub const LOG_TAG_MAIN: &str = "[MAIN]";
pub const LOG_TAG_CAPTURE: &str = "[CAPTURE]";
pub const LOG_TAG_BORDER: &str = "[BORDER]";
pub const LOG_TAG_INPUT: &str = "[INPUT]";
pub const LOG_TAG_KEYBOARD: &str = "[KEYBOARD]";
pub const LOG_TAG_SEQUENCE: &str = "[SEQUENCE]";
pub const LOG_TAG_SERIALIZE: &str = "[SERIALIZE]";
pub const LOG_TAG_SETTINGS: &str = "[SETTINGS]";
pub const LOG_TAG_INSTANCE: &str = "[INSTANCE]";
pub const LOG_TAG_FRAME: &str = "[FRAME]";

pub const MESSAGE_STARTING_CAPTURE: &str = "starting satellite capture run";
pub const MESSAGE_CAPTURE_FINISHED: &str = "finished capturing images";
pub const MESSAGE_CANCEL_REQUESTED: &str = "quit key observed, stopping the batch";
pub const MESSAGE_POINTER_POSITION_FAILED: &str = "failed to get pointer position";
pub const MESSAGE_QUIT_KEY_DETECTED: &str = "Q pressed - requesting cancellation";
pub const MESSAGE_FAIL_SAFE_DISABLED: &str =
    "input fail-safe disabled, pointer may be driven across the whole screen";

pub const ERROR_CONTEXT_MONITOR_ENUMERATION: &str = "Unable to enumerate monitors";
pub const ERROR_CONTEXT_CAPTURE_MONITOR: &str = "Unable to capture monitor";
pub const ERROR_CONTEXT_SCREEN_DIMENSIONS: &str = "Unable to read monitor dimensions";

pub const DEFAULT_OUTPUT_FOLDER: &str = "satellite_images";
pub const DEFAULT_OUTPUT_FILE_PREFIX: &str = "satellite_crop_";
pub const DEFAULT_CROP_WIDTH: u32 = 650;
pub const DEFAULT_CROP_HEIGHT: u32 = 650;
pub const DEFAULT_CROP_X_OFFSET: u32 = 100;
pub const DEFAULT_CROP_Y_OFFSET: u32 = 200;
pub const DEFAULT_BATCH_SIZE: u32 = 50;
pub const DEFAULT_DRAG_DISTANCE_PIXELS: u32 = 400;
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 2000;
pub const DEFAULT_POINTER_MOVE_DURATION_MS: u64 = 500;
pub const DEFAULT_DRAG_DURATION_MS: u64 = 1500;
pub const DEFAULT_SERIALIZE_START_INDEX: u32 = 1;

pub const STARTUP_GRACE_DELAY_MS: u64 = 2000;

// Fraction of each screen axis covered by the centered movement border.
pub const BORDER_SCREEN_FRACTION: f64 = 0.6;

pub const CAPTURE_TRIGGER_KEY: char = 'c';
pub const QUIT_KEY_LABEL: &str = "Q";

pub const OUTPUT_IMAGE_EXTENSION: &str = "png";

pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "bmp", "tiff"];

// Pointer steps are emitted at roughly 125 Hz during smooth moves and drags.
pub const POINTER_STEP_INTERVAL_MS: u64 = 8;
pub const POINTER_MINIMUM_STEPS: usize = 10;

pub const FAIL_SAFE_CORNER_MARGIN_PIXELS: i32 = 10;

pub const SETTINGS_FILE_NAME: &str = "settings.json";
pub const CONFIG_DIR_NAME: &str = "satellite-scraper-pc";
pub const INSTANCE_LOCK_FILE_NAME: &str = "satellite-scraper-pc.lock";

pub const STARTUP_BANNER: &str = r#"
╔════════════════════════════════════════════════════════╗
║  Satellite Scraper - Desktop                           ║
║                                                        ║
║  1. Open your map application in satellite view        ║
║  2. Position the view exactly where you want to start  ║
║  3. The cursor moves to random positions inside a      ║
║     centered border before every capture               ║
║  4. Cropped tiles are written to the output folder     ║
║                                                        ║
║  Hold Q to stop the batch early                        ║
║                                                        ║
╚════════════════════════════════════════════════════════╝
"#;
