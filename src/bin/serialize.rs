use std::path::PathBuf;

use satellite_scraper_pc::global_constants::{
    DEFAULT_OUTPUT_FILE_PREFIX, DEFAULT_OUTPUT_FOLDER, DEFAULT_SERIALIZE_START_INDEX,
    LOG_TAG_SERIALIZE,
};
use satellite_scraper_pc::services::ImageSerializer;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let folder = PathBuf::from(DEFAULT_OUTPUT_FOLDER);
    let serializer = ImageSerializer::initialize();

    match serializer.serialize_folder(
        &folder,
        DEFAULT_OUTPUT_FILE_PREFIX,
        DEFAULT_SERIALIZE_START_INDEX,
    ) {
        Ok(report) => {
            log::info!(
                "{} total images processed: {}",
                LOG_TAG_SERIALIZE,
                report.files_processed
            );
            log::info!(
                "{} serialization complete, new files start from {}{:04}",
                LOG_TAG_SERIALIZE,
                DEFAULT_OUTPUT_FILE_PREFIX,
                report.start_index
            );
        }
        Err(error) => {
            log::error!("{} {:#}", LOG_TAG_SERIALIZE, error);
        }
    }
}
