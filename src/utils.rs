use std::fs;
use std::io::Write;
use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};

use crate::global_constants::{INSTANCE_LOCK_FILE_NAME, LOG_TAG_INSTANCE};

/// Refuses to start when another capture run is already driving the pointer.
pub fn ensure_single_instance() -> bool {
    let lock_file_path = std::env::temp_dir().join(INSTANCE_LOCK_FILE_NAME);

    if lock_file_path.exists() {
        if let Ok(pid_string) = fs::read_to_string(&lock_file_path) {
            if let Ok(pid) = pid_string.trim().parse::<u32>() {
                let mut system = System::new();
                system.refresh_processes_specifics(
                    ProcessesToUpdate::All,
                    true,
                    ProcessRefreshKind::nothing(),
                );

                if system.process(Pid::from_u32(pid)).is_some() {
                    log::error!(
                        "{} another capture run is active (PID: {}); two runs would fight over the pointer",
                        LOG_TAG_INSTANCE,
                        pid
                    );
                    return false;
                }

                log::info!(
                    "{} previous instance (PID: {}) is not running, cleaning up stale lock file",
                    LOG_TAG_INSTANCE,
                    pid
                );
                let _ = fs::remove_file(&lock_file_path);
            }
        }
    }

    let current_pid = std::process::id();
    if let Err(e) = fs::File::create(&lock_file_path)
        .and_then(|mut file| file.write_all(current_pid.to_string().as_bytes()))
    {
        log::error!("{} Failed to create lock file: {}", LOG_TAG_INSTANCE, e);
        return false;
    }

    log::info!(
        "{} Created lock file with PID: {}",
        LOG_TAG_INSTANCE,
        current_pid
    );
    true
}
