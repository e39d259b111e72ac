//! Host information and process scheduling hints

/// Name of this host, or `localhost` if it cannot be determined.
pub fn host_name() -> String {
    #[cfg(unix)]
    {
        match nix::unistd::gethostname() {
            Ok(name) => return name.to_string_lossy().into_owned(),
            Err(e) => log::debug!("gethostname failed: {e}"),
        }
    }
    "localhost".to_string()
}

/// Lowest scheduling priority, so a big scan does not starve other work.
const NICE_LEVEL: i32 = 19;

/// Lower this process's scheduling priority. Best effort: failure is only
/// logged.
#[cfg(unix)]
pub fn lower_priority() {
    // SAFETY: setpriority only reads its integer arguments.
    let rc = unsafe { libc::setpriority(libc::PRIO_PROCESS, 0, NICE_LEVEL) };
    if rc != 0 {
        log::debug!(
            "could not lower priority: {}",
            std::io::Error::last_os_error()
        );
    }
}

#[cfg(not(unix))]
pub fn lower_priority() {
    log::debug!("priority adjustment not supported on this platform (nice {NICE_LEVEL})");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_name_is_not_empty() {
        assert!(!host_name().is_empty());
    }
}
