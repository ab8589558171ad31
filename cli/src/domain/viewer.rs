//! Platform command used to open a URL in the default viewer.

/// Program and arguments that open `url` on the given OS, if the OS has one.
///
/// `os` is a value of `std::env::consts::OS`.
#[must_use]
pub fn viewer_command(os: &str, url: &str) -> Option<(&'static str, Vec<String>)> {
    match os {
        "macos" => Some(("open", vec![url.to_string()])),
        "linux" | "freebsd" | "netbsd" | "openbsd" | "dragonfly" => {
            Some(("xdg-open", vec![url.to_string()]))
        }
        // The empty string is the window title `start` expects first.
        "windows" => Some((
            "cmd",
            vec![
                "/C".to_string(),
                "start".to_string(),
                String::new(),
                url.to_string(),
            ],
        )),
        _ => None,
    }
}
