//! Output table
//!
//! Every icon the app bundles need, in the order they are generated. Paths
//! are relative to the directory the generator runs in (the app project root).

use std::fmt;

/// Bundle an icon belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Android,
    Web,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Android => write!(f, "Android"),
            Platform::Web => write!(f, "Web"),
        }
    }
}

/// One icon file to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconTarget {
    /// Side length in pixels
    pub size: u32,
    /// Output path relative to the project root
    pub path: &'static str,
    pub platform: Platform,
}

impl IconTarget {
    const fn android(size: u32, path: &'static str) -> Self {
        IconTarget { size, path, platform: Platform::Android }
    }

    const fn web(size: u32, path: &'static str) -> Self {
        IconTarget { size, path, platform: Platform::Web }
    }
}

pub const TARGETS: [IconTarget; 10] = [
    // Android mipmap density buckets
    IconTarget::android(48, "android/app/src/main/res/mipmap-mdpi/ic_launcher.png"),
    IconTarget::android(72, "android/app/src/main/res/mipmap-hdpi/ic_launcher.png"),
    IconTarget::android(96, "android/app/src/main/res/mipmap-xhdpi/ic_launcher.png"),
    IconTarget::android(144, "android/app/src/main/res/mipmap-xxhdpi/ic_launcher.png"),
    IconTarget::android(192, "android/app/src/main/res/mipmap-xxxhdpi/ic_launcher.png"),
    // Web manifest icons
    IconTarget::web(192, "web/icons/Icon-192.png"),
    IconTarget::web(512, "web/icons/Icon-512.png"),
    IconTarget::web(192, "web/icons/Icon-maskable-192.png"),
    IconTarget::web(512, "web/icons/Icon-maskable-512.png"),
    IconTarget::web(32, "web/favicon.png"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_android_buckets() {
        let android: Vec<u32> = TARGETS
            .iter()
            .filter(|t| t.platform == Platform::Android)
            .map(|t| t.size)
            .collect();
        assert_eq!(android, vec![48, 72, 96, 144, 192]);
        assert!(TARGETS[..5].iter().all(|t| t.path.ends_with("/ic_launcher.png")));
    }

    #[test]
    fn test_web_icons() {
        let web: Vec<(u32, &str)> = TARGETS
            .iter()
            .filter(|t| t.platform == Platform::Web)
            .map(|t| (t.size, t.path))
            .collect();
        assert_eq!(web.len(), 5);
        assert_eq!(web[4], (32, "web/favicon.png"));
    }

    #[test]
    fn test_paths_unique_and_relative() {
        let paths: HashSet<&str> = TARGETS.iter().map(|t| t.path).collect();
        assert_eq!(paths.len(), TARGETS.len());
        assert!(TARGETS.iter().all(|t| !t.path.starts_with('/')));
    }
}
