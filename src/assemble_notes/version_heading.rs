use chrono::{Datelike, NaiveDate};
use std::fmt;

pub const DEFAULT_SOURCE_URL: &str = "https://github.com/ZahlGraf/IrrIMGUI/archive/v{version}.zip";
pub const DEFAULT_BINARY_URL: &str =
    "https://irrimgui.netzeband.eu/binaries/irrimgui_v{version}.zip";

/// Download link templates, `{version}` is replaced by the released version.
#[derive(Debug, Clone)]
pub struct ReleaseUrls {
    pub source: String,
    pub binaries: String,
}

impl Default for ReleaseUrls {
    fn default() -> Self {
        ReleaseUrls {
            source: DEFAULT_SOURCE_URL.to_owned(),
            binaries: DEFAULT_BINARY_URL.to_owned(),
        }
    }
}

impl ReleaseUrls {
    pub fn source_url(&self, version: &str) -> String {
        self.source.replace("{version}", version)
    }

    pub fn binaries_url(&self, version: &str) -> String {
        self.binaries.replace("{version}", version)
    }
}

/// Headline of a released version, e.g.
/// `### 5.3.2024: Version 1.1.0 ([Download Source](..)) ([Download Binaries](..))`.
pub struct VersionHeading<'a> {
    pub version: &'a str,
    pub date: NaiveDate,
    pub urls: &'a ReleaseUrls,
}

impl fmt::Display for VersionHeading<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "### {}.{}.{}: Version {} ([Download Source]({})) ([Download Binaries]({}))",
            self.date.day(),
            self.date.month(),
            self.date.year(),
            self.version,
            self.urls.source_url(self.version),
            self.urls.binaries_url(self.version),
        )
    }
}
