use super::Section;
use crate::utils::strip_line_ending;
use regex::Regex;

/// Structural markers recognized while scanning a release notes document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heading {
    /// `## ... Latest Version ...`
    LatestVersion,
    /// Any `## ` headline.
    Chapter,
    /// `### ... Version <version being released> ...`
    CurrentVersion,
    /// `### ... Version ...`
    LastVersion,
    /// `### ... Upcoming: ...`
    Upcoming,
    /// `#### ...` headline of one of the upcoming sub-sections.
    Section(Section),
    /// `## ... Version History ...`
    VersionHistory,
}

pub struct Patterns {
    latest_version: Regex,
    chapter: Regex,
    current_version: Option<Regex>,
    last_version: Regex,
    upcoming: Regex,
    highlights: Regex,
    fixes: Regex,
    dependencies: Regex,
    tests: Regex,
    version_history: Regex,
    placeholder: Regex,
    bullet_point: Regex,
}

fn pattern(re: &str) -> Regex {
    Regex::new(re).unwrap()
}

impl Patterns {
    /// Without a version there is no duplicate version check,
    /// `Heading::CurrentVersion` never matches.
    pub fn new(version: Option<&str>) -> Patterns {
        Patterns {
            latest_version: pattern(r"^## .*Latest Version.*$"),
            chapter: pattern(r"^## .*$"),
            current_version: version
                .map(|v| pattern(&format!(r"^### .*Version {}.*$", regex::escape(v)))),
            last_version: pattern(r"^### .*Version.*$"),
            // "Upcomming" is how older documents spell it.
            upcoming: pattern(r"^### .*Upcomm?ing:.*$"),
            highlights: pattern(r"^#### .*Highlights.*$"),
            fixes: pattern(r"^#### .*Fixes.*$"),
            dependencies: pattern(r"^#### .*Dependency Versions.*$"),
            tests: pattern(r"^#### .*Tested Build Variants.*$"),
            version_history: pattern(r"^## .*Version History.*$"),
            placeholder: pattern(r"^[ \t]*[*]+[ \t]*(none|nothing planned)[ \t]*$"),
            bullet_point: pattern(r"^[ ]*[*]+[ ]+.*$"),
        }
    }

    fn matches(&self, heading: Heading, line: &str) -> bool {
        let re = match heading {
            Heading::LatestVersion => &self.latest_version,
            Heading::Chapter => &self.chapter,
            Heading::CurrentVersion => match &self.current_version {
                Some(re) => re,
                None => return false,
            },
            Heading::LastVersion => &self.last_version,
            Heading::Upcoming => &self.upcoming,
            Heading::Section(Section::Highlights) => &self.highlights,
            Heading::Section(Section::Fixes) => &self.fixes,
            Heading::Section(Section::Dependencies) => &self.dependencies,
            Heading::Section(Section::Tests) => &self.tests,
            Heading::VersionHistory => &self.version_history,
        };
        re.is_match(line)
    }

    /// Returns the first of `candidates` that matches `line`.
    /// The order of `candidates` is the precedence.
    pub fn find(&self, line: &str, candidates: &[Heading]) -> Option<Heading> {
        let line = strip_line_ending(line);
        candidates
            .iter()
            .copied()
            .find(|heading| self.matches(*heading, line))
    }

    /// A note is a bullet point that is not a "none"/"nothing planned" placeholder.
    pub fn is_note(&self, line: &str) -> bool {
        let line = strip_line_ending(line);
        self.bullet_point.is_match(line) && !self.placeholder.is_match(line)
    }
}
