use super::{Heading, Patterns, Section, UpcomingNotes};
use crate::utils::split_lines;
use tracing::{debug, info};

// Reverse document order: a headline naming several sections goes to the last one.
const SECTION_HEADINGS: [Heading; 4] = [
    Heading::Section(Section::Tests),
    Heading::Section(Section::Dependencies),
    Heading::Section(Section::Fixes),
    Heading::Section(Section::Highlights),
];

/// Parses a fragment that only consists of upcoming sub-sections.
///
/// Every line is checked for a sub-section headline, so a later headline
/// always switches the active section. Anything before the first headline is
/// ignored.
pub fn parse_fragment<'t>(content: &'t str) -> UpcomingNotes<'t> {
    let patterns = Patterns::new(None);
    let mut notes = UpcomingNotes::default();
    let mut section: Option<Section> = None;

    for (idx, line) in split_lines(content).enumerate() {
        match patterns.find(line, &SECTION_HEADINGS) {
            Some(Heading::Section(found)) => {
                debug!("found {} at line {}", found.title(), idx);
                section = Some(found);
            }
            _ => {
                if let Some(section) = section {
                    collect_note(&mut notes, section, line, idx, &patterns);
                }
            }
        }
    }

    info!(
        highlights = notes.highlights.len(),
        fixes = notes.fixes.len(),
        dependencies = notes.dependencies.len(),
        tests = notes.tests.len(),
        "parsed fragment"
    );
    notes
}

pub(super) fn collect_note<'t>(
    notes: &mut UpcomingNotes<'t>,
    section: Section,
    line: &'t str,
    idx: usize,
    patterns: &Patterns,
) {
    if patterns.is_note(line) {
        notes.get_mut(section).push(line);
    } else {
        debug!("dropped line {} in {}", idx, section.title());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_before_first_section_are_ignored() {
        let notes = parse_fragment("* stray\n#### Fixes\n* Fixed crash\n");
        assert_eq!(
            notes,
            UpcomingNotes {
                fixes: vec!["* Fixed crash\n"],
                ..Default::default()
            }
        );
    }

    #[test]
    fn later_headline_switches_section() {
        let content = "\
#### Highlights
* Feature A

Some unrelated text
#### Tested Build Variants
* Linux GCC 9
* none
#### Highlights
* Feature B";
        let notes = parse_fragment(content);
        assert_eq!(notes.highlights, vec!["* Feature A\n", "* Feature B"]);
        assert_eq!(notes.tests, vec!["* Linux GCC 9\n"]);
        assert!(notes.fixes.is_empty());
        assert!(notes.dependencies.is_empty());
    }

    #[test]
    fn placeholders_and_plain_text_are_dropped() {
        let content = "\
#### Dependency Versions
* nothing planned
*  none
Irrlicht 1.8.4
  * Irrlicht 1.8.4
";
        let notes = parse_fragment(content);
        assert_eq!(notes.dependencies, vec!["  * Irrlicht 1.8.4\n"]);
    }

    #[test]
    fn combined_headline_goes_to_last_section() {
        let notes = parse_fragment("#### Highlights and Fixes\n* x\n");
        assert!(notes.highlights.is_empty());
        assert_eq!(notes.fixes, vec!["* x\n"]);

        let notes = parse_fragment("#### Dependency Versions / Tested Build Variants\n* y\n");
        assert!(notes.dependencies.is_empty());
        assert_eq!(notes.tests, vec!["* y\n"]);
    }

    #[test]
    fn empty_fragment() {
        assert!(parse_fragment("").is_empty());
        assert!(parse_fragment("# Binaries\n\nnothing here\n").is_empty());
    }
}
