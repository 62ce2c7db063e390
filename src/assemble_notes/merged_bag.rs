use crate::parse_notes::{ParsedDocument, UpcomingNotes};

/// Regions of the document that is about to be written.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct MergedBag<'t> {
    pub pre_version_text: Vec<&'t str>,
    pub upcoming: UpcomingNotes<'t>,
    pub post_version_text: Vec<&'t str>,
    pub version_history: Vec<&'t str>,
    pub post_version_history: Vec<&'t str>,
}

/// Notes of the target come first, then binary notes, then extra notes.
/// The section of the last released version moves into the version history.
pub fn merge_bags<'t>(
    target: ParsedDocument<'t>,
    binary_notes: UpcomingNotes<'t>,
    extra_notes: UpcomingNotes<'t>,
) -> MergedBag<'t> {
    let ParsedDocument {
        pre_version_text,
        mut upcoming,
        mut last_version_text,
        post_version_text,
        version_history,
        post_version_history,
    } = target;

    upcoming.append(binary_notes);
    upcoming.append(extra_notes);

    last_version_text.extend(version_history);

    MergedBag {
        pre_version_text,
        upcoming,
        post_version_text,
        version_history: last_version_text,
        post_version_history,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notes<'t>(highlights: &[&'t str], fixes: &[&'t str]) -> UpcomingNotes<'t> {
        UpcomingNotes {
            highlights: highlights.to_vec(),
            fixes: fixes.to_vec(),
            ..Default::default()
        }
    }

    #[test]
    fn notes_are_concatenated_in_source_order() {
        let target = ParsedDocument {
            upcoming: notes(&["* target\n"], &[]),
            ..Default::default()
        };
        let merged = merge_bags(
            target,
            notes(&["* binary\n"], &["* binary fix\n"]),
            notes(&["* extra 1\n", "* extra 2\n"], &[]),
        );

        assert_eq!(
            merged.upcoming.highlights,
            vec!["* target\n", "* binary\n", "* extra 1\n", "* extra 2\n"]
        );
        assert_eq!(merged.upcoming.fixes, vec!["* binary fix\n"]);
        assert!(merged.upcoming.dependencies.is_empty());
        assert!(merged.upcoming.tests.is_empty());
    }

    #[test]
    fn last_version_is_prepended_to_history() {
        let target = ParsedDocument {
            pre_version_text: vec!["pre\n"],
            last_version_text: vec!["### 1.1.2020: Version 1.0.0\n", "\n"],
            post_version_text: vec!["## Version History\n"],
            version_history: vec!["### 1.1.2019: Version 0.9.0\n"],
            post_version_history: vec!["## License\n"],
            ..Default::default()
        };
        let merged = merge_bags(target, UpcomingNotes::default(), UpcomingNotes::default());

        assert_eq!(merged.pre_version_text, vec!["pre\n"]);
        assert_eq!(merged.post_version_text, vec!["## Version History\n"]);
        assert_eq!(
            merged.version_history,
            vec![
                "### 1.1.2020: Version 1.0.0\n",
                "\n",
                "### 1.1.2019: Version 0.9.0\n"
            ]
        );
        assert_eq!(merged.post_version_history, vec!["## License\n"]);
        assert!(merged.upcoming.is_empty());
    }
}
