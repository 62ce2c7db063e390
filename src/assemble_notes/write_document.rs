use super::{MergedBag, VersionHeading};
use crate::parse_notes::Section;

fn push_lines(out: &mut String, lines: &[&str]) {
    for line in lines {
        out.push_str(line);
    }
}

/// The block for the next release. Only dependency versions are carried over.
fn write_upcoming_placeholder(out: &mut String, dependencies: &[&str]) {
    out.push_str("### Upcoming: master-branch (unstable not tested yet)\n");
    out.push('\n');
    out.push_str("#### Highlights\n");
    out.push_str("* nothing planned\n");
    out.push('\n');
    out.push_str("#### Fixes\n");
    out.push_str("* nothing planned\n");
    out.push('\n');
    out.push_str("#### Dependency Versions\n");
    if dependencies.is_empty() {
        out.push_str("* none");
    } else {
        push_lines(out, dependencies);
    }
    out.push('\n');
    out.push('\n');
}

/// Serializes the merged regions into the new document.
pub fn write_document(bag: &MergedBag, heading: &VersionHeading) -> String {
    let mut out = String::new();

    push_lines(&mut out, &bag.pre_version_text);

    write_upcoming_placeholder(&mut out, &bag.upcoming.dependencies);

    out.push_str(&heading.to_string());
    out.push('\n');
    out.push('\n');

    for section in Section::ALL.iter() {
        let lines = bag.upcoming.get(*section);
        if lines.is_empty() {
            continue;
        }
        out.push_str("#### ");
        out.push_str(section.title());
        out.push('\n');
        push_lines(&mut out, lines);
        out.push('\n');
    }

    push_lines(&mut out, &bag.post_version_text);
    push_lines(&mut out, &bag.version_history);
    push_lines(&mut out, &bag.post_version_history);

    out
}
