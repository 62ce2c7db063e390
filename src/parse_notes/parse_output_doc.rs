use super::parse_fragment::collect_note;
use super::{Heading, ParsedDocument, Patterns, Section};
use crate::error::{MergeError, Result};
use crate::utils::split_lines;
use tracing::{debug, error, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    PreVersionText,
    LatestVersion,
    /// Carries the sub-section the notes currently go to.
    UpcomingVersion(Option<Section>),
    LastVersion,
    PostVersion,
    VersionHistory,
    PostVersionHistory,
}

impl State {
    /// Headlines that are relevant in this state, most specific first.
    fn headings(self) -> &'static [Heading] {
        match self {
            State::PreVersionText => &[Heading::LatestVersion],
            State::LatestVersion => &[
                Heading::Chapter,
                Heading::CurrentVersion,
                Heading::LastVersion,
                Heading::Upcoming,
            ],
            State::UpcomingVersion(_) => &[
                Heading::Chapter,
                Heading::CurrentVersion,
                Heading::LastVersion,
                Heading::Section(Section::Highlights),
                Heading::Section(Section::Fixes),
                Heading::Section(Section::Dependencies),
                Heading::Section(Section::Tests),
            ],
            State::LastVersion | State::VersionHistory => &[Heading::Chapter],
            State::PostVersion => &[Heading::VersionHistory],
            State::PostVersionHistory => &[],
        }
    }
}

/// Splits the target document into its regions.
///
/// Fails if the document already has a headline for `version` or if it has no
/// "Latest Version" headline at all.
pub fn parse_output_doc<'t>(content: &'t str, version: &str) -> Result<ParsedDocument<'t>> {
    let patterns = Patterns::new(Some(version));
    let mut doc = ParsedDocument::default();
    let mut state = State::PreVersionText;

    for (idx, line) in split_lines(content).enumerate() {
        let heading = patterns.find(line, state.headings());

        state = match (state, heading) {
            (_, Some(Heading::CurrentVersion)) => {
                error!("found current version headline at line {}", idx);
                return Err(MergeError::DuplicateVersion {
                    version: version.to_owned(),
                    line: idx,
                });
            }

            (State::PreVersionText, Some(Heading::LatestVersion)) => {
                info!("found latest version headline at line {}", idx);
                doc.pre_version_text.push(line);
                State::LatestVersion
            }
            (State::PreVersionText, _) => {
                doc.pre_version_text.push(line);
                state
            }

            (State::LatestVersion, Some(Heading::Chapter))
            | (State::UpcomingVersion(_), Some(Heading::Chapter))
            | (State::LastVersion, Some(Heading::Chapter)) => {
                info!("found next chapter headline at line {}", idx);
                doc.post_version_text.push(line);
                State::PostVersion
            }
            (State::LatestVersion, Some(Heading::LastVersion))
            | (State::UpcomingVersion(_), Some(Heading::LastVersion)) => {
                info!("found last version headline at line {}", idx);
                doc.last_version_text.push(line);
                State::LastVersion
            }

            (State::LatestVersion, Some(Heading::Upcoming)) => {
                info!("found upcoming version headline at line {}", idx);
                State::UpcomingVersion(None)
            }
            (State::LatestVersion, _) => {
                doc.pre_version_text.push(line);
                state
            }

            (State::UpcomingVersion(_), Some(Heading::Section(section))) => {
                debug!("found {} at line {}", section.title(), idx);
                State::UpcomingVersion(Some(section))
            }
            (State::UpcomingVersion(section), _) => {
                if let Some(section) = section {
                    collect_note(&mut doc.upcoming, section, line, idx, &patterns);
                }
                state
            }

            (State::LastVersion, _) => {
                doc.last_version_text.push(line);
                state
            }

            (State::PostVersion, Some(Heading::VersionHistory)) => {
                info!("found version history headline at line {}", idx);
                doc.post_version_text.push(line);
                State::VersionHistory
            }
            (State::PostVersion, _) => {
                doc.post_version_text.push(line);
                state
            }

            (State::VersionHistory, Some(Heading::Chapter)) => {
                info!("found next chapter headline at line {}", idx);
                doc.post_version_history.push(line);
                State::PostVersionHistory
            }
            (State::VersionHistory, _) => {
                doc.version_history.push(line);
                state
            }

            (State::PostVersionHistory, _) => {
                doc.post_version_history.push(line);
                state
            }
        };
    }

    if state == State::PreVersionText {
        return Err(MergeError::MissingLatestVersion);
    }

    Ok(doc)
}
