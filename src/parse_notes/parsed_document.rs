/// Sub-sections of an upcoming version block, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Highlights,
    Fixes,
    Dependencies,
    Tests,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Highlights,
        Section::Fixes,
        Section::Dependencies,
        Section::Tests,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Highlights => "Highlights",
            Section::Fixes => "Fixes",
            Section::Dependencies => "Dependency Versions",
            Section::Tests => "Tested Build Variants",
        }
    }
}

/// Bullet point lines per upcoming sub-section. Lines keep their terminator.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UpcomingNotes<'t> {
    pub highlights: Vec<&'t str>,
    pub fixes: Vec<&'t str>,
    pub dependencies: Vec<&'t str>,
    pub tests: Vec<&'t str>,
}

impl<'t> UpcomingNotes<'t> {
    pub fn get(&self, section: Section) -> &[&'t str] {
        match section {
            Section::Highlights => &self.highlights,
            Section::Fixes => &self.fixes,
            Section::Dependencies => &self.dependencies,
            Section::Tests => &self.tests,
        }
    }

    pub fn get_mut(&mut self, section: Section) -> &mut Vec<&'t str> {
        match section {
            Section::Highlights => &mut self.highlights,
            Section::Fixes => &mut self.fixes,
            Section::Dependencies => &mut self.dependencies,
            Section::Tests => &mut self.tests,
        }
    }

    /// Appends every section of `other` behind the lines already collected.
    pub fn append(&mut self, other: UpcomingNotes<'t>) {
        let UpcomingNotes {
            highlights,
            fixes,
            dependencies,
            tests,
        } = other;

        self.highlights.extend(highlights);
        self.fixes.extend(fixes);
        self.dependencies.extend(dependencies);
        self.tests.extend(tests);
    }

    pub fn is_empty(&self) -> bool {
        Section::ALL.iter().all(|s| self.get(*s).is_empty())
    }
}

/// The regions of the target document.
///
/// Joining the regions in field order gives back the original document,
/// except for `upcoming` which only holds the notes and not the headlines,
/// placeholders and separators around them.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParsedDocument<'t> {
    pub pre_version_text: Vec<&'t str>,
    pub upcoming: UpcomingNotes<'t>,
    pub last_version_text: Vec<&'t str>,
    pub post_version_text: Vec<&'t str>,
    pub version_history: Vec<&'t str>,
    pub post_version_history: Vec<&'t str>,
}
