use crate::core::store::{Project, ProjectQuery};

/// Server-side constraint currently active for the project query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterSelection {
    #[default]
    All,
    WomenLed,
}

impl FilterSelection {
    /// Equality constraints this selection adds to the server query.
    pub fn to_query(self) -> ProjectQuery {
        match self {
            FilterSelection::All => ProjectQuery::default(),
            FilterSelection::WomenLed => ProjectQuery {
                women_led: Some(true),
            },
        }
    }
}

fn women_led(project: &Project) -> bool {
    project.is_women_led
}

fn from_college(project: &Project, college: &str) -> bool {
    project.college.as_deref() == Some(college)
}

/// Case-insensitive substring match against title, description and skills.
/// The empty term matches everything.
fn matches_search(project: &Project, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    project.title.to_lowercase().contains(&term)
        || project.description.to_lowercase().contains(&term)
        || project
            .skills
            .iter()
            .any(|skill| skill.to_lowercase().contains(&term))
}

/// Derive the displayed subset, preserving the order of `projects`.
///
/// The rules are ordered and the first applicable one decides the predicate:
/// the my-college restriction (which needs both the toggle and a resolved
/// college) shadows the women-led selection and the search term, and the
/// women-led selection shadows the search term. The match spells out all
/// four combinations so extending the rules cannot silently shadow one.
pub fn visible<'a>(
    projects: &'a [Project],
    search_term: &str,
    selection: FilterSelection,
    my_college_only: bool,
    resolved_college: Option<&str>,
) -> Vec<&'a Project> {
    // The toggle is inert until a college has been resolved.
    let college = resolved_college.filter(|_| my_college_only);
    projects
        .iter()
        .filter(|project| match (college, selection) {
            (Some(c), FilterSelection::WomenLed) => from_college(project, c) && women_led(project),
            (Some(c), FilterSelection::All) => from_college(project, c),
            (None, FilterSelection::WomenLed) => women_led(project),
            (None, FilterSelection::All) => matches_search(project, search_term),
        })
        .collect()
}
