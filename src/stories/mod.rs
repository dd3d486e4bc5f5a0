//! Story catalog: named, pre-configured instances of every component.
//!
//! Each story has a stable id of the form `component/name` (for example
//! `data-table/with-selection`), a title, a description and search keywords.
//! [`StoryCatalog::search`] ranks stories against a query and
//! [`Story::build`] produces a live [`StoryView`].

mod sample;

use std::collections::VecDeque;
use std::fmt;

pub use sample::{
    advanced_columns, basic_columns, custom_rendering_columns, demo_columns, demo_records,
    demo_users, sample_users, SampleUser, UserStatus,
};

use crate::ui::components::{Badge, BadgeVariant, DataTable, InputField, InputVariant};
use crate::ui::size::Size;
use crate::ui::views::{ActionLog, BadgeRow, StoryContent, StoryView};

/// The component a story belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryComponent {
    Badge,
    DataTable,
    InputField,
}

impl StoryComponent {
    /// Display name.
    pub fn label(&self) -> &'static str {
        match self {
            StoryComponent::Badge => "Badge",
            StoryComponent::DataTable => "DataTable",
            StoryComponent::InputField => "InputField",
        }
    }

    /// Id prefix.
    pub fn slug(&self) -> &'static str {
        match self {
            StoryComponent::Badge => "badge",
            StoryComponent::DataTable => "data-table",
            StoryComponent::InputField => "input-field",
        }
    }
}

type BuildFn = fn(&ActionLog) -> StoryContent;

/// A named component configuration.
#[derive(Clone)]
pub struct Story {
    /// Unique id, `component/name`.
    pub id: String,
    pub component: StoryComponent,
    /// Export name, e.g. `WithSelection`.
    pub name: &'static str,
    /// Human title, e.g. `With Selection`.
    pub title: String,
    pub description: &'static str,
    /// Extra search terms.
    pub keywords: Vec<&'static str>,
    build: BuildFn,
}

impl Story {
    fn new(
        component: StoryComponent,
        name: &'static str,
        description: &'static str,
        keywords: &[&'static str],
        build: BuildFn,
    ) -> Self {
        Self {
            id: format!("{}/{}", component.slug(), kebab_case(name)),
            component,
            name,
            title: title_case(name),
            description,
            keywords: keywords.to_vec(),
            build,
        }
    }

    /// Instantiate the story's component.
    pub fn build(&self) -> StoryView {
        let actions = ActionLog::new();
        let content = (self.build)(&actions);
        StoryView::new(
            self.id.clone(),
            format!("{} / {}", self.component.label(), self.title),
            self.description,
            content,
            actions,
        )
    }
}

impl fmt::Debug for Story {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Story")
            .field("id", &self.id)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

/// `WithSelection` -> `with-selection`.
fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// `WithSelection` -> `With Selection`.
fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if i > 0 && c.is_uppercase() {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Registry of all stories, with search and recently-opened tracking.
#[derive(Debug)]
pub struct StoryCatalog {
    stories: Vec<Story>,
    /// Recently opened ids, most recent first.
    recent: VecDeque<String>,
}

impl StoryCatalog {
    /// Maximum number of recent stories to track.
    pub const MAX_RECENT: usize = 5;

    /// Create the catalog with every story.
    pub fn new() -> Self {
        let mut stories = badge_stories();
        stories.extend(data_table_stories());
        stories.extend(input_field_stories());
        Self {
            stories,
            recent: VecDeque::with_capacity(Self::MAX_RECENT),
        }
    }

    /// All stories in catalog order.
    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    /// Find a story by id. Matching is case-insensitive.
    pub fn get(&self, id: &str) -> Option<&Story> {
        self.stories
            .iter()
            .find(|story| story.id.eq_ignore_ascii_case(id))
    }

    /// Stories matching `query`, best first.
    ///
    /// An empty query returns every story, recently opened ones first and
    /// the rest in catalog order.
    pub fn search(&self, query: &str) -> Vec<&Story> {
        let query = query.trim().to_lowercase();
        let mut results: Vec<(&Story, i32)> = self
            .stories
            .iter()
            .filter_map(|story| {
                if query.is_empty() {
                    return Some((story, self.recent_boost(&story.id)));
                }
                let score = self.match_score(story, &query);
                (score > 0).then(|| (story, score + self.recent_boost(&story.id)))
            })
            .collect();

        // Stable, so ties keep catalog order
        results.sort_by(|a, b| b.1.cmp(&a.1));
        results.into_iter().map(|(story, _)| story).collect()
    }

    fn match_score(&self, story: &Story, query: &str) -> i32 {
        let mut score = 0;

        let title = story.title.to_lowercase();
        if title.contains(query) || story.name.to_lowercase().contains(query) {
            score += 100;
            if title.starts_with(query) {
                score += 50;
            }
            if title.split_whitespace().any(|word| word.starts_with(query)) {
                score += 25;
            }
        }

        if story.component.label().to_lowercase().contains(query) {
            score += 30;
        }

        for keyword in &story.keywords {
            let keyword = keyword.to_lowercase();
            if keyword.contains(query) {
                score += 50;
                if keyword.starts_with(query) {
                    score += 25;
                }
            }
        }

        if story.id.contains(query) {
            score += 25;
        }

        if story.description.to_lowercase().contains(query) {
            score += 10;
        }

        score
    }

    fn recent_boost(&self, id: &str) -> i32 {
        self.recent
            .iter()
            .position(|recent| recent == id)
            .map(|pos| ((Self::MAX_RECENT - pos) as i32) * 10)
            .unwrap_or(0)
    }

    /// Record a story as opened.
    pub fn record_opened(&mut self, id: &str) {
        self.recent.retain(|recent| recent != id);
        self.recent.push_front(id.to_string());
        self.recent.truncate(Self::MAX_RECENT);
    }

    /// Recently opened ids, most recent first.
    pub fn recent(&self) -> Vec<&str> {
        self.recent.iter().map(String::as_str).collect()
    }
}

impl Default for StoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn single_badge(variant: BadgeVariant) -> StoryContent {
    StoryContent::Badges(vec![BadgeRow::new(vec![
        Badge::new(variant.label()).variant(variant)
    ])])
}

fn badge_stories() -> Vec<Story> {
    use StoryComponent::Badge as C;
    vec![
        Story::new(C, "Default", "The default badge.", &["primary"], |_| {
            single_badge(BadgeVariant::Default)
        }),
        Story::new(C, "Secondary", "A muted badge.", &["muted"], |_| {
            single_badge(BadgeVariant::Secondary)
        }),
        Story::new(
            C,
            "Destructive",
            "A badge for dangerous or failed states.",
            &["error", "danger"],
            |_| {
                single_badge(BadgeVariant::Destructive)
            },
        ),
        Story::new(C, "Outline", "A bracketed badge without fill.", &["border"], |_| {
            single_badge(BadgeVariant::Outline)
        }),
        Story::new(C, "Success", "A badge for positive states.", &["ok", "green"], |_| {
            single_badge(BadgeVariant::Success)
        }),
        Story::new(
            C,
            "Warning",
            "A badge for states needing attention.",
            &["caution", "yellow"],
            |_| {
                single_badge(BadgeVariant::Warning)
            },
        ),
        Story::new(C, "AllVariants", "All available badge variants.", &["showcase"], |_| {
            StoryContent::Badges(vec![BadgeRow::new(
                BadgeVariant::ALL
                    .iter()
                    .map(|variant| Badge::new(variant.label()).variant(*variant))
                    .collect(),
            )])
        }),
        Story::new(
            C,
            "StatusBadges",
            "Example usage of badges for status indicators.",
            &["status"],
            |_| {
                let rows = [
                    ("User Status:", "Active", BadgeVariant::Success),
                    ("Payment:", "Pending", BadgeVariant::Warning),
                    ("Account:", "Suspended", BadgeVariant::Destructive),
                    ("Subscription:", "Premium", BadgeVariant::Default),
                ];
                StoryContent::Badges(
                    rows.into_iter()
                        .map(|(label, text, variant)| {
                            BadgeRow::labelled(label, Badge::new(text).variant(variant))
                        })
                        .collect(),
                )
            },
        ),
    ]
}

/// Observer that logs the selected names, as the row-select callback would.
fn log_row_select(log: &ActionLog) -> impl FnMut(&[&SampleUser]) + 'static {
    let log = log.clone();
    move |selected: &[&SampleUser]| {
        let names: Vec<&str> = selected.iter().map(|user| user.name.as_str()).collect();
        log.push(format!("onRowSelect: [{}]", names.join(", ")));
    }
}

fn data_table_stories() -> Vec<Story> {
    use StoryComponent::DataTable as C;
    vec![
        Story::new(
            C,
            "Default",
            "Sortable columns over the sample users.",
            &["sort", "basic"],
            |_| {
                StoryContent::Table(DataTable::new(basic_columns()).with_data(sample_users()))
            },
        ),
        Story::new(
            C,
            "WithSelection",
            "Data table with row selection. Toggle checkboxes to select rows.",
            &["select", "checkbox", "rows"],
            |log| {
                StoryContent::Table(
                    DataTable::new(basic_columns())
                        .with_data(sample_users())
                        .selectable(true)
                        .with_observer(log_row_select(log)),
                )
            },
        ),
        Story::new(
            C,
            "Loading",
            "Data table in loading state with a spinner.",
            &["spinner", "busy"],
            |_| {
                let mut table = DataTable::new(basic_columns()).with_data(sample_users());
                table.set_loading(true);
                StoryContent::Table(table)
            },
        ),
        Story::new(
            C,
            "Empty",
            "Data table with no data, showing the empty message.",
            &["no data", "placeholder"],
            |_| {
                StoryContent::Table(
                    DataTable::new(basic_columns())
                        .with_data(Vec::new())
                        .with_empty_text("No users found"),
                )
            },
        ),
        Story::new(
            C,
            "SmallSize",
            "Compact data table with tighter spacing.",
            &["sm", "compact", "size"],
            |_| {
                StoryContent::Table(
                    DataTable::new(basic_columns())
                        .with_data(sample_users())
                        .with_size(Size::Sm),
                )
            },
        ),
        Story::new(C, "LargeSize", "Spacious data table with taller rows.", &["lg", "size"], |_| {
            StoryContent::Table(
                DataTable::new(basic_columns())
                    .with_data(sample_users())
                    .with_size(Size::Lg),
            )
        }),
        Story::new(
            C,
            "AdvancedExample",
            "Custom renderers, row actions and selection.",
            &["actions", "date", "select"],
            |log| {
                StoryContent::Table(
                    DataTable::new(advanced_columns())
                        .with_data(sample_users())
                        .selectable(true)
                        .with_size(Size::Md)
                        .with_observer(log_row_select(log)),
                )
            },
        ),
        Story::new(
            C,
            "CustomRendering",
            "Heavily customized cells with avatars and status indicators.",
            &["render", "avatar"],
            |_| {
                StoryContent::Table(
                    DataTable::new(custom_rendering_columns()).with_data(sample_users()),
                )
            },
        ),
    ]
}

fn input_field_stories() -> Vec<Story> {
    use StoryComponent::InputField as C;
    vec![
        Story::new(C, "Default", "A plain input.", &["text", "basic"], |_| {
            StoryContent::Input(InputField::new().placeholder("Enter text..."))
        }),
        Story::new(C, "WithLabel", "An input with a label above it.", &["label"], |_| {
            StoryContent::Input(
                InputField::new()
                    .label("Email Address")
                    .placeholder("Enter your email"),
            )
        }),
        Story::new(C, "WithHelperText", "Helper text below the input.", &["hint", "help"], |_| {
            StoryContent::Input(
                InputField::new()
                    .label("Username")
                    .placeholder("Enter username")
                    .helper_text("Must be at least 3 characters long"),
            )
        }),
        Story::new(C, "Filled", "The filled variant.", &["variant"], |_| {
            StoryContent::Input(
                InputField::new()
                    .label("Filled Input")
                    .placeholder("Type something...")
                    .variant(InputVariant::Filled),
            )
        }),
        Story::new(C, "Outlined", "The outlined variant.", &["variant", "border"], |_| {
            StoryContent::Input(
                InputField::new()
                    .label("Outlined Input")
                    .placeholder("Type something...")
                    .variant(InputVariant::Outlined),
            )
        }),
        Story::new(C, "Ghost", "The ghost variant.", &["variant", "borderless"], |_| {
            StoryContent::Input(
                InputField::new()
                    .label("Ghost Input")
                    .placeholder("Type something...")
                    .variant(InputVariant::Ghost),
            )
        }),
        Story::new(C, "Small", "Small size.", &["sm", "size"], |_| {
            StoryContent::Input(
                InputField::new()
                    .label("Small Input")
                    .placeholder("Small size")
                    .size(Size::Sm),
            )
        }),
        Story::new(C, "Medium", "Medium size.", &["md", "size"], |_| {
            StoryContent::Input(
                InputField::new()
                    .label("Medium Input")
                    .placeholder("Medium size")
                    .size(Size::Md),
            )
        }),
        Story::new(C, "Large", "Large size.", &["lg", "size"], |_| {
            StoryContent::Input(
                InputField::new()
                    .label("Large Input")
                    .placeholder("Large size")
                    .size(Size::Lg),
            )
        }),
        Story::new(
            C,
            "WithError",
            "An invalid input with its error message.",
            &["invalid", "validation"],
            |_| {
                StoryContent::Input(
                    InputField::new()
                        .label("Email")
                        .placeholder("Enter your email")
                        .error_message("Please enter a valid email address")
                        .invalid(true),
                )
            },
        ),
        Story::new(C, "Loading", "A read-only input with a spinner.", &["spinner", "busy"], |_| {
            StoryContent::Input(
                InputField::new()
                    .label("Loading Input")
                    .placeholder("Loading...")
                    .loading(true),
            )
        }),
        Story::new(C, "Disabled", "A disabled input.", &["readonly"], |_| {
            StoryContent::Input(
                InputField::new()
                    .label("Disabled Input")
                    .placeholder("This input is disabled")
                    .disabled(true),
            )
        }),
        Story::new(
            C,
            "WithClearButton",
            "Ctrl+X clears a non-empty value.",
            &["clear", "reset"],
            |_| {
                StoryContent::Input(
                    InputField::with_value("Sample text to clear")
                        .label("Search")
                        .placeholder("Search for something...")
                        .clear_button(true),
                )
            },
        ),
        Story::new(
            C,
            "Password",
            "A masked value with a show/hide toggle.",
            &["secret", "mask"],
            |_| {
                StoryContent::Input(
                    InputField::with_value("secretpassword")
                        .label("Password")
                        .placeholder("Enter your password")
                        .password(true),
                )
            },
        ),
        Story::new(
            C,
            "PasswordWithClear",
            "A password input that can also be cleared.",
            &["secret", "clear"],
            |_| {
                StoryContent::Input(
                    InputField::with_value("secretpassword")
                        .label("Password with Clear")
                        .placeholder("Enter your password")
                        .password(true)
                        .clear_button(true),
                )
            },
        ),
        Story::new(
            C,
            "FormExample",
            "Label, helper text and clear action together.",
            &["form"],
            |_| {
                StoryContent::Input(
                    InputField::new()
                        .label("Full Name")
                        .placeholder("Enter your full name")
                        .helper_text("Enter your first and last name")
                        .variant(InputVariant::Outlined)
                        .size(Size::Md)
                        .clear_button(true),
                )
            },
        ),
        Story::new(
            C,
            "ErrorState",
            "A filled-in value failing validation.",
            &["invalid", "validation"],
            |_| {
                StoryContent::Input(
                    InputField::with_value("invalid@email")
                        .label("Email Address")
                        .placeholder("user@example.com")
                        .error_message("This email address is already taken")
                        .invalid(true)
                        .variant(InputVariant::Outlined),
                )
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_case_helpers() {
        assert_eq!(kebab_case("WithSelection"), "with-selection");
        assert_eq!(kebab_case("Default"), "default");
        assert_eq!(title_case("AllVariants"), "All Variants");
    }

    #[test]
    fn test_catalog_contents() {
        let catalog = StoryCatalog::new();
        let count = |component| {
            catalog
                .stories()
                .iter()
                .filter(|story| story.component == component)
                .count()
        };
        assert_eq!(count(StoryComponent::Badge), 8);
        assert_eq!(count(StoryComponent::DataTable), 8);
        assert_eq!(count(StoryComponent::InputField), 17);
    }

    #[test]
    fn test_status_badges_rows() {
        let catalog = StoryCatalog::new();
        let view = catalog.get("badge/status-badges").unwrap().build();
        let StoryContent::Badges(rows) = view.content() else {
            panic!("status badges story should hold badges");
        };
        let labels: Vec<&str> = rows.iter().filter_map(|row| row.label.as_deref()).collect();
        assert_eq!(labels, ["User Status:", "Payment:", "Account:", "Subscription:"]);
        assert!(rows.iter().all(|row| row.badges.len() == 1));
    }

    #[test]
    fn test_ids_are_unique() {
        let catalog = StoryCatalog::new();
        let ids: HashSet<&str> = catalog.stories().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.stories().len());
    }

    #[test]
    fn test_get_by_id() {
        let catalog = StoryCatalog::new();
        let story = catalog.get("data-table/with-selection").unwrap();
        assert_eq!(story.title, "With Selection");
        assert!(catalog.get("DATA-TABLE/EMPTY").is_some());
        assert!(catalog.get("data-table/missing").is_none());
    }

    #[test]
    fn test_search_empty_returns_all() {
        let catalog = StoryCatalog::new();
        assert_eq!(catalog.search("").len(), catalog.stories().len());
        assert_eq!(catalog.search("  ")[0].id, "badge/default");
    }

    #[test]
    fn test_search_ranks_title_first() {
        let catalog = StoryCatalog::new();
        let results = catalog.search("selection");
        assert_eq!(results[0].id, "data-table/with-selection");
    }

    #[test]
    fn test_search_by_keyword() {
        let catalog = StoryCatalog::new();
        let results = catalog.search("avatar");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "data-table/custom-rendering");
    }

    #[test]
    fn test_search_by_component() {
        let catalog = StoryCatalog::new();
        let results = catalog.search("badge");
        assert!(results.len() >= 8);
        assert!(results[..8].iter().all(|s| s.component == StoryComponent::Badge));
    }

    #[test]
    fn test_search_no_match() {
        let catalog = StoryCatalog::new();
        assert!(catalog.search("xyznomatch").is_empty());
    }

    #[test]
    fn test_recent_boost() {
        let mut catalog = StoryCatalog::new();
        catalog.record_opened("input-field/ghost");
        catalog.record_opened("badge/warning");
        catalog.record_opened("input-field/ghost");
        assert_eq!(catalog.recent(), vec!["input-field/ghost", "badge/warning"]);

        let results = catalog.search("");
        assert_eq!(results[0].id, "input-field/ghost");
        assert_eq!(results[1].id, "badge/warning");
    }

    #[test]
    fn test_recent_is_bounded() {
        let mut catalog = StoryCatalog::new();
        for story in catalog.stories().to_vec() {
            catalog.record_opened(&story.id);
        }
        assert_eq!(catalog.recent().len(), StoryCatalog::MAX_RECENT);
    }

    #[test]
    fn test_every_story_builds() {
        let catalog = StoryCatalog::new();
        for story in catalog.stories() {
            let view = story.build();
            assert_eq!(view.id(), story.id);
        }
    }

    #[test]
    fn test_selection_story_logs_observer_calls() {
        use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

        let catalog = StoryCatalog::new();
        let mut view = catalog.get("data-table/with-selection").unwrap().build();
        view.handle_input(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE));
        assert_eq!(
            view.actions().entries(),
            vec!["onRowSelect: [John Doe]".to_string()]
        );
    }

    #[test]
    fn test_loading_story_starts_loading() {
        let catalog = StoryCatalog::new();
        let view = catalog.get("data-table/loading").unwrap().build();
        match view.content() {
            StoryContent::Table(table) => assert!(table.is_loading()),
            other => panic!("unexpected content {other:?}"),
        }
    }
}
