//! Portfolio subjects: every entity that owns a media list.

use serde::{Deserialize, Serialize};

use super::media::MediaItem;

/// Identifier of a subject, unique within its collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubjectId(pub i64);

impl std::fmt::Display for SubjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for SubjectId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Collection a subject belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum SubjectKind {
    Project,
    Achievement,
    Leadership,
    Volunteering,
    Experience,
    Contribution,
    Publication,
    Patent,
}

impl SubjectKind {
    /// Returns the collection name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Achievement => "achievement",
            Self::Leadership => "leadership",
            Self::Volunteering => "volunteering",
            Self::Experience => "experience",
            Self::Contribution => "contribution",
            Self::Publication => "publication",
            Self::Patent => "patent",
        }
    }
}

impl std::fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything that can be given a thumbnail.
pub trait Subject: Send + Sync {
    /// Identifier within the owning collection.
    fn id(&self) -> SubjectId;

    /// Media list, in author order.
    fn media(&self) -> &[MediaItem];

    /// Human-readable label used in reports and logs.
    fn label(&self) -> &str;
}

macro_rules! subject_record {
    (
        $(#[$meta:meta])*
        $name:ident, label = $label:ident { $($(#[$fmeta:meta])* $field:ident : $ty:ty),* $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            /// Identifier within the collection.
            pub id: SubjectId,
            $($(#[$fmeta])* pub $field: $ty,)*
            /// Attached media.
            #[serde(default)]
            pub media: Vec<MediaItem>,
        }

        impl Subject for $name {
            fn id(&self) -> SubjectId {
                self.id
            }

            fn media(&self) -> &[MediaItem] {
                &self.media
            }

            fn label(&self) -> &str {
                &self.$label
            }
        }
    };
}

subject_record! {
    /// A portfolio project.
    Project, label = title {
        /// Project title.
        title: String,
        /// Short pitch.
        #[serde(default)]
        tagline: String,
        /// Project category used for filtering.
        #[serde(default)]
        category: String,
        /// Shown in the featured section.
        #[serde(default)]
        featured: bool,
    }
}

subject_record! {
    /// An award or recognition.
    Achievement, label = title {
        /// Achievement title.
        title: String,
        /// Awarding organization.
        #[serde(default)]
        organization: String,
        /// Shown in the featured section.
        #[serde(default)]
        featured: bool,
    }
}

subject_record! {
    /// A leadership role.
    Leadership, label = role {
        /// Role held.
        role: String,
        /// Organization.
        #[serde(default)]
        organization: String,
    }
}

subject_record! {
    /// A volunteering activity.
    Volunteering, label = activity {
        /// Activity name.
        activity: String,
        /// Free-form activity type.
        #[serde(default, rename = "type")]
        activity_type: String,
    }
}

subject_record! {
    /// A position in the work history.
    ExperienceEntry, label = company {
        /// Employer.
        company: String,
        /// Job title.
        #[serde(default)]
        position: String,
        /// Whether this is the current position.
        #[serde(default)]
        current: bool,
    }
}

subject_record! {
    /// An open source project or contribution.
    Contribution, label = name {
        /// Repository or project name.
        name: String,
        /// Contributor role.
        #[serde(default)]
        role: String,
        /// Repository URL.
        #[serde(default)]
        repository: String,
        /// Shown in the featured section.
        #[serde(default)]
        featured: bool,
    }
}

subject_record! {
    /// A paper or article.
    Publication, label = title {
        /// Publication title.
        title: String,
        /// Journal or venue.
        #[serde(default)]
        journal: String,
        /// Publication year.
        #[serde(default)]
        year: Option<i32>,
    }
}

subject_record! {
    /// A patent or patent application.
    Patent, label = title {
        /// Patent title.
        title: String,
        /// Application number.
        #[serde(default)]
        application_number: String,
        /// Filing status.
        #[serde(default)]
        status: String,
    }
}

/// Borrowed view over a subject together with its collection.
#[derive(Clone, Copy)]
pub struct SubjectRef<'a> {
    /// Owning collection.
    pub kind: SubjectKind,
    /// The subject itself.
    pub subject: &'a dyn Subject,
}

impl std::fmt::Debug for SubjectRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubjectRef")
            .field("kind", &self.kind)
            .field("id", &self.subject.id())
            .field("label", &self.subject.label())
            .finish()
    }
}

/// Every subject collection of a portfolio, as loaded at startup.
#[derive(Debug, Clone, Default, PartialEq)]
#[allow(missing_docs)]
pub struct PortfolioCatalog {
    pub projects: Vec<Project>,
    pub achievements: Vec<Achievement>,
    pub leadership: Vec<Leadership>,
    pub volunteering: Vec<Volunteering>,
    pub experiences: Vec<ExperienceEntry>,
    pub contributions: Vec<Contribution>,
    pub publications: Vec<Publication>,
    pub patents: Vec<Patent>,
}

impl PortfolioCatalog {
    /// Iterates all subjects, collection by collection, in document order.
    pub fn subjects(&self) -> impl Iterator<Item = SubjectRef<'_>> {
        fn tag<S: Subject>(
            kind: SubjectKind,
            items: &[S],
        ) -> impl Iterator<Item = SubjectRef<'_>> {
            items.iter().map(move |subject| SubjectRef {
                kind,
                subject: subject as &dyn Subject,
            })
        }

        tag(SubjectKind::Project, &self.projects)
            .chain(tag(SubjectKind::Achievement, &self.achievements))
            .chain(tag(SubjectKind::Leadership, &self.leadership))
            .chain(tag(SubjectKind::Volunteering, &self.volunteering))
            .chain(tag(SubjectKind::Experience, &self.experiences))
            .chain(tag(SubjectKind::Contribution, &self.contributions))
            .chain(tag(SubjectKind::Publication, &self.publications))
            .chain(tag(SubjectKind::Patent, &self.patents))
    }

    /// Total number of subjects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
            + self.achievements.len()
            + self.leadership.len()
            + self.volunteering.len()
            + self.experiences.len()
            + self.contributions.len()
            + self.publications.len()
            + self.patents.len()
    }

    /// Returns true if no collection holds a subject.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
