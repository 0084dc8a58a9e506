//! JSON data documents on disk.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use crate::domain::entities::{
    Achievement, Contribution, ExperienceEntry, Leadership, Patent, PortfolioCatalog, Project,
    Publication, Volunteering,
};
use crate::domain::errors::CatalogError;
use crate::domain::ports::DocumentStorePort;

/// Projects document file name.
pub const PROJECTS_FILE: &str = "projects.json";
/// Achievements document file name.
pub const ACHIEVEMENTS_FILE: &str = "achievements.json";
/// Experience document file name.
pub const EXPERIENCE_FILE: &str = "experience.json";
/// Publications document file name.
pub const PUBLICATIONS_FILE: &str = "publications.json";
/// Open source document file name.
pub const OPENSOURCE_FILE: &str = "opensource.json";

#[derive(Debug, Default, Deserialize)]
struct ProjectsDocument {
    #[serde(default)]
    projects: Vec<Project>,
}

#[derive(Debug, Default, Deserialize)]
struct AchievementsDocument {
    #[serde(default)]
    achievements: Vec<Achievement>,
    #[serde(default)]
    leadership: Vec<Leadership>,
    #[serde(default)]
    volunteering: Vec<Volunteering>,
}

#[derive(Debug, Default, Deserialize)]
struct ExperienceDocument {
    #[serde(default)]
    experiences: Vec<ExperienceEntry>,
}

#[derive(Debug, Default, Deserialize)]
struct PublicationsDocument {
    #[serde(default)]
    publications: Vec<Publication>,
    #[serde(default)]
    patents: Vec<Patent>,
}

#[derive(Debug, Default, Deserialize)]
struct OpenSourceDocument {
    #[serde(default)]
    contributions: Vec<Contribution>,
}

/// Read-only access to the portfolio data directory.
#[derive(Debug, Clone)]
pub struct JsonDataStore {
    data_dir: PathBuf,
}

impl JsonDataStore {
    /// Creates a store over `data_dir`.
    #[must_use]
    pub const fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Loads every subject collection.
    ///
    /// Missing documents yield empty collections.
    ///
    /// # Errors
    /// Returns error if a present document cannot be read or parsed.
    pub fn load_catalog(&self) -> Result<PortfolioCatalog, CatalogError> {
        let projects: ProjectsDocument = self.load_optional(PROJECTS_FILE)?;
        let achievements: AchievementsDocument = self.load_optional(ACHIEVEMENTS_FILE)?;
        let experience: ExperienceDocument = self.load_optional(EXPERIENCE_FILE)?;
        let publications: PublicationsDocument = self.load_optional(PUBLICATIONS_FILE)?;
        let opensource: OpenSourceDocument = self.load_optional(OPENSOURCE_FILE)?;

        let catalog = PortfolioCatalog {
            projects: projects.projects,
            achievements: achievements.achievements,
            leadership: achievements.leadership,
            volunteering: achievements.volunteering,
            experiences: experience.experiences,
            contributions: opensource.contributions,
            publications: publications.publications,
            patents: publications.patents,
        };

        info!(
            dir = %self.data_dir.display(),
            subjects = catalog.len(),
            "Loaded portfolio catalog"
        );
        Ok(catalog)
    }

    fn load_optional<T: DeserializeOwned + Default>(&self, name: &str) -> Result<T, CatalogError> {
        let path = self.data_dir.join(name);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "Data document not found, skipping");
                return Ok(T::default());
            }
            Err(e) => return Err(CatalogError::read(path, e)),
        };
        serde_json::from_str(&content).map_err(|e| CatalogError::json(path, e))
    }
}

impl DocumentStorePort for JsonDataStore {
    fn read_document(&self, name: &str) -> Result<Value, CatalogError> {
        let path = self.data_dir.join(name);
        let content = fs::read_to_string(&path).map_err(|e| CatalogError::read(&path, e))?;
        serde_json::from_str(&content).map_err(|e| CatalogError::json(path, e))
    }

    fn write_document(&self, name: &str, document: &Value) -> Result<(), CatalogError> {
        let path = self.data_dir.join(name);
        let content =
            serde_json::to_string_pretty(document).map_err(|e| CatalogError::json(&path, e))?;

        let parent = path.parent().unwrap_or(&self.data_dir);
        let mut temp_file =
            tempfile::NamedTempFile::new_in(parent).map_err(|e| CatalogError::write(&path, e))?;
        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| CatalogError::write(&path, e))?;
        temp_file
            .persist(&path)
            .map_err(|e| CatalogError::write(&path, e.error))?;

        debug!(path = %path.display(), "Wrote data document");
        Ok(())
    }
}
