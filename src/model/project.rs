use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Sales pipeline status of a project.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Available,
    Confirmed,
    MustWin,
    NiceToHave,
    Conditional,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 5] = [
        ProjectStatus::Available,
        ProjectStatus::Confirmed,
        ProjectStatus::MustWin,
        ProjectStatus::NiceToHave,
        ProjectStatus::Conditional,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Confirmed => "confirmed",
            Self::MustWin => "must_win",
            Self::NiceToHave => "nice_to_have",
            Self::Conditional => "conditional",
        }
    }

    /// Short marker shown next to project names on the dashboard
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Available => "○",
            Self::Confirmed => "◎",
            Self::MustWin => "★",
            Self::NiceToHave => "☆",
            Self::Conditional => "△",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s || status.symbol() == s)
            .ok_or_else(|| format!("Unknown project status: {}", s))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProjectDto {
    pub id: i32,
    pub name: String,
    pub name_en: String,
    pub client: String,
    pub status: ProjectStatus,
    pub entity: String,
    pub notes: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateProjectDto {
    pub name: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default = "default_entity")]
    pub entity: String,
    #[serde(default)]
    pub notes: String,
}

impl CreateProjectDto {
    pub const DEFAULT_ENTITY: &'static str = "AGJ";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            name_en: String::new(),
            client: String::new(),
            status: ProjectStatus::default(),
            entity: default_entity(),
            notes: String::new(),
        }
    }
}

fn default_entity() -> String {
    CreateProjectDto::DEFAULT_ENTITY.to_string()
}

/// Partial update, absent fields are left unchanged
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateProjectDto {
    pub name: Option<String>,
    pub name_en: Option<String>,
    pub client: Option<String>,
    pub status: Option<ProjectStatus>,
    pub entity: Option<String>,
    pub notes: Option<String>,
}
