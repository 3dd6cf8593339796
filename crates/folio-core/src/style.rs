//! Archive card colour schemes, keyed by project category.

use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    Film,
    Photography,
    Design,
    Web,
    Experimental,
    Other,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown project category '{0}'")]
pub struct CategoryError(pub String);

impl FromStr for ProjectCategory {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "film" | "video" | "motion" => Ok(ProjectCategory::Film),
            "photography" | "photo" => Ok(ProjectCategory::Photography),
            "design" | "branding" | "print" => Ok(ProjectCategory::Design),
            "web" | "interactive" => Ok(ProjectCategory::Web),
            "experimental" | "lab" => Ok(ProjectCategory::Experimental),
            "other" | "" => Ok(ProjectCategory::Other),
            other => Err(CategoryError(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryStyle {
    pub accent: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub label: &'static str,
}

pub fn category_style(category: ProjectCategory) -> CategoryStyle {
    match category {
        ProjectCategory::Film => CategoryStyle {
            accent: "#e4572e",
            surface: "#1d1412",
            text: "#f6e8e3",
            label: "Film",
        },
        ProjectCategory::Photography => CategoryStyle {
            accent: "#f2c14e",
            surface: "#1b1810",
            text: "#f8f1de",
            label: "Photography",
        },
        ProjectCategory::Design => CategoryStyle {
            accent: "#4f9d69",
            surface: "#111a14",
            text: "#e4f2e8",
            label: "Design",
        },
        ProjectCategory::Web => CategoryStyle {
            accent: "#3a86ff",
            surface: "#0f1524",
            text: "#e1ebff",
            label: "Web",
        },
        ProjectCategory::Experimental => CategoryStyle {
            accent: "#b15eff",
            surface: "#170f22",
            text: "#efe3ff",
            label: "Experimental",
        },
        ProjectCategory::Other => CategoryStyle {
            accent: "#9aa5b1",
            surface: "#15181c",
            text: "#e8ecf0",
            label: "Project",
        },
    }
}

impl CategoryStyle {
    /// CSS custom properties, in the order they are applied.
    pub fn css_vars(&self) -> [(&'static str, &'static str); 3] {
        [
            ("--card-accent", self.accent),
            ("--card-surface", self.surface),
            ("--card-text", self.text),
        ]
    }
}
