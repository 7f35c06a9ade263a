use super::ExportFormat;
use crate::builders::ToolKind;
use serde::{Deserialize, Serialize};

/// How a file stem is turned into a filename slug.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SlugStyle {
    /// Runs of whitespace and path separators become `-` and the result is
    /// lowercased. Every other character is kept.
    #[default]
    Verbatim,
    /// ASCII-only slug from the `slug` crate.
    Sanitized,
}

const SANITIZED_FALLBACK: &str = "untitled";

impl SlugStyle {
    pub fn apply(&self, stem: &str) -> String {
        match self {
            SlugStyle::Verbatim => verbatim_slug(stem),
            SlugStyle::Sanitized => {
                let slug = slug::slugify(stem);
                if slug.is_empty() {
                    SANITIZED_FALLBACK.to_string()
                } else {
                    slug
                }
            }
        }
    }
}

fn verbatim_slug(stem: &str) -> String {
    let mut out = String::with_capacity(stem.len());
    let mut in_whitespace = false;
    for c in stem.chars() {
        if c.is_whitespace() || c == '/' || c == '\\' {
            if !in_whitespace {
                out.push('-');
            }
            in_whitespace = true;
        } else {
            out.extend(c.to_lowercase());
            in_whitespace = false;
        }
    }
    out
}

/// `{slug}-{suffix}.{ext}`, or `{slug}.{ext}` for tools without a suffix.
pub fn export_filename(stem: &str, kind: ToolKind, format: ExportFormat, style: SlugStyle) -> String {
    let slug = style.apply(stem);
    match kind.filename_suffix() {
        Some(suffix) => format!("{slug}-{suffix}.{}", format.extension()),
        None => format!("{slug}.{}", format.extension()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbatim_collapses_whitespace_and_lowercases() {
        assert_eq!(SlugStyle::Verbatim.apply("Auth  Feature\tV2"), "auth-feature-v2");
        assert_eq!(SlugStyle::Verbatim.apply(" Padded "), "-padded-");
        assert_eq!(SlugStyle::Verbatim.apply("Q3: Café Plan"), "q3:-café-plan");
    }

    #[test]
    fn verbatim_replaces_path_separators() {
        assert_eq!(SlugStyle::Verbatim.apply("Q3/Q4 Launch"), "q3-q4-launch");
        assert_eq!(SlugStyle::Verbatim.apply("A / B\\C"), "a-b-c");
    }

    #[test]
    fn sanitized_drops_unsafe_characters() {
        assert_eq!(SlugStyle::Sanitized.apply("Q3: Café/Plan"), "q3-cafe-plan");
        assert_eq!(SlugStyle::Sanitized.apply("!!!"), "untitled");
    }

    #[test]
    fn filenames_follow_tool_suffixes() {
        let style = SlugStyle::Verbatim;
        assert_eq!(
            export_filename("Auth Feature", ToolKind::Prd, ExportFormat::Markdown, style),
            "auth-feature-prd.md"
        );
        assert_eq!(
            export_filename("Alex Chen", ToolKind::Persona, ExportFormat::Pdf, style),
            "alex-chen-persona.pdf"
        );
        assert_eq!(
            export_filename("Product Roadmap", ToolKind::Roadmap, ExportFormat::Markdown, style),
            "product-roadmap.md"
        );
        assert_eq!(
            export_filename("NPS Survey", ToolKind::Survey, ExportFormat::Markdown, style),
            "nps-survey.md"
        );
    }
}
