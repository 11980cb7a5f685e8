//! Named border definitions loaded from TOML
//!
//! A catalog file is a list of `[[border]]` tables. Each has a unique `name`,
//! a `kind` selecting the variant, and any of that variant's option fields;
//! omitted fields keep their defaults. Colors are hex strings.
//!
//! ```toml
//! [[border]]
//! name = "warning"
//! kind = "checkerboard"
//! colors = ["#000000", "#ffff00"]
//! blink_delay_ms = 250
//!
//! [[border]]
//! name = "note"
//! kind = "scroll"
//! color = "#804000"
//! line_width = 2
//! ```

use std::path::Path;

use frieze_core::{BorderError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::border::Border;
use crate::borders::{
    AlphaBorder, AlphaOptions, CastleBorder, CastleOptions, CheckerboardBorder,
    CheckerboardOptions, CircleCornersBorder, CircleCornersOptions, CurlyBraceBorder,
    CurlyBraceOptions, HairBorder, HairOptions, MultilineBorder, MultilineOptions, ScallopBorder,
    ScallopOptions, ScrollBorder, ScrollOptions, ShadowedPageBorder, ShadowedPageOptions,
};

/// A border variant together with its options
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum BorderSpec {
    Alpha(AlphaOptions),
    Checkerboard(CheckerboardOptions),
    Castle(CastleOptions),
    CircleCorners(CircleCornersOptions),
    CurlyBrace(CurlyBraceOptions),
    Multiline(MultilineOptions),
    Scallop(ScallopOptions),
    Scroll(ScrollOptions),
    ShadowedPage(ShadowedPageOptions),
    Hair(HairOptions),
}

impl BorderSpec {
    /// The `kind` tag used in catalog files
    pub fn kind(&self) -> &'static str {
        match self {
            BorderSpec::Alpha(_) => "alpha",
            BorderSpec::Checkerboard(_) => "checkerboard",
            BorderSpec::Castle(_) => "castle",
            BorderSpec::CircleCorners(_) => "circle-corners",
            BorderSpec::CurlyBrace(_) => "curly-brace",
            BorderSpec::Multiline(_) => "multiline",
            BorderSpec::Scallop(_) => "scallop",
            BorderSpec::Scroll(_) => "scroll",
            BorderSpec::ShadowedPage(_) => "shadowed-page",
            BorderSpec::Hair(_) => "hair",
        }
    }

    /// Construct the border, validating its options
    pub fn build(&self) -> Result<Box<dyn Border>> {
        Ok(match self {
            BorderSpec::Alpha(o) => Box::new(AlphaBorder::new(o.clone())?),
            BorderSpec::Checkerboard(o) => Box::new(CheckerboardBorder::new(o.clone())?),
            BorderSpec::Castle(o) => Box::new(CastleBorder::new(o.clone())?),
            BorderSpec::CircleCorners(o) => Box::new(CircleCornersBorder::new(o.clone())?),
            BorderSpec::CurlyBrace(o) => Box::new(CurlyBraceBorder::new(o.clone())?),
            BorderSpec::Multiline(o) => Box::new(MultilineBorder::new(o.clone())?),
            BorderSpec::Scallop(o) => Box::new(ScallopBorder::new(o.clone())?),
            BorderSpec::Scroll(o) => Box::new(ScrollBorder::new(o.clone())?),
            BorderSpec::ShadowedPage(o) => Box::new(ShadowedPageBorder::new(o.clone())?),
            BorderSpec::Hair(o) => Box::new(HairBorder::new(o.clone())?),
        })
    }
}

#[derive(Serialize, Deserialize)]
struct CatalogEntry {
    name: String,
    #[serde(flatten)]
    spec: BorderSpec,
}

#[derive(Default, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    border: Vec<CatalogEntry>,
}

/// An ordered set of named border definitions
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BorderCatalog {
    entries: IndexMap<String, BorderSpec>,
}

impl BorderCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from TOML text
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: CatalogFile =
            toml::from_str(source).map_err(|e| BorderError::Catalog(e.to_string()))?;

        let mut catalog = Self::new();
        for entry in file.border {
            catalog.insert(entry.name, entry.spec)?;
        }
        tracing::debug!("BorderCatalog: loaded {} border(s)", catalog.len());
        Ok(catalog)
    }

    /// Read and parse a catalog file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| BorderError::Catalog(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&source)
    }

    /// Add a definition; names must be unique
    pub fn insert(&mut self, name: impl Into<String>, spec: BorderSpec) -> Result<()> {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return Err(BorderError::Catalog(format!(
                "duplicate border name {:?}",
                name
            )));
        }
        self.entries.insert(name, spec);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&BorderSpec> {
        self.entries.get(name)
    }

    /// Names in file order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BorderSpec)> {
        self.entries.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Construct the border registered as `name`
    pub fn build(&self, name: &str) -> Result<Box<dyn Border>> {
        let spec = self
            .get(name)
            .ok_or_else(|| BorderError::Catalog(format!("unknown border {:?}", name)))?;
        spec.build()
    }

    /// Render the catalog back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        let file = CatalogFile {
            border: self
                .entries
                .iter()
                .map(|(name, spec)| CatalogEntry {
                    name: name.clone(),
                    spec: spec.clone(),
                })
                .collect(),
        };
        toml::to_string(&file).map_err(|e| BorderError::Catalog(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frieze_core::{Color, CompositeRule, Insets};

    const SAMPLE: &str = r##"
[[border]]
name = "fade"
kind = "alpha"
color = "#ff0000"
transparency = 0.25
composite = "src-atop"
transition_delay_ms = 100

[[border]]
name = "page"
kind = "shadowed-page"
shadow_x_offset = -8

[[border]]
name = "rings"
kind = "multiline"
num_lines = 2
"##;

    #[test]
    fn test_parse_preserves_order_and_defaults() {
        let catalog = BorderCatalog::from_toml_str(SAMPLE).unwrap();
        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["fade", "page", "rings"]);

        let Some(BorderSpec::Alpha(alpha)) = catalog.get("fade") else {
            panic!("expected alpha options");
        };
        assert_eq!(alpha.color, Color::RED);
        assert_eq!(alpha.transparency, 0.25);
        assert_eq!(alpha.composite, CompositeRule::SrcAtop);
        assert_eq!(alpha.top, 8);

        let Some(BorderSpec::ShadowedPage(page)) = catalog.get("page") else {
            panic!("expected shadowed page options");
        };
        assert_eq!(page.shadow_x_offset, -8);
        assert_eq!(page.shadow_y_offset, 8);
    }

    #[test]
    fn test_build_by_name() {
        let catalog = BorderCatalog::from_toml_str(SAMPLE).unwrap();
        let border = catalog.build("page").unwrap();
        assert_eq!(border.name(), "shadowed-page");
        assert_eq!(border.insets(), Insets::new(0, 8, 8, 0));

        let rings = catalog.build("rings").unwrap();
        assert_eq!(rings.insets(), Insets::uniform(3));
    }

    #[test]
    fn test_unknown_name() {
        let catalog = BorderCatalog::from_toml_str(SAMPLE).unwrap();
        assert!(matches!(
            catalog.build("missing"),
            Err(BorderError::Catalog(_))
        ));
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let source = r#"
[[border]]
name = "a"
kind = "castle"

[[border]]
name = "a"
kind = "scallop"
"#;
        let err = BorderCatalog::from_toml_str(source).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_unknown_kind_and_bad_color() {
        assert!(matches!(
            BorderCatalog::from_toml_str("[[border]]\nname = \"x\"\nkind = \"zigzag\"\n"),
            Err(BorderError::Catalog(_))
        ));
        assert!(matches!(
            BorderCatalog::from_toml_str(
                "[[border]]\nname = \"x\"\nkind = \"castle\"\nfill_color = \"grey\"\n"
            ),
            Err(BorderError::Catalog(_))
        ));
    }

    #[test]
    fn test_build_surfaces_configuration_errors() {
        let catalog =
            BorderCatalog::from_toml_str("[[border]]\nname = \"s\"\nkind = \"scroll\"\n").unwrap();
        assert_eq!(
            catalog.build("s").err(),
            Some(BorderError::MissingConfiguration {
                border: "scroll",
                field: "color"
            })
        );
    }

    #[test]
    fn test_toml_output_parses_back() {
        let mut catalog = BorderCatalog::new();
        catalog
            .insert(
                "warn",
                BorderSpec::Checkerboard(
                    CheckerboardOptions::default().with_colors(vec![Color::BLACK, Color::YELLOW]),
                ),
            )
            .unwrap();
        catalog
            .insert("plain", BorderSpec::Castle(CastleOptions::default()))
            .unwrap();

        let text = catalog.to_toml_string().unwrap();
        assert_eq!(BorderCatalog::from_toml_str(&text).unwrap(), catalog);
    }
}
