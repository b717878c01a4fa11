//! Static design token catalogue shared by the Prism component kit.
//!
//! Tokens are authored in `tokens.toml`, validated and converted to JSON by the
//! build script, and parsed once on first access. The catalogue is immutable
//! for the lifetime of the program; components reach it indirectly through the
//! utility class system, while the showcase and host pages read it directly to
//! render swatches and to inject CSS custom properties.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod css;

pub use css::{css_custom_properties, keyframes_css, stylesheet};

include!(concat!(env!("OUT_DIR"), "/token_catalogue_generated.rs"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One named literal design value.
pub struct Token {
    /// Semantic token name within its group (`500`, `lg`, `ease-out`).
    pub name: String,
    /// Literal CSS value.
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Named color ramp or semantic color triple.
pub struct TokenScale {
    /// Ramp name (`primary`, `success`).
    pub name: String,
    /// Steps in authoring order.
    pub tokens: Vec<Token>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Font size step paired with its line height.
pub struct FontSize {
    /// Step name (`sm`, `2xl`).
    pub name: String,
    /// Font size value.
    pub size: String,
    /// Matching line-height value.
    pub line_height: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Typography scale tokens.
pub struct Typography {
    /// Font stacks.
    pub font_family: Vec<Token>,
    /// Font sizes with line heights.
    pub font_size: Vec<FontSize>,
    /// Numeric font weights.
    pub font_weight: Vec<Token>,
    /// Letter spacing steps.
    pub letter_spacing: Vec<Token>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One selector block inside a keyframes rule.
pub struct KeyframeStep {
    /// Keyframe selector (`from`, `50%`, `0%, 100%`).
    pub at: String,
    /// CSS declarations in authoring order.
    pub declarations: Vec<Token>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Named keyframes animation.
pub struct Keyframes {
    /// Animation name as referenced by `animation-name`.
    pub name: String,
    /// Selector blocks.
    pub steps: Vec<KeyframeStep>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Motion tokens.
pub struct Animation {
    /// Transition/animation durations.
    pub duration: Vec<Token>,
    /// Timing functions.
    pub easing: Vec<Token>,
    /// Keyframe definitions.
    pub keyframes: Vec<Keyframes>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Frosted-glass surface preset.
pub struct GlassPreset {
    /// Preset name (`light`, `dark`, `frosted`).
    pub name: String,
    /// Background fill.
    pub background: String,
    /// Backdrop blur radius.
    pub blur: String,
    /// Border color.
    pub border: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// The complete design token catalogue.
pub struct TokenCatalogue {
    /// Authoring schema version.
    pub schema_version: u32,
    /// Color ramps and semantic triples.
    pub colors: Vec<TokenScale>,
    /// Typography scale.
    pub typography: Typography,
    /// Corner radius steps.
    pub border_radius: Vec<Token>,
    /// Spacing scale.
    pub spacing: Vec<Token>,
    /// Box shadow levels.
    pub shadows: Vec<Token>,
    /// Opacity scale.
    pub opacity: Vec<Token>,
    /// Stacking order scale.
    pub z_index: Vec<Token>,
    /// Motion tokens.
    pub animation: Animation,
    /// Blur radii.
    pub blur: Vec<Token>,
    /// Glass presets.
    pub glass: Vec<GlassPreset>,
    /// Gradient backgrounds.
    pub gradients: Vec<Token>,
    /// Responsive breakpoints.
    pub breakpoints: Vec<Token>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Token lookup failures.
pub enum TokenError {
    /// No token or group exists at the given dotted path.
    #[error("unknown design token `{0}`")]
    UnknownPath(String),
    /// The path names a group rather than a single value.
    #[error("design token path `{0}` names a group, not a value")]
    NotALeaf(String),
}

/// Returns the parsed token catalogue.
pub fn catalogue() -> &'static TokenCatalogue {
    static CATALOGUE: OnceLock<TokenCatalogue> = OnceLock::new();
    CATALOGUE.get_or_init(|| {
        serde_json::from_str(TOKEN_CATALOGUE_JSON)
            .expect("generated token catalogue should parse")
    })
}

/// Returns the generated token catalogue JSON payload.
pub fn catalogue_json() -> &'static str {
    TOKEN_CATALOGUE_JSON
}

/// Resolves a dotted token path such as `colors.primary.500` or `spacing.0.5`.
///
/// Group names are matched on the leading segments; everything after the
/// group is the token name, so names containing dots (`spacing.2.5`) resolve.
///
/// # Errors
///
/// Returns [`TokenError::NotALeaf`] for paths that stop at a group and
/// [`TokenError::UnknownPath`] for anything else that does not resolve.
pub fn lookup(path: &str) -> Result<&'static str, TokenError> {
    catalogue().lookup(path)
}

fn find<'a>(tokens: &'a [Token], name: &str) -> Option<&'a str> {
    tokens
        .iter()
        .find(|token| token.name == name)
        .map(|token| token.value.as_str())
}

fn find_in_group<'a>(tokens: &'a [Token], name: Option<&str>) -> Option<Option<&'a str>> {
    name.map(|name| find(tokens, name))
}

impl TokenCatalogue {
    /// Resolves a dotted token path against this catalogue. See [`lookup`].
    ///
    /// # Errors
    ///
    /// See [`lookup`].
    pub fn lookup(&self, path: &str) -> Result<&str, TokenError> {
        let unknown = || TokenError::UnknownPath(path.to_string());
        let group = || TokenError::NotALeaf(path.to_string());

        let (head, rest) = match path.split_once('.') {
            Some((head, rest)) => (head, Some(rest)),
            None => (path, None),
        };

        let resolved = match head {
            "colors" => {
                let Some(rest) = rest else {
                    return Err(group());
                };
                let (ramp, step) = match rest.split_once('.') {
                    Some((ramp, step)) => (ramp, Some(step)),
                    None => (rest, None),
                };
                let scale = self
                    .colors
                    .iter()
                    .find(|scale| scale.name == ramp)
                    .ok_or_else(unknown)?;
                let Some(step) = step else {
                    return Err(group());
                };
                find(&scale.tokens, step)
            }
            "typography" => {
                let Some(rest) = rest else {
                    return Err(group());
                };
                let (scale, name) = match rest.split_once('.') {
                    Some((scale, name)) => (scale, Some(name)),
                    None => (rest, None),
                };
                let tokens = match scale {
                    "font_family" => Some(&self.typography.font_family),
                    "font_weight" => Some(&self.typography.font_weight),
                    "letter_spacing" => Some(&self.typography.letter_spacing),
                    "font_size" => None,
                    _ => return Err(unknown()),
                };
                let Some(name) = name else {
                    return Err(group());
                };
                match tokens {
                    Some(tokens) => find(tokens, name),
                    None => {
                        let (name, line_height) = match name.strip_suffix(".line_height") {
                            Some(name) => (name, true),
                            None => (name, false),
                        };
                        self.typography
                            .font_size
                            .iter()
                            .find(|size| size.name == name)
                            .map(|size| {
                                if line_height {
                                    size.line_height.as_str()
                                } else {
                                    size.size.as_str()
                                }
                            })
                    }
                }
            }
            "animation" => {
                let Some(rest) = rest else {
                    return Err(group());
                };
                let (scale, name) = match rest.split_once('.') {
                    Some((scale, name)) => (scale, Some(name)),
                    None => (rest, None),
                };
                match (scale, name) {
                    ("duration" | "easing" | "keyframes", None) => return Err(group()),
                    ("duration", Some(name)) => find(&self.animation.duration, name),
                    ("easing", Some(name)) => find(&self.animation.easing, name),
                    ("keyframes", Some(name)) => {
                        if self.animation.keyframes.iter().any(|frames| frames.name == name) {
                            return Err(group());
                        }
                        None
                    }
                    _ => None,
                }
            }
            "glass" => {
                let Some(rest) = rest else {
                    return Err(group());
                };
                let (name, field) = match rest.split_once('.') {
                    Some((name, field)) => (name, Some(field)),
                    None => (rest, None),
                };
                let preset = self
                    .glass
                    .iter()
                    .find(|preset| preset.name == name)
                    .ok_or_else(unknown)?;
                match field {
                    None => return Err(group()),
                    Some("background") => Some(preset.background.as_str()),
                    Some("blur") => Some(preset.blur.as_str()),
                    Some("border") => Some(preset.border.as_str()),
                    Some(_) => None,
                }
            }
            "border_radius" => find_in_group(&self.border_radius, rest).ok_or_else(group)?,
            "spacing" => find_in_group(&self.spacing, rest).ok_or_else(group)?,
            "shadows" => find_in_group(&self.shadows, rest).ok_or_else(group)?,
            "opacity" => find_in_group(&self.opacity, rest).ok_or_else(group)?,
            "z_index" => find_in_group(&self.z_index, rest).ok_or_else(group)?,
            "blur" => find_in_group(&self.blur, rest).ok_or_else(group)?,
            "gradients" => find_in_group(&self.gradients, rest).ok_or_else(group)?,
            "breakpoints" => find_in_group(&self.breakpoints, rest).ok_or_else(group)?,
            _ => None,
        };

        resolved.ok_or_else(unknown)
    }

    /// Returns the color ramp with the given name.
    pub fn color_scale(&self, name: &str) -> Option<&TokenScale> {
        self.colors.iter().find(|scale| scale.name == name)
    }

    /// Returns the keyframes definition with the given name.
    pub fn keyframes(&self, name: &str) -> Option<&Keyframes> {
        self.animation
            .keyframes
            .iter()
            .find(|frames| frames.name == name)
    }

    /// Returns the breakpoint width in pixels, if the breakpoint exists and is pixel based.
    pub fn breakpoint_px(&self, name: &str) -> Option<u32> {
        find(&self.breakpoints, name)?
            .strip_suffix("px")
            .and_then(|raw| raw.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn color_ramps_keep_authoring_order() {
        let primary = catalogue().color_scale("primary").expect("primary ramp");
        let steps: Vec<&str> = primary.tokens.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            steps,
            vec!["50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950"]
        );
        assert_eq!(lookup("colors.primary.500"), Ok("hsl(226, 100%, 54%)"));
        assert_eq!(lookup("colors.error.main"), Ok("hsl(0, 84%, 60%)"));
    }

    #[test]
    fn flat_groups_resolve_names_containing_dots() {
        assert_eq!(lookup("spacing.0.5"), Ok("0.125rem"));
        assert_eq!(lookup("spacing.2.5"), Ok("0.625rem"));
        assert_eq!(lookup("spacing.px"), Ok("1px"));
        assert_eq!(lookup("border_radius.full"), Ok("9999px"));
        assert_eq!(lookup("z_index.modal"), Ok("400"));
        assert_eq!(lookup("breakpoints.2xl"), Ok("1536px"));
    }

    #[test]
    fn typography_resolves_sizes_and_line_heights() {
        assert_eq!(lookup("typography.font_size.sm"), Ok("0.875rem"));
        assert_eq!(lookup("typography.font_size.sm.line_height"), Ok("1.25rem"));
        assert_eq!(lookup("typography.font_weight.semibold"), Ok("600"));
        assert_eq!(lookup("typography.letter_spacing.tight"), Ok("-0.025em"));
    }

    #[test]
    fn motion_and_glass_tokens_resolve() {
        assert_eq!(lookup("animation.duration.fast"), Ok("150ms"));
        assert_eq!(
            lookup("animation.easing.spring"),
            Ok("cubic-bezier(0.34, 1.56, 0.64, 1)")
        );
        assert_eq!(lookup("glass.frosted.blur"), Ok("24px"));
        assert_eq!(lookup("shadows.glow-lg"), Ok("0 0 40px rgb(99 102 241 / 0.3)"));
    }

    #[test]
    fn group_paths_are_not_leaves() {
        for path in [
            "colors",
            "colors.primary",
            "spacing",
            "typography.font_size",
            "animation.keyframes.fade-in",
            "glass.dark",
        ] {
            assert_eq!(lookup(path), Err(TokenError::NotALeaf(path.to_string())), "{path}");
        }
    }

    #[test]
    fn unknown_paths_are_reported() {
        for path in [
            "colors.teal.500",
            "colors.primary.55",
            "spacing.13",
            "motion.fast",
            "glass.neon.blur",
        ] {
            assert_eq!(
                lookup(path),
                Err(TokenError::UnknownPath(path.to_string())),
                "{path}"
            );
        }
    }

    #[test]
    fn breakpoints_parse_as_pixels() {
        assert_eq!(catalogue().breakpoint_px("md"), Some(768));
        assert_eq!(catalogue().breakpoint_px("missing"), None);
    }

    #[test]
    fn keyframes_keep_step_order() {
        let shake = catalogue().keyframes("shake").expect("shake keyframes");
        assert_eq!(shake.steps.len(), 3);
        assert_eq!(shake.steps[0].at, "0%, 100%");
        let bounce = catalogue().keyframes("bounce").expect("bounce keyframes");
        assert_eq!(bounce.steps[0].declarations[1].name, "animation-timing-function");
    }
}
