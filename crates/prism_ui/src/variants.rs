//! Variant resolution: declared variant groups and compound rules to one class string.
//!
//! Every component declares a static [`VariantSpec`] (base classes, named
//! variant groups with a default each, and compound rules) and resolves it
//! against the caller's selections. Caller override classes are appended last
//! so they win visual conflicts through source order.

use leptos::logging;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One named axis of visual alternatives.
pub struct VariantGroup {
    /// Group name, e.g. `variant` or `size`.
    pub name: &'static str,
    /// Recognised values and the classes each contributes.
    pub options: &'static [(&'static str, &'static str)],
    /// Value used when the caller supplies none.
    pub default: &'static str,
}

impl VariantGroup {
    fn option(&self, value: &str) -> Option<&'static (&'static str, &'static str)> {
        self.options.iter().find(|(name, _)| *name == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Extra classes applied only when every listed selection co-occurs.
pub struct CompoundRule {
    /// `(group, value)` conditions, all of which must hold.
    pub when: &'static [(&'static str, &'static str)],
    /// Classes added when the rule matches.
    pub classes: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Static variant declaration for one component element.
pub struct VariantSpec {
    /// Classes always present.
    pub base: &'static str,
    /// Variant groups in resolution order.
    pub groups: &'static [VariantGroup],
    /// Compound rules in application order.
    pub compounds: &'static [CompoundRule],
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Variant resolution failures.
pub enum VariantError {
    /// The selection names a group the spec does not declare.
    #[error("unknown variant group `{group}`")]
    UnknownGroup {
        /// Offending group name.
        group: String,
    },
    /// The selection names a value the group does not declare.
    #[error("unknown value `{value}` for variant group `{group}`")]
    UnknownValue {
        /// Group the value was supplied for.
        group: String,
        /// Offending value.
        value: String,
    },
}

/// Typed variant value that maps onto one group of a [`VariantSpec`].
pub trait VariantToken: Copy {
    /// Group name this type selects in.
    const GROUP: &'static str;

    /// Stable value token for the selection.
    fn token(self) -> &'static str;

    /// `(group, value)` pair for [`VariantSpec::resolve`].
    fn pick(self) -> (&'static str, &'static str) {
        (Self::GROUP, self.token())
    }
}

/// Declares a typed variant enum with a stable token per variant and a default.
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident in $group:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
        default = $default:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl $crate::variants::VariantToken for $name {
            const GROUP: &'static str = $group;

            fn token(self) -> &'static str {
                match self {
                    $( Self::$variant => $token, )+
                }
            }
        }
    };
}

pub(crate) use token_enum;

/// Joins class fragments into one whitespace-normalized class string.
///
/// Empty fragments are dropped; order is preserved so later fragments win.
pub fn merge_classes<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for class in parts.into_iter().flat_map(str::split_whitespace) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(class);
    }
    out
}

/// Returns `classes` when `condition` holds, otherwise an empty fragment.
pub fn class_if(condition: bool, classes: &'static str) -> &'static str {
    if condition {
        classes
    } else {
        ""
    }
}

impl VariantSpec {
    /// Resolves the caller's selections into one class string.
    ///
    /// Groups missing from `selections` use their declared default. When the
    /// same group is selected twice the last selection wins.
    ///
    /// # Errors
    ///
    /// Returns [`VariantError::UnknownGroup`] or [`VariantError::UnknownValue`]
    /// for any selection the spec does not declare.
    pub fn resolve(
        &self,
        selections: &[(&str, &str)],
        overrides: Option<&str>,
    ) -> Result<String, VariantError> {
        for (group, value) in selections {
            let declared = self
                .group(group)
                .ok_or_else(|| VariantError::UnknownGroup {
                    group: (*group).to_string(),
                })?;
            if declared.option(value).is_none() {
                return Err(VariantError::UnknownValue {
                    group: (*group).to_string(),
                    value: (*value).to_string(),
                });
            }
        }
        Ok(self.compose(selections, overrides))
    }

    /// Resolves like [`VariantSpec::resolve`] but falls back to group defaults
    /// for unrecognised selections, logging a warning for each.
    pub fn resolve_or_default(
        &self,
        selections: &[(&str, &str)],
        overrides: Option<&str>,
    ) -> String {
        for (group, value) in selections {
            match self.group(group) {
                None => logging::warn!("ignoring unknown variant group `{group}`"),
                Some(declared) if declared.option(value).is_none() => logging::warn!(
                    "unknown value `{value}` for variant group `{group}`, using `{}`",
                    declared.default
                ),
                Some(_) => {}
            }
        }
        self.compose(selections, overrides)
    }

    /// Resolves typed selections. Typed tokens are always declared, so this never fails
    /// for a consistent spec.
    pub fn classes(
        &self,
        selections: &[(&'static str, &'static str)],
        overrides: Option<&str>,
    ) -> String {
        self.resolve_or_default(selections, overrides)
    }

    /// Checks that every default and compound condition refers to a declared option.
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found.
    pub fn validate(&self) -> Result<(), VariantError> {
        for group in self.groups {
            if group.option(group.default).is_none() {
                return Err(VariantError::UnknownValue {
                    group: group.name.to_string(),
                    value: group.default.to_string(),
                });
            }
        }
        for rule in self.compounds {
            for (group, value) in rule.when {
                let declared = self.group(group).ok_or_else(|| VariantError::UnknownGroup {
                    group: (*group).to_string(),
                })?;
                if declared.option(value).is_none() {
                    return Err(VariantError::UnknownValue {
                        group: (*group).to_string(),
                        value: (*value).to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    fn group(&self, name: &str) -> Option<&'static VariantGroup> {
        self.groups.iter().find(|group| group.name == name)
    }

    fn effective(&self, group: &VariantGroup, selections: &[(&str, &str)]) -> &'static str {
        selections
            .iter()
            .rev()
            .filter(|(name, _)| *name == group.name)
            .find_map(|(_, value)| group.option(value).map(|(value, _)| *value))
            .unwrap_or(group.default)
    }

    fn compose(&self, selections: &[(&str, &str)], overrides: Option<&str>) -> String {
        let mut parts = vec![self.base];
        for group in self.groups {
            let value = self.effective(group, selections);
            if let Some((_, classes)) = group.option(value) {
                parts.push(classes);
            }
        }
        for rule in self.compounds {
            let matches = rule.when.iter().all(|(group, value)| {
                self.group(group)
                    .is_some_and(|declared| self.effective(declared, selections) == *value)
            });
            if matches {
                parts.push(rule.classes);
            }
        }
        let mut resolved = merge_classes(parts);
        if let Some(overrides) = overrides {
            let overrides = merge_classes([overrides]);
            if !overrides.is_empty() {
                if !resolved.is_empty() {
                    resolved.push(' ');
                }
                resolved.push_str(&overrides);
            }
        }
        resolved
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const RULE: VariantSpec = VariantSpec {
        base: "shrink-0 bg-border",
        groups: &[
            VariantGroup {
                name: "orientation",
                options: &[("horizontal", "h-px w-full"), ("vertical", "h-full w-px")],
                default: "horizontal",
            },
            VariantGroup {
                name: "variant",
                options: &[("solid", ""), ("dashed", "border-dashed border-0")],
                default: "solid",
            },
            VariantGroup {
                name: "spacing",
                options: &[("none", ""), ("sm", ""), ("md", "")],
                default: "md",
            },
        ],
        compounds: &[
            CompoundRule {
                when: &[("orientation", "horizontal"), ("spacing", "sm")],
                classes: "my-2",
            },
            CompoundRule {
                when: &[("orientation", "horizontal"), ("spacing", "md")],
                classes: "my-4",
            },
            CompoundRule {
                when: &[("orientation", "vertical"), ("spacing", "md")],
                classes: "mx-4",
            },
        ],
    };

    #[test]
    fn defaults_fill_unselected_groups_and_trigger_compounds() {
        assert_eq!(
            RULE.resolve(&[], None).expect("resolve"),
            "shrink-0 bg-border h-px w-full my-4"
        );
    }

    #[test]
    fn selections_replace_defaults_per_group() {
        assert_eq!(
            RULE.resolve(&[("orientation", "vertical"), ("variant", "dashed")], None)
                .expect("resolve"),
            "shrink-0 bg-border h-full w-px border-dashed border-0 mx-4"
        );
    }

    #[test]
    fn compound_rules_need_every_condition() {
        let resolved = RULE
            .resolve(&[("orientation", "vertical"), ("spacing", "sm")], None)
            .expect("resolve");
        assert_eq!(resolved, "shrink-0 bg-border h-full w-px");
        assert!(!resolved.contains("my-2"));
    }

    #[test]
    fn overrides_are_appended_last() {
        assert_eq!(
            RULE.resolve(&[("spacing", "none")], Some("  my-10   opacity-50 "))
                .expect("resolve"),
            "shrink-0 bg-border h-px w-full my-10 opacity-50"
        );
    }

    #[test]
    fn later_selection_for_same_group_wins() {
        assert_eq!(
            RULE.resolve(&[("spacing", "none"), ("spacing", "sm")], None)
                .expect("resolve"),
            "shrink-0 bg-border h-px w-full my-2"
        );
    }

    #[test]
    fn unknown_group_and_value_fail_loudly() {
        assert_eq!(
            RULE.resolve(&[("tone", "loud")], None),
            Err(VariantError::UnknownGroup {
                group: "tone".to_string()
            })
        );
        assert_eq!(
            RULE.resolve(&[("spacing", "xl")], None),
            Err(VariantError::UnknownValue {
                group: "spacing".to_string(),
                value: "xl".to_string()
            })
        );
    }

    #[test]
    fn lenient_resolution_falls_back_to_defaults() {
        assert_eq!(
            RULE.resolve_or_default(&[("spacing", "xl"), ("tone", "loud")], None),
            "shrink-0 bg-border h-px w-full my-4"
        );
    }

    #[test]
    fn validate_flags_bad_defaults_and_compounds() {
        assert_eq!(RULE.validate(), Ok(()));

        const BAD_DEFAULT: VariantSpec = VariantSpec {
            base: "",
            groups: &[VariantGroup {
                name: "size",
                options: &[("sm", "h-1")],
                default: "md",
            }],
            compounds: &[],
        };
        assert!(matches!(
            BAD_DEFAULT.validate(),
            Err(VariantError::UnknownValue { .. })
        ));

        const BAD_COMPOUND: VariantSpec = VariantSpec {
            base: "",
            groups: &[],
            compounds: &[CompoundRule {
                when: &[("size", "sm")],
                classes: "x",
            }],
        };
        assert!(matches!(
            BAD_COMPOUND.validate(),
            Err(VariantError::UnknownGroup { .. })
        ));
    }

    #[test]
    fn merge_classes_drops_empty_fragments() {
        assert_eq!(
            merge_classes([
                "flex",
                "",
                "  gap-2  ",
                class_if(false, "hidden"),
                class_if(true, "p-4"),
            ]),
            "flex gap-2 p-4"
        );
    }
}
