use super::*;

#[component]
/// Bordered content container with an optional heading.
pub fn Card(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] footer: Option<ViewFn>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let has_header = title.is_some() || description.is_some();
    view! {
        <div
            class=merge_classes(["rounded-xl border border-border bg-card text-card-foreground shadow-sm", layout_class.unwrap_or_default()])
            data-ui-primitive="true"
            data-ui-kind="card"
        >
            {has_header.then(|| view! {
                <div class="flex flex-col space-y-1.5 p-6" data-ui-slot="header">
                    {title.map(|title| view! {
                        <h3 class="text-lg font-semibold leading-none tracking-tight">{title}</h3>
                    })}
                    {description.map(|description| view! {
                        <p class="text-sm text-muted-foreground">{description}</p>
                    })}
                </div>
            })}
            <div class=if has_header { "p-6 pt-0" } else { "p-6" } data-ui-slot="content">
                {children()}
            </div>
            {footer.map(|footer| view! {
                <div class="flex items-center p-6 pt-0" data-ui-slot="footer">{footer.run()}</div>
            })}
        </div>
    }
}

token_enum! {
    /// Badge color treatments.
    pub enum BadgeVariant in "variant" {
        /// Solid primary.
        Default => "default",
        /// Solid secondary.
        Secondary => "secondary",
        /// Border only.
        Outline => "outline",
        /// Green tint.
        Success => "success",
        /// Yellow tint.
        Warning => "warning",
        /// Red fill.
        Destructive => "destructive",
    }
    default = Default;
}

pub(crate) const BADGE: VariantSpec = VariantSpec {
    base: "inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs font-semibold transition-colors",
    groups: &[VariantGroup {
        name: "variant",
        options: &[
            ("default", "border-transparent bg-primary text-primary-foreground"),
            ("secondary", "border-transparent bg-secondary text-secondary-foreground"),
            ("outline", "text-foreground"),
            (
                "success",
                "border-transparent bg-green-100 text-green-800 dark:bg-green-900/40 dark:text-green-200",
            ),
            (
                "warning",
                "border-transparent bg-yellow-100 text-yellow-800 dark:bg-yellow-900/40 dark:text-yellow-200",
            ),
            ("destructive", "border-transparent bg-destructive text-destructive-foreground"),
        ],
        default: "default",
    }],
    compounds: &[],
};

#[component]
/// Small status pill.
pub fn Badge(
    #[prop(default = BadgeVariant::Default)] variant: BadgeVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=BADGE.classes(&[variant.pick()], layout_class)
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-variant=variant.token()
        >
            {children()}
        </span>
    }
}

token_enum! {
    /// Divider direction.
    pub enum Orientation in "orientation" {
        /// Full-width rule.
        Horizontal => "horizontal",
        /// Full-height rule.
        Vertical => "vertical",
    }
    default = Horizontal;
}

token_enum! {
    /// Divider line styles.
    pub enum DividerVariant in "variant" {
        /// Solid line.
        Solid => "solid",
        /// Dashed line.
        Dashed => "dashed",
        /// Dotted line.
        Dotted => "dotted",
        /// Line fading out at both ends.
        Gradient => "gradient",
    }
    default = Solid;
}

token_enum! {
    /// Margin around a divider, applied along its cross axis.
    pub enum DividerSpacing in "spacing" {
        /// No margin.
        None => "none",
        /// 0.5rem.
        Sm => "sm",
        /// 1rem.
        Md => "md",
        /// 2rem.
        Lg => "lg",
    }
    default = Md;
}

token_enum! {
    /// Caption alignment on a labelled divider.
    pub enum DividerLabelPosition in "label_position" {
        /// Flush left.
        Left => "left",
        /// Centered.
        Center => "center",
        /// Flush right.
        Right => "right",
    }
    default = Center;
}

pub(crate) const DIVIDER: VariantSpec = VariantSpec {
    base: "shrink-0 bg-border",
    groups: &[
        VariantGroup {
            name: "orientation",
            options: &[("horizontal", "h-px w-full"), ("vertical", "h-full w-px")],
            default: "horizontal",
        },
        VariantGroup {
            name: "variant",
            options: &[
                ("solid", ""),
                ("dashed", "border-0 border-dashed"),
                ("dotted", "border-0 border-dotted"),
                ("gradient", "bg-gradient-to-r from-transparent via-border to-transparent"),
            ],
            default: "solid",
        },
        VariantGroup {
            name: "spacing",
            options: &[("none", ""), ("sm", ""), ("md", ""), ("lg", "")],
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
            when: &[("orientation", "horizontal"), ("spacing", "lg")],
            classes: "my-8",
        },
        CompoundRule {
            when: &[("orientation", "vertical"), ("spacing", "sm")],
            classes: "mx-2",
        },
        CompoundRule {
            when: &[("orientation", "vertical"), ("spacing", "md")],
            classes: "mx-4",
        },
        CompoundRule {
            when: &[("orientation", "vertical"), ("spacing", "lg")],
            classes: "mx-8",
        },
    ],
};

pub(crate) const LABELLED_DIVIDER: VariantSpec = VariantSpec {
    base: "relative flex items-center",
    groups: &[VariantGroup {
        name: "spacing",
        options: &[("none", ""), ("sm", "my-2"), ("md", "my-4"), ("lg", "my-8")],
        default: "md",
    }],
    compounds: &[],
};

impl DividerLabelPosition {
    fn justify(self) -> &'static str {
        match self {
            Self::Left => "relative flex w-full justify-start",
            Self::Center => "relative flex w-full justify-center",
            Self::Right => "relative flex w-full justify-end",
        }
    }
}

#[component]
/// Horizontal or vertical rule; horizontal rules can carry a caption.
pub fn Divider(
    #[prop(default = Orientation::Horizontal)] orientation: Orientation,
    #[prop(default = DividerVariant::Solid)] variant: DividerVariant,
    #[prop(default = DividerSpacing::Md)] spacing: DividerSpacing,
    #[prop(optional, into)] label: Option<String>,
    #[prop(default = DividerLabelPosition::Center)] label_position: DividerLabelPosition,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    match label {
        Some(label) if orientation == Orientation::Horizontal => {
            let line = DIVIDER.classes(
                &[
                    Orientation::Horizontal.pick(),
                    variant.pick(),
                    DividerSpacing::None.pick(),
                ],
                Some("w-full"),
            );
            view! {
                <div
                    class=LABELLED_DIVIDER.classes(&[spacing.pick()], layout_class)
                    role="separator"
                    data-ui-primitive="true"
                    data-ui-kind="divider"
                    data-ui-orientation=orientation.token()
                >
                    <div class="absolute inset-0 flex items-center">
                        <div class=line></div>
                    </div>
                    <div class=label_position.justify()>
                        <span class="bg-background px-3 text-sm text-muted-foreground">{label}</span>
                    </div>
                </div>
            }
            .into_view()
        }
        _ => view! {
            <div
                class=DIVIDER.classes(&[orientation.pick(), variant.pick(), spacing.pick()], layout_class)
                role="separator"
                aria-orientation=orientation.token()
                data-ui-primitive="true"
                data-ui-kind="divider"
                data-ui-orientation=orientation.token()
            ></div>
        }
        .into_view(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn divider(orientation: Orientation, spacing: DividerSpacing) -> String {
        DIVIDER.classes(&[orientation.pick(), spacing.pick()], None)
    }

    #[test]
    fn horizontal_spacing_uses_vertical_margins() {
        assert_eq!(
            divider(Orientation::Horizontal, DividerSpacing::Sm),
            "shrink-0 bg-border h-px w-full my-2"
        );
        assert_eq!(
            divider(Orientation::Horizontal, DividerSpacing::Lg),
            "shrink-0 bg-border h-px w-full my-8"
        );
    }

    #[test]
    fn vertical_spacing_uses_horizontal_margins() {
        assert_eq!(
            divider(Orientation::Vertical, DividerSpacing::Md),
            "shrink-0 bg-border h-full w-px mx-4"
        );
        assert_eq!(
            divider(Orientation::Vertical, DividerSpacing::None),
            "shrink-0 bg-border h-full w-px"
        );
    }

    #[test]
    fn default_divider_is_a_spaced_horizontal_rule() {
        assert_eq!(DIVIDER.classes(&[], None), "shrink-0 bg-border h-px w-full my-4");
    }

    #[test]
    fn dashed_variant_composes_with_compounds() {
        assert_eq!(
            DIVIDER.classes(
                &[DividerVariant::Dashed.pick(), DividerSpacing::Sm.pick()],
                Some("opacity-60")
            ),
            "shrink-0 bg-border h-px w-full border-0 border-dashed my-2 opacity-60"
        );
    }

    #[test]
    fn labelled_divider_keeps_outer_margin() {
        assert_eq!(
            LABELLED_DIVIDER.classes(&[DividerSpacing::Lg.pick()], None),
            "relative flex items-center my-8"
        );
    }

    #[test]
    fn badges_resolve_per_variant() {
        assert_eq!(
            BADGE.classes(&[BadgeVariant::Outline.pick()], None),
            "inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs font-semibold transition-colors text-foreground"
        );
    }
}
