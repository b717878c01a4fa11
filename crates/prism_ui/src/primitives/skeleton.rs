use super::*;

token_enum! {
    /// Placeholder animation styles.
    pub enum SkeletonVariant in "variant" {
        /// Pulsing block.
        Default => "default",
        /// Pulsing block with a sweeping highlight.
        Shimmer => "shimmer",
    }
    default = Default;
}

pub(crate) const SKELETON: VariantSpec = VariantSpec {
    base: "animate-pulse rounded-md bg-muted",
    groups: &[VariantGroup {
        name: "variant",
        options: &[
            ("default", "bg-muted"),
            (
                "shimmer",
                "relative overflow-hidden bg-muted before:absolute before:inset-0 before:-translate-x-full before:animate-[shimmer_2s_infinite] before:bg-gradient-to-r before:from-transparent before:via-white/10 before:to-transparent",
            ),
        ],
        default: "default",
    }],
    compounds: &[],
};

#[component]
/// Loading placeholder block; size it through `layout_class`.
pub fn Skeleton(
    #[prop(default = SkeletonVariant::Default)] variant: SkeletonVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = None)] style: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div
            class=SKELETON.classes(&[variant.pick()], layout_class)
            style=style
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="skeleton"
            data-ui-variant=variant.token()
        ></div>
    }
}

token_enum! {
    /// Width of the final line in a text placeholder.
    pub enum LastLineWidth in "width" {
        /// Full width.
        Full => "full",
        /// Three quarters.
        ThreeQuarters => "3/4",
        /// Half.
        Half => "1/2",
        /// One quarter.
        Quarter => "1/4",
    }
    default = ThreeQuarters;
}

impl LastLineWidth {
    fn line_class(self) -> &'static str {
        match self {
            Self::Full => "h-4 w-full",
            Self::ThreeQuarters => "h-4 w-3/4",
            Self::Half => "h-4 w-1/2",
            Self::Quarter => "h-4 w-1/4",
        }
    }
}

/// Line classes for a `lines`-line text placeholder: full width except the last.
pub fn text_line_classes(lines: usize, last: LastLineWidth) -> Vec<&'static str> {
    (0..lines)
        .map(|index| {
            if index + 1 == lines {
                last.line_class()
            } else {
                LastLineWidth::Full.line_class()
            }
        })
        .collect()
}

#[component]
/// Paragraph placeholder.
pub fn SkeletonText(
    #[prop(default = 3)] lines: usize,
    #[prop(default = LastLineWidth::ThreeQuarters)] last_line_width: LastLineWidth,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div
            class=merge_classes(["space-y-2", layout_class.unwrap_or_default()])
            data-ui-primitive="true"
            data-ui-kind="skeleton-text"
        >
            {text_line_classes(lines, last_line_width)
                .into_iter()
                .map(|class| view! { <Skeleton layout_class=class /> })
                .collect_view()}
        </div>
    }
}

#[component]
/// Card placeholder with optional media and avatar rows.
pub fn SkeletonCard(
    #[prop(optional)] has_image: bool,
    #[prop(optional)] has_avatar: bool,
    #[prop(default = 2)] lines: usize,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div
            class=merge_classes(["space-y-4 rounded-xl border border-border p-4", layout_class.unwrap_or_default()])
            data-ui-primitive="true"
            data-ui-kind="skeleton-card"
        >
            {has_image.then(|| view! { <Skeleton layout_class="h-48 w-full rounded-lg" /> })}
            <div class="flex items-center gap-3">
                {has_avatar.then(|| view! { <Skeleton layout_class="h-10 w-10 rounded-full" /> })}
                <div class="flex-1 space-y-2">
                    <Skeleton layout_class="h-4 w-1/2" />
                    <Skeleton layout_class="h-3 w-1/4" />
                </div>
            </div>
            <SkeletonText lines />
        </div>
    }
}

token_enum! {
    /// Avatar placeholder diameters.
    pub enum SkeletonAvatarSize in "size" {
        /// 32px.
        Sm => "sm",
        /// 40px.
        Default => "default",
        /// 48px.
        Lg => "lg",
        /// 64px.
        Xl => "xl",
    }
    default = Default;
}

impl SkeletonAvatarSize {
    fn classes(self) -> &'static str {
        match self {
            Self::Sm => "h-8 w-8 rounded-full",
            Self::Default => "h-10 w-10 rounded-full",
            Self::Lg => "h-12 w-12 rounded-full",
            Self::Xl => "h-16 w-16 rounded-full",
        }
    }
}

#[component]
/// Round avatar placeholder.
pub fn SkeletonAvatar(
    #[prop(default = SkeletonAvatarSize::Default)] size: SkeletonAvatarSize,
) -> impl IntoView {
    view! { <Skeleton layout_class=size.classes() /> }
}

/// Inline style for a table row cell; the first column is capped.
pub fn table_cell_style(index: usize) -> Option<&'static str> {
    (index == 0).then_some("max-width: 200px")
}

#[component]
/// Table row placeholder.
pub fn SkeletonTableRow(
    #[prop(default = 4)] columns: usize,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div
            class=merge_classes(["flex items-center gap-4 py-3", layout_class.unwrap_or_default()])
            data-ui-primitive="true"
            data-ui-kind="skeleton-table-row"
        >
            {(0..columns)
                .map(|index| {
                    view! { <Skeleton layout_class="h-4 flex-1" style=table_cell_style(index) /> }
                })
                .collect_view()}
        </div>
    }
}

#[component]
/// List row placeholder with optional avatar and trailing action.
pub fn SkeletonListItem(
    #[prop(optional)] has_avatar: bool,
    #[prop(optional)] has_action: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div
            class=merge_classes(["flex items-center gap-3 py-2", layout_class.unwrap_or_default()])
            data-ui-primitive="true"
            data-ui-kind="skeleton-list-item"
        >
            {has_avatar.then(|| view! { <SkeletonAvatar /> })}
            <div class="flex-1 space-y-1.5">
                <Skeleton layout_class="h-4 w-3/4" />
                <Skeleton layout_class="h-3 w-1/2" />
            </div>
            {has_action.then(|| view! { <Skeleton layout_class="h-8 w-20 rounded-md" /> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn only_the_last_text_line_is_shortened() {
        assert_eq!(
            text_line_classes(3, LastLineWidth::Half),
            vec!["h-4 w-full", "h-4 w-full", "h-4 w-1/2"]
        );
        assert_eq!(text_line_classes(1, LastLineWidth::Quarter), vec!["h-4 w-1/4"]);
        assert!(text_line_classes(0, LastLineWidth::Full).is_empty());
    }

    #[test]
    fn first_table_column_is_capped() {
        assert_eq!(table_cell_style(0), Some("max-width: 200px"));
        assert_eq!(table_cell_style(3), None);
    }

    #[test]
    fn shimmer_layers_a_highlight() {
        let class = SKELETON.classes(&[SkeletonVariant::Shimmer.pick()], Some("h-4"));
        assert!(class.starts_with("animate-pulse rounded-md bg-muted relative overflow-hidden"));
        assert!(class.ends_with("h-4"));
    }
}
