use super::*;

const AUTH_PATTERN: &str = "background-image: url(\"data:image/svg+xml,%3Csvg width='60' height='60' viewBox='0 0 60 60' xmlns='http://www.w3.org/2000/svg'%3E%3Cg fill='none' fill-rule='evenodd'%3E%3Cg fill='%23ffffff' fill-opacity='1'%3E%3Cpath d='M36 34v-4h-2v4h-4v2h4v4h2v-4h4v-2h-4zm0-30V0h-2v4h-4v2h4v4h2V6h4V4h-4zM6 34v-4H4v4H0v2h4v4h2v-4h4v-2H6zM6 4V0H4v4H0v2h4v4h2V6h4V4H6z'/%3E%3C/g%3E%3C/g%3E%3C/svg%3E\")";

token_enum! {
    /// Side of an auth screen that carries the illustration panel.
    pub enum IllustrationSide in "side" {
        /// Illustration before the form.
        Left => "left",
        /// Illustration after the form.
        Right => "right",
    }
    default = Left;
}

#[component]
fn IllustrationPanel(illustration: Option<ViewFn>, show_pattern: bool) -> impl IntoView {
    view! {
        <div class="relative hidden items-center justify-center overflow-hidden lg:flex lg:w-1/2 xl:w-[55%]" data-ui-slot="illustration">
            <div class="gradient-hero absolute inset-0 opacity-90"></div>
            {show_pattern.then(|| view! { <div class="absolute inset-0 opacity-10" style=AUTH_PATTERN></div> })}
            <div class="animate-float absolute left-20 top-20 h-72 w-72 rounded-full bg-white/10 blur-3xl"></div>
            <div class="animate-float absolute bottom-20 right-20 h-96 w-96 rounded-full bg-white/5 blur-3xl delay-1000"></div>
            <div class="relative z-10 p-12">
                {match illustration {
                    Some(illustration) => illustration.run(),
                    None => view! {
                        <div class="animate-fade-in-up max-w-md space-y-6 text-center text-white">
                            <div class="glass mx-auto flex h-24 w-24 items-center justify-center rounded-2xl">
                                <Icon icon=IconName::Zap size=IconSize::Lg layout_class="h-12 w-12 text-white" />
                            </div>
                            <h2 class="text-3xl font-bold">"Welcome Back"</h2>
                            <p class="text-lg text-white/80">
                                "Sign in to access your dashboard and continue where you left off."
                            </p>
                        </div>
                    }
                    .into_view(),
                }}
            </div>
        </div>
    }
}

#[component]
/// Full-height sign-in screen: form panel beside a decorative illustration.
pub fn AuthLayout(
    #[prop(optional, into)] illustration: Option<ViewFn>,
    #[prop(default = IllustrationSide::Left)] illustration_side: IllustrationSide,
    #[prop(default = true)] show_pattern: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let panel = view! { <IllustrationPanel illustration show_pattern /> };
    let (before, after) = match illustration_side {
        IllustrationSide::Left => (Some(panel), None),
        IllustrationSide::Right => (None, Some(panel)),
    };
    view! {
        <div
            class=merge_classes(["flex min-h-screen", layout_class.unwrap_or_default()])
            data-ui-primitive="true"
            data-ui-kind="auth-layout"
            data-ui-side=illustration_side.token()
        >
            {before}
            <div class="flex flex-1 items-center justify-center bg-background p-6 lg:p-12">
                <div class="w-full max-w-md animate-fade-in">{children()}</div>
            </div>
            {after}
        </div>
    }
}

token_enum! {
    /// Content width cap of a centered layout.
    pub enum MaxWidth in "max_width" {
        /// 20rem.
        Xs => "xs",
        /// 24rem.
        Sm => "sm",
        /// 28rem.
        Md => "md",
        /// 32rem.
        Lg => "lg",
        /// 36rem.
        Xl => "xl",
        /// 42rem.
        Xxl => "2xl",
        /// No cap.
        Full => "full",
    }
    default = Lg;
}

token_enum! {
    /// Inner padding of a centered layout.
    pub enum LayoutPadding in "padding" {
        /// None.
        None => "none",
        /// Small.
        Sm => "sm",
        /// Medium.
        Md => "md",
        /// Large.
        Lg => "lg",
    }
    default = Md;
}

pub(crate) const CENTERED: VariantSpec = VariantSpec {
    base: "mx-auto w-full",
    groups: &[
        VariantGroup {
            name: "max_width",
            options: &[
                ("xs", "max-w-xs"),
                ("sm", "max-w-sm"),
                ("md", "max-w-md"),
                ("lg", "max-w-lg"),
                ("xl", "max-w-xl"),
                ("2xl", "max-w-2xl"),
                ("full", "max-w-full"),
            ],
            default: "lg",
        },
        VariantGroup {
            name: "padding",
            options: &[
                ("none", ""),
                ("sm", "px-4 py-6"),
                ("md", "px-6 py-8"),
                ("lg", "px-8 py-12"),
            ],
            default: "md",
        },
        VariantGroup {
            name: "vertical_center",
            options: &[("false", ""), ("true", "flex min-h-screen flex-col justify-center")],
            default: "false",
        },
    ],
    compounds: &[],
};

#[component]
/// Horizontally centered column with a width cap.
pub fn CenteredLayout(
    #[prop(default = MaxWidth::Lg)] max_width: MaxWidth,
    #[prop(optional)] vertical_center: bool,
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=CENTERED.classes(
                &[max_width.pick(), padding.pick(), ("vertical_center", bool_token(vertical_center))],
                layout_class,
            )
            data-ui-primitive="true"
            data-ui-kind="centered-layout"
        >
            {children()}
        </div>
    }
}

token_enum! {
    /// Card grid column count at the widest breakpoint.
    pub enum GridColumns in "columns" {
        /// One column.
        One => "1",
        /// Two columns.
        Two => "2",
        /// Three columns.
        Three => "3",
        /// Four columns.
        Four => "4",
        /// Five columns.
        Five => "5",
        /// Six columns.
        Six => "6",
    }
    default = Three;
}

token_enum! {
    /// Gutter between grid cells.
    pub enum GridGap in "gap" {
        /// Tight.
        Sm => "sm",
        /// Regular.
        Md => "md",
        /// Roomy.
        Lg => "lg",
        /// Widest.
        Xl => "xl",
    }
    default = Md;
}

pub(crate) const CARD_GRID: VariantSpec = VariantSpec {
    base: "grid",
    groups: &[
        VariantGroup {
            name: "columns",
            options: &[("1", ""), ("2", ""), ("3", ""), ("4", ""), ("5", ""), ("6", "")],
            default: "3",
        },
        VariantGroup {
            name: "responsive",
            options: &[("false", ""), ("true", "")],
            default: "true",
        },
        VariantGroup {
            name: "gap",
            options: &[
                ("sm", "gap-3"),
                ("md", "gap-4 lg:gap-6"),
                ("lg", "gap-6 lg:gap-8"),
                ("xl", "gap-8 lg:gap-10"),
            ],
            default: "md",
        },
    ],
    compounds: &[
        CompoundRule {
            when: &[("columns", "1")],
            classes: "grid-cols-1",
        },
        CompoundRule {
            when: &[("columns", "2"), ("responsive", "true")],
            classes: "grid-cols-1 sm:grid-cols-2",
        },
        CompoundRule {
            when: &[("columns", "3"), ("responsive", "true")],
            classes: "grid-cols-1 sm:grid-cols-2 lg:grid-cols-3",
        },
        CompoundRule {
            when: &[("columns", "4"), ("responsive", "true")],
            classes: "grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4",
        },
        CompoundRule {
            when: &[("columns", "5"), ("responsive", "true")],
            classes: "grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-5",
        },
        CompoundRule {
            when: &[("columns", "6"), ("responsive", "true")],
            classes: "grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 xl:grid-cols-6",
        },
        CompoundRule {
            when: &[("columns", "2"), ("responsive", "false")],
            classes: "grid-cols-2",
        },
        CompoundRule {
            when: &[("columns", "3"), ("responsive", "false")],
            classes: "grid-cols-3",
        },
        CompoundRule {
            when: &[("columns", "4"), ("responsive", "false")],
            classes: "grid-cols-4",
        },
        CompoundRule {
            when: &[("columns", "5"), ("responsive", "false")],
            classes: "grid-cols-5",
        },
        CompoundRule {
            when: &[("columns", "6"), ("responsive", "false")],
            classes: "grid-cols-6",
        },
    ],
};

#[component]
/// Grid of cards; responsive grids step up to `columns` across breakpoints.
pub fn CardGridLayout(
    #[prop(default = GridColumns::Three)] columns: GridColumns,
    #[prop(default = GridGap::Md)] gap: GridGap,
    #[prop(default = true)] responsive: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=CARD_GRID.classes(
                &[columns.pick(), ("responsive", bool_token(responsive)), gap.pick()],
                layout_class,
            )
            data-ui-primitive="true"
            data-ui-kind="card-grid-layout"
            data-ui-columns=columns.token()
        >
            {children()}
        </div>
    }
}

token_enum! {
    /// Expanded width of the dashboard sidebar.
    pub enum DashboardSidebarWidth in "sidebar_width" {
        /// 14rem.
        Sm => "sm",
        /// 16rem.
        Md => "md",
        /// 18rem.
        Lg => "lg",
    }
    default = Md;
}

impl DashboardSidebarWidth {
    fn width(self) -> &'static str {
        match self {
            Self::Sm => "w-56",
            Self::Md => "w-64",
            Self::Lg => "w-72",
        }
    }

    fn content_offset(self) -> &'static str {
        match self {
            Self::Sm => "lg:pl-56",
            Self::Md => "lg:pl-64",
            Self::Lg => "lg:pl-72",
        }
    }
}

/// Classes for the dashboard's fixed sidebar panel.
pub fn dashboard_sidebar_class(
    width: DashboardSidebarWidth,
    collapsed: bool,
    mobile_open: bool,
) -> String {
    merge_classes([
        "fixed left-0 top-0 z-50 h-full border-r border-border bg-card transition-all duration-300",
        if collapsed { "w-16" } else { width.width() },
        if mobile_open {
            "translate-x-0"
        } else {
            "-translate-x-full lg:translate-x-0"
        },
        "lg:z-30",
    ])
}

/// Classes for the dashboard content column, offset past the sidebar on desktop.
pub fn dashboard_content_class(width: DashboardSidebarWidth, collapsed: bool) -> String {
    merge_classes([
        "transition-all duration-300",
        if collapsed { "lg:pl-16" } else { width.content_offset() },
    ])
}

#[component]
/// Application frame: fixed collapsible sidebar, sticky header and content area.
pub fn DashboardLayout(
    #[prop(optional, into)] sidebar: Option<ViewFn>,
    #[prop(optional, into)] header: Option<ViewFn>,
    #[prop(default = DashboardSidebarWidth::Md)] sidebar_width: DashboardSidebarWidth,
    #[prop(default = true)] collapsible: bool,
    #[prop(optional)] default_collapsed: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let collapsed = create_rw_signal(default_collapsed);
    let mobile_open = create_rw_signal(false);

    view! {
        <div
            class=merge_classes(["min-h-screen bg-background", layout_class.unwrap_or_default()])
            data-ui-primitive="true"
            data-ui-kind="dashboard-layout"
            data-ui-sidebar-width=sidebar_width.token()
        >
            <Show when=move || mobile_open.get() fallback=|| ()>
                <div
                    class="fixed inset-0 z-40 animate-fade-in bg-background/80 backdrop-blur-sm lg:hidden"
                    data-ui-slot="overlay"
                    on:click=move |_| mobile_open.set(false)
                ></div>
            </Show>

            <aside class=move || dashboard_sidebar_class(sidebar_width, collapsed.get(), mobile_open.get())>
                <div class="flex h-16 items-center justify-between border-b border-border px-4">
                    <Show when=move || !collapsed.get() fallback=|| ()>
                        <span class="gradient-text animate-fade-in text-lg font-semibold">"Brand"</span>
                    </Show>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        layout_class="lg:hidden"
                        aria_label="Close navigation"
                        on_click=Callback::new(move |_| mobile_open.set(false))
                    >
                        <Icon icon=IconName::Dismiss />
                    </Button>
                    {collapsible.then(|| view! {
                        <Button
                            variant=ButtonVariant::Ghost
                            size=ButtonSize::Icon
                            layout_class="hidden lg:flex"
                            aria_label="Collapse sidebar"
                            on_click=Callback::new(move |_| collapsed.update(|value| *value = !*value))
                        >
                            {move || {
                                let icon = if collapsed.get() { IconName::ChevronRight } else { IconName::ChevronLeft };
                                view! { <Icon icon size=IconSize::Sm /> }
                            }}
                        </Button>
                    })}
                </div>
                <div class="scrollbar-thin flex h-[calc(100%-4rem)] flex-col overflow-y-auto" data-ui-slot="sidebar">
                    {match sidebar {
                        Some(sidebar) => sidebar.run(),
                        None => view! { <div class="p-4 text-sm text-muted-foreground">"Sidebar content"</div> }.into_view(),
                    }}
                </div>
            </aside>

            <div class=move || dashboard_content_class(sidebar_width, collapsed.get())>
                <header class="sticky top-0 z-20 flex h-16 items-center gap-4 border-b border-border bg-background/95 px-4 backdrop-blur supports-[backdrop-filter]:bg-background/60 lg:px-6">
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        layout_class="lg:hidden"
                        aria_label="Open navigation"
                        on_click=Callback::new(move |_| mobile_open.set(true))
                    >
                        <Icon icon=IconName::Menu />
                    </Button>
                    {match header {
                        Some(header) => header.run(),
                        None => view! {
                            <div class="flex flex-1 items-center justify-between">
                                <div class="relative hidden items-center md:flex">
                                    <Icon icon=IconName::Search size=IconSize::Sm layout_class="absolute left-3 text-muted-foreground" />
                                    <input
                                        type="search"
                                        placeholder="Search..."
                                        aria-label="Search"
                                        class="focus-ring h-9 w-64 rounded-lg border border-input bg-background pl-9 pr-4 text-sm"
                                    />
                                </div>
                                <div class="flex items-center gap-2">
                                    <Button variant=ButtonVariant::Ghost size=ButtonSize::Icon aria_label="Notifications">
                                        <Icon icon=IconName::Bell />
                                    </Button>
                                    <Button variant=ButtonVariant::Ghost size=ButtonSize::Icon aria_label="Account">
                                        <Icon icon=IconName::User />
                                    </Button>
                                </div>
                            </div>
                        }
                        .into_view(),
                    }}
                </header>
                <main class="flex-1 p-4 lg:p-6">{children()}</main>
            </div>
        </div>
    }
}

token_enum! {
    /// Desktop width split between the left and right panes.
    pub enum SplitRatio in "ratio" {
        /// Even halves.
        Half => "50-50",
        /// 40% / 60%.
        TwoFifths => "40-60",
        /// 60% / 40%.
        ThreeFifths => "60-40",
        /// One third / two thirds.
        OneThird => "33-67",
        /// Two thirds / one third.
        TwoThirds => "67-33",
    }
    default = Half;
}

impl SplitRatio {
    /// Desktop width classes for the left and right panes.
    pub fn pane_widths(self) -> (&'static str, &'static str) {
        match self {
            Self::Half => ("lg:w-1/2", "lg:w-1/2"),
            Self::TwoFifths => ("lg:w-2/5", "lg:w-3/5"),
            Self::ThreeFifths => ("lg:w-3/5", "lg:w-2/5"),
            Self::OneThird => ("lg:w-1/3", "lg:w-2/3"),
            Self::TwoThirds => ("lg:w-2/3", "lg:w-1/3"),
        }
    }
}

token_enum! {
    /// Which pane renders first.
    pub enum MobileOrder in "mobile_order" {
        /// Left pane on top when stacked.
        LeftFirst => "left-first",
        /// Right pane on top when stacked.
        RightFirst => "right-first",
    }
    default = LeftFirst;
}

pub(crate) const SPLIT_SCREEN: VariantSpec = VariantSpec {
    base: "flex min-h-screen",
    groups: &[VariantGroup {
        name: "stack",
        options: &[("false", "flex-row"), ("true", "flex-col lg:flex-row")],
        default: "true",
    }],
    compounds: &[],
};

#[component]
/// Two side-by-side panes that stack on small screens.
///
/// The left pane shows `left` when given, otherwise `children`.
pub fn SplitScreenLayout(
    #[prop(optional, into)] left: Option<ViewFn>,
    #[prop(optional, into)] right: Option<ViewFn>,
    #[prop(optional)] left_class: Option<&'static str>,
    #[prop(optional)] right_class: Option<&'static str>,
    #[prop(default = SplitRatio::Half)] ratio: SplitRatio,
    #[prop(default = true)] stack_on_mobile: bool,
    #[prop(default = MobileOrder::LeftFirst)] mobile_order: MobileOrder,
    #[prop(optional)] divider: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let (left_width, right_width) = ratio.pane_widths();
    let left_pane = view! {
        <div class=merge_classes(["w-full", left_width, left_class.unwrap_or_default()]) data-ui-slot="left">
            {match left {
                Some(left) => left.run(),
                None => children.map(|children| children().into_view()).into_view(),
            }}
        </div>
    };
    let right_pane = view! {
        <div class=merge_classes(["w-full", right_width, right_class.unwrap_or_default()]) data-ui-slot="right">
            {right.map(|right| right.run())}
        </div>
    };
    let rule = divider.then(|| view! { <div class="hidden w-px bg-border lg:block"></div> });
    let (first, second) = match mobile_order {
        MobileOrder::LeftFirst => (left_pane, right_pane),
        MobileOrder::RightFirst => (right_pane, left_pane),
    };

    view! {
        <div
            class=SPLIT_SCREEN.classes(&[("stack", bool_token(stack_on_mobile))], layout_class)
            data-ui-primitive="true"
            data-ui-kind="split-screen-layout"
            data-ui-ratio=ratio.token()
        >
            {first}
            {rule}
            {second}
        </div>
    }
}

token_enum! {
    /// Stat grid column count at the widest breakpoint.
    pub enum StatsColumns in "columns" {
        /// Two columns.
        Two => "2",
        /// Three columns.
        Three => "3",
        /// Four columns.
        Four => "4",
        /// Five columns.
        Five => "5",
    }
    default = Four;
}

token_enum! {
    /// Gutter between stat tiles.
    pub enum StatsGap in "gap" {
        /// Tight.
        Sm => "sm",
        /// Regular.
        Md => "md",
        /// Roomy.
        Lg => "lg",
    }
    default = Md;
}

token_enum! {
    /// Styling applied to each stat tile.
    pub enum StatsVariant in "variant" {
        /// Unstyled tiles.
        Default => "default",
        /// Each tile becomes a padded card.
        Cards => "cards",
        /// Each tile gets compact padding.
        Compact => "compact",
    }
    default = Default;
}

pub(crate) const STATS_GRID: VariantSpec = VariantSpec {
    base: "grid",
    groups: &[
        VariantGroup {
            name: "columns",
            options: &[
                ("2", "grid-cols-1 sm:grid-cols-2"),
                ("3", "grid-cols-1 sm:grid-cols-2 lg:grid-cols-3"),
                ("4", "grid-cols-2 lg:grid-cols-4"),
                ("5", "grid-cols-2 sm:grid-cols-3 lg:grid-cols-5"),
            ],
            default: "4",
        },
        VariantGroup {
            name: "gap",
            options: &[("sm", "gap-3"), ("md", "gap-4 lg:gap-6"), ("lg", "gap-6 lg:gap-8")],
            default: "md",
        },
        VariantGroup {
            name: "variant",
            options: &[
                ("default", ""),
                (
                    "cards",
                    "[&>*]:rounded-xl [&>*]:border [&>*]:border-border [&>*]:bg-card [&>*]:p-4 lg:[&>*]:p-6",
                ),
                ("compact", "[&>*]:px-4 [&>*]:py-3"),
            ],
            default: "default",
        },
    ],
    compounds: &[],
};

#[component]
/// Grid of metric tiles.
pub fn StatsGridLayout(
    #[prop(default = StatsColumns::Four)] columns: StatsColumns,
    #[prop(default = StatsGap::Md)] gap: StatsGap,
    #[prop(default = StatsVariant::Default)] variant: StatsVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=STATS_GRID.classes(&[columns.pick(), gap.pick(), variant.pick()], layout_class)
            data-ui-primitive="true"
            data-ui-kind="stats-grid-layout"
            data-ui-variant=variant.token()
        >
            {children()}
        </div>
    }
}

token_enum! {
    /// Side of the main column that carries the aside.
    pub enum AsidePosition in "position" {
        /// Aside before the main column.
        Left => "left",
        /// Aside after the main column.
        Right => "right",
    }
    default = Right;
}

token_enum! {
    /// Desktop width of the aside column.
    pub enum AsideWidth in "width" {
        /// 16rem.
        Narrow => "narrow",
        /// 20rem.
        Medium => "medium",
        /// 24rem.
        Wide => "wide",
    }
    default = Medium;
}

token_enum! {
    /// Gutter between the two columns.
    pub enum ColumnGap in "gap" {
        /// 1rem.
        Sm => "sm",
        /// 1.5rem.
        Md => "md",
        /// 2rem.
        Lg => "lg",
        /// 3rem.
        Xl => "xl",
    }
    default = Lg;
}

pub(crate) const TWO_COLUMN: VariantSpec = VariantSpec {
    base: "flex flex-col lg:flex-row",
    groups: &[VariantGroup {
        name: "gap",
        options: &[("sm", "gap-4"), ("md", "gap-6"), ("lg", "gap-8"), ("xl", "gap-12")],
        default: "lg",
    }],
    compounds: &[],
};

pub(crate) const TWO_COLUMN_ASIDE: VariantSpec = VariantSpec {
    base: "w-full shrink-0",
    groups: &[
        VariantGroup {
            name: "width",
            options: &[("narrow", "lg:w-64"), ("medium", "lg:w-80"), ("wide", "lg:w-96")],
            default: "medium",
        },
        VariantGroup {
            name: "sticky",
            options: &[("false", ""), ("true", "lg:sticky lg:top-6 lg:self-start")],
            default: "true",
        },
    ],
    compounds: &[],
};

#[component]
/// Main column with a fixed-width aside on one side.
pub fn TwoColumnLayout(
    #[prop(optional, into)] aside: Option<ViewFn>,
    #[prop(default = AsidePosition::Right)] aside_position: AsidePosition,
    #[prop(default = AsideWidth::Medium)] aside_width: AsideWidth,
    #[prop(default = true)] aside_sticky: bool,
    #[prop(default = ColumnGap::Lg)] gap: ColumnGap,
    #[prop(optional)] main_class: Option<&'static str>,
    #[prop(optional)] aside_class: Option<&'static str>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let aside = view! {
        <aside
            class=TWO_COLUMN_ASIDE.classes(
                &[aside_width.pick(), ("sticky", bool_token(aside_sticky))],
                aside_class,
            )
            data-ui-slot="aside"
        >
            {aside.map(|aside| aside.run())}
        </aside>
    };
    let (before, after) = match aside_position {
        AsidePosition::Left => (Some(aside), None),
        AsidePosition::Right => (None, Some(aside)),
    };

    view! {
        <div
            class=TWO_COLUMN.classes(&[gap.pick()], layout_class)
            data-ui-primitive="true"
            data-ui-kind="two-column-layout"
            data-ui-position=aside_position.token()
        >
            {before}
            <main class=merge_classes(["min-w-0 flex-1", main_class.unwrap_or_default()])>
                {children()}
            </main>
            {after}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn responsive_card_grids_step_up_across_breakpoints() {
        assert_eq!(
            CARD_GRID.classes(&[GridColumns::Four.pick()], None),
            "grid gap-4 lg:gap-6 grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4"
        );
        assert_eq!(
            CARD_GRID.classes(&[GridColumns::One.pick(), GridGap::Sm.pick()], None),
            "grid gap-3 grid-cols-1"
        );
    }

    #[test]
    fn fixed_card_grids_use_exact_columns() {
        assert_eq!(
            CARD_GRID.classes(
                &[GridColumns::Five.pick(), ("responsive", "false"), GridGap::Xl.pick()],
                Some("mt-6")
            ),
            "grid gap-8 lg:gap-10 grid-cols-5 mt-6"
        );
    }

    #[test]
    fn every_card_grid_combination_has_exactly_one_column_rule() {
        let columns = [
            GridColumns::One,
            GridColumns::Two,
            GridColumns::Three,
            GridColumns::Four,
            GridColumns::Five,
            GridColumns::Six,
        ];
        for column in columns {
            for responsive in ["true", "false"] {
                let class = CARD_GRID.classes(&[column.pick(), ("responsive", responsive)], None);
                let base_rules = class.split(' ').filter(|c| c.starts_with("grid-cols-")).count();
                assert_eq!(base_rules, 1, "{class}");
            }
        }
    }

    #[test]
    fn centered_layout_can_fill_the_viewport() {
        assert_eq!(
            CENTERED.classes(
                &[MaxWidth::Xxl.pick(), LayoutPadding::None.pick(), ("vertical_center", "true")],
                None
            ),
            "mx-auto w-full max-w-2xl flex min-h-screen flex-col justify-center"
        );
        assert_eq!(CENTERED.classes(&[], None), "mx-auto w-full max-w-lg px-6 py-8");
    }

    #[test]
    fn collapsed_dashboard_sidebar_shrinks_and_content_follows() {
        assert_eq!(
            dashboard_sidebar_class(DashboardSidebarWidth::Lg, false, false),
            "fixed left-0 top-0 z-50 h-full border-r border-border bg-card transition-all duration-300 w-72 -translate-x-full lg:translate-x-0 lg:z-30"
        );
        assert!(dashboard_sidebar_class(DashboardSidebarWidth::Lg, true, true).contains("w-16 translate-x-0"));
        assert_eq!(
            dashboard_content_class(DashboardSidebarWidth::Sm, false),
            "transition-all duration-300 lg:pl-56"
        );
        assert_eq!(
            dashboard_content_class(DashboardSidebarWidth::Sm, true),
            "transition-all duration-300 lg:pl-16"
        );
    }

    #[test]
    fn split_ratios_sum_to_the_full_width() {
        assert_eq!(SplitRatio::OneThird.pane_widths(), ("lg:w-1/3", "lg:w-2/3"));
        assert_eq!(SplitRatio::ThreeFifths.pane_widths(), ("lg:w-3/5", "lg:w-2/5"));
        assert_eq!(
            SPLIT_SCREEN.classes(&[("stack", "false")], None),
            "flex min-h-screen flex-row"
        );
    }

    #[test]
    fn stat_cards_style_every_child() {
        let class = STATS_GRID.classes(
            &[StatsColumns::Five.pick(), StatsVariant::Cards.pick()],
            None,
        );
        assert!(class.starts_with("grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-5 gap-4 lg:gap-6"));
        assert!(class.ends_with("lg:[&>*]:p-6"));
    }

    #[test]
    fn non_sticky_aside_drops_positioning() {
        assert_eq!(
            TWO_COLUMN_ASIDE.classes(&[AsideWidth::Wide.pick(), ("sticky", "false")], None),
            "w-full shrink-0 lg:w-96"
        );
        assert_eq!(TWO_COLUMN.classes(&[ColumnGap::Xl.pick()], None), "flex flex-col lg:flex-row gap-12");
    }
}
