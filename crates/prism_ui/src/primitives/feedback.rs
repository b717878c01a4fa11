use super::*;

token_enum! {
    /// Alert banner color treatments.
    pub enum AlertVariant in "variant" {
        /// Neutral surface.
        Default => "default",
        /// Informational blue.
        Info => "info",
        /// Positive green.
        Success => "success",
        /// Cautionary yellow.
        Warning => "warning",
        /// Destructive red.
        Error => "error",
        /// Primary-to-accent wash.
        Gradient => "gradient",
    }
    default = Default;
}

impl AlertVariant {
    /// Icon shown when the banner does not name one explicitly.
    pub fn default_icon(self) -> IconName {
        match self {
            Self::Default | Self::Info | Self::Gradient => IconName::Info,
            Self::Success => IconName::CheckCircle,
            Self::Warning => IconName::AlertTriangle,
            Self::Error => IconName::AlertCircle,
        }
    }
}

pub(crate) const ALERT: VariantSpec = VariantSpec {
    base: "relative w-full rounded-xl border p-4 transition-all duration-200",
    groups: &[VariantGroup {
        name: "variant",
        options: &[
            ("default", "bg-background border-border text-foreground"),
            (
                "info",
                "bg-blue-50 border-blue-200 text-blue-900 dark:bg-blue-950/50 dark:border-blue-800 dark:text-blue-100",
            ),
            (
                "success",
                "bg-green-50 border-green-200 text-green-900 dark:bg-green-950/50 dark:border-green-800 dark:text-green-100",
            ),
            (
                "warning",
                "bg-yellow-50 border-yellow-200 text-yellow-900 dark:bg-yellow-950/50 dark:border-yellow-800 dark:text-yellow-100",
            ),
            (
                "error",
                "bg-red-50 border-red-200 text-red-900 dark:bg-red-950/50 dark:border-red-800 dark:text-red-100",
            ),
            ("gradient", "bg-gradient-to-r from-primary/10 to-accent/10 border-primary/20"),
        ],
        default: "default",
    }],
    compounds: &[],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Icon choice for an alert banner.
pub enum AlertIcon {
    /// The variant's default icon.
    #[default]
    Auto,
    /// A specific icon.
    Custom(IconName),
    /// No icon.
    Hidden,
}

impl AlertIcon {
    /// Icon to render for `variant`, if any.
    pub fn for_variant(self, variant: AlertVariant) -> Option<IconName> {
        match self {
            Self::Auto => Some(variant.default_icon()),
            Self::Custom(icon) => Some(icon),
            Self::Hidden => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Visibility of a dismissible banner.
pub struct Dismissal {
    dismissed: bool,
}

impl Dismissal {
    /// Whether the banner is still shown.
    pub fn is_visible(self) -> bool {
        !self.dismissed
    }

    /// Hides the banner. Returns `true` only on the first call, which is the
    /// one that should notify the owner.
    pub fn dismiss(&mut self) -> bool {
        if self.dismissed {
            return false;
        }
        self.dismissed = true;
        true
    }
}

/// Dismisses the banner held in `state`, notifying `on_dismiss` only the first time.
fn dismiss_banner(state: RwSignal<Dismissal>, on_dismiss: Option<Callback<()>>) {
    let first = state.try_update(Dismissal::dismiss).unwrap_or(false);
    if first {
        if let Some(on_dismiss) = on_dismiss {
            on_dismiss.call(());
        }
    }
}

#[component]
/// Full-width alert with optional title, icon, action slot and dismiss button.
pub fn AlertBanner(
    #[prop(default = AlertVariant::Default)] variant: AlertVariant,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] icon: AlertIcon,
    #[prop(optional)] dismissible: bool,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
    #[prop(optional, into)] action: Option<ViewFn>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let state = create_rw_signal(Dismissal::default());
    let overrides = merge_classes(["animate-fade-in", layout_class.unwrap_or_default()]);
    let class = ALERT.classes(&[variant.pick()], Some(&overrides));
    let icon = icon.for_variant(variant);
    let dismiss = move |_: MouseEvent| dismiss_banner(state, on_dismiss);

    view! {
        <Show when=move || state.get().is_visible() fallback=|| ()>
            <div
                class=class.clone()
                role="alert"
                data-ui-primitive="true"
                data-ui-kind="alert-banner"
                data-ui-variant=variant.token()
            >
                <div class="flex gap-3">
                    {icon.map(|icon| view! { <Icon icon layout_class="mt-0.5" /> })}
                    <div class="min-w-0 flex-1">
                        {title.clone().map(|title| view! { <h5 class="mb-1 text-sm font-semibold">{title}</h5> })}
                        <div class="text-sm opacity-90">{children()}</div>
                        {action.clone().map(|action| view! { <div class="mt-3">{action.run()}</div> })}
                    </div>
                    {dismissible.then(|| view! {
                        <button
                            type="button"
                            class="shrink-0 rounded-md p-1 opacity-70 transition-opacity hover:opacity-100"
                            aria-label="Dismiss"
                            data-ui-slot="dismiss"
                            on:click=dismiss
                        >
                            <Icon icon=IconName::Dismiss size=IconSize::Sm />
                        </button>
                    })}
                </div>
            </div>
        </Show>
    }
}

token_enum! {
    /// Inline alert tones.
    pub enum InlineAlertVariant in "variant" {
        /// Informational.
        Info => "info",
        /// Positive.
        Success => "success",
        /// Cautionary.
        Warning => "warning",
        /// Destructive.
        Error => "error",
    }
    default = Info;
}

pub(crate) const INLINE_ALERT: VariantSpec = VariantSpec {
    base: "flex items-center gap-2 text-sm",
    groups: &[VariantGroup {
        name: "variant",
        options: &[
            ("info", "text-blue-600 dark:text-blue-400"),
            ("success", "text-green-600 dark:text-green-400"),
            ("warning", "text-yellow-600 dark:text-yellow-400"),
            ("error", "text-red-600 dark:text-red-400"),
        ],
        default: "info",
    }],
    compounds: &[],
};

#[component]
/// Compact icon and text line for form validation and hints.
pub fn InlineAlert(
    #[prop(default = InlineAlertVariant::Info)] variant: InlineAlertVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let icon = match variant {
        InlineAlertVariant::Info => IconName::Info,
        InlineAlertVariant::Success => IconName::CheckCircle,
        InlineAlertVariant::Warning => IconName::AlertTriangle,
        InlineAlertVariant::Error => IconName::AlertCircle,
    };
    view! {
        <div
            class=INLINE_ALERT.classes(&[variant.pick()], layout_class)
            data-ui-primitive="true"
            data-ui-kind="inline-alert"
            data-ui-variant=variant.token()
        >
            <Icon icon size=IconSize::Sm />
            <span>{children()}</span>
        </div>
    }
}

token_enum! {
    /// Progress track heights.
    pub enum ProgressSize in "size" {
        /// 4px.
        Sm => "sm",
        /// 8px.
        Default => "default",
        /// 12px.
        Lg => "lg",
        /// 16px.
        Xl => "xl",
    }
    default = Default;
}

token_enum! {
    /// Progress fill colors.
    pub enum ProgressVariant in "variant" {
        /// Primary color.
        Default => "default",
        /// Green.
        Success => "success",
        /// Yellow.
        Warning => "warning",
        /// Red.
        Error => "error",
        /// Primary-to-accent gradient.
        Gradient => "gradient",
    }
    default = Default;
}

token_enum! {
    /// Where a progress bar prints its percentage.
    pub enum LabelPosition in "label_position" {
        /// Inside the fill (hidden on the smallest track).
        Inside => "inside",
        /// After the track.
        Outside => "outside",
        /// Above the track.
        Top => "top",
    }
    default = Outside;
}

pub(crate) const PROGRESS_TRACK: VariantSpec = VariantSpec {
    base: "relative h-2 w-full overflow-hidden rounded-full bg-muted",
    groups: &[VariantGroup {
        name: "size",
        options: &[
            ("sm", "h-1"),
            ("default", "h-2"),
            ("lg", "h-3"),
            ("xl", "h-4"),
        ],
        default: "default",
    }],
    compounds: &[],
};

pub(crate) const PROGRESS_FILL: VariantSpec = VariantSpec {
    base: "h-full transition-all duration-500 ease-out",
    groups: &[
        VariantGroup {
            name: "variant",
            options: &[
                ("default", "bg-primary"),
                ("success", "bg-green-500"),
                ("warning", "bg-yellow-500"),
                ("error", "bg-red-500"),
                ("gradient", "bg-gradient-to-r from-primary to-accent"),
            ],
            default: "default",
        },
        VariantGroup {
            name: "animated",
            options: &[("false", ""), ("true", "animate-pulse")],
            default: "false",
        },
    ],
    compounds: &[],
};

/// Completion percentage in `[0, 100]`; a non-positive or NaN `max` yields 0.
pub fn percentage(value: f64, max: f64) -> f64 {
    if max.is_nan() || max <= 0.0 || value.is_nan() {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

fn percent_label(percentage: f64) -> String {
    format!("{}%", percentage.round())
}

/// Whether the in-fill label fits: the smallest track has no room for text.
pub fn inside_label_visible(show_label: bool, position: LabelPosition, size: ProgressSize) -> bool {
    show_label && position == LabelPosition::Inside && size != ProgressSize::Sm
}

#[component]
/// Linear progress bar, determinate or indeterminate.
pub fn ProgressBar(
    #[prop(optional, into)] value: MaybeSignal<f64>,
    #[prop(default = 100.0)] max: f64,
    #[prop(default = ProgressSize::Default)] size: ProgressSize,
    #[prop(default = ProgressVariant::Default)] variant: ProgressVariant,
    #[prop(optional)] animated: bool,
    #[prop(optional)] show_label: bool,
    #[prop(default = LabelPosition::Outside)] label_position: LabelPosition,
    #[prop(optional)] indeterminate: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let percent = Signal::derive(move || percentage(value.get(), max));
    let width = move || format!("width: {}%", percent.get());
    let label = move || {
        view! { <span class="text-xs font-medium text-muted-foreground">{move || percent_label(percent.get())}</span> }
    };

    if indeterminate {
        let fill = PROGRESS_FILL.classes(
            &[variant.pick()],
            Some("w-1/3 animate-[indeterminate_1.5s_ease-in-out_infinite]"),
        );
        return view! {
            <div
                class=PROGRESS_TRACK.classes(&[size.pick()], layout_class)
                role="progressbar"
                aria-busy="true"
                data-ui-primitive="true"
                data-ui-kind="progress-bar"
                data-ui-state="indeterminate"
            >
                <div class=fill style="animation: indeterminate 1.5s ease-in-out infinite"></div>
            </div>
        }
        .into_view();
    }

    let fill_selection = [variant.pick(), ("animated", bool_token(animated))];
    if show_label && label_position == LabelPosition::Top {
        return view! {
            <div class="space-y-1" data-ui-primitive="true" data-ui-kind="progress-bar">
                <div class="flex justify-between">{label()}</div>
                <div
                    class=PROGRESS_TRACK.classes(&[size.pick()], layout_class)
                    role="progressbar"
                    aria-valuemin="0"
                    aria-valuemax="100"
                    aria-valuenow=move || percent.get().round()
                >
                    <div class=PROGRESS_FILL.classes(&fill_selection, Some("rounded-full")) style=width></div>
                </div>
            </div>
        }
        .into_view();
    }

    let track_overrides = merge_classes([layout_class.unwrap_or_default(), "flex-1"]);
    view! {
        <div class="flex items-center gap-3" data-ui-primitive="true" data-ui-kind="progress-bar">
            <div
                class=PROGRESS_TRACK.classes(&[size.pick()], Some(&track_overrides))
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=move || percent.get().round()
            >
                <div
                    class=PROGRESS_FILL.classes(&fill_selection, Some("rounded-full flex items-center justify-end"))
                    style=width
                >
                    {inside_label_visible(show_label, label_position, size).then(|| view! {
                        <span class="px-2 text-[10px] font-medium text-white">
                            {move || percent_label(percent.get())}
                        </span>
                    })}
                </div>
            </div>
            {(show_label && label_position == LabelPosition::Outside).then(label)}
        </div>
    }
    .into_view()
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Circle dimensions for a ring progress indicator.
pub struct RingGeometry {
    /// Circle radius inside the stroke.
    pub radius: f64,
    /// Full stroke length.
    pub circumference: f64,
    /// Dash offset leaving the uncompleted part of the ring empty.
    pub offset: f64,
}

impl RingGeometry {
    /// Geometry for a `size` px box with `stroke_width` px stroke at `percentage`.
    pub fn new(size: f64, stroke_width: f64, percentage: f64) -> Self {
        let radius = ((size - stroke_width) / 2.0).max(0.0);
        let circumference = radius * 2.0 * std::f64::consts::PI;
        let offset = circumference - percentage / 100.0 * circumference;
        Self {
            radius,
            circumference,
            offset,
        }
    }
}

fn ring_stroke_class(variant: ProgressVariant) -> &'static str {
    match variant {
        ProgressVariant::Default => "stroke-primary",
        ProgressVariant::Success => "stroke-green-500",
        ProgressVariant::Warning => "stroke-yellow-500",
        ProgressVariant::Error => "stroke-red-500",
        ProgressVariant::Gradient => "stroke-[url(#progress-gradient)]",
    }
}

#[component]
/// Ring progress indicator with an optional centered percentage.
pub fn CircularProgress(
    #[prop(optional, into)] value: MaybeSignal<f64>,
    #[prop(default = 100.0)] max: f64,
    #[prop(default = 80)] size: u32,
    #[prop(default = 8)] stroke_width: u32,
    #[prop(default = ProgressVariant::Default)] variant: ProgressVariant,
    #[prop(default = true)] show_label: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let percent = Signal::derive(move || percentage(value.get(), max));
    let ring = RingGeometry::new(f64::from(size), f64::from(stroke_width), 0.0);
    let offset = move || {
        RingGeometry::new(f64::from(size), f64::from(stroke_width), percent.get()).offset
    };
    let center = f64::from(size) / 2.0;
    let radius = ring.radius;
    let circumference = ring.circumference;

    view! {
        <div
            class=merge_classes(["relative inline-flex", layout_class.unwrap_or_default()])
            style=format!("width: {size}px; height: {size}px")
            data-ui-primitive="true"
            data-ui-kind="circular-progress"
            data-ui-variant=variant.token()
        >
            <svg width=size height=size class="-rotate-90 transform">
                <defs>
                    <linearGradient id="progress-gradient" x1="0%" y1="0%" x2="100%" y2="0%">
                        <stop offset="0%" stop-color="hsl(var(--primary))"></stop>
                        <stop offset="100%" stop-color="hsl(var(--accent))"></stop>
                    </linearGradient>
                </defs>
                <circle
                    cx=center
                    cy=center
                    r=radius
                    fill="none"
                    stroke="currentColor"
                    stroke-width=stroke_width
                    class="text-muted"
                ></circle>
                <circle
                    cx=center
                    cy=center
                    r=radius
                    fill="none"
                    stroke-width=stroke_width
                    stroke-linecap="round"
                    class=ring_stroke_class(variant)
                    style=move || {
                        format!(
                            "stroke-dasharray: {circumference}; stroke-dashoffset: {}; transition: stroke-dashoffset 0.5s ease-out",
                            offset()
                        )
                    }
                ></circle>
            </svg>
            {show_label.then(|| view! {
                <div class="absolute inset-0 flex items-center justify-center">
                    <span class="text-sm font-semibold">{move || percent_label(percent.get())}</span>
                </div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn dismissal_notifies_only_once() {
        let mut state = Dismissal::default();
        assert!(state.is_visible());
        assert!(state.dismiss());
        assert!(!state.is_visible());
        assert!(!state.dismiss());
        assert!(!state.is_visible());
    }

    #[test]
    fn repeated_dismiss_clicks_call_back_once() {
        let runtime = leptos::create_runtime();
        let state = create_rw_signal(Dismissal::default());
        let calls = create_rw_signal(0);
        let on_dismiss = Some(Callback::new(move |()| calls.update(|count| *count += 1)));

        dismiss_banner(state, on_dismiss);
        dismiss_banner(state, on_dismiss);

        assert!(!state.get_untracked().is_visible());
        assert_eq!(calls.get_untracked(), 1);
        runtime.dispose();
    }

    #[test]
    fn alert_icon_defaults_follow_variant() {
        assert_eq!(
            AlertIcon::Auto.for_variant(AlertVariant::Warning),
            Some(IconName::AlertTriangle)
        );
        assert_eq!(
            AlertIcon::Custom(IconName::Zap).for_variant(AlertVariant::Error),
            Some(IconName::Zap)
        );
        assert_eq!(AlertIcon::Hidden.for_variant(AlertVariant::Info), None);
    }

    #[test]
    fn alert_classes_append_animation_and_overrides() {
        let class = ALERT.classes(&[AlertVariant::Gradient.pick()], Some("animate-fade-in mt-2"));
        assert_eq!(
            class,
            "relative w-full rounded-xl border p-4 transition-all duration-200 \
             bg-gradient-to-r from-primary/10 to-accent/10 border-primary/20 animate-fade-in mt-2"
        );
    }

    #[test]
    fn percentage_clamps_to_bounds() {
        assert_eq!(percentage(50.0, 100.0), 50.0);
        assert_eq!(percentage(3.0, 4.0), 75.0);
        assert_eq!(percentage(150.0, 100.0), 100.0);
        assert_eq!(percentage(-5.0, 100.0), 0.0);
        assert_eq!(percentage(5.0, 0.0), 0.0);
        assert_eq!(percentage(5.0, -10.0), 0.0);
        assert_eq!(percentage(f64::NAN, 100.0), 0.0);
        assert_eq!(percentage(5.0, f64::NAN), 0.0);
    }

    #[test]
    fn percent_labels_round() {
        assert_eq!(percent_label(66.6), "67%");
        assert_eq!(percent_label(0.0), "0%");
    }

    #[test]
    fn inside_label_is_suppressed_on_small_tracks() {
        assert!(inside_label_visible(true, LabelPosition::Inside, ProgressSize::Default));
        assert!(!inside_label_visible(true, LabelPosition::Inside, ProgressSize::Sm));
        assert!(!inside_label_visible(false, LabelPosition::Inside, ProgressSize::Xl));
        assert!(!inside_label_visible(true, LabelPosition::Outside, ProgressSize::Lg));
    }

    #[test]
    fn fill_classes_include_animation_flag() {
        assert_eq!(
            PROGRESS_FILL.classes(
                &[ProgressVariant::Success.pick(), ("animated", "true")],
                None
            ),
            "h-full transition-all duration-500 ease-out bg-green-500 animate-pulse"
        );
    }

    #[test]
    fn ring_offset_tracks_percentage() {
        let empty = RingGeometry::new(80.0, 8.0, 0.0);
        assert_eq!(empty.radius, 36.0);
        assert_eq!(empty.offset, empty.circumference);

        let half = RingGeometry::new(80.0, 8.0, 50.0);
        assert!((half.offset - half.circumference / 2.0).abs() < 1e-9);

        let full = RingGeometry::new(80.0, 8.0, 100.0);
        assert!(full.offset.abs() < 1e-9);
    }
}
