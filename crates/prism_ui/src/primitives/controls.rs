use web_sys::{DragEvent, HtmlInputElement};

use super::*;
use crate::upload::{
    format_file_size, remove_at, select_files, FileKind, FileMeta, RejectedFile, UploadPolicy,
};

token_enum! {
    /// Button treatments.
    pub enum ButtonVariant in "variant" {
        /// Solid primary.
        Default => "default",
        /// Solid secondary.
        Secondary => "secondary",
        /// Bordered, transparent fill.
        Outline => "outline",
        /// No chrome until hovered.
        Ghost => "ghost",
        /// Destructive action.
        Destructive => "destructive",
        /// Primary-to-accent gradient.
        Gradient => "gradient",
    }
    default = Default;
}

token_enum! {
    /// Button dimensions.
    pub enum ButtonSize in "size" {
        /// Dense.
        Sm => "sm",
        /// Standard.
        Default => "default",
        /// Large.
        Lg => "lg",
        /// Square icon button.
        Icon => "icon",
        /// Small square icon button.
        IconSm => "icon-sm",
    }
    default = Default;
}

pub(crate) const BUTTON: VariantSpec = VariantSpec {
    base: "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-lg text-sm font-medium ring-offset-background transition-all duration-200 focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 disabled:pointer-events-none disabled:opacity-50",
    groups: &[
        VariantGroup {
            name: "variant",
            options: &[
                ("default", "bg-primary text-primary-foreground hover:bg-primary/90"),
                ("secondary", "bg-secondary text-secondary-foreground hover:bg-secondary/80"),
                (
                    "outline",
                    "border border-input bg-background hover:bg-accent hover:text-accent-foreground",
                ),
                ("ghost", "hover:bg-accent hover:text-accent-foreground"),
                (
                    "destructive",
                    "bg-destructive text-destructive-foreground hover:bg-destructive/90",
                ),
                (
                    "gradient",
                    "bg-gradient-to-r from-primary to-accent text-white shadow-md hover:opacity-90",
                ),
            ],
            default: "default",
        },
        VariantGroup {
            name: "size",
            options: &[
                ("sm", "h-9 px-3"),
                ("default", "h-10 px-4 py-2"),
                ("lg", "h-11 px-8 text-base"),
                ("icon", "h-10 w-10"),
                ("icon-sm", "h-8 w-8"),
            ],
            default: "default",
        },
    ],
    compounds: &[],
};

#[component]
/// Action button with optional leading and trailing icons.
pub fn Button(
    #[prop(default = ButtonVariant::Default)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Default)] size: ButtonSize,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] trailing_icon: Option<IconName>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <button
            type=button_type
            class=BUTTON.classes(&[variant.pick(), size.pick()], layout_class)
            aria-label=aria_label
            title=title
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {leading_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            {children.map(|children| children())}
            {trailing_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
        </button>
    }
}

token_enum! {
    /// Text field treatments.
    pub enum InputVariant in "variant" {
        /// Bordered with focus ring.
        Default => "default",
        /// Muted fill, no border.
        Filled => "filled",
        /// Bottom border only.
        Flushed => "flushed",
        /// No chrome.
        Unstyled => "unstyled",
        /// Frosted translucent surface.
        Glass => "glass",
    }
    default = Default;
}

token_enum! {
    /// Text field heights.
    pub enum InputSize in "size" {
        /// 36px.
        Sm => "sm",
        /// 40px.
        Default => "default",
        /// 44px.
        Lg => "lg",
        /// 48px.
        Xl => "xl",
    }
    default = Default;
}

pub(crate) const INPUT: VariantSpec = VariantSpec {
    base: "flex w-full rounded-lg border bg-background text-sm transition-all duration-200 file:border-0 file:bg-transparent file:text-sm file:font-medium file:text-foreground placeholder:text-muted-foreground focus-visible:outline-none disabled:cursor-not-allowed disabled:opacity-50",
    groups: &[
        VariantGroup {
            name: "variant",
            options: &[
                (
                    "default",
                    "border-input ring-offset-background focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2",
                ),
                (
                    "filled",
                    "border-transparent bg-muted focus-visible:bg-background focus-visible:ring-2 focus-visible:ring-ring",
                ),
                (
                    "flushed",
                    "rounded-none border-0 border-b-2 border-input px-0 focus-visible:border-primary",
                ),
                ("unstyled", "border-0 bg-transparent p-0 focus-visible:ring-0"),
                (
                    "glass",
                    "border-white/20 bg-white/10 backdrop-blur-md focus-visible:bg-white/20 focus-visible:ring-2 focus-visible:ring-white/30",
                ),
            ],
            default: "default",
        },
        VariantGroup {
            name: "size",
            options: &[
                ("sm", "h-9 px-3 text-xs"),
                ("default", "h-10 px-4"),
                ("lg", "h-11 px-5 text-base"),
                ("xl", "h-12 px-6 text-base"),
            ],
            default: "default",
        },
    ],
    compounds: &[],
};

const ERROR_CLASSES: &str = "border-destructive focus-visible:ring-destructive";
const ADORNMENT_BUTTON: &str =
    "absolute right-3 text-muted-foreground transition-colors hover:text-foreground";
const STEPPER_BUTTON: &str = "absolute flex h-8 w-8 items-center justify-center rounded-md text-muted-foreground transition-colors hover:bg-muted hover:text-foreground";

pub(crate) fn input_class(
    variant: InputVariant,
    size: InputSize,
    extra: &str,
    error: bool,
    layout_class: Option<&str>,
) -> String {
    let overrides = merge_classes([
        layout_class.unwrap_or_default(),
        extra,
        class_if(error, ERROR_CLASSES),
    ]);
    INPUT.classes(&[variant.pick(), size.pick()], Some(&overrides))
}

#[component]
/// Text field with optional icon adornments.
pub fn Input(
    #[prop(default = InputVariant::Default)] variant: InputVariant,
    #[prop(default = InputSize::Default)] size: InputSize,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] error: MaybeSignal<bool>,
    #[prop(optional)] left_icon: Option<IconName>,
    #[prop(optional)] right_icon: Option<IconName>,
    #[prop(optional)] on_input: Option<Callback<String>>,
) -> impl IntoView {
    let extra = merge_classes([
        class_if(left_icon.is_some(), "pl-10"),
        class_if(right_icon.is_some(), "pr-10"),
    ]);
    let input = view! {
        <input
            type=input_type
            class=move || input_class(variant, size, &extra, error.get(), layout_class)
            id=id
            name=name
            placeholder=placeholder
            aria-label=aria_label
            autocomplete=autocomplete
            aria-invalid=move || bool_token(error.get())
            prop:value=move || value.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="input"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(event_target_value(&ev));
                }
            }
        />
    };

    if left_icon.is_none() && right_icon.is_none() {
        return input.into_view();
    }
    view! {
        <div class="relative flex items-center">
            {left_icon.map(|icon| view! {
                <div class="pointer-events-none absolute left-3 text-muted-foreground">
                    <Icon icon size=IconSize::Sm />
                </div>
            })}
            {input}
            {right_icon.map(|icon| view! {
                <div class="absolute right-3 text-muted-foreground">
                    <Icon icon size=IconSize::Sm />
                </div>
            })}
        </div>
    }
    .into_view()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Whether a password field shows its value.
pub enum PasswordVisibility {
    /// Characters are masked.
    #[default]
    Masked,
    /// Characters are shown.
    Plain,
}

impl PasswordVisibility {
    /// State after one toggle click.
    pub fn toggled(self) -> Self {
        match self {
            Self::Masked => Self::Plain,
            Self::Plain => Self::Masked,
        }
    }

    /// Native input type for this state.
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Masked => "password",
            Self::Plain => "text",
        }
    }

    /// Icon on the toggle: the action the next click performs.
    pub fn toggle_icon(self) -> IconName {
        match self {
            Self::Masked => IconName::Eye,
            Self::Plain => IconName::EyeOff,
        }
    }

    fn toggle_label(self) -> &'static str {
        match self {
            Self::Masked => "Show password",
            Self::Plain => "Hide password",
        }
    }
}

#[component]
/// Password field with a show/hide toggle.
pub fn PasswordInput(
    #[prop(default = InputVariant::Default)] variant: InputVariant,
    #[prop(default = InputSize::Default)] size: InputSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] error: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<String>>,
) -> impl IntoView {
    let visibility = create_rw_signal(PasswordVisibility::Masked);
    view! {
        <div class="relative flex items-center" data-ui-primitive="true" data-ui-kind="password-input">
            <input
                type=move || visibility.get().input_type()
                class=move || input_class(variant, size, "pr-10", error.get(), layout_class)
                id=id
                placeholder=placeholder
                autocomplete="current-password"
                aria-invalid=move || bool_token(error.get())
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| {
                    if let Some(on_input) = on_input.as_ref() {
                        on_input.call(event_target_value(&ev));
                    }
                }
            />
            <button
                type="button"
                class=ADORNMENT_BUTTON
                tabindex="-1"
                aria-label=move || visibility.get().toggle_label()
                data-ui-slot="visibility-toggle"
                on:click=move |_| visibility.update(|state| *state = state.toggled())
            >
                {move || view! { <Icon icon=visibility.get().toggle_icon() size=IconSize::Sm /> }}
            </button>
        </div>
    }
}

/// Whether the search clear button shows: it needs text to clear and a handler.
pub fn clear_visible(value: &str, has_clear_handler: bool) -> bool {
    has_clear_handler && !value.is_empty()
}

#[component]
/// Search field with a leading magnifier and an optional clear button.
pub fn SearchInput(
    #[prop(default = InputVariant::Default)] variant: InputVariant,
    #[prop(default = InputSize::Default)] size: InputSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional)] on_clear: Option<Callback<()>>,
) -> impl IntoView {
    let value = Signal::derive(move || value.get());
    let show_clear =
        Signal::derive(move || value.with(|value| clear_visible(value, on_clear.is_some())));
    view! {
        <div class="relative flex items-center" data-ui-primitive="true" data-ui-kind="search-input">
            <span class="pointer-events-none absolute left-3 text-muted-foreground">
                <Icon icon=IconName::Search size=IconSize::Sm />
            </span>
            <input
                type="search"
                class=move || {
                    let extra = merge_classes(["pl-10", class_if(show_clear.get(), "pr-10")]);
                    input_class(variant, size, &extra, false, layout_class)
                }
                placeholder=placeholder
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| {
                    if let Some(on_input) = on_input.as_ref() {
                        on_input.call(event_target_value(&ev));
                    }
                }
            />
            <Show when=move || show_clear.get() fallback=|| ()>
                <button
                    type="button"
                    class=ADORNMENT_BUTTON
                    tabindex="-1"
                    aria-label="Clear search"
                    data-ui-slot="clear"
                    on:click=move |_| {
                        if let Some(on_clear) = on_clear {
                            on_clear.call(());
                        }
                    }
                >
                    <Icon icon=IconName::Dismiss size=IconSize::Sm />
                </button>
            </Show>
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Stepper button direction.
pub enum StepDirection {
    /// Decrement by one step, floored at `min`.
    Down,
    /// Increment by one step, capped at `max`.
    Up,
}

/// Applies one stepper click to the field's current text.
///
/// Text that does not parse as a number counts as 0. Incrementing clamps only
/// to `max` and decrementing only to `min`.
pub fn step_value(
    current: &str,
    direction: StepDirection,
    step: f64,
    min: Option<f64>,
    max: Option<f64>,
) -> f64 {
    let current = current
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0);
    match direction {
        StepDirection::Up => {
            let next = current + step;
            max.map_or(next, |max| next.min(max))
        }
        StepDirection::Down => {
            let next = current - step;
            min.map_or(next, |min| next.max(min))
        }
    }
}

#[component]
/// Numeric field with decrement and increment buttons.
pub fn NumberInput(
    #[prop(default = InputVariant::Default)] variant: InputVariant,
    #[prop(default = InputSize::Default)] size: InputSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] min: Option<f64>,
    #[prop(optional)] max: Option<f64>,
    #[prop(default = 1.0)] step: f64,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_change: Option<Callback<String>>,
) -> impl IntoView {
    let value = Signal::derive(move || value.get());
    let emit = move |next: String| {
        if let Some(on_change) = on_change {
            on_change.call(next);
        }
    };
    let step_by = move |direction: StepDirection| {
        let next = value.with_untracked(|current| step_value(current, direction, step, min, max));
        emit(next.to_string());
    };
    let extra = "px-10 text-center [appearance:textfield] [&::-webkit-inner-spin-button]:appearance-none [&::-webkit-outer-spin-button]:appearance-none";

    view! {
        <div class="relative flex items-center" data-ui-primitive="true" data-ui-kind="number-input">
            <button
                type="button"
                class=merge_classes([STEPPER_BUTTON, "left-1"])
                tabindex="-1"
                aria-label="Decrease"
                disabled=move || disabled.get()
                on:click=move |_| step_by(StepDirection::Down)
            >
                "-"
            </button>
            <input
                type="number"
                class=input_class(variant, size, extra, false, layout_class)
                id=id
                min=min
                max=max
                step=step
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| emit(event_target_value(&ev))
            />
            <button
                type="button"
                class=merge_classes([STEPPER_BUTTON, "right-1"])
                tabindex="-1"
                aria-label="Increase"
                disabled=move || disabled.get()
                on:click=move |_| step_by(StepDirection::Up)
            >
                "+"
            </button>
        </div>
    }
}

#[component]
/// On/off toggle rendered as an ARIA switch.
pub fn Switch(
    #[prop(into)] checked: MaybeSignal<bool>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_change: Option<Callback<bool>>,
) -> impl IntoView {
    view! {
        <label
            class=merge_classes(["inline-flex items-center gap-3 text-sm", layout_class.unwrap_or_default()])
            data-ui-primitive="true"
            data-ui-kind="switch"
        >
            <button
                type="button"
                role="switch"
                aria-checked=move || bool_token(checked.get())
                disabled=move || disabled.get()
                class=move || {
                    merge_classes([
                        "relative inline-flex h-6 w-11 shrink-0 items-center rounded-full transition-colors duration-200 disabled:cursor-not-allowed disabled:opacity-50",
                        if checked.get() { "bg-primary" } else { "bg-input" },
                    ])
                }
                on:click=move |_| {
                    if let Some(on_change) = on_change.as_ref() {
                        on_change.call(!checked.get_untracked());
                    }
                }
            >
                <span class=move || {
                    merge_classes([
                        "pointer-events-none block h-5 w-5 rounded-full bg-background shadow-lg transition-transform duration-200",
                        if checked.get() { "translate-x-5" } else { "translate-x-0.5" },
                    ])
                }></span>
            </button>
            {label.map(|label| view! { <span>{label}</span> })}
        </label>
    }
}

#[component]
/// Labeled checkbox.
pub fn Checkbox(
    #[prop(into)] checked: MaybeSignal<bool>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_change: Option<Callback<bool>>,
) -> impl IntoView {
    view! {
        <label
            class=merge_classes(["inline-flex items-center gap-2 text-sm", layout_class.unwrap_or_default()])
            data-ui-primitive="true"
            data-ui-kind="checkbox"
        >
            <input
                type="checkbox"
                id=id
                class="h-4 w-4 rounded border-input accent-primary"
                prop:checked=move || checked.get()
                disabled=move || disabled.get()
                on:change=move |ev| {
                    if let Some(on_change) = on_change.as_ref() {
                        on_change.call(event_target_checked(&ev));
                    }
                }
            />
            {label.map(|label| view! { <span>{label}</span> })}
        </label>
    }
}

token_enum! {
    /// Drop zone treatments.
    pub enum FileUploadVariant in "variant" {
        /// Dashed border on a muted fill.
        Default => "default",
        /// Borderless until hovered.
        Ghost => "ghost",
        /// Frosted translucent surface.
        Glass => "glass",
    }
    default = Default;
}

token_enum! {
    /// Drop zone heights.
    pub enum FileUploadSize in "size" {
        /// 120px minimum.
        Sm => "sm",
        /// 160px minimum.
        Default => "default",
        /// 200px minimum.
        Lg => "lg",
    }
    default = Default;
}

pub(crate) const FILE_UPLOAD: VariantSpec = VariantSpec {
    base: "relative flex cursor-pointer flex-col items-center justify-center rounded-xl border-2 border-dashed transition-all duration-200",
    groups: &[
        VariantGroup {
            name: "variant",
            options: &[
                ("default", "border-input bg-muted/30 hover:border-primary hover:bg-primary/5"),
                ("ghost", "border-transparent hover:border-input hover:bg-muted/50"),
                ("glass", "border-white/20 bg-white/5 backdrop-blur-md hover:bg-white/10"),
            ],
            default: "default",
        },
        VariantGroup {
            name: "size",
            options: &[
                ("sm", "min-h-[120px] p-4"),
                ("default", "min-h-[160px] p-6"),
                ("lg", "min-h-[200px] p-8"),
            ],
            default: "default",
        },
    ],
    compounds: &[],
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// A file held by the upload control.
pub struct UploadedFile {
    /// File name.
    pub name: String,
    /// MIME type reported by the browser.
    pub mime_type: String,
    /// Size in bytes.
    pub size: u64,
    /// Browser handle; absent for metadata-only entries.
    pub handle: Option<web_sys::File>,
}

impl UploadedFile {
    /// Metadata-only entry.
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
            handle: None,
        }
    }

    /// Wraps a browser file handle.
    pub fn from_file(file: web_sys::File) -> Self {
        Self {
            name: file.name(),
            mime_type: file.type_(),
            size: file.size() as u64,
            handle: Some(file),
        }
    }

    /// Preview category.
    pub fn kind(&self) -> FileKind {
        FileKind::of(&self.mime_type)
    }

    fn thumbnail_url(&self) -> Option<String> {
        if self.kind() != FileKind::Image {
            return None;
        }
        let handle = self.handle.as_ref()?;
        web_sys::Url::create_object_url_with_blob(handle).ok()
    }
}

impl FileMeta for UploadedFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }

    fn size(&self) -> u64 {
        self.size
    }
}

fn files_from_list(list: &web_sys::FileList) -> Vec<UploadedFile> {
    (0..list.length())
        .filter_map(|index| list.get(index))
        .map(UploadedFile::from_file)
        .collect()
}

#[component]
/// Drag-and-drop file picker with validation, previews and per-file rejection reasons.
///
/// The control is controlled: `files` is the current selection and every
/// change is reported through `on_files_change`.
pub fn FileUpload(
    #[prop(into)] files: Signal<Vec<UploadedFile>>,
    #[prop(optional)] on_files_change: Option<Callback<Vec<UploadedFile>>>,
    #[prop(default = FileUploadVariant::Default)] variant: FileUploadVariant,
    #[prop(default = FileUploadSize::Default)] size: FileUploadSize,
    #[prop(optional)] policy: UploadPolicy,
    #[prop(default = true)] preview: bool,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let error = Signal::derive(move || error.get());
    let dragging = create_rw_signal(false);
    let rejected = create_rw_signal(Vec::<RejectedFile<UploadedFile>>::new());
    let input_ref = create_node_ref::<html::Input>();
    let summary = policy.summary();
    let accept = policy.accept_attribute();
    let multiple = policy.allows_multiple();
    let policy = store_value(policy);

    let commit = move |selection: Vec<UploadedFile>| {
        if let Some(on_files_change) = on_files_change {
            on_files_change.call(selection);
        }
    };
    let take_files = move |candidates: Vec<UploadedFile>| {
        let current = files.get_untracked();
        let outcome = policy.with_value(|policy| select_files(&current, candidates, policy));
        rejected.set(outcome.rejected);
        commit(outcome.selection);
    };

    let zone_class = move || {
        let extras = merge_classes([
            layout_class.unwrap_or_default(),
            class_if(dragging.get(), "scale-[1.02] border-primary bg-primary/10"),
            class_if(error.with(Option::is_some), "border-destructive"),
            class_if(disabled.get(), "cursor-not-allowed opacity-50"),
        ]);
        FILE_UPLOAD.classes(&[variant.pick(), size.pick()], Some(&extras))
    };

    view! {
        <div class="space-y-3" data-ui-primitive="true" data-ui-kind="file-upload">
            <div
                class=zone_class
                data-ui-slot="dropzone"
                data-ui-variant=variant.token()
                data-ui-size=size.token()
                data-ui-state=move || if dragging.get() { "dragging" } else { "idle" }
                on:dragenter=move |ev: DragEvent| {
                    ev.prevent_default();
                    ev.stop_propagation();
                    if !disabled.get_untracked() {
                        dragging.set(true);
                    }
                }
                on:dragleave=move |ev: DragEvent| {
                    ev.prevent_default();
                    ev.stop_propagation();
                    dragging.set(false);
                }
                on:dragover=move |ev: DragEvent| {
                    ev.prevent_default();
                    ev.stop_propagation();
                }
                on:drop=move |ev: DragEvent| {
                    ev.prevent_default();
                    ev.stop_propagation();
                    dragging.set(false);
                    if disabled.get_untracked() {
                        return;
                    }
                    if let Some(list) = ev.data_transfer().and_then(|transfer| transfer.files()) {
                        take_files(files_from_list(&list));
                    }
                }
                on:click=move |_| {
                    if disabled.get_untracked() {
                        return;
                    }
                    if let Some(input) = input_ref.get() {
                        input.click();
                    }
                }
            >
                <input
                    node_ref=input_ref
                    type="file"
                    class="hidden"
                    multiple=multiple
                    accept=accept
                    disabled=move || disabled.get()
                    on:change=move |ev| {
                        let input = event_target::<HtmlInputElement>(&ev);
                        if let Some(list) = input.files() {
                            take_files(files_from_list(&list));
                        }
                        input.set_value("");
                    }
                />
                <div class="pointer-events-none flex flex-col items-center gap-2 text-center">
                    <div class="rounded-full bg-primary/10 p-3 text-primary">
                        <Icon icon=IconName::Upload size=IconSize::Lg />
                    </div>
                    <div>
                        <p class="text-sm font-medium text-foreground">
                            "Drop files here or click to upload"
                        </p>
                        <p class="mt-1 text-xs text-muted-foreground">{summary}</p>
                    </div>
                </div>
            </div>

            {preview.then(|| view! {
                <Show when=move || files.with(|files| !files.is_empty()) fallback=|| ()>
                    <div class="animate-fade-in space-y-2" data-ui-slot="previews">
                        {move || {
                            files
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(index, file)| view! {
                                    <FilePreviewRow
                                        file
                                        on_remove=Callback::new(move |_| {
                                            commit(remove_at(&files.get_untracked(), index));
                                        })
                                    />
                                })
                                .collect_view()
                        }}
                    </div>
                </Show>
            })}

            <Show when=move || rejected.with(|rejected| !rejected.is_empty()) fallback=|| ()>
                <ul class="space-y-1 text-xs text-destructive" data-ui-slot="rejections">
                    {move || {
                        rejected
                            .get()
                            .into_iter()
                            .map(|rejection| view! {
                                <li>{format!("{}: {}", rejection.file.name, rejection.reason)}</li>
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>

            {move || error.get().map(|error| view! {
                <p class="animate-fade-in text-sm text-destructive">{error}</p>
            })}
        </div>
    }
}

#[component]
fn FilePreviewRow(file: UploadedFile, on_remove: Callback<()>) -> impl IntoView {
    let thumbnail = file.thumbnail_url();
    if let Some(url) = thumbnail.clone() {
        on_cleanup(move || {
            let _ = web_sys::Url::revoke_object_url(&url);
        });
    }
    let icon = file.kind().icon();

    view! {
        <div class="group flex items-center gap-3 rounded-lg border border-border bg-card p-3">
            {match thumbnail {
                Some(url) => view! {
                    <img src=url alt=file.name.clone() class="h-10 w-10 rounded object-cover" />
                }
                .into_view(),
                None => view! {
                    <div class="flex h-10 w-10 items-center justify-center rounded bg-muted text-muted-foreground">
                        <Icon icon />
                    </div>
                }
                .into_view(),
            }}
            <div class="min-w-0 flex-1">
                <p class="truncate text-sm font-medium">{file.name.clone()}</p>
                <p class="text-xs text-muted-foreground">{format_file_size(file.size)}</p>
            </div>
            <Button
                variant=ButtonVariant::Ghost
                size=ButtonSize::IconSm
                layout_class="opacity-0 transition-opacity group-hover:opacity-100"
                aria_label=format!("Remove {}", file.name)
                on_click=Callback::new(move |ev: MouseEvent| {
                    ev.stop_propagation();
                    on_remove.call(());
                })
            >
                <Icon icon=IconName::Dismiss size=IconSize::Sm />
            </Button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn password_visibility_alternates_per_toggle() {
        let mut state = PasswordVisibility::default();
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(state.input_type());
            state = state.toggled();
        }
        assert_eq!(seen, vec!["password", "text", "password", "text"]);
        assert_eq!(PasswordVisibility::Masked.toggle_icon(), IconName::Eye);
        assert_eq!(PasswordVisibility::Plain.toggle_icon(), IconName::EyeOff);
    }

    #[test]
    fn stepper_treats_non_numeric_text_as_zero() {
        assert_eq!(step_value("", StepDirection::Up, 1.0, None, None), 1.0);
        assert_eq!(step_value("abc", StepDirection::Down, 2.0, None, None), -2.0);
        assert_eq!(step_value(" 4 ", StepDirection::Up, 0.5, None, None), 4.5);
    }

    #[test]
    fn stepper_clamps_in_the_direction_of_travel() {
        assert_eq!(step_value("9", StepDirection::Up, 5.0, Some(0.0), Some(10.0)), 10.0);
        assert_eq!(step_value("1", StepDirection::Down, 5.0, Some(0.0), Some(10.0)), 0.0);
        assert_eq!(step_value("-20", StepDirection::Up, 1.0, Some(0.0), Some(10.0)), -19.0);
        assert_eq!(step_value("20", StepDirection::Down, 1.0, Some(0.0), Some(10.0)), 19.0);
    }

    #[test]
    fn clear_button_needs_text_and_handler() {
        assert!(clear_visible("query", true));
        assert!(!clear_visible("", true));
        assert!(!clear_visible("query", false));
    }

    #[test]
    fn input_error_classes_follow_overrides() {
        assert_eq!(
            input_class(InputVariant::Unstyled, InputSize::Sm, "pl-10", true, Some("w-64")),
            format!(
                "{} border-0 bg-transparent p-0 focus-visible:ring-0 h-9 px-3 text-xs w-64 pl-10 {ERROR_CLASSES}",
                INPUT.base
            )
        );
    }

    #[test]
    fn button_resolves_variant_and_size() {
        let class = BUTTON.classes(
            &[ButtonVariant::Ghost.pick(), ButtonSize::IconSm.pick()],
            Some("ml-auto"),
        );
        assert!(class.ends_with("hover:bg-accent hover:text-accent-foreground h-8 w-8 ml-auto"));
    }

    #[test]
    fn uploaded_files_satisfy_the_selection_filter() {
        let policy = UploadPolicy::accepting(["image/*"]);
        let outcome = select_files(
            &[],
            vec![
                UploadedFile::new("cat.png", "image/png", 2048),
                UploadedFile::new("notes.txt", "text/plain", 10),
            ],
            &policy,
        );
        assert_eq!(outcome.selection.len(), 1);
        assert_eq!(outcome.selection[0].kind(), FileKind::Image);
        assert_eq!(outcome.rejected[0].file.name, "notes.txt");
    }
}
