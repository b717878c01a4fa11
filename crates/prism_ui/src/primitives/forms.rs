use super::*;

const ERROR_GLYPH: &str = "M18 10a8 8 0 11-16 0 8 8 0 0116 0zm-7 4a1 1 0 11-2 0 1 1 0 012 0zm-1-9a1 1 0 00-1 1v4a1 1 0 102 0V6a1 1 0 00-1-1z";

#[component]
/// Vertical stack for one label, control and message.
pub fn FormGroup(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_classes(["space-y-2", layout_class.unwrap_or_default()])
            data-ui-primitive="true"
            data-ui-kind="form-group"
        >
            {children()}
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Trailing marker on a form label.
pub enum LabelMarker {
    /// No marker.
    #[default]
    None,
    /// Red asterisk.
    Required,
    /// Muted `(optional)` note.
    Optional,
}

#[component]
/// Field label with an optional required or optional marker.
pub fn FormLabel(
    #[prop(optional, into)] for_id: Option<String>,
    #[prop(optional)] marker: LabelMarker,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <label
            for=for_id
            class=merge_classes(["flex items-center gap-1 text-sm font-medium leading-none", layout_class.unwrap_or_default()])
            data-ui-primitive="true"
            data-ui-kind="form-label"
        >
            {children()}
            {match marker {
                LabelMarker::None => ().into_view(),
                LabelMarker::Required => view! {
                    <span class="text-destructive" aria-hidden="true">"*"</span>
                }
                .into_view(),
                LabelMarker::Optional => view! {
                    <span class="text-xs font-normal text-muted-foreground">"(optional)"</span>
                }
                .into_view(),
            }}
        </label>
    }
}

#[component]
/// Validation message; renders nothing while `message` is empty.
pub fn FormError(
    #[prop(optional, into)] message: MaybeSignal<Option<String>>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let class = merge_classes([
        "flex animate-fade-in items-center gap-1.5 text-sm text-destructive",
        layout_class.unwrap_or_default(),
    ]);
    move || {
        message
            .get()
            .filter(|message| !message.is_empty())
            .map(|message| view! {
                <p class=class.clone() role="alert" data-ui-primitive="true" data-ui-kind="form-error">
                    <svg class="h-3.5 w-3.5 shrink-0" fill="currentColor" viewBox="0 0 20 20" aria-hidden="true">
                        <path fill-rule="evenodd" clip-rule="evenodd" d=ERROR_GLYPH></path>
                    </svg>
                    {message}
                </p>
            })
    }
}

#[component]
/// Muted hint under a control.
pub fn FormHelperText(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <p
            class=merge_classes(["text-sm text-muted-foreground", layout_class.unwrap_or_default()])
            data-ui-primitive="true"
            data-ui-kind="form-helper-text"
        >
            {children()}
        </p>
    }
}

#[component]
/// Bordered form section with an optional heading.
pub fn FormCard(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let has_header = title.is_some() || description.is_some();
    view! {
        <div
            class=merge_classes(["rounded-xl border border-border bg-card p-6 shadow-sm", layout_class.unwrap_or_default()])
            data-ui-primitive="true"
            data-ui-kind="form-card"
        >
            {has_header.then(|| view! {
                <div class="mb-6">
                    {title.map(|title| view! { <h3 class="text-lg font-semibold text-foreground">{title}</h3> })}
                    {description.map(|description| view! {
                        <p class="mt-1 text-sm text-muted-foreground">{description}</p>
                    })}
                </div>
            })}
            <div class="space-y-4">{children()}</div>
        </div>
    }
}

token_enum! {
    /// Column count of a form row at its widest breakpoint.
    pub enum FormColumns in "columns" {
        /// Two columns from `sm`.
        Two => "2",
        /// Three columns from `lg`.
        Three => "3",
        /// Four columns from `lg`.
        Four => "4",
    }
    default = Two;
}

pub(crate) const FORM_ROW: VariantSpec = VariantSpec {
    base: "grid gap-4",
    groups: &[VariantGroup {
        name: "columns",
        options: &[
            ("2", "grid-cols-1 sm:grid-cols-2"),
            ("3", "grid-cols-1 sm:grid-cols-2 lg:grid-cols-3"),
            ("4", "grid-cols-1 sm:grid-cols-2 lg:grid-cols-4"),
        ],
        default: "2",
    }],
    compounds: &[],
};

#[component]
/// Responsive grid of fields.
pub fn FormRow(
    #[prop(default = FormColumns::Two)] columns: FormColumns,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=FORM_ROW.classes(&[columns.pick()], layout_class)
            data-ui-primitive="true"
            data-ui-kind="form-row"
            data-ui-columns=columns.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Section separator inside a form, optionally with a centered caption.
pub fn FormDivider(
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let layout_class = layout_class.unwrap_or_default();
    match label {
        Some(label) => view! {
            <div
                class=merge_classes(["relative my-6", layout_class])
                role="separator"
                data-ui-primitive="true"
                data-ui-kind="form-divider"
            >
                <div class="absolute inset-0 flex items-center">
                    <span class="w-full border-t border-border"></span>
                </div>
                <div class="relative flex justify-center text-xs uppercase">
                    <span class="bg-background px-2 text-muted-foreground">{label}</span>
                </div>
            </div>
        }
        .into_view(),
        None => view! {
            <div
                class=merge_classes(["my-6 border-t border-border", layout_class])
                role="separator"
                data-ui-primitive="true"
                data-ui-kind="form-divider"
            ></div>
        }
        .into_view(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn form_rows_collapse_to_one_column() {
        for columns in [FormColumns::Two, FormColumns::Three, FormColumns::Four] {
            let class = FORM_ROW.classes(&[columns.pick()], None);
            assert!(class.starts_with("grid gap-4 grid-cols-1 sm:grid-cols-2"), "{class}");
        }
        assert_eq!(
            FORM_ROW.classes(&[FormColumns::Four.pick()], Some("mt-2")),
            "grid gap-4 grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 mt-2"
        );
    }
}
