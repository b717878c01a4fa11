use leptos::*;
use prism_ui::prelude::*;

use crate::{DemoBlock, SectionHeading};

const BUTTON_VARIANTS: [(ButtonVariant, &str); 6] = [
    (ButtonVariant::Default, "Default"),
    (ButtonVariant::Secondary, "Secondary"),
    (ButtonVariant::Outline, "Outline"),
    (ButtonVariant::Ghost, "Ghost"),
    (ButtonVariant::Destructive, "Destructive"),
    (ButtonVariant::Gradient, "Gradient"),
];

const ALERT_VARIANTS: [(AlertVariant, &str, &str); 6] = [
    (AlertVariant::Default, "Heads up", "Component tokens resolve from one catalogue."),
    (AlertVariant::Info, "New release", "Version notes are available in the changelog."),
    (AlertVariant::Success, "Saved", "Your preferences were stored."),
    (AlertVariant::Warning, "Storage almost full", "You have used 90% of your quota."),
    (AlertVariant::Error, "Upload failed", "The server rejected the request."),
    (AlertVariant::Gradient, "Go further", "Upgrade to unlock every layout."),
];

const PROGRESS_VARIANTS: [ProgressVariant; 5] = [
    ProgressVariant::Default,
    ProgressVariant::Success,
    ProgressVariant::Warning,
    ProgressVariant::Error,
    ProgressVariant::Gradient,
];

/// Steps the demo progress value, staying on the 0..=100 track.
pub(crate) fn nudge(value: f64, delta: f64) -> f64 {
    (value + delta).clamp(0.0, 100.0)
}

#[component]
pub(crate) fn ComponentsSection() -> impl IntoView {
    view! {
        <section id="components" class="scroll-mt-32 space-y-8">
            <SectionHeading
                id="components"
                title="Components"
                summary="Buttons, alerts, inputs, uploads, progress, skeletons, dividers and badges."
            />
            <div class="grid gap-6 lg:grid-cols-2">
                <ButtonsDemo />
                <BadgesAndDividersDemo />
            </div>
            <AlertsDemo />
            <div class="grid gap-6 lg:grid-cols-2">
                <InputsDemo />
                <UploadDemo />
            </div>
            <ProgressDemo />
            <SkeletonDemo />
        </section>
    }
}

#[component]
fn ButtonsDemo() -> impl IntoView {
    let clicks = create_rw_signal(0_u32);
    view! {
        <Card title="Buttons" description="Six variants, five sizes, icon slots">
            <div class="space-y-6">
                <DemoBlock title="Variants">
                    <div class="flex flex-wrap gap-2">
                        {BUTTON_VARIANTS
                            .into_iter()
                            .map(|(variant, label)| view! { <Button variant>{label}</Button> })
                            .collect_view()}
                    </div>
                </DemoBlock>
                <DemoBlock title="Sizes">
                    <div class="flex flex-wrap items-center gap-2">
                        <Button size=ButtonSize::Sm>"Small"</Button>
                        <Button>"Default"</Button>
                        <Button size=ButtonSize::Lg>"Large"</Button>
                        <Button size=ButtonSize::Icon aria_label="Add">
                            <Icon icon=IconName::Plus />
                        </Button>
                        <Button size=ButtonSize::IconSm variant=ButtonVariant::Outline aria_label="Remove">
                            <Icon icon=IconName::Minus size=IconSize::Sm />
                        </Button>
                    </div>
                </DemoBlock>
                <DemoBlock title="States">
                    <div class="flex flex-wrap items-center gap-2">
                        <Button
                            leading_icon=IconName::Zap
                            on_click=Callback::new(move |_| clicks.update(|count| *count += 1))
                        >
                            {move || format!("Clicked {} times", clicks.get())}
                        </Button>
                        <Button variant=ButtonVariant::Outline trailing_icon=IconName::ChevronRight>"Continue"</Button>
                        <Button variant=ButtonVariant::Secondary disabled=true>"Disabled"</Button>
                    </div>
                </DemoBlock>
            </div>
        </Card>
    }
}

#[component]
fn BadgesAndDividersDemo() -> impl IntoView {
    view! {
        <Card title="Badges and Dividers">
            <div class="space-y-6">
                <DemoBlock title="Badges">
                    <div class="flex flex-wrap gap-2">
                        <Badge>"Default"</Badge>
                        <Badge variant=BadgeVariant::Secondary>"Secondary"</Badge>
                        <Badge variant=BadgeVariant::Outline>"Outline"</Badge>
                        <Badge variant=BadgeVariant::Success>"Success"</Badge>
                        <Badge variant=BadgeVariant::Warning>"Warning"</Badge>
                        <Badge variant=BadgeVariant::Destructive>"Destructive"</Badge>
                    </div>
                </DemoBlock>
                <DemoBlock title="Dividers">
                    <Divider spacing=DividerSpacing::Sm />
                    <Divider variant=DividerVariant::Gradient spacing=DividerSpacing::Sm />
                    <Divider label="Left" label_position=DividerLabelPosition::Left spacing=DividerSpacing::Sm />
                    <Divider label="Or continue with" />
                    <Divider label="Right" label_position=DividerLabelPosition::Right spacing=DividerSpacing::Sm />
                    <div class="flex h-8 items-center text-sm">
                        <span>"Docs"</span>
                        <Divider orientation=Orientation::Vertical />
                        <span>"Blog"</span>
                        <Divider orientation=Orientation::Vertical spacing=DividerSpacing::Lg />
                        <span>"Support"</span>
                    </div>
                </DemoBlock>
            </div>
        </Card>
    }
}

#[component]
fn AlertsDemo() -> impl IntoView {
    let dismissals = create_rw_signal(0_u32);
    let retries = create_rw_signal(0_u32);

    view! {
        <Card title="Alerts" description="Banner variants, dismissal and inline messages">
            <div class="space-y-6">
                <div class="grid gap-4 md:grid-cols-2">
                    {ALERT_VARIANTS
                        .into_iter()
                        .map(|(variant, title, body)| {
                            view! {
                                <AlertBanner
                                    variant
                                    title
                                    dismissible=true
                                    on_dismiss=Callback::new(move |()| dismissals.update(|count| *count += 1))
                                >
                                    {body}
                                </AlertBanner>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="text-sm text-muted-foreground">
                    {move || format!("Dismissed banners: {}", dismissals.get())}
                </p>
                <AlertBanner
                    variant=AlertVariant::Error
                    title="Connection lost"
                    icon=AlertIcon::Custom(IconName::Zap)
                    action=move || view! {
                        <Button
                            variant=ButtonVariant::Outline
                            size=ButtonSize::Sm
                            on_click=Callback::new(move |_| retries.update(|count| *count += 1))
                        >
                            "Retry"
                        </Button>
                    }
                >
                    {move || format!("Reconnect attempts: {}", retries.get())}
                </AlertBanner>
                <AlertBanner icon=AlertIcon::Hidden>"A banner without an icon."</AlertBanner>
                <div class="grid gap-2 md:grid-cols-2">
                    <InlineAlert variant=InlineAlertVariant::Info>"Sync runs every hour."</InlineAlert>
                    <InlineAlert variant=InlineAlertVariant::Success>"All checks passed."</InlineAlert>
                    <InlineAlert variant=InlineAlertVariant::Warning>"Token expires soon."</InlineAlert>
                    <InlineAlert variant=InlineAlertVariant::Error>"Quota exceeded."</InlineAlert>
                </div>
            </div>
        </Card>
    }
}

#[component]
fn InputsDemo() -> impl IntoView {
    let query = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let quantity = create_rw_signal("1".to_string());

    view! {
        <Card title="Inputs" description="Variants, sizes and specialised fields">
            <div class="space-y-6">
                <DemoBlock title="Variants">
                    <div class="space-y-3">
                        <Input placeholder="Default" left_icon=IconName::User />
                        <Input variant=InputVariant::Filled placeholder="Filled" />
                        <Input variant=InputVariant::Flushed placeholder="Flushed" />
                        <Input variant=InputVariant::Glass placeholder="Glass" right_icon=IconName::Info />
                        <Input size=InputSize::Sm placeholder="Small" />
                        <Input size=InputSize::Xl placeholder="Extra large" />
                        <Input placeholder="Invalid value" error=true />
                    </div>
                </DemoBlock>
                <DemoBlock title="Search">
                    <SearchInput
                        placeholder="Search components..."
                        value=query
                        on_input=Callback::new(move |value| query.set(value))
                        on_clear=Callback::new(move |()| query.set(String::new()))
                    />
                </DemoBlock>
                <DemoBlock title="Password">
                    <PasswordInput
                        placeholder="Create a strong password"
                        value=password
                        on_input=Callback::new(move |value| password.set(value))
                    />
                    <p class="text-xs text-muted-foreground">
                        {move || format!("{} characters", password.with(String::len))}
                    </p>
                </DemoBlock>
                <DemoBlock title="Number">
                    <NumberInput
                        value=quantity
                        min=0.0
                        max=10.0
                        on_change=Callback::new(move |value| quantity.set(value))
                    />
                </DemoBlock>
            </div>
        </Card>
    }
}

#[component]
fn UploadDemo() -> impl IntoView {
    let files = create_rw_signal(Vec::<UploadedFile>::new());
    let documents = create_rw_signal(Vec::<UploadedFile>::new());
    let image_policy = UploadPolicy {
        max_files: 3,
        max_size: 2 * 1024 * 1024,
        ..UploadPolicy::accepting(["image/*", ".pdf"])
    };

    view! {
        <Card title="File Upload" description="Drag and drop with size, type and count limits">
            <div class="space-y-6">
                <FileUpload
                    files=files
                    on_files_change=Callback::new(move |next| files.set(next))
                    policy=image_policy
                />
                <FileUpload
                    files=documents
                    on_files_change=Callback::new(move |next| documents.set(next))
                    variant=FileUploadVariant::Ghost
                    size=FileUploadSize::Sm
                    policy=UploadPolicy { max_files: 1, ..UploadPolicy::default() }
                    error=Signal::derive(move || {
                        documents.with(Vec::is_empty).then(|| "Attach one document.".to_string())
                    })
                />
                <FileUpload files=Signal::derive(Vec::new) variant=FileUploadVariant::Glass disabled=true />
            </div>
        </Card>
    }
}

#[component]
fn ProgressDemo() -> impl IntoView {
    let progress = create_rw_signal(64.0_f64);

    view! {
        <Card title="Progress" description="Linear and circular indicators share one clamp">
            <div class="space-y-6">
                <div class="flex items-center gap-2">
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::IconSm
                        aria_label="Decrease"
                        on_click=Callback::new(move |_| progress.update(|value| *value = nudge(*value, -10.0)))
                    >
                        <Icon icon=IconName::Minus size=IconSize::Sm />
                    </Button>
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::IconSm
                        aria_label="Increase"
                        on_click=Callback::new(move |_| progress.update(|value| *value = nudge(*value, 10.0)))
                    >
                        <Icon icon=IconName::Plus size=IconSize::Sm />
                    </Button>
                    <span class="text-sm text-muted-foreground">{move || format!("{:.0}%", progress.get())}</span>
                </div>
                <div class="grid gap-6 lg:grid-cols-2">
                    <DemoBlock title="Variants">
                        <div class="space-y-4">
                            {PROGRESS_VARIANTS
                                .into_iter()
                                .map(|variant| view! { <ProgressBar value=progress variant show_label=true /> })
                                .collect_view()}
                        </div>
                    </DemoBlock>
                    <DemoBlock title="Sizes and labels">
                        <div class="space-y-4">
                            <ProgressBar value=progress size=ProgressSize::Sm />
                            <ProgressBar value=progress size=ProgressSize::Lg show_label=true label_position=LabelPosition::Top />
                            <ProgressBar
                                value=progress
                                size=ProgressSize::Xl
                                variant=ProgressVariant::Gradient
                                animated=true
                                show_label=true
                                label_position=LabelPosition::Inside
                            />
                            <ProgressBar indeterminate=true />
                        </div>
                    </DemoBlock>
                </div>
                <DemoBlock title="Circular">
                    <div class="flex flex-wrap items-center gap-6">
                        <CircularProgress value=progress />
                        <CircularProgress value=progress size=64 stroke_width=6 variant=ProgressVariant::Success />
                        <CircularProgress value=progress size=96 variant=ProgressVariant::Gradient />
                        <CircularProgress value=progress size=48 stroke_width=4 show_label=false variant=ProgressVariant::Warning />
                    </div>
                </DemoBlock>
            </div>
        </Card>
    }
}

#[component]
fn SkeletonDemo() -> impl IntoView {
    let loading = create_rw_signal(true);

    view! {
        <Card title="Skeletons" description="Placeholders for content that is still loading">
            <div class="space-y-6">
                <Switch
                    checked=loading
                    label="Loading"
                    on_change=Callback::new(move |next| loading.set(next))
                />
                <Show
                    when=move || loading.get()
                    fallback=|| view! {
                        <div class="grid gap-4 md:grid-cols-3">
                            <Card title="Quarterly report" description="Revenue grew 12%">
                                <p class="text-sm">"All regions beat forecast."</p>
                            </Card>
                            <Card title="Team update" description="Two new hires">
                                <p class="text-sm">"Onboarding starts Monday."</p>
                            </Card>
                            <Card title="Roadmap" description="Q3 priorities">
                                <p class="text-sm">"Layouts and navigation."</p>
                            </Card>
                        </div>
                    }
                >
                    <div class="grid gap-4 md:grid-cols-3">
                        <SkeletonCard has_image=true />
                        <SkeletonCard has_avatar=true lines=3 />
                        <div class="space-y-2 rounded-xl border border-border p-4">
                            <SkeletonListItem has_avatar=true has_action=true />
                            <SkeletonListItem has_avatar=true />
                            <SkeletonTableRow columns=3 />
                            <Skeleton variant=SkeletonVariant::Shimmer layout_class="h-10 w-full" />
                        </div>
                    </div>
                    <SkeletonText lines=4 />
                    <div class="flex items-center gap-3">
                        <SkeletonAvatar />
                        <SkeletonAvatar size=prism_ui::SkeletonAvatarSize::Xl />
                    </div>
                </Show>
            </div>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nudging_stays_on_the_track() {
        assert_eq!(nudge(95.0, 10.0), 100.0);
        assert_eq!(nudge(5.0, -10.0), 0.0);
        assert_eq!(nudge(40.0, 10.0), 50.0);
    }
}
