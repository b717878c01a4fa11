use leptos::*;
use prism_ui::prelude::*;

use crate::{DemoBlock, SectionHeading};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeTone {
    Neutral,
    Primary,
    Success,
    Warning,
    Error,
}

impl NodeTone {
    fn class(self) -> &'static str {
        match self {
            Self::Neutral => "bg-card border-border",
            Self::Primary => "bg-primary/10 border-primary",
            Self::Success => "bg-green-500/10 border-green-500",
            Self::Warning => "bg-yellow-500/10 border-yellow-500",
            Self::Error => "bg-red-500/10 border-red-500",
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct FlowStep {
    title: &'static str,
    icon: IconName,
    tone: NodeTone,
}

const fn step(title: &'static str, icon: IconName, tone: NodeTone) -> FlowStep {
    FlowStep { title, icon, tone }
}

const REQUEST_PATH: [FlowStep; 4] = [
    step("Component", IconName::Home, NodeTone::Primary),
    step("API Service", IconName::Zap, NodeTone::Neutral),
    step("Fetch Wrapper", IconName::FileText, NodeTone::Neutral),
    step("Backend API", IconName::BarChart, NodeTone::Success),
];

const RESPONSE_PATH: [FlowStep; 4] = [
    step("Response", IconName::CheckCircle, NodeTone::Success),
    step("Transform", IconName::Zap, NodeTone::Neutral),
    step("State Update", IconName::BarChart, NodeTone::Neutral),
    step("UI Render", IconName::Eye, NodeTone::Primary),
];

const STATE_PATH: [FlowStep; 4] = [
    step("UI Layer", IconName::Eye, NodeTone::Neutral),
    step("Store", IconName::Zap, NodeTone::Primary),
    step("State", IconName::BarChart, NodeTone::Neutral),
    step("Re-render", IconName::Eye, NodeTone::Success),
];

#[derive(Debug, Clone, Copy)]
struct ErrorPolicy {
    title: &'static str,
    icon: IconName,
    summary: &'static str,
    outcomes: &'static [&'static str],
    badge: BadgeVariant,
}

const ERROR_POLICIES: [ErrorPolicy; 3] = [
    ErrorPolicy {
        title: "Network Error",
        icon: IconName::AlertCircle,
        summary: "Retry with exponential backoff (3 attempts)",
        outcomes: &["Retry 1", "Retry 2", "Retry 3"],
        badge: BadgeVariant::Outline,
    },
    ErrorPolicy {
        title: "4xx Errors",
        icon: IconName::Dismiss,
        summary: "Client errors, display the message to the user",
        outcomes: &["Show Toast"],
        badge: BadgeVariant::Destructive,
    },
    ErrorPolicy {
        title: "5xx Errors",
        icon: IconName::AlertTriangle,
        summary: "Server errors, retry then show the error page",
        outcomes: &["Error Page"],
        badge: BadgeVariant::Destructive,
    },
];

const ENDPOINTS: [(&str, &str); 4] = [
    ("GET", "/users"),
    ("POST", "/users"),
    ("PUT", "/users/:id"),
    ("DELETE", "/users/:id"),
];

const RESPONSE_ENVELOPE: &str = r#"{
  "success": true,
  "data": { ... },
  "meta": { "page": 1, "total": 100 },
  "error": null
}"#;

#[derive(Debug, Clone, Copy)]
struct StoreBlueprint {
    name: &'static str,
    icon: IconName,
    state: &'static str,
    actions: &'static [&'static str],
}

const STORES: [StoreBlueprint; 5] = [
    StoreBlueprint {
        name: "User Store",
        icon: IconName::Users,
        state: "user, isAuthenticated, loading",
        actions: &["login", "logout", "updateProfile"],
    },
    StoreBlueprint {
        name: "Theme Store",
        icon: IconName::Settings,
        state: "theme, colorScheme",
        actions: &["setTheme", "toggleDark"],
    },
    StoreBlueprint {
        name: "Toast Store",
        icon: IconName::Bell,
        state: "toasts[], maxToasts",
        actions: &["addToast", "removeToast", "clear"],
    },
    StoreBlueprint {
        name: "Sidebar Store",
        icon: IconName::Menu,
        state: "isOpen, isCollapsed",
        actions: &["toggle", "collapse", "expand"],
    },
    StoreBlueprint {
        name: "Filter Store",
        icon: IconName::Search,
        state: "filters{}, search, sort",
        actions: &["setFilter", "setSearch", "reset"],
    },
];

const GUARD_PATH: [FlowStep; 2] = [
    step("Route Request", IconName::ChevronRight, NodeTone::Neutral),
    step("Auth Check", IconName::User, NodeTone::Warning),
];

/// Route guard outcomes: the label on the edge and the node it leads to.
const GUARD_OUTCOMES: [(&str, FlowStep); 2] = [
    ("Authenticated", step("Render Page", IconName::CheckCircle, NodeTone::Success)),
    ("Not authenticated", step("Redirect to Login", IconName::ChevronLeft, NodeTone::Error)),
];

const ROUTES: [(&str, &str, bool); 5] = [
    ("/", "Dashboard overview", true),
    ("/login", "Sign in", false),
    ("/signup", "Create account", false),
    ("/settings", "Account settings", true),
    ("/design-system", "This page", false),
];

#[component]
fn FlowNode(step: FlowStep) -> impl IntoView {
    view! {
        <div class=format!("flex items-center gap-2 rounded-lg border-2 px-4 py-2 {}", step.tone.class())>
            <Icon icon=step.icon size=IconSize::Sm />
            <span class="text-sm font-medium">{step.title}</span>
        </div>
    }
}

#[component]
fn FlowRow(steps: &'static [FlowStep]) -> impl IntoView {
    let last = steps.len().saturating_sub(1);
    view! {
        <div class="flex flex-wrap items-center justify-center gap-3 py-4">
            {steps
                .iter()
                .enumerate()
                .map(|(index, step)| {
                    view! {
                        <FlowNode step=*step />
                        {(index < last).then(|| view! {
                            <span class="text-muted-foreground">
                                <Icon icon=IconName::ChevronRight size=IconSize::Sm />
                            </span>
                        })}
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub(crate) fn ArchitectureSection() -> impl IntoView {
    view! {
        <section id="architecture" class="scroll-mt-32 space-y-8">
            <SectionHeading
                id="architecture"
                title="Architecture"
                summary="Blueprints for the application around the kit: API requests, errors, state stores and guarded routes."
            />

            <Card title="API Request Flow" description="Standard request lifecycle">
                <FlowRow steps=&REQUEST_PATH />
                <Divider label="Response Path" />
                <FlowRow steps=&RESPONSE_PATH />
            </Card>

            <Card title="Error Handling Flow">
                <div class="grid gap-4 md:grid-cols-3">
                    {ERROR_POLICIES
                        .into_iter()
                        .map(|policy| {
                            view! {
                                <div class="space-y-3 rounded-lg border border-border p-4">
                                    <div class="flex items-center gap-2 font-medium">
                                        <Icon icon=policy.icon size=IconSize::Sm />
                                        <span>{policy.title}</span>
                                    </div>
                                    <p class="text-sm text-muted-foreground">{policy.summary}</p>
                                    <div class="flex flex-wrap gap-2">
                                        {policy
                                            .outcomes
                                            .iter()
                                            .map(|outcome| view! { <Badge variant=policy.badge>{*outcome}</Badge> })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Card>

            <Card title="API Service Structure">
                <div class="grid gap-6 md:grid-cols-2">
                    <DemoBlock title="Endpoints">
                        <div class="space-y-2">
                            {ENDPOINTS
                                .into_iter()
                                .map(|(method, path)| {
                                    view! {
                                        <div class="flex items-center gap-3 rounded-md bg-muted/50 p-2">
                                            <Badge variant=BadgeVariant::Outline layout_class="w-16 justify-center font-mono">
                                                {method}
                                            </Badge>
                                            <span class="font-mono text-sm">{path}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </DemoBlock>
                    <DemoBlock title="Response Format">
                        <pre class="rounded-lg bg-muted/50 p-4 font-mono text-xs">{RESPONSE_ENVELOPE}</pre>
                    </DemoBlock>
                </div>
            </Card>

            <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                {STORES
                    .into_iter()
                    .map(|store| {
                        view! {
                            <Card>
                                <div class="space-y-3">
                                    <div class="flex items-center gap-2">
                                        <Icon icon=store.icon size=IconSize::Sm />
                                        <h4 class="font-semibold">{store.name}</h4>
                                    </div>
                                    <div>
                                        <p class="text-xs uppercase text-muted-foreground">"State"</p>
                                        <p class="rounded bg-muted/50 p-2 font-mono text-xs">{store.state}</p>
                                    </div>
                                    <div>
                                        <p class="text-xs uppercase text-muted-foreground">"Actions"</p>
                                        <div class="flex flex-wrap gap-1">
                                            {store
                                                .actions
                                                .iter()
                                                .map(|action| view! { <Badge variant=BadgeVariant::Outline>{*action}</Badge> })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </div>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>

            <Card title="State Flow Architecture" description="dispatch, update, subscribe">
                <FlowRow steps=&STATE_PATH />
            </Card>

            <div class="grid gap-6 lg:grid-cols-2">
                <Card title="Protected Route Flow" description="Authentication guard logic">
                    <div class="flex flex-col items-center gap-4 py-4">
                        <FlowRow steps=&GUARD_PATH />
                        <div class="grid w-full gap-4 sm:grid-cols-2">
                            {GUARD_OUTCOMES
                                .into_iter()
                                .map(|(edge, target)| {
                                    view! {
                                        <div class="flex flex-col items-center gap-2">
                                            <span class="text-xs text-muted-foreground">{edge}</span>
                                            <FlowNode step=target />
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Card>

                <Card title="Routes" description="Pages and whether they sit behind the guard">
                    <div class="space-y-2">
                        {ROUTES
                            .into_iter()
                            .map(|(path, label, guarded)| {
                                view! {
                                    <div class="flex items-center justify-between rounded-md bg-muted/50 p-2">
                                        <div class="flex items-center gap-3">
                                            <span class="font-mono text-sm">{path}</span>
                                            <span class="text-sm text-muted-foreground">{label}</span>
                                        </div>
                                        {if guarded {
                                            view! { <Badge variant=BadgeVariant::Warning>"Protected"</Badge> }.into_view()
                                        } else {
                                            view! { <Badge variant=BadgeVariant::Secondary>"Public"</Badge> }.into_view()
                                        }}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </Card>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn network_errors_retry_three_times() {
        let network = &ERROR_POLICIES[0];
        assert_eq!(network.outcomes.len(), 3);
        assert!(network.summary.contains("3 attempts"));
    }

    #[test]
    fn request_flow_starts_in_the_ui_and_ends_at_the_backend() {
        assert_eq!(REQUEST_PATH.first().map(|s| s.title), Some("Component"));
        assert_eq!(REQUEST_PATH.last().map(|s| s.title), Some("Backend API"));
        assert_eq!(RESPONSE_PATH.last().map(|s| s.title), Some("UI Render"));
    }

    #[test]
    fn auth_pages_are_public() {
        for (path, _, guarded) in ROUTES {
            if path == "/login" || path == "/signup" {
                assert!(!guarded, "{path}");
            }
        }
    }
}
