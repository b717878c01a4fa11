use leptos::*;
use prism_ui::nav::{default_navbar_items, default_sidebar_items, NavbarLink};
use prism_ui::prelude::*;

use crate::{DemoBlock, SectionHeading};

const PREVIEW_PATHS: [&str; 4] = ["/", "/analytics", "/users/teams", "/settings"];

/// Contains fixed and sticky descendants inside the preview frame.
const PREVIEW_FRAME: &str =
    "relative h-96 overflow-hidden rounded-xl border border-border bg-background [transform:translateZ(0)]";

fn showcase_navbar_items() -> Vec<NavbarItem> {
    let mut items = default_navbar_items();
    items.push(NavbarItem::group(
        "Docs",
        vec![
            NavbarLink::new("Tokens", "#design-tokens").with_description("Colors, type and motion"),
            NavbarLink::new("Components", "#components").with_description("Every component family"),
        ],
    ));
    items
}

#[component]
pub(crate) fn NavigationSection() -> impl IntoView {
    let collapsed = create_rw_signal(false);
    let current_path = create_rw_signal(PREVIEW_PATHS[1].to_string());

    view! {
        <section id="navigation" class="scroll-mt-32 space-y-8">
            <SectionHeading
                id="navigation"
                title="Navigation"
                summary="Navbar with dropdown groups and a collapsible, nested app sidebar."
            />

            <Card title="Navbar" description="Dropdown groups, actions slot and a mobile menu">
                <div class="h-64 overflow-y-auto rounded-xl border border-border [transform:translateZ(0)]" on:click=|ev| ev.prevent_default()>
                    <Navbar
                        items=showcase_navbar_items()
                        notification_count=3
                        actions=|| view! { <Button size=ButtonSize::Sm variant=ButtonVariant::Gradient>"Sign up"</Button> }
                    />
                    <div class="space-y-3 p-6">
                        <SkeletonText lines=6 />
                        <SkeletonText lines=6 />
                    </div>
                </div>
            </Card>

            <Card title="App Sidebar" description="Icon-only collapse, nested groups and active path">
                <div class="space-y-4">
                    <DemoBlock title="Current path">
                        <div class="flex flex-wrap items-center gap-2">
                            {PREVIEW_PATHS
                                .into_iter()
                                .map(|path| {
                                    view! {
                                        <Button
                                            size=ButtonSize::Sm
                                            variant=ButtonVariant::Outline
                                            on_click=Callback::new(move |_| current_path.set(path.to_string()))
                                        >
                                            {path}
                                        </Button>
                                    }
                                })
                                .collect_view()}
                            <Badge variant=BadgeVariant::Secondary>
                                {move || if collapsed.get() { "Collapsed" } else { "Expanded" }}
                            </Badge>
                        </div>
                    </DemoBlock>
                    <div class="grid gap-6 lg:grid-cols-3">
                        <div class=PREVIEW_FRAME on:click=|ev| ev.prevent_default()>
                            <AppSidebar
                                current_path=current_path
                                on_collapsed_change=Callback::new(move |next| collapsed.set(next))
                                footer=|| view! {
                                    <div class="flex items-center gap-3">
                                        <SkeletonAvatar size=prism_ui::SkeletonAvatarSize::Sm />
                                        <span class="text-sm font-medium">"Jordan Doe"</span>
                                    </div>
                                }
                            />
                        </div>
                        <div class=PREVIEW_FRAME on:click=|ev| ev.prevent_default()>
                            <AppSidebar
                                variant=SidebarVariant::Floating
                                header=|| "Floating"
                                current_path=current_path
                            />
                        </div>
                        <div class=PREVIEW_FRAME on:click=|ev| ev.prevent_default()>
                            <AppSidebar
                                variant=SidebarVariant::Inset
                                items=default_sidebar_items()
                                collapsed=true
                                current_path=current_path
                            />
                        </div>
                    </div>
                </div>
            </Card>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn showcase_navbar_adds_a_docs_group_with_section_links() {
        let items = showcase_navbar_items();
        let docs = items.last().expect("docs group");
        assert!(docs.is_group());
        assert!(docs.children.iter().all(|link| link.href.starts_with('#')));
    }

    #[test]
    fn preview_paths_hit_sidebar_entries() {
        let items = default_sidebar_items();
        for path in PREVIEW_PATHS {
            let found = items.iter().any(|item| {
                item.is_active(path) || item.children.iter().any(|child| child.is_active(path))
            });
            assert!(found, "{path}");
        }
    }
}
