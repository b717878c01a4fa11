use super::controls::BUTTON;
use super::*;
use crate::nav::{
    children_visible, default_navbar_items, default_sidebar_items, is_scrolled, toggle_expanded,
    NavItem, NavbarItem, NavbarLink,
};

/// Header classes for the current scroll and transparency state.
pub fn navbar_class(sticky: bool, transparent: bool, scrolled: bool) -> String {
    merge_classes([
        "z-50 w-full transition-all duration-300",
        class_if(sticky, "sticky top-0"),
        if transparent && !scrolled {
            "bg-transparent"
        } else {
            "border-b border-border bg-background/95 backdrop-blur-md"
        },
        class_if(scrolled, "shadow-sm"),
    ])
}

#[component]
/// Top navigation bar with dropdown groups, an actions slot and a mobile menu.
pub fn Navbar(
    #[prop(optional, into)] logo: Option<ViewFn>,
    #[prop(default = default_navbar_items())] items: Vec<NavbarItem>,
    #[prop(optional, into)] actions: Option<ViewFn>,
    #[prop(default = true)] sticky: bool,
    #[prop(optional)] transparent: bool,
    #[prop(optional)] notification_count: Option<u32>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let mobile_open = create_rw_signal(false);
    let scrolled = create_rw_signal(false);

    let listener = window_event_listener(ev::scroll, move |_| {
        let offset = window().scroll_y().unwrap_or_default();
        scrolled.set(is_scrolled(offset));
    });
    on_cleanup(move || listener.remove());

    let header_class = move || {
        merge_classes([
            navbar_class(sticky, transparent, scrolled.get()).as_str(),
            layout_class.unwrap_or_default(),
        ])
    };
    let desktop_items = items.clone();
    let items = store_value(items);

    view! {
        <header
            class=header_class
            data-ui-primitive="true"
            data-ui-kind="navbar"
            data-ui-state=move || if scrolled.get() { "scrolled" } else { "top" }
        >
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                <div class="flex h-16 items-center justify-between">
                    <div class="flex items-center gap-8">
                        {match logo {
                            Some(logo) => logo.run(),
                            None => view! { <a href="/" class="gradient-text text-xl font-bold">"Brand"</a> }.into_view(),
                        }}
                        <nav class="hidden items-center gap-1 lg:flex" aria-label="Main">
                            {desktop_items
                                .into_iter()
                                .map(|item| view! { <NavbarEntry item /> })
                                .collect_view()}
                        </nav>
                    </div>

                    <div class="flex items-center gap-2">
                        <Button
                            variant=ButtonVariant::Ghost
                            size=ButtonSize::Icon
                            layout_class="hidden md:flex"
                            aria_label="Search"
                        >
                            <Icon icon=IconName::Search />
                        </Button>
                        <Button
                            variant=ButtonVariant::Ghost
                            size=ButtonSize::Icon
                            layout_class="relative"
                            aria_label="Notifications"
                        >
                            <Icon icon=IconName::Bell />
                            {notification_count.filter(|count| *count > 0).map(|count| view! {
                                <span class="absolute -right-1 -top-1 flex h-4 w-4 items-center justify-center rounded-full bg-primary text-[10px] text-primary-foreground">
                                    {count}
                                </span>
                            })}
                        </Button>
                        {actions.map(|actions| actions.run())}
                        <Button
                            variant=ButtonVariant::Ghost
                            size=ButtonSize::Icon
                            layout_class="lg:hidden"
                            aria_label="Toggle menu"
                            on_click=Callback::new(move |_| mobile_open.update(|open| *open = !*open))
                        >
                            {move || {
                                let icon = if mobile_open.get() { IconName::Dismiss } else { IconName::Menu };
                                view! { <Icon icon /> }
                            }}
                        </Button>
                    </div>
                </div>

                <Show when=move || mobile_open.get() fallback=|| ()>
                    <nav class="animate-slide-in-down border-t border-border py-4 lg:hidden" data-ui-slot="mobile-menu">
                        <ul class="space-y-2">
                            {items.get_value().into_iter().map(|item| view! {
                                <MobileNavbarEntry item on_navigate=Callback::new(move |_| mobile_open.set(false)) />
                            }).collect_view()}
                        </ul>
                    </nav>
                </Show>
            </div>
        </header>
    }
}

#[component]
fn NavbarEntry(item: NavbarItem) -> impl IntoView {
    if !item.is_group() {
        let class = BUTTON.classes(&[ButtonVariant::Ghost.pick()], None);
        return view! { <a href=item.target().to_string() class=class>{item.label}</a> }.into_view();
    }

    let open = create_rw_signal(false);
    let links = item.children;
    view! {
        <div class="relative" on:mouseleave=move |_| open.set(false)>
            <Button
                variant=ButtonVariant::Ghost
                layout_class="gap-1"
                trailing_icon=IconName::ChevronDown
                on_click=Callback::new(move |_| open.update(|open| *open = !*open))
            >
                {item.label}
            </Button>
            <Show when=move || open.get() fallback=|| ()>
                <div class="absolute left-0 top-full z-50 mt-1 w-56 animate-fade-in rounded-lg border border-border bg-popover p-1 shadow-lg">
                    {links
                        .iter()
                        .cloned()
                        .map(|link| view! { <NavbarDropdownLink link on_navigate=Callback::new(move |_| open.set(false)) /> })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
    .into_view()
}

#[component]
fn NavbarDropdownLink(link: NavbarLink, on_navigate: Callback<()>) -> impl IntoView {
    view! {
        <a
            href=link.href
            class="flex flex-col items-start gap-1 rounded-md px-3 py-2 text-sm hover:bg-accent hover:text-accent-foreground"
            on:click=move |_| on_navigate.call(())
        >
            <span class="font-medium">{link.label}</span>
            {link.description.map(|description| view! {
                <span class="text-xs text-muted-foreground">{description}</span>
            })}
        </a>
    }
}

#[component]
fn MobileNavbarEntry(item: NavbarItem, on_navigate: Callback<()>) -> impl IntoView {
    let content = match item.href {
        Some(href) => view! {
            <a
                href=href
                class="block rounded-lg px-4 py-2 text-sm font-medium hover:bg-accent"
                on:click=move |_| on_navigate.call(())
            >
                {item.label}
            </a>
        }
        .into_view(),
        None => view! {
            <div class="px-4 py-2 text-sm font-medium text-muted-foreground">
                {item.label}
                {(!item.children.is_empty()).then(|| view! {
                    <ul class="ml-4 mt-2 space-y-1">
                        {item.children.into_iter().map(|link| view! {
                            <li>
                                <a
                                    href=link.href
                                    class="block py-1.5 text-sm hover:text-primary"
                                    on:click=move |_| on_navigate.call(())
                                >
                                    {link.label}
                                </a>
                            </li>
                        }).collect_view()}
                    </ul>
                })}
            </div>
        }
        .into_view(),
    };
    view! { <li>{content}</li> }
}

#[derive(Debug, Clone, Copy)]
/// Collapse state shared by a sidebar and every item it renders.
///
/// Passed to each [`SidebarItem`] as a prop rather than looked up from context.
pub struct SidebarState {
    collapsed: RwSignal<bool>,
    on_change: Option<Callback<bool>>,
}

impl SidebarState {
    /// New state with the given initial collapse.
    pub fn new(collapsed: bool) -> Self {
        Self {
            collapsed: create_rw_signal(collapsed),
            on_change: None,
        }
    }

    /// Reports every collapse change to `on_change`.
    pub fn with_on_change(mut self, on_change: Option<Callback<bool>>) -> Self {
        self.on_change = on_change;
        self
    }

    /// Whether the sidebar shows icons only.
    pub fn is_collapsed(&self) -> bool {
        self.collapsed.get()
    }

    /// Sets the collapse state and notifies the owner.
    pub fn set_collapsed(&self, collapsed: bool) {
        self.collapsed.set(collapsed);
        if let Some(on_change) = self.on_change {
            on_change.call(collapsed);
        }
    }

    /// Flips the collapse state.
    pub fn toggle(&self) {
        self.set_collapsed(!self.collapsed.get_untracked());
    }
}

token_enum! {
    /// Sidebar surface treatments.
    pub enum SidebarVariant in "variant" {
        /// Flush panel with a right border.
        Default => "default",
        /// Detached rounded panel with a shadow.
        Floating => "floating",
        /// Muted panel without border.
        Inset => "inset",
    }
    default = Default;
}

pub(crate) const SIDEBAR: VariantSpec = VariantSpec {
    base: "fixed inset-y-0 left-0 z-50 flex flex-col transition-all duration-300",
    groups: &[
        VariantGroup {
            name: "collapsed",
            options: &[("false", "w-64"), ("true", "w-16")],
            default: "false",
        },
        VariantGroup {
            name: "mobile_open",
            options: &[("false", "-translate-x-full lg:translate-x-0"), ("true", "translate-x-0")],
            default: "false",
        },
        VariantGroup {
            name: "variant",
            options: &[
                ("default", "border-r border-border bg-card"),
                ("floating", "m-2 rounded-xl border border-border bg-card shadow-lg"),
                ("inset", "bg-muted/50"),
            ],
            default: "default",
        },
    ],
    compounds: &[],
};

#[component]
/// Application sidebar with collapsible icon mode and a mobile drawer.
pub fn AppSidebar(
    #[prop(default = default_sidebar_items())] items: Vec<NavItem>,
    #[prop(optional, into)] header: Option<ViewFn>,
    #[prop(optional, into)] footer: Option<ViewFn>,
    #[prop(optional)] collapsed: bool,
    #[prop(optional)] on_collapsed_change: Option<Callback<bool>>,
    #[prop(optional, into)] current_path: MaybeSignal<String>,
    #[prop(default = SidebarVariant::Default)] variant: SidebarVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let state = SidebarState::new(collapsed).with_on_change(on_collapsed_change);
    let mobile_open = create_rw_signal(false);
    let current_path = Signal::derive(move || current_path.get());

    let aside_class = move || {
        SIDEBAR.classes(
            &[
                ("collapsed", bool_token(state.is_collapsed())),
                ("mobile_open", bool_token(mobile_open.get())),
                variant.pick(),
            ],
            layout_class,
        )
    };

    view! {
        <Show when=move || mobile_open.get() fallback=|| ()>
            <div
                class="fixed inset-0 z-40 animate-fade-in bg-background/80 backdrop-blur-sm lg:hidden"
                data-ui-slot="overlay"
                on:click=move |_| mobile_open.set(false)
            ></div>
        </Show>
        <Button
            variant=ButtonVariant::Ghost
            size=ButtonSize::Icon
            layout_class="fixed left-4 top-4 z-50 lg:hidden"
            aria_label="Toggle navigation"
            on_click=Callback::new(move |_| mobile_open.update(|open| *open = !*open))
        >
            {move || {
                let icon = if mobile_open.get() { IconName::Dismiss } else { IconName::Menu };
                view! { <Icon icon /> }
            }}
        </Button>
        <aside
            class=aside_class
            data-ui-primitive="true"
            data-ui-kind="app-sidebar"
            data-ui-variant=variant.token()
            data-ui-collapsed=move || bool_token(state.is_collapsed())
        >
            <div class="flex h-16 items-center justify-between border-b border-border px-4">
                <Show when=move || !state.is_collapsed() fallback=|| ()>
                    <span class="gradient-text animate-fade-in text-lg font-bold">
                        {match header.as_ref() {
                            Some(header) => header.run(),
                            None => "Brand".into_view(),
                        }}
                    </span>
                </Show>
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::IconSm
                    layout_class="hidden lg:flex"
                    aria_label="Collapse sidebar"
                    on_click=Callback::new(move |_| state.toggle())
                >
                    <span class=move || {
                        merge_classes([
                            "inline-flex transition-transform duration-200",
                            class_if(!state.is_collapsed(), "rotate-180"),
                        ])
                    }>
                        <Icon icon=IconName::ChevronRight size=IconSize::Sm />
                    </span>
                </Button>
            </div>

            <nav class="scrollbar-thin flex-1 overflow-y-auto p-2">
                <ul class="space-y-1">
                    {items
                        .into_iter()
                        .map(|item| view! { <SidebarItem item state current_path /> })
                        .collect_view()}
                </ul>
            </nav>

            {footer.map(|footer| view! {
                <div class="border-t border-border p-4" data-ui-slot="footer">{footer.run()}</div>
            })}
        </aside>
    }
}

/// Row classes for a sidebar entry.
pub fn sidebar_row_class(active: bool, disabled: bool, depth: usize) -> String {
    merge_classes([
        "flex items-center gap-3 rounded-lg px-3 py-2 text-sm font-medium transition-all duration-200 hover:bg-accent hover:text-accent-foreground",
        class_if(active, "bg-primary/10 text-primary"),
        class_if(disabled, "pointer-events-none cursor-not-allowed opacity-50"),
        class_if(depth > 0, "ml-4 text-xs"),
    ])
}

#[component]
/// One sidebar entry; renders its children recursively at `depth + 1`.
pub fn SidebarItem(
    item: NavItem,
    state: SidebarState,
    #[prop(default = 0)] depth: usize,
    #[prop(into)] current_path: Signal<String>,
) -> impl IntoView {
    let expanded = create_rw_signal(false);
    let has_children = item.has_children();
    let disabled = item.disabled;
    let active = {
        let item = item.clone();
        Signal::derive(move || current_path.with(|path| item.is_active(path)))
    };
    let label = item.label.clone();
    let tooltip = move || state.is_collapsed().then(|| label.clone());

    let row = {
        let label = item.label.clone();
        let badge = item.badge.clone();
        view! {
            <div
                class=move || sidebar_row_class(active.get(), disabled, depth)
                aria-disabled=bool_token(disabled)
                aria-expanded=move || has_children.then(|| bool_token(expanded.get()))
                data-ui-depth=depth
                on:click=move |_| {
                    if !disabled {
                        expanded.update(|open| *open = toggle_expanded(*open, has_children));
                    }
                }
            >
                {item.icon.map(|icon| view! { <Icon icon /> })}
                <Show when=move || !state.is_collapsed() fallback=|| ()>
                    <span class="flex-1">{label.clone()}</span>
                    {badge.clone().map(|badge| view! {
                        <span class="rounded-full bg-primary/10 px-2 py-0.5 text-xs font-semibold text-primary">
                            {badge}
                        </span>
                    })}
                    {has_children.then(|| view! {
                        <span class=move || {
                            merge_classes([
                                "inline-flex transition-transform duration-200",
                                class_if(expanded.get(), "rotate-180"),
                            ])
                        }>
                            <Icon icon=IconName::ChevronDown size=IconSize::Sm />
                        </span>
                    })}
                </Show>
            </div>
        }
    };

    let wrapped = match item.href.clone() {
        Some(href) if !disabled => view! {
            <a href=href title=tooltip aria-current=move || active.get().then_some("page")>{row}</a>
        }
        .into_view(),
        _ => view! { <div class="cursor-pointer" title=tooltip>{row}</div> }.into_view(),
    };

    let children = item.children;
    view! {
        <li data-ui-kind="sidebar-item">
            {wrapped}
            <Show
                when=move || children_visible(has_children, expanded.get(), state.is_collapsed())
                fallback=|| ()
            >
                <ul class="mt-1 animate-fade-in space-y-1">
                    {children
                        .iter()
                        .cloned()
                        .map(|child| {
                            view! { <SidebarItem item=child state depth=depth + 1 current_path /> }
                                .into_view()
                        })
                        .collect_view()}
                </ul>
            </Show>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn transparent_navbar_gains_a_surface_once_scrolled() {
        assert_eq!(
            navbar_class(true, true, false),
            "z-50 w-full transition-all duration-300 sticky top-0 bg-transparent"
        );
        assert_eq!(
            navbar_class(false, true, true),
            "z-50 w-full transition-all duration-300 border-b border-border bg-background/95 backdrop-blur-md shadow-sm"
        );
    }

    #[test]
    fn sidebar_width_follows_collapse() {
        let open = SIDEBAR.classes(&[("collapsed", "false")], None);
        let closed = SIDEBAR.classes(&[("collapsed", "true"), SidebarVariant::Inset.pick()], None);
        assert!(open.contains("w-64"));
        assert!(closed.contains("w-16"));
        assert!(closed.ends_with("-translate-x-full lg:translate-x-0 bg-muted/50"));
    }

    #[test]
    fn nested_rows_indent_and_disabled_rows_are_inert() {
        let nested = sidebar_row_class(false, true, 2);
        assert!(nested.ends_with("pointer-events-none cursor-not-allowed opacity-50 ml-4 text-xs"));
        assert!(sidebar_row_class(true, false, 0).ends_with("bg-primary/10 text-primary"));
    }

    #[test]
    fn collapse_changes_reach_the_owner() {
        let runtime = leptos::create_runtime();
        let reported = create_rw_signal(Vec::new());
        let state = SidebarState::new(false).with_on_change(Some(Callback::new(
            move |collapsed| reported.update(|seen: &mut Vec<bool>| seen.push(collapsed)),
        )));

        state.set_collapsed(true);
        assert!(state.is_collapsed());
        state.toggle();
        assert!(!state.is_collapsed());

        assert_eq!(reported.get_untracked(), vec![true, false]);
        runtime.dispose();
    }
}
