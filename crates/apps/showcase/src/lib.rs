//! Component kit showcase page.
//!
//! Renders the design token catalogue and every component family from
//! `prism_ui` on one scrolling page, grouped into anchored sections. Demos
//! keep their state in signals local to the section that owns them.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod architecture;
mod components;
mod forms;
mod layouts;
mod navigation;
mod tokens;

use leptos::*;
use prism_ui::prelude::*;

use crate::architecture::ArchitectureSection;
use crate::components::ComponentsSection;
use crate::forms::FormsSection;
use crate::layouts::LayoutsSection;
use crate::navigation::NavigationSection;
use crate::tokens::TokensSection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SectionLink {
    id: &'static str,
    label: &'static str,
    icon: IconName,
}

const SECTIONS: &[SectionLink] = &[
    SectionLink {
        id: "design-tokens",
        label: "Design Tokens",
        icon: IconName::Zap,
    },
    SectionLink {
        id: "components",
        label: "Components",
        icon: IconName::Settings,
    },
    SectionLink {
        id: "forms",
        label: "Forms",
        icon: IconName::FileText,
    },
    SectionLink {
        id: "navigation",
        label: "Navigation",
        icon: IconName::Menu,
    },
    SectionLink {
        id: "layouts",
        label: "Layouts",
        icon: IconName::BarChart,
    },
    SectionLink {
        id: "architecture",
        label: "Architecture",
        icon: IconName::HelpCircle,
    },
];

/// Distance from the viewport top at which a section counts as current;
/// clears both sticky bars.
const ACTIVE_OFFSET_PX: f64 = 140.0;

fn anchor(id: &str) -> String {
    format!("#{id}")
}

/// Last section whose top edge has scrolled past `ACTIVE_OFFSET_PX`, or the
/// first section while none has.
fn active_section<I>(tops: I) -> &'static str
where
    I: IntoIterator<Item = (&'static str, f64)>,
{
    tops.into_iter()
        .take_while(|(_, top)| *top <= ACTIVE_OFFSET_PX)
        .last()
        .map_or(SECTIONS[0].id, |(id, _)| id)
}

fn section_tops() -> Vec<(&'static str, f64)> {
    let document = document();
    SECTIONS
        .iter()
        .filter_map(|section| {
            document
                .get_element_by_id(section.id)
                .map(|element| (section.id, element.get_bounding_client_rect().top()))
        })
        .collect()
}

#[component]
/// Full showcase page: token stylesheet, section index and every section.
pub fn ShowcasePage() -> impl IntoView {
    let active = create_rw_signal(SECTIONS[0].id);

    let listener = window_event_listener(ev::scroll, move |_| {
        let current = active_section(section_tops());
        if active.get_untracked() != current {
            active.set(current);
        }
    });
    on_cleanup(move || listener.remove());

    view! {
        <style>{design_tokens::stylesheet()}</style>
        <div class="min-h-screen bg-background text-foreground" data-ui-kind="showcase">
            <header class="sticky top-0 z-50 border-b border-border bg-background/95 backdrop-blur">
                <div class="mx-auto flex h-16 max-w-[1600px] items-center justify-between px-4 sm:px-6">
                    <div class="flex items-center gap-3">
                        <div class="flex h-8 w-8 items-center justify-center rounded-lg bg-gradient-to-br from-primary to-accent">
                            <Icon icon=IconName::Zap size=IconSize::Sm layout_class="text-white" />
                        </div>
                        <span class="text-xl font-bold">"Prism UI"</span>
                        <Badge variant=BadgeVariant::Secondary>{env!("CARGO_PKG_VERSION")}</Badge>
                    </div>
                    <Button variant=ButtonVariant::Gradient size=ButtonSize::Sm>"Get Started"</Button>
                </div>
            </header>

            <nav
                class="sticky top-16 z-40 overflow-x-auto border-b border-border bg-card/95 backdrop-blur"
                aria-label="Sections"
                data-ui-slot="section-index"
            >
                <div class="mx-auto flex max-w-[1600px] items-center gap-1 px-4 py-2 sm:px-6">
                    {SECTIONS
                        .iter()
                        .map(|section| {
                            let id = section.id;
                            view! {
                                <a
                                    href=anchor(id)
                                    class=move || {
                                        if active.get() == id {
                                            "inline-flex items-center gap-2 whitespace-nowrap rounded-md bg-secondary px-3 py-1.5 text-sm font-medium text-secondary-foreground"
                                        } else {
                                            "inline-flex items-center gap-2 whitespace-nowrap rounded-md px-3 py-1.5 text-sm font-medium hover:bg-accent hover:text-accent-foreground"
                                        }
                                    }
                                    aria-current=move || (active.get() == id).then_some("location")
                                    on:click=move |_| active.set(id)
                                >
                                    <Icon icon=section.icon size=IconSize::Sm />
                                    {section.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </nav>

            <main class="mx-auto max-w-[1600px] space-y-24 px-4 py-12 sm:px-6">
                <TokensSection />
                <ComponentsSection />
                <FormsSection />
                <NavigationSection />
                <LayoutsSection />
                <ArchitectureSection />
            </main>
        </div>
    }
}

#[component]
fn SectionHeading(id: &'static str, title: &'static str, summary: &'static str) -> impl IntoView {
    let icon = SECTIONS
        .iter()
        .find(|section| section.id == id)
        .map_or(IconName::Info, |section| section.icon);
    view! {
        <div class="space-y-2">
            <h2 class="flex items-center gap-3 text-3xl font-bold">
                <Icon icon size=IconSize::Lg layout_class="text-primary" />
                {title}
            </h2>
            <p class="max-w-3xl text-lg text-muted-foreground">{summary}</p>
        </div>
    }
}

#[component]
fn DemoBlock(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="space-y-3">
            <h4 class="text-sm font-semibold uppercase tracking-wider text-muted-foreground">{title}</h4>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn section_anchors_are_unique_fragments() {
        let ids: HashSet<_> = SECTIONS.iter().map(|section| section.id).collect();
        assert_eq!(ids.len(), SECTIONS.len());
        for section in SECTIONS {
            assert_eq!(anchor(section.id), format!("#{}", section.id));
            assert!(!section.id.contains(' '));
        }
    }

    #[test]
    fn active_section_follows_the_last_heading_past_the_sticky_bars() {
        let ids: Vec<_> = SECTIONS.iter().map(|section| section.id).collect();
        assert_eq!(active_section(Vec::new()), ids[0]);
        assert_eq!(active_section(vec![(ids[0], 400.0), (ids[1], 1600.0)]), ids[0]);
        assert_eq!(
            active_section(vec![(ids[0], -900.0), (ids[1], 120.0), (ids[2], 700.0)]),
            ids[1]
        );
        assert_eq!(
            active_section(vec![(ids[0], -3000.0), (ids[1], -1200.0), (ids[2], -20.0)]),
            ids[2]
        );
    }
}
