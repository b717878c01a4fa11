use leptos::*;
use prism_ui::prelude::*;
use prism_ui::{
    AsidePosition, AsideWidth, ColumnGap, DashboardSidebarWidth, GridGap, IllustrationSide,
    LayoutPadding, MaxWidth, MobileOrder, SplitRatio, StatsColumns, StatsGap, StatsVariant,
};

use crate::{DemoBlock, SectionHeading};

const STATS: [(&str, &str, &str); 4] = [
    ("Revenue", "$48.2k", "+12.5%"),
    ("Active users", "2,341", "+4.1%"),
    ("Conversion", "3.8%", "-0.4%"),
    ("Churn", "1.2%", "-0.3%"),
];

/// Frame for full-page templates; contains their fixed and sticky children.
const PAGE_FRAME: &str =
    "relative h-[28rem] overflow-hidden rounded-xl border border-border bg-background [transform:translateZ(0)]";

fn trend_class(delta: &str) -> &'static str {
    if delta.starts_with('-') {
        "text-xs font-medium text-red-600"
    } else {
        "text-xs font-medium text-green-600"
    }
}

#[component]
fn Placeholder(label: &'static str) -> impl IntoView {
    view! {
        <div class="flex min-h-24 items-center justify-center rounded-lg border border-dashed border-border bg-muted/40 p-4 text-sm text-muted-foreground">
            {label}
        </div>
    }
}

#[component]
pub(crate) fn LayoutsSection() -> impl IntoView {
    let columns = create_rw_signal(GridColumns::Three);

    view! {
        <section id="layouts" class="scroll-mt-32 space-y-8">
            <SectionHeading
                id="layouts"
                title="Layouts"
                summary="Page templates and grids composed from the same variant tables as the components."
            />

            <Card title="Card Grid" description="One to six responsive columns">
                <div class="space-y-4">
                    <div class="flex flex-wrap gap-2">
                        {[
                            (GridColumns::One, "1"),
                            (GridColumns::Two, "2"),
                            (GridColumns::Three, "3"),
                            (GridColumns::Four, "4"),
                            (GridColumns::Five, "5"),
                            (GridColumns::Six, "6"),
                        ]
                            .into_iter()
                            .map(|(value, label)| {
                                view! {
                                    <Button
                                        size=ButtonSize::Sm
                                        variant=ButtonVariant::Outline
                                        on_click=Callback::new(move |_| columns.set(value))
                                    >
                                        {format!("{label} col")}
                                    </Button>
                                }
                            })
                            .collect_view()}
                    </div>
                    {move || {
                        let columns = columns.get();
                        view! {
                            <CardGridLayout columns gap=GridGap::Sm>
                                {(0..6).map(|_| view! { <SkeletonCard lines=1 /> }).collect_view()}
                            </CardGridLayout>
                        }
                    }}
                </div>
            </Card>

            <Card title="Stats Grid" description="Metric tiles as cards or compact rows">
                <div class="space-y-6">
                    <DemoBlock title="Cards">
                        <StatsGridLayout variant=StatsVariant::Cards>
                            {STATS
                                .into_iter()
                                .map(|(label, value, delta)| {
                                    view! {
                                        <div class="space-y-1">
                                            <p class="text-sm text-muted-foreground">{label}</p>
                                            <p class="text-2xl font-bold">{value}</p>
                                            <p class=trend_class(delta)>{delta}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </StatsGridLayout>
                    </DemoBlock>
                    <DemoBlock title="Compact">
                        <StatsGridLayout columns=StatsColumns::Two variant=StatsVariant::Compact>
                            {STATS
                                .into_iter()
                                .map(|(label, value, _)| {
                                    view! {
                                        <div class="flex items-center justify-between rounded-lg bg-muted/40">
                                            <span class="text-sm">{label}</span>
                                            <span class="font-semibold">{value}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </StatsGridLayout>
                    </DemoBlock>
                </div>
            </Card>

            <div class="grid gap-6 lg:grid-cols-2">
                <Card title="Two Column" description="Sticky aside on either side">
                    <div class="space-y-6">
                        <TwoColumnLayout
                            aside=|| view! { <Placeholder label="Aside" /> }
                            aside_width=AsideWidth::Narrow
                            gap=ColumnGap::Md
                        >
                            <Placeholder label="Main content" />
                        </TwoColumnLayout>
                        <TwoColumnLayout
                            aside=|| view! { <Placeholder label="Filters" /> }
                            aside_position=AsidePosition::Left
                            aside_sticky=false
                            gap=ColumnGap::Sm
                        >
                            <Placeholder label="Results" />
                        </TwoColumnLayout>
                    </div>
                </Card>

                <Card title="Centered" description="Width-capped column">
                    <div class="rounded-lg bg-muted/30">
                        <CenteredLayout max_width=MaxWidth::Sm padding=LayoutPadding::Sm>
                            <Placeholder label="max-w-sm" />
                        </CenteredLayout>
                    </div>
                </Card>
            </div>

            <Card title="Split Screen" description="Five ratios, stacking on small screens">
                <div class="space-y-4">
                    <div class="h-48 overflow-hidden rounded-xl border border-border">
                        <SplitScreenLayout
                            ratio=SplitRatio::OneThird
                            divider=true
                            layout_class="min-h-0 h-full"
                            right=|| view! { <div class="h-full p-4"><Placeholder label="Two thirds" /></div> }
                        >
                            <div class="h-full p-4"><Placeholder label="One third" /></div>
                        </SplitScreenLayout>
                    </div>
                    <div class="h-48 overflow-hidden rounded-xl border border-border">
                        <SplitScreenLayout
                            ratio=SplitRatio::ThreeFifths
                            mobile_order=MobileOrder::RightFirst
                            layout_class="min-h-0 h-full"
                            left=|| view! { <div class="h-full p-4"><Placeholder label="Left, shown second on mobile" /></div> }
                            right=|| view! { <div class="h-full p-4"><Placeholder label="Right, shown first on mobile" /></div> }
                        />
                    </div>
                </div>
            </Card>

            <div class="grid gap-6 xl:grid-cols-2">
                <Card title="Auth" description="Form panel beside an illustration">
                    <div class=PAGE_FRAME>
                        <AuthLayout illustration_side=IllustrationSide::Right layout_class="min-h-0 h-full">
                            <div class="space-y-4">
                                <h3 class="text-2xl font-bold">"Sign in"</h3>
                                <Input placeholder="Email" left_icon=IconName::User />
                                <PasswordInput placeholder="Password" />
                                <Button variant=ButtonVariant::Gradient layout_class="w-full">"Continue"</Button>
                            </div>
                        </AuthLayout>
                    </div>
                </Card>

                <Card title="Dashboard" description="Collapsible sidebar with a sticky header">
                    <div class=PAGE_FRAME>
                        <DashboardLayout
                            sidebar_width=DashboardSidebarWidth::Sm
                            layout_class="min-h-0 h-full overflow-y-auto"
                        >
                            <StatsGridLayout columns=StatsColumns::Two variant=StatsVariant::Cards gap=StatsGap::Sm>
                                {STATS
                                    .into_iter()
                                    .map(|(label, value, _)| view! {
                                        <div>
                                            <p class="text-xs text-muted-foreground">{label}</p>
                                            <p class="text-lg font-semibold">{value}</p>
                                        </div>
                                    })
                                    .collect_view()}
                            </StatsGridLayout>
                        </DashboardLayout>
                    </div>
                </Card>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_deltas_render_red() {
        assert!(trend_class("-0.4%").contains("red"));
        assert!(trend_class("+12.5%").contains("green"));
    }
}
