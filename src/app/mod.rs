use crate::components::ui::ScrollGradient;
use crate::scroll::ScrollAxis;
use leptos::prelude::*;

const TAG_COUNT: usize = 24;
const ROW_COUNT: usize = 40;

/// Demo page: one horizontal strip, one vertical list with the start fade
/// hidden and the raw scroll/ref callbacks wired up.
#[component]
pub fn App() -> impl IntoView {
    let raw_scrolls: RwSignal<u64> = RwSignal::new(0);
    let list_mounted: RwSignal<bool> = RwSignal::new(false);

    let on_scroll = Callback::new(move |_ev: web_sys::Event| {
        raw_scrolls.update(|n| *n += 1);
    });
    let on_node = Callback::new(move |el: Option<web_sys::HtmlElement>| {
        list_mounted.set(el.is_some());
    });

    view! {
        <div class="min-h-screen bg-background">
            <div class="mx-auto w-full max-w-[720px] space-y-8 px-4 py-8">
                <h1 class="text-xl font-semibold">"Scroll gradient"</h1>

                <section class="space-y-2">
                    <p class="text-xs text-muted-foreground">"Horizontal"</p>
                    <ScrollGradient axis=ScrollAxis::Horizontal class="rounded-md border">
                        <div class="flex w-max gap-2 p-2">
                            {(1..=TAG_COUNT)
                                .map(|i| {
                                    view! {
                                        <span class="rounded-md bg-muted px-3 py-1 text-sm">
                                            {format!("Tag {i}")}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </ScrollGradient>
                </section>

                <section class="space-y-2">
                    <p class="text-xs text-muted-foreground">"Vertical, start fade hidden"</p>
                    <ScrollGradient
                        class="h-64 rounded-md border"
                        hide_start_gradient=true
                        color="#f4f4f5"
                        fade_size=56
                        on_scroll=on_scroll
                        on_node=on_node
                    >
                        <ul class="divide-y">
                            {(1..=ROW_COUNT)
                                .map(|i| view! { <li class="px-3 py-2 text-sm">{format!("Row {i}")}</li> })
                                .collect_view()}
                        </ul>
                    </ScrollGradient>
                    <p class="text-xs text-muted-foreground">
                        {move || {
                            format!(
                                "mounted: {}, raw scroll events: {}",
                                list_mounted.get(),
                                raw_scrolls.get(),
                            )
                        }}
                    </p>
                </section>
            </div>
        </div>
    }
}
