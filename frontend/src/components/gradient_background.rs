use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GradientBackgroundProps {
    #[prop_or_default]
    pub children: Html,
}

/// Soft rose backdrop shared by every page.
#[function_component(GradientBackground)]
pub fn gradient_background(props: &GradientBackgroundProps) -> Html {
    html! {
        <div class="relative min-h-screen">
            <div class="fixed inset-0 bg-gradient-to-b from-rose-50 via-white to-fuchsia-50 dark:from-gray-950 dark:via-gray-950 dark:to-gray-900 -z-50"></div>
            <div class="fixed top-0 left-1/4 w-96 h-96 bg-rose-300/20 rounded-full filter blur-3xl -z-40"></div>
            <div class="fixed bottom-0 right-1/4 w-96 h-96 bg-fuchsia-300/20 rounded-full filter blur-3xl -z-40"></div>

            <div class="relative z-0">
                {props.children.clone()}
            </div>
        </div>
    }
}
