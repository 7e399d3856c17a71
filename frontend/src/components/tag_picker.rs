use yew::prelude::*;

use crate::styles;

#[derive(Clone, PartialEq)]
pub struct TagOption {
    pub label: &'static str,
    pub selected: bool,
    /// Sentinel options get a dashed outline so they read as "instead of the others".
    pub exclusive: bool,
}

#[derive(Properties, PartialEq)]
pub struct TagPickerProps {
    pub options: Vec<TagOption>,
    pub on_toggle: Callback<usize>,
}

#[function_component(TagPicker)]
pub fn tag_picker(props: &TagPickerProps) -> Html {
    html! {
        <div class="flex flex-wrap gap-3">
            { for props.options.iter().enumerate().map(|(index, option)| {
                let on_toggle = props.on_toggle.clone();
                let onclick = Callback::from(move |_: MouseEvent| on_toggle.emit(index));
                html! {
                    <button
                        type="button"
                        aria-pressed={option.selected.to_string()}
                        class={classes!(
                            styles::CHIP,
                            if option.selected { styles::CHIP_ON } else { styles::CHIP_OFF },
                            option.exclusive.then_some("border-dashed"),
                        )}
                        {onclick}
                    >
                        {option.label}
                    </button>
                }
            }) }
        </div>
    }
}
