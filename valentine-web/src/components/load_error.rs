use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub message: AttrValue,
}

/// Shown instead of the app when the bundled day catalog does not validate.
#[function_component(LoadError)]
pub fn load_error(p: &Props) -> Html {
    html! {
        <div class="min-h-screen flex items-center justify-center bg-[#F7F5F0] p-8" role="alert">
            <div class="max-w-md text-center space-y-4">
                <h1 class="font-['Playfair_Display'] text-3xl text-[#8B3A3A]">{ "Kahitari chuklay..." }</h1>
                <p class="font-mono text-sm text-stone-600 break-words">{ p.message.clone() }</p>
            </div>
        </div>
    }
}
