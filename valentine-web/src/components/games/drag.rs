use yew::prelude::*;

use super::EngineProps;
use crate::dom::element_center;
use crate::game::{DragGame, DropGeometry, GameInput, Point};

#[allow(clippy::cast_precision_loss)]
fn client_point(e: &PointerEvent) -> Point {
    Point::new(e.client_x() as f32, e.client_y() as f32)
}

/// Drag the ring onto the finger. Offsets are measured from where the
/// pointer went down, so the ring follows the pointer without jumping.
#[function_component(DragView)]
pub fn drag_view(p: &EngineProps<DragGame>) -> Html {
    let ring = use_node_ref();
    let goal = use_node_ref();
    let origin = use_mut_ref(|| None::<Point>);

    let offset = p.game.offset();
    let on_down = {
        let origin = origin.clone();
        let placed = p.game.is_won();
        Callback::from(move |e: PointerEvent| {
            if placed {
                return;
            }
            e.prevent_default();
            let at = client_point(&e);
            *origin.borrow_mut() = Some(Point::new(at.x - offset.x, at.y - offset.y));
        })
    };
    let on_move = {
        let origin = origin.clone();
        let cb = p.on_input.clone();
        Callback::from(move |e: PointerEvent| {
            let Some(start) = *origin.borrow() else {
                return;
            };
            let at = client_point(&e);
            cb.emit(GameInput::DragTo(Point::new(at.x - start.x, at.y - start.y)));
        })
    };
    let on_up = {
        let ring = ring.clone();
        let goal = goal.clone();
        let cb = p.on_input.clone();
        Callback::from(move |_: PointerEvent| {
            if origin.borrow_mut().take().is_none() {
                return;
            }
            let geometry = element_center(&ring)
                .zip(element_center(&goal))
                .map(|(object_center, goal_center)| DropGeometry {
                    object_center,
                    goal_center,
                });
            cb.emit(GameInput::Release(geometry));
        })
    };

    let placed = p.game.is_won();
    let goal_glyph = if placed { "💍" } else { "🤚" };
    let ring_class = classes!(
        "ring",
        "text-5xl",
        "select-none",
        "touch-none",
        if p.game.is_dragging() { "cursor-grabbing scale-110" } else { "cursor-grab" },
        placed.then_some("opacity-0"),
    );

    html! {
        <div
            class="drag-game relative h-96 w-full max-w-md mx-auto flex flex-col items-center justify-between py-8"
            onpointermove={on_move}
            onpointerup={on_up.clone()}
            onpointerleave={on_up}
        >
            <p class="font-['Cormorant_Garamond'] italic text-xl text-stone-600">{ "Angathi majhya botat ghal..." }</p>
            <div ref={goal} class={classes!("goal", "text-6xl", placed.then_some("drop-shadow-[0_0_12px_rgba(139,58,58,0.6)]"))}>
                { goal_glyph }
            </div>
            if placed {
                <div class="text-center space-y-1">
                    <p class="font-['Playfair_Display'] text-3xl text-[#8B3A3A]">{ "Ho!" }</p>
                    <p class="font-['Cormorant_Garamond'] italic text-lg">{ "Mi nehmich tujha asel." }</p>
                </div>
            }
            <span
                ref={ring}
                class={ring_class}
                style={format!("transform: translate({:.0}px, {:.0}px);", offset.x, offset.y)}
                onpointerdown={on_down}
            >
                { "💍" }
            </span>
        </div>
    }
}
