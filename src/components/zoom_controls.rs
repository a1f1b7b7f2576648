use yew::prelude::*;

use crate::model::ZoomLevel;

#[derive(Properties, PartialEq, Clone)]
pub struct ZoomControlsProps {
    pub level: ZoomLevel,
    pub can_increase: bool,
    pub can_decrease: bool,
    pub on_increase: Callback<()>,
    pub on_decrease: Callback<()>,
    pub on_reset: Callback<()>,
}

#[function_component(ZoomControls)]
pub fn zoom_controls(props: &ZoomControlsProps) -> Html {
    let zi = {
        let cb = props.on_increase.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let zo = {
        let cb = props.on_decrease.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let zr = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div class="zoom-controls">
        <button id="zoomOut" title="Zoom out (Ctrl -)" onclick={zo} disabled={!props.can_decrease}> {"−"} </button>
        <span id="zoomLevel" class="zoom-level">{ props.level.label() }</span>
        <button id="zoomIn" title="Zoom in (Ctrl =)" onclick={zi} disabled={!props.can_increase}> {"+"} </button>
        <button id="zoomReset" title="Reset zoom (Ctrl 0)" onclick={zr}> {"Reset"} </button>
    </div>}
}
