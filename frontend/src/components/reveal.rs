use yew::prelude::*;

use crate::hooks::entrance::use_entered;
use crate::hooks::reveal::use_reveal;
use crate::motion::Motion;

#[derive(Properties, PartialEq)]
pub struct MotionProps {
    pub motion: Motion,
    #[prop_or(AttrValue::Static("div"))]
    pub tag: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Plays `motion` the first time the element scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &MotionProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());

    html! {
        <@{props.tag.to_string()}
            ref={node}
            class={props.class.clone()}
            style={props.motion.style(revealed)}
        >
            { for props.children.iter() }
        </@>
    }
}

/// Plays `motion` once right after mount.
#[function_component(Entrance)]
pub fn entrance(props: &MotionProps) -> Html {
    let entered = use_entered();

    html! {
        <@{props.tag.to_string()}
            class={props.class.clone()}
            style={props.motion.style(entered)}
        >
            { for props.children.iter() }
        </@>
    }
}
