use yew::prelude::*;

use crate::dom::WindowScrollListener;
use crate::observer::Subject;

/// Page scroll offset shared with every component below [`ScrollProvider`].
#[derive(Clone, PartialEq)]
pub struct ScrollContext {
    pub offset: Subject<f64>,
}

#[derive(Properties, PartialEq)]
pub struct ScrollProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Owns the single window scroll listener of the page.
#[function_component(ScrollProvider)]
pub fn scroll_provider(props: &ScrollProviderProps) -> Html {
    let context = use_state(|| ScrollContext {
        offset: Subject::new(),
    });

    {
        let offset = context.offset.clone();
        use_effect_with_deps(
            move |_| {
                let listener = WindowScrollListener::attach(offset);
                move || drop(listener)
            },
            (),
        );
    }

    html! {
        <ContextProvider<ScrollContext> context={(*context).clone()}>
            { for props.children.iter() }
        </ContextProvider<ScrollContext>>
    }
}

/// Re-renders the caller whenever `map(scroll offset)` changes. Outside a
/// [`ScrollProvider`] the offset stays at 0.
#[hook]
pub fn use_scroll_map<T>(map: fn(f64) -> T) -> T
where
    T: Clone + PartialEq + 'static,
{
    let context = use_context::<ScrollContext>();
    let initial = context
        .as_ref()
        .and_then(|context| context.offset.current())
        .unwrap_or(0.0);
    let value = use_state_eq(move || map(initial));

    {
        let value = value.clone();
        use_effect_with_deps(
            move |context: &Option<ScrollContext>| {
                let subscription = context.as_ref().map(|context| {
                    if let Some(current) = context.offset.current() {
                        value.set(map(current));
                    }
                    context.offset.subscribe(move |offset| value.set(map(*offset)))
                });
                move || drop(subscription)
            },
            context,
        );
    }

    (*value).clone()
}
