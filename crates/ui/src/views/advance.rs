use dioxus::prelude::*;

use quiz_core::model::{AnswerId, QuizEvent};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn AdvanceControlView(answer: Option<AnswerId>, on_event: EventHandler<QuizEvent>) -> Element {
    // Hooks run on every render, including the unanswered one.
    let on_advance = use_callback(move |()| on_event.call(QuizEvent::NextQuestion));

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if answer.is_some() && !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<AdvanceTestHandles>() {
                handles.register(on_advance);
            }
        }
    }

    // No answer picked yet means no way forward.
    if answer.is_none() {
        return rsx! {};
    }

    rsx! {
        button {
            class: "btn btn-ui",
            onclick: move |_| on_advance.call(()),
            "Next"
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct AdvanceTestHandles {
    advance: Rc<RefCell<Option<Callback<()>>>>,
}

#[cfg(test)]
impl AdvanceTestHandles {
    pub(crate) fn register(&self, advance: Callback<()>) {
        *self.advance.borrow_mut() = Some(advance);
    }

    pub(crate) fn advance(&self) -> Callback<()> {
        (*self.advance.borrow()).expect("advance control registered")
    }

    pub(crate) fn try_advance(&self) -> Option<Callback<()>> {
        *self.advance.borrow()
    }
}
