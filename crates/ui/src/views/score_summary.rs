use dioxus::prelude::*;

use quiz_core::model::{QuizEvent, ScoreSummary};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn ScoreSummaryView(summary: ScoreSummary, on_event: EventHandler<QuizEvent>) -> Element {
    let on_restart = use_callback(move |()| on_event.call(QuizEvent::Restart));

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<ScoreSummaryTestHandles>() {
                handles.register(on_restart);
            }
        }
    }

    let points = summary.points();
    let max_possible_points = summary.max_possible_points();
    let highscore = summary.highscore();
    let percentage = summary.percentage();
    let emoji = summary.tier().emoji();

    rsx! {
        p { class: "result",
            span { "🎉 Congratulation! " }
            br {}
            span { "{emoji} " }
            "You scored "
            strong { "{points}" }
            " out of "
            strong { "{max_possible_points}" }
            " ({percentage}%)"
        }
        p { class: "highscore", "(Highscore: {highscore} points)" }

        button {
            class: "btn btn-ui",
            onclick: move |_| on_restart.call(()),
            "Restart Quiz"
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct ScoreSummaryTestHandles {
    restart: Rc<RefCell<Option<Callback<()>>>>,
}

#[cfg(test)]
impl ScoreSummaryTestHandles {
    pub(crate) fn register(&self, restart: Callback<()>) {
        *self.restart.borrow_mut() = Some(restart);
    }

    pub(crate) fn restart(&self) -> Callback<()> {
        (*self.restart.borrow()).expect("restart control registered")
    }
}
