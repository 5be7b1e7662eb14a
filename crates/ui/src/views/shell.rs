use dioxus::prelude::*;

use quiz_core::model::{AnswerId, QuizConfig, QuizEvent, QuizPhase, QuizState};

use crate::views::{AdvanceControlView, ScoreSummaryView};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

const OPTION_COUNT: u64 = 4;

// The shell ships no question bank. The option that scores on a question is
// derived from its index, so every run plays out the same way.
fn scoring_option(index: u32) -> AnswerId {
    AnswerId::new(u64::from(index) % OPTION_COUNT)
}

#[component]
pub fn QuizShell() -> Element {
    let config = use_context::<QuizConfig>();
    let mut quiz = use_signal(move || QuizState::new(config));

    let on_event = use_callback(move |event: QuizEvent| {
        quiz.write().apply(event);
    });
    let on_select = use_callback(move |answer: AnswerId| {
        let (index, points_per_question) = {
            let state = quiz.read();
            (state.index(), state.config().points_per_question())
        };
        let awarded = if answer == scoring_option(index) {
            points_per_question
        } else {
            0
        };
        quiz.write().select_answer(answer, awarded);
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<ShellTestHandles>() {
                handles.register(on_event, on_select, quiz);
            }
        }
    }

    let state = quiz.read();
    let phase = state.phase();
    let index = state.index();
    let answer = state.answer();
    let points = state.points();
    let highscore = state.highscore();
    let total_questions = state.config().total_questions();
    let max_possible_points = state.config().max_possible_points();
    let summary = state.score_summary();

    let question_label = format!("Question {} of {total_questions}", index + 1);
    let points_label = format!("Points: {points} / {max_possible_points}");
    let highscore_label = format!("Highscore: {highscore}");

    rsx! {
        header { class: "quiz-header",
            h1 { "Quiz" }
        }
        main { class: "quiz-main",
            match phase {
                QuizPhase::Active => rsx! {
                    QuestionPanel {
                        label: question_label,
                        scoring: scoring_option(index),
                        answer,
                        on_select,
                    }
                    AdvanceControlView { answer, on_event }
                },
                QuizPhase::Finished => rsx! {
                    match summary {
                        Ok(summary) => rsx! {
                            ScoreSummaryView { summary, on_event }
                        },
                        Err(err) => rsx! {
                            p { "{err}" }
                        },
                    }
                },
            }
        }
        footer { class: "quiz-footer",
            span { class: "quiz-footer__item", "{points_label}" }
            span { class: "quiz-footer__item", "{highscore_label}" }
        }
    }
}

#[component]
fn QuestionPanel(
    label: String,
    scoring: AnswerId,
    answer: Option<AnswerId>,
    on_select: EventHandler<AnswerId>,
) -> Element {
    let hint = format!("Option {} scores this round.", scoring.value() + 1);

    rsx! {
        div { class: "question",
            h2 { class: "question__title", "{label}" }
            p { class: "question__hint", "{hint}" }
            div { class: "question__options",
                for option in 0..OPTION_COUNT {
                    OptionButton {
                        option: AnswerId::new(option),
                        selected: answer == Some(AnswerId::new(option)),
                        locked: answer.is_some(),
                        on_select,
                    }
                }
            }
        }
    }
}

#[component]
fn OptionButton(
    option: AnswerId,
    selected: bool,
    locked: bool,
    on_select: EventHandler<AnswerId>,
) -> Element {
    let label = format!("Option {}", option.value() + 1);
    let class = if selected {
        "btn btn-option btn-option--selected"
    } else {
        "btn btn-option"
    };

    rsx! {
        button {
            class: "{class}",
            disabled: locked,
            onclick: move |_| on_select.call(option),
            "{label}"
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct ShellTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizEvent>>>>,
    select: Rc<RefCell<Option<Callback<AnswerId>>>>,
    quiz: Rc<RefCell<Option<Signal<QuizState>>>>,
}

#[cfg(test)]
impl ShellTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<QuizEvent>,
        select: Callback<AnswerId>,
        quiz: Signal<QuizState>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.select.borrow_mut() = Some(select);
        *self.quiz.borrow_mut() = Some(quiz);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizEvent> {
        (*self.dispatch.borrow()).expect("shell dispatch registered")
    }

    pub(crate) fn select(&self) -> Callback<AnswerId> {
        (*self.select.borrow()).expect("shell select registered")
    }

    pub(crate) fn quiz(&self) -> Signal<QuizState> {
        (*self.quiz.borrow()).expect("shell quiz state registered")
    }
}
