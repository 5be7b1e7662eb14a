use std::cell::RefCell;
use std::rc::Rc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::{AnswerId, QuizConfig, QuizEvent, ScoreSummary};

use crate::views::advance::AdvanceTestHandles;
use crate::views::score_summary::ScoreSummaryTestHandles;
use crate::views::shell::ShellTestHandles;
use crate::views::{AdvanceControlView, QuizShell, ScoreSummaryView};

/// Sink for events a view under test dispatches.
#[derive(Clone, Default)]
pub struct RecordedEvents {
    events: Rc<RefCell<Vec<QuizEvent>>>,
}

impl RecordedEvents {
    pub fn record(&self, event: QuizEvent) {
        self.events.borrow_mut().push(event);
    }

    pub fn snapshot(&self) -> Vec<QuizEvent> {
        self.events.borrow().clone()
    }

    pub fn tags(&self) -> Vec<&'static str> {
        self.events.borrow().iter().map(|event| event.tag()).collect()
    }
}

#[derive(Clone, PartialEq)]
pub enum ViewKind {
    Score(ScoreSummary),
    Advance(Option<AnswerId>),
    Shell,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    view: ViewKind,
    config: QuizConfig,
    events: RecordedEvents,
    score_handles: ScoreSummaryTestHandles,
    advance_handles: AdvanceTestHandles,
    shell_handles: ShellTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    use_context_provider(|| props.config);
    use_context_provider(|| props.score_handles.clone());
    use_context_provider(|| props.advance_handles.clone());
    use_context_provider(|| props.shell_handles.clone());

    let events = props.events.clone();
    match props.view.clone() {
        ViewKind::Score(summary) => rsx! {
            ScoreSummaryView { summary, on_event: move |event| events.record(event) }
        },
        ViewKind::Advance(answer) => rsx! {
            AdvanceControlView { answer, on_event: move |event| events.record(event) }
        },
        ViewKind::Shell => rsx! { QuizShell {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub events: RecordedEvents,
    pub score_handles: ScoreSummaryTestHandles,
    pub advance_handles: AdvanceTestHandles,
    pub shell_handles: ShellTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn drive(&mut self) {
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Three questions worth ten points each; enough to finish a run quickly.
pub fn demo_config() -> QuizConfig {
    QuizConfig::new(3, 10).expect("valid quiz config")
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let events = RecordedEvents::default();
    let score_handles = ScoreSummaryTestHandles::default();
    let advance_handles = AdvanceTestHandles::default();
    let shell_handles = ShellTestHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewHarnessRoot,
        ViewHarnessProps {
            view,
            config: demo_config(),
            events: events.clone(),
            score_handles: score_handles.clone(),
            advance_handles: advance_handles.clone(),
            shell_handles: shell_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        events,
        score_handles,
        advance_handles,
        shell_handles,
    }
}
