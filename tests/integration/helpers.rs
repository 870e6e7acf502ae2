use lictor::workspace::{Notifier, Step, StepId, Viewport, Workspace};
use std::cell::RefCell;
use std::rc::Rc;

/// Notifier that records every append, shareable with the test body.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    pub appended: Rc<RefCell<Vec<(StepId, String)>>>,
}

impl Notifier for RecordingNotifier {
    fn append(&mut self, id: StepId, title: &str) {
        self.appended.borrow_mut().push((id, title.to_owned()));
    }
}

pub type TestWorkspace = Workspace<RecordingNotifier, fn(&Step) -> u32>;

fn hundred(_: &Step) -> u32 {
    100
}

/// Workspace whose panels measure 100 units wide.
pub fn workspace() -> (TestWorkspace, RecordingNotifier) {
    let notifier = RecordingNotifier::default();
    let ws = Workspace::new(notifier.clone(), hundred as fn(&Step) -> u32, 0);
    (ws, notifier)
}

/// Workspace holding steps `0..count` in arrival order.
pub fn workspace_with(count: u64) -> TestWorkspace {
    let (mut ws, _) = workspace();
    for id in 0..count {
        ws.append_step(id, format!("step {id}"));
    }
    ws
}

pub fn view(scroll_offset: u32, width: u32) -> Viewport {
    Viewport::new(scroll_offset, width)
}

pub fn batch(items: &[(StepId, &str)]) -> Vec<(StepId, String)> {
    items.iter().map(|(id, title)| (*id, (*title).to_owned())).collect()
}
