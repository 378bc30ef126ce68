//! Named setup steps with status and detail, rendered as a tree.

use std::fmt;
use std::io;

/// Lifecycle status of a tracked step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Pending,
    Running,
    Done,
    Error,
}

impl StepStatus {
    /// Glyph shown in front of the step label.
    pub fn glyph(&self) -> &'static str {
        match self {
            StepStatus::Pending | StepStatus::Running => "○",
            StepStatus::Done | StepStatus::Error => "●",
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StepStatus::Pending => "pending",
            StepStatus::Running => "running",
            StepStatus::Done => "done",
            StepStatus::Error => "error",
        };
        f.write_str(name)
    }
}

/// Decoration applied to each piece of the rendered tree.
///
/// Every method defaults to the undecorated text, so an empty impl renders plain output.
pub trait TreeStyle {
    fn title(&self, title: &str) -> String {
        title.to_string()
    }

    fn guide(&self, guide: &str) -> String {
        guide.to_string()
    }

    fn glyph(&self, status: StepStatus) -> String {
        status.glyph().to_string()
    }

    fn label(&self, _status: StepStatus, label: &str) -> String {
        label.to_string()
    }

    /// `detail` arrives already wrapped in parentheses.
    fn detail(&self, detail: &str) -> String {
        detail.to_string()
    }
}

/// Undecorated text output.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

impl TreeStyle for PlainText {}

/// A single tracked step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub key: String,
    pub label: String,
    pub status: StepStatus,
    pub detail: String,
}

/// Receives a view of the tracker after every mutation.
///
/// Failures are logged and dropped by the tracker; an observer can never
/// abort a run.
pub trait TrackerObserver {
    fn refresh(&mut self, tracker: &StepTracker) -> io::Result<()>;
}

impl<F> TrackerObserver for F
where
    F: FnMut(&StepTracker) -> io::Result<()>,
{
    fn refresh(&mut self, tracker: &StepTracker) -> io::Result<()> {
        self(tracker)
    }
}

/// Ordered list of steps; registration order is display order.
pub struct StepTracker {
    title: String,
    steps: Vec<Step>,
    observer: Option<Box<dyn TrackerObserver>>,
}

impl StepTracker {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), steps: Vec::new(), observer: None }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn get(&self, key: &str) -> Option<&Step> {
        self.steps.iter().find(|step| step.key == key)
    }

    /// Install the observer notified after every mutation, replacing any previous one.
    pub fn attach_refresh(&mut self, observer: impl TrackerObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Register a pending step. A key that is already registered is left untouched.
    pub fn add(&mut self, key: &str, label: &str) {
        if self.get(key).is_some() {
            return;
        }
        self.steps.push(Step {
            key: key.to_string(),
            label: label.to_string(),
            status: StepStatus::Pending,
            detail: String::new(),
        });
        self.notify();
    }

    pub fn start(&mut self, key: &str, detail: &str) {
        self.update(key, StepStatus::Running, detail);
    }

    pub fn complete(&mut self, key: &str, detail: &str) {
        self.update(key, StepStatus::Done, detail);
    }

    pub fn error(&mut self, key: &str, detail: &str) {
        self.update(key, StepStatus::Error, detail);
    }

    // Unknown keys are appended rather than rejected, labelled with the key itself.
    fn update(&mut self, key: &str, status: StepStatus, detail: &str) {
        match self.steps.iter_mut().find(|step| step.key == key) {
            Some(step) => {
                step.status = status;
                if !detail.is_empty() {
                    step.detail = detail.to_string();
                }
            }
            None => {
                tracing::debug!(step = key, %status, "updating unregistered step; appending it");
                self.steps.push(Step {
                    key: key.to_string(),
                    label: key.to_string(),
                    status,
                    detail: detail.to_string(),
                });
            }
        }
        self.notify();
    }

    fn notify(&mut self) {
        if let Some(mut observer) = self.observer.take() {
            if let Err(err) = observer.refresh(self) {
                tracing::debug!(error = %err, "step tracker refresh failed");
            }
            self.observer = Some(observer);
        }
    }

    /// Render the tracker as plain text: the title as root and one child per step.
    pub fn render(&self) -> String {
        self.render_with(&PlainText)
    }

    /// Render the tree, decorating each piece through `style`.
    pub fn render_with<S: TreeStyle + ?Sized>(&self, style: &S) -> String {
        let mut out = style.title(&self.title);
        out.push('\n');

        let last = self.steps.len().saturating_sub(1);
        for (index, step) in self.steps.iter().enumerate() {
            let guide = if index == last { "└── " } else { "├── " };
            out.push_str(&style.guide(guide));
            out.push_str(&style.glyph(step.status));
            out.push(' ');
            out.push_str(&style.label(step.status, &step.label));

            let detail = step.detail.trim();
            if !detail.is_empty() {
                out.push(' ');
                out.push_str(&style.detail(&format!("({})", detail)));
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Debug for StepTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepTracker")
            .field("title", &self.title)
            .field("steps", &self.steps)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn duplicate_add_keeps_single_pending_step() {
        let mut tracker = StepTracker::new("Setup");
        tracker.add("dirs", "Create directories");
        tracker.add("dirs", "Something else");

        assert_eq!(tracker.steps().len(), 1);
        let step = tracker.get("dirs").unwrap();
        assert_eq!(step.status, StepStatus::Pending);
        assert_eq!(step.label, "Create directories");
    }

    #[test]
    fn update_on_unknown_key_appends_step() {
        let cases: [(StepStatus, fn(&mut StepTracker, &str, &str)); 3] = [
            (StepStatus::Running, StepTracker::start),
            (StepStatus::Done, StepTracker::complete),
            (StepStatus::Error, StepTracker::error),
        ];
        for (status, apply) in cases {
            let mut tracker = StepTracker::new("Setup");
            apply(&mut tracker, "ghost", "detail");

            assert_eq!(tracker.steps().len(), 1);
            let step = tracker.get("ghost").unwrap();
            assert_eq!(step.status, status);
            assert_eq!(step.label, "ghost");
            assert_eq!(step.detail, "detail");
        }
    }

    #[test]
    fn empty_detail_keeps_previous_detail() {
        let mut tracker = StepTracker::new("Setup");
        tracker.add("script", "Generate script");
        tracker.start("script", "writing");
        tracker.complete("script", "");

        let step = tracker.get("script").unwrap();
        assert_eq!(step.status, StepStatus::Done);
        assert_eq!(step.detail, "writing");
    }

    #[test]
    fn observer_sees_every_mutation() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut tracker = StepTracker::new("Setup");
        tracker.attach_refresh(move |t: &StepTracker| -> io::Result<()> {
            sink.borrow_mut().push(t.steps().iter().map(|s| s.status).collect::<Vec<_>>());
            Ok(())
        });

        tracker.add("a", "A");
        tracker.add("a", "A again");
        tracker.start("a", "");
        tracker.complete("a", "ok");

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[2], vec![StepStatus::Done]);
    }

    #[test]
    fn failing_observer_does_not_break_tracker() {
        let mut tracker = StepTracker::new("Setup");
        tracker.attach_refresh(|_: &StepTracker| -> io::Result<()> {
            Err(io::Error::other("display gone"))
        });

        tracker.add("a", "A");
        tracker.error("a", "boom");

        assert_eq!(tracker.get("a").unwrap().status, StepStatus::Error);
        assert_eq!(tracker.get("a").unwrap().detail, "boom");
    }

    #[test]
    fn render_lists_steps_in_registration_order() {
        let mut tracker = StepTracker::new("Initializing Review Kit");
        tracker.add("dirs", "Create directory structure");
        tracker.add("script", "Generate SH script");
        tracker.add("prompt", "Generate prompt for copilot");
        tracker.complete("dirs", "  ready  ");
        tracker.error("script", "permission denied");

        let rendered = tracker.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Initializing Review Kit"));
        assert!(lines[1].contains("├── ") && lines[1].contains("●"));
        assert!(lines[1].contains("Create directory structure") && lines[1].contains("(ready)"));
        assert!(lines[2].contains("Generate SH script") && lines[2].contains("(permission denied)"));
        assert_eq!(lines[1], "├── ● Create directory structure (ready)");
        assert_eq!(lines[3], "└── ○ Generate prompt for copilot");
        assert!(!rendered.contains('\x1b'));
    }

    struct Bracketed;

    impl TreeStyle for Bracketed {
        fn label(&self, status: StepStatus, label: &str) -> String {
            format!("[{}:{}]", status, label)
        }
    }

    #[test]
    fn render_with_routes_pieces_through_style() {
        let mut tracker = StepTracker::new("Setup");
        tracker.add("a", "A");
        tracker.start("a", "");

        assert_eq!(tracker.render_with(&Bracketed), "Setup\n└── ○ [running:A]\n");
    }
}
