use super::*;
use crate::engine::EngineHost;
use crate::foundation::core::{DisplayMode, Visibility};

#[derive(Default)]
struct CountingHost {
    redraws: u32,
}

impl EngineHost for CountingHost {
    fn request_redraw(&mut self) {
        self.redraws += 1;
    }

    fn subscribe_time_updates(&mut self) {}

    fn unsubscribe_time_updates(&mut self) {}
}

#[test]
fn continuation_table_covers_all_four_states() {
    use DisplayMode::*;
    use Visibility::*;

    assert!(RedrawScheduler::should_continue(Interactive, Visible));
    assert!(!RedrawScheduler::should_continue(Interactive, Hidden));
    assert!(!RedrawScheduler::should_continue(Ambient, Visible));
    assert!(!RedrawScheduler::should_continue(Ambient, Hidden));
}

#[test]
fn frame_completed_requests_only_while_animating() {
    let mut sched = RedrawScheduler::new();
    let mut host = CountingHost::default();

    assert!(sched.frame_completed(DisplayMode::Interactive, Visibility::Visible, &mut host));
    assert_eq!(host.redraws, 1);

    assert!(!sched.frame_completed(DisplayMode::Ambient, Visibility::Visible, &mut host));
    assert!(!sched.frame_completed(DisplayMode::Interactive, Visibility::Hidden, &mut host));
    assert!(!sched.frame_completed(DisplayMode::Ambient, Visibility::Hidden, &mut host));
    assert_eq!(host.redraws, 1);

    assert_eq!(sched.frames_scheduled(), 1);
}
